//! Human-readable size and file-count text for the page locale.

use crate::model::SizeSummary;

const SIZE_UNITS: [&str; 5] = ["Б", "КБ", "МБ", "ГБ", "ТБ"];
const SUMMARY_PREFIX: &str = "Доступно";
const SUMMARY_SEPARATOR: &str = " • ";

/// Formats a byte count with binary unit steps and a comma decimal separator.
///
/// Values of ten or more in the chosen unit, and unscaled byte counts, have no fraction digit.
pub fn format_bytes(bytes: f64) -> String {
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let digits = if value >= 10.0 || unit == 0 { 0 } else { 1 };
    format!(
        "{} {}",
        to_fixed(value, digits).replace('.', ","),
        SIZE_UNITS[unit]
    )
}

// Ties round up, as the page's number formatting does.
fn to_fixed(value: f64, digits: usize) -> String {
    let scale = 10_f64.powi(digits as i32);
    let rounded = (value * scale).round() / scale;
    format!("{rounded:.digits$}")
}

/// Noun form agreeing with `count`: "файл", "файла" or "файлов".
pub fn files_word(count: usize) -> &'static str {
    let last = count % 10;
    let last_two = count % 100;
    if last == 1 && last_two != 11 {
        "файл"
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        "файла"
    } else {
        "файлов"
    }
}

/// Summary line, with the total size appended only when it is known to be non-zero.
pub fn summary_text(summary: &SizeSummary) -> String {
    let mut text = format!(
        "{SUMMARY_PREFIX} {} {}",
        summary.item_count,
        files_word(summary.item_count)
    );
    if summary.total_bytes > 0 {
        text.push_str(SUMMARY_SEPARATOR);
        text.push_str(&format_bytes(summary.total_bytes as f64));
    }
    text
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn bytes_stay_unscaled_below_one_kibibyte() {
        assert_eq!(format_bytes(0.0), "0 Б");
        assert_eq!(format_bytes(1023.0), "1023 Б");
    }

    #[test]
    fn small_scaled_values_keep_one_comma_decimal() {
        assert_eq!(format_bytes(1024.0), "1,0 КБ");
        assert_eq!(format_bytes(1536.0), "1,5 КБ");
        assert_eq!(format_bytes(5.25 * 1024.0 * 1024.0 * 1024.0), "5,3 ГБ");
    }

    #[test]
    fn values_of_ten_or_more_drop_the_fraction() {
        assert_eq!(format_bytes(10.0 * 1024.0 * 1024.0), "10 МБ");
        assert_eq!(format_bytes(10.5 * 1024.0), "11 КБ");
        assert_eq!(format_bytes(1023.0 * 1024.0), "1023 КБ");
    }

    #[test]
    fn largest_unit_absorbs_overflow() {
        let two_thousand_tib = 2048.0 * 1024_f64.powi(4);
        assert_eq!(format_bytes(two_thousand_tib), "2048 ТБ");
    }

    #[test]
    fn file_word_follows_three_way_plural_rule() {
        let cases = [
            (0, "файлов"),
            (1, "файл"),
            (2, "файла"),
            (4, "файла"),
            (5, "файлов"),
            (11, "файлов"),
            (12, "файлов"),
            (14, "файлов"),
            (21, "файл"),
            (22, "файла"),
            (111, "файлов"),
            (101, "файл"),
        ];
        for (count, expected) in cases {
            assert_eq!(files_word(count), expected, "count {count}");
        }
    }

    #[test]
    fn summary_omits_size_when_total_is_zero() {
        assert_eq!(
            summary_text(&SizeSummary {
                item_count: 3,
                total_bytes: 0,
            }),
            "Доступно 3 файла"
        );
        assert_eq!(
            summary_text(&SizeSummary {
                item_count: 21,
                total_bytes: 1536,
            }),
            "Доступно 21 файл • 1,5 КБ"
        );
    }
}
