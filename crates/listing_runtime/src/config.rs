//! Runtime configuration, optionally supplied by the page as inline JSON.

use leptos::logging;
use listing_host::{PageElement, PageSurface};
use serde::{Deserialize, Serialize};

/// Storage keys of the persisted panel flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub catalogs: String,
    pub videos: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            catalogs: "zf_panel_catalogs_visible".to_string(),
            videos: "zf_panel_videos_visible".to_string(),
        }
    }
}

/// Texts and passphrase of the admin reveal flow.
///
/// The passphrase ships inside the page and gates nothing but a UI panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    pub passphrase: String,
    pub prompt: String,
    pub unlocked_message: String,
    pub rejected_message: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            passphrase: "310172431".to_string(),
            prompt: "Введите пароль администратора:".to_string(),
            unlocked_message: "Админ-панель разблокирована. Пролистай страницу ниже.".to_string(),
            rejected_message: "Неверный пароль.".to_string(),
        }
    }
}

/// Labels of the mode toggle button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModeLabels {
    /// Shown while the card surface is active.
    pub switch_to_simple: String,
    /// Shown while the simple surface is active.
    pub switch_to_cards: String,
}

impl Default for ModeLabels {
    fn default() -> Self {
        Self {
            switch_to_simple: "☰ Упрощённый вид".to_string(),
            switch_to_cards: "⬅ Полный вид".to_string(),
        }
    }
}

/// Complete listing configuration. Every field falls back to the shipped page defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListingConfig {
    pub storage: StorageKeys,
    pub admin: AdminConfig,
    pub labels: ModeLabels,
}

impl ListingConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns an error when `raw` is not valid configuration JSON.
    pub fn from_json(raw: &str) -> Result<Self, String> {
        serde_json::from_str(raw).map_err(|e| e.to_string())
    }

    /// Reads the inline configuration block from the page, falling back to defaults when it is
    /// absent, blank or malformed.
    pub fn load<P: PageSurface + ?Sized>(surface: &P) -> Self {
        let Some(raw) = surface.text(PageElement::Config) else {
            return Self::default();
        };
        if raw.trim().is_empty() {
            return Self::default();
        }
        match Self::from_json(&raw) {
            Ok(config) => config,
            Err(err) => {
                logging::warn!("listing config ignored: {err}");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use listing_host::MemoryPageSurface;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_json_keeps_defaults_for_missing_fields() {
        let config =
            ListingConfig::from_json(r#"{"admin":{"passphrase":"open"}}"#).expect("parse config");
        assert_eq!(config.admin.passphrase, "open");
        assert_eq!(config.admin.prompt, AdminConfig::default().prompt);
        assert_eq!(config.storage, StorageKeys::default());
    }

    #[test]
    fn load_falls_back_when_block_is_missing_or_malformed() {
        let missing = MemoryPageSurface::default();
        assert_eq!(ListingConfig::load(&missing), ListingConfig::default());

        let malformed =
            MemoryPageSurface::default().with_element_text(PageElement::Config, "{not json");
        assert_eq!(ListingConfig::load(&malformed), ListingConfig::default());
    }

    #[test]
    fn load_reads_inline_block() {
        let surface = MemoryPageSurface::default().with_element_text(
            PageElement::Config,
            r#"{"storage":{"videos":"custom_videos"}}"#,
        );
        let config = ListingConfig::load(&surface);
        assert_eq!(config.storage.videos, "custom_videos");
        assert_eq!(config.storage.catalogs, "zf_panel_catalogs_visible");
    }
}
