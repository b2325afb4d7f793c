//! Typed page roles and item tags shared by runtime and browser adapters.

use std::{fmt, str::FromStr};

/// Selects which of the two alternate render surfaces is displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewMode {
    /// Detailed card layout.
    Cards,
    /// Simplified row layout.
    Simple,
}

impl ViewMode {
    /// Both render surfaces, in reconciliation order.
    pub const ALL: [Self; 2] = [Self::Cards, Self::Simple];

    /// Stable token used by page commands (`chooseMode('simple')`).
    pub fn token(self) -> &'static str {
        match self {
            Self::Cards => "cards",
            Self::Simple => "simple",
        }
    }

    /// CSS selector matching the item elements of this surface.
    pub fn item_selector(self) -> &'static str {
        match self {
            Self::Cards => ".file-card[data-kind]",
            Self::Simple => ".simple-row[data-kind]",
        }
    }

    /// The opposite surface.
    pub fn other(self) -> Self {
        match self {
            Self::Cards => Self::Simple,
            Self::Simple => Self::Cards,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "cards" => Ok(Self::Cards),
            "simple" => Ok(Self::Simple),
            other => Err(format!("unknown view mode `{other}`")),
        }
    }
}

/// Page section whose member items can be hidden en masse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    /// Catalog references.
    Catalogs,
    /// Video references.
    Videos,
}

impl PanelKind {
    /// Both panels.
    pub const ALL: [Self; 2] = [Self::Catalogs, Self::Videos];

    /// Element id of the checkbox controlling this panel.
    pub fn toggle_id(self) -> &'static str {
        match self {
            Self::Catalogs => "toggle-catalogs",
            Self::Videos => "toggle-videos",
        }
    }

    /// Item group governed by this panel.
    pub fn group(self) -> ItemGroup {
        match self {
            Self::Catalogs => ItemGroup::Catalog,
            Self::Videos => ItemGroup::Video,
        }
    }
}

/// Single-select filter button group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterAxis {
    /// Category filter (`data-kind`).
    Kind,
    /// Subcategory filter (`data-topic`).
    Topic,
}

impl FilterAxis {
    /// Both axes.
    pub const ALL: [Self; 2] = [Self::Kind, Self::Topic];

    /// Element id of the button group container.
    pub fn container_id(self) -> &'static str {
        match self {
            Self::Kind => "kind-filters",
            Self::Topic => "topic-filters",
        }
    }

    /// Attribute carrying the tag value on buttons and items.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Kind => "data-kind",
            Self::Topic => "data-topic",
        }
    }
}

/// Panel membership of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemGroup {
    /// Member of the catalogs panel.
    Catalog,
    /// Member of the videos panel.
    Video,
}

impl ItemGroup {
    /// Parses a `data-group` value case-insensitively. Unknown values mean "no group".
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "catalog" => Some(Self::Catalog),
            "video" => Some(Self::Video),
            _ => None,
        }
    }
}

/// Immutable category tags of one listed item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ItemTags {
    /// Lowercased `data-kind`, empty when absent.
    pub kind: String,
    /// Lowercased `data-topic`, empty when absent.
    pub topic: String,
    /// Parsed `data-group`.
    pub group: Option<ItemGroup>,
}

impl ItemTags {
    /// Builds tags from raw attribute values, normalizing case and absence.
    pub fn from_attributes(kind: Option<&str>, topic: Option<&str>, group: Option<&str>) -> Self {
        Self {
            kind: kind.unwrap_or_default().to_lowercase(),
            topic: topic.unwrap_or_default().to_lowercase(),
            group: group.and_then(ItemGroup::parse),
        }
    }
}

/// One download link element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadLink {
    /// Resolved resource address; the de-duplication key.
    pub href: String,
    /// Raw `data-size` attribute, if any.
    pub size_hint: Option<String>,
}

impl DownloadLink {
    /// Builds a link with an optional inline size hint.
    pub fn new(href: impl Into<String>, size_hint: Option<&str>) -> Self {
        Self {
            href: href.into(),
            size_hint: size_hint.map(str::to_string),
        }
    }
}

/// Optional page elements addressed by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageElement {
    /// Footer year placeholder.
    Year,
    /// File count and size summary target.
    FilesInfo,
    /// Container of a render surface.
    Surface(ViewMode),
    /// Button switching render surfaces; its text is the mode label.
    ModeToggleButton,
    /// One-time overlay asking the visitor to pick a render surface.
    ModeChooser,
    /// Hidden admin panel.
    AdminPanel,
    /// Inline JSON configuration block.
    Config,
}

impl PageElement {
    /// Element id in the page document.
    pub fn id(self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::FilesInfo => "files-info",
            Self::Surface(ViewMode::Cards) => "cards-view",
            Self::Surface(ViewMode::Simple) => "simple-view",
            Self::ModeToggleButton => "simple-toggle-btn",
            Self::ModeChooser => "mode-chooser",
            Self::AdminPanel => "admin-panel",
            Self::Config => "listing-config",
        }
    }
}

/// Inline `display` value applied to an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Stylesheet default (`display: ""`).
    #[default]
    Default,
    /// Forced block layout.
    Block,
    /// Hidden (`display: none`).
    Hidden,
}

impl Display {
    /// Value written to the inline `display` style property.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Block => "block",
            Self::Hidden => "none",
        }
    }

    /// `Default` for visible items, `Hidden` otherwise.
    pub fn for_visibility(visible: bool) -> Self {
        if visible {
            Self::Default
        } else {
            Self::Hidden
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn view_mode_tokens_parse_and_reject_unknown() {
        assert_eq!("cards".parse::<ViewMode>(), Ok(ViewMode::Cards));
        assert_eq!(" simple ".parse::<ViewMode>(), Ok(ViewMode::Simple));
        assert!("table".parse::<ViewMode>().is_err());
        assert_eq!(ViewMode::Cards.other(), ViewMode::Simple);
    }

    #[test]
    fn item_tags_normalize_case_and_absence() {
        let tags = ItemTags::from_attributes(Some("PDF"), None, Some("Catalog"));
        assert_eq!(
            tags,
            ItemTags {
                kind: "pdf".to_string(),
                topic: String::new(),
                group: Some(ItemGroup::Catalog),
            }
        );
        assert_eq!(ItemGroup::parse("audio"), None);
    }

    #[test]
    fn element_ids_match_page_markup() {
        assert_eq!(PageElement::Surface(ViewMode::Simple).id(), "simple-view");
        assert_eq!(PageElement::FilesInfo.id(), "files-info");
        assert_eq!(PanelKind::Videos.toggle_id(), "toggle-videos");
        assert_eq!(FilterAxis::Topic.attribute(), "data-topic");
    }

    #[test]
    fn each_panel_governs_its_own_group() {
        assert_eq!(PanelKind::Catalogs.group(), ItemGroup::Catalog);
        assert_eq!(PanelKind::Videos.group(), ItemGroup::Video);
    }
}
