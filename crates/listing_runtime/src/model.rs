use listing_host::{FilterAxis, ItemGroup, PanelKind, ViewMode};

/// Filter value that matches every item on its axis.
pub const FILTER_ALL: &str = "all";

/// Persisted visibility of the toggleable panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelFlags {
    pub catalogs_visible: bool,
    pub videos_visible: bool,
}

impl Default for PanelFlags {
    fn default() -> Self {
        Self {
            catalogs_visible: true,
            videos_visible: true,
        }
    }
}

impl PanelFlags {
    pub fn get(&self, panel: PanelKind) -> bool {
        match panel {
            PanelKind::Catalogs => self.catalogs_visible,
            PanelKind::Videos => self.videos_visible,
        }
    }

    pub fn set(&mut self, panel: PanelKind, visible: bool) {
        match panel {
            PanelKind::Catalogs => self.catalogs_visible = visible,
            PanelKind::Videos => self.videos_visible = visible,
        }
    }

    /// Whether items of `group` may be shown. Ungrouped items are never held back by a panel.
    pub fn permits(&self, group: Option<ItemGroup>) -> bool {
        PanelKind::ALL
            .into_iter()
            .find(|panel| Some(panel.group()) == group)
            .map_or(true, |panel| self.get(panel))
    }
}

/// Active value of each single-select filter axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterSelection {
    pub kind: String,
    pub topic: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            kind: FILTER_ALL.to_string(),
            topic: FILTER_ALL.to_string(),
        }
    }
}

impl FilterSelection {
    pub fn get(&self, axis: FilterAxis) -> &str {
        match axis {
            FilterAxis::Kind => &self.kind,
            FilterAxis::Topic => &self.topic,
        }
    }

    pub fn set(&mut self, axis: FilterAxis, value: impl Into<String>) {
        let value = value.into();
        match axis {
            FilterAxis::Kind => self.kind = value,
            FilterAxis::Topic => self.topic = value,
        }
    }

    /// Whether `tag` passes the filter on `axis`.
    pub fn admits(&self, axis: FilterAxis, tag: &str) -> bool {
        let active = self.get(axis);
        active == FILTER_ALL || active == tag
    }
}

/// File count and total size over the unique download addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizeSummary {
    pub item_count: usize,
    pub total_bytes: u64,
}

/// Whole mutable state of the listing page, owned by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingState {
    pub flags: PanelFlags,
    pub filters: FilterSelection,
    /// `None` until the startup forces the card surface.
    pub view_mode: Option<ViewMode>,
    pub admin_unlocked: bool,
}
