//! Item visibility predicate and reconciliation across both render surfaces.

use listing_host::{FilterAxis, ItemTags, PageSurface, ViewMode};

use crate::model::{FilterSelection, PanelFlags};

/// Whether an item is shown under the current panel flags and filter selection.
pub fn should_be_visible(tags: &ItemTags, flags: &PanelFlags, filters: &FilterSelection) -> bool {
    flags.permits(tags.group)
        && filters.admits(FilterAxis::Kind, &tags.kind)
        && filters.admits(FilterAxis::Topic, &tags.topic)
}

/// Shown/hidden counts for one render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SurfaceTally {
    pub shown: usize,
    pub hidden: usize,
}

/// Result of one reconciliation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReconcileReport {
    pub cards: SurfaceTally,
    pub simple: SurfaceTally,
}

impl ReconcileReport {
    pub fn tally(&self, view: ViewMode) -> SurfaceTally {
        match view {
            ViewMode::Cards => self.cards,
            ViewMode::Simple => self.simple,
        }
    }
}

/// Re-evaluates every item on both surfaces and applies the result. Repeated calls with the same
/// inputs leave the page unchanged.
pub fn reconcile<P: PageSurface + ?Sized>(
    surface: &P,
    flags: &PanelFlags,
    filters: &FilterSelection,
) -> ReconcileReport {
    let mut report = ReconcileReport::default();
    for view in ViewMode::ALL {
        let visible: Vec<bool> = surface
            .items(view)
            .iter()
            .map(|tags| should_be_visible(tags, flags, filters))
            .collect();
        let shown = visible.iter().filter(|visible| **visible).count();
        let tally = SurfaceTally {
            shown,
            hidden: visible.len() - shown,
        };
        match view {
            ViewMode::Cards => report.cards = tally,
            ViewMode::Simple => report.simple = tally,
        }
        surface.apply_item_visibility(view, &visible);
    }
    report
}
