use std::{cell::RefCell, rc::Rc};

use leptos::{logging, spawn_local};
use listing_host::{KeyValueStore, MetadataProbe, PageEventSource, PageSurface};
use listing_runtime::{summary_text, update_files_info, ListingConfig, ListingController};

/// Starts the size summary in the background. The page stays interactive while probes run.
pub fn spawn_files_summary<P, M>(surface: P, probe: M)
where
    P: PageSurface + 'static,
    M: MetadataProbe + 'static,
{
    spawn_local(async move {
        if let Some(summary) = update_files_info(&surface, &probe).await {
            logging::log!("files summary: {}", summary_text(&summary));
        }
    });
}

/// Loads configuration, starts the listing controller and routes page events to it.
pub fn boot<P, S, E>(surface: P, store: S, events: &E) -> Rc<RefCell<ListingController<P, S>>>
where
    P: PageSurface + 'static,
    S: KeyValueStore + 'static,
    E: PageEventSource + ?Sized,
{
    let config = ListingConfig::load(&surface);
    let mut controller = ListingController::new(surface, store, config);
    controller.start();

    if let Some(report) = controller.last_reconcile() {
        logging::log!(
            "listing ready: {} cards shown, {} rows shown",
            report.cards.shown,
            report.simple.shown
        );
    }
    controller.attach(events)
}

#[cfg(test)]
mod tests {
    use listing_host::{
        Display, FilterAxis, ItemTags, MemoryEventSource, MemoryKeyValueStore, MemoryPageSurface,
        PageElement, PageEvent, PanelKind, ViewMode,
    };
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn boot_reads_inline_config_and_wires_events() {
        let surface = MemoryPageSurface::default()
            .with_element_text(
                PageElement::Config,
                r#"{"storage":{"catalogs":"custom_catalogs"},"labels":{"switch_to_cards":"Back"}}"#,
            )
            .with_element(PageElement::ModeToggleButton)
            .with_element(PageElement::ModeChooser)
            .with_checkbox(PanelKind::Catalogs, true)
            .with_listed_item(ItemTags::from_attributes(Some("pdf"), None, Some("catalog")));
        let store = MemoryKeyValueStore::with_entries([("custom_catalogs", "0")]);
        let events = MemoryEventSource::default();

        let controller = boot(surface.clone(), store.clone(), &events);

        assert_eq!(events.subscriber_count(), 1);
        assert_eq!(surface.checked(PanelKind::Catalogs), Some(false));
        assert_eq!(surface.visible_items(ViewMode::Cards), vec![false]);

        events.emit(PageEvent::ModeChosen("simple".to_string()));
        assert_eq!(surface.text(PageElement::ModeToggleButton), Some("Back".to_string()));
        assert_eq!(surface.display(PageElement::ModeChooser), Some(Display::Hidden));

        events.emit(PageEvent::PanelToggled {
            panel: PanelKind::Catalogs,
            checked: true,
        });
        assert_eq!(store.raw("custom_catalogs"), Some("1".to_string()));
        assert_eq!(surface.visible_items(ViewMode::Simple), vec![true]);
        assert_eq!(
            controller.borrow().state().filters.get(FilterAxis::Kind),
            "all"
        );
    }
}
