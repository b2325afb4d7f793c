use listing_host::{
    Display, FilterAxis, ItemTags, KeyValueStore, MemoryEventSource, MemoryKeyValueStore,
    MemoryPageSurface, PageElement, PageEvent, PageSurface, PanelKind, ViewMode,
};
use listing_runtime::{ListingConfig, ListingController, PanelFlags, FILTER_ALL};

struct DisabledStorage;

impl KeyValueStore for DisabledStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, String> {
        Err("SecurityError: The operation is insecure.".to_string())
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), String> {
        Err("SecurityError: The operation is insecure.".to_string())
    }
}

fn item(kind: &str, topic: &str, group: Option<&str>) -> ItemTags {
    ItemTags::from_attributes(Some(kind), Some(topic), group)
}

fn listing_page() -> MemoryPageSurface {
    MemoryPageSurface::default()
        .with_element(PageElement::Year)
        .with_element(PageElement::Surface(ViewMode::Cards))
        .with_element(PageElement::Surface(ViewMode::Simple))
        .with_element(PageElement::ModeToggleButton)
        .with_element(PageElement::ModeChooser)
        .with_checkbox(PanelKind::Catalogs, true)
        .with_checkbox(PanelKind::Videos, true)
        .with_filter_group(FilterAxis::Kind, &["all", "pdf", "video", "zip"])
        .with_filter_group(FilterAxis::Topic, &["all", "math", "physics"])
        .with_listed_item(item("pdf", "math", Some("catalog")))
        .with_listed_item(item("pdf", "physics", None))
        .with_listed_item(item("video", "math", Some("video")))
        .with_listed_item(item("zip", "physics", Some("catalog")))
        .with_listed_item(item("video", "physics", Some("video")))
}

#[test]
fn filters_and_panels_combine_through_page_events() {
    let surface = listing_page();
    let store = MemoryKeyValueStore::default();
    let source = MemoryEventSource::default();
    let mut controller =
        ListingController::new(surface.clone(), store.clone(), ListingConfig::default());
    controller.start();
    let controller = controller.attach(&source);

    source.emit(PageEvent::FilterSelected {
        axis: FilterAxis::Topic,
        value: "physics".to_string(),
    });
    assert_eq!(
        surface.visible_items(ViewMode::Cards),
        vec![false, true, false, true, true]
    );
    assert_eq!(surface.active_filters(FilterAxis::Topic), vec!["physics"]);

    source.emit(PageEvent::PanelToggled {
        panel: PanelKind::Videos,
        checked: false,
    });
    assert_eq!(
        surface.visible_items(ViewMode::Cards),
        vec![false, true, false, true, false]
    );
    assert_eq!(store.raw("zf_panel_videos_visible"), Some("0".to_string()));
    assert_eq!(surface.checked(PanelKind::Videos), Some(false));

    source.emit(PageEvent::FilterSelected {
        axis: FilterAxis::Kind,
        value: "zip".to_string(),
    });
    assert_eq!(
        surface.visible_items(ViewMode::Simple),
        vec![false, false, false, true, false]
    );

    source.emit(PageEvent::FilterSelected {
        axis: FilterAxis::Topic,
        value: FILTER_ALL.to_string(),
    });
    source.emit(PageEvent::FilterSelected {
        axis: FilterAxis::Kind,
        value: FILTER_ALL.to_string(),
    });
    assert_eq!(
        surface.visible_items(ViewMode::Simple),
        vec![true, true, false, true, false]
    );

    let report = controller.borrow().last_reconcile().expect("reconciled");
    assert_eq!(report.cards.shown, 3);
    assert_eq!(report.simple.hidden, 2);
}

#[test]
fn switching_surfaces_reproduces_the_partition_without_touching_state() {
    let surface = listing_page();
    let source = MemoryEventSource::default();
    let mut controller = ListingController::new(
        surface.clone(),
        MemoryKeyValueStore::default(),
        ListingConfig::default(),
    );
    controller.start();
    let controller = controller.attach(&source);

    source.emit(PageEvent::PanelToggled {
        panel: PanelKind::Catalogs,
        checked: false,
    });
    source.emit(PageEvent::FilterSelected {
        axis: FilterAxis::Topic,
        value: "math".to_string(),
    });
    let cards_partition = surface.visible_items(ViewMode::Cards);
    let state_before = controller.borrow().state().clone();

    source.emit(PageEvent::ModeToggled);

    assert_eq!(controller.borrow().state().view_mode, Some(ViewMode::Simple));
    assert_eq!(controller.borrow().state().flags, state_before.flags);
    assert_eq!(controller.borrow().state().filters, state_before.filters);
    assert_eq!(surface.visible_items(ViewMode::Simple), cards_partition);
    assert_eq!(
        surface.display(PageElement::Surface(ViewMode::Simple)),
        Some(Display::Block)
    );
    assert_eq!(
        surface.display(PageElement::Surface(ViewMode::Cards)),
        Some(Display::Hidden)
    );
    assert_eq!(
        surface.text(PageElement::ModeToggleButton),
        Some("⬅ Полный вид".to_string())
    );

    source.emit(PageEvent::ModeToggled);
    assert_eq!(surface.visible_items(ViewMode::Cards), cards_partition);
    assert_eq!(
        surface.display(PageElement::Surface(ViewMode::Cards)),
        Some(Display::Default)
    );
}

#[test]
fn mode_chooser_is_dismissed_by_choice() {
    let surface = listing_page();
    let source = MemoryEventSource::default();
    let mut controller = ListingController::new(
        surface.clone(),
        MemoryKeyValueStore::default(),
        ListingConfig::default(),
    );
    controller.start();
    let controller = controller.attach(&source);
    assert_eq!(
        surface.display(PageElement::ModeChooser),
        Some(Display::Default)
    );

    source.emit(PageEvent::ModeChosen("simple".to_string()));

    assert_eq!(controller.borrow().state().view_mode, Some(ViewMode::Simple));
    assert_eq!(
        surface.display(PageElement::ModeChooser),
        Some(Display::Hidden)
    );
}

#[test]
fn page_stays_functional_with_storage_disabled() {
    let surface = listing_page();
    let source = MemoryEventSource::default();
    let mut controller =
        ListingController::new(surface.clone(), DisabledStorage, ListingConfig::default());
    controller.start();
    let controller = controller.attach(&source);

    assert_eq!(controller.borrow().state().flags, PanelFlags::default());
    assert_eq!(surface.checked(PanelKind::Catalogs), Some(true));

    source.emit(PageEvent::PanelToggled {
        panel: PanelKind::Catalogs,
        checked: false,
    });
    assert!(!controller.borrow().state().flags.catalogs_visible);
    assert_eq!(
        surface.visible_items(ViewMode::Cards),
        vec![false, true, true, false, true]
    );
}

#[test]
fn missing_optional_elements_are_tolerated() {
    let surface = MemoryPageSurface::default()
        .with_listed_item(item("pdf", "math", Some("video")));
    let source = MemoryEventSource::default();
    let mut controller = ListingController::new(
        surface.clone(),
        MemoryKeyValueStore::default(),
        ListingConfig::default(),
    );
    controller.start();
    let controller = controller.attach(&source);

    source.emit(PageEvent::ModeToggled);
    source.emit(PageEvent::ModeChosen("cards".to_string()));
    source.emit(PageEvent::PanelToggled {
        panel: PanelKind::Videos,
        checked: false,
    });
    source.emit(PageEvent::FilterSelected {
        axis: FilterAxis::Kind,
        value: "pdf".to_string(),
    });
    surface.queue_prompt_reply(Some("310172431"));
    source.emit(PageEvent::AdminRequested);

    assert!(controller.borrow().state().admin_unlocked);
    assert_eq!(surface.visible_items(ViewMode::Simple), vec![false]);
    assert_eq!(surface.text(PageElement::Year), None);
}
