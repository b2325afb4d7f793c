//! Listing controller: owns the page state and executes reducer effects against the surface.

use std::{cell::RefCell, rc::Rc};

use leptos::logging;
use listing_host::{
    current_year, Display, KeyValueStore, PageElement, PageEvent, PageEventSource, PageSurface,
    PanelKind, ViewMode,
};

use crate::{
    admin::{AdminDecision, AdminGate},
    config::ListingConfig,
    model::ListingState,
    panel_flags::PanelFlagStore,
    reducer::{action_for_event, reduce_listing, ListingAction, ListingEffect, ReducerError},
    visibility::{reconcile, ReconcileReport},
};

/// Single owner of the listing state, constructed once per page.
pub struct ListingController<P, S> {
    state: ListingState,
    surface: P,
    flags: PanelFlagStore<S>,
    admin: AdminGate,
    config: ListingConfig,
    started: bool,
    last_reconcile: Option<ReconcileReport>,
}

impl<P: PageSurface, S: KeyValueStore> ListingController<P, S> {
    pub fn new(surface: P, store: S, config: ListingConfig) -> Self {
        Self {
            state: ListingState::default(),
            surface,
            flags: PanelFlagStore::new(store, config.storage.clone()),
            admin: AdminGate::new(config.admin.passphrase.clone()),
            config,
            started: false,
            last_reconcile: None,
        }
    }

    pub fn state(&self) -> &ListingState {
        &self.state
    }

    /// Report of the most recent reconciliation, if any ran.
    pub fn last_reconcile(&self) -> Option<ReconcileReport> {
        self.last_reconcile
    }

    /// Fills the year placeholder, applies stored panel flags and forces the card surface.
    ///
    /// Runs once; later calls are ignored.
    pub fn start(&mut self) {
        if self.started {
            logging::warn!("listing controller already started");
            return;
        }
        self.started = true;

        self.surface
            .set_text(PageElement::Year, &current_year().to_string());
        let flags = self.flags.load();
        self.dispatch_logged(ListingAction::Boot(flags));
        self.dispatch_logged(ListingAction::SetViewMode(ViewMode::Cards));
    }

    /// Reacts to one page event. Invalid events are logged and ignored.
    pub fn handle(&mut self, event: PageEvent) {
        match action_for_event(event) {
            Ok(Some(action)) => self.dispatch_logged(action),
            Ok(None) => {
                self.request_admin();
            }
            Err(err) => logging::warn!("page event ignored: {err}"),
        }
    }

    /// Applies `action` and executes the resulting effects in order.
    ///
    /// # Errors
    ///
    /// Propagates [`ReducerError`] from the reducer; nothing is applied in that case.
    pub fn dispatch(&mut self, action: ListingAction) -> Result<(), ReducerError> {
        let effects = reduce_listing(&mut self.state, action)?;
        for effect in effects {
            self.run_effect(effect);
        }
        Ok(())
    }

    /// Prompts for the admin passphrase and reveals the admin panel on a match.
    pub fn request_admin(&mut self) -> AdminDecision {
        let reply = self.surface.prompt(&self.config.admin.prompt);
        let decision = self.admin.check(reply.as_deref());
        match decision {
            AdminDecision::Unlocked => {
                self.dispatch_logged(ListingAction::AdminUnlocked);
                self.surface.alert(&self.config.admin.unlocked_message);
            }
            AdminDecision::Rejected => self.surface.alert(&self.config.admin.rejected_message),
            AdminDecision::Cancelled => {}
        }
        decision
    }

    fn dispatch_logged(&mut self, action: ListingAction) {
        if let Err(err) = self.dispatch(action) {
            logging::warn!("listing action rejected: {err}");
        }
    }

    fn run_effect(&mut self, effect: ListingEffect) {
        match effect {
            ListingEffect::PersistPanelFlag { panel, visible } => {
                self.flags.persist(panel, visible);
            }
            ListingEffect::SyncPanelToggles => {
                for panel in PanelKind::ALL {
                    self.surface.set_checked(panel, self.state.flags.get(panel));
                }
            }
            ListingEffect::MarkActiveFilter { axis, value } => {
                self.surface.mark_active_filter(axis, &value);
            }
            ListingEffect::ShowSurface(mode) => {
                let (shown, label) = match mode {
                    ViewMode::Cards => (Display::Default, &self.config.labels.switch_to_simple),
                    ViewMode::Simple => (Display::Block, &self.config.labels.switch_to_cards),
                };
                self.surface.set_display(PageElement::Surface(mode), shown);
                self.surface
                    .set_display(PageElement::Surface(mode.other()), Display::Hidden);
                self.surface.set_text(PageElement::ModeToggleButton, label);
            }
            ListingEffect::DismissModeChooser => {
                self.surface
                    .set_display(PageElement::ModeChooser, Display::Hidden);
            }
            ListingEffect::RevealAdminPanel => {
                self.surface.set_display(PageElement::AdminPanel, Display::Block);
            }
            ListingEffect::Reconcile => {
                self.last_reconcile = Some(reconcile(
                    &self.surface,
                    &self.state.flags,
                    &self.state.filters,
                ));
            }
        }
    }
}

impl<P, S> ListingController<P, S>
where
    P: PageSurface + 'static,
    S: KeyValueStore + 'static,
{
    /// Moves the controller behind a shared handle and routes every event of `source` to it.
    pub fn attach<E: PageEventSource + ?Sized>(self, source: &E) -> Rc<RefCell<Self>> {
        let controller = Rc::new(RefCell::new(self));
        let handle = Rc::clone(&controller);
        source.subscribe(Rc::new(move |event| match handle.try_borrow_mut() {
            Ok(mut controller) => controller.handle(event),
            Err(_) => logging::warn!("page event dropped during dispatch: {event:?}"),
        }));
        controller
    }
}
