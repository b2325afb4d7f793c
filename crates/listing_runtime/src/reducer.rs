//! Reducer actions, side-effect intents, and transition logic for the listing page.

use listing_host::{FilterAxis, PageEvent, PanelKind, ViewMode};
use thiserror::Error;

use crate::model::{ListingState, PanelFlags};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Actions accepted by [`reduce_listing`] to mutate [`ListingState`].
pub enum ListingAction {
    /// Startup: replace the panel flags with values loaded from storage.
    Boot(PanelFlags),
    /// Show or hide a panel.
    TogglePanel {
        panel: PanelKind,
        visible: bool,
    },
    /// Select a filter value on one axis.
    ///
    /// The value is lowercased before it is stored, so `"PDF"` selects the same items as `"pdf"`
    /// and `"ALL"` clears the axis. The active-button marker keeps the raw value.
    SelectFilter {
        axis: FilterAxis,
        value: String,
    },
    /// Activate a render surface.
    SetViewMode(ViewMode),
    /// Activate a render surface from the mode chooser and dismiss it.
    ChooseMode(ViewMode),
    /// Alternate render surfaces; the first use before any surface is active picks cards.
    ToggleViewMode,
    /// The admin panel passed its reveal check.
    AdminUnlocked,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects emitted by [`reduce_listing`], executed in order by the controller.
pub enum ListingEffect {
    /// Persist one panel flag.
    PersistPanelFlag {
        panel: PanelKind,
        visible: bool,
    },
    /// Copy the panel flags onto their checkboxes.
    SyncPanelToggles,
    /// Move the active marker within a filter button group.
    MarkActiveFilter {
        axis: FilterAxis,
        value: String,
    },
    /// Show one surface container, hide the other, and relabel the mode toggle.
    ShowSurface(ViewMode),
    /// Hide the one-time mode chooser.
    DismissModeChooser,
    /// Show the admin panel.
    RevealAdminPanel,
    /// Re-apply item visibility on every surface.
    Reconcile,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Rejected actions and page events.
pub enum ReducerError {
    /// A filter button without a tag value was clicked.
    #[error("filter button on {0:?} axis carries no tag")]
    EmptyFilterTag(FilterAxis),
    /// A mode command named an unknown surface.
    ///
    /// The command is dropped: the current surface and the mode chooser stay as they were.
    #[error("unknown view mode `{0}`")]
    UnknownViewMode(String),
}

/// Maps a page event onto a reducer action.
///
/// Returns `Ok(None)` for events the reducer does not own (the admin prompt is interactive and
/// handled by the controller).
///
/// # Errors
///
/// Returns [`ReducerError::UnknownViewMode`] when a mode command names an unknown surface.
pub fn action_for_event(event: PageEvent) -> Result<Option<ListingAction>, ReducerError> {
    let action = match event {
        PageEvent::PanelToggled { panel, checked } => ListingAction::TogglePanel {
            panel,
            visible: checked,
        },
        PageEvent::FilterSelected { axis, value } => ListingAction::SelectFilter { axis, value },
        PageEvent::ModeChosen(raw) => ListingAction::ChooseMode(
            raw.parse::<ViewMode>()
                .map_err(|_| ReducerError::UnknownViewMode(raw.clone()))?,
        ),
        PageEvent::ModeToggled => ListingAction::ToggleViewMode,
        PageEvent::AdminRequested => return Ok(None),
    };
    Ok(Some(action))
}

/// Applies a [`ListingAction`] to the listing state and collects resulting side effects.
///
/// Every action that changes panel flags, filters or the view mode ends its effect list with a
/// single [`ListingEffect::Reconcile`].
///
/// # Errors
///
/// Returns [`ReducerError::EmptyFilterTag`] when a filter selection carries an empty value; the
/// state is left unchanged.
pub fn reduce_listing(
    state: &mut ListingState,
    action: ListingAction,
) -> Result<Vec<ListingEffect>, ReducerError> {
    let mut effects = Vec::new();
    match action {
        ListingAction::Boot(flags) => {
            state.flags = flags;
            effects.push(ListingEffect::SyncPanelToggles);
        }
        ListingAction::TogglePanel { panel, visible } => {
            state.flags.set(panel, visible);
            effects.push(ListingEffect::PersistPanelFlag { panel, visible });
            effects.push(ListingEffect::SyncPanelToggles);
        }
        ListingAction::SelectFilter { axis, value } => {
            if value.trim().is_empty() {
                return Err(ReducerError::EmptyFilterTag(axis));
            }
            state.filters.set(axis, value.to_lowercase());
            effects.push(ListingEffect::MarkActiveFilter { axis, value });
        }
        ListingAction::SetViewMode(mode) => {
            set_view_mode(state, mode, &mut effects);
        }
        ListingAction::ChooseMode(mode) => {
            set_view_mode(state, mode, &mut effects);
            effects.push(ListingEffect::DismissModeChooser);
        }
        ListingAction::ToggleViewMode => match state.view_mode {
            None => {
                set_view_mode(state, ViewMode::Cards, &mut effects);
                effects.push(ListingEffect::DismissModeChooser);
            }
            Some(current) => set_view_mode(state, current.other(), &mut effects),
        },
        ListingAction::AdminUnlocked => {
            state.admin_unlocked = true;
            effects.push(ListingEffect::RevealAdminPanel);
            effects.push(ListingEffect::SyncPanelToggles);
        }
    }

    effects.push(ListingEffect::Reconcile);
    Ok(effects)
}

fn set_view_mode(state: &mut ListingState, mode: ViewMode, effects: &mut Vec<ListingEffect>) {
    state.view_mode = Some(mode);
    effects.push(ListingEffect::ShowSurface(mode));
}
