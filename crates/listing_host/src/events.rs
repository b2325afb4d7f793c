//! Page event dispatch boundary.
//!
//! Concrete sources translate DOM listeners and page commands into [`PageEvent`] values so the
//! listing engine never touches event wiring directly.

use std::{cell::RefCell, rc::Rc};

use crate::page::types::{FilterAxis, PanelKind};

/// Discrete user interactions the listing engine reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// A panel checkbox changed.
    PanelToggled {
        /// Panel whose checkbox changed.
        panel: PanelKind,
        /// New checked state.
        checked: bool,
    },
    /// A filter button was clicked.
    FilterSelected {
        /// Button group of the clicked button.
        axis: FilterAxis,
        /// Tag value carried by the button.
        value: String,
    },
    /// The mode chooser picked a surface; the token is unvalidated page input.
    ModeChosen(String),
    /// The mode toggle button was pressed.
    ModeToggled,
    /// The admin reveal command was invoked.
    AdminRequested,
}

/// Shared callback receiving page events.
pub type PageEventHandler = Rc<dyn Fn(PageEvent)>;

/// Source of page events.
pub trait PageEventSource {
    /// Routes every future event to `handler`.
    fn subscribe(&self, handler: PageEventHandler);
}

#[derive(Clone, Default)]
/// Event source driven manually through [`MemoryEventSource::emit`].
pub struct MemoryEventSource {
    handlers: Rc<RefCell<Vec<PageEventHandler>>>,
}

impl MemoryEventSource {
    /// Delivers `event` to every subscribed handler.
    pub fn emit(&self, event: PageEvent) {
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(event.clone());
        }
    }

    /// Number of subscribed handlers.
    pub fn subscriber_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

impl PageEventSource for MemoryEventSource {
    fn subscribe(&self, handler: PageEventHandler) {
        self.handlers.borrow_mut().push(handler);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn memory_source_delivers_events_to_subscribers() {
        let source = MemoryEventSource::default();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        source.subscribe(Rc::new(move |event| sink.borrow_mut().push(event)));

        source.emit(PageEvent::ModeToggled);
        source.emit(PageEvent::FilterSelected {
            axis: FilterAxis::Kind,
            value: "pdf".to_string(),
        });

        assert_eq!(source.subscriber_count(), 1);
        assert_eq!(
            *seen.borrow(),
            vec![
                PageEvent::ModeToggled,
                PageEvent::FilterSelected {
                    axis: FilterAxis::Kind,
                    value: "pdf".to_string(),
                },
            ]
        );
    }
}
