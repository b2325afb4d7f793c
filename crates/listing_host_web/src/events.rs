//! DOM listener and page command wiring.
//!
//! Listeners live for the whole page, so their closures are intentionally leaked with
//! `Closure::forget`.

use listing_host::{PageEventHandler, PageEventSource};

/// `window` functions the page markup calls from inline handlers.
pub const PAGE_COMMANDS: [&str; 3] = ["openAdmin", "chooseMode", "toggleSimpleMode"];

#[derive(Debug, Clone, Copy, Default)]
/// Event source over the page's checkboxes, filter groups and `window` commands.
pub struct WebEventSource;

impl PageEventSource for WebEventSource {
    fn subscribe(&self, handler: PageEventHandler) {
        #[cfg(target_arch = "wasm32")]
        {
            wasm::bind_panel_toggles(&handler);
            wasm::bind_filter_groups(&handler);
            wasm::bind_page_commands(&handler);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = handler;
        }
    }
}

/// Runs `ready` once the document has been parsed; immediately if it already has.
pub fn on_document_ready(ready: impl FnOnce() + 'static) {
    #[cfg(target_arch = "wasm32")]
    {
        wasm::on_document_ready(ready);
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        ready();
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::rc::Rc;

    use listing_host::{FilterAxis, PageEvent, PageEventHandler, PanelKind};
    use wasm_bindgen::{closure::Closure, JsCast, JsValue};
    use web_sys::{Element, Event, HtmlInputElement};

    use super::PAGE_COMMANDS;
    use crate::surface::FILTER_BUTTON_SELECTOR;

    fn document() -> Option<web_sys::Document> {
        web_sys::window()?.document()
    }

    fn listen(target: &web_sys::EventTarget, event: &str, callback: impl FnMut(Event) + 'static) {
        let closure = Closure::<dyn FnMut(Event)>::new(callback);
        if target
            .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
            .is_ok()
        {
            closure.forget();
        }
    }

    pub fn bind_panel_toggles(handler: &PageEventHandler) {
        let Some(document) = document() else {
            return;
        };
        for panel in PanelKind::ALL {
            let Some(input) = document
                .get_element_by_id(panel.toggle_id())
                .and_then(|element| element.dyn_into::<HtmlInputElement>().ok())
            else {
                continue;
            };
            let handler = Rc::clone(handler);
            let source = input.clone();
            listen(&input, "change", move |_| {
                handler(PageEvent::PanelToggled {
                    panel,
                    checked: source.checked(),
                });
            });
        }
    }

    pub fn bind_filter_groups(handler: &PageEventHandler) {
        let Some(document) = document() else {
            return;
        };
        for axis in FilterAxis::ALL {
            let Some(container) = document.get_element_by_id(axis.container_id()) else {
                continue;
            };
            let handler = Rc::clone(handler);
            listen(&container, "click", move |event| {
                let Some(button) = event
                    .target()
                    .and_then(|target| target.dyn_into::<Element>().ok())
                    .and_then(|target| target.closest(FILTER_BUTTON_SELECTOR).ok().flatten())
                else {
                    return;
                };
                if let Some(value) = button.get_attribute(axis.attribute()) {
                    handler(PageEvent::FilterSelected { axis, value });
                }
            });
        }
    }

    pub fn bind_page_commands(handler: &PageEventHandler) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let [open_admin, choose_mode, toggle_mode] = PAGE_COMMANDS;

        let admin_handler = Rc::clone(handler);
        expose(
            &window,
            open_admin,
            Closure::<dyn Fn()>::new(move || admin_handler(PageEvent::AdminRequested))
                .into_js_value(),
        );

        let choose_handler = Rc::clone(handler);
        expose(
            &window,
            choose_mode,
            Closure::<dyn Fn(JsValue)>::new(move |mode: JsValue| {
                choose_handler(PageEvent::ModeChosen(mode.as_string().unwrap_or_default()))
            })
            .into_js_value(),
        );

        let toggle_handler = Rc::clone(handler);
        expose(
            &window,
            toggle_mode,
            Closure::<dyn Fn()>::new(move || toggle_handler(PageEvent::ModeToggled))
                .into_js_value(),
        );
    }

    fn expose(window: &web_sys::Window, name: &str, function: JsValue) {
        if let Err(err) = js_sys::Reflect::set(window, &JsValue::from_str(name), &function) {
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "window.{name} not exposed: {err:?}"
            )));
        }
    }

    pub fn on_document_ready(ready: impl FnOnce() + 'static) {
        let Some(document) = document() else {
            return;
        };
        if document.ready_state() != "loading" {
            ready();
            return;
        }
        let callback = Closure::once_into_js(ready);
        let _ = document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref());
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use listing_host::PageEventSource;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_ready_hook_runs_immediately() {
        let ran = Rc::new(Cell::new(false));
        let flag = Rc::clone(&ran);
        on_document_ready(move || flag.set(true));
        assert!(ran.get());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn non_wasm_subscription_binds_nothing() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        WebEventSource.subscribe(Rc::new(move |_| counter.set(counter.get() + 1)));
        assert_eq!(calls.get(), 0);
    }
}
