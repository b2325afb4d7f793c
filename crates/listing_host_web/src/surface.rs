//! `Document`-backed page surface.
//!
//! Elements are looked up on every call; the listing page is static, so lookups are cheap and
//! nothing has to be cached or invalidated.

use listing_host::{
    Display, DownloadLink, FilterAxis, ItemTags, PageElement, PageSurface, PanelKind, ViewMode,
};

/// Class of download link elements.
pub const DOWNLOAD_LINK_SELECTOR: &str = ".download-btn";
/// Class of filter buttons inside a filter group.
pub const FILTER_BUTTON_SELECTOR: &str = ".filter-btn";
/// Class marking the selected filter button.
pub const ACTIVE_CLASS: &str = "active";

#[derive(Debug, Clone, Copy, Default)]
/// Page surface over `window.document`.
pub struct WebPageSurface;

#[cfg(target_arch = "wasm32")]
mod dom {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

    pub fn document() -> Option<Document> {
        web_sys::window()?.document()
    }

    pub fn by_id(id: &str) -> Option<Element> {
        document()?.get_element_by_id(id)
    }

    pub fn html_by_id(id: &str) -> Option<HtmlElement> {
        by_id(id)?.dyn_into::<HtmlElement>().ok()
    }

    pub fn input_by_id(id: &str) -> Option<HtmlInputElement> {
        by_id(id)?.dyn_into::<HtmlInputElement>().ok()
    }

    pub fn elements(root: &Document, selector: &str) -> Vec<Element> {
        root.query_selector_all(selector)
            .map(|list| node_list_elements(&list))
            .unwrap_or_default()
    }

    pub fn child_elements(root: &Element, selector: &str) -> Vec<Element> {
        root.query_selector_all(selector)
            .map(|list| node_list_elements(&list))
            .unwrap_or_default()
    }

    fn node_list_elements(list: &web_sys::NodeList) -> Vec<Element> {
        (0..list.length())
            .filter_map(|index| list.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    pub fn set_display(element: &Element, value: &str) -> bool {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => html.style().set_property("display", value).is_ok(),
            None => false,
        }
    }

    pub fn link_href(element: &Element) -> Option<String> {
        match element.dyn_ref::<web_sys::HtmlAnchorElement>() {
            Some(anchor) => Some(anchor.href()),
            None => element.get_attribute("href"),
        }
    }
}

impl PageSurface for WebPageSurface {
    fn set_text(&self, element: PageElement, text: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(target) = dom::by_id(element.id()) else {
                return false;
            };
            target.set_text_content(Some(text));
            true
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (element, text);
            false
        }
    }

    fn text(&self, element: PageElement) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            dom::by_id(element.id()).map(|target| target.text_content().unwrap_or_default())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = element;
            None
        }
    }

    fn set_display(&self, element: PageElement, display: Display) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            dom::html_by_id(element.id())
                .map(|target| dom::set_display(&target, display.css_value()))
                .unwrap_or(false)
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (element, display);
            false
        }
    }

    fn set_checked(&self, panel: PanelKind, checked: bool) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(input) = dom::input_by_id(panel.toggle_id()) else {
                return false;
            };
            input.set_checked(checked);
            true
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (panel, checked);
            false
        }
    }

    fn items(&self, view: ViewMode) -> Vec<ItemTags> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = dom::document() else {
                return Vec::new();
            };
            dom::elements(&document, view.item_selector())
                .iter()
                .map(|item| {
                    ItemTags::from_attributes(
                        item.get_attribute("data-kind").as_deref(),
                        item.get_attribute("data-topic").as_deref(),
                        item.get_attribute("data-group").as_deref(),
                    )
                })
                .collect()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = view;
            Vec::new()
        }
    }

    fn apply_item_visibility(&self, view: ViewMode, visible: &[bool]) {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = dom::document() else {
                return;
            };
            for (item, visible) in dom::elements(&document, view.item_selector())
                .iter()
                .zip(visible)
            {
                dom::set_display(item, Display::for_visibility(*visible).css_value());
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (view, visible);
        }
    }

    fn download_links(&self) -> Vec<DownloadLink> {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(document) = dom::document() else {
                return Vec::new();
            };
            dom::elements(&document, DOWNLOAD_LINK_SELECTOR)
                .iter()
                .filter_map(|link| {
                    let href = dom::link_href(link)?;
                    Some(DownloadLink::new(
                        href,
                        link.get_attribute("data-size").as_deref(),
                    ))
                })
                .collect()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            Vec::new()
        }
    }

    fn mark_active_filter(&self, axis: FilterAxis, value: &str) -> bool {
        #[cfg(target_arch = "wasm32")]
        {
            let Some(container) = dom::by_id(axis.container_id()) else {
                return false;
            };
            for button in dom::child_elements(&container, FILTER_BUTTON_SELECTOR) {
                let selected = button.get_attribute(axis.attribute()).as_deref() == Some(value);
                let _ = button
                    .class_list()
                    .toggle_with_force(ACTIVE_CLASS, selected);
            }
            true
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (axis, value);
            false
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::window()?
                .prompt_with_message(message)
                .ok()
                .flatten()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
            None
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(message);
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = message;
        }
    }
}
