//! Page surface contract and an in-memory document for tests.

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use super::types::{
    Display, DownloadLink, FilterAxis, ItemTags, PageElement, PanelKind, ViewMode,
};

/// Everything the listing engine reads from or writes to the page.
///
/// Operations on optional elements return whether the element existed; a missing element is a
/// silent no-op, never an error.
pub trait PageSurface {
    /// Replaces the text content of `element`.
    fn set_text(&self, element: PageElement, text: &str) -> bool;

    /// Reads the text content of `element`.
    fn text(&self, element: PageElement) -> Option<String>;

    /// Sets the inline `display` of `element`.
    fn set_display(&self, element: PageElement, display: Display) -> bool;

    /// Sets the checked state of a panel checkbox.
    fn set_checked(&self, panel: PanelKind, checked: bool) -> bool;

    /// Tags of every item on `view`, in document order.
    fn items(&self, view: ViewMode) -> Vec<ItemTags>;

    /// Shows or hides the items of `view`.
    ///
    /// `visible[i]` applies to the `i`-th item returned by [`Self::items`].
    fn apply_item_visibility(&self, view: ViewMode, visible: &[bool]);

    /// Every download link element, duplicates included.
    fn download_links(&self) -> Vec<DownloadLink>;

    /// Marks the buttons of `axis` carrying `value` active and clears the rest.
    fn mark_active_filter(&self, axis: FilterAxis, value: &str) -> bool;

    /// Asks the visitor for a line of text. `None` means the prompt was cancelled.
    fn prompt(&self, message: &str) -> Option<String>;

    /// Shows a blocking message.
    fn alert(&self, message: &str);
}

impl<S: PageSurface + ?Sized> PageSurface for Rc<S> {
    fn set_text(&self, element: PageElement, text: &str) -> bool {
        (**self).set_text(element, text)
    }

    fn text(&self, element: PageElement) -> Option<String> {
        (**self).text(element)
    }

    fn set_display(&self, element: PageElement, display: Display) -> bool {
        (**self).set_display(element, display)
    }

    fn set_checked(&self, panel: PanelKind, checked: bool) -> bool {
        (**self).set_checked(panel, checked)
    }

    fn items(&self, view: ViewMode) -> Vec<ItemTags> {
        (**self).items(view)
    }

    fn apply_item_visibility(&self, view: ViewMode, visible: &[bool]) {
        (**self).apply_item_visibility(view, visible)
    }

    fn download_links(&self) -> Vec<DownloadLink> {
        (**self).download_links()
    }

    fn mark_active_filter(&self, axis: FilterAxis, value: &str) -> bool {
        (**self).mark_active_filter(axis, value)
    }

    fn prompt(&self, message: &str) -> Option<String> {
        (**self).prompt(message)
    }

    fn alert(&self, message: &str) {
        (**self).alert(message)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct MemoryElement {
    text: String,
    display: Display,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryItem {
    tags: ItemTags,
    display: Display,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct MemoryFilterButton {
    value: String,
    active: bool,
}

#[derive(Debug, Default)]
struct MemoryDocument {
    elements: HashMap<PageElement, MemoryElement>,
    checkboxes: HashMap<PanelKind, bool>,
    items: HashMap<ViewMode, Vec<MemoryItem>>,
    links: Vec<DownloadLink>,
    filter_groups: HashMap<FilterAxis, Vec<MemoryFilterButton>>,
    prompt_replies: VecDeque<Option<String>>,
    prompts: Vec<String>,
    alerts: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// Inspectable in-memory page. Clones share the same document.
///
/// Only elements registered through the builder methods exist; everything else behaves like a
/// page that lacks the element.
pub struct MemoryPageSurface {
    doc: Rc<RefCell<MemoryDocument>>,
}

impl MemoryPageSurface {
    /// Registers an empty element.
    pub fn with_element(self, element: PageElement) -> Self {
        self.with_element_text(element, "")
    }

    /// Registers an element with initial text.
    pub fn with_element_text(self, element: PageElement, text: &str) -> Self {
        self.doc.borrow_mut().elements.insert(
            element,
            MemoryElement {
                text: text.to_string(),
                display: Display::Default,
            },
        );
        self
    }

    /// Registers a panel checkbox.
    pub fn with_checkbox(self, panel: PanelKind, checked: bool) -> Self {
        self.doc.borrow_mut().checkboxes.insert(panel, checked);
        self
    }

    /// Appends an item to a render surface.
    pub fn with_item(self, view: ViewMode, tags: ItemTags) -> Self {
        self.doc
            .borrow_mut()
            .items
            .entry(view)
            .or_default()
            .push(MemoryItem {
                tags,
                display: Display::Default,
            });
        self
    }

    /// Appends the same item to both render surfaces.
    pub fn with_listed_item(self, tags: ItemTags) -> Self {
        self.with_item(ViewMode::Cards, tags.clone())
            .with_item(ViewMode::Simple, tags)
    }

    /// Appends a download link element.
    pub fn with_link(self, link: DownloadLink) -> Self {
        self.doc.borrow_mut().links.push(link);
        self
    }

    /// Registers a filter button group with one button per value. The first button starts active.
    pub fn with_filter_group(self, axis: FilterAxis, values: &[&str]) -> Self {
        let buttons = values
            .iter()
            .enumerate()
            .map(|(index, value)| MemoryFilterButton {
                value: (*value).to_string(),
                active: index == 0,
            })
            .collect();
        self.doc.borrow_mut().filter_groups.insert(axis, buttons);
        self
    }

    /// Queues the answer to the next prompt.
    pub fn queue_prompt_reply(&self, reply: Option<&str>) {
        self.doc
            .borrow_mut()
            .prompt_replies
            .push_back(reply.map(str::to_string));
    }

    /// Current inline display of `element`, `None` when absent.
    pub fn display(&self, element: PageElement) -> Option<Display> {
        self.doc
            .borrow()
            .elements
            .get(&element)
            .map(|element| element.display)
    }

    /// Checked state of a panel checkbox, `None` when absent.
    pub fn checked(&self, panel: PanelKind) -> Option<bool> {
        self.doc.borrow().checkboxes.get(&panel).copied()
    }

    /// Visibility of every item on `view`, in document order.
    pub fn visible_items(&self, view: ViewMode) -> Vec<bool> {
        self.doc
            .borrow()
            .items
            .get(&view)
            .map(|items| {
                items
                    .iter()
                    .map(|item| item.display != Display::Hidden)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Values of the active buttons of `axis`.
    pub fn active_filters(&self, axis: FilterAxis) -> Vec<String> {
        self.doc
            .borrow()
            .filter_groups
            .get(&axis)
            .map(|buttons| {
                buttons
                    .iter()
                    .filter(|button| button.active)
                    .map(|button| button.value.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Prompt messages shown so far.
    pub fn prompts(&self) -> Vec<String> {
        self.doc.borrow().prompts.clone()
    }

    /// Alert messages shown so far.
    pub fn alerts(&self) -> Vec<String> {
        self.doc.borrow().alerts.clone()
    }
}

impl PageSurface for MemoryPageSurface {
    fn set_text(&self, element: PageElement, text: &str) -> bool {
        match self.doc.borrow_mut().elements.get_mut(&element) {
            Some(target) => {
                target.text = text.to_string();
                true
            }
            None => false,
        }
    }

    fn text(&self, element: PageElement) -> Option<String> {
        self.doc
            .borrow()
            .elements
            .get(&element)
            .map(|element| element.text.clone())
    }

    fn set_display(&self, element: PageElement, display: Display) -> bool {
        match self.doc.borrow_mut().elements.get_mut(&element) {
            Some(target) => {
                target.display = display;
                true
            }
            None => false,
        }
    }

    fn set_checked(&self, panel: PanelKind, checked: bool) -> bool {
        match self.doc.borrow_mut().checkboxes.get_mut(&panel) {
            Some(target) => {
                *target = checked;
                true
            }
            None => false,
        }
    }

    fn items(&self, view: ViewMode) -> Vec<ItemTags> {
        self.doc
            .borrow()
            .items
            .get(&view)
            .map(|items| items.iter().map(|item| item.tags.clone()).collect())
            .unwrap_or_default()
    }

    fn apply_item_visibility(&self, view: ViewMode, visible: &[bool]) {
        let mut doc = self.doc.borrow_mut();
        let Some(items) = doc.items.get_mut(&view) else {
            return;
        };
        for (item, visible) in items.iter_mut().zip(visible) {
            item.display = Display::for_visibility(*visible);
        }
    }

    fn download_links(&self) -> Vec<DownloadLink> {
        self.doc.borrow().links.clone()
    }

    fn mark_active_filter(&self, axis: FilterAxis, value: &str) -> bool {
        match self.doc.borrow_mut().filter_groups.get_mut(&axis) {
            Some(buttons) => {
                for button in buttons.iter_mut() {
                    button.active = button.value == value;
                }
                true
            }
            None => false,
        }
    }

    fn prompt(&self, message: &str) -> Option<String> {
        let mut doc = self.doc.borrow_mut();
        doc.prompts.push(message.to_string());
        doc.prompt_replies.pop_front().flatten()
    }

    fn alert(&self, message: &str) {
        self.doc.borrow_mut().alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_elements_report_absence_without_side_effects() {
        let surface = MemoryPageSurface::default();
        assert!(!surface.set_text(PageElement::FilesInfo, "x"));
        assert!(!surface.set_display(PageElement::ModeChooser, Display::Hidden));
        assert!(!surface.set_checked(PanelKind::Catalogs, false));
        assert!(!surface.mark_active_filter(FilterAxis::Kind, "pdf"));
        assert_eq!(surface.text(PageElement::FilesInfo), None);
        assert_eq!(surface.display(PageElement::ModeChooser), None);
    }

    #[test]
    fn item_visibility_is_applied_in_document_order() {
        let surface = MemoryPageSurface::default()
            .with_item(ViewMode::Cards, ItemTags::default())
            .with_item(ViewMode::Cards, ItemTags::default());

        surface.apply_item_visibility(ViewMode::Cards, &[false, true]);
        assert_eq!(surface.visible_items(ViewMode::Cards), vec![false, true]);
        assert!(surface.visible_items(ViewMode::Simple).is_empty());
    }

    #[test]
    fn filter_group_keeps_single_active_value() {
        let surface =
            MemoryPageSurface::default().with_filter_group(FilterAxis::Kind, &["all", "pdf"]);
        assert_eq!(surface.active_filters(FilterAxis::Kind), vec!["all"]);

        assert!(surface.mark_active_filter(FilterAxis::Kind, "pdf"));
        assert_eq!(surface.active_filters(FilterAxis::Kind), vec!["pdf"]);
    }

    #[test]
    fn prompt_replies_are_consumed_in_order() {
        let surface = MemoryPageSurface::default();
        surface.queue_prompt_reply(Some("first"));
        surface.queue_prompt_reply(None);

        assert_eq!(surface.prompt("q1"), Some("first".to_string()));
        assert_eq!(surface.prompt("q2"), None);
        assert_eq!(surface.prompt("q3"), None);
        assert_eq!(surface.prompts(), vec!["q1", "q2", "q3"]);
    }
}
