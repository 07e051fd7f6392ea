//! Mock DOM for the browser view
//!
//! The view renders into [`DomElement`] trees. In the browser the tree is
//! turned into real nodes; in tests it is mounted into a [`MockDom`] and
//! inspected directly.

use std::collections::BTreeMap;

/// A DOM element description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID, empty when unset
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Own text content (not including children)
    pub text_content: String,
    /// Element attributes, sorted by name
    pub attributes: BTreeMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: BTreeMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets the element ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Adds child elements in order
    #[must_use]
    pub fn with_children(mut self, children: impl IntoIterator<Item = DomElement>) -> Self {
        self.children.extend(children);
        self
    }

    /// Adds a class if not already present
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets an attribute value
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }

    /// Finds this element or a descendant by ID (depth first)
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Mutable variant of [`DomElement::find`]
    pub fn find_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        if self.id == id {
            return Some(self);
        }
        self.children.iter_mut().find_map(|child| child.find_mut(id))
    }

    /// Collects every descendant (not self) carrying `class`, in document order
    #[must_use]
    pub fn find_by_class(&self, class: &str) -> Vec<&DomElement> {
        let mut found = Vec::new();
        for child in &self.children {
            if child.has_class(class) {
                found.push(child);
            }
            found.extend(child.find_by_class(class));
        }
        found
    }

    /// Text of this element and all descendants, in document order
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = self.text_content.clone();
        for child in &self.children {
            out.push_str(&child.text());
        }
        out
    }
}

/// DOM events the calculator listens to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
    /// Input event with new value
    Input {
        /// The ID of the input element
        element_id: String,
        /// The full field value after the edit
        value: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }

    /// Creates an input event
    #[must_use]
    pub fn input(element_id: &str, value: &str) -> Self {
        Self::Input {
            element_id: element_id.to_string(),
            value: value.to_string(),
        }
    }

    /// ID of the event target
    #[must_use]
    pub fn element_id(&self) -> &str {
        match self {
            Self::Click { element_id } | Self::Input { element_id, .. } => element_id,
        }
    }
}

/// In-memory document holding one mounted tree
#[derive(Debug)]
pub struct MockDom {
    /// Root element
    pub root: DomElement,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty document with a `root` container
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("div").with_id("root"),
            event_history: Vec::new(),
        }
    }

    /// Replaces the root container's content with `tree`
    pub fn mount(&mut self, tree: DomElement) {
        self.root.children = vec![tree];
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.root.find(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.root.find_mut(id)
    }

    /// Gets the full text of an element by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<String> {
        self.get_element(id).map(DomElement::text)
    }

    /// Gets the `value` attribute of an element by ID
    #[must_use]
    pub fn get_value(&self, id: &str) -> Option<&str> {
        self.get_element(id).and_then(|e| e.get_attr("value"))
    }

    /// Replaces the element with `replacement.id`, keeping its position.
    ///
    /// Returns false when no such element is mounted.
    pub fn replace_element(&mut self, replacement: DomElement) -> bool {
        match self.root.find_mut(&replacement.id) {
            Some(slot) => {
                *slot = replacement;
                true
            }
            None => false,
        }
    }

    /// Records an event and applies its default action.
    ///
    /// Input events write the value into the target's `value` attribute,
    /// the way typing updates a real field before listeners run.
    pub fn dispatch_event(&mut self, event: DomEvent) {
        if let DomEvent::Input { element_id, value } = &event {
            if let Some(elem) = self.root.find_mut(element_id) {
                elem.set_attr("value", value);
            }
        }
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> DomElement {
        DomElement::new("section")
            .with_id("app")
            .with_child(DomElement::new("h1").with_text("Title"))
            .with_child(
                DomElement::new("ul").with_id("list").with_children([
                    DomElement::new("li")
                        .with_id("item-1")
                        .with_class("row")
                        .with_text("one"),
                    DomElement::new("li")
                        .with_id("item-2")
                        .with_class("row")
                        .with_text("two"),
                ]),
            )
            .with_child(
                DomElement::new("input")
                    .with_id("field")
                    .with_attr("value", ""),
            )
    }

    // ===== DomElement tests =====

    #[test]
    fn test_dom_element_new() {
        let elem = DomElement::new("span");
        assert_eq!(elem.tag, "span");
        assert!(elem.id.is_empty());
        assert!(elem.text_content.is_empty());
    }

    #[test]
    fn test_dom_element_default() {
        assert_eq!(DomElement::default().tag, "div");
    }

    #[test]
    fn test_dom_element_builders() {
        let elem = DomElement::new("input")
            .with_id("x")
            .with_text("t")
            .with_class("a")
            .with_attr("type", "text");
        assert_eq!(elem.id, "x");
        assert_eq!(elem.text_content, "t");
        assert!(elem.has_class("a"));
        assert_eq!(elem.get_attr("type"), Some("text"));
        assert_eq!(elem.get_attr("missing"), None);
    }

    #[test]
    fn test_dom_element_class_not_duplicated() {
        let elem = DomElement::new("div").with_class("a").with_class("a");
        assert_eq!(elem.classes, vec!["a".to_string()]);
    }

    #[test]
    fn test_dom_element_find_nested() {
        let tree = sample_tree();
        assert_eq!(tree.find("item-2").unwrap().text_content, "two");
        assert_eq!(tree.find("app").unwrap().tag, "section");
        assert!(tree.find("nope").is_none());
    }

    #[test]
    fn test_dom_element_find_mut() {
        let mut tree = sample_tree();
        tree.find_mut("item-1").unwrap().text_content = "uno".into();
        assert_eq!(tree.find("item-1").unwrap().text_content, "uno");
    }

    #[test]
    fn test_dom_element_find_by_class_in_order() {
        let tree = sample_tree();
        let rows: Vec<&str> = tree
            .find_by_class("row")
            .into_iter()
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(rows, vec!["item-1", "item-2"]);
    }

    #[test]
    fn test_dom_element_text_concatenates() {
        let tree = sample_tree();
        assert_eq!(tree.text(), "Titleonetwo");
        assert_eq!(tree.find("list").unwrap().text(), "onetwo");
    }

    // ===== DomEvent tests =====

    #[test]
    fn test_dom_event_constructors() {
        assert_eq!(
            DomEvent::click("b"),
            DomEvent::Click {
                element_id: "b".into()
            }
        );
        assert_eq!(
            DomEvent::input("f", "12"),
            DomEvent::Input {
                element_id: "f".into(),
                value: "12".into()
            }
        );
    }

    #[test]
    fn test_dom_event_element_id() {
        assert_eq!(DomEvent::click("b").element_id(), "b");
        assert_eq!(DomEvent::input("f", "1").element_id(), "f");
    }

    // ===== MockDom tests =====

    #[test]
    fn test_mock_dom_new_is_empty() {
        let dom = MockDom::new();
        assert_eq!(dom.root.id, "root");
        assert!(dom.root.children.is_empty());
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_mock_dom_mount_replaces_content() {
        let mut dom = MockDom::new();
        dom.mount(sample_tree());
        dom.mount(DomElement::new("p").with_id("other"));
        assert!(dom.get_element("app").is_none());
        assert!(dom.get_element("other").is_some());
    }

    #[test]
    fn test_mock_dom_get_element_text() {
        let mut dom = MockDom::new();
        dom.mount(sample_tree());
        assert_eq!(dom.get_element_text("list").as_deref(), Some("onetwo"));
        assert_eq!(dom.get_element_text("missing"), None);
    }

    #[test]
    fn test_mock_dom_replace_element() {
        let mut dom = MockDom::new();
        dom.mount(sample_tree());
        let replaced = dom.replace_element(DomElement::new("ol").with_id("list"));
        assert!(replaced);
        assert_eq!(dom.get_element("list").unwrap().tag, "ol");
        assert!(dom.get_element("item-1").is_none());
    }

    #[test]
    fn test_mock_dom_replace_missing_element() {
        let mut dom = MockDom::new();
        assert!(!dom.replace_element(DomElement::new("p").with_id("ghost")));
    }

    #[test]
    fn test_mock_dom_input_sets_value() {
        let mut dom = MockDom::new();
        dom.mount(sample_tree());
        dom.dispatch_event(DomEvent::input("field", "42"));
        assert_eq!(dom.get_value("field"), Some("42"));
        assert_eq!(dom.event_history().len(), 1);
    }

    #[test]
    fn test_mock_dom_click_is_recorded() {
        let mut dom = MockDom::new();
        dom.mount(sample_tree());
        dom.dispatch_event(DomEvent::click("item-1"));
        assert_eq!(dom.event_history(), &[DomEvent::click("item-1")]);
        dom.clear_event_history();
        assert!(dom.event_history().is_empty());
    }

    #[test]
    fn test_mock_dom_get_element_mut() {
        let mut dom = MockDom::new();
        dom.mount(sample_tree());
        dom.get_element_mut("field").unwrap().set_attr("value", "7");
        assert_eq!(dom.get_value("field"), Some("7"));
    }
}
