//! Shared element handles for a page tree.
//!
//! An [`Element`] is a cheap clone-to-share handle onto one node of the page:
//! cloning it hands the same underlying state to an event handler, so a
//! handler can flip visibility or toggle a class on an element the page still
//! owns. Elements are built once when the page is assembled and mutated only
//! from event handlers afterwards.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

/// What kind of node an element is.
///
/// Handlers use this to decide whether a click target is selectable
/// (list items) or just structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// A text input with a user-editable value.
    Input,
    /// A generic block container (wrappers, lists, message boxes).
    Block,
    /// A selectable list item with a text label.
    Item,
}

#[derive(Debug)]
struct ElementInner {
    id: String,
    kind: ElementKind,
    /// Current input value (inputs only; empty otherwise).
    value: String,
    /// Text content (item labels, message text).
    text: String,
    classes: BTreeSet<String>,
    attrs: HashMap<String, String>,
    visible: bool,
    children: Vec<Element>,
}

/// A handle onto one node of the page tree.
///
/// `Clone` shares the underlying node rather than copying it.
#[derive(Debug, Clone)]
pub struct Element {
    inner: Arc<RwLock<ElementInner>>,
}

fn new_inner(id: String, kind: ElementKind, text: String) -> ElementInner {
    ElementInner {
        id,
        kind,
        value: String::new(),
        text,
        classes: BTreeSet::new(),
        attrs: HashMap::new(),
        visible: true,
        children: Vec::new(),
    }
}

impl Element {
    fn with_inner(inner: ElementInner) -> Self {
        Self {
            inner: Arc::new(RwLock::new(inner)),
        }
    }

    /// Create a text input element.
    pub fn input(id: impl Into<String>) -> Self {
        Self::with_inner(new_inner(id.into(), ElementKind::Input, String::new()))
    }

    /// Create a block container element.
    pub fn block(id: impl Into<String>) -> Self {
        Self::with_inner(new_inner(id.into(), ElementKind::Block, String::new()))
    }

    /// Create a list item element with a text label.
    pub fn item(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::with_inner(new_inner(id.into(), ElementKind::Item, text.into()))
    }

    // -------------------------------------------------------------------------
    // Builder methods (page assembly)
    // -------------------------------------------------------------------------

    /// Add a CSS class.
    pub fn class(self, class: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.classes.insert(class.into());
        }
        self
    }

    /// Set an attribute.
    pub fn attr(self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.attrs.insert(name.into(), value.into());
        }
        self
    }

    /// Set the initial input value.
    pub fn value_initial(self, value: impl Into<String>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
        self
    }

    /// Start the element hidden (error containers begin this way).
    pub fn hidden(self) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.visible = false;
        }
        self
    }

    /// Append a child element.
    pub fn child(self, child: Element) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.children.push(child);
        }
        self
    }

    /// Append several child elements.
    pub fn children_from(self, children: impl IntoIterator<Item = Element>) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.children.extend(children);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    /// The element's stable id.
    pub fn id(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.id.clone())
            .unwrap_or_default()
    }

    /// The element's kind.
    pub fn kind(&self) -> ElementKind {
        self.inner
            .read()
            .map(|guard| guard.kind)
            .unwrap_or(ElementKind::Block)
    }

    /// Current input value.
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Set the input value. Does not dispatch an input event; programmatic
    /// writes are silent, same as assigning `.value` on a real input.
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
        }
    }

    /// Text content (item labels).
    pub fn text(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.text.clone())
            .unwrap_or_default()
    }

    /// Whether the element is currently visible.
    pub fn is_visible(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.visible)
            .unwrap_or(false)
    }

    /// Show or hide the element.
    pub fn set_visible(&self, visible: bool) {
        if let Ok(mut guard) = self.inner.write() {
            guard.visible = visible;
        }
    }

    /// Check for a CSS class.
    pub fn has_class(&self, class: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.classes.contains(class))
            .unwrap_or(false)
    }

    /// Add a CSS class (no-op if already present).
    pub fn add_class(&self, class: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.classes.insert(class.to_string());
        }
    }

    /// Remove a CSS class (no-op if absent).
    pub fn remove_class(&self, class: &str) {
        if let Ok(mut guard) = self.inner.write() {
            guard.classes.remove(class);
        }
    }

    /// Read an attribute.
    pub fn attr_value(&self, name: &str) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.attrs.get(name).cloned())
    }

    /// Handles to the element's direct children.
    pub fn child_elements(&self) -> Vec<Element> {
        self.inner
            .read()
            .map(|guard| guard.children.clone())
            .unwrap_or_default()
    }

    /// Whether two handles point at the same underlying node.
    pub fn same_node(&self, other: &Element) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
