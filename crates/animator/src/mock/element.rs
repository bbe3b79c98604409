//! Shared in-memory element

use crate::element::ElementHandle;
use indexmap::IndexMap;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementState {
    tag: String,
    id: String,
    classes: Vec<String>,
    inline: IndexMap<String, String>,
    computed: IndexMap<String, String>,
}

/// In-memory element handle
///
/// Computed styles come from inline styles first, then from values scripted
/// with [`MockElement::with_computed_style`] / [`MockElement::set_computed_style`],
/// which stand in for what the stylesheets would resolve to.
#[derive(Debug, Clone, Default)]
pub struct MockElement {
    state: Rc<RefCell<ElementState>>,
}

impl MockElement {
    /// Create an element with the given tag name
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(ElementState {
                tag: tag.to_ascii_lowercase(),
                ..ElementState::default()
            })),
        }
    }

    /// Set the id
    #[must_use]
    pub fn with_id(self, id: &str) -> Self {
        self.set_id(id);
        self
    }

    /// Add a class
    #[must_use]
    pub fn with_class(self, class: &str) -> Self {
        self.add_class(class);
        self
    }

    /// Script a computed style value
    #[must_use]
    pub fn with_computed_style(self, property: &str, value: &str) -> Self {
        self.set_computed_style(property, value);
        self
    }

    /// Script a computed style value on an existing handle
    pub fn set_computed_style(&self, property: &str, value: &str) {
        self.state
            .borrow_mut()
            .computed
            .insert(property.to_string(), value.to_string());
    }

    /// Tag name (lowercase)
    #[must_use]
    pub fn tag(&self) -> String {
        self.state.borrow().tag.clone()
    }

    /// Class list in insertion order
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.state.borrow().classes.clone()
    }

    /// Check for a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.state.borrow().classes.iter().any(|c| c == class)
    }

    /// Inline style declarations in write order
    #[must_use]
    pub fn inline_styles(&self) -> Vec<(String, String)> {
        self.state
            .borrow()
            .inline
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// True when both handles refer to the same element
    #[must_use]
    pub fn same_element(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl ElementHandle for MockElement {
    fn id(&self) -> Option<String> {
        let state = self.state.borrow();
        (!state.id.is_empty()).then(|| state.id.clone())
    }

    fn set_id(&self, id: &str) {
        self.state.borrow_mut().id = id.to_string();
    }

    fn add_class(&self, class: &str) {
        let mut state = self.state.borrow_mut();
        if !state.classes.iter().any(|c| c == class) {
            state.classes.push(class.to_string());
        }
    }

    fn set_inline_style(&self, property: &str, value: &str) {
        let mut state = self.state.borrow_mut();
        if value.is_empty() {
            state.inline.shift_remove(property);
        } else {
            state.inline.insert(property.to_string(), value.to_string());
        }
    }

    fn inline_style(&self, property: &str) -> Option<String> {
        self.state.borrow().inline.get(property).cloned()
    }

    fn computed_style(&self, property: &str) -> Option<String> {
        let state = self.state.borrow();
        state
            .inline
            .get(property)
            .or_else(|| state.computed.get(property))
            .cloned()
    }
}
