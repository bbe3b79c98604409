//! In-memory document: element registry, selector resolution and head

use super::element::MockElement;
use crate::element::{ElementHandle, ElementResolver, StylesheetSink};
use crate::id::IdGenerator;
use crate::result::AnimatorResult;

/// In-memory document
///
/// Supports `#id`, `.class`, tag and `*` selectors; the first match in
/// insertion order wins.
#[derive(Debug, Clone, Default)]
pub struct MockDocument {
    elements: Vec<MockElement>,
    stylesheets: Vec<String>,
}

impl MockDocument {
    /// Create an empty document
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element; returns a handle to it
    pub fn add_element(&mut self, element: MockElement) -> MockElement {
        self.elements.push(element.clone());
        element
    }

    /// Elements in insertion order
    #[must_use]
    pub fn elements(&self) -> &[MockElement] {
        &self.elements
    }

    /// Stylesheets appended to the head, oldest first
    #[must_use]
    pub fn stylesheets(&self) -> &[String] {
        &self.stylesheets
    }

    fn matches(element: &MockElement, selector: &str) -> bool {
        if selector == "*" {
            return true;
        }
        if let Some(id) = selector.strip_prefix('#') {
            return element.id().as_deref() == Some(id);
        }
        if let Some(class) = selector.strip_prefix('.') {
            return element.has_class(class);
        }
        element.tag().eq_ignore_ascii_case(selector)
    }
}

impl ElementResolver for MockDocument {
    type Element = MockElement;

    fn query_selector(&self, selector: &str) -> Option<MockElement> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }
        self.elements
            .iter()
            .find(|element| Self::matches(element, selector))
            .cloned()
    }
}

impl StylesheetSink for MockDocument {
    fn append(&mut self, css: &str) -> AnimatorResult<()> {
        tracing::trace!(index = self.stylesheets.len(), "appended stylesheet to mock head");
        self.stylesheets.push(css.to_string());
        Ok(())
    }
}

/// Deterministic ids: `<prefix>0`, `<prefix>1`, ...
#[derive(Debug, Clone)]
pub struct SequentialIdGenerator {
    prefix: String,
    next: u64,
}

impl SequentialIdGenerator {
    /// Start counting from zero
    #[must_use]
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            next: 0,
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&mut self) -> String {
        let id = format!("{}{}", self.prefix, self.next);
        self.next += 1;
        id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn doc() -> MockDocument {
        let mut doc = MockDocument::new();
        doc.add_element(MockElement::new("div").with_id("first").with_class("box"));
        doc.add_element(MockElement::new("span").with_class("box"));
        doc
    }

    #[test]
    fn id_selector() {
        let el = doc().query_selector("#first").unwrap();
        assert_eq!(el.tag(), "div");
    }

    #[test]
    fn class_selector_returns_first_match() {
        let el = doc().query_selector(".box").unwrap();
        assert_eq!(el.id().as_deref(), Some("first"));
    }

    #[test]
    fn tag_selector() {
        let el = doc().query_selector("SPAN").unwrap();
        assert_eq!(el.tag(), "span");
    }

    #[test]
    fn unmatched_and_empty_selectors() {
        assert!(doc().query_selector("#missing").is_none());
        assert!(doc().query_selector("  ").is_none());
    }

    #[test]
    fn append_records_stylesheets_in_order() {
        let mut doc = MockDocument::new();
        doc.append("a {}").unwrap();
        doc.append("b {}").unwrap();
        assert_eq!(doc.stylesheets(), ["a {}", "b {}"]);
    }

    #[test]
    fn sequential_ids() {
        let mut ids = SequentialIdGenerator::new("t");
        assert_eq!(ids.next_id(), "t0");
        assert_eq!(ids.next_id(), "t1");
    }
}
