//! Platform seams: the element being animated, the selector resolver and the
//! stylesheet sink.
//!
//! The controller only talks to these traits. [`crate::mock`] implements them
//! in memory; the `wasm` feature implements them over `web-sys`.

use crate::result::{AnimatorResult, ConfigurationError};

/// Inline/computed property holding the play state
pub const PLAY_STATE_PROPERTY: &str = "animation-play-state";

/// Inline property used for seeking
pub const DELAY_PROPERTY: &str = "animation-delay";

/// A handle to one live element.
///
/// Handles behave like DOM references: cloning one yields another handle to
/// the same element, and mutation goes through `&self`.
pub trait ElementHandle {
    /// Current id, `None` when the element has none (or an empty one)
    fn id(&self) -> Option<String>;

    /// Assign the id attribute
    fn set_id(&self, id: &str);

    /// Add a class to the element's class list
    fn add_class(&self, class: &str);

    /// Write an inline style property (kebab-case name)
    fn set_inline_style(&self, property: &str, value: &str);

    /// Read an inline style property
    fn inline_style(&self, property: &str) -> Option<String>;

    /// Read a computed style property
    fn computed_style(&self, property: &str) -> Option<String>;
}

/// Resolves selector strings to elements
pub trait ElementResolver {
    /// Element type produced
    type Element: ElementHandle;

    /// First element matching `selector`, if any
    fn query_selector(&self, selector: &str) -> Option<Self::Element>;
}

/// Append-only container for injected stylesheets (the document head).
pub trait StylesheetSink {
    /// Append one stylesheet with the given CSS text
    fn append(&mut self, css: &str) -> AnimatorResult<()>;
}

/// What to animate: a selector to resolve or an element already in hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target<E> {
    /// CSS selector resolved with [`ElementResolver::query_selector`]
    Selector(String),
    /// Element handle used as-is
    Element(E),
}

impl<E: ElementHandle> Target<E> {
    /// Wrap an element handle
    #[must_use]
    pub fn element(element: E) -> Self {
        Self::Element(element)
    }

    /// Resolve to exactly one element
    pub fn resolve<R>(self, resolver: &R) -> AnimatorResult<E>
    where
        R: ElementResolver<Element = E>,
    {
        match self {
            Self::Element(element) => Ok(element),
            Self::Selector(selector) => {
                let element = resolver
                    .query_selector(&selector)
                    .ok_or_else(|| ConfigurationError::target_not_found(&selector))?;
                tracing::trace!(selector = %selector, "resolved animation target");
                Ok(element)
            }
        }
    }
}

impl<E> From<&str> for Target<E> {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl<E> From<String> for Target<E> {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::mock::{MockDocument, MockElement};

    #[test]
    fn selector_resolves_through_document() {
        let mut doc = MockDocument::new();
        doc.add_element(MockElement::new("div").with_id("stage"));

        let target: Target<MockElement> = "#stage".into();
        let element = target.resolve(&doc).unwrap();
        assert_eq!(element.id().as_deref(), Some("stage"));
    }

    #[test]
    fn unmatched_selector_is_target_not_found() {
        let doc = MockDocument::new();
        let target: Target<MockElement> = Target::Selector(".missing".to_string());
        let err = target.resolve(&doc).unwrap_err();
        assert!(matches!(
            err,
            ConfigurationError::TargetNotFound { ref target } if target == ".missing"
        ));
    }

    #[test]
    fn element_target_skips_resolver() {
        let doc = MockDocument::new();
        let element = MockElement::new("span");
        let resolved = Target::element(element.clone()).resolve(&doc).unwrap();
        assert!(resolved.same_element(&element));
    }
}
