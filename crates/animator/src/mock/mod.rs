//! In-memory document for testing animators without a browser.
//!
//! [`MockDocument`] resolves simple selectors and records every stylesheet
//! appended to its head. [`MockElement`] is a shared handle, like a DOM
//! reference: clones observe the same id, classes and styles.
//!
//! ## Example
//!
//! ```rust
//! use animator::mock::{MockDocument, MockElement};
//! use animator::{AnimationSpec, Animator, ElementHandle};
//!
//! let mut doc = MockDocument::new();
//! let card = doc.add_element(MockElement::new("section").with_class("card"));
//!
//! let animator = Animator::create(&mut doc, ".card", &AnimationSpec::new("pop").into()).unwrap();
//! animator.play();
//!
//! assert!(card.has_class(animator.class_name()));
//! assert_eq!(card.inline_style("animation-play-state").as_deref(), Some("running"));
//! ```

mod document;
mod element;

pub use document::{MockDocument, SequentialIdGenerator};
pub use element::MockElement;
