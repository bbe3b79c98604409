//! Animator: CSS keyframe animations for a single element
//!
//! Generates a class rule and `@keyframes` blocks from declarative options,
//! appends them to the document head, tags the element with the class and
//! then drives playback through inline `animation-play-state` /
//! `animation-delay` writes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │   ┌──────────────┐    ┌──────────────────┐    ┌─────────────┐   │
//! │   │ Animation    │    │ StyleRuleBuilder │    │ Stylesheet  │   │
//! │   │ Config       │───►│ (class rule +    │───►│ Sink (head) │   │
//! │   │ (JSON/YAML)  │    │  @keyframes)     │    │             │   │
//! │   └──────────────┘    └──────────────────┘    └─────────────┘   │
//! │                                ▲                                │
//! │   ┌──────────────┐    ┌────────┴─────────┐                      │
//! │   │ Element      │◄───│ Animator         │ play/pause/toggle/   │
//! │   │ Handle       │    │ (controller)     │ seek                 │
//! │   └──────────────┘    └──────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The element and document are traits ([`ElementHandle`],
//! [`ElementResolver`], [`StylesheetSink`]). [`mock`] provides an in-memory
//! document; the `wasm` feature adds `web-sys` implementations.

#![warn(missing_docs)]

mod animation;
mod controller;
mod css;
mod element;
mod id;
mod result;
mod settings;

/// In-memory document and elements for tests
pub mod mock;

/// Browser bindings over `web-sys`
#[cfg(feature = "wasm")]
pub mod web;

pub use animation::{AnimationConfig, AnimationSpec, Declarations, Keyframes};
pub use controller::{Animator, PlayState};
pub use css::{
    build, shorthand, CssRule, GeneratedCss, KeyframesRule, StyleRuleBuilder, KEYFRAMES_AT_RULE,
};
pub use element::{
    ElementHandle, ElementResolver, StylesheetSink, Target, DELAY_PROPERTY, PLAY_STATE_PROPERTY,
};
pub use id::{to_base36, unique_id, IdGenerator, RandomIdGenerator};
pub use result::{AnimatorResult, ConfigurationError};
pub use settings::{AnimatorSettings, ToggleMode, DEFAULT_CLASS_PREFIX, DEFAULT_ID_PREFIX};

/// Prelude for convenient imports
pub mod prelude {
    pub use super::{
        AnimationConfig, AnimationSpec, Animator, AnimatorResult, AnimatorSettings,
        ConfigurationError, ElementHandle, ElementResolver, PlayState, StyleRuleBuilder,
        StylesheetSink, Target, ToggleMode,
    };
}
