//! Per-element animation controller.
//!
//! Construction generates the stylesheet, tags the element with the generated
//! class and appends the stylesheet to the document. Everything after that is
//! an inline style write on the element.
//!
//! ```rust
//! use animator::mock::{MockDocument, MockElement};
//! use animator::{AnimationSpec, Animator, PlayState};
//!
//! let mut doc = MockDocument::new();
//! doc.add_element(MockElement::new("div").with_id("logo"));
//!
//! let fade = AnimationSpec::new("fade")
//!     .duration("2s")
//!     .keyframe("0%", [("opacity", "0")])
//!     .keyframe("100%", [("opacity", "1")]);
//!
//! let animator = Animator::create(&mut doc, "#logo", &fade.into()).unwrap();
//! animator.pause().seek("-1s");
//!
//! assert_eq!(animator.inline_play_state(), Some(PlayState::Paused));
//! assert_eq!(doc.stylesheets().len(), 1);
//! ```

use crate::animation::AnimationConfig;
use crate::css::StyleRuleBuilder;
use crate::element::{
    ElementHandle, ElementResolver, StylesheetSink, Target, DELAY_PROPERTY, PLAY_STATE_PROPERTY,
};
use crate::id::{IdGenerator, RandomIdGenerator};
use crate::result::AnimatorResult;
use crate::settings::{AnimatorSettings, ToggleMode};
use serde::{Deserialize, Serialize};
use std::fmt;

/// `animation-play-state` values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    /// Animation advances
    Running,
    /// Animation is frozen at its current point
    Paused,
}

impl PlayState {
    /// CSS keyword
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }

    /// Parse a CSS keyword (surrounding whitespace and case ignored)
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("running") {
            Some(Self::Running)
        } else if value.eq_ignore_ascii_case("paused") {
            Some(Self::Paused)
        } else {
            None
        }
    }
}

impl fmt::Display for PlayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controls the CSS animation attached to one element
#[derive(Debug, Clone)]
pub struct Animator<E: ElementHandle> {
    element: E,
    id: String,
    class_name: String,
    stylesheet: String,
    computed_play_state: Option<String>,
    toggle: ToggleMode,
}

impl<E: ElementHandle> Animator<E> {
    /// Attach `config` to `target` with default settings and random ids.
    pub fn create<D>(
        document: &mut D,
        target: impl Into<Target<E>>,
        config: &AnimationConfig,
    ) -> AnimatorResult<Self>
    where
        D: ElementResolver<Element = E> + StylesheetSink,
    {
        Self::create_with(
            document,
            target,
            config,
            &AnimatorSettings::default(),
            &mut RandomIdGenerator,
        )
    }

    /// Attach `config` to `target`.
    ///
    /// The stylesheet is generated before the document is touched and the
    /// element is only written once the stylesheet has been appended, so a
    /// configuration or sink error leaves both unchanged. Each call appends a new
    /// stylesheet; nothing is ever removed.
    pub fn create_with<D, G>(
        document: &mut D,
        target: impl Into<Target<E>>,
        config: &AnimationConfig,
        settings: &AnimatorSettings,
        ids: &mut G,
    ) -> AnimatorResult<Self>
    where
        D: ElementResolver<Element = E> + StylesheetSink,
        G: IdGenerator,
    {
        settings.validate()?;
        config.validate()?;
        let element = target.into().resolve(&*document)?;

        let id = ids.next_id();
        let class_name = format!("{}{id}", settings.class_prefix);
        let generated = StyleRuleBuilder::new(&class_name).config(config).build()?;

        document.append(&generated.content)?;

        if element.id().map_or(true, |current| current.is_empty()) {
            let element_id = format!("{}{id}", settings.id_prefix);
            tracing::trace!(id = %element_id, "assigned element id");
            element.set_id(&element_id);
        }
        element.add_class(&class_name);
        let computed_play_state = element.computed_style(PLAY_STATE_PROPERTY);

        tracing::debug!(
            class = %class_name,
            animations = %generated.animation_names.join(","),
            computed_play_state = ?computed_play_state,
            "animator attached"
        );

        Ok(Self {
            element,
            id,
            class_name,
            stylesheet: generated.content,
            computed_play_state,
            toggle: settings.toggle,
        })
    }

    /// Run the animation
    pub fn play(&self) -> &Self {
        self.set_play_state(PlayState::Running);
        self
    }

    /// Pause the animation
    pub fn pause(&self) -> &Self {
        self.set_play_state(PlayState::Paused);
        self
    }

    /// Play unless the reference play state is `running`, in which case pause.
    ///
    /// With [`ToggleMode::Snapshot`] the reference is the computed play state
    /// captured at construction, so repeated toggles keep making the same
    /// choice. [`ToggleMode::Live`] reads the computed state on every call.
    pub fn toggle(&self) -> &Self {
        let reference = match self.toggle {
            ToggleMode::Snapshot => self.computed_play_state.clone(),
            ToggleMode::Live => self.element.computed_style(PLAY_STATE_PROPERTY),
        };

        if reference.as_deref().and_then(PlayState::parse) == Some(PlayState::Running) {
            self.pause()
        } else {
            self.play()
        }
    }

    /// Jump to a point in the animation by writing `animation-delay`.
    ///
    /// The value is passed through unvalidated; negative delays start the
    /// animation part-way through.
    pub fn seek(&self, value: &str) -> &Self {
        tracing::trace!(class = %self.class_name, delay = %value, "seek");
        self.element.set_inline_style(DELAY_PROPERTY, value);
        self
    }

    fn set_play_state(&self, state: PlayState) {
        tracing::trace!(class = %self.class_name, state = %state, "set play state");
        self.element
            .set_inline_style(PLAY_STATE_PROPERTY, state.as_str());
    }

    /// Generated identifier
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Generated class name
    #[must_use]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The animated element
    #[must_use]
    pub fn element(&self) -> &E {
        &self.element
    }

    /// CSS text that was appended to the document
    #[must_use]
    pub fn stylesheet(&self) -> &str {
        &self.stylesheet
    }

    /// Computed play state captured at construction
    #[must_use]
    pub fn computed_snapshot(&self) -> Option<&str> {
        self.computed_play_state.as_deref()
    }

    /// Toggle behavior in effect
    #[must_use]
    pub const fn toggle_mode(&self) -> ToggleMode {
        self.toggle
    }

    /// Inline play state, if one has been written and is recognized
    #[must_use]
    pub fn inline_play_state(&self) -> Option<PlayState> {
        self.element
            .inline_style(PLAY_STATE_PROPERTY)
            .as_deref()
            .and_then(PlayState::parse)
    }
}
