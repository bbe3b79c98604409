//! Declarative animation options.
//!
//! An [`AnimationSpec`] describes one named animation: the timing fields that
//! end up in the `animation` shorthand and the keyframes that end up in its
//! `@keyframes` block. An [`AnimationConfig`] is either one spec or an ordered
//! sequence of them.
//!
//! Options can be built in code or parsed from JSON/YAML:
//!
//! ```rust
//! use animator::{AnimationConfig, AnimationSpec};
//!
//! let fade = AnimationSpec::new("fade")
//!     .duration("2s")
//!     .keyframe("0%", [("opacity", "0")])
//!     .keyframe("100%", [("opacity", "1")]);
//!
//! let parsed = AnimationConfig::from_json_str(
//!     r#"{"name": "fade", "duration": "2s",
//!         "keyframes": {"0%": {"opacity": 0}, "100%": {"opacity": 1}}}"#,
//! ).unwrap();
//!
//! assert_eq!(parsed, AnimationConfig::from(fade));
//! ```

use crate::result::{AnimatorResult, ConfigurationError};
use indexmap::IndexMap;
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// CSS property name → value, in insertion order.
pub type Declarations = IndexMap<String, String>;

/// Keyframe selector (`0%`, `from`, `to`, ...) → declarations, in insertion order.
pub type Keyframes = IndexMap<String, Declarations>;

/// One named animation: shorthand timing fields plus keyframes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSpec {
    /// Animation name, shared by the shorthand and the `@keyframes` rule
    #[serde(default, deserialize_with = "css_text::required")]
    pub name: String,
    /// `animation-duration`
    #[serde(default, deserialize_with = "css_text::optional", skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    /// `animation-timing-function`
    #[serde(default, deserialize_with = "css_text::optional", skip_serializing_if = "Option::is_none")]
    pub timing_function: Option<String>,
    /// `animation-delay`
    #[serde(default, deserialize_with = "css_text::optional", skip_serializing_if = "Option::is_none")]
    pub delay: Option<String>,
    /// `animation-iteration-count`
    #[serde(default, deserialize_with = "css_text::optional", skip_serializing_if = "Option::is_none")]
    pub iteration_count: Option<String>,
    /// `animation-direction`
    #[serde(default, deserialize_with = "css_text::optional", skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// `animation-fill-mode`
    #[serde(default, deserialize_with = "css_text::optional", skip_serializing_if = "Option::is_none")]
    pub fill_mode: Option<String>,
    /// `animation-play-state`
    #[serde(default, deserialize_with = "css_text::optional", skip_serializing_if = "Option::is_none")]
    pub play_state: Option<String>,
    /// Keyframe blocks
    #[serde(default, deserialize_with = "css_text::keyframes")]
    pub keyframes: Keyframes,
}

impl AnimationSpec {
    /// Create a spec with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Set the duration
    #[must_use]
    pub fn duration(mut self, value: impl Into<String>) -> Self {
        self.duration = Some(value.into());
        self
    }

    /// Set the timing function
    #[must_use]
    pub fn timing_function(mut self, value: impl Into<String>) -> Self {
        self.timing_function = Some(value.into());
        self
    }

    /// Set the delay
    #[must_use]
    pub fn delay(mut self, value: impl Into<String>) -> Self {
        self.delay = Some(value.into());
        self
    }

    /// Set the iteration count
    #[must_use]
    pub fn iteration_count(mut self, value: impl Into<String>) -> Self {
        self.iteration_count = Some(value.into());
        self
    }

    /// Set the direction
    #[must_use]
    pub fn direction(mut self, value: impl Into<String>) -> Self {
        self.direction = Some(value.into());
        self
    }

    /// Set the fill mode
    #[must_use]
    pub fn fill_mode(mut self, value: impl Into<String>) -> Self {
        self.fill_mode = Some(value.into());
        self
    }

    /// Set the declared play state
    #[must_use]
    pub fn play_state(mut self, value: impl Into<String>) -> Self {
        self.play_state = Some(value.into());
        self
    }

    /// Add (or extend) a keyframe block.
    ///
    /// Declarations for a selector that already exists are merged into it,
    /// keeping the selector's original position.
    #[must_use]
    pub fn keyframe<K, V>(
        mut self,
        selector: impl Into<String>,
        declarations: impl IntoIterator<Item = (K, V)>,
    ) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let frame = self.keyframes.entry(selector.into()).or_default();
        for (property, value) in declarations {
            frame.insert(property.into(), value.into());
        }
        self
    }

    /// Shorthand tokens in `animation` order; missing fields are empty.
    #[must_use]
    pub fn shorthand_fields(&self) -> [&str; 8] {
        fn field(value: &Option<String>) -> &str {
            value.as_deref().unwrap_or("")
        }
        [
            self.name.as_str(),
            field(&self.duration),
            field(&self.timing_function),
            field(&self.delay),
            field(&self.iteration_count),
            field(&self.direction),
            field(&self.fill_mode),
            field(&self.play_state),
        ]
    }

    fn has_name(&self) -> bool {
        !self.name.trim().is_empty()
    }
}

/// One animation or an ordered sequence of them.
///
/// Sequence order is the order of the comma-separated shorthand values and of
/// the generated `@keyframes` blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AnimationConfig {
    /// A single animation
    Single(AnimationSpec),
    /// Several animations applied together
    Sequence(Vec<AnimationSpec>),
}

impl AnimationConfig {
    /// The animations in application order
    #[must_use]
    pub fn specs(&self) -> &[AnimationSpec] {
        match self {
            Self::Single(spec) => std::slice::from_ref(spec),
            Self::Sequence(specs) => specs,
        }
    }

    /// Number of animations
    #[must_use]
    pub fn len(&self) -> usize {
        self.specs().len()
    }

    /// True for an empty sequence
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.specs().is_empty()
    }

    /// Check that every animation is named and a sequence is non-empty.
    pub fn validate(&self) -> AnimatorResult<()> {
        match self {
            Self::Single(spec) => {
                if !spec.has_name() {
                    return Err(ConfigurationError::MissingName { index: None });
                }
            }
            Self::Sequence(specs) => {
                if specs.is_empty() {
                    return Err(ConfigurationError::EmptySequence);
                }
                if let Some(index) = specs.iter().position(|spec| !spec.has_name()) {
                    return Err(ConfigurationError::MissingName { index: Some(index) });
                }
            }
        }
        Ok(())
    }

    /// Interpret an untyped options value.
    ///
    /// Objects become [`AnimationConfig::Single`], arrays of objects become
    /// [`AnimationConfig::Sequence`]; anything else is rejected.
    pub fn from_value(value: serde_json::Value) -> AnimatorResult<Self> {
        match value {
            serde_json::Value::Object(_) => Ok(Self::Single(serde_json::from_value(value)?)),
            serde_json::Value::Array(items) => {
                let mut specs = Vec::with_capacity(items.len());
                for (index, item) in items.into_iter().enumerate() {
                    if !item.is_object() {
                        return Err(ConfigurationError::invalid_shape(format!(
                            "{} at index {index}",
                            json_type_name(&item)
                        )));
                    }
                    specs.push(serde_json::from_value(item)?);
                }
                Ok(Self::Sequence(specs))
            }
            other => Err(ConfigurationError::invalid_shape(json_type_name(&other))),
        }
    }

    /// Parse options from JSON text
    pub fn from_json_str(json: &str) -> AnimatorResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Parse options from YAML text
    pub fn from_yaml_str(yaml: &str) -> AnimatorResult<Self> {
        let value: serde_json::Value = serde_yaml_ng::from_str(yaml)?;
        Self::from_value(value)
    }

    /// Load options from a `.json`, `.yaml` or `.yml` file.
    ///
    /// Files with any other extension are read as YAML, which also accepts JSON.
    pub fn load(path: &Path) -> AnimatorResult<Self> {
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&text)
        } else {
            Self::from_yaml_str(&text)
        }
    }
}

impl From<AnimationSpec> for AnimationConfig {
    fn from(spec: AnimationSpec) -> Self {
        Self::Single(spec)
    }
}

impl From<Vec<AnimationSpec>> for AnimationConfig {
    fn from(specs: Vec<AnimationSpec>) -> Self {
        Self::Sequence(specs)
    }
}

impl<'de> Deserialize<'de> for AnimationConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(de::Error::custom)
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Scalars in option files render to their CSS text: `2` → `"2"`, `0.5` → `"0.5"`.
mod css_text {
    use super::{de, fmt, Deserialize, Deserializer, IndexMap, Keyframes, Visitor};

    struct CssTextVisitor;

    impl<'de> Visitor<'de> for CssTextVisitor {
        type Value = Option<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a CSS value as a string, number or boolean")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
            Ok(Some(v))
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
            Ok(Some(v.to_string()))
        }

        fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
            Ok(None)
        }

        fn visit_some<D: Deserializer<'de>>(self, d: D) -> Result<Self::Value, D::Error> {
            d.deserialize_any(self)
        }
    }

    /// A scalar that may be null.
    struct CssText(Option<String>);

    impl<'de> Deserialize<'de> for CssText {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            d.deserialize_any(CssTextVisitor).map(CssText)
        }
    }

    pub(super) fn optional<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        d.deserialize_any(CssTextVisitor)
    }

    pub(super) fn required<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
        Ok(optional(d)?.unwrap_or_default())
    }

    pub(super) fn keyframes<'de, D: Deserializer<'de>>(d: D) -> Result<Keyframes, D::Error> {
        let raw: Option<IndexMap<String, IndexMap<String, CssText>>> = Option::deserialize(d)?;
        Ok(raw
            .unwrap_or_default()
            .into_iter()
            .map(|(selector, declarations)| {
                let declarations = declarations
                    .into_iter()
                    .map(|(property, CssText(value))| (property, value.unwrap_or_default()))
                    .collect();
                (selector, declarations)
            })
            .collect())
    }
}
