//! Type-Safe CSS Generation for animations
//!
//! Turns an [`AnimationConfig`] into one class rule carrying the `animation`
//! shorthand plus one `@keyframes` block per animation:
//!
//! ```text
//! .animator-xyz { animation: fade 2s      ; } @keyframes fade { 0% { opacity: 0; } 100% { opacity: 1; } }
//! ```
//!
//! Missing optional fields are kept as empty shorthand tokens, so the spaces
//! between them survive verbatim. Browsers collapse the whitespace.

use crate::animation::{AnimationConfig, AnimationSpec};
use crate::result::{AnimatorResult, ConfigurationError};
use serde::{Deserialize, Serialize};

/// At-rule keyword for keyframe blocks
pub const KEYFRAMES_AT_RULE: &str = "@keyframes";

/// Generated CSS output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedCss {
    /// CSS content
    pub content: String,
    /// Class the rule is attached to
    pub class_name: String,
    /// Animation names, in shorthand order
    pub animation_names: Vec<String>,
}

/// A CSS rule with selector and declarations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CssRule {
    /// CSS selector
    pub selector: String,
    /// Property-value pairs
    pub declarations: Vec<(String, String)>,
}

impl CssRule {
    /// Create a new CSS rule
    #[must_use]
    pub fn new(selector: &str) -> Self {
        Self {
            selector: selector.to_string(),
            declarations: Vec::new(),
        }
    }

    /// Add a declaration
    #[must_use]
    pub fn declaration(mut self, property: &str, value: &str) -> Self {
        self.declarations
            .push((property.to_string(), value.to_string()));
        self
    }

    /// Render rule to a single-line CSS string
    #[must_use]
    pub fn render(&self) -> String {
        if self.declarations.is_empty() {
            return format!("{} {{ }}", self.selector);
        }

        let decls = self
            .declarations
            .iter()
            .map(|(prop, val)| format!("{prop}: {val};"))
            .collect::<Vec<_>>()
            .join(" ");

        format!("{} {{ {} }}", self.selector, decls)
    }
}

/// A `@keyframes` block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyframesRule {
    /// Animation name
    pub name: String,
    /// One rule per keyframe selector
    pub frames: Vec<CssRule>,
}

impl KeyframesRule {
    /// Keyframes for one animation, in the order they were declared
    #[must_use]
    pub fn from_spec(spec: &AnimationSpec) -> Self {
        let frames = spec
            .keyframes
            .iter()
            .map(|(selector, declarations)| {
                declarations
                    .iter()
                    .fold(CssRule::new(selector), |rule, (prop, val)| {
                        rule.declaration(prop, val)
                    })
            })
            .collect();

        Self {
            name: spec.name.clone(),
            frames,
        }
    }

    /// Render to CSS
    #[must_use]
    pub fn render(&self) -> String {
        if self.frames.is_empty() {
            return format!("{KEYFRAMES_AT_RULE} {} {{ }}", self.name);
        }

        let frames = self
            .frames
            .iter()
            .map(CssRule::render)
            .collect::<Vec<_>>()
            .join(" ");

        format!("{KEYFRAMES_AT_RULE} {} {{ {frames} }}", self.name)
    }
}

/// The `animation` shorthand for one spec, without terminator.
///
/// All eight fields are joined by single spaces, empty ones included.
#[must_use]
pub fn shorthand(spec: &AnimationSpec) -> String {
    spec.shorthand_fields().join(" ")
}

/// Builds the class rule and keyframe blocks for an animated element
#[derive(Debug, Clone)]
pub struct StyleRuleBuilder {
    class_name: String,
    animations: Vec<AnimationSpec>,
    config: Option<AnimationConfig>,
}

impl StyleRuleBuilder {
    /// Create a builder for the given class name (without leading dot)
    #[must_use]
    pub fn new(class_name: &str) -> Self {
        Self {
            class_name: class_name.to_string(),
            animations: Vec::new(),
            config: None,
        }
    }

    /// Use a whole configuration, replacing anything added so far
    #[must_use]
    pub fn config(mut self, config: &AnimationConfig) -> Self {
        self.animations.clear();
        self.config = Some(config.clone());
        self
    }

    /// Append one animation
    #[must_use]
    pub fn animation(mut self, spec: AnimationSpec) -> Self {
        if let Some(config) = self.config.take() {
            self.animations.extend(config.specs().iter().cloned());
        }
        self.animations.push(spec);
        self
    }

    /// Build the stylesheet
    ///
    /// # Errors
    ///
    /// Fails when the class name is empty, when there are no animations, or
    /// when an animation has no name. Nothing is rendered in that case.
    pub fn build(self) -> AnimatorResult<GeneratedCss> {
        if self.class_name.trim().is_empty() {
            return Err(ConfigurationError::invalid_settings("class name is empty"));
        }

        let config = match self.config {
            Some(config) => config,
            None if self.animations.len() == 1 => {
                AnimationConfig::from(self.animations.into_iter().next().unwrap_or_default())
            }
            None => AnimationConfig::from(self.animations),
        };
        config.validate()?;

        let specs = config.specs();
        let value = specs.iter().map(shorthand).collect::<Vec<_>>().join(",");
        let class_rule = CssRule::new(&format!(".{}", self.class_name))
            .declaration("animation", &value)
            .render();

        let keyframes = specs
            .iter()
            .map(|spec| KeyframesRule::from_spec(spec).render())
            .collect::<Vec<_>>()
            .join(" ");

        let content = format!("{class_rule} {keyframes}");

        tracing::debug!(
            class = %self.class_name,
            animations = specs.len(),
            bytes = content.len(),
            "built animation stylesheet"
        );

        Ok(GeneratedCss {
            content,
            class_name: self.class_name,
            animation_names: specs.iter().map(|spec| spec.name.clone()).collect(),
        })
    }
}

/// Build the stylesheet text for `config` attached to `class_name`.
pub fn build(config: &AnimationConfig, class_name: &str) -> AnimatorResult<String> {
    StyleRuleBuilder::new(class_name)
        .config(config)
        .build()
        .map(|css| css.content)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fade() -> AnimationSpec {
        AnimationSpec::new("fade")
            .duration("2s")
            .keyframe("0%", [("opacity", "0")])
            .keyframe("100%", [("opacity", "1")])
    }

    #[test]
    fn rule_render_inline() {
        let rule = CssRule::new("0%")
            .declaration("opacity", "0")
            .declaration("color", "red");
        assert_eq!(rule.render(), "0% { opacity: 0; color: red; }");
    }

    #[test]
    fn rule_render_empty_declarations() {
        assert_eq!(CssRule::new("50%").render(), "50% { }");
    }

    #[test]
    fn shorthand_keeps_empty_tokens() {
        assert_eq!(shorthand(&fade()), "fade 2s      ");
        assert_eq!(shorthand(&AnimationSpec::new("x")), "x       ");
    }

    #[test]
    fn shorthand_all_fields() {
        let spec = AnimationSpec::new("spin")
            .duration("1s")
            .timing_function("linear")
            .delay("0s")
            .iteration_count("infinite")
            .direction("normal")
            .fill_mode("none")
            .play_state("running");
        assert_eq!(
            shorthand(&spec),
            "spin 1s linear 0s infinite normal none running"
        );
    }

    #[test]
    fn single_animation_stylesheet() {
        let css = build(&fade().into(), "animator-xyz").unwrap();
        assert_eq!(
            css,
            ".animator-xyz { animation: fade 2s      ; } \
             @keyframes fade { 0% { opacity: 0; } 100% { opacity: 1; } }"
        );
    }

    #[test]
    fn sequence_joins_with_commas() {
        let config = AnimationConfig::from(vec![
            AnimationSpec::new("a").duration("1s"),
            AnimationSpec::new("b").duration("2s"),
        ]);
        let css = build(&config, "c").unwrap();
        assert_eq!(
            css,
            ".c { animation: a 1s      ,b 2s      ; } @keyframes a { } @keyframes b { }"
        );
    }

    #[test]
    fn keyframes_follow_declaration_order() {
        let spec = AnimationSpec::new("wobble")
            .keyframe("to", [("transform", "rotate(5deg)")])
            .keyframe("from", [("transform", "rotate(0)")]);
        let rendered = KeyframesRule::from_spec(&spec).render();
        assert_eq!(
            rendered,
            "@keyframes wobble { to { transform: rotate(5deg); } from { transform: rotate(0); } }"
        );
    }

    #[test]
    fn builder_collects_animations() {
        let css = StyleRuleBuilder::new("k")
            .animation(AnimationSpec::new("one"))
            .animation(AnimationSpec::new("two"))
            .build()
            .unwrap();
        assert_eq!(css.animation_names, vec!["one", "two"]);
        assert_eq!(css.class_name, "k");
    }

    #[test]
    fn builder_single_animation_is_not_a_sequence() {
        let from_builder = StyleRuleBuilder::new("k")
            .animation(fade())
            .build()
            .unwrap();
        let from_config = build(&fade().into(), "k").unwrap();
        assert_eq!(from_builder.content, from_config);
    }

    #[test]
    fn builder_appends_after_config() {
        let css = StyleRuleBuilder::new("k")
            .config(&fade().into())
            .animation(AnimationSpec::new("spin"))
            .build()
            .unwrap();
        assert_eq!(css.animation_names, vec!["fade", "spin"]);
    }

    #[test]
    fn missing_name_fails_build() {
        let err = build(&AnimationSpec::default().into(), "k").unwrap_err();
        assert!(matches!(err, ConfigurationError::MissingName { .. }));
    }

    #[test]
    fn empty_builder_fails() {
        let err = StyleRuleBuilder::new("k").build().unwrap_err();
        assert!(matches!(err, ConfigurationError::EmptySequence));
    }

    #[test]
    fn empty_class_name_fails() {
        let err = build(&fade().into(), "").unwrap_err();
        assert!(matches!(err, ConfigurationError::InvalidSettings { .. }));
    }
}
