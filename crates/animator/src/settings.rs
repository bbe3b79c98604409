//! Animator settings

use crate::result::{AnimatorResult, ConfigurationError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default prefix for generated element ids
pub const DEFAULT_ID_PREFIX: &str = "animator_";

/// Default prefix for generated class names
pub const DEFAULT_CLASS_PREFIX: &str = "animator-";

/// Which play state `toggle` compares against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToggleMode {
    /// Computed play state captured once at construction
    #[default]
    Snapshot,
    /// Computed play state read again on every toggle
    Live,
}

/// Animator settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnimatorSettings {
    /// Prefix for the id given to elements that have none
    pub id_prefix: String,
    /// Prefix for the generated class name
    pub class_prefix: String,
    /// Toggle behavior
    pub toggle: ToggleMode,
}

impl Default for AnimatorSettings {
    fn default() -> Self {
        Self {
            id_prefix: DEFAULT_ID_PREFIX.to_string(),
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
            toggle: ToggleMode::Snapshot,
        }
    }
}

impl AnimatorSettings {
    /// Create default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the id prefix
    #[must_use]
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    /// Set the class prefix
    #[must_use]
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the toggle mode
    #[must_use]
    pub const fn with_toggle(mut self, toggle: ToggleMode) -> Self {
        self.toggle = toggle;
        self
    }

    /// Reject prefixes that cannot start a class name or contain whitespace.
    pub fn validate(&self) -> AnimatorResult<()> {
        if self.class_prefix.is_empty() {
            return Err(ConfigurationError::invalid_settings(
                "class prefix must not be empty",
            ));
        }
        if self.class_prefix.starts_with(|c: char| c.is_ascii_digit()) {
            return Err(ConfigurationError::invalid_settings(format!(
                "class prefix '{}' starts with a digit",
                self.class_prefix
            )));
        }
        for (field, value) in [("id", &self.id_prefix), ("class", &self.class_prefix)] {
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigurationError::invalid_settings(format!(
                    "{field} prefix '{value}' contains whitespace"
                )));
            }
        }
        Ok(())
    }

    /// Parse settings from JSON text; missing fields take their defaults
    pub fn from_json_str(json: &str) -> AnimatorResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse settings from YAML text; missing fields take their defaults
    pub fn from_yaml_str(yaml: &str) -> AnimatorResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load settings from a `.json` file, or YAML for any other extension
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
