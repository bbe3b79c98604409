//! Result and error types for Animator.

use thiserror::Error;

/// Result type for Animator operations
pub type AnimatorResult<T> = Result<T, ConfigurationError>;

/// Errors raised while configuring an animator.
///
/// All of them are fatal and surface at construction time; a constructed
/// [`Animator`](crate::Animator) never fails afterwards.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Target selector did not match any element
    #[error("Animator: Expected an element or a selector that matches one, but '{target}' matched nothing")]
    TargetNotFound {
        /// Selector that was queried
        target: String,
    },

    /// Target was neither a selector string nor an element
    #[error("Animator: Expected an element or a selector string, but got {found}")]
    InvalidTarget {
        /// Description of what was passed instead
        found: String,
    },

    /// Raw options were neither an object nor a sequence of objects
    #[error("Animator: Provide right options: expected an object or an array of objects, got {found}")]
    InvalidShape {
        /// Description of what was found instead
        found: String,
    },

    /// An animation has no (or an empty) name
    #[error("Animator: Keyframes name is missing{}", .index.map(|i| format!(" (animation #{i})")).unwrap_or_default())]
    MissingName {
        /// Position within a sequence, `None` for a single animation
        index: Option<usize>,
    },

    /// A sequence with no animations in it
    #[error("Animator: Animation sequence is empty")]
    EmptySequence,

    /// Settings that cannot produce a usable id or class name
    #[error("Animator: Invalid settings: {message}")]
    InvalidSettings {
        /// Error message
        message: String,
    },

    /// A document operation (creating or appending the style element) failed
    #[error("Animator: DOM operation failed: {message}")]
    Dom {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("Animator: I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("Animator: JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML error
    #[error("Animator: YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

impl ConfigurationError {
    /// Create a target-not-found error
    #[must_use]
    pub fn target_not_found(target: impl Into<String>) -> Self {
        Self::TargetNotFound {
            target: target.into(),
        }
    }

    /// Create an invalid-target error
    #[must_use]
    pub fn invalid_target(found: impl Into<String>) -> Self {
        Self::InvalidTarget {
            found: found.into(),
        }
    }

    /// Create a DOM error
    #[must_use]
    pub fn dom(message: impl Into<String>) -> Self {
        Self::Dom {
            message: message.into(),
        }
    }

    /// Create an invalid-shape error
    #[must_use]
    pub fn invalid_shape(found: impl Into<String>) -> Self {
        Self::InvalidShape {
            found: found.into(),
        }
    }

    /// Create an invalid-settings error
    #[must_use]
    pub fn invalid_settings(message: impl Into<String>) -> Self {
        Self::InvalidSettings {
            message: message.into(),
        }
    }
}
