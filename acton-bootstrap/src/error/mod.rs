//! Error types and error handling
//!
//! Every failure here signals a programming mistake in widget composition
//! (unbalanced push/pop, a misspelled template name) or malformed session
//! data. None of them are recovered locally: they propagate with `?` and
//! abort the current render.

use thiserror::Error;

/// Rendering error type
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// A frame operation was attempted on an empty stack
    #[error("Stack is empty")]
    EmptyStack,

    /// The active frame has no such key
    #[error("Unknown key in current frame: {key}")]
    UnknownKey {
        /// The key that was looked up
        key: String,
    },

    /// No template is registered under this name
    #[error("Unknown template: {name}")]
    UnknownTemplate {
        /// The template name
        name: String,
    },

    /// `pop_scope` was called without a matching `push_scope`
    #[error("Template scope underflow")]
    ScopeUnderflow,

    /// A flash session entry did not hold a list of messages
    #[error("Unexpected value for flash key {key}: expected a list of messages")]
    UnexpectedFlashValue {
        /// The session key that was read
        key: String,
    },
}

impl BootstrapError {
    pub(crate) fn unknown_key(key: impl Into<String>) -> Self {
        Self::UnknownKey { key: key.into() }
    }

    pub(crate) fn unknown_template(name: impl Into<String>) -> Self {
        Self::UnknownTemplate { name: name.into() }
    }
}

/// Result alias used throughout the crate
pub type Result<T, E = BootstrapError> = std::result::Result<T, E>;
