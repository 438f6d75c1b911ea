//! Validation messages shown next to form controls
//!
//! Messages are keyed by field name, dotted paths included. Besides the
//! programmatic API they can be read from the JSON shape produced by most
//! validation layers: `{"email": {"required": "is required"}}`,
//! `{"email": ["is required"]}` or `{"email": "is required"}`.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

/// Message of one failed rule
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
    /// Text rendered in the help block, escaped
    pub message: String,
    /// Rule that produced it, when the source names one
    pub rule: Option<String>,
}

impl FieldError {
    /// Message without a rule name
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            rule: None,
        }
    }

    /// Message produced by `rule`
    #[must_use]
    pub fn for_rule(message: impl Into<String>, rule: impl Into<String>) -> Self {
        Self {
            rule: Some(rule.into()),
            ..Self::new(message)
        }
    }
}

/// Validation messages of a form, by field name
///
/// Fields iterate in name order.
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::forms::ValidationErrors;
///
/// let mut errors = ValidationErrors::new();
/// errors.add("user.email", "is required");
/// errors.add("user.email", "is not an address");
///
/// assert!(errors.contains("user.email"));
/// assert_eq!(errors.get("user.email").len(), 2);
/// assert!(errors.get("user.name").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<FieldError>>,
}

impl ValidationErrors {
    /// No messages
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read messages from a JSON object keyed by field name
    ///
    /// Each field maps to a message, a list of messages or an object of
    /// rule name to message. Anything else is skipped.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let mut errors = Self::new();
        let Some(fields) = value.as_object() else {
            tracing::debug!("validation errors are not an object");
            return errors;
        };
        for (field, messages) in fields {
            match messages {
                Value::String(message) => errors.add(field.as_str(), message.as_str()),
                Value::Array(items) => items
                    .iter()
                    .filter_map(Value::as_str)
                    .for_each(|message| errors.add(field.as_str(), message)),
                Value::Object(rules) => {
                    for (rule, message) in rules {
                        if let Some(message) = message.as_str() {
                            errors.push(field, FieldError::for_rule(message, rule.as_str()));
                        }
                    }
                }
                _ => tracing::debug!(field = %field, "skipping validation message"),
            }
        }
        errors
    }

    /// Add a message for `field`
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.push(field, FieldError::new(message));
    }

    /// Add a prepared message for `field`
    pub fn push(&mut self, field: impl Into<String>, error: FieldError) {
        self.fields.entry(field.into()).or_default().push(error);
    }

    /// Whether there is no message at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Whether `field` has a message
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Messages of `field`, in insertion order
    #[must_use]
    pub fn get(&self, field: &str) -> &[FieldError] {
        self.fields.get(field).map_or(&[], Vec::as_slice)
    }

    /// Fields and their messages
    pub fn fields(&self) -> impl Iterator<Item = (&str, &[FieldError])> {
        self.fields
            .iter()
            .map(|(field, errors)| (field.as_str(), errors.as_slice()))
    }

    /// Number of messages over all fields
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.values().map(Vec::len).sum()
    }

    /// Append every message of `other`
    pub fn extend(&mut self, other: Self) {
        for (field, errors) in other.fields {
            self.fields.entry(field).or_default().extend(errors);
        }
    }
}
