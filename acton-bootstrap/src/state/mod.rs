//! Stacked frame state for nestable widgets
//!
//! Composite helpers (cards inside groups, dropdowns inside menus, tab sets
//! inside tab panes) track their nesting with a [`StackedStates`] instance:
//! a strict LIFO stack of typed [`Frame`]s whose state is seeded from
//! per-kind defaults at push time.
//!
//! # Examples
//!
//! ```rust
//! use acton_bootstrap::state::{state_map, StackedStates};
//! use serde_json::json;
//!
//! let mut states = StackedStates::with_defaults([
//!     ("group", state_map(json!({ "open": false, "count": -1 }))),
//! ]);
//!
//! states.push("group", state_map(json!({ "open": true })));
//! assert_eq!(states.get_i64("count")?, -1);
//! assert!(states.get_bool("open")?);
//!
//! let frame = states.pop()?;
//! assert_eq!(frame.kind, "group");
//! assert!(states.is_empty());
//! # Ok::<(), acton_bootstrap::error::BootstrapError>(())
//! ```

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{BootstrapError, Result};

/// Key/value state carried by a frame, in insertion order
pub type StateMap = serde_json::Map<String, Value>;

/// Convert a JSON object into a [`StateMap`]
///
/// Anything other than an object yields an empty map.
#[must_use]
pub fn state_map(value: Value) -> StateMap {
    match value {
        Value::Object(map) => map,
        _ => StateMap::new(),
    }
}

/// Truthiness of a state value
///
/// `null`, `false`, `0`, the empty string and empty collections are false.
#[must_use]
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// One entry on the stack
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Frame discriminator (`"group"`, `"card"`, `"menu"`, ...)
    pub kind: String,
    /// Final state of the frame
    pub state: StateMap,
}

/// LIFO stack of typed frames with per-kind defaults
#[derive(Debug, Clone, Default)]
pub struct StackedStates {
    defaults: HashMap<String, StateMap>,
    frames: Vec<Frame>,
}

impl StackedStates {
    /// Create an empty stack with no registered defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stack with the given defaults per frame kind
    #[must_use]
    pub fn with_defaults<I, K>(defaults: I) -> Self
    where
        I: IntoIterator<Item = (K, StateMap)>,
        K: Into<String>,
    {
        let mut states = Self::new();
        states.configure_defaults(defaults);
        states
    }

    /// Register defaults for several frame kinds
    pub fn configure_defaults<I, K>(&mut self, defaults: I)
    where
        I: IntoIterator<Item = (K, StateMap)>,
        K: Into<String>,
    {
        for (kind, state) in defaults {
            self.register(kind, state);
        }
    }

    /// Register (or replace) the defaults for one frame kind
    pub fn register(&mut self, kind: impl Into<String>, defaults: StateMap) {
        self.defaults.insert(kind.into(), defaults);
    }

    /// Push a new frame
    ///
    /// The frame state is the registered defaults for `kind` (empty when
    /// unregistered) with every key of `partial` written on top.
    pub fn push(&mut self, kind: impl Into<String>, partial: StateMap) {
        let kind = kind.into();
        let mut state = self.defaults.get(&kind).cloned().unwrap_or_default();
        for (key, value) in partial {
            state.insert(key, value);
        }
        tracing::trace!(kind = %kind, depth = self.frames.len() + 1, "push frame");
        self.frames.push(Frame { kind, state });
    }

    /// Remove and return the top frame
    pub fn pop(&mut self) -> Result<Frame> {
        let frame = self.frames.pop().ok_or(BootstrapError::EmptyStack)?;
        tracing::trace!(kind = %frame.kind, depth = self.frames.len(), "pop frame");
        Ok(frame)
    }

    /// Kind of the top frame
    pub fn kind(&self) -> Result<&str> {
        self.top().map(|frame| frame.kind.as_str())
    }

    /// Whether the top frame exists and has the given kind
    #[must_use]
    pub fn is(&self, kind: &str) -> bool {
        self.frames.last().is_some_and(|frame| frame.kind == kind)
    }

    /// Whether the stack has no frame
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of frames on the stack
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Full state of the top frame
    pub fn current(&self) -> Result<&StateMap> {
        self.top().map(|frame| &frame.state)
    }

    /// Value of `key` in the top frame
    pub fn get(&self, key: &str) -> Result<&Value> {
        self.current()?
            .get(key)
            .ok_or_else(|| BootstrapError::unknown_key(key))
    }

    /// Overwrite `key` in the top frame; the key must already exist
    pub fn set(&mut self, key: &str, value: impl Into<Value>) -> Result<()> {
        let frame = self.frames.last_mut().ok_or(BootstrapError::EmptyStack)?;
        let slot = frame
            .state
            .get_mut(key)
            .ok_or_else(|| BootstrapError::unknown_key(key))?;
        *slot = value.into();
        Ok(())
    }

    /// Truthiness of `key` in the top frame
    pub fn get_bool(&self, key: &str) -> Result<bool> {
        self.get(key).map(truthy)
    }

    /// String value of `key` in the top frame, `None` for non-strings
    pub fn get_str(&self, key: &str) -> Result<Option<&str>> {
        self.get(key).map(Value::as_str)
    }

    /// Integer value of `key` in the top frame, `0` for non-integers
    pub fn get_i64(&self, key: &str) -> Result<i64> {
        self.get(key).map(|value| value.as_i64().unwrap_or_default())
    }

    fn top(&self) -> Result<&Frame> {
        self.frames.last().ok_or(BootstrapError::EmptyStack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    #[test]
    fn test_lifo_with_mutation() {
        let mut states = StackedStates::new();
        states.push("a", state_map(json!({"k": 1})));
        states.push("b", state_map(json!({"k": 2})));
        states.set("k", 9).unwrap();

        let b = states.pop().unwrap();
        assert_eq!(b.kind, "b");
        assert_eq!(b.state, state_map(json!({"k": 9})));

        let a = states.pop().unwrap();
        assert_eq!(a.kind, "a");
        assert_eq!(a.state, state_map(json!({"k": 1})));
        assert!(states.is_empty());
    }

    #[test]
    fn test_default_merge() {
        let mut states = StackedStates::with_defaults([("t", state_map(json!({"x": 1, "y": 2})))]);

        states.push("t", StateMap::new());
        assert_eq!(states.current().unwrap(), &state_map(json!({"x": 1, "y": 2})));

        states.push("t", state_map(json!({"x": 5})));
        assert_eq!(states.current().unwrap(), &state_map(json!({"x": 5, "y": 2})));

        states.push("t", state_map(json!({"x": 5, "y": 6})));
        assert_eq!(states.current().unwrap(), &state_map(json!({"x": 5, "y": 6})));
    }

    #[test]
    fn test_unregistered_kind_takes_partial() {
        let mut states = StackedStates::new();
        states.push("menu", StateMap::new());
        assert!(states.current().unwrap().is_empty());

        states.push("menu", state_map(json!({"level": 1, "extra": "yes"})));
        assert_eq!(states.get_i64("level").unwrap(), 1);
        assert_eq!(states.get_str("extra").unwrap(), Some("yes"));
    }

    #[test]
    fn test_empty_stack_errors() {
        let mut states = StackedStates::new();
        assert_eq!(states.pop().unwrap_err(), BootstrapError::EmptyStack);
        assert_eq!(states.kind().unwrap_err(), BootstrapError::EmptyStack);
        assert_eq!(states.current().unwrap_err(), BootstrapError::EmptyStack);
        assert_eq!(states.get("x").unwrap_err(), BootstrapError::EmptyStack);
        assert_eq!(states.set("x", 1).unwrap_err(), BootstrapError::EmptyStack);
        assert!(!states.is("group"));
    }

    #[test]
    fn test_unknown_key() {
        let mut states = StackedStates::new();
        states.push("card", state_map(json!({"open": false})));
        assert_eq!(
            states.get("closed").unwrap_err(),
            BootstrapError::unknown_key("closed")
        );
        assert_eq!(
            states.set("closed", true).unwrap_err(),
            BootstrapError::unknown_key("closed")
        );
    }

    #[test]
    fn test_set_only_touches_top() {
        let mut states = StackedStates::new();
        states.push("group", state_map(json!({"open": false})));
        states.push("card", state_map(json!({"open": false})));
        states.set("open", true).unwrap();
        assert!(states.is("card"));

        states.pop().unwrap();
        assert!(states.is("group"));
        assert!(!states.get_bool("open").unwrap());
    }

    #[test]
    fn test_truthy() {
        assert!(!truthy(&json!(null)));
        assert!(!truthy(&json!(0)));
        assert!(!truthy(&json!("")));
        assert!(!truthy(&json!([])));
        assert!(truthy(&json!(-1)));
        assert!(truthy(&json!("0")));
        assert!(truthy(&json!({"a": 1})));
    }

    proptest! {
        #[test]
        fn prop_pop_reverses_push(kinds in proptest::collection::vec("[a-z]{1,6}", 1..16)) {
            let mut states = StackedStates::new();
            for (i, kind) in kinds.iter().enumerate() {
                states.push(kind.as_str(), state_map(json!({"index": i})));
            }
            for (i, kind) in kinds.iter().enumerate().rev() {
                let frame = states.pop().unwrap();
                prop_assert_eq!(&frame.kind, kind);
                prop_assert_eq!(frame.state.get("index"), Some(&json!(i)));
            }
            prop_assert!(states.is_empty());
        }
    }
}
