//! CSS class list handling
//!
//! Class values arrive either as a space separated string or as a JSON array
//! of tokens. Both are normalized to a [`ClassList`]: trimmed, without empty
//! tokens, de-duplicated with first-seen order kept.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::attributes::Options;

static BUTTON_VARIANT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(^|\s)btn-[a-z]+").expect("Invalid regex"));

/// Ordered, de-duplicated list of CSS classes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList(Vec<String>);

impl ClassList {
    /// Empty class list
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Parse a space separated class string
    #[must_use]
    pub fn parse(classes: &str) -> Self {
        let mut list = Self::new();
        list.extend(classes.split_whitespace());
        list
    }

    /// Read classes from an option value (string or array of strings)
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Array(items) => {
                let mut list = Self::new();
                for item in items {
                    if let Some(s) = item.as_str() {
                        list.extend(s.split_whitespace());
                    }
                }
                list
            }
            _ => Self::new(),
        }
    }

    /// Append classes that are not present yet
    pub fn extend<I, S>(&mut self, classes: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for class in classes {
            let class = class.as_ref().trim();
            if !class.is_empty() && !self.contains(class) {
                self.0.push(class.to_string());
            }
        }
    }

    /// Whether the list holds `class`
    #[must_use]
    pub fn contains(&self, class: &str) -> bool {
        self.0.iter().any(|c| c == class)
    }

    /// Whether the list is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the classes in order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.join(" "))
    }
}

impl From<&str> for ClassList {
    fn from(classes: &str) -> Self {
        Self::parse(classes)
    }
}

impl From<String> for ClassList {
    fn from(classes: String) -> Self {
        Self::parse(&classes)
    }
}

impl From<&String> for ClassList {
    fn from(classes: &String) -> Self {
        Self::parse(classes)
    }
}

impl From<Vec<&str>> for ClassList {
    fn from(classes: Vec<&str>) -> Self {
        let mut list = Self::new();
        list.extend(classes);
        list
    }
}

impl<const N: usize> From<[&str; N]> for ClassList {
    fn from(classes: [&str; N]) -> Self {
        let mut list = Self::new();
        list.extend(classes);
        list
    }
}

/// Add classes to the `class` key of `options`
///
/// Existing classes come first, new ones are appended; duplicates and empty
/// tokens are dropped. Calling it twice with the same classes is a no-op.
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::template::{add_class, Options};
///
/// let options = Options::new().with("class", "a b");
/// let options = add_class(&options, "b c");
/// assert_eq!(options.get_str("class"), Some("a b c"));
/// ```
#[must_use]
pub fn add_class(options: &Options, classes: impl Into<ClassList>) -> Options {
    add_class_to(options, "class", classes)
}

/// Same as [`add_class`] for an arbitrary option key
#[must_use]
pub fn add_class_to(options: &Options, key: &str, classes: impl Into<ClassList>) -> Options {
    let mut list = options
        .get(key)
        .map(ClassList::from_value)
        .unwrap_or_default();
    list.extend(classes.into().iter());
    let mut options = options.clone();
    options.insert(key, list.to_string());
    options
}

/// Apply the Bootstrap button classes to `options`
///
/// Consumes the `bootstrap-type`, `bootstrap-size` and `bootstrap-block`
/// control options. `btn-<type>` is only added when no `btn-xxx` class is
/// present already.
#[must_use]
pub fn button_classes(options: &Options, default_type: &str) -> Options {
    let mut options = options.clone();
    let kind = options
        .take_str("bootstrap-type")
        .unwrap_or_else(|| default_type.to_string());
    let size = options.take_str("bootstrap-size");
    let block = options.take_bool("bootstrap-block", false);

    let mut options = add_class(&options, "btn");
    let has_variant = options
        .get_str("class")
        .is_some_and(|class| BUTTON_VARIANT.is_match(class));
    if !has_variant {
        options = add_class(&options, format!("btn-{kind}"));
    }
    if let Some(size) = size {
        options = add_class(&options, format!("btn-{size}"));
    }
    if block {
        options = add_class(&options, "btn-block");
    }
    options
}
