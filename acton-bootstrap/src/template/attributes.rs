//! Option maps and attribute string formatting
//!
//! Every helper call takes an [`Options`] map: HTML attributes mixed with a
//! few control keys the helper consumes itself. [`format_attributes`] turns
//! whatever is left into a safe attribute string.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::classes::ClassList;
use super::escape::escape_attr;
use crate::state::truthy;

/// Keys that drive helper behavior and never reach the markup
pub const CONTROL_KEYS: [&str; 4] = ["escape", "templateVars", "easyIcon", "callbackVars"];

/// Attributes rendered as HTML boolean attributes
pub const COMPACT_ATTRIBUTES: [&str; 41] = [
    "allowfullscreen",
    "async",
    "autofocus",
    "autoplay",
    "checked",
    "compact",
    "controls",
    "declare",
    "default",
    "defaultchecked",
    "defaultmuted",
    "defaultselected",
    "defer",
    "disabled",
    "enabled",
    "formnovalidate",
    "hidden",
    "indeterminate",
    "inert",
    "ismap",
    "itemscope",
    "loop",
    "multiple",
    "muted",
    "nohref",
    "noresize",
    "noshade",
    "novalidate",
    "nowrap",
    "open",
    "pauseonexit",
    "readonly",
    "required",
    "reversed",
    "scoped",
    "seamless",
    "selected",
    "sortable",
    "truespeed",
    "typemustmatch",
    "visible",
];

/// How boolean attributes are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeStyle {
    /// `disabled="disabled"`
    #[default]
    Full,
    /// `disabled`
    Minimized,
}

/// Ordered map of per-call options
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::template::Options;
///
/// let mut options = Options::new().with("id", "main").with("collapsible", true);
/// assert!(options.take_bool("collapsible", false));
/// assert_eq!(options.get_str("id"), Some("main"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Options(Map<String, Value>);

impl Options {
    /// Empty option map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Borrow a value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Borrow a string value
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// Whether the key is present (whatever its value)
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whether the key holds a truthy value
    #[must_use]
    pub fn is_set(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(truthy)
    }

    /// Remove a value, keeping the order of the others
    pub fn take(&mut self, key: &str) -> Option<Value> {
        self.0.shift_remove(key)
    }

    /// Remove a value and render it as text
    ///
    /// Strings are returned as is, numbers are formatted; `null` and `false`
    /// count as absent.
    pub fn take_str(&mut self, key: &str) -> Option<String> {
        self.take(key).and_then(|value| value_text(&value))
    }

    /// Remove a value and read its truthiness, `default` when absent
    pub fn take_bool(&mut self, key: &str, default: bool) -> bool {
        self.take(key).map_or(default, |value| truthy(&value))
    }

    /// Remove a nested option map (`templateVars`, `innerAttrs`, ...)
    pub fn take_options(&mut self, key: &str) -> Self {
        self.take(key).map(Self::from).unwrap_or_default()
    }

    /// Fill in keys that are absent, appending them after existing ones
    #[must_use]
    pub fn merge_defaults(mut self, defaults: Self) -> Self {
        for (key, value) in defaults.0 {
            self.0.entry(key).or_insert(value);
        }
        self
    }

    /// Overwrite keys with those of `other`
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
        self
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Value> for Options {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            _ => Self::default(),
        }
    }
}

impl From<Map<String, Value>> for Options {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Options {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Render an option value as attribute text
///
/// Arrays are joined with spaces; `null` and `false` have no text.
#[must_use]
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::Bool(true) => Some("1".to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(value_text)
                .collect::<Vec<_>>()
                .join(" "),
        ),
        Value::Object(_) => Some(value.to_string()),
    }
}

/// Format options as an attribute string, booleans in full style
///
/// Each attribute is rendered as ` key="value"`. Excluded keys, control
/// keys, `null` and `false` values are skipped. `class` is normalized.
/// Values are escaped unless the options hold `escape: false`.
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::template::{format_attributes, Options};
///
/// let options = Options::new()
///     .with("id", "x")
///     .with("class", "a  b a")
///     .with("disabled", true)
///     .with("title", false);
/// assert_eq!(
///     format_attributes(&options, &[]),
///     r#" id="x" class="a b" disabled="disabled""#
/// );
/// ```
#[must_use]
pub fn format_attributes(options: &Options, exclude: &[&str]) -> String {
    format_attributes_with(options, exclude, AttributeStyle::Full)
}

/// Format options as an attribute string using the given boolean style
#[must_use]
pub fn format_attributes_with(options: &Options, exclude: &[&str], style: AttributeStyle) -> String {
    let escape = options.get("escape") != Some(&Value::Bool(false));
    let mut out = String::new();

    for (key, value) in options.iter() {
        if exclude.contains(&key.as_str()) || CONTROL_KEYS.contains(&key.as_str()) {
            continue;
        }

        if COMPACT_ATTRIBUTES.contains(&key.as_str()) {
            let on = matches!(value, Value::Bool(true))
                || value.as_str().is_some_and(|s| s == "true" || s == "1")
                || value.as_i64() == Some(1);
            if on {
                write_boolean(&mut out, key, style);
            }
            continue;
        }

        let text = match value {
            Value::Null | Value::Bool(false) => continue,
            Value::Bool(true) => {
                write_boolean(&mut out, key, style);
                continue;
            }
            _ if key == "class" => {
                let classes = ClassList::from_value(value);
                if classes.is_empty() {
                    continue;
                }
                classes.to_string()
            }
            _ => match value_text(value) {
                Some(text) => text,
                None => continue,
            },
        };

        out.push(' ');
        out.push_str(key);
        out.push_str("=\"");
        if escape {
            out.push_str(&escape_attr(&text));
        } else {
            out.push_str(&text);
        }
        out.push('"');
    }

    out
}

fn write_boolean(out: &mut String, key: &str, style: AttributeStyle) {
    out.push(' ');
    out.push_str(key);
    if style == AttributeStyle::Full {
        out.push_str("=\"");
        out.push_str(key);
        out.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_attributes_keep_order() {
        let options = Options::new().with("id", "a").with("role", "tab");
        assert_eq!(format_attributes(&options, &[]), r#" id="a" role="tab""#);
    }

    #[test]
    fn test_skips_null_false_and_control_keys() {
        let options = Options::from(json!({
            "title": null,
            "hidden": false,
            "easyIcon": true,
            "templateVars": {"a": 1},
            "data-x": "y"
        }));
        assert_eq!(format_attributes(&options, &[]), r#" data-x="y""#);
    }

    #[test]
    fn test_excluded_keys() {
        let options = Options::new().with("id", "a").with("type", "danger");
        assert_eq!(format_attributes(&options, &["type"]), r#" id="a""#);
    }

    #[test]
    fn test_true_values() {
        let options = Options::new().with("data-toggle", true).with("required", "true");
        assert_eq!(
            format_attributes(&options, &[]),
            r#" data-toggle="data-toggle" required="required""#
        );
        assert_eq!(
            format_attributes_with(&options, &[], AttributeStyle::Minimized),
            " data-toggle required"
        );
    }

    #[test]
    fn test_compact_attribute_off() {
        let options = Options::new().with("checked", "no").with("selected", 0);
        assert_eq!(format_attributes(&options, &[]), "");
    }

    #[test]
    fn test_class_normalized() {
        let options = Options::from(json!({"class": [" a ", "b", "", "a"]}));
        assert_eq!(format_attributes(&options, &[]), r#" class="a b""#);

        let options = Options::new().with("class", "   ");
        assert_eq!(format_attributes(&options, &[]), "");
    }

    #[test]
    fn test_escaping() {
        let options = Options::new().with("title", r#"<b>"x" & y</b>"#);
        assert_eq!(
            format_attributes(&options, &[]),
            r#" title="&lt;b&gt;&quot;x&quot; &amp; y&lt;/b&gt;""#
        );

        let options = options.with("escape", false);
        assert_eq!(format_attributes(&options, &[]), r#" title="<b>"x" & y</b>""#);
    }

    #[test]
    fn test_numbers_and_arrays() {
        let options = Options::from(json!({"tabindex": -1, "data-list": ["a", "b"]}));
        assert_eq!(
            format_attributes(&options, &[]),
            r#" tabindex="-1" data-list="a b""#
        );
    }

    #[test]
    fn test_take_preserves_order() {
        let mut options = Options::new().with("a", 1).with("b", 2).with("c", 3);
        assert_eq!(options.take_str("a"), Some("1".to_string()));
        let keys: Vec<_> = options.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["b", "c"]);
    }

    #[test]
    fn test_merge_defaults() {
        let options = Options::new()
            .with("type", "primary")
            .merge_defaults(Options::new().with("type", "default").with("close", true));
        assert_eq!(options.get_str("type"), Some("primary"));
        assert!(options.is_set("close"));
    }
}
