//! Named string templates with scoped overrides
//!
//! Every helper renders its markup from a table of named templates such as
//! `<div class="card-body{{attrs.class}}"{{attrs}}>`. [`StringTemplate`] owns
//! that table and performs the substitution:
//!
//! - `{{name}}` placeholders are replaced in a single pass; inserted values
//!   are never scanned again, so pre-rendered content passes through as is
//! - a pre-formatted `attrs` string may feed `{{attrs.xxx}}` blocks: the
//!   `xxx="..."` attribute is pulled out of `attrs` and merged into the
//!   template's own literal attribute instead of being written twice
//! - temporary overrides are applied with [`StringTemplate::push_scope`] and
//!   undone with [`StringTemplate::pop_scope`]
//!
//! # Examples
//!
//! ```rust
//! use acton_bootstrap::template::{StringTemplate, TemplateVars};
//!
//! let templates = StringTemplate::with_templates([
//!     ("para", r#"<p class="lead{{attrs.class}}"{{attrs}}>{{content}}</p>"#),
//! ]);
//! let html = templates.format(
//!     "para",
//!     &TemplateVars::new()
//!         .with("content", "Hello")
//!         .attrs(r#" class="mb-0" id="intro""#),
//! )?;
//! assert_eq!(html, r#"<p class="lead mb-0" id="intro">Hello</p>"#);
//! # Ok::<(), acton_bootstrap::error::BootstrapError>(())
//! ```

mod attributes;
mod classes;
mod escape;
mod icon;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};

use crate::error::{BootstrapError, Result};

pub use attributes::{
    format_attributes, format_attributes_with, value_text, AttributeStyle, Options,
    COMPACT_ATTRIBUTES, CONTROL_KEYS,
};
pub use classes::{add_class, add_class_to, button_classes, ClassList};
pub use escape::{escape_attr, escape_html};
pub use icon::easy_icon;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{([\w.]+)\}\}").expect("Invalid regex"));

static ATTRS_PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{\{attrs\.(\w+)\}\}").expect("Invalid regex"));

/// One ` name="value"` or bare ` name` in a formatted attribute string
static ATTRIBUTE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"([^\s="]+)(?:="([^"]*)")?"#).expect("Invalid regex"));

/// Callback run on the variables of one template before substitution
pub type TemplateCallback = Arc<dyn Fn(&mut TemplateVars) + Send + Sync>;

/// Variables for one template rendering
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateVars(HashMap<String, String>);

impl TemplateVars {
    /// No variables
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert when `value` is present
    #[must_use]
    pub fn with_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.with(name, value),
            None => self,
        }
    }

    /// Set the pre-formatted attribute string
    #[must_use]
    pub fn attrs(self, attrs: impl Into<String>) -> Self {
        self.with("attrs", attrs)
    }

    /// Insert or replace a variable
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Read a variable
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Add every variable of `other`, replacing existing ones
    #[must_use]
    pub fn extend(mut self, other: Self) -> Self {
        self.0.extend(other.0);
        self
    }

    /// Variables taken from a `templateVars` option map
    #[must_use]
    pub fn from_options(options: &Options) -> Self {
        Self(
            options
                .iter()
                .filter_map(|(key, value)| value_text(value).map(|text| (key.clone(), text)))
                .collect(),
        )
    }
}

/// Layout dimension of a template variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Stacked labels and controls
    #[default]
    Normal,
    /// Labels and controls side by side in grid columns
    Horizontal,
    /// Everything on one line
    Inline,
}

impl Layout {
    /// Name fragment appended to variant template names
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::Normal => "",
            Self::Horizontal => "Horizontal",
            Self::Inline => "Inline",
        }
    }
}

/// Variant of a template selected by rendering context
///
/// Variant names are built as `<stem>[Collapsible][Horizontal|Inline]<tail>`,
/// for instance `headerCollapsibleStart` or `labelHorizontal`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemplateVariant {
    /// Accordion-style collapsible rendering
    pub collapsible: bool,
    /// Form layout
    pub layout: Layout,
}

impl TemplateVariant {
    /// The base template
    pub const NORMAL: Self = Self {
        collapsible: false,
        layout: Layout::Normal,
    };

    /// The collapsible variant
    pub const COLLAPSIBLE: Self = Self {
        collapsible: true,
        layout: Layout::Normal,
    };

    /// Variant for a form layout
    #[must_use]
    pub const fn layout(layout: Layout) -> Self {
        Self {
            collapsible: false,
            layout,
        }
    }

    /// Most specific template name for this variant
    #[must_use]
    pub fn name(self, stem: &str, tail: &str) -> String {
        let collapsible = if self.collapsible { "Collapsible" } else { "" };
        format!("{stem}{collapsible}{}{tail}", self.layout.suffix())
    }

    /// Candidate names, most specific first, ending with the base name
    #[must_use]
    pub fn candidates(self, stem: &str, tail: &str) -> Vec<String> {
        let mut names = vec![self.name(stem, tail)];
        if self.collapsible && self.layout != Layout::Normal {
            names.push(Self::COLLAPSIBLE.name(stem, tail));
            names.push(Self::layout(self.layout).name(stem, tail));
        }
        let base = Self::NORMAL.name(stem, tail);
        if !names.contains(&base) {
            names.push(base);
        }
        names
    }
}

/// Named template table with a stack of override scopes
#[derive(Clone, Default)]
pub struct StringTemplate {
    active: HashMap<String, String>,
    scopes: Vec<HashMap<String, String>>,
    callbacks: HashMap<String, TemplateCallback>,
}

impl fmt::Debug for StringTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.active.keys().collect();
        names.sort();
        f.debug_struct("StringTemplate")
            .field("templates", &names)
            .field("scopes", &self.scopes.len())
            .field("callbacks", &self.callbacks.len())
            .finish()
    }
}

impl StringTemplate {
    /// Empty table
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Table seeded with the given templates
    #[must_use]
    pub fn with_templates<I, K, V>(templates: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut table = Self::new();
        table.set_many(templates);
        table
    }

    /// Active template for `name`
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.active.get(name).map(String::as_str)
    }

    /// Whether a template named `name` is active
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.active.contains_key(name)
    }

    /// Define or replace a template in the active scope
    pub fn set(&mut self, name: impl Into<String>, template: impl Into<String>) {
        self.active.insert(name.into(), template.into());
    }

    /// Define or replace several templates in the active scope
    pub fn set_many<I, K, V>(&mut self, templates: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (name, template) in templates {
            self.set(name, template);
        }
    }

    /// Register a callback adjusting the variables of template `name`
    pub fn set_callback<F>(&mut self, name: impl Into<String>, callback: F)
    where
        F: Fn(&mut TemplateVars) + Send + Sync + 'static,
    {
        self.callbacks.insert(name.into(), Arc::new(callback));
    }

    /// Save the active templates and apply `overrides` on top
    pub fn push_scope<I, K, V>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.scopes.push(self.active.clone());
        self.set_many(overrides);
        tracing::trace!(depth = self.scopes.len(), "push template scope");
    }

    /// Restore the templates saved by the last [`push_scope`](Self::push_scope)
    pub fn pop_scope(&mut self) -> Result<()> {
        self.active = self.scopes.pop().ok_or(BootstrapError::ScopeUnderflow)?;
        tracing::trace!(depth = self.scopes.len(), "pop template scope");
        Ok(())
    }

    /// Number of scopes currently pushed
    #[must_use]
    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Render template `name` with `vars`
    pub fn format(&self, name: &str, vars: &TemplateVars) -> Result<String> {
        let template = self
            .get(name)
            .ok_or_else(|| BootstrapError::unknown_template(name))?;

        let mut vars = vars.clone();
        if let Some(callback) = self.callbacks.get(name) {
            callback(&mut vars);
        }

        if let Some(attrs) = vars.get("attrs").map(str::to_string) {
            let mut attrs = attrs;
            for caps in ATTRS_PLACEHOLDER.captures_iter(template) {
                let attr = &caps[1];
                let (value, rest) = extract_attribute(&attrs, attr);
                attrs = rest;
                let value = value.map(|v| format!(" {v}")).unwrap_or_default();
                vars.set(format!("attrs.{attr}"), value);
            }
            let attrs = attrs.trim();
            let attrs = if attrs.is_empty() {
                String::new()
            } else {
                format!(" {attrs}")
            };
            vars.set("attrs", attrs);
        }

        Ok(substitute(template, &vars))
    }

    /// Name of the template used for `variant`
    ///
    /// Falls back through less specific variants to the base name.
    #[must_use]
    pub fn resolve(&self, stem: &str, tail: &str, variant: TemplateVariant) -> String {
        let mut candidates = variant.candidates(stem, tail);
        let base = candidates.pop().unwrap_or_default();
        candidates
            .into_iter()
            .find(|name| self.contains(name))
            .unwrap_or(base)
    }

    /// Render the template selected by `variant`
    pub fn format_variant(
        &self,
        stem: &str,
        tail: &str,
        variant: TemplateVariant,
        vars: &TemplateVars,
    ) -> Result<String> {
        self.format(&self.resolve(stem, tail, variant), vars)
    }
}

fn substitute(template: &str, vars: &TemplateVars) -> String {
    PLACEHOLDER
        .replace_all(template, |caps: &Captures<'_>| {
            vars.get(&caps[1]).unwrap_or_default().to_string()
        })
        .into_owned()
}

/// Pull `name="..."` out of an attribute string
///
/// Returns the trimmed value (`None` when absent or empty) and the remaining
/// attributes joined by single spaces.
fn extract_attribute(attrs: &str, name: &str) -> (Option<String>, String) {
    let mut found = None;
    let mut rest = Vec::new();
    for caps in ATTRIBUTE.captures_iter(attrs) {
        match caps.get(2) {
            Some(value) if found.is_none() && &caps[1] == name => {
                found = Some(value.as_str().trim().to_string());
            }
            _ => rest.push(caps.get(0).map_or("", |m| m.as_str())),
        }
    }
    (found.filter(|value| !value.is_empty()), rest.join(" "))
}
