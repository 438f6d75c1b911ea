//! Breadcrumb trail

use crate::error::Result;
use crate::template::{escape_html, Options, StringTemplate, TemplateVars};
use crate::view::View;

use super::HelperBase;

const TEMPLATES: &[(&str, &str)] = &[
    ("wrapper", r#"<ol class="breadcrumb{{attrs.class}}"{{attrs}}>{{content}}</ol>"#),
    ("item", r#"<li class="breadcrumb-item{{attrs.class}}"{{attrs}}><a href="{{url}}"{{innerAttrs}}>{{title}}</a></li>"#),
    ("itemWithoutLink", r#"<li class="breadcrumb-item active{{attrs.class}}"{{attrs}}>{{title}}</li>"#),
];

/// One entry of the trail
#[derive(Debug, Clone, PartialEq)]
pub struct Crumb {
    /// Displayed text
    pub title: String,
    /// Target route; the crumb is rendered as the active item without one
    pub url: Option<String>,
    /// Attributes of the list item; `innerAttrs` go to the link
    pub options: Options,
}

/// Breadcrumbs helper
#[derive(Debug, Clone)]
pub struct BreadcrumbsHelper {
    base: HelperBase,
    crumbs: Vec<Crumb>,
}

impl BreadcrumbsHelper {
    /// Helper with the default templates and the `breadcrumbs` overrides
    #[must_use]
    pub fn new(view: &View) -> Self {
        Self {
            base: HelperBase::new(view, "breadcrumbs", TEMPLATES),
            crumbs: Vec::new(),
        }
    }

    /// Template table, for customization
    pub fn templates_mut(&mut self) -> &mut StringTemplate {
        &mut self.base.templates
    }

    /// Append a crumb
    pub fn add(&mut self, title: impl Into<String>, url: Option<&str>, options: Options) -> &mut Self {
        self.crumbs.push(crumb(title, url, options));
        self
    }

    /// Insert a crumb at the start of the trail
    pub fn prepend(
        &mut self,
        title: impl Into<String>,
        url: Option<&str>,
        options: Options,
    ) -> &mut Self {
        self.crumbs.insert(0, crumb(title, url, options));
        self
    }

    /// Remove every crumb
    pub fn reset(&mut self) -> &mut Self {
        self.crumbs.clear();
        self
    }

    /// Crumbs added so far
    #[must_use]
    pub fn crumbs(&self) -> &[Crumb] {
        &self.crumbs
    }

    /// Render the trail, empty when no crumb was added
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let mut breadcrumbs = View::default().breadcrumbs();
    /// breadcrumbs
    ///     .add("Home", Some("/"), Options::new())
    ///     .add("Profile", None, Options::new());
    ///
    /// assert_eq!(
    ///     breadcrumbs.render(Options::new())?,
    ///     concat!(
    ///         r#"<ol class="breadcrumb">"#,
    ///         r#"<li class="breadcrumb-item"><a href="/">Home</a></li>"#,
    ///         r#"<li class="breadcrumb-item active">Profile</li>"#,
    ///         "</ol>"
    ///     )
    /// );
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn render(&self, mut options: Options) -> Result<String> {
        if self.crumbs.is_empty() {
            return Ok(String::new());
        }
        let template_vars = options.take_options("templateVars");

        let mut content = String::new();
        for crumb in &self.crumbs {
            let mut item_options = crumb.options.clone();
            let item_vars = item_options.take_options("templateVars");
            let inner = item_options.take_options("innerAttrs");
            let escape = HelperBase::take_escape(&mut item_options, true);
            let title = if escape {
                escape_html(&crumb.title)
            } else {
                crumb.title.clone()
            };

            let vars = TemplateVars::new()
                .with("title", title)
                .attrs(self.base.attrs(&item_options, &[]));
            content.push_str(&match &crumb.url {
                Some(url) => self.base.format(
                    "item",
                    vars.with("url", escape_html(&self.base.view.urls().build(url)))
                        .with("innerAttrs", self.base.attrs(&inner, &[])),
                    &item_vars,
                )?,
                None => self.base.format("itemWithoutLink", vars, &item_vars)?,
            });
        }

        self.base.format(
            "wrapper",
            TemplateVars::new()
                .with("content", content)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }
}

fn crumb(title: impl Into<String>, url: Option<&str>, options: Options) -> Crumb {
    Crumb {
        title: title.into(),
        url: url.map(str::to_string),
        options,
    }
}
