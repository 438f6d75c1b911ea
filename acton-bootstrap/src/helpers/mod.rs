//! Bootstrap markup helpers
//!
//! Each helper owns a template table seeded from its defaults and the
//! configured overrides, plus whatever frame stack and counters it needs.
//! Helpers are created from a [`View`] and live for one render.

mod accordion;
mod breadcrumbs;
mod flash;
pub mod html;
mod modal;
mod navbar;
mod paginator;
mod tab;

use crate::error::Result;
use crate::template::{
    easy_icon, format_attributes_with, Options, StringTemplate, TemplateVars,
};
use crate::view::View;

pub use accordion::{AccordionHelper, CardHelper, CardStyle, Flavor, PanelHelper, PanelStyle};
pub use breadcrumbs::{BreadcrumbsHelper, Crumb};
pub use flash::FlashHelper;
pub use html::{HtmlHelper, MenuItem, ProgressBar};
pub use modal::ModalHelper;
pub use navbar::{Brand, NavbarHelper};
pub use paginator::{PageParams, PaginatorHelper};
pub use tab::TabHelper;

/// Optional text content of a widget part
///
/// `Empty` only opens the part; `Text` opens it, writes the content and, for
/// most parts, closes it again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    /// No content
    #[default]
    Empty,
    /// Text or pre-rendered markup
    Text(String),
}

impl Content {
    /// The text, `None` when empty or blank
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }

    /// Whether there is no text
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text().is_none()
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl<T: Into<Self>> From<Option<T>> for Content {
    fn from(text: Option<T>) -> Self {
        text.map_or(Self::Empty, Into::into)
    }
}

/// Template table and render context shared by every helper
#[derive(Debug, Clone)]
pub(crate) struct HelperBase {
    pub(crate) view: View,
    pub(crate) templates: StringTemplate,
}

impl HelperBase {
    /// Seed the table with `defaults`, then apply the `helper` overrides
    pub(crate) fn new(view: &View, helper: &str, defaults: &[(&str, &str)]) -> Self {
        let mut templates = StringTemplate::with_templates(defaults.iter().copied());
        templates.set_many(view.config().templates_for(helper));
        Self {
            view: view.clone(),
            templates,
        }
    }

    /// Attribute string in the configured style
    pub(crate) fn attrs(&self, options: &Options, exclude: &[&str]) -> String {
        format_attributes_with(options, exclude, self.view.config().attribute_style)
    }

    /// Render `name`, `template_vars` filling in what `vars` leaves unset
    pub(crate) fn format(
        &self,
        name: &str,
        vars: TemplateVars,
        template_vars: &Options,
    ) -> Result<String> {
        let vars = TemplateVars::from_options(template_vars).extend(vars);
        self.templates.format(name, &vars)
    }

    /// Replace `i:name` tokens, honouring the `easyIcon` option
    ///
    /// Consumes the option; returns the text and whether an icon was added.
    pub(crate) fn easy_icon(&self, text: &str, options: &mut Options) -> (String, bool) {
        let enabled = options.take_bool("easyIcon", self.view.config().easy_icon);
        easy_icon(text, enabled, |name| self.view.icon(name))
    }

    /// Consume the `escape` option, `default` when absent
    pub(crate) fn take_escape(options: &mut Options, default: bool) -> bool {
        options.take_bool("escape", default)
    }
}
