//! Basic markup: icons, labels, badges, alerts, tooltips, progress bars,
//! dropdown menus and links

use crate::error::Result;
use crate::template::{add_class, escape_html, value_text, Options, StringTemplate, TemplateVars};
use crate::view::View;

use super::HelperBase;

/// Default icon template, also used for `i:name` shorthands
pub const ICON_TEMPLATE: &str =
    r#"<i aria-hidden="true" class="glyphicon glyphicon-{{type}}{{attrs.class}}"{{attrs}}></i>"#;

const TEMPLATES: &[(&str, &str)] = &[
    ("icon", ICON_TEMPLATE),
    ("label", r#"<span class="label label-{{type}}{{attrs.class}}"{{attrs}}>{{content}}</span>"#),
    ("badge", r#"<span class="badge{{attrs.class}}"{{attrs}}>{{content}}</span>"#),
    ("alert", r#"<div class="alert alert-{{type}}{{attrs.class}}" role="alert"{{attrs}}>{{close}}{{content}}</div>"#),
    ("alertCloseButton", r#"<button type="button" class="close{{attrs.class}}" data-dismiss="alert" aria-label="{{label}}"{{attrs}}>{{content}}</button>"#),
    ("alertCloseContent", r#"<span aria-hidden="true">&times;</span>"#),
    ("tooltip", r#"<{{tag}} data-toggle="{{toggle}}" data-placement="{{placement}}" title="{{tooltip}}"{{attrs}}>{{content}}</{{tag}}>"#),
    ("progressBar", r#"<div class="progress-bar progress-bar-{{type}}{{attrs.class}}" role="progressbar" aria-valuenow="{{width}}" aria-valuemin="{{min}}" aria-valuemax="{{max}}" style="width: {{width}}%;"{{attrs}}>{{inner}}</div>"#),
    ("progressBarInner", r#"<span class="sr-only">{{width}}%</span>"#),
    ("progressBarContainer", r#"<div class="progress{{attrs.class}}"{{attrs}}>{{content}}</div>"#),
    ("dropdownMenu", r#"<ul class="dropdown-menu{{attrs.class}}"{{attrs}}>{{content}}</ul>"#),
    ("dropdownMenuItem", "<li{{attrs}}>{{content}}</li>"),
    ("dropdownMenuHeader", r#"<li role="presentation" class="dropdown-header{{attrs.class}}"{{attrs}}>{{content}}</li>"#),
    ("dropdownMenuDivider", r#"<li role="separator" class="divider{{attrs.class}}"{{attrs}}></li>"#),
    ("link", r#"<a href="{{url}}"{{attrs}}>{{content}}</a>"#),
];

const ROW_START: &str = r#"<div class="row">"#;
const ROW_BREAK: &str = r#"<div class="clearfix hidden-xs hidden-sm"></div>"#;
const ROW_END: &str = "</div>";

/// One bar of a progress bar
///
/// Bar options override the options given to [`HtmlHelper::progress`].
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::helpers::ProgressBar;
///
/// let bar = ProgressBar::new(40.0).kind("success").striped();
/// assert_eq!(bar.width, 40.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressBar {
    /// Width in percent
    pub width: f64,
    /// Bar options (`type`, `striped`, `active`, `min`, `max`, attributes)
    pub options: Options,
}

impl ProgressBar {
    /// Bar of the given width
    #[must_use]
    pub fn new(width: f64) -> Self {
        Self {
            width,
            options: Options::new(),
        }
    }

    /// Bar variant (`success`, `danger`, ...)
    #[must_use]
    pub fn kind(self, kind: &str) -> Self {
        self.option("type", kind)
    }

    /// Striped bar
    #[must_use]
    pub fn striped(self) -> Self {
        self.option("striped", true)
    }

    /// Animated bar
    #[must_use]
    pub fn active(self) -> Self {
        self.option("active", true)
    }

    /// Set any other option or attribute
    #[must_use]
    pub fn option(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.options.insert(key, value);
        self
    }
}

/// Entry of a dropdown menu
#[derive(Debug, Clone, PartialEq)]
pub enum MenuItem {
    /// Non-clickable section header
    Header {
        /// Header text
        title: String,
        /// Attributes of the entry
        options: Options,
    },
    /// Separator line
    Divider {
        /// Attributes of the entry
        options: Options,
    },
    /// Regular entry, a link when `url` is set
    Item {
        /// Entry text
        title: String,
        /// Target URL
        url: Option<String>,
        /// Attributes of the entry
        options: Options,
    },
}

impl MenuItem {
    /// Section header
    #[must_use]
    pub fn header(title: impl Into<String>) -> Self {
        Self::Header {
            title: title.into(),
            options: Options::new(),
        }
    }

    /// Separator
    #[must_use]
    pub fn divider() -> Self {
        Self::Divider {
            options: Options::new(),
        }
    }

    /// Link entry
    #[must_use]
    pub fn link(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Item {
            title: title.into(),
            url: Some(url.into()),
            options: Options::new(),
        }
    }

    /// Plain text entry
    #[must_use]
    pub fn text(title: impl Into<String>) -> Self {
        Self::Item {
            title: title.into(),
            url: None,
            options: Options::new(),
        }
    }

    /// Replace the attributes of the entry
    #[must_use]
    pub fn with_options(mut self, new_options: Options) -> Self {
        match &mut self {
            Self::Header { options, .. } | Self::Divider { options } | Self::Item { options, .. } => {
                *options = new_options;
            }
        }
        self
    }
}

/// Basic markup helper
#[derive(Debug, Clone)]
pub struct HtmlHelper {
    base: HelperBase,
}

impl HtmlHelper {
    /// Helper with the default templates and the `html` overrides
    #[must_use]
    pub fn new(view: &View) -> Self {
        Self {
            base: HelperBase::new(view, "html", TEMPLATES),
        }
    }

    /// Template table, for customization
    pub fn templates_mut(&mut self) -> &mut StringTemplate {
        &mut self.base.templates
    }

    /// Icon
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let html = View::default().html();
    /// assert_eq!(
    ///     html.icon("home", Options::new())?,
    ///     r#"<i aria-hidden="true" class="glyphicon glyphicon-home"></i>"#
    /// );
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn icon(&self, name: &str, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        self.base.format(
            "icon",
            TemplateVars::new()
                .with("type", name)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Label; the variant is read from the `type` option
    pub fn label(&self, text: &str, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let kind = options
            .take_str("type")
            .unwrap_or_else(|| self.base.view.config().label.kind.clone());
        self.base.format(
            "label",
            TemplateVars::new()
                .with("type", kind)
                .with("content", text)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Badge
    pub fn badge(&self, text: &str, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        self.base.format(
            "badge",
            TemplateVars::new()
                .with("content", text)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Alert box
    ///
    /// `type` selects the variant, `close` adds a dismiss button.
    pub fn alert(&self, text: &str, mut options: Options) -> Result<String> {
        let settings = &self.base.view.config().alert;
        let template_vars = options.take_options("templateVars");
        let kind = options
            .take_str("type")
            .unwrap_or_else(|| settings.kind.clone());
        let close = options.take_bool("close", settings.close);

        let close_button = if close {
            let content = self
                .base
                .format("alertCloseContent", TemplateVars::new(), &template_vars)?;
            options = add_class(&options, "alert-dismissible");
            self.base.format(
                "alertCloseButton",
                TemplateVars::new()
                    .with("label", self.base.view.translate("Close"))
                    .with("content", content)
                    .attrs(""),
                &template_vars,
            )?
        } else {
            String::new()
        };

        self.base.format(
            "alert",
            TemplateVars::new()
                .with("type", kind)
                .with("close", close_button)
                .with("content", text)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Element with a tooltip
    ///
    /// `tag`, `placement` and `toggle` default to the configured values.
    pub fn tooltip(&self, text: &str, tooltip: &str, mut options: Options) -> Result<String> {
        let settings = &self.base.view.config().tooltip;
        let template_vars = options.take_options("templateVars");
        let tag = options.take_str("tag").unwrap_or_else(|| settings.tag.clone());
        let placement = options
            .take_str("placement")
            .unwrap_or_else(|| settings.placement.clone());
        let toggle = options
            .take_str("toggle")
            .unwrap_or_else(|| settings.toggle.clone());
        let tooltip = options
            .take_str("tooltip")
            .unwrap_or_else(|| tooltip.to_string());

        self.base.format(
            "tooltip",
            TemplateVars::new()
                .with("tag", tag)
                .with("placement", placement)
                .with("toggle", toggle)
                .with("tooltip", escape_html(&tooltip))
                .with("content", text)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Progress bar made of one or more bars
    ///
    /// `options` provide the defaults of every bar (`type`, `striped`,
    /// `active`, `min`, `max` and attributes).
    pub fn progress(&self, bars: &[ProgressBar], mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let defaults = options.merge_defaults(
            Options::new()
                .with("type", self.base.view.config().progress.kind.as_str())
                .with("striped", false)
                .with("active", false)
                .with("min", 0)
                .with("max", 100),
        );

        let mut content = String::new();
        for bar in bars {
            let mut bar_options = bar.options.clone().merge_defaults(defaults.clone());
            let bar_vars = bar_options.take_options("templateVars");
            if bar_options.take_bool("striped", false) {
                bar_options = add_class(&bar_options, "progress-bar-striped");
            }
            if bar_options.take_bool("active", false) {
                bar_options = add_class(&bar_options, "active");
            }
            let kind = bar_options.take_str("type").unwrap_or_default();
            let min = bar_options.take("min").and_then(|v| value_text(&v)).unwrap_or_default();
            let max = bar_options.take("max").and_then(|v| value_text(&v)).unwrap_or_default();
            let width = bar.width.to_string();

            let inner = self.base.format(
                "progressBarInner",
                TemplateVars::new().with("width", width.as_str()),
                &bar_vars,
            )?;
            content.push_str(&self.base.format(
                "progressBar",
                TemplateVars::new()
                    .with("inner", inner)
                    .with("type", kind)
                    .with("min", min)
                    .with("max", max)
                    .with("width", width)
                    .attrs(self.base.attrs(&bar_options, &[])),
                &bar_vars,
            )?);
        }

        self.base.format(
            "progressBarContainer",
            TemplateVars::new().with("content", content).attrs(""),
            &template_vars,
        )
    }

    /// Dropdown menu
    ///
    /// The `align` option (`left` by default) adds a `dropdown-menu-<align>`
    /// class.
    pub fn dropdown(&self, items: &[MenuItem], mut options: Options) -> Result<String> {
        let mut content = String::new();
        for item in items {
            content.push_str(&self.menu_item(item)?);
        }

        let template_vars = options.take_options("templateVars");
        let align = options.take_str("align").unwrap_or_else(|| "left".to_string());
        let options = add_class(&options, format!("dropdown-menu-{align}"));
        self.base.format(
            "dropdownMenu",
            TemplateVars::new()
                .with("content", content)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    fn menu_item(&self, item: &MenuItem) -> Result<String> {
        match item {
            MenuItem::Divider { options } => {
                let mut options = options.clone();
                let template_vars = options.take_options("templateVars");
                self.base.format(
                    "dropdownMenuDivider",
                    TemplateVars::new().attrs(self.base.attrs(&options, &[])),
                    &template_vars,
                )
            }
            MenuItem::Header { title, options } => {
                let mut options = options.clone();
                let template_vars = options.take_options("templateVars");
                self.base.format(
                    "dropdownMenuHeader",
                    TemplateVars::new()
                        .with("content", title.as_str())
                        .attrs(self.base.attrs(&options, &[])),
                    &template_vars,
                )
            }
            MenuItem::Item { title, url, options } => {
                let mut options = options.clone();
                let template_vars = options.take_options("templateVars");
                let content = match url {
                    Some(url) => self.link(title, url, Options::new())?,
                    None => title.clone(),
                };
                self.base.format(
                    "dropdownMenuItem",
                    TemplateVars::new()
                        .with("content", content)
                        .attrs(self.base.attrs(&options, &[])),
                    &template_vars,
                )
            }
        }
    }

    /// Link, with `i:name` icon shorthands in the title
    ///
    /// The title is escaped unless `escape` is `false`; `url` goes through
    /// the URL resolver.
    pub fn link(&self, title: &str, url: &str, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let escape = HelperBase::take_escape(&mut options, true);
        let title = if escape {
            escape_html(title)
        } else {
            title.to_string()
        };
        let (title, _) = self.base.easy_icon(&title, &mut options);
        let url = self.base.view.urls().build(url);

        self.base.format(
            "link",
            TemplateVars::new()
                .with("url", escape_html(&url))
                .with("content", title)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Wrap `items` in a row, adding a clearfix after every `break_index`
    /// items
    ///
    /// A `break_index` of zero never breaks.
    pub fn spliced_rows<T, F>(break_index: usize, items: &[T], render: F) -> String
    where
        F: Fn(&T) -> String,
    {
        let mut out = String::from(ROW_START);
        for (index, item) in items.iter().enumerate() {
            out.push_str(&render(item));
            if break_index > 0 && (index + 1) % break_index == 0 {
                out.push_str(ROW_BREAK);
            }
        }
        out.push_str(ROW_END);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::StaticUrls;
    use pretty_assertions::assert_eq;

    fn html() -> HtmlHelper {
        View::default().html()
    }

    #[test]
    fn test_icon_with_class() {
        let out = html()
            .icon("plus", Options::new().with("class", "big").with("id", "i1"))
            .unwrap();
        assert_eq!(
            out,
            r#"<i aria-hidden="true" class="glyphicon glyphicon-plus big" id="i1"></i>"#
        );
    }

    #[test]
    fn test_label_default_and_type() {
        let h = html();
        assert_eq!(
            h.label("New", Options::new()).unwrap(),
            r#"<span class="label label-default">New</span>"#
        );
        assert_eq!(
            h.label("New", Options::new().with("type", "primary").with("class", "x"))
                .unwrap(),
            r#"<span class="label label-primary x">New</span>"#
        );
    }

    #[test]
    fn test_badge() {
        assert_eq!(
            html().badge("4", Options::new()).unwrap(),
            r#"<span class="badge">4</span>"#
        );
    }

    #[test]
    fn test_alert_dismissible() {
        let out = html().alert("Saved", Options::new().with("type", "success")).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<div class="alert alert-success alert-dismissible" role="alert">"#,
                r#"<button type="button" class="close" data-dismiss="alert" aria-label="Close">"#,
                r#"<span aria-hidden="true">&times;</span></button>Saved</div>"#
            )
        );
    }

    #[test]
    fn test_alert_without_close() {
        let out = html().alert("Careful", Options::new().with("close", false)).unwrap();
        assert_eq!(out, r#"<div class="alert alert-warning" role="alert">Careful</div>"#);
    }

    #[test]
    fn test_tooltip() {
        let out = html()
            .tooltip("Hover", "Some \"tip\"", Options::new().with("placement", "top"))
            .unwrap();
        assert_eq!(
            out,
            r#"<span data-toggle="tooltip" data-placement="top" title="Some &quot;tip&quot;">Hover</span>"#
        );
    }

    #[test]
    fn test_progress_single_bar() {
        let out = html().progress(&[ProgressBar::new(30.0)], Options::new()).unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<div class="progress"><div class="progress-bar progress-bar-primary" role="progressbar""#,
                r#" aria-valuenow="30" aria-valuemin="0" aria-valuemax="100" style="width: 30%;">"#,
                r#"<span class="sr-only">30%</span></div></div>"#
            )
        );
    }

    #[test]
    fn test_progress_stacked_bars() {
        let out = html()
            .progress(
                &[
                    ProgressBar::new(20.0).kind("success"),
                    ProgressBar::new(15.5).kind("danger").striped().active(),
                ],
                Options::new().with("striped", true),
            )
            .unwrap();
        assert_eq!(out.matches("role=\"progressbar\"").count(), 2);
        assert!(out.contains("progress-bar progress-bar-success progress-bar-striped\""));
        assert!(out.contains("progress-bar-danger progress-bar-striped active\""));
        assert!(out.contains("style=\"width: 15.5%;\""));
    }

    #[test]
    fn test_dropdown() {
        let out = html()
            .dropdown(
                &[
                    MenuItem::header("Header"),
                    MenuItem::link("Action", "/action"),
                    MenuItem::divider(),
                    MenuItem::text("Plain"),
                ],
                Options::new().with("align", "right"),
            )
            .unwrap();
        assert_eq!(
            out,
            concat!(
                r#"<ul class="dropdown-menu dropdown-menu-right">"#,
                r#"<li role="presentation" class="dropdown-header">Header</li>"#,
                r#"<li><a href="/action">Action</a></li>"#,
                r#"<li role="separator" class="divider"></li>"#,
                "<li>Plain</li></ul>"
            )
        );
    }

    #[test]
    fn test_link_escapes_and_injects_icons() {
        let view = View::default().with_urls(StaticUrls::new("/app", "/app"));
        let h = view.html();
        assert_eq!(
            h.link("i:home <Home>", "users", Options::new()).unwrap(),
            r#"<a href="/app/users"><i aria-hidden="true" class="glyphicon glyphicon-home"></i> &lt;Home&gt;</a>"#
        );
        assert_eq!(
            h.link("<b>Bold</b>", "/x", Options::new().with("escape", false)).unwrap(),
            r#"<a href="/x"><b>Bold</b></a>"#
        );
    }

    #[test]
    fn test_spliced_rows() {
        let out = HtmlHelper::spliced_rows(2, &[1, 2, 3], |n| format!("<div>{n}</div>"));
        assert_eq!(
            out,
            concat!(
                r#"<div class="row"><div>1</div><div>2</div>"#,
                r#"<div class="clearfix hidden-xs hidden-sm"></div><div>3</div></div>"#
            )
        );
        assert_eq!(HtmlHelper::spliced_rows(0, &[1], |n| n.to_string()), r#"<div class="row">1</div>"#);
    }
}
