//! Bootstrap forms
//!
//! [`FormHelper`] renders form tags, controls and buttons in one of three
//! layouts ([`Layout::Normal`], [`Layout::Horizontal`], [`Layout::Inline`]).
//! Layout-dependent templates are looked up as `<name><Layout>` first
//! (`labelHorizontal`, `labelInline`) and fall back to the base template;
//! every template sees the grid column classes of the horizontal layout as
//! `labelColumnClass`, `inputColumnClass`, `errorColumnClass` and
//! `inputColumnOffsetClass`.
//!
//! [`FormBuilder`] assembles a whole form fluently:
//!
//! ```rust
//! use acton_bootstrap::forms::{FormBuilder, InputType, ValidationErrors};
//! use acton_bootstrap::prelude::*;
//!
//! let mut errors = ValidationErrors::new();
//! errors.add("email", "is required");
//!
//! let mut form = View::default().form();
//! let html = FormBuilder::new("/users", "post")
//!     .horizontal()
//!     .csrf_token("abc123")
//!     .errors(&errors)
//!     .field("email", InputType::Email)
//!         .label("Email address")
//!         .prepend("@")
//!         .required()
//!         .done()
//!     .checkbox("remember")
//!         .done()
//!     .submit("Sign up")
//!     .build(&mut form)?;
//!
//! assert!(html.starts_with(r#"<form method="post""#));
//! assert!(html.contains(r#"<div class="form-group has-error email required">"#));
//! assert!(html.contains(r#"<label class="control-label col-md-2" for="email">"#));
//! # Ok::<(), acton_bootstrap::error::BootstrapError>(())
//! ```

mod builder;
mod error;
mod field;
mod render;

use crate::error::Result;
use crate::helpers::{HelperBase, HtmlHelper, MenuItem};
use crate::template::{
    add_class, button_classes, escape_html, Layout, Options, StringTemplate, TemplateVariant,
    TemplateVars,
};
use crate::view::View;

pub use builder::{FieldBuilder, FormBuilder};
pub use error::{FieldError, ValidationErrors};
pub use field::{Addon, FieldFlags, FieldKind, FormField, InputType, SelectOption};
pub use render::FormRenderer;

const TEMPLATES: &[(&str, &str)] = &[
    ("button", "<button{{attrs}}>{{text}}</button>"),
    ("checkbox", r#"<input type="checkbox" name="{{name}}" value="{{value}}"{{attrs}}>"#),
    ("checkboxFormGroup", "{{label}}"),
    ("checkboxContainer", r#"<div class="checkbox{{required}}">{{content}}</div>"#),
    ("checkboxContainerHorizontal", r#"<div class="form-group"><div class="{{inputColumnOffsetClass}} {{inputColumnClass}}"><div class="checkbox{{required}}">{{content}}</div></div></div>"#),
    ("error", r#"<span class="help-block error-message">{{content}}</span>"#),
    ("errorHorizontal", r#"<span class="help-block error-message {{errorColumnClass}}">{{content}}</span>"#),
    ("errorList", "<ul>{{content}}</ul>"),
    ("errorItem", "<li>{{text}}</li>"),
    ("fancyFileInput", r#"{{fileInput}}<div class="input-group"><div class="input-group-btn">{{button}}</div>{{input}}</div>"#),
    ("file", r#"<input type="file" name="{{name}}"{{attrs}}>"#),
    ("formStart", "<form{{attrs}}>"),
    ("formEnd", "</form>"),
    ("formGroup", "{{label}}{{prepend}}{{input}}{{append}}"),
    ("formGroupHorizontal", r#"{{label}}<div class="{{inputColumnClass}}">{{prepend}}{{input}}{{append}}</div>"#),
    ("hiddenBlock", r#"<div style="display:none;">{{content}}</div>"#),
    ("input", r#"<input type="{{type}}" name="{{name}}" class="form-control{{attrs.class}}"{{attrs}}>"#),
    ("inputHidden", r#"<input type="hidden" name="{{name}}"{{attrs}}>"#),
    ("inputSubmit", r#"<input type="{{type}}"{{attrs}}>"#),
    ("inputContainer", r#"<div class="form-group {{type}}{{required}}">{{content}}</div>"#),
    ("inputContainerError", r#"<div class="form-group {{errorClass}} {{type}}{{required}}">{{content}}{{error}}</div>"#),
    ("label", r#"<label class="control-label{{attrs.class}}"{{attrs}}>{{text}}</label>"#),
    ("labelHorizontal", r#"<label class="control-label {{labelColumnClass}}{{attrs.class}}"{{attrs}}>{{text}}</label>"#),
    ("labelInline", r#"<label class="sr-only{{attrs.class}}"{{attrs}}>{{text}}</label>"#),
    ("nestingLabel", "{{hidden}}<label{{attrs}}>{{input}}{{text}}</label>"),
    ("option", r#"<option value="{{value}}"{{attrs}}>{{text}}</option>"#),
    ("select", r#"<select name="{{name}}" class="form-control{{attrs.class}}"{{attrs}}>{{content}}</select>"#),
    ("selectMultiple", r#"<select name="{{name}}[]" multiple="multiple" class="form-control{{attrs.class}}"{{attrs}}>{{content}}</select>"#),
    ("radio", r#"<input type="radio" name="{{name}}" value="{{value}}"{{attrs}}>"#),
    ("radioWrapper", r#"<div class="radio">{{label}}</div>"#),
    ("radioContainer", r#"<div class="form-group{{required}}">{{content}}</div>"#),
    ("inlineRadioWrapper", "{{label}}"),
    ("inlineRadioContainer", r#"<div class="form-group{{required}}">{{content}}</div>"#),
    ("inlineRadioNestingLabel", r#"{{hidden}}<label class="radio-inline{{attrs.class}}"{{attrs}}>{{input}}{{text}}</label>"#),
    ("textarea", r#"<textarea name="{{name}}" class="form-control{{attrs.class}}"{{attrs}}>{{value}}</textarea>"#),
    ("submitContainer", r#"<div class="form-group">{{content}}</div>"#),
    ("submitContainerHorizontal", r#"<div class="form-group"><div class="{{inputColumnOffsetClass}} {{inputColumnClass}}">{{content}}</div></div>"#),
    ("inputGroup", "{{inputGroupStart}}{{input}}{{inputGroupEnd}}"),
    ("inputGroupStart", r#"<div class="input-group">{{prepend}}"#),
    ("inputGroupEnd", "{{append}}</div>"),
    ("inputGroupAddons", r#"<span class="input-group-addon">{{content}}</span>"#),
    ("inputGroupButtons", r#"<span class="input-group-btn">{{content}}</span>"#),
    ("helpBlock", r#"<p class="help-block">{{content}}</p>"#),
    ("buttonGroup", r#"<div class="btn-group{{attrs.class}}"{{attrs}}>{{content}}</div>"#),
    ("buttonToolbar", r#"<div class="btn-toolbar{{attrs.class}}"{{attrs}}>{{content}}</div>"#),
];

/// Grid column of the horizontal layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    /// Label column
    Label,
    /// Control column
    Input,
    /// Error message column
    Error,
}

/// Form helper
#[derive(Debug, Clone)]
pub struct FormHelper {
    base: HelperBase,
    html: HtmlHelper,
    layout: Layout,
}

impl FormHelper {
    /// Helper with the default templates and the `form` overrides
    #[must_use]
    pub fn new(view: &View) -> Self {
        Self {
            base: HelperBase::new(view, "form", TEMPLATES),
            html: HtmlHelper::new(view),
            layout: Layout::Normal,
        }
    }

    /// Template table, for customization
    pub fn templates_mut(&mut self) -> &mut StringTemplate {
        &mut self.base.templates
    }

    /// Layout of the form being rendered
    #[must_use]
    pub const fn layout(&self) -> Layout {
        self.layout
    }

    /// Open a form
    ///
    /// Options:
    /// - `horizontal` / `inline`: select the layout until [`end`](Self::end)
    /// - `method`: `get`, `post` (default) or any other verb, sent as a
    ///   hidden `_method` input on a POST form
    /// - `csrfToken`: sent as a hidden `_csrf_token` input
    /// - `type: "file"`: multipart encoding
    ///
    /// Other options are attributes of the form tag; `action` goes through
    /// the URL resolver.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let mut form = View::default().form();
    /// assert_eq!(
    ///     form.create("/posts/1", Options::new().with("method", "put").with("inline", true))?,
    ///     concat!(
    ///         r#"<form method="post" accept-charset="utf-8" class="form-inline" role="form" action="/posts/1">"#,
    ///         r#"<div style="display:none;"><input type="hidden" name="_method" value="PUT"></div>"#,
    ///     )
    /// );
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn create(&mut self, action: &str, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let horizontal = options.take_bool("horizontal", false);
        let inline = options.take_bool("inline", false);
        self.layout = if horizontal {
            Layout::Horizontal
        } else if inline {
            Layout::Inline
        } else {
            Layout::Normal
        };
        let method = options
            .take_str("method")
            .map_or_else(|| "post".to_string(), |method| method.to_ascii_lowercase());
        let csrf_token = options.take_str("csrfToken");
        if options.take_str("type").as_deref() == Some("file") {
            options.insert("enctype", "multipart/form-data");
        }

        let mut attrs = Options::new()
            .with("method", if method == "get" { "get" } else { "post" })
            .with("accept-charset", "utf-8")
            .merge(options);
        attrs = match self.layout {
            Layout::Horizontal => add_class(&attrs, "form-horizontal"),
            Layout::Inline => add_class(&attrs, "form-inline"),
            Layout::Normal => attrs,
        };
        attrs.insert("role", "form");
        attrs.insert("action", self.base.view.urls().build(action));

        let mut out = self.format(
            "formStart",
            TemplateVars::new().attrs(self.base.attrs(&attrs, &[])),
            &template_vars,
        )?;

        let mut hidden = String::new();
        if method != "get" && method != "post" {
            hidden.push_str(&self.hidden_input("_method", &method.to_ascii_uppercase())?);
        }
        if let Some(token) = csrf_token {
            hidden.push_str(&self.hidden_input("_csrf_token", &token)?);
        }
        if !hidden.is_empty() {
            out.push_str(&self.format(
                "hiddenBlock",
                TemplateVars::new().with("content", hidden),
                &Options::new(),
            )?);
        }
        tracing::trace!(action = %action, layout = ?self.layout, "open form");
        Ok(out)
    }

    /// Close the form and reset the layout
    pub fn end(&mut self) -> Result<String> {
        let out = self.format("formEnd", TemplateVars::new(), &Options::new())?;
        self.layout = Layout::Normal;
        Ok(out)
    }

    /// Full control: container, label, input group, help block and errors
    pub fn control(&self, field: &FormField, errors: Option<&ValidationErrors>) -> Result<String> {
        FormRenderer::control(self, field, errors)
    }

    /// Grid class of a horizontal column, `col-<size>-[offset-]<width>`
    ///
    /// An error column width of zero reuses the control column, offset by
    /// the label width.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::forms::Column;
    /// use acton_bootstrap::prelude::*;
    ///
    /// let form = View::default().form();
    /// assert_eq!(form.column_class(Column::Label, false), "col-md-2");
    /// assert_eq!(form.column_class(Column::Error, false), "col-md-offset-2 col-md-10");
    /// ```
    #[must_use]
    pub fn column_class(&self, column: Column, offset: bool) -> String {
        let settings = &self.base.view.config().form;
        let width = match column {
            Column::Label => settings.columns.label,
            Column::Input => settings.columns.input,
            Column::Error if settings.columns.error == 0 => {
                return format!(
                    "{} {}",
                    self.column_class(Column::Label, true),
                    self.column_class(Column::Input, false)
                );
            }
            Column::Error => settings.columns.error,
        };
        let offset = if offset { "offset-" } else { "" };
        format!("col-{}-{offset}{width}", settings.grid_size)
    }

    /// Prepend `prepend` to `input`, or open an input group when `input` is
    /// `None`
    ///
    /// Text addons get icon shorthands replaced; content holding a button
    /// goes into a button addon.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let form = View::default().form();
    /// assert_eq!(
    ///     form.prepend(Some("<input>"), "$")?,
    ///     r#"<div class="input-group"><span class="input-group-addon">$</span><input></div>"#
    /// );
    /// assert_eq!(form.prepend(None, "")?, r#"<div class="input-group">"#);
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn prepend(&self, input: Option<&str>, prepend: impl Into<Addon>) -> Result<String> {
        let prepend = self.addon(&prepend.into())?;
        match input {
            Some(input) => self.input_group(input, prepend, String::new()),
            None => self.format(
                "inputGroupStart",
                TemplateVars::new().with("prepend", prepend),
                &Options::new(),
            ),
        }
    }

    /// Append `append` to `input`, or close an input group when `input` is
    /// `None`
    pub fn append(&self, input: Option<&str>, append: impl Into<Addon>) -> Result<String> {
        let append = self.addon(&append.into())?;
        match input {
            Some(input) => self.input_group(input, String::new(), append),
            None => self.format(
                "inputGroupEnd",
                TemplateVars::new().with("append", append),
                &Options::new(),
            ),
        }
    }

    /// Wrap `input` between `prepend` and `append` in one input group
    pub fn wrap(
        &self,
        input: &str,
        prepend: impl Into<Addon>,
        append: impl Into<Addon>,
    ) -> Result<String> {
        let mut out = self.prepend(None, prepend)?;
        out.push_str(input);
        out.push_str(&self.append(None, append)?);
        Ok(out)
    }

    /// `<button>`, `type="submit"` unless the `type` option says otherwise
    ///
    /// Takes the `bootstrap-type`, `bootstrap-size` and `bootstrap-block`
    /// options. The title is not escaped unless `escape` is `true`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let form = View::default().form();
    /// assert_eq!(
    ///     form.button("i:ok Save", Options::new().with("bootstrap-type", "primary"))?,
    ///     concat!(
    ///         r#"<button type="submit" class="btn btn-primary">"#,
    ///         r#"<i aria-hidden="true" class="glyphicon glyphicon-ok"></i> Save</button>"#,
    ///     )
    /// );
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn button(&self, title: &str, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let title = if HelperBase::take_escape(&mut options, false) {
            escape_html(title)
        } else {
            title.to_string()
        };
        let (title, _) = self.base.easy_icon(&title, &mut options);
        let options = button_classes(
            &Options::new().with("type", "submit").merge(options),
            &self.base.view.config().buttons.kind,
        );
        self.format(
            "button",
            TemplateVars::new()
                .with("text", title)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Submit input in its container
    ///
    /// The caption defaults to the translated `Submit`; the `type` option
    /// may turn it into a `reset` input.
    pub fn submit(&self, caption: Option<&str>, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let caption = caption.map_or_else(|| self.base.view.translate("Submit"), str::to_string);
        let kind = options
            .take_str("type")
            .unwrap_or_else(|| "submit".to_string());
        let options = button_classes(
            &Options::new().with("value", caption).merge(options),
            &self.base.view.config().buttons.kind,
        );
        let input = self.format(
            "inputSubmit",
            TemplateVars::new()
                .with("type", kind)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )?;
        self.format(
            "submitContainer",
            TemplateVars::new().with("content", input),
            &template_vars,
        )
    }

    /// Group pre-rendered buttons; `vertical` stacks them
    pub fn button_group<S: AsRef<str>>(&self, buttons: &[S], mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        if options.take_bool("vertical", false) {
            options = add_class(&options, "btn-group-vertical");
        }
        self.format(
            "buttonGroup",
            TemplateVars::new()
                .with("content", concat(buttons))
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Toolbar of pre-rendered button groups
    pub fn button_toolbar<S: AsRef<str>>(&self, groups: &[S], mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        self.format(
            "buttonToolbar",
            TemplateVars::new()
                .with("content", concat(groups))
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )
    }

    /// Button toggling a dropdown menu, both in a button group
    ///
    /// `options` apply to the button.
    pub fn dropdown_button(&self, title: &str, items: &[MenuItem], options: Options) -> Result<String> {
        let options = options
            .with("type", false)
            .with("data-toggle", "dropdown");
        let options = add_class(&options, "dropdown-toggle");
        let button = self.button(&format!(r#"{title} <span class="caret"></span>"#), options)?;
        let menu = self.html.dropdown(items, Options::new())?;
        self.button_group(&[button, menu], Options::new())
    }

    /// Render the layout variant of `stem` with the column classes available
    fn format(&self, stem: &str, vars: TemplateVars, template_vars: &Options) -> Result<String> {
        let name = self
            .base
            .templates
            .resolve(stem, "", TemplateVariant::layout(self.layout));
        let vars = self.column_vars().extend(vars);
        self.base.format(&name, vars, template_vars)
    }

    fn column_vars(&self) -> TemplateVars {
        TemplateVars::new()
            .with("inputColumnClass", self.column_class(Column::Input, false))
            .with("labelColumnClass", self.column_class(Column::Label, false))
            .with("errorColumnClass", self.column_class(Column::Error, false))
            .with("inputColumnOffsetClass", self.column_class(Column::Label, true))
    }

    fn hidden_input(&self, name: &str, value: &str) -> Result<String> {
        self.format(
            "inputHidden",
            TemplateVars::new()
                .with("name", name)
                .attrs(self.base.attrs(&Options::new().with("value", value), &[])),
            &Options::new(),
        )
    }

    fn addon(&self, addon: &Addon) -> Result<String> {
        if addon.is_empty() {
            return Ok(String::new());
        }
        let (template, content) = match addon {
            Addon::Content(content) => {
                let (content, _) = self.base.easy_icon(content, &mut Options::new());
                let template = if is_button(&content) {
                    "inputGroupButtons"
                } else {
                    "inputGroupAddons"
                };
                (template, content)
            }
            Addon::Buttons(buttons) => ("inputGroupButtons", buttons.concat()),
        };
        self.format(
            template,
            TemplateVars::new().with("content", content),
            &Options::new(),
        )
    }

    fn input_group(&self, input: &str, prepend: String, append: String) -> Result<String> {
        let start = self.format(
            "inputGroupStart",
            TemplateVars::new().with("prepend", prepend),
            &Options::new(),
        )?;
        let end = self.format(
            "inputGroupEnd",
            TemplateVars::new().with("append", append),
            &Options::new(),
        )?;
        self.format(
            "inputGroup",
            TemplateVars::new()
                .with("inputGroupStart", start)
                .with("input", input)
                .with("inputGroupEnd", end),
            &Options::new(),
        )
    }
}

/// Whether the markup holds a button or a submit input
fn is_button(html: &str) -> bool {
    html.contains("<button") || html.contains(r#"type="submit""#)
}

fn concat<S: AsRef<str>>(parts: &[S]) -> String {
    parts.iter().map(AsRef::as_ref).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BootstrapConfig;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_create_and_end() {
        let mut form = View::default().form();
        assert_eq!(
            form.create("/users", Options::new()).unwrap(),
            r#"<form method="post" accept-charset="utf-8" role="form" action="/users">"#
        );
        assert_eq!(form.layout(), Layout::Normal);
        assert_eq!(form.end().unwrap(), "</form>");
    }

    #[test]
    fn test_create_horizontal_with_token() {
        let mut form = View::default().form();
        let html = form
            .create(
                "/login",
                Options::new()
                    .with("horizontal", true)
                    .with("id", "login")
                    .with("csrfToken", "t0k"),
            )
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<form method="post" accept-charset="utf-8" id="login" class="form-horizontal" role="form" action="/login">"#,
                r#"<div style="display:none;"><input type="hidden" name="_csrf_token" value="t0k"></div>"#
            )
        );
        assert_eq!(form.layout(), Layout::Horizontal);
        form.end().unwrap();
        assert_eq!(form.layout(), Layout::Normal);
    }

    #[test]
    fn test_create_get_and_file() {
        let mut form = View::default().form();
        let html = form
            .create("/search", Options::new().with("method", "GET"))
            .unwrap();
        assert!(html.starts_with(r#"<form method="get""#));
        assert!(!html.contains("_method"));

        let html = form
            .create("/upload", Options::new().with("type", "file"))
            .unwrap();
        assert!(html.contains(r#"enctype="multipart/form-data""#));
    }

    #[test]
    fn test_column_classes() {
        let mut config = BootstrapConfig::default();
        config.form.columns.label = 3;
        config.form.columns.input = 6;
        config.form.columns.error = 3;
        config.form.grid_size = "sm".to_string();
        let form = View::new(config).form();

        assert_eq!(form.column_class(Column::Label, false), "col-sm-3");
        assert_eq!(form.column_class(Column::Label, true), "col-sm-offset-3");
        assert_eq!(form.column_class(Column::Input, false), "col-sm-6");
        assert_eq!(form.column_class(Column::Error, false), "col-sm-3");
    }

    #[test]
    fn test_append_and_wrap() {
        let form = View::default().form();
        assert_eq!(
            form.append(Some("<input>"), ".00").unwrap(),
            r#"<div class="input-group"><input><span class="input-group-addon">.00</span></div>"#
        );
        assert_eq!(form.append(None, "").unwrap(), "</div>");
        assert_eq!(
            form.wrap("<input>", "$", ".00").unwrap(),
            concat!(
                r#"<div class="input-group"><span class="input-group-addon">$</span>"#,
                r#"<input><span class="input-group-addon">.00</span></div>"#
            )
        );
    }

    #[test]
    fn test_addon_buttons_and_icons() {
        let form = View::default().form();
        let button = form.button("Go", Options::new()).unwrap();
        let html = form.append(Some("<input>"), button.as_str()).unwrap();
        assert!(html.contains(r#"<span class="input-group-btn"><button"#));

        let html = form
            .prepend(Some("<input>"), vec!["<a>1</a>".to_string(), "<a>2</a>".to_string()])
            .unwrap();
        assert!(html.contains(r#"<span class="input-group-btn"><a>1</a><a>2</a></span>"#));

        let html = form.prepend(Some("<input>"), "i:user").unwrap();
        assert!(html.contains(
            r#"<span class="input-group-addon"><i aria-hidden="true" class="glyphicon glyphicon-user"></i></span>"#
        ));
    }

    #[test]
    fn test_button_options() {
        let form = View::default().form();
        assert_eq!(
            form.button("<b>", Options::new().with("type", "button").with("escape", true))
                .unwrap(),
            r#"<button type="button" class="btn btn-default">&lt;b&gt;</button>"#
        );
        assert_eq!(
            form.button("x", Options::new().with("bootstrap-size", "lg")).unwrap(),
            r#"<button type="submit" class="btn btn-default btn-lg">x</button>"#
        );
    }

    #[test]
    fn test_submit() {
        let mut form = View::default().form();
        assert_eq!(
            form.submit(Some("Save"), Options::new().with("bootstrap-type", "success"))
                .unwrap(),
            r#"<div class="form-group"><input type="submit" value="Save" class="btn btn-success"></div>"#
        );

        form.create("/x", Options::new().with("horizontal", true)).unwrap();
        assert_eq!(
            form.submit(None, Options::new()).unwrap(),
            concat!(
                r#"<div class="form-group"><div class="col-md-offset-2 col-md-10">"#,
                r#"<input type="submit" value="Submit" class="btn btn-default"></div></div>"#
            )
        );
    }

    #[test]
    fn test_button_group_and_toolbar() {
        let form = View::default().form();
        let group = form
            .button_group(&["<a>1</a>", "<a>2</a>"], Options::new().with("vertical", true))
            .unwrap();
        assert_eq!(
            group,
            r#"<div class="btn-group btn-group-vertical"><a>1</a><a>2</a></div>"#
        );
        assert_eq!(
            form.button_toolbar(&[group.as_str()], Options::new().with("id", "tb"))
                .unwrap(),
            format!(r#"<div class="btn-toolbar" id="tb">{group}</div>"#)
        );
    }

    #[test]
    fn test_dropdown_button() {
        let form = View::default().form();
        let html = form
            .dropdown_button(
                "Action",
                &[MenuItem::link("Edit", "/edit"), MenuItem::divider()],
                Options::new(),
            )
            .unwrap();
        assert!(html.starts_with(concat!(
            r#"<div class="btn-group">"#,
            r#"<button data-toggle="dropdown" class="dropdown-toggle btn btn-default">"#,
            r#"Action <span class="caret"></span></button>"#,
            r#"<ul class="dropdown-menu dropdown-menu-left">"#
        )));
        assert!(html.contains(r#"<a href="/edit">Edit</a>"#));
        assert!(html.ends_with("</ul></div>"));
    }

    #[test]
    fn test_template_override_for_layout() {
        let mut form = View::default().form();
        form.templates_mut()
            .set("submitContainerInline", "<span>{{content}}</span>");
        form.create("/x", Options::new().with("inline", true)).unwrap();
        let html = form.submit(Some("Go"), Options::new()).unwrap();
        assert!(html.starts_with("<span><input"));
    }
}
