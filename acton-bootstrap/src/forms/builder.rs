//! Form builder with a fluent interface

use crate::error::Result;
use crate::template::{add_class, Layout, Options};

use super::error::ValidationErrors;
use super::field::{Addon, FieldKind, FormField, InputType, SelectOption};
use super::render::FormRenderer;
use super::FormHelper;

/// Builder for a complete form
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::forms::{FormBuilder, InputType};
/// use acton_bootstrap::prelude::*;
///
/// let mut form = View::default().form();
/// let html = FormBuilder::new("/signup", "post")
///     .id("signup")
///     .field("user.email", InputType::Email)
///         .placeholder("you@example.com")
///         .required()
///         .done()
///     .field("password", InputType::Password)
///         .done()
///     .submit("Create account")
///     .build(&mut form)?;
///
/// assert!(html.contains(r#"name="user[email]""#));
///
/// assert!(html.contains(r#"<input type="password" name="password""#));
/// assert!(html.ends_with("</form>"));
/// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct FormBuilder<'a> {
    pub(crate) action: String,
    /// Verb as given; rendering maps it to `post` plus `_method`
    pub(crate) method: String,
    pub(crate) layout: Layout,
    pub(crate) id: Option<String>,
    pub(crate) class: Option<String>,
    /// Rendered as the `_csrf_token` hidden input
    pub(crate) csrf_token: Option<String>,
    /// Multipart is picked automatically for file inputs
    pub(crate) enctype: Option<String>,
    pub(crate) fields: Vec<FormField>,
    /// No submit button when unset
    pub(crate) submit_text: Option<String>,
    pub(crate) submit_options: Options,
    pub(crate) errors: Option<&'a ValidationErrors>,
    /// Extra attributes of the `<form>` tag
    pub(crate) attrs: Options,
    pub(crate) novalidate: bool,
}

impl<'a> FormBuilder<'a> {
    /// Form posting to `action` with `method`
    #[must_use]
    pub fn new(action: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            action: action.into(),
            method: method.into(),
            ..Self::default()
        }
    }

    /// Control layout, [`Layout::Normal`] by default
    #[must_use]
    pub const fn layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// Labels and controls side by side
    #[must_use]
    pub const fn horizontal(self) -> Self {
        self.layout(Layout::Horizontal)
    }

    /// Everything on one line
    #[must_use]
    pub const fn inline(self) -> Self {
        self.layout(Layout::Inline)
    }

    /// `id` of the form tag
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Classes of the form tag
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Token written to the `_csrf_token` hidden input
    #[must_use]
    pub fn csrf_token(mut self, token: impl Into<String>) -> Self {
        self.csrf_token = Some(token.into());
        self
    }

    /// Explicit `enctype`
    #[must_use]
    pub fn enctype(mut self, enctype: impl Into<String>) -> Self {
        self.enctype = Some(enctype.into());
        self
    }

    /// Send the form as `multipart/form-data`
    #[must_use]
    pub fn multipart(self) -> Self {
        self.enctype("multipart/form-data")
    }

    /// Close the form with a submit button
    #[must_use]
    pub fn submit(mut self, text: impl Into<String>) -> Self {
        self.submit_text = Some(text.into());
        self
    }

    /// Set the submit button variant (`primary`, `success`, ...)
    #[must_use]
    pub fn submit_type(mut self, kind: impl Into<String>) -> Self {
        let kind: String = kind.into();
        self.submit_options.insert("bootstrap-type", kind);
        self
    }

    /// Errors shown next to the matching fields
    #[must_use]
    pub const fn errors(mut self, errors: &'a ValidationErrors) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Add `novalidate` to the form tag
    #[must_use]
    pub const fn novalidate(mut self) -> Self {
        self.novalidate = true;
        self
    }

    /// Add an attribute to the form tag
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attrs.insert(name, value);
        self
    }

    /// Start an input field
    #[must_use]
    pub fn field(self, name: impl Into<String>, input_type: InputType) -> FieldBuilder<'a> {
        FieldBuilder::new(self, FormField::new(name, FieldKind::Input(input_type)))
    }

    /// Start a field whose kind suits a database column type
    #[must_use]
    pub fn column(self, name: impl Into<String>, column_type: &str) -> FieldBuilder<'a> {
        FieldBuilder::new(self, FormField::new(name, FieldKind::for_column(column_type)))
    }

    /// Start a file input; the form is then sent multipart
    #[must_use]
    pub fn file(self, name: impl Into<String>) -> FieldBuilder<'a> {
        self.field(name, InputType::File)
    }

    /// Start a file input rendered as a button next to a read-only text input
    #[must_use]
    pub fn fancy_file(self, name: impl Into<String>) -> FieldBuilder<'a> {
        FieldBuilder::new(
            self,
            FormField::new(name, FieldKind::FancyFile { multiple: false }),
        )
    }

    /// Start a textarea
    #[must_use]
    pub fn textarea(self, name: impl Into<String>) -> FieldBuilder<'a> {
        FieldBuilder::new(self, FormField::new(name, FieldKind::Textarea { rows: None }))
    }

    /// Start a select box
    #[must_use]
    pub fn select(self, name: impl Into<String>) -> FieldBuilder<'a> {
        FieldBuilder::new(
            self,
            FormField::new(
                name,
                FieldKind::Select {
                    options: Vec::new(),
                    multiple: false,
                },
            ),
        )
    }

    /// Start a checkbox
    #[must_use]
    pub fn checkbox(self, name: impl Into<String>) -> FieldBuilder<'a> {
        FieldBuilder::new(self, FormField::new(name, FieldKind::Checkbox { checked: false }))
    }

    /// Start a radio button set
    #[must_use]
    pub fn radio(self, name: impl Into<String>) -> FieldBuilder<'a> {
        FieldBuilder::new(
            self,
            FormField::new(
                name,
                FieldKind::Radio {
                    options: Vec::new(),
                    inline: false,
                },
            ),
        )
    }

    /// Add a hidden input
    #[must_use]
    pub fn hidden(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut field = FormField::new(name, FieldKind::Input(InputType::Hidden));
        field.value = Some(value.into());
        self.fields.push(field);
        self
    }

    /// Add a prepared field
    #[must_use]
    pub fn add_field(mut self, field: FormField) -> Self {
        self.fields.push(field);
        self
    }

    /// Render the form through `helper`
    pub fn build(self, helper: &mut FormHelper) -> Result<String> {
        FormRenderer::render(helper, &self)
    }
}

/// Builder for one field, returned to the form with [`done`](Self::done)
///
/// Kind-specific settings (`rows`, `option`, `checked`, ...) are ignored for
/// fields of another kind.
#[derive(Debug, Clone)]
pub struct FieldBuilder<'a> {
    form: FormBuilder<'a>,
    field: FormField,
}

impl<'a> FieldBuilder<'a> {
    const fn new(form: FormBuilder<'a>, field: FormField) -> Self {
        Self { form, field }
    }

    /// Label text instead of the humanized name
    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.field.label = Some(label.into());
        self
    }

    /// Render no label
    #[must_use]
    pub const fn no_label(mut self) -> Self {
        self.field.hide_label = true;
        self
    }

    /// Set the placeholder, an empty first option for select boxes
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.field.placeholder = Some(placeholder.into());
        self
    }

    /// Value; for select boxes and radio sets, the chosen entry
    #[must_use]
    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.field.value = Some(value.into());
        self
    }

    /// Mark as required
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.field.flags.required = true;
        self
    }

    /// Mark as disabled
    #[must_use]
    pub const fn disabled(mut self) -> Self {
        self.field.flags.disabled = true;
        self
    }

    /// Mark as read-only
    #[must_use]
    pub const fn readonly(mut self) -> Self {
        self.field.flags.readonly = true;
        self
    }

    /// Autofocus
    #[must_use]
    pub const fn autofocus(mut self) -> Self {
        self.field.flags.autofocus = true;
        self
    }

    /// Set the element ID (defaults to the slugged name)
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.field.id = Some(id.into());
        self
    }

    /// Add CSS classes to the control
    #[must_use]
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class: String = class.into();
        self.field.attrs = add_class(&self.field.attrs, class);
        self
    }

    /// Set help text
    #[must_use]
    pub fn help(mut self, text: impl Into<String>) -> Self {
        self.field.help = Some(text.into());
        self
    }

    /// Content before the control, in an input group
    #[must_use]
    pub fn prepend(mut self, addon: impl Into<Addon>) -> Self {
        self.field.prepend = Some(addon.into());
        self
    }

    /// Content after the control, in an input group
    #[must_use]
    pub fn append(mut self, addon: impl Into<Addon>) -> Self {
        self.field.append = Some(addon.into());
        self
    }

    /// Add an attribute to the control
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.field.attrs.insert(name, value);
        self
    }

    /// Visible rows of a textarea
    #[must_use]
    pub fn rows(mut self, count: u32) -> Self {
        if let FieldKind::Textarea { rows } = &mut self.field.kind {
            *rows = Some(count);
        }
        self
    }

    /// Add a choice to a select box or radio set
    #[must_use]
    pub fn option(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.push_option(SelectOption::new(value, label))
    }

    /// Add a disabled choice to a select box or radio set
    #[must_use]
    pub fn disabled_option(self, value: impl Into<String>, label: impl Into<String>) -> Self {
        self.push_option(SelectOption::new(value, label).disabled())
    }

    /// Allow several selections in a select box or several files in a fancy file input
    #[must_use]
    pub fn multiple(mut self) -> Self {
        if let FieldKind::Select { multiple, .. } | FieldKind::FancyFile { multiple } =
            &mut self.field.kind
        {
            *multiple = true;
        }
        self
    }

    /// Check a checkbox
    #[must_use]
    pub fn checked(mut self) -> Self {
        if let FieldKind::Checkbox { checked } = &mut self.field.kind {
            *checked = true;
        }
        self
    }

    /// Put radio buttons on one line
    #[must_use]
    pub fn inline(mut self) -> Self {
        if let FieldKind::Radio { inline, .. } = &mut self.field.kind {
            *inline = true;
        }
        self
    }

    /// Finish the field and return to the form
    #[must_use]
    pub fn done(mut self) -> FormBuilder<'a> {
        self.form.fields.push(self.field);
        self.form
    }

    fn push_option(mut self, option: SelectOption) -> Self {
        match &mut self.field.kind {
            FieldKind::Select { options, .. } | FieldKind::Radio { options, .. } => {
                options.push(option);
            }
            _ => tracing::debug!(field = %self.field.name, "choice ignored by field kind"),
        }
        self
    }
}
