//! Control and form rendering
//!
//! Turns [`FormField`]s into the container / label / input group / help /
//! error markup of the helper's current layout, and whole
//! [`FormBuilder`]s into a complete form.

use crate::error::Result;
use crate::template::{add_class, escape_html, Layout, Options, TemplateVars};

use super::builder::FormBuilder;
use super::error::{FieldError, ValidationErrors};
use super::field::{slug, FieldKind, FormField, InputType, SelectOption};
use super::FormHelper;

/// Renders fields and forms through a [`FormHelper`]
pub struct FormRenderer;

impl FormRenderer {
    /// Render a whole form: opening tag, controls, submit button, closing tag
    ///
    /// A form holding a file input, fancy or not, is sent multipart.
    pub fn render(helper: &mut FormHelper, form: &FormBuilder<'_>) -> Result<String> {
        let mut options = form.attrs.clone();
        options.insert("method", form.method.as_str());
        options.insert("horizontal", form.layout == Layout::Horizontal);
        options.insert("inline", form.layout == Layout::Inline);
        if let Some(id) = &form.id {
            options.insert("id", id.as_str());
        }
        if let Some(class) = &form.class {
            options = add_class(&options, class.as_str());
        }
        let multipart = form
            .fields
            .iter()
            .any(|field| {
                matches!(
                    field.kind,
                    FieldKind::Input(InputType::File) | FieldKind::FancyFile { .. }
                )
            });
        if let Some(enctype) = &form.enctype {
            options.insert("enctype", enctype.as_str());
        } else if multipart {
            options.insert("enctype", "multipart/form-data");
        }
        if form.novalidate {
            options.insert("novalidate", true);
        }
        if let Some(token) = &form.csrf_token {
            options.insert("csrfToken", token.as_str());
        }

        let mut html = helper.create(&form.action, options)?;
        for field in &form.fields {
            html.push_str(&helper.control(field, form.errors)?);
        }
        if let Some(text) = &form.submit_text {
            html.push_str(&helper.submit(Some(text), form.submit_options.clone())?);
        }
        html.push_str(&helper.end()?);
        tracing::debug!(action = %form.action, fields = form.fields.len(), "rendered form");
        Ok(html)
    }

    /// Render one control in the helper's current layout
    ///
    /// Hidden inputs are rendered bare. The `templateVars` attribute of the
    /// field feeds every template of the control.
    pub fn control(
        helper: &FormHelper,
        field: &FormField,
        errors: Option<&ValidationErrors>,
    ) -> Result<String> {
        let mut attrs = field.attrs.clone();
        let template_vars = attrs.take_options("templateVars");
        let field_errors = errors.map_or(&[][..], |errors| errors.get(&field.name));

        if field.is_hidden() {
            let mut options = Options::new().with("id", field.effective_id());
            if let Some(value) = &field.value {
                options.insert("value", value.as_str());
            }
            return helper.format(
                "inputHidden",
                TemplateVars::new()
                    .with("name", field.html_name())
                    .attrs(helper.base.attrs(&options.merge(attrs), &[])),
                &template_vars,
            );
        }

        let (prepend, mut append) = if field.has_addons() {
            (
                helper.prepend(None, field.prepend.clone().unwrap_or_default())?,
                helper.append(None, field.append.clone().unwrap_or_default())?,
            )
        } else {
            (String::new(), String::new())
        };
        if let Some(help) = &field.help {
            append.push_str(&helper.format(
                "helpBlock",
                TemplateVars::new().with("content", help.as_str()),
                &template_vars,
            )?);
        }

        let content = match &field.kind {
            FieldKind::Checkbox { checked } => {
                Self::checkbox(helper, field, *checked, attrs, &template_vars)?
            }
            FieldKind::Radio { options, inline } => {
                let input = Self::radios(helper, field, options, *inline, &attrs, &template_vars)?;
                helper.format(
                    "formGroup",
                    TemplateVars::new()
                        .with("label", Self::label(helper, field, false, &template_vars)?)
                        .with("prepend", prepend)
                        .with("input", input)
                        .with("append", append),
                    &template_vars,
                )?
            }
            _ => {
                let input = Self::widget(helper, field, !field_errors.is_empty(), attrs, &template_vars)?;
                helper.format(
                    "formGroup",
                    TemplateVars::new()
                        .with("label", Self::label(helper, field, true, &template_vars)?)
                        .with("prepend", prepend)
                        .with("input", input)
                        .with("append", append),
                    &template_vars,
                )?
            }
        };

        let vars = TemplateVars::new()
            .with("content", content)
            .with("type", field.kind.type_name())
            .with("required", if field.flags.required { " required" } else { "" });
        if !field_errors.is_empty() {
            let error = Self::errors(helper, field_errors, &template_vars)?;
            return helper.format(
                "inputContainerError",
                vars.with("error", error)
                    .with("errorClass", helper.base.view.config().form.error_class.as_str()),
                &template_vars,
            );
        }
        let container = match &field.kind {
            FieldKind::Checkbox { .. } => "checkboxContainer",
            FieldKind::Radio { inline: true, .. } => "inlineRadioContainer",
            FieldKind::Radio { .. } => "radioContainer",
            _ => "inputContainer",
        };
        helper.format(container, vars, &template_vars)
    }

    /// Attributes shared by every control kind
    fn control_options(field: &FormField, id: String) -> Options {
        let mut options = Options::new().with("id", id);
        let flags = field.flags;
        for (name, on) in [
            ("required", flags.required),
            ("disabled", flags.disabled),
            ("readonly", flags.readonly),
            ("autofocus", flags.autofocus),
        ] {
            if on {
                options.insert(name, true);
            }
        }
        options
    }

    fn widget(
        helper: &FormHelper,
        field: &FormField,
        has_errors: bool,
        attrs: Options,
        template_vars: &Options,
    ) -> Result<String> {
        let mut options = Self::control_options(field, field.effective_id());
        if let Some(placeholder) = &field.placeholder {
            if !matches!(field.kind, FieldKind::Select { .. }) {
                options.insert("placeholder", placeholder.as_str());
            }
        }
        let mut options = options.merge(attrs);
        if has_errors {
            options = add_class(&options, "form-error");
        }

        let vars = TemplateVars::new().with("name", field.html_name());
        match &field.kind {
            FieldKind::Input(InputType::File) => helper.format(
                "file",
                vars.attrs(helper.base.attrs(&options, &[])),
                template_vars,
            ),
            FieldKind::Input(input_type) => {
                if let Some(value) = &field.value {
                    options.insert("value", value.as_str());
                }
                helper.format(
                    "input",
                    vars.with("type", input_type.as_str())
                        .attrs(helper.base.attrs(&options, &[])),
                    template_vars,
                )
            }
            FieldKind::Textarea { rows } => {
                if let Some(rows) = rows {
                    options.insert("rows", *rows);
                }
                helper.format(
                    "textarea",
                    vars.with("value", escape_html(field.value.as_deref().unwrap_or_default()))
                        .attrs(helper.base.attrs(&options, &[])),
                    template_vars,
                )
            }
            FieldKind::Select { options: choices, multiple } => {
                let mut content = String::new();
                if let Some(placeholder) = &field.placeholder {
                    content.push_str(&Self::option(
                        helper,
                        &SelectOption::new("", placeholder.as_str()),
                        false,
                        template_vars,
                    )?);
                }
                for choice in choices {
                    let selected = field.value.as_deref() == Some(choice.value.as_str());
                    content.push_str(&Self::option(helper, choice, selected, template_vars)?);
                }
                helper.format(
                    if *multiple { "selectMultiple" } else { "select" },
                    vars.with("content", content)
                        .attrs(helper.base.attrs(&options, &[])),
                    template_vars,
                )
            }
            FieldKind::FancyFile { multiple } => {
                Self::fancy_file(helper, field, *multiple, options, template_vars)
            }
            FieldKind::Checkbox { .. } | FieldKind::Radio { .. } => Ok(String::new()),
        }
    }

    /// Hidden file input, a button opening it and a read-only text input
    /// echoing the chosen file names
    ///
    /// Placeholder and classes go to the text input. The hidden input never
    /// carries `required`.
    fn fancy_file(
        helper: &FormHelper,
        field: &FormField,
        multiple: bool,
        mut options: Options,
        template_vars: &Options,
    ) -> Result<String> {
        let view = &helper.base.view;
        let id = field.effective_id();
        let click = format!("document.getElementById('{id}').click();");
        let count_label = view.translate("files selected");
        let button_label = view.translate(if multiple { "Choose Files" } else { "Choose File" });

        let mut text_options = Options::new();
        if let Some(class) = options.take("class") {
            text_options.insert("class", class);
        }
        text_options.insert("readonly", true);
        text_options.insert("id", format!("{id}-input"));
        text_options.insert("onclick", click.as_str());
        if let Some(placeholder) = options.take("placeholder") {
            text_options.insert("placeholder", placeholder);
        }
        if let Some(value) = &field.value {
            text_options.insert("value", value.as_str());
        }

        options.take("required");
        if multiple {
            options.insert("multiple", true);
        }
        options.insert("style", "display: none;");
        options.insert(
            "onchange",
            format!(
                "document.getElementById('{id}-input').value = (this.files.length <= 1) ? \
                 (this.files.length ? this.files[0].name : '') : \
                 this.files.length + ' ' + '{count_label}';"
            ),
        );

        let name = field.html_name();
        let file_input = helper.format(
            "file",
            TemplateVars::new()
                .with("name", name.as_str())
                .attrs(helper.base.attrs(&options, &[])),
            template_vars,
        )?;
        let text_input = helper.format(
            "input",
            TemplateVars::new()
                .with("type", "text")
                .with("name", text_field_name(&name))
                .attrs(helper.base.attrs(&text_options, &[])),
            template_vars,
        )?;
        let button = helper.button(
            &button_label,
            Options::new()
                .with("type", "button")
                .with("onclick", click)
                .with("escape", true),
        )?;
        helper.format(
            "fancyFileInput",
            TemplateVars::new()
                .with("fileInput", file_input)
                .with("button", button)
                .with("input", text_input),
            template_vars,
        )
    }

    fn option(
        helper: &FormHelper,
        choice: &SelectOption,
        selected: bool,
        template_vars: &Options,
    ) -> Result<String> {
        let options = Options::new()
            .with("selected", selected)
            .with("disabled", choice.disabled);
        helper.format(
            "option",
            TemplateVars::new()
                .with("value", escape_html(&choice.value))
                .with("text", escape_html(&choice.label))
                .attrs(helper.base.attrs(&options, &[])),
            template_vars,
        )
    }

    fn checkbox(
        helper: &FormHelper,
        field: &FormField,
        checked: bool,
        attrs: Options,
        template_vars: &Options,
    ) -> Result<String> {
        let id = field.effective_id();
        let name = field.html_name();
        let hidden = helper.hidden_input(&name, "0")?;

        let mut options = Self::control_options(field, id.clone());
        if checked {
            options.insert("checked", true);
        }
        let input = helper.format(
            "checkbox",
            TemplateVars::new()
                .with("name", name)
                .with("value", escape_html(field.value.as_deref().unwrap_or("1")))
                .attrs(helper.base.attrs(&options.merge(attrs), &[])),
            template_vars,
        )?;

        let label = if field.hide_label {
            format!("{hidden}{input}")
        } else {
            helper.format(
                "nestingLabel",
                TemplateVars::new()
                    .with("hidden", hidden)
                    .with("input", input)
                    .with("text", escape_html(&field.label_text()))
                    .attrs(helper.base.attrs(&Options::new().with("for", id), &[])),
                template_vars,
            )?
        };
        helper.format(
            "checkboxFormGroup",
            TemplateVars::new().with("label", label),
            template_vars,
        )
    }

    fn radios(
        helper: &FormHelper,
        field: &FormField,
        choices: &[SelectOption],
        inline: bool,
        attrs: &Options,
        template_vars: &Options,
    ) -> Result<String> {
        let id = field.effective_id();
        let name = field.html_name();
        let (label_template, wrapper_template) = if inline {
            ("inlineRadioNestingLabel", "inlineRadioWrapper")
        } else {
            ("nestingLabel", "radioWrapper")
        };

        let mut html = helper.hidden_input(&name, "")?;
        for choice in choices {
            let choice_id = format!("{id}-{}", slug(&choice.value));
            let mut options = Self::control_options(field, choice_id.clone());
            if field.value.as_deref() == Some(choice.value.as_str()) {
                options.insert("checked", true);
            }
            if choice.disabled {
                options.insert("disabled", true);
            }
            let input = helper.format(
                "radio",
                TemplateVars::new()
                    .with("name", name.as_str())
                    .with("value", escape_html(&choice.value))
                    .attrs(helper.base.attrs(&options.merge(attrs.clone()), &[])),
                template_vars,
            )?;
            let label = helper.format(
                label_template,
                TemplateVars::new()
                    .with("input", input)
                    .with("text", escape_html(&choice.label))
                    .attrs(helper.base.attrs(&Options::new().with("for", choice_id), &[])),
                template_vars,
            )?;
            html.push_str(&helper.format(
                wrapper_template,
                TemplateVars::new().with("label", label),
                template_vars,
            )?);
        }
        Ok(html)
    }

    fn label(
        helper: &FormHelper,
        field: &FormField,
        with_target: bool,
        template_vars: &Options,
    ) -> Result<String> {
        if field.hide_label {
            return Ok(String::new());
        }
        let options = if with_target {
            Options::new().with("for", field.effective_id())
        } else {
            Options::new()
        };
        helper.format(
            "label",
            TemplateVars::new()
                .with("text", escape_html(&field.label_text()))
                .attrs(helper.base.attrs(&options, &[])),
            template_vars,
        )
    }

    /// One error as text, several as a list
    fn errors(helper: &FormHelper, errors: &[FieldError], template_vars: &Options) -> Result<String> {
        let content = if let [error] = errors {
            escape_html(&error.message)
        } else {
            let mut items = String::new();
            for error in errors {
                items.push_str(&helper.format(
                    "errorItem",
                    TemplateVars::new().with("text", escape_html(&error.message)),
                    template_vars,
                )?);
            }
            helper.format(
                "errorList",
                TemplateVars::new().with("content", items),
                template_vars,
            )?
        };
        helper.format(
            "error",
            TemplateVars::new().with("content", content),
            template_vars,
        )
    }
}

/// Name of the text input shown beside a fancy file input
///
/// `avatar` gives `avatar-text`, `user[avatar]` gives `user[avatar-text]`.
fn text_field_name(name: &str) -> String {
    name.strip_suffix(']')
        .map_or_else(|| format!("{name}-text"), |stem| format!("{stem}-text]"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{Addon, FieldFlags};
    use crate::testing::{assert_balanced, assert_in_order};
    use crate::view::View;
    use pretty_assertions::assert_eq;

    fn field(name: &str, kind: FieldKind) -> FormField {
        FormField::new(name, kind)
    }

    fn horizontal() -> FormHelper {
        let mut form = View::default().form();
        form.create("/x", Options::new().with("horizontal", true)).unwrap();
        form
    }

    #[test]
    fn test_text_control() {
        let form = View::default().form();
        let html = form.control(&field("title", FieldKind::default()), None).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group text">"#,
                r#"<label class="control-label" for="title">Title</label>"#,
                r#"<input type="text" name="title" class="form-control" id="title">"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_required_with_value_and_attrs() {
        let form = View::default().form();
        let mut email = field("user.email", FieldKind::Input(InputType::Email));
        email.value = Some("a&b@example.com".to_string());
        email.placeholder = Some("you@example.com".to_string());
        email.flags = FieldFlags {
            required: true,
            ..FieldFlags::default()
        };
        email.attrs = Options::new().with("class", "input-lg").with("maxlength", 60);

        let html = form.control(&email, None).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group email required">"#,
                r#"<label class="control-label" for="user-email">Email</label>"#,
                r#"<input type="email" name="user[email]" class="form-control input-lg" id="user-email" required="required" placeholder="you@example.com" maxlength="60" value="a&amp;b@example.com">"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_horizontal_control_with_error() {
        let form = horizontal();
        let mut errors = ValidationErrors::new();
        errors.add("name", "is <required>");

        let html = form.control(&field("name", FieldKind::default()), Some(&errors)).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group has-error text">"#,
                r#"<label class="control-label col-md-2" for="name">Name</label>"#,
                r#"<div class="col-md-10">"#,
                r#"<input type="text" name="name" class="form-control form-error" id="name">"#,
                "</div>",
                r#"<span class="help-block error-message col-md-offset-2 col-md-10">is &lt;required&gt;</span>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_error_list() {
        let form = View::default().form();
        let mut errors = ValidationErrors::new();
        errors.add("name", "a");
        errors.add("name", "b");
        let html = form.control(&field("name", FieldKind::default()), Some(&errors)).unwrap();
        assert!(html.ends_with(
            r#"<span class="help-block error-message"><ul><li>a</li><li>b</li></ul></span></div>"#
        ));
    }

    #[test]
    fn test_inline_label_is_screen_reader_only() {
        let mut form = View::default().form();
        form.create("/x", Options::new().with("inline", true)).unwrap();
        let html = form.control(&field("q", FieldKind::default()), None).unwrap();
        assert!(html.contains(r#"<label class="sr-only" for="q">Q</label>"#));
    }

    #[test]
    fn test_prepend_append_and_help() {
        let form = View::default().form();
        let mut price = field("price", FieldKind::Input(InputType::Number));
        price.prepend = Some("$".into());
        price.help = Some("Without taxes".to_string());

        let html = form.control(&price, None).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group number">"#,
                r#"<label class="control-label" for="price">Price</label>"#,
                r#"<div class="input-group"><span class="input-group-addon">$</span>"#,
                r#"<input type="number" name="price" class="form-control" id="price">"#,
                "</div>",
                r#"<p class="help-block">Without taxes</p>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_append_buttons() {
        let form = View::default().form();
        let mut search = field("q", FieldKind::Input(InputType::Search));
        search.hide_label = true;
        search.append = Some(Addon::Buttons(vec![form.button("Go", Options::new()).unwrap()]));
        let html = form.control(&search, None).unwrap();
        assert!(html.contains(concat!(
            r#"<div class="input-group"><input type="search" name="q" class="form-control" id="q">"#,
            r#"<span class="input-group-btn"><button type="submit" class="btn btn-default">Go</button></span></div>"#
        )));
        assert!(!html.contains("<label"));
    }

    #[test]
    fn test_checkbox() {
        let form = View::default().form();
        let html = form
            .control(&field("remember_me", FieldKind::Checkbox { checked: true }), None)
            .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="checkbox">"#,
                r#"<input type="hidden" name="remember_me" value="0">"#,
                r#"<label for="remember-me">"#,
                r#"<input type="checkbox" name="remember_me" value="1" id="remember-me" checked="checked">"#,
                "Remember Me</label></div>"
            )
        );

        let html = horizontal()
            .control(&field("terms", FieldKind::Checkbox { checked: false }), None)
            .unwrap();
        assert!(html.starts_with(concat!(
            r#"<div class="form-group"><div class="col-md-offset-2 col-md-10">"#,
            r#"<div class="checkbox"><input type="hidden""#
        )));
        assert!(html.ends_with("Terms</label></div></div></div>"));
    }

    #[test]
    fn test_radios() {
        let form = View::default().form();
        let mut gender = field(
            "gender",
            FieldKind::Radio {
                options: vec![SelectOption::new("f", "Female"), SelectOption::new("m", "Male")],
                inline: false,
            },
        );
        gender.value = Some("m".to_string());

        let html = form.control(&gender, None).unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="form-group">"#,
                r#"<label class="control-label">Gender</label>"#,
                r#"<input type="hidden" name="gender" value="">"#,
                r#"<div class="radio"><label for="gender-f"><input type="radio" name="gender" value="f" id="gender-f">Female</label></div>"#,
                r#"<div class="radio"><label for="gender-m"><input type="radio" name="gender" value="m" id="gender-m" checked="checked">Male</label></div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_inline_radios() {
        let form = View::default().form();
        let choice = field(
            "size",
            FieldKind::Radio {
                options: vec![SelectOption::new("s", "S"), SelectOption::new("l", "L").disabled()],
                inline: true,
            },
        );
        let html = form.control(&choice, None).unwrap();
        assert!(html.contains(
            r#"<label class="radio-inline" for="size-s"><input type="radio" name="size" value="s" id="size-s">S</label>"#
        ));
        assert!(html.contains(r#"id="size-l" disabled="disabled">L</label>"#));
        assert!(!html.contains(r#"class="radio""#));
    }

    #[test]
    fn test_select() {
        let form = View::default().form();
        let mut country = field(
            "country",
            FieldKind::Select {
                options: vec![SelectOption::new("fr", "France"), SelectOption::new("de", "Germany")],
                multiple: false,
            },
        );
        country.value = Some("de".to_string());
        country.placeholder = Some("Choose...".to_string());

        let html = form.control(&country, None).unwrap();
        assert!(html.contains(concat!(
            r#"<select name="country" class="form-control" id="country">"#,
            r#"<option value="">Choose...</option>"#,
            r#"<option value="fr">France</option>"#,
            r#"<option value="de" selected="selected">Germany</option>"#,
            "</select>"
        )));
        assert!(html.starts_with(r#"<div class="form-group select">"#));

        let tags = field(
            "tags",
            FieldKind::Select {
                options: vec![SelectOption::new("a", "A")],
                multiple: true,
            },
        );
        let html = form.control(&tags, None).unwrap();
        assert!(html.contains(r#"<select name="tags[]" multiple="multiple" class="form-control" id="tags">"#));
    }

    #[test]
    fn test_textarea() {
        let form = View::default().form();
        let mut body = field("body", FieldKind::Textarea { rows: Some(3) });
        body.value = Some("<p>".to_string());
        let html = form.control(&body, None).unwrap();
        assert!(html.contains(
            r#"<textarea name="body" class="form-control" id="body" rows="3">&lt;p&gt;</textarea>"#
        ));
    }

    #[test]
    fn test_hidden_and_file() {
        let form = View::default().form();
        let mut token = field("token", FieldKind::Input(InputType::Hidden));
        token.value = Some("x".to_string());
        assert_eq!(
            form.control(&token, None).unwrap(),
            r#"<input type="hidden" name="token" id="token" value="x">"#
        );

        let upload = field("avatar", FieldKind::Input(InputType::File));
        let html = form.control(&upload, None).unwrap();
        assert!(html.contains(r#"<input type="file" name="avatar" id="avatar">"#));
    }

    #[test]
    fn test_fancy_file() {
        let form = View::default().form();
        let mut upload = field("user.avatar", FieldKind::FancyFile { multiple: false });
        upload.flags.required = true;
        upload.value = Some("me.png".to_string());
        upload.placeholder = Some("No file".to_string());
        let html = form.control(&upload, None).unwrap();

        assert!(html.starts_with(r#"<div class="form-group file required">"#));
        assert!(html.contains(
            r#"<input type="file" name="user[avatar]" id="user-avatar" style="display: none;" onchange="document.getElementById('user-avatar-input').value = "#
        ));
        assert!(html.contains("this.files.length + ' ' + 'files selected';"));
        assert!(html.contains(
            r#"<input type="text" name="user[avatar-text]" class="form-control" readonly="readonly" id="user-avatar-input" onclick="document.getElementById('user-avatar').click();" placeholder="No file" value="me.png">"#
        ));
        assert!(html.contains(r#"<div class="input-group"><div class="input-group-btn"><button type="button""#));
        assert!(html.contains(">Choose File</button></div><input"));
        assert_eq!(html.matches("required=").count(), 0);
        assert_in_order(&html, &[r#"type="file""#, "<button", r#"type="text""#]);
        assert_balanced(&html);
    }

    #[test]
    fn test_fancy_file_multiple_with_errors() {
        let form = View::default().form();
        let upload = field("photos", FieldKind::FancyFile { multiple: true });
        let mut errors = ValidationErrors::new();
        errors.add("photos", "too large");
        let html = form.control(&upload, Some(&errors)).unwrap();

        assert!(html.contains(r#"<input type="file" name="photos" id="photos" multiple="multiple" style="display: none;""#));
        assert!(html.contains(r#"<input type="text" name="photos-text" class="form-control form-error" readonly="readonly""#));
        assert!(html.contains(">Choose Files</button>"));
        assert!(html.contains("too large"));
    }

    #[test]
    fn test_text_field_name() {
        assert_eq!(text_field_name("avatar"), "avatar-text");
        assert_eq!(text_field_name("user[avatar]"), "user[avatar-text]");
    }

    #[test]
    fn test_template_vars_reach_every_template() {
        let mut form = View::default().form();
        form.templates_mut().set(
            "inputContainer",
            r#"<div class="form-group {{type}} {{extra}}">{{content}}</div>"#,
        );
        let mut title = field("title", FieldKind::default());
        title.attrs = Options::new().with("templateVars", serde_json::json!({"extra": "wide"}));
        let html = form.control(&title, None).unwrap();
        assert!(html.starts_with(r#"<div class="form-group text wide">"#));
        assert!(!html.contains("templateVars"));
    }

    #[test]
    fn test_render_builder() {
        let mut form = View::default().form();
        let html = FormBuilder::new("/profile", "patch")
            .id("profile")
            .class("mb-3")
            .field("name", InputType::Text)
            .done()
            .file("avatar")
            .done()
            .submit("Save")
            .build(&mut form)
            .unwrap();

        let fancy = FormBuilder::new("/photos", "post")
            .fancy_file("photo")
            .done()
            .build(&mut form)
            .unwrap();
        assert!(fancy.contains(r#"enctype="multipart/form-data""#));

        assert!(html.starts_with(
            r#"<form method="post" accept-charset="utf-8" id="profile" class="mb-3" enctype="multipart/form-data" role="form" action="/profile">"#
        ));
        assert!(html.contains(r#"<input type="hidden" name="_method" value="PATCH">"#));
        assert!(html.ends_with(r#"class="btn btn-default"></div></form>"#));
        assert_eq!(form.layout(), Layout::Normal);
        assert_in_order(
            &html,
            &[r#"name="_method""#, r#"name="name""#, r#"name="avatar""#, r#"value="Save""#],
        );
        assert_balanced(&html);
    }
}
