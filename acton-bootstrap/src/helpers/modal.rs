//! Modal dialogs
//!
//! A modal is streamed like a card: `create()` opens the dialog (and, with a
//! title, the header and the body), `header()`, `body()` and `footer()`
//! switch parts, `end()` closes whatever is open.

use crate::error::Result;
use crate::section::SectionTracker;
use crate::template::{add_class, Options, StringTemplate, TemplateVars};
use crate::view::View;

use super::{Content, HelperBase};

const TEMPLATES: &[(&str, &str)] = &[
    ("modalStart", r#"<div class="modal fade{{attrs.class}}" tabindex="-1" role="dialog"{{attrs}}>{{dialogStart}}{{contentStart}}"#),
    ("modalEnd", "{{contentEnd}}{{dialogEnd}}</div>"),
    ("modalDialogStart", r#"<div class="modal-dialog{{attrs.class}}" role="document"{{attrs}}>"#),
    ("modalDialogEnd", "</div>"),
    ("modalContentStart", r#"<div class="modal-content{{attrs.class}}"{{attrs}}>"#),
    ("modalContentEnd", "</div>"),
    ("headerStart", r#"<div class="modal-header{{attrs.class}}"{{attrs}}>"#),
    ("headerEnd", "</div>"),
    ("modalHeaderCloseButton", r#"<button type="button" class="close{{attrs.class}}" data-dismiss="modal" aria-label="{{label}}"{{attrs}}>{{content}}</button>"#),
    ("modalHeaderCloseContent", r#"<span aria-hidden="true">&times;</span>"#),
    ("modalTitle", r#"<h4 class="modal-title{{attrs.class}}"{{attrs}}>{{content}}</h4>"#),
    ("bodyStart", r#"<div class="modal-body{{attrs.class}}"{{attrs}}>"#),
    ("bodyEnd", "</div>"),
    ("footerStart", r#"<div class="modal-footer{{attrs.class}}"{{attrs}}>"#),
    ("footerEnd", "</div>"),
    ("modalFooterCloseButton", r#"<button type="button" class="btn btn-default{{attrs.class}}" data-dismiss="modal"{{attrs}}>{{content}}</button>"#),
];

const LEVEL: usize = 0;

/// Modal dialog helper
#[derive(Debug, Clone)]
pub struct ModalHelper {
    base: HelperBase,
    sections: SectionTracker,
    current_id: Option<String>,
}

impl ModalHelper {
    /// Helper with the default templates and the `modal` overrides
    #[must_use]
    pub fn new(view: &View) -> Self {
        Self {
            base: HelperBase::new(view, "modal", TEMPLATES),
            sections: SectionTracker::new(),
            current_id: None,
        }
    }

    /// Template table, for customization
    pub fn templates_mut(&mut self) -> &mut StringTemplate {
        &mut self.base.templates
    }

    /// Open a modal
    ///
    /// Options: `id` (also labels the dialog through `<id>Label`), `size`
    /// (`lg`, `sm` or a class), `close` (header close button, default true),
    /// `body` (open the body after a title, default true). Other options
    /// become attributes of the modal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::prelude::*;
    ///
    /// let mut modal = View::default().modal();
    /// let mut html = modal.create("Confirm", Options::new().with("id", "confirm"))?;
    /// html.push_str("Are you sure?");
    /// html.push_str(&modal.end(Content::Empty, Options::new())?);
    ///
    /// assert!(html.contains(r#"aria-labelledby="confirmLabel""#));
    /// assert!(html.contains(r#"<h4 class="modal-title" id="confirmLabel">Confirm</h4>"#));
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn create(&mut self, title: impl Into<Content>, mut options: Options) -> Result<String> {
        let title = title.into();
        self.current_id = None;

        let template_vars = options.take_options("templateVars");
        let close = options.take_bool("close", true);
        let body = options.take_bool("body", true);
        let size = options.take_str("size");

        if let Some(id) = options.get_str("id").map(str::to_string) {
            options.insert("aria-labelledby", format!("{id}Label"));
            self.current_id = Some(id);
        }

        let dialog = match size.as_deref() {
            Some("lg" | "large" | "modal-lg") => Options::new().with("class", "modal-lg"),
            Some("sm" | "small" | "modal-sm") => Options::new().with("class", "modal-sm"),
            Some(class) => add_class(&Options::new(), class),
            None => Options::new(),
        };

        let mut out = String::new();
        out.push_str(&self.sections.clear_sections(&self.base.templates)?);
        let dialog_start = self.base.format(
            "modalDialogStart",
            TemplateVars::new().attrs(self.base.attrs(&dialog, &[])),
            &Options::new(),
        )?;
        let content_start =
            self.base
                .format("modalContentStart", TemplateVars::new().attrs(""), &Options::new())?;
        out.push_str(&self.base.format(
            "modalStart",
            TemplateVars::new()
                .with("dialogStart", dialog_start)
                .with("contentStart", content_start)
                .attrs(self.base.attrs(&options, &[])),
            &template_vars,
        )?);

        if let Some(title) = title.text() {
            out.push_str(&self.header_part(Some(title), Options::new().with("close", close))?);
            if body {
                out.push_str(&self.part("body", None, Options::new())?);
            }
        }
        Ok(out)
    }

    /// Header part, with a close button and a title when content is given
    pub fn header(&mut self, content: impl Into<Content>, options: Options) -> Result<String> {
        let content = content.into();
        self.header_part(content.text(), options)
    }

    /// Body part; with content, the body is closed right away
    pub fn body(&mut self, content: impl Into<Content>, options: Options) -> Result<String> {
        let content = content.into();
        self.part("body", content.text(), options)
    }

    /// Footer part
    ///
    /// Empty text gets a close button unless `close` is `false`; with
    /// [`Content::Empty`] the footer is only opened.
    pub fn footer(&mut self, content: impl Into<Content>, mut options: Options) -> Result<String> {
        let close = options.take_bool("close", true);
        match content.into() {
            Content::Empty => self.part("footer", None, options),
            Content::Text(text) if text.is_empty() && close => {
                let button = self.base.format(
                    "modalFooterCloseButton",
                    TemplateVars::new()
                        .with("content", self.base.view.translate("Close"))
                        .attrs(""),
                    &Options::new(),
                )?;
                self.part("footer", Some(&button), options)
            }
            Content::Text(text) => self.part("footer", Some(&text), options),
        }
    }

    /// Footer made of several buttons
    pub fn footer_buttons(&mut self, buttons: &[String], options: Options) -> Result<String> {
        self.footer(buttons.concat(), options)
    }

    /// Close the modal
    ///
    /// Any [`Content::Text`] footer, even empty, renders a footer first.
    pub fn end(&mut self, footer: impl Into<Content>, options: Options) -> Result<String> {
        let mut out = self.sections.clear_sections(&self.base.templates)?;
        let footer = footer.into();
        if footer != Content::Empty {
            out.push_str(&self.footer(footer, options)?);
        }
        let content_end = self
            .base
            .format("modalContentEnd", TemplateVars::new(), &Options::new())?;
        let dialog_end = self
            .base
            .format("modalDialogEnd", TemplateVars::new(), &Options::new())?;
        out.push_str(&self.base.format(
            "modalEnd",
            TemplateVars::new()
                .with("contentEnd", content_end)
                .with("dialogEnd", dialog_end),
            &Options::new(),
        )?);
        self.current_id = None;
        Ok(out)
    }

    fn header_part(&mut self, title: Option<&str>, mut options: Options) -> Result<String> {
        let close = options.take_bool("close", true);
        let content = match title {
            Some(title) => {
                let mut content = String::new();
                if close {
                    let close_content =
                        self.base
                            .format("modalHeaderCloseContent", TemplateVars::new(), &Options::new())?;
                    content.push_str(&self.base.format(
                        "modalHeaderCloseButton",
                        TemplateVars::new()
                            .with("content", close_content)
                            .with("label", self.base.view.translate("Close"))
                            .attrs(""),
                        &Options::new(),
                    )?);
                }
                let title_attrs = Options::new().with(
                    "id",
                    self.current_id
                        .as_ref()
                        .map_or(serde_json::Value::Bool(false), |id| format!("{id}Label").into()),
                );
                content.push_str(&self.base.format(
                    "modalTitle",
                    TemplateVars::new()
                        .with("content", title)
                        .attrs(self.base.attrs(&title_attrs, &[])),
                    &Options::new(),
                )?);
                Some(content)
            }
            None => None,
        };
        self.part("header", content.as_deref(), options)
    }

    fn part(&mut self, name: &str, content: Option<&str>, mut options: Options) -> Result<String> {
        let template_vars = options.take_options("templateVars");
        let vars = TemplateVars::from_options(&template_vars)
            .extend(TemplateVars::new().attrs(self.base.attrs(&options, &["close"])));
        let mut out = self
            .sections
            .open_part(&self.base.templates, LEVEL, name, &vars, None)?;
        if let Some(content) = content.filter(|content| !content.is_empty()) {
            out.push_str(content);
            out.push_str(&self.sections.close_part(&self.base.templates, LEVEL)?);
        }
        Ok(out)
    }
}
