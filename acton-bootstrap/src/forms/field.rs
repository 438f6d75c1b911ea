//! Form field types
//!
//! A [`FormField`] describes one control: its kind, label, value, input
//! group addons and HTML attributes. Fields are usually assembled through
//! [`FormBuilder`](super::FormBuilder) and rendered by
//! [`FormHelper::control`](super::FormHelper::control).

use std::fmt;
use std::str::FromStr;

use crate::template::Options;

/// Boolean attributes of a control
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldFlags {
    /// `required`, also adds the `required` container class
    pub required: bool,
    /// `disabled`
    pub disabled: bool,
    /// `readonly`
    pub readonly: bool,
    /// `autofocus`
    pub autofocus: bool,
}

/// `type` of an `<input>` control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputType {
    /// `text`
    #[default]
    Text,
    /// `email`
    Email,
    /// `password`
    Password,
    /// `number`
    Number,
    /// `tel`
    Tel,
    /// `url`
    Url,
    /// `search`
    Search,
    /// `date`
    Date,
    /// `time`
    Time,
    /// `datetime-local`
    DateTimeLocal,
    /// `color`
    Color,
    /// `range`
    Range,
    /// Rendered bare, without label or container
    Hidden,
    /// Switches the form to `multipart/form-data`
    File,
}

impl InputType {
    const ALL: [Self; 14] = [
        Self::Text,
        Self::Email,
        Self::Password,
        Self::Number,
        Self::Tel,
        Self::Url,
        Self::Search,
        Self::Date,
        Self::Time,
        Self::DateTimeLocal,
        Self::Color,
        Self::Range,
        Self::Hidden,
        Self::File,
    ];

    /// Value of the `type` attribute
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTimeLocal => "datetime-local",
            Self::Color => "color",
            Self::Range => "range",
            Self::Hidden => "hidden",
            Self::File => "file",
        }
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InputType {
    type Err = String;

    /// Parse a `type` attribute value, case-insensitively
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|input_type| input_type.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| format!("unsupported input type `{value}`"))
    }
}

/// Entry of a select box or radio set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Submitted value
    pub value: String,
    /// Text shown to the user
    pub label: String,
    /// Rendered with the `disabled` attribute
    pub disabled: bool,
}

impl SelectOption {
    /// Selectable entry
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Same entry, greyed out
    #[must_use]
    pub fn disabled(self) -> Self {
        Self {
            disabled: true,
            ..self
        }
    }
}

/// What a field renders as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// `<input>` of the given type
    Input(InputType),
    /// `<textarea>`
    Textarea {
        /// `rows` attribute
        rows: Option<u32>,
    },
    /// `<select>`
    Select {
        /// Entries in display order
        options: Vec<SelectOption>,
        /// Renders `multiple` with a `name[]` name
        multiple: bool,
    },
    /// Checkbox, preceded by a hidden `0` input
    Checkbox {
        /// Initial state
        checked: bool,
    },
    /// Radio button set, preceded by a hidden empty input
    Radio {
        /// One button per entry
        options: Vec<SelectOption>,
        /// Render the buttons on one line
        inline: bool,
    },
    /// Hidden file input driven by a button and a read-only text input
    /// showing the chosen file names
    FancyFile {
        /// Accept several files
        multiple: bool,
    },
}

impl Default for FieldKind {
    fn default() -> Self {
        Self::Input(InputType::default())
    }
}

impl FieldKind {
    /// Kind suited to a database column type
    ///
    /// Unknown column types map to a text input.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use acton_bootstrap::forms::{FieldKind, InputType};
    ///
    /// assert_eq!(FieldKind::for_column("integer"), FieldKind::Input(InputType::Number));
    /// assert_eq!(FieldKind::for_column("boolean"), FieldKind::Checkbox { checked: false });
    /// ```
    #[must_use]
    pub fn for_column(column_type: &str) -> Self {
        match column_type {
            "boolean" => Self::Checkbox { checked: false },
            "text" => Self::Textarea { rows: None },
            "datetime" | "timestamp" => Self::Input(InputType::DateTimeLocal),
            "date" => Self::Input(InputType::Date),
            "time" => Self::Input(InputType::Time),
            "float" | "integer" | "decimal" => Self::Input(InputType::Number),
            "binary" => Self::Input(InputType::File),
            _ => Self::Input(InputType::Text),
        }
    }

    /// Name used in the container class (`form-group text`)
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Input(input_type) => input_type.as_str(),
            Self::Textarea { .. } => "textarea",
            Self::Select { .. } => "select",
            Self::Checkbox { .. } => "checkbox",
            Self::Radio { .. } => "radio",
            Self::FancyFile { .. } => "file",
        }
    }
}

/// Content placed before or after a control in an input group
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Addon {
    /// Text, an icon shorthand or a single pre-rendered button
    Content(String),
    /// Pre-rendered buttons
    Buttons(Vec<String>),
}

impl Default for Addon {
    fn default() -> Self {
        Self::Content(String::new())
    }
}

impl Addon {
    /// Whether there is nothing to render
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Content(content) => content.is_empty(),
            Self::Buttons(buttons) => buttons.is_empty(),
        }
    }
}

impl From<&str> for Addon {
    fn from(content: &str) -> Self {
        Self::Content(content.to_string())
    }
}

impl From<String> for Addon {
    fn from(content: String) -> Self {
        Self::Content(content)
    }
}

impl From<Vec<String>> for Addon {
    fn from(buttons: Vec<String>) -> Self {
        Self::Buttons(buttons)
    }
}

/// A form field with all its attributes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormField {
    /// Field name, dotted paths allowed (`user.email`)
    pub name: String,
    /// Field kind
    pub kind: FieldKind,
    /// Label text, derived from the name when unset
    pub label: Option<String>,
    /// Render no label at all
    pub hide_label: bool,
    /// Placeholder text
    pub placeholder: Option<String>,
    /// Current value
    pub value: Option<String>,
    /// Attribute flags
    pub flags: FieldFlags,
    /// Element ID, derived from the name when unset
    pub id: Option<String>,
    /// Help text shown below the control, inserted as is
    pub help: Option<String>,
    /// Input group content before the control
    pub prepend: Option<Addon>,
    /// Input group content after the control
    pub append: Option<Addon>,
    /// Extra attributes of the control
    pub attrs: Options,
}

impl FormField {
    /// Field of the given kind
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Self::default()
        }
    }

    /// Element ID: the explicit one, else the slugged name
    ///
    /// `user.first_name` gives `user-first-name`.
    #[must_use]
    pub fn effective_id(&self) -> String {
        self.id.clone().unwrap_or_else(|| slug(&self.name))
    }

    /// Submitted name: `user.email` gives `user[email]`
    #[must_use]
    pub fn html_name(&self) -> String {
        let mut parts = self.name.split('.');
        let mut name = parts.next().unwrap_or_default().to_string();
        for part in parts {
            name.push('[');
            name.push_str(part);
            name.push(']');
        }
        name
    }

    /// Label text: the explicit one, else the humanized last name segment
    ///
    /// `user.first_name` gives `First Name`, `author_id` gives `Author`.
    #[must_use]
    pub fn label_text(&self) -> String {
        if let Some(label) = &self.label {
            return label.clone();
        }
        let last = self.name.rsplit('.').next().unwrap_or_default();
        let last = last.strip_suffix("_id").unwrap_or(last);
        last.split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Whether this is a hidden input
    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        matches!(self.kind, FieldKind::Input(InputType::Hidden))
    }

    /// Whether the control sits in an input group
    #[must_use]
    pub fn has_addons(&self) -> bool {
        self.prepend.as_ref().is_some_and(|addon| !addon.is_empty())
            || self.append.as_ref().is_some_and(|addon| !addon.is_empty())
    }
}

/// Lowercase alphanumeric runs joined with `-`
pub(crate) fn slug(text: &str) -> String {
    text.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}
