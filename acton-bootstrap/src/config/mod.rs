//! Configuration for the Bootstrap helpers
//!
//! Helper defaults (button variant, form grid columns, collapsible cards,
//! template overrides, ...) are loaded from multiple sources with clear
//! precedence:
//!
//! 1. Environment variables (highest priority, `BOOTSTRAP_` prefix, `__` for nesting)
//! 2. `./bootstrap.toml` (development)
//! 3. `~/.config/acton-bootstrap/{service_name}/config.toml` (user config, XDG)
//! 4. `/etc/acton-bootstrap/{service_name}/config.toml` (system config)
//! 5. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! easy_icon = true
//!
//! [buttons]
//! type = "secondary"
//!
//! [form.columns]
//! label = 3
//! input = 9
//!
//! [card]
//! collapsible = true
//!
//! [templates.html]
//! icon = '<i class="fa fa-{{type}}{{attrs.class}}"{{attrs}}></i>'
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use acton_bootstrap::config::BootstrapConfig;
//!
//! # fn example() -> anyhow::Result<()> {
//! let config = BootstrapConfig::load_for_service("my-app")?;
//! assert!(config.form.columns.label > 0);
//! # Ok(())
//! # }
//! ```

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

use crate::template::AttributeStyle;

/// Button defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonSettings {
    /// Variant used when a button has no `bootstrap-type`
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for ButtonSettings {
    fn default() -> Self {
        Self {
            kind: "default".to_string(),
        }
    }
}

/// Grid column widths of horizontal forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSettings {
    /// Label column width
    pub label: u8,
    /// Control column width
    pub input: u8,
    /// Error column width, `0` to reuse the control column with an offset
    pub error: u8,
}

impl Default for ColumnSettings {
    fn default() -> Self {
        Self {
            label: 2,
            input: 10,
            error: 0,
        }
    }
}

/// Form defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormSettings {
    /// Grid column widths for the horizontal layout
    pub columns: ColumnSettings,
    /// Grid size prefix (`md` gives `col-md-2`)
    pub grid_size: String,
    /// Class added to groups holding a control with errors
    pub error_class: String,
}

impl Default for FormSettings {
    fn default() -> Self {
        Self {
            columns: ColumnSettings::default(),
            grid_size: "md".to_string(),
            error_class: "has-error".to_string(),
        }
    }
}

/// Card and panel defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionSettings {
    /// Whether items outside a group are collapsible
    pub collapsible: bool,
}

/// Navbar defaults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavbarSettings {
    /// Mark links pointing to the current page as active
    pub auto_active_link: bool,
}

impl Default for NavbarSettings {
    fn default() -> Self {
        Self {
            auto_active_link: true,
        }
    }
}

/// Alert defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertSettings {
    /// Alert variant
    #[serde(rename = "type")]
    pub kind: String,
    /// Render a dismiss button
    pub close: bool,
}

impl Default for AlertSettings {
    fn default() -> Self {
        Self {
            kind: "warning".to_string(),
            close: true,
        }
    }
}

/// Label and badge defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelSettings {
    /// Label variant
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for LabelSettings {
    fn default() -> Self {
        Self {
            kind: "default".to_string(),
        }
    }
}

/// Tooltip defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSettings {
    /// Wrapping tag
    pub tag: String,
    /// Placement
    pub placement: String,
    /// Value of `data-toggle`
    pub toggle: String,
}

impl Default for TooltipSettings {
    fn default() -> Self {
        Self {
            tag: "span".to_string(),
            placement: "right".to_string(),
            toggle: "tooltip".to_string(),
        }
    }
}

/// Progress bar defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressSettings {
    /// Bar variant
    #[serde(rename = "type")]
    pub kind: String,
}

impl Default for ProgressSettings {
    fn default() -> Self {
        Self {
            kind: "primary".to_string(),
        }
    }
}

/// Complete helper configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Replace `i:name` tokens with icons
    pub easy_icon: bool,

    /// How boolean attributes are written
    pub attribute_style: AttributeStyle,

    /// Button settings
    pub buttons: ButtonSettings,

    /// Form settings
    pub form: FormSettings,

    /// Card settings
    pub card: AccordionSettings,

    /// Panel settings
    pub panel: AccordionSettings,

    /// Navbar settings
    pub navbar: NavbarSettings,

    /// Alert settings
    pub alert: AlertSettings,

    /// Label settings
    pub label: LabelSettings,

    /// Tooltip settings
    pub tooltip: TooltipSettings,

    /// Progress bar settings
    pub progress: ProgressSettings,

    /// Template overrides per helper (`html`, `card`, `panel`, `modal`, ...)
    pub templates: HashMap<String, HashMap<String, String>>,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            easy_icon: true,
            attribute_style: AttributeStyle::Full,
            buttons: ButtonSettings::default(),
            form: FormSettings::default(),
            card: AccordionSettings::default(),
            panel: AccordionSettings::default(),
            navbar: NavbarSettings::default(),
            alert: AlertSettings::default(),
            label: LabelSettings::default(),
            tooltip: TooltipSettings::default(),
            progress: ProgressSettings::default(),
            templates: HashMap::new(),
        }
    }
}

impl BootstrapConfig {
    /// Load configuration for a specific service
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - A configuration file cannot be read or parsed
    /// - Configuration values fail type conversion
    pub fn load_for_service(service_name: &str) -> anyhow::Result<Self> {
        let mut figment = Figment::new()
            // 5. Start with defaults (lowest priority)
            .merge(Toml::string(&toml::to_string(&Self::default())?));

        // 4. System config: /etc/acton-bootstrap/{service_name}/config.toml
        let system_config = PathBuf::from("/etc/acton-bootstrap")
            .join(service_name)
            .join("config.toml");
        if system_config.exists() {
            figment = figment.merge(Toml::file(&system_config));
        }

        // 3. User config: ~/.config/acton-bootstrap/{service_name}/config.toml
        let user_config = Self::recommended_path(service_name);
        if user_config.exists() {
            figment = figment.merge(Toml::file(&user_config));
        }

        // 2. Local config: ./bootstrap.toml
        let local_config = PathBuf::from("./bootstrap.toml");
        if local_config.exists() {
            figment = figment.merge(Toml::file(&local_config));
        }

        // 1. Environment variables (highest priority, double underscore for nesting)
        figment = figment.merge(Env::prefixed("BOOTSTRAP_").split("__").lowercase(true));

        let config = figment.extract()?;
        tracing::debug!(service = service_name, "loaded bootstrap configuration");
        Ok(config)
    }

    /// Load configuration from a specific file
    ///
    /// A missing file leaves the defaults in place.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML syntax
    /// - Configuration values fail type conversion
    pub fn load_from(path: &str) -> anyhow::Result<Self> {
        let config = Figment::new()
            .merge(Toml::string(&toml::to_string(&Self::default())?))
            .merge(Toml::file(path))
            .merge(Env::prefixed("BOOTSTRAP_").split("__").lowercase(true))
            .extract()?;

        Ok(config)
    }

    /// Get the recommended XDG config path for a service
    #[must_use]
    pub fn recommended_path(service_name: &str) -> PathBuf {
        dirs::config_dir().map_or_else(
            || PathBuf::from("./bootstrap.toml"),
            |config_dir| {
                config_dir
                    .join("acton-bootstrap")
                    .join(service_name)
                    .join("config.toml")
            },
        )
    }

    /// Template overrides configured for `helper`
    pub fn templates_for(&self, helper: &str) -> impl Iterator<Item = (&str, &str)> {
        self.templates
            .get(helper)
            .into_iter()
            .flatten()
            .map(|(name, template)| (name.as_str(), template.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = BootstrapConfig::default();
        assert!(config.easy_icon);
        assert_eq!(config.buttons.kind, "default");
        assert_eq!(config.form.columns, ColumnSettings { label: 2, input: 10, error: 0 });
        assert!(!config.card.collapsible);
        assert!(config.navbar.auto_active_link);
        assert_eq!(config.alert.kind, "warning");
        assert_eq!(config.tooltip.placement, "right");
    }

    #[test]
    fn test_recommended_path() {
        let path = BootstrapConfig::recommended_path("test-app");
        let path = path.to_string_lossy();
        assert!(path.contains("test-app") || path.ends_with("bootstrap.toml"));
        assert!(path.ends_with(".toml"));
    }

    #[test]
    fn test_load_from_nonexistent_file() {
        let config = BootstrapConfig::load_from("/nonexistent/path/bootstrap.toml").unwrap();
        assert_eq!(config.form.columns.label, 2);
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
easy_icon = false

[buttons]
type = "secondary"

[form.columns]
label = 3
input = 9

[panel]
collapsible = true

[templates.html]
badge = '<span class="badge badge-pill{{{{attrs.class}}}}"{{{{attrs}}}}>{{{{content}}}}</span>'
"#
        )
        .unwrap();

        let config = BootstrapConfig::load_from(file.path().to_str().unwrap()).unwrap();
        assert!(!config.easy_icon);
        assert_eq!(config.buttons.kind, "secondary");
        assert_eq!(config.form.columns.label, 3);
        assert_eq!(config.form.columns.input, 9);
        assert!(config.panel.collapsible);
        assert!(!config.card.collapsible);

        let overrides: Vec<_> = config.templates_for("html").collect();
        assert_eq!(overrides.len(), 1);
        assert_eq!(overrides[0].0, "badge");
        assert!(overrides[0].1.contains("badge-pill{{attrs.class}}"));
        assert_eq!(config.templates_for("card").count(), 0);
    }
}
