//! Flash messages rendered as alerts
//!
//! Messages are read from the view's [`FlashStore`](crate::host::FlashStore)
//! under `Flash.<key>` as an array of
//! `{"message": ..., "element": "flash/<type>", "params": {...}}` objects and
//! removed once rendered.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{BootstrapError, Result};
use crate::template::{escape_html, Options};
use crate::view::View;

use super::html::HtmlHelper;

/// Elements mapped to an alert type
const ALERT_ELEMENTS: &[&str] = &["info", "error", "success", "warning"];

#[derive(Debug, Deserialize)]
struct FlashMessage {
    message: String,
    #[serde(default)]
    element: String,
    #[serde(default)]
    params: Options,
}

impl FlashMessage {
    /// Alert type for the element, `None` for unknown elements
    fn alert_type(&self) -> Option<&'static str> {
        let name = self.element.rsplit('/').next().unwrap_or_default();
        ALERT_ELEMENTS
            .iter()
            .copied()
            .find(|element| *element == name)
            .map(|element| if element == "error" { "danger" } else { element })
    }
}

/// Flash helper
#[derive(Debug, Clone)]
pub struct FlashHelper {
    view: View,
    html: HtmlHelper,
}

impl FlashHelper {
    /// Helper rendering through the view's alert templates
    #[must_use]
    pub fn new(view: &View) -> Self {
        Self {
            view: view.clone(),
            html: HtmlHelper::new(view),
        }
    }

    /// Render and consume the messages stored under `key`
    ///
    /// Nothing is rendered when the key is absent. `options` are applied to
    /// every alert, message params taking precedence.
    ///
    /// # Errors
    ///
    /// [`BootstrapError::UnexpectedFlashValue`] when the stored value is not
    /// an array.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use acton_bootstrap::host::{FlashStore, MemoryFlashStore};
    /// use acton_bootstrap::prelude::*;
    /// use serde_json::json;
    ///
    /// let store = Arc::new(MemoryFlashStore::new());
    /// store.write("Flash.flash", json!([{"message": "Saved", "element": "flash/success"}]));
    ///
    /// let view = View::default().with_flash_store(store.clone());
    /// let html = view.flash().render("flash", Options::new().with("close", false))?;
    ///
    /// assert_eq!(html, r#"<div class="alert alert-success" role="alert">Saved</div>"#);
    /// assert!(store.read("Flash.flash").is_none());
    /// # Ok::<(), acton_bootstrap::error::BootstrapError>(())
    /// ```
    pub fn render(&self, key: &str, options: Options) -> Result<String> {
        let store_key = format!("Flash.{key}");
        let store = self.view.flash_store();
        let Some(value) = store.read(&store_key) else {
            return Ok(String::new());
        };
        let Value::Array(entries) = value else {
            return Err(BootstrapError::UnexpectedFlashValue {
                key: key.to_string(),
            });
        };

        let mut out = String::new();
        for entry in entries {
            let message: FlashMessage = match serde_json::from_value(entry) {
                Ok(message) => message,
                Err(error) => {
                    tracing::warn!(key = %key, %error, "dropping malformed flash message");
                    continue;
                }
            };
            out.push_str(&self.alert(&message, options.clone())?);
        }
        store.delete(&store_key);
        tracing::debug!(key = %key, "rendered flash messages");
        Ok(out)
    }

    fn alert(&self, message: &FlashMessage, options: Options) -> Result<String> {
        let mut params = message.params.clone().merge_defaults(options);
        if let Some(kind) = message.alert_type() {
            params.insert("type", kind);
        } else {
            tracing::warn!(element = %message.element, "flash element has no alert type");
        }
        let text = if params.take_bool("escape", true) {
            escape_html(&message.message)
        } else {
            message.message.clone()
        };
        self.html.alert(&text, params)
    }
}
