//! acton-bootstrap: Bootstrap markup helpers for server-side views
//!
//! Helpers render Bootstrap components as HTML strings. Composite widgets
//! (cards, panels, modals, navbars, tab sets) are streamed: the caller opens
//! a part, writes its own content, then opens the next part or ends the
//! widget, and the helper emits whatever closing markup is still pending.
//!
//! # Design Principles
//!
//! 1. **Templates over code**: every element comes from a named string template that can be overridden
//! 2. **Stacked state**: nesting is tracked with a frame stack, never with globals
//! 3. **Host agnostic**: URLs, translations and flash messages come from small traits
//!
//! # Quick Start
//!
//! ```rust
//! use acton_bootstrap::prelude::*;
//!
//! let view = View::default();
//! let mut panel = view.panel();
//!
//! let mut html = panel.create("Profile", Options::new())?;
//! html.push_str("Name: Ada");
//! html.push_str(&panel.footer("Saved", Options::new())?);
//! html.push_str(&panel.end(Content::Empty, Options::new())?);
//!
//! assert!(html.contains(r#"<div class="panel-footer">Saved</div>"#));
//! # Ok::<(), BootstrapError>(())
//! ```
//!
//! # Modules
//!
//! - [`state`] - frame stack with per-kind defaults
//! - [`section`] - open/close sequencing of named parts
//! - [`template`] - string templates, attribute and class utilities
//! - [`helpers`] - HTML, card/panel, modal, navbar, tab, breadcrumb, paginator and flash helpers
//! - [`forms`] - form helper, field builder and validation errors
//! - [`view`] - render context creating the helpers
//! - [`config`] - layered configuration
//! - [`observability`] - tracing setup
//! - [`testing`] - markup assertions for tests of rendered pages

#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod forms;
pub mod helpers;
pub mod host;
pub mod observability;
pub mod section;
pub mod state;
pub mod template;
pub mod testing;
pub mod view;

pub mod prelude {
    //! Convenience re-exports for common types and traits
    //!
    //! # Examples
    //!
    //! ```rust
    //! use acton_bootstrap::prelude::*;
    //! ```

    // Render context
    pub use crate::view::View;

    // Helpers
    pub use crate::helpers::{
        AccordionHelper, Brand, BreadcrumbsHelper, CardHelper, CardStyle, Content, Crumb,
        FlashHelper, Flavor, HtmlHelper, MenuItem, ModalHelper, NavbarHelper, PageParams,
        PaginatorHelper, PanelHelper, PanelStyle, ProgressBar, TabHelper,
    };

    // Form handling
    pub use crate::forms::{
        Addon, Column, FieldBuilder, FieldError, FieldKind, FormBuilder, FormField, FormHelper,
        FormRenderer, InputType, SelectOption, ValidationErrors,
    };

    // Templates and options
    pub use crate::template::{Layout, Options, StringTemplate, TemplateVars};

    // Host services
    pub use crate::host::{FlashStore, MemoryFlashStore, StaticUrls, Translator, UrlResolver};

    // Configuration
    pub use crate::config::BootstrapConfig;

    // Error types
    pub use crate::error::{BootstrapError, Result};

    // Convenience for option values
    pub use serde_json::json;
}
