//! Render context
//!
//! A [`View`] bundles the configuration and the host services for one page
//! render. Helpers are created from it and each owns its own template table,
//! frame stack and counters, so nothing is shared between two renders.
//!
//! # Examples
//!
//! ```rust
//! use acton_bootstrap::prelude::*;
//!
//! let view = View::default();
//! let mut card = view.card();
//!
//! let mut html = card.create("Account", Options::new())?;
//! html.push_str("Details");
//! html.push_str(&card.end(Content::Empty, Options::new())?);
//! assert!(html.starts_with(r#"<div class="card card-default">"#));
//! # Ok::<(), acton_bootstrap::error::BootstrapError>(())
//! ```

use std::fmt;
use std::sync::Arc;

use crate::config::BootstrapConfig;
use crate::forms::FormHelper;
use crate::helpers::{
    html, BreadcrumbsHelper, CardHelper, FlashHelper, HtmlHelper, ModalHelper, NavbarHelper,
    PageParams, PaginatorHelper, PanelHelper, TabHelper,
};
use crate::host::{
    FlashStore, IdentityTranslator, MemoryFlashStore, StaticUrls, Translator, UrlResolver,
};
use crate::template::{StringTemplate, TemplateVars};

/// Configuration and host services for one render
#[derive(Clone)]
pub struct View {
    config: Arc<BootstrapConfig>,
    urls: Arc<dyn UrlResolver>,
    translator: Arc<dyn Translator>,
    flash: Arc<dyn FlashStore>,
}

impl fmt::Debug for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("View")
            .field("config", &self.config)
            .field("current_url", &self.urls.current())
            .finish_non_exhaustive()
    }
}

impl Default for View {
    fn default() -> Self {
        Self::new(BootstrapConfig::default())
    }
}

impl View {
    /// Context with static URLs rooted at `/`, no translation and an empty
    /// flash store
    #[must_use]
    pub fn new(config: BootstrapConfig) -> Self {
        Self {
            config: Arc::new(config),
            urls: Arc::new(StaticUrls::new("", "/")),
            translator: Arc::new(IdentityTranslator),
            flash: Arc::new(MemoryFlashStore::new()),
        }
    }

    /// Use `urls` for URL building and active link detection
    #[must_use]
    pub fn with_urls(mut self, urls: impl UrlResolver + 'static) -> Self {
        self.urls = Arc::new(urls);
        self
    }

    /// Use `translator` for default captions
    #[must_use]
    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Arc::new(translator);
        self
    }

    /// Read flash messages from `store`
    #[must_use]
    pub fn with_flash_store(mut self, store: Arc<dyn FlashStore>) -> Self {
        self.flash = store;
        self
    }

    /// Helper configuration
    #[must_use]
    pub fn config(&self) -> &BootstrapConfig {
        &self.config
    }

    /// URL services
    #[must_use]
    pub fn urls(&self) -> &dyn UrlResolver {
        self.urls.as_ref()
    }

    /// Flash storage
    #[must_use]
    pub fn flash_store(&self) -> &dyn FlashStore {
        self.flash.as_ref()
    }

    /// Translate a default caption
    #[must_use]
    pub fn translate(&self, text: &str) -> String {
        self.translator.translate(text)
    }

    /// Icon markup for `name`, used by the `i:name` shorthand
    #[must_use]
    pub fn icon(&self, name: &str) -> String {
        let template = self
            .config
            .templates
            .get("html")
            .and_then(|templates| templates.get("icon"))
            .map_or(html::ICON_TEMPLATE, String::as_str);
        StringTemplate::with_templates([("icon", template)])
            .format("icon", &TemplateVars::new().with("type", name).attrs(""))
            .unwrap_or_default()
    }

    /// Basic markup helper
    #[must_use]
    pub fn html(&self) -> HtmlHelper {
        HtmlHelper::new(self)
    }

    /// Card (Bootstrap 4) helper
    #[must_use]
    pub fn card(&self) -> CardHelper {
        CardHelper::new(self)
    }

    /// Panel (Bootstrap 3) helper
    #[must_use]
    pub fn panel(&self) -> PanelHelper {
        PanelHelper::new(self)
    }

    /// Modal helper
    #[must_use]
    pub fn modal(&self) -> ModalHelper {
        ModalHelper::new(self)
    }

    /// Navbar helper
    #[must_use]
    pub fn navbar(&self) -> NavbarHelper {
        NavbarHelper::new(self)
    }

    /// Tab helper
    #[must_use]
    pub fn tabs(&self) -> TabHelper {
        TabHelper::new(self)
    }

    /// Breadcrumbs helper
    #[must_use]
    pub fn breadcrumbs(&self) -> BreadcrumbsHelper {
        BreadcrumbsHelper::new(self)
    }

    /// Paginator helper for the given page
    #[must_use]
    pub fn paginator(&self, params: PageParams) -> PaginatorHelper {
        PaginatorHelper::new(self, params)
    }

    /// Flash message helper
    #[must_use]
    pub fn flash(&self) -> FlashHelper {
        FlashHelper::new(self)
    }

    /// Form helper
    #[must_use]
    pub fn form(&self) -> FormHelper {
        FormHelper::new(self)
    }
}
