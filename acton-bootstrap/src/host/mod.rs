//! Services provided by the host web framework
//!
//! Helpers never talk to the router, the session or the i18n layer
//! directly. They go through the traits below, which the application wires
//! to its framework. Simple in-memory implementations are provided for
//! tests and static sites.

use std::collections::HashMap;

use parking_lot::Mutex;
use serde_json::Value;

/// URL building and comparison
#[cfg_attr(test, mockall::automock)]
pub trait UrlResolver: Send + Sync {
    /// Build a URL from a route
    fn build(&self, route: &str) -> String;

    /// URL of the page being rendered
    fn current(&self) -> String;

    /// Whether two URLs designate the same page
    fn urls_equivalent(&self, lhs: &str, rhs: &str) -> bool {
        normalize_url(lhs) == normalize_url(rhs)
    }
}

/// Translation of default captions ("Close", "Toggle navigation", ...)
#[cfg_attr(test, mockall::automock)]
pub trait Translator: Send + Sync {
    /// Translate `text`
    fn translate(&self, text: &str) -> String;
}

/// Session storage for flash messages
#[cfg_attr(test, mockall::automock)]
pub trait FlashStore: Send + Sync {
    /// Read the value stored under `key`
    fn read(&self, key: &str) -> Option<Value>;

    /// Remove the value stored under `key`
    fn delete(&self, key: &str);
}

/// Strip scheme, host, query string, fragment and trailing slash
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::host::normalize_url;
///
/// assert_eq!(normalize_url("https://example.com/users/?page=2#top"), "/users");
/// assert_eq!(normalize_url("/"), "/");
/// ```
#[must_use]
pub fn normalize_url(url: &str) -> String {
    let url = url.split('#').next().unwrap_or_default();
    let url = url.split('?').next().unwrap_or_default();
    let path = url.find("://").map_or(url, |scheme_end| {
        let rest = &url[scheme_end + 3..];
        rest.find('/').map_or("/", |path_start| &rest[path_start..])
    });
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

/// Fixed current URL, routes joined to a base path
#[derive(Debug, Clone, Default)]
pub struct StaticUrls {
    base: String,
    current: String,
}

impl StaticUrls {
    /// Resolver rooted at `base` with `current` as the page URL
    #[must_use]
    pub fn new(base: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            base: base.into().trim_end_matches('/').to_string(),
            current: current.into(),
        }
    }
}

impl UrlResolver for StaticUrls {
    fn build(&self, route: &str) -> String {
        if route.contains("://") || route.starts_with('/') || route.starts_with('#') {
            return route.to_string();
        }
        format!("{}/{route}", self.base)
    }

    fn current(&self) -> String {
        self.current.clone()
    }
}

/// Translator returning its input
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str) -> String {
        text.to_string()
    }
}

/// In-memory flash storage
#[derive(Debug, Default)]
pub struct MemoryFlashStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryFlashStore {
    /// Empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `key`
    pub fn write(&self, key: impl Into<String>, value: Value) {
        self.values.lock().insert(key.into(), value);
    }
}

impl FlashStore for MemoryFlashStore {
    fn read(&self, key: &str) -> Option<Value> {
        self.values.lock().get(key).cloned()
    }

    fn delete(&self, key: &str) {
        self.values.lock().remove(key);
    }
}
