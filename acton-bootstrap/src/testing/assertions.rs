//! Markup assertion helpers

use once_cell::sync::Lazy;
use regex::Regex;

static TAG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"<(/?)([a-zA-Z][a-zA-Z0-9]*)[^>]*?(/?)>").expect("Invalid regex")
});

/// Elements without a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// Assert that every element of `html` is closed, innermost first
///
/// # Panics
///
/// Panics on a closing tag that does not match the innermost open element
/// or when elements are left open.
pub fn assert_balanced(html: &str) {
    let mut open: Vec<String> = Vec::new();
    for caps in TAG.captures_iter(html) {
        let name = caps[2].to_ascii_lowercase();
        if VOID_ELEMENTS.contains(&name.as_str()) || !caps[3].is_empty() {
            continue;
        }
        if caps[1].is_empty() {
            open.push(name);
            continue;
        }
        let innermost = open.pop();
        assert_eq!(
            innermost.as_deref(),
            Some(name.as_str()),
            "Unexpected </{name}> in {html}"
        );
    }
    assert!(open.is_empty(), "Unclosed elements {open:?} in {html}");
}

/// Assert that `fragments` appear in `html` in the given order
///
/// # Panics
///
/// Panics when a fragment is missing after the previous one.
pub fn assert_in_order(html: &str, fragments: &[&str]) {
    let mut rest = html;
    for fragment in fragments {
        let Some(index) = rest.find(fragment) else {
            panic!("Expected {fragment:?} after previous fragments in {html}");
        };
        rest = &rest[index + fragment.len()..];
    }
}
