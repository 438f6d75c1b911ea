//! `i:name` icon shorthand
//!
//! Titles, button captions and link texts may contain `i:icon-name` tokens.
//! When easy-icon processing is on, each token delimited by the start of the
//! text, whitespace or `>` on the left and by whitespace, `<` or the end of
//! the text on the right is replaced with rendered icon markup.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static EASY_ICON: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(^|[>\s]\s*)i:([a-zA-Z0-9\-_]+)(\s*[\s<]|$)").expect("Invalid regex")
});

/// Replace `i:name` tokens with the output of `renderer`
///
/// Returns the converted text and whether any token was replaced. When
/// `enabled` is false the text is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use acton_bootstrap::template::easy_icon;
///
/// let render = |name: &str| format!("<i class=\"fa fa-{name}\"></i>");
/// let (text, converted) = easy_icon("i:home Home", true, render);
/// assert_eq!(text, "<i class=\"fa fa-home\"></i> Home");
/// assert!(converted);
///
/// let (text, converted) = easy_icon("mail:home", true, render);
/// assert_eq!(text, "mail:home");
/// assert!(!converted);
/// ```
pub fn easy_icon<F>(text: &str, enabled: bool, renderer: F) -> (String, bool)
where
    F: Fn(&str) -> String,
{
    if !enabled {
        return (text.to_string(), false);
    }

    let mut converted = false;
    let out = EASY_ICON.replace_all(text, |caps: &Captures<'_>| {
        converted = true;
        format!("{}{}{}", &caps[1], renderer(&caps[2]), &caps[3])
    });

    match out {
        Cow::Borrowed(s) => (s.to_string(), false),
        Cow::Owned(s) => (s, converted),
    }
}
