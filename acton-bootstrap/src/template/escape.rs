//! HTML escaping primitives

/// Escape a string for use in HTML content
#[must_use]
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

/// Escape a string for use in HTML attribute values
#[must_use]
pub fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
        assert_eq!(escape_html("it's \"x\""), "it&#039;s &quot;x&quot;");
    }

    #[test]
    fn test_escape_attr() {
        assert_eq!(escape_attr("\"test\""), "&quot;test&quot;");
        assert_eq!(escape_attr("it's"), "it's");
    }
}
