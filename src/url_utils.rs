//! URL Utility Functions
//!
//! Assembles request targets from a base URL, ordered path segments and an
//! insertion-ordered parameter list, and resolves relative hyperlinks
//! against a page URL. Assembly is pure string work: values are inserted
//! verbatim (callers pre-encode) and malformed input produces malformed
//! output, never an error.

use url::Url;

/// Build a request target from its parts.
///
/// The base is emitted verbatim. Segments are joined with `/` and prefixed
/// with `/` only when the base does not already end with one, so a trailing
/// slash on the base never doubles. Parameters become `?k=v&k2=v2` in
/// insertion order; with no parameters nothing is appended.
///
/// # Example
///
/// ```rust
/// use pagesieve::url_utils::build;
///
/// let url = build(
///     "https://www.google.com/",
///     &["search".to_string()],
///     &[("q".to_string(), "cute+kittens".to_string())],
/// );
/// assert_eq!(url, "https://www.google.com/search?q=cute+kittens");
/// ```
#[must_use]
pub fn build(base: &str, segments: &[String], params: &[(String, String)]) -> String {
    let mut target = String::from(base);
    target.push_str(&joined_segments(base, segments));
    target.push_str(&joined_params(params));
    target
}

fn joined_segments(base: &str, segments: &[String]) -> String {
    if segments.is_empty() {
        return String::new();
    }
    let path = segments.join("/");
    if base.ends_with('/') {
        path
    } else {
        format!("/{path}")
    }
}

fn joined_params(params: &[(String, String)]) -> String {
    if params.is_empty() {
        return String::new();
    }
    let pairs: Vec<String> = params.iter().map(|(k, v)| format!("{k}={v}")).collect();
    format!("?{}", pairs.join("&"))
}

/// Resolve a hyperlink reference against the page it was found on.
///
/// Absolute references are kept unchanged; relative ones are joined onto
/// `page_url`. Returns `None` for empty or fragment-only references and for
/// references that cannot be resolved.
#[must_use]
pub fn absolutize(href: &str, page_url: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }
    if let Ok(absolute) = Url::parse(href) {
        return Some(absolute.to_string());
    }
    let base = Url::parse(page_url).ok()?;
    base.join(href).ok().map(|resolved| resolved.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_build_segment_and_param() {
        let url = build("https://x.com", &strings(&["search"]), &pairs(&[("q", "a+b")]));
        assert_eq!(url, "https://x.com/search?q=a+b");
    }

    #[test]
    fn test_build_trailing_slash_base_not_doubled() {
        let url = build(
            "https://www.google.com/",
            &strings(&["search"]),
            &pairs(&[("q", "cute+kittens")]),
        );
        assert_eq!(url, "https://www.google.com/search?q=cute+kittens");
    }

    #[test]
    fn test_build_bare_base_unchanged() {
        assert_eq!(build("https://x.com/", &[], &[]), "https://x.com/");
        assert_eq!(build("https://x.com", &[], &[]), "https://x.com");
    }

    #[test]
    fn test_build_params_keep_insertion_order() {
        let url = build("https://x.com", &[], &pairs(&[("a", "1"), ("b", "2")]));
        assert_eq!(url, "https://x.com?a=1&b=2");
    }

    #[test]
    fn test_build_multiple_segments() {
        let url = build("https://x.com", &strings(&["docs", "api", "v2"]), &[]);
        assert_eq!(url, "https://x.com/docs/api/v2");
    }

    #[test]
    fn test_build_values_verbatim() {
        // No URL-encoding: callers pre-encode.
        let url = build("https://x.com", &[], &pairs(&[("q", "a b&c")]));
        assert_eq!(url, "https://x.com?q=a b&c");
    }

    #[test]
    fn test_absolutize_relative() {
        let resolved = absolutize("/domains/example", "https://www.iana.org/");
        assert_eq!(resolved.as_deref(), Some("https://www.iana.org/domains/example"));
    }

    #[test]
    fn test_absolutize_keeps_absolute() {
        let resolved = absolutize("https://example.org/a", "https://www.iana.org/");
        assert_eq!(resolved.as_deref(), Some("https://example.org/a"));
    }

    #[test]
    fn test_absolutize_skips_empty_and_fragment() {
        assert_eq!(absolutize("", "https://x.com"), None);
        assert_eq!(absolutize("#top", "https://x.com"), None);
    }
}
