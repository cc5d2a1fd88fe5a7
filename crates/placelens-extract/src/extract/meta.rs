//! Strategy 1: meta-tag scraping.
//!
//! Open Graph tags are the "always there" insurance source: even a mostly
//! client-rendered listing page ships `og:title` / `og:description` /
//! `og:image` server-side for link previews.

use regex::Regex;

use crate::types::PartialExtraction;

/// Return the `content` attribute of the meta tag whose `property` or `name`
/// attribute equals `key` (case-insensitive). Handles either attribute order.
#[must_use]
pub fn pick_meta(html: &str, key: &str) -> Option<String> {
    let escaped = regex::escape(key);

    // key-first: <meta property="og:title" ... content="...">
    let key_first = Regex::new(&format!(
        r#"(?is)<meta\b[^>]*(?:property|name)\s*=\s*["']{escaped}["'][^>]*\bcontent\s*=\s*["']([^"']+)"#
    ))
    .expect("valid regex");
    // content-first: <meta content="..." ... property="og:title">
    let content_first = Regex::new(&format!(
        r#"(?is)<meta\b[^>]*\bcontent\s*=\s*["']([^"']+)["'][^>]*(?:property|name)\s*=\s*["']{escaped}["']"#
    ))
    .expect("valid regex");

    key_first
        .captures(html)
        .or_else(|| content_first.captures(html))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|s| !s.trim().is_empty())
}

/// Remove markup and normalize whitespace: nested tags become spaces, runs of
/// whitespace collapse to one space, ends are trimmed.
#[must_use]
pub fn strip_tags(s: &str) -> String {
    let tag_re = Regex::new(r"<[^>]*>").expect("valid regex");
    let ws_re = Regex::new(r"\s+").expect("valid regex");
    let without_tags = tag_re.replace_all(s, " ");
    ws_re.replace_all(&without_tags, " ").trim().to_string()
}

/// Extract the meta-tag partial: Open Graph title/description/image plus the
/// generic comma-separated `keywords` tag.
#[must_use]
pub fn meta_extraction(html: &str) -> PartialExtraction {
    let keywords = pick_meta(html, "keywords")
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();

    PartialExtraction {
        name: pick_meta(html, "og:title").map(|s| strip_tags(&s)),
        description: pick_meta(html, "og:description").map(|s| strip_tags(&s)),
        image: pick_meta(html, "og:image"),
        keywords,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_property_meta_content() {
        let html = r#"<meta property="og:title" content="Sample Cafe">"#;
        assert_eq!(pick_meta(html, "og:title").as_deref(), Some("Sample Cafe"));
    }

    #[test]
    fn picks_name_meta_content() {
        let html = r#"<meta name="keywords" content="coffee, brunch">"#;
        assert_eq!(pick_meta(html, "keywords").as_deref(), Some("coffee, brunch"));
    }

    #[test]
    fn handles_content_before_property() {
        let html = r#"<meta content="Sample Cafe" property="og:title">"#;
        assert_eq!(pick_meta(html, "og:title").as_deref(), Some("Sample Cafe"));
    }

    #[test]
    fn key_match_is_case_insensitive() {
        let html = r#"<meta property="OG:Title" content="Sample Cafe">"#;
        assert_eq!(pick_meta(html, "og:title").as_deref(), Some("Sample Cafe"));
    }

    #[test]
    fn missing_tag_yields_none() {
        assert_eq!(pick_meta("<html></html>", "og:title"), None);
    }

    #[test]
    fn key_is_regex_escaped() {
        // "og:title" must not match "ogXtitle" through an unescaped dot-like key.
        let html = r#"<meta property="ogstitle" content="nope">"#;
        assert_eq!(pick_meta(html, "og.title"), None);
    }

    #[test]
    fn strip_tags_collapses_markup_and_whitespace() {
        assert_eq!(strip_tags("a <b>bold</b>\n\n  claim"), "a bold claim");
    }

    #[test]
    fn strip_tags_on_plain_text_trims_only() {
        assert_eq!(strip_tags("  plain  "), "plain");
    }

    #[test]
    fn meta_extraction_splits_and_trims_keywords() {
        let html = r#"
            <meta property="og:title" content="Sample Cafe">
            <meta name="keywords" content=" coffee , brunch ,, dessert ">
        "#;
        let partial = meta_extraction(html);
        assert_eq!(partial.name.as_deref(), Some("Sample Cafe"));
        assert_eq!(partial.keywords, vec!["coffee", "brunch", "dessert"]);
    }

    #[test]
    fn meta_extraction_of_empty_page_is_empty() {
        assert!(meta_extraction("<html></html>").is_empty());
    }
}
