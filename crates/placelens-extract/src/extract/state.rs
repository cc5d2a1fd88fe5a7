//! Strategy 3: embedded application-state blob.
//!
//! Naver Place pages hydrate their client from a `__NEXT_DATA__` script
//! blob. Its internal shape is unversioned and drifts, so fields are
//! harvested by deep key search rather than typed deserialization.

use regex::Regex;
use serde_json::Value;

use crate::deep::{collect_strings, find_first_string, key_alias_matcher};
use crate::types::PartialExtraction;

const KEYWORD_KEYS: &[&str] = &["keywords", "keyword", "tag", "tags", "hash", "hashtags"];
const DESCRIPTION_KEYS: &[&str] = &[
    "description",
    "introduce",
    "introduction",
    "summary",
    "content",
];
const IMAGE_KEYS: &[&str] = &[
    "image",
    "images",
    "thumbnail",
    "thumbnails",
    "photo",
    "photos",
    "url",
];

/// Generous harvest ceilings: the resolver caps again for output, these only
/// bound traversal cost on large payloads.
const KEYWORD_HARVEST_LIMIT: usize = 20;
const IMAGE_HARVEST_LIMIT: usize = 30;

/// Parse the page's `__NEXT_DATA__` blob, if present and well-formed.
#[must_use]
pub fn parse_app_state(html: &str) -> Option<Value> {
    let script_re = Regex::new(
        r#"(?is)<script[^>]+id\s*=\s*["']__NEXT_DATA__["'][^>]*>(.*?)</script>"#,
    )
    .expect("valid regex");

    let raw = script_re.captures(html)?.get(1)?.as_str();
    match serde_json::from_str(raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::debug!(%error, "embedded app-state blob failed to parse");
            None
        }
    }
}

/// Extract the app-state partial from the HTML.
///
/// Keywords and the description come straight from the deep search; image
/// candidates are additionally filtered to absolute web URLs, since the
/// state blob holds plenty of URL-shaped strings that are not images and
/// plenty of image identifiers that are not URLs.
#[must_use]
pub fn app_state_extraction(html: &str) -> PartialExtraction {
    let Some(state) = parse_app_state(html) else {
        return PartialExtraction::default();
    };

    let keywords = collect_strings(&state, key_alias_matcher(KEYWORD_KEYS), KEYWORD_HARVEST_LIMIT);
    let description = find_first_string(&state, key_alias_matcher(DESCRIPTION_KEYS));
    let image = collect_strings(&state, key_alias_matcher(IMAGE_KEYS), IMAGE_HARVEST_LIMIT)
        .into_iter()
        .find(|candidate| candidate.starts_with("http"));

    PartialExtraction {
        name: None,
        description,
        image,
        keywords,
    }
}
