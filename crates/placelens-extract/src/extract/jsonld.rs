//! Strategy 2: schema.org JSON-LD extraction.

use regex::Regex;
use serde_json::Value;

use crate::extract::meta::strip_tags;
use crate::types::PartialExtraction;

/// Parse every `<script type="application/ld+json">` block on the page.
///
/// Each block yields its own parse outcome; a malformed block never aborts
/// the others. Callers keep the successes and may log the failures.
#[must_use]
pub fn parse_linked_data_blocks(html: &str) -> Vec<Result<Value, serde_json::Error>> {
    let script_re = Regex::new(
        r#"(?is)<script[^>]+type\s*=\s*["']application/ld\+json["'][^>]*>(.*?)</script>"#,
    )
    .expect("valid regex");

    script_re
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| serde_json::from_str(m.as_str()))
        .collect()
}

/// Extract the linked-data partial: name, description, and image from the
/// page's JSON-LD blocks, first hit per field.
#[must_use]
pub fn linked_data_extraction(html: &str) -> PartialExtraction {
    let mut candidates: Vec<Value> = Vec::new();

    for (idx, outcome) in parse_linked_data_blocks(html).into_iter().enumerate() {
        match outcome {
            Ok(value) => flatten_block(value, &mut candidates),
            Err(error) => {
                tracing::debug!(block = idx, %error, "skipping malformed JSON-LD block");
            }
        }
    }

    let mut partial = PartialExtraction::default();
    for item in &candidates {
        if partial.name.is_none() {
            partial.name = item
                .get("name")
                .and_then(Value::as_str)
                .map(|s| strip_tags(s))
                .filter(|s| !s.is_empty());
        }
        if partial.description.is_none() {
            partial.description = item
                .get("description")
                .and_then(Value::as_str)
                .map(|s| strip_tags(s))
                .filter(|s| !s.is_empty());
        }
        if partial.image.is_none() {
            partial.image = image_of(item);
        }
    }
    partial
}

/// Accept top-level object, array, or `@graph` container: many sites wrap
/// structured data inside `{"@graph": [...]}` at the top level.
fn flatten_block(value: Value, out: &mut Vec<Value>) {
    match value {
        Value::Array(items) => out.extend(items),
        Value::Object(_) => {
            if let Some(graph) = value.get("@graph").and_then(Value::as_array) {
                out.extend(graph.iter().cloned());
            }
            out.push(value);
        }
        _ => {}
    }
}

/// The `image` property may be a plain URL string, an `ImageObject` with a
/// `url` field, or an array of either.
fn image_of(item: &Value) -> Option<String> {
    let node = item.get("image")?;
    let single = |v: &Value| -> Option<String> {
        match v {
            Value::String(s) => Some(s.clone()),
            Value::Object(_) => v.get("url").and_then(Value::as_str).map(ToOwned::to_owned),
            _ => None,
        }
    };
    match node {
        Value::Array(items) => items.iter().find_map(single),
        other => single(other),
    }
    .filter(|s| !s.trim().is_empty())
}
