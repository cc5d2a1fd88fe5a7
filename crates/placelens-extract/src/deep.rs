//! Generic deep field search over untyped JSON.
//!
//! The embedded application-state blob has no stable schema, so harvesting
//! works by key name: walk the whole tree and collect string values reachable
//! under any key the caller's predicate accepts. Traversal and harvesting
//! policy are decoupled — the predicate decides which keys matter, the walk
//! decides how values under a matching key turn into strings.

use std::collections::HashSet;

use serde_json::Value;

/// When a matching key holds an object (or an array of objects), these
/// sub-keys are probed for a usable display string.
const NAME_LIKE_SUBKEYS: [&str; 3] = ["name", "keyword", "text"];

/// Hard recursion bound. Real payloads nest far shallower; this guards
/// against degenerate or adversarial structures.
const MAX_DEPTH: usize = 64;

/// Collect distinct trimmed strings reachable under keys accepted by
/// `matches_key` (case-insensitive), depth-first, stopping after `limit`
/// values.
///
/// A matching key's value is harvested as:
/// - string → taken directly;
/// - array → each string element taken, each object element probed for a
///   name-like sub-key;
/// - object → probed for a name-like sub-key.
///
/// Traversal continues into every value's children whether or not the value
/// was harvested, so nested harvestable structures inside an already
/// harvested array are still found.
pub fn collect_strings<F>(root: &Value, matches_key: F, limit: usize) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut out = Vec::new();
    let mut seen = HashSet::new();
    walk(root, &matches_key, limit, 0, &mut out, &mut seen);
    out
}

/// Collect the first string reachable under an accepted key, or `None`.
pub fn find_first_string<F>(root: &Value, matches_key: F) -> Option<String>
where
    F: Fn(&str) -> bool,
{
    collect_strings(root, matches_key, 1).into_iter().next()
}

/// Build a predicate matching any of the given key aliases, ignoring case.
#[must_use]
pub fn key_alias_matcher(aliases: &'static [&'static str]) -> impl Fn(&str) -> bool {
    move |key: &str| aliases.iter().any(|a| key.eq_ignore_ascii_case(a))
}

fn walk<F>(
    node: &Value,
    matches_key: &F,
    limit: usize,
    depth: usize,
    out: &mut Vec<String>,
    seen: &mut HashSet<String>,
) where
    F: Fn(&str) -> bool,
{
    if out.len() >= limit || depth >= MAX_DEPTH {
        return;
    }

    match node {
        Value::Array(items) => {
            for item in items {
                if out.len() >= limit {
                    return;
                }
                walk(item, matches_key, limit, depth + 1, out, seen);
            }
        }
        Value::Object(map) => {
            for (key, value) in map {
                if out.len() >= limit {
                    return;
                }
                if matches_key(key) {
                    harvest(value, limit, out, seen);
                }
                walk(value, matches_key, limit, depth + 1, out, seen);
            }
        }
        _ => {}
    }
}

/// Turn the value under a matching key into zero or more harvested strings.
fn harvest(value: &Value, limit: usize, out: &mut Vec<String>, seen: &mut HashSet<String>) {
    match value {
        Value::String(s) => push_trimmed(s, limit, out, seen),
        Value::Array(items) => {
            for item in items {
                if out.len() >= limit {
                    return;
                }
                match item {
                    Value::String(s) => push_trimmed(s, limit, out, seen),
                    Value::Object(_) => harvest_name_like(item, limit, out, seen),
                    _ => {}
                }
            }
        }
        Value::Object(_) => harvest_name_like(value, limit, out, seen),
        _ => {}
    }
}

fn harvest_name_like(obj: &Value, limit: usize, out: &mut Vec<String>, seen: &mut HashSet<String>) {
    for subkey in NAME_LIKE_SUBKEYS {
        if let Some(s) = obj.get(subkey).and_then(Value::as_str) {
            push_trimmed(s, limit, out, seen);
            return;
        }
    }
}

fn push_trimmed(raw: &str, limit: usize, out: &mut Vec<String>, seen: &mut HashSet<String>) {
    if out.len() >= limit {
        return;
    }
    let trimmed = raw.trim();
    if trimmed.is_empty() || seen.contains(trimmed) {
        return;
    }
    seen.insert(trimmed.to_string());
    out.push(trimmed.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tags_matcher() -> impl Fn(&str) -> bool {
        key_alias_matcher(&["tag", "tags"])
    }

    #[test]
    fn collects_string_and_array_values() {
        let root = json!({
            "a": { "tags": ["coffee", "brunch"] },
            "b": { "tag": "dessert" }
        });
        let got = collect_strings(&root, tags_matcher(), 20);
        assert_eq!(got, vec!["coffee", "brunch", "dessert"]);
    }

    #[test]
    fn object_values_are_probed_for_name_like_subkeys() {
        let root = json!({
            "tags": [{ "name": "roastery" }, { "text": "hand drip" }, { "other": "ignored" }]
        });
        let got = collect_strings(&root, tags_matcher(), 20);
        assert_eq!(got, vec!["roastery", "hand drip"]);
    }

    #[test]
    fn duplicates_are_suppressed_after_trimming() {
        let root = json!({
            "x": { "tag": " coffee " },
            "y": { "tags": ["coffee", "coffee"] }
        });
        let got = collect_strings(&root, tags_matcher(), 20);
        assert_eq!(got, vec!["coffee"]);
    }

    #[test]
    fn empty_strings_are_discarded() {
        let root = json!({ "tags": ["", "   ", "ok"] });
        assert_eq!(collect_strings(&root, tags_matcher(), 20), vec!["ok"]);
    }

    #[test]
    fn limit_bounds_the_result() {
        let root = json!({ "tags": ["a", "b", "c", "d", "e"] });
        let got = collect_strings(&root, tags_matcher(), 3);
        assert_eq!(got, vec!["a", "b", "c"]);
    }

    #[test]
    fn no_matching_keys_yields_empty() {
        let root = json!({ "title": "x", "nested": { "body": ["y"] } });
        assert!(collect_strings(&root, tags_matcher(), 20).is_empty());
    }

    #[test]
    fn traversal_descends_into_harvested_arrays() {
        // The outer `tags` array is harvested AND walked: the object element
        // contributes its name-like subkey via harvesting, and its own inner
        // `tags` key is still found by traversal.
        let root = json!({
            "tags": [
                "outer",
                { "name": "middle", "tags": ["inner"] }
            ]
        });
        let got = collect_strings(&root, tags_matcher(), 20);
        assert_eq!(got, vec!["outer", "middle", "inner"]);
    }

    #[test]
    fn key_match_is_case_insensitive() {
        let root = json!({ "TAGS": ["shout"] });
        assert_eq!(collect_strings(&root, tags_matcher(), 20), vec!["shout"]);
    }

    #[test]
    fn depth_cap_terminates_on_degenerate_nesting() {
        let mut node = json!({ "tags": ["deep"] });
        for _ in 0..200 {
            node = json!({ "wrap": node });
        }
        // Nothing reachable within the cap; must return (empty) rather than
        // blow the stack.
        assert!(collect_strings(&node, tags_matcher(), 20).is_empty());
    }

    #[test]
    fn find_first_string_returns_earliest_hit() {
        let root = json!({ "a": { "tag": "first" }, "b": { "tag": "second" } });
        assert_eq!(find_first_string(&root, tags_matcher()), Some("first".to_string()));
    }

    #[test]
    fn find_first_string_none_when_absent() {
        let root = json!({ "a": 1 });
        assert_eq!(find_first_string(&root, tags_matcher()), None);
    }
}
