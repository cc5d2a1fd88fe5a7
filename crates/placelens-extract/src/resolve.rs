//! Field resolution: merge strategy outputs into one record.
//!
//! Priority is fixed per field and encodes the policy that explicit user
//! input and richer structured sources outrank generic meta fallbacks:
//!
//! - name:        meta title → linked-data name → `"unknown"`
//! - keywords:    user comma list → app-state harvest → meta keywords → none
//! - description: user text → app-state → linked-data → meta → `"unconfirmed"`
//! - image:       meta → linked-data → app-state (absolute URLs only) → none
//!
//! The resolver never fails; absence of data is a value, not an error.

use std::collections::HashSet;

use crate::extract::Extractions;
use crate::types::{ExtractedRecord, DESCRIPTION_SENTINEL, NAME_SENTINEL};

/// Description length clamp applied before downstream template substitution.
const DESCRIPTION_MAX_CHARS: usize = 2500;

/// Optional caller-supplied overrides from the request body.
#[derive(Debug, Clone, Default)]
pub struct UserInput {
    /// Comma-separated keyword list, wins over every extracted source.
    pub keywords: Option<String>,
    /// Free-text description, wins over every extracted source.
    pub description: Option<String>,
}

/// Merge the three strategy outputs plus user overrides into a fully
/// populated [`ExtractedRecord`].
#[must_use]
pub fn resolve_fields(
    user: &UserInput,
    extractions: &Extractions,
    keyword_cap: usize,
) -> ExtractedRecord {
    let name = first_non_empty(&[
        extractions.meta.name.as_deref(),
        extractions.linked_data.name.as_deref(),
    ])
    .unwrap_or_else(|| NAME_SENTINEL.to_string());

    let keywords = resolve_keywords(user, extractions, keyword_cap);

    let description = first_non_empty(&[
        user.description.as_deref(),
        extractions.app_state.description.as_deref(),
        extractions.linked_data.description.as_deref(),
        extractions.meta.description.as_deref(),
    ])
    .map_or_else(|| DESCRIPTION_SENTINEL.to_string(), |d| clamp_text(&d, DESCRIPTION_MAX_CHARS));

    // Only absolute web URLs are acceptable; a relative meta image must not
    // shadow a usable lower-priority candidate.
    let image = [
        extractions.meta.image.as_deref(),
        extractions.linked_data.image.as_deref(),
        extractions.app_state.image.as_deref(),
    ]
    .iter()
    .filter_map(|c| c.map(str::trim))
    .find(|url| url.starts_with("http"))
    .map(ToOwned::to_owned)
    .unwrap_or_default();

    ExtractedRecord {
        name,
        keywords,
        description,
        image,
    }
}

fn resolve_keywords(user: &UserInput, extractions: &Extractions, cap: usize) -> Vec<String> {
    let from_user: Vec<String> = user
        .keywords
        .as_deref()
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(ToOwned::to_owned)
                .collect()
        })
        .unwrap_or_default();

    let source = if from_user.is_empty() {
        if extractions.app_state.keywords.is_empty() {
            &extractions.meta.keywords
        } else {
            &extractions.app_state.keywords
        }
    } else {
        &from_user
    };

    dedup_capped(source, cap)
}

/// First candidate that is non-empty after trimming.
fn first_non_empty(candidates: &[Option<&str>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|c| c.map(str::trim))
        .find(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

fn dedup_capped(values: &[String], cap: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .filter(|v| seen.insert(v.to_string()))
        .map(ToOwned::to_owned)
        .take(cap)
        .collect()
}

/// Clamp to `max_chars` characters, appending an ellipsis when truncated.
fn clamp_text(text: &str, max_chars: usize) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= max_chars {
        return trimmed.to_string();
    }
    let mut clamped: String = trimmed.chars().take(max_chars).collect();
    clamped.push('…');
    clamped
}
