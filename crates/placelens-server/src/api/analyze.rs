//! POST /api/v1/analyze/{free,paid} — the analysis orchestration.
//!
//! Per request: validate credential and URL (the only hard-error stage),
//! fetch the listing with variant fallback, run the extractors, resolve
//! fields, fill the tier's prompt, call the report API. Everything past
//! validation degrades into a success-shaped JSON payload: a consumer UI
//! must always receive parseable extraction data, even when the page or the
//! model is unavailable.

use axum::extract::{rejection::JsonRejection, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;

use placelens_extract::{
    extract::run_extractors, normalize_listing_url, resolve_fields, ExtractedRecord,
    ListingReference, UserInput,
};
use placelens_report::{ReportVars, Tier};

use super::{ApiError, AppState};

#[derive(Debug, Deserialize)]
pub(in crate::api) struct AnalyzeRequest {
    url: Option<String>,
    /// Comma-separated override for the extracted keywords.
    keywords: Option<String>,
    /// Free-text override for the extracted description.
    detail: Option<String>,
}

pub(in crate::api) async fn analyze_free(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    run_analysis(&state, Tier::Free, body).await.map(Json)
}

pub(in crate::api) async fn analyze_paid(
    State(state): State<AppState>,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    run_analysis(&state, Tier::Paid, body).await.map(Json)
}

async fn run_analysis(
    state: &AppState,
    tier: Tier,
    body: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Value, ApiError> {
    // A malformed body must still come back as the JSON error shape.
    let Json(request) = body.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    let Some(report_client) = state.report.as_ref() else {
        return Err(ApiError::validation(
            "OPENAI_API_KEY is not configured on the server",
        ));
    };

    let listing = normalize_listing_url(request.url.as_deref().unwrap_or_default())
        .map_err(|_| ApiError::validation("could not recognize a Naver Place listing URL"))?;

    let outcome = state
        .fetcher
        .fetch_listing(&listing, state.config.fetch_fallback_order)
        .await;

    if !outcome.result.succeeded {
        tracing::warn!(
            place_id = %listing.id,
            status = outcome.result.status,
            "listing page unreachable on both variants, returning degraded payload"
        );
        return Ok(degraded_response(&listing, &outcome.used_url, tier));
    }

    let user = UserInput {
        keywords: request.keywords,
        description: request.detail,
    };
    let extractions = run_extractors(&outcome.result.body);
    let record = resolve_fields(&user, &extractions, state.config.keyword_cap);

    let prompt = report_vars(&record).render(tier);
    let report = match report_client.generate(tier, &prompt).await {
        Ok(text) => text,
        Err(error) => {
            tracing::warn!(%error, place_id = %listing.id, "report generation failed");
            tier.failure_message().to_string()
        }
    };

    Ok(analysis_response(&listing, &outcome.used_url, &record, tier, &report))
}

fn report_vars(record: &ExtractedRecord) -> ReportVars {
    let current_keywords = if record.keywords.is_empty() {
        "none".to_string()
    } else {
        record.keywords.join(", ")
    };
    ReportVars {
        place_name: record.name.clone(),
        current_keywords,
        description_text: record.description.clone(),
        main_image_url: record.image.clone(),
    }
}

/// The one success-shaped response body both tiers share; only the report
/// key differs.
fn analysis_response(
    listing: &ListingReference,
    analyzed_url: &str,
    record: &ExtractedRecord,
    tier: Tier,
    report: &str,
) -> Value {
    let mut body = serde_json::json!({
        "place_id": listing.id,
        "analyzed_url": analyzed_url,
        "extracted": record,
    });
    if let Value::Object(map) = &mut body {
        map.insert(tier.report_key().to_string(), Value::String(report.to_string()));
    }
    body
}

/// Success-shaped payload for a listing page that could not be fetched at
/// all: sentinel extraction fields plus a report that explains the failure
/// in natural language.
fn degraded_response(listing: &ListingReference, analyzed_url: &str, tier: Tier) -> Value {
    let explanation = format!(
        "The listing page for place {} could not be fetched: both the desktop and \
         mobile page variants were unreachable or blocked. No analysis was possible. \
         Check that the listing is public, or retry in a few minutes.",
        listing.id
    );
    analysis_response(
        listing,
        analyzed_url,
        &ExtractedRecord::empty(),
        tier,
        &explanation,
    )
}
