mod analyze;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;

use placelens_core::AppConfig;
use placelens_extract::PageFetcher;
use placelens_report::ReportClient;

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub fetcher: Arc<PageFetcher>,
    /// Absent when no API credential is configured; analyze requests are
    /// then rejected per request instead of failing startup.
    pub report: Option<Arc<ReportClient>>,
}

impl AppState {
    /// Build the shared state: one page-fetch client and (credential
    /// permitting) one report client for the process lifetime.
    ///
    /// # Errors
    ///
    /// Returns an error if either HTTP client cannot be constructed.
    pub fn from_config(config: Arc<AppConfig>) -> anyhow::Result<Self> {
        let fetcher = Arc::new(PageFetcher::new(
            config.fetch_timeout_secs,
            config.fetch_min_body_bytes,
        )?);

        let report = match config.openai_api_key.as_deref() {
            Some(key) => Some(Arc::new(ReportClient::new(
                &config.report_base_url,
                key,
                &config.report_model,
                config.report_timeout_secs,
            )?)),
            None => None,
        };

        Ok(Self {
            config,
            fetcher,
            report,
        })
    }
}

/// User-facing error payload: always `{"error": "..."}` with a 4xx/5xx
/// status. Only validation-stage failures use this shape — everything past
/// validation degrades inside a success response instead.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
    #[serde(skip)]
    status: StatusCode,
}

impl ApiError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
            status: StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        (self.status, Json(self)).into_response()
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

/// Convert a panic anywhere below into the same JSON error shape the rest of
/// the API speaks — consumers must never see an unparseable body.
fn handle_panic(
    _panic: Box<dyn std::any::Any + Send + 'static>,
) -> axum::http::Response<axum::body::Body> {
    tracing::error!("request handler panicked");
    let body = serde_json::json!({ "error": "internal server error" }).to_string();
    axum::http::Response::builder()
        .status(StatusCode::INTERNAL_SERVER_ERROR)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(body))
        .expect("static response parts are valid")
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/health", get(health))
        .route("/api/v1/analyze/free", post(analyze::analyze_free))
        .route("/api/v1/analyze/paid", post(analyze::analyze_paid))
        .layer(
            ServiceBuilder::new()
                .layer(CatchPanicLayer::custom(handle_panic))
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(HealthData { status: "ok" }))
}
