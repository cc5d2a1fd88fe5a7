//! Listing page fetcher.
//!
//! Issues browser-shaped GETs against the canonical page variants. All
//! failure modes are folded into [`FetchResult`]; `fetch` never errors, the
//! caller-level fallback policy decides which variant's body to keep.

use std::time::Duration;

use placelens_core::FallbackOrder;
use reqwest::header::{HeaderMap, HeaderValue};

use crate::types::{FetchOutcome, FetchResult, ListingReference};

/// Fixed desktop-browser header set. The target site serves an empty shell
/// (or a block page) to clients that don't look like a real browser.
const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120 Safari/537.36";
const ACCEPT_LANGUAGE: &str = "ko-KR,ko;q=0.9,en;q=0.8";
const ACCEPT: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,*/*;q=0.8";
const REFERER: &str = "https://m.place.naver.com/";

/// HTTP client for listing pages.
///
/// Bodies shorter than `min_body_bytes` count as unusable — empirically the
/// bot-block shell is well under 500 bytes while a real listing page is tens
/// of kilobytes.
pub struct PageFetcher {
    client: reqwest::Client,
    min_body_bytes: usize,
}

impl PageFetcher {
    /// Creates a `PageFetcher` with the fixed browser header set, redirect
    /// following, and a hard wall-clock timeout.
    ///
    /// # Errors
    ///
    /// Returns [`reqwest::Error`] if the underlying client cannot be
    /// constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, min_body_bytes: usize) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(reqwest::header::ACCEPT, HeaderValue::from_static(ACCEPT));
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            HeaderValue::from_static(ACCEPT_LANGUAGE),
        );
        headers.insert(
            reqwest::header::CACHE_CONTROL,
            HeaderValue::from_static("no-cache"),
        );
        headers.insert(reqwest::header::PRAGMA, HeaderValue::from_static("no-cache"));
        headers.insert(reqwest::header::REFERER, HeaderValue::from_static(REFERER));

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(timeout_secs.min(10)))
            .user_agent(BROWSER_USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self {
            client,
            min_body_bytes,
        })
    }

    /// Fetch one URL. Never errors: timeout, network failure, and body-read
    /// failure all come back as `{succeeded: false, status: 0, body: ""}`.
    pub async fn fetch(&self, url: &str) -> FetchResult {
        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(error) => {
                tracing::debug!(url, %error, "page fetch failed");
                return FetchResult::failed();
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => text,
            Err(error) => {
                tracing::debug!(url, %error, "page body read failed");
                return FetchResult::failed();
            }
        };

        FetchResult {
            succeeded: !status.is_client_error() && !status.is_server_error(),
            status: status.as_u16(),
            body,
        }
    }

    /// Fetch a listing, trying the variant chosen by `order` first and
    /// falling back to the other when the first attempt is unsuccessful or
    /// suspiciously short.
    ///
    /// The first attempt is kept when both are unusable, so callers always
    /// get a concrete `used_url` to report.
    pub async fn fetch_listing(
        &self,
        listing: &ListingReference,
        order: FallbackOrder,
    ) -> FetchOutcome {
        let (primary, secondary) = match order {
            FallbackOrder::DesktopFirst => (&listing.desktop_url, &listing.mobile_url),
            FallbackOrder::MobileFirst => (&listing.mobile_url, &listing.desktop_url),
        };
        self.fetch_with_fallback(primary, secondary).await
    }

    /// The fallback policy over two concrete URLs.
    pub async fn fetch_with_fallback(&self, primary: &str, secondary: &str) -> FetchOutcome {
        let first = self.fetch(primary).await;
        if self.is_usable(&first) {
            return FetchOutcome {
                result: first,
                used_url: primary.to_string(),
            };
        }

        tracing::debug!(
            primary,
            status = first.status,
            body_bytes = first.body.len(),
            "primary variant unusable, trying fallback"
        );
        let second = self.fetch(secondary).await;
        if self.is_usable(&second) {
            return FetchOutcome {
                result: second,
                used_url: secondary.to_string(),
            };
        }

        tracing::warn!(primary, secondary, "both listing page variants unusable");
        FetchOutcome {
            result: first,
            used_url: primary.to_string(),
        }
    }

    fn is_usable(&self, result: &FetchResult) -> bool {
        result.succeeded && result.body.len() >= self.min_body_bytes
    }
}
