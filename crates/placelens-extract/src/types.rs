//! Domain types for the listing extraction pipeline.

/// One external business listing, identified by the numeric token in its URL.
///
/// `desktop_url` and `mobile_url` are the two canonical page variants of the
/// same resource, derived deterministically from `id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingReference {
    /// Non-empty decimal-digit token extracted from the input URL path.
    pub id: String,
    pub desktop_url: String,
    pub mobile_url: String,
}

/// Outcome of retrieving one URL.
///
/// Transport-level only: `succeeded` says an HTTP response with a non-error
/// status was observed, not that the body is useful. On timeout or network
/// failure `status` is `0` and `body` is empty.
#[derive(Debug, Clone)]
pub struct FetchResult {
    pub succeeded: bool,
    pub status: u16,
    pub body: String,
}

impl FetchResult {
    pub(crate) fn failed() -> Self {
        Self {
            succeeded: false,
            status: 0,
            body: String::new(),
        }
    }
}

/// A [`FetchResult`] together with the URL variant that produced it.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    pub result: FetchResult,
    pub used_url: String,
}

/// Raw, unresolved candidates from one extraction strategy.
///
/// Carries zero or more values per field and no priority information; the
/// field resolver decides which source wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartialExtraction {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub keywords: Vec<String>,
}

impl PartialExtraction {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.image.is_none()
            && self.keywords.is_empty()
    }
}

/// Sentinel for an unresolved listing name.
pub const NAME_SENTINEL: &str = "unknown";
/// Sentinel for an unresolved description.
pub const DESCRIPTION_SENTINEL: &str = "unconfirmed";

/// The resolved, best-effort facts about a listing.
///
/// Every field is always present; absence is a sentinel value, never an
/// omitted key, because downstream template substitution must not see an
/// undefined placeholder.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ExtractedRecord {
    pub name: String,
    /// Distinct, trimmed, non-empty, order-preserving, capped.
    pub keywords: Vec<String>,
    pub description: String,
    /// Empty unless an absolute `http(s)` URL was found.
    pub image: String,
}

impl ExtractedRecord {
    /// The all-sentinel record used when nothing could be fetched.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            name: NAME_SENTINEL.to_string(),
            keywords: Vec::new(),
            description: DESCRIPTION_SENTINEL.to_string(),
            image: String::new(),
        }
    }
}
