//! Listing-page extraction pipeline.
//!
//! Turns a raw Naver Place URL into a best-effort [`ExtractedRecord`]:
//! normalize the URL into its two canonical page variants, fetch one of them
//! (with fallback), run three independent extraction strategies over the
//! HTML, and merge their outputs under a fixed per-field priority order.

pub mod deep;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod normalize;
pub mod resolve;
pub mod types;

pub use error::NotAListing;
pub use fetch::PageFetcher;
pub use normalize::normalize_listing_url;
pub use resolve::{resolve_fields, UserInput};
pub use types::{ExtractedRecord, FetchOutcome, FetchResult, ListingReference, PartialExtraction};
