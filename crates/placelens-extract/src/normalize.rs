//! Listing URL normalization.
//!
//! Canonicalizes any pasted Naver Place URL (desktop, mobile, with or without
//! query noise) into a [`ListingReference`] carrying the numeric place ID and
//! both canonical page variants.

use regex::Regex;
use url::Url;

use crate::error::NotAListing;
use crate::types::ListingReference;

const DESKTOP_HOST_TEMPLATE: &str = "https://place.naver.com/place/";
const MOBILE_HOST_TEMPLATE: &str = "https://m.place.naver.com/place/";

/// Normalize a raw input URL into a [`ListingReference`].
///
/// The place ID is matched against the path with two patterns in order:
/// a literal `/place/<digits>` segment, then any `/<digits>` segment. The
/// first match wins. Pure function, no I/O.
///
/// # Errors
///
/// Returns [`NotAListing`] if the input does not parse as a URL or its path
/// carries no digit segment.
pub fn normalize_listing_url(input: &str) -> Result<ListingReference, NotAListing> {
    let not_a_listing = || NotAListing {
        input: input.to_string(),
    };

    let parsed = Url::parse(input.trim()).map_err(|_| not_a_listing())?;
    let path = parsed.path();

    let place_segment = Regex::new(r"/place/(\d+)").expect("valid regex");
    let any_digit_segment = Regex::new(r"/(\d+)").expect("valid regex");

    let id = place_segment
        .captures(path)
        .or_else(|| any_digit_segment.captures(path))
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(not_a_listing)?;

    Ok(ListingReference {
        desktop_url: format!("{DESKTOP_HOST_TEMPLATE}{id}"),
        mobile_url: format!("{MOBILE_HOST_TEMPLATE}{id}"),
        id,
    })
}
