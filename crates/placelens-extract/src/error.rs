use thiserror::Error;

/// The input string is not a recognizable Naver Place listing URL.
///
/// Either it failed to parse as a URL at all, or its path carries no
/// extractable numeric place identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("not a Naver Place listing URL: {input}")]
pub struct NotAListing {
    pub input: String,
}
