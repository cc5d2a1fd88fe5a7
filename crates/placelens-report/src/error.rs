use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("completion request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion API returned status {status}")]
    Status { status: u16 },

    #[error("completion response shape unexpected: {reason}")]
    Shape { reason: String },
}
