//! Report generation against an OpenAI-compatible completion API.
//!
//! The extraction pipeline treats this as an opaque collaborator: it takes a
//! system instruction plus a filled prompt and returns generated text. Any
//! failure here maps to a typed error the caller turns into a sentinel
//! message, never into a dropped response.

mod client;
mod error;
mod prompt;

pub use client::ReportClient;
pub use error::ReportError;
pub use prompt::{fill_template, ReportVars, Tier};
