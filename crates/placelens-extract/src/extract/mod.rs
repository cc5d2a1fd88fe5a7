//! Structured-data extraction strategies.
//!
//! Three independent, pure parsers over a raw HTML string (meta tags,
//! JSON-LD blocks, the embedded application-state blob). Each produces a
//! [`PartialExtraction`]; none of them fails — a page where a strategy finds
//! nothing simply yields an empty partial.

mod jsonld;
mod meta;
mod state;

pub use jsonld::{linked_data_extraction, parse_linked_data_blocks};
pub use meta::{meta_extraction, pick_meta, strip_tags};
pub use state::{app_state_extraction, parse_app_state};

use crate::types::PartialExtraction;

/// The outputs of all three strategies over one fetched body.
#[derive(Debug, Clone, Default)]
pub struct Extractions {
    pub meta: PartialExtraction,
    pub linked_data: PartialExtraction,
    pub app_state: PartialExtraction,
}

/// Run every extraction strategy over the HTML.
///
/// Deterministic and side-effect free: the same body always yields the same
/// extractions.
#[must_use]
pub fn run_extractors(html: &str) -> Extractions {
    Extractions {
        meta: meta_extraction(html),
        linked_data: linked_data_extraction(html),
        app_state: app_state_extraction(html),
    }
}
