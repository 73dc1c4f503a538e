//! Outbound request assembly for ProspectLens.
//!
//! Combines the raw profile, the focus-filtered selection, the chosen case
//! studies and the composer's free-text inputs into the JSON body the
//! generation backend expects.

pub mod request;
pub mod value_props;

pub use request::{ComposeOptions, GenerationRequest, InsightPayload};
pub use value_props::{ValuePropositionGroup, dedupe_by_name};
