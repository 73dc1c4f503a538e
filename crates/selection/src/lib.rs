//! Selection state for ProspectLens.
//!
//! [`SelectionState`] owns the current extraction and the user's choices.
//! The selected view is derived from the insights on every read, so it can
//! never disagree with them. Case-study membership lives in
//! [`CaseStudySelector`] and is keyed by title.

pub mod case_studies;
pub mod state;

pub use case_studies::{CaseStudySelector, matches_query};
pub use state::SelectionState;
