//! # ProspectLens Core
//!
//! Domain types and error definitions shared by every ProspectLens crate:
//! the typed profile record, insights and their categories, and case
//! studies. This crate has **no logic beyond the data model** — extraction,
//! selection, scoring, focus filtering and request composition live in their
//! own crates and depend inward on this one.

pub mod case_study;
pub mod category;
pub mod error;
pub mod insight;
mod lenient;
pub mod profile;

// Re-export key types at crate root for ergonomics
pub use case_study::{CaseStudy, CaseStudyBatch};
pub use category::{Category, CategoryDefaults};
pub use error::{Error, FocusError, Result};
pub use insight::{DEFAULT_DISPLAY_LIMIT, ELLIPSIS, Insight, InsightId, truncate};
pub use profile::{
    Certification, Education, Experience, Featured, Language, Post, Profile, Recommendation,
};
