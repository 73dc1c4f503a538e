//! Error types for the ProspectLens domain.
//!
//! Uses `thiserror` for ergonomic error definitions.
//! Malformed profile fields and unknown selection ids are not errors at all:
//! they are recovered where they occur. What remains here are the failures a
//! caller has to act on.

use thiserror::Error;

/// The top-level error type for all ProspectLens operations.
#[derive(Debug, Error)]
pub enum Error {
    // --- Focus filtering ---
    #[error("Focus error: {0}")]
    Focus(#[from] FocusError),

    // --- Identifiers and names ---
    #[error("Unknown insight category: {0}")]
    UnknownCategory(String),

    #[error("Invalid insight id: {0}")]
    InvalidInsightId(String),

    // --- Serialization ---
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using our Error.
pub type Result<T> = std::result::Result<T, Error>;

// --- Bounded context errors ---

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FocusError {
    /// The focus filter left nothing to send downstream.
    #[error("no selected insights match focus [{tags}]; select more insights or change the focus")]
    NoMatchingInsights { tags: String },
}
