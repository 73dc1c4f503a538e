//! Insight extraction for ProspectLens.
//!
//! Turns a loosely-structured prospect profile into an ordered list of
//! categorized [`Insight`]s. Rules run in a fixed priority order, list
//! fields are capped, and every insight starts selected or not according
//! to its category's default.

pub mod engine;
pub mod tables;
pub mod tenure;

pub use engine::{Extraction, Extractor, ExtractorSettings, ListField};

use prospectlens_core::{Insight, Profile};

/// Extract with the built-in settings.
pub fn extract(profile: &Profile) -> Vec<Insight> {
    Extractor::default().extract(profile).into_insights()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn free_extract_matches_default_extractor() {
        let profile = Profile::from_value(&json!({"company": "Acme", "skills": ["Rust"]}));
        let insights = extract(&profile);
        assert_eq!(insights, Extractor::default().extract(&profile).insights);
        assert_eq!(insights[0].title, "Company");
    }
}
