//! Personalization score.
//!
//! A bounded 0–99 estimate of how well-personalized the outgoing message
//! will be. The score is recomputed from scratch on every call:
//!
//! | term         | points                                   |
//! |--------------|------------------------------------------|
//! | completeness | `floor(weights / 100 * 40)`, at most 40  |
//! | insights     | `min(30, selected * 3)`                  |
//! | value prop   | 15 when one is chosen                    |
//! | context      | 14 when the free text is not blank       |
//!
//! The total is capped at 99, never 100.

use prospectlens_core::{Insight, Profile};
use serde::Serialize;
use tracing::debug;

/// Hard ceiling of the final score.
pub const MAX_SCORE: u8 = 99;

pub const MAX_COMPLETENESS: u8 = 40;
pub const MAX_INSIGHT_POINTS: u8 = 30;
pub const POINTS_PER_INSIGHT: usize = 3;
pub const VALUE_PROPOSITION_BONUS: u8 = 15;
pub const CONTEXT_BONUS: u8 = 14;

// Profile field weights for the completeness term.
const NAME_WEIGHT: u32 = 10;
const TITLE_WEIGHT: u32 = 10;
const COMPANY_WEIGHT: u32 = 10;
const LOCATION_WEIGHT: u32 = 10;
const ABOUT_WEIGHT: u32 = 20;
const PER_EXPERIENCE: u32 = 5;
const EXPERIENCE_CAP: u32 = 20;
const PER_POST: u32 = 7;
const POSTS_CAP: u32 = 20;

/// Each term of the score, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub completeness: u8,
    pub insights: u8,
    pub value_proposition: u8,
    pub additional_context: u8,
}

impl ScoreBreakdown {
    pub fn compute(
        profile: &Profile,
        selected_count: usize,
        has_value_proposition: bool,
        has_additional_context: bool,
    ) -> Self {
        let weights = completeness_weights(profile);
        let breakdown = Self {
            completeness: completeness_points(weights),
            insights: insight_points(selected_count),
            value_proposition: if has_value_proposition { VALUE_PROPOSITION_BONUS } else { 0 },
            additional_context: if has_additional_context { CONTEXT_BONUS } else { 0 },
        };
        debug!(
            weights,
            completeness = breakdown.completeness,
            insights = breakdown.insights,
            value_proposition = breakdown.value_proposition,
            additional_context = breakdown.additional_context,
            "Computed score breakdown"
        );
        breakdown
    }

    /// Sum of the terms, capped at [`MAX_SCORE`].
    pub fn total(&self) -> u8 {
        let sum = self.completeness as u16
            + self.insights as u16
            + self.value_proposition as u16
            + self.additional_context as u16;
        sum.min(MAX_SCORE as u16) as u8
    }
}

/// Score a profile given the current selection and composer inputs.
pub fn score(
    profile: &Profile,
    selected: &[&Insight],
    has_value_proposition: bool,
    has_additional_context: bool,
) -> u8 {
    ScoreBreakdown::compute(
        profile,
        selected.len(),
        has_value_proposition,
        has_additional_context,
    )
    .total()
}

/// Whether the free-text context counts towards the score.
pub fn has_additional_context(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Raw weight sum before scaling. At most 100 with the current weights.
pub fn completeness_weights(profile: &Profile) -> u32 {
    let present = |field: &Option<String>, weight: u32| if field.is_some() { weight } else { 0 };
    present(&profile.name, NAME_WEIGHT)
        + present(&profile.title, TITLE_WEIGHT)
        + present(&profile.company, COMPANY_WEIGHT)
        + present(&profile.location, LOCATION_WEIGHT)
        + present(&profile.about, ABOUT_WEIGHT)
        + (profile.experience.len() as u32)
            .saturating_mul(PER_EXPERIENCE)
            .min(EXPERIENCE_CAP)
        + (profile.posts.len() as u32).saturating_mul(PER_POST).min(POSTS_CAP)
}

/// `floor(weights / 100 * 40)` in double precision, capped at 40.
pub fn completeness_points(weights: u32) -> u8 {
    let scaled = (weights as f64 / 100.0 * MAX_COMPLETENESS as f64).floor();
    scaled.min(MAX_COMPLETENESS as f64) as u8
}

pub fn insight_points(selected_count: usize) -> u8 {
    selected_count
        .saturating_mul(POINTS_PER_INSIGHT)
        .min(MAX_INSIGHT_POINTS as usize) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectlens_core::{Category, InsightId};
    use serde_json::json;

    fn profile(raw: serde_json::Value) -> Profile {
        Profile::from_value(&raw)
    }

    fn insights(n: u32) -> Vec<Insight> {
        (1..=n)
            .map(|i| {
                Insight::new(InsightId(i), Category::LinkedInData, "t", "c", 200).with_selected(true)
            })
            .collect()
    }

    fn full_profile() -> Profile {
        profile(json!({
            "name": "Ada Lovelace",
            "title": "Analyst",
            "company": "Engines Ltd",
            "location": "London",
            "about": "Poetical science",
            "experience": [{"title": "a"}, {"title": "b"}, {"title": "c"}, {"title": "d"}, {"title": "e"}],
            "posts": ["1", "2", "3", "4"],
        }))
    }

    #[test]
    fn twelve_selected_without_extras() {
        let p = profile(json!({"name": "Ada", "title": "CTO", "company": "Acme"}));
        let all = insights(12);
        let selected: Vec<&Insight> = all.iter().collect();
        // 30 weight → floor(0.3 * 40) = 12, plus the 30-point insight cap.
        assert_eq!(score(&p, &selected, false, false), 30 + 12);
    }

    #[test]
    fn completeness_is_floored_after_scaling() {
        assert_eq!(completeness_points(0), 0);
        assert_eq!(completeness_points(14), 5);
        assert_eq!(completeness_points(42), 16);
        assert_eq!(completeness_points(57), 22);
        assert_eq!(completeness_points(100), 40);
    }

    #[test]
    fn full_profile_earns_full_completeness() {
        let p = full_profile();
        assert_eq!(completeness_weights(&p), 100);
        let breakdown = ScoreBreakdown::compute(&p, 0, false, false);
        assert_eq!(breakdown.completeness, 40);
    }

    #[test]
    fn list_terms_are_capped() {
        let experience: Vec<serde_json::Value> =
            (0..10).map(|i| json!({"title": format!("Role {i}")})).collect();
        let p = profile(json!({
            "experience": experience,
            "posts": ["a", "b", "c", "d", "e", "f"],
        }));
        assert_eq!(completeness_weights(&p), 40);
    }

    #[test]
    fn score_never_exceeds_99() {
        let p = full_profile();
        let all = insights(20);
        let selected: Vec<&Insight> = all.iter().collect();
        // 40 + 30 + 15 + 14 = 99 exactly; the ceiling still holds.
        assert_eq!(score(&p, &selected, true, true), MAX_SCORE);

        let breakdown = ScoreBreakdown {
            completeness: 40,
            insights: 30,
            value_proposition: 15,
            additional_context: 20,
        };
        assert_eq!(breakdown.total(), 99);
    }

    #[test]
    fn empty_everything_scores_zero() {
        assert_eq!(score(&Profile::default(), &[], false, false), 0);
    }

    #[test]
    fn more_selected_never_lowers_score() {
        let p = profile(json!({"name": "Ada", "about": "hi"}));
        let all = insights(15);
        let mut last = 0;
        for n in 0..=all.len() {
            let selected: Vec<&Insight> = all[..n].iter().collect();
            let s = score(&p, &selected, false, true);
            assert!(s >= last, "score dropped at {n} selected");
            last = s;
        }
        assert_eq!(insight_points(10), 30);
        assert_eq!(insight_points(11), 30);
    }

    #[test]
    fn bonuses_apply_independently() {
        let base = ScoreBreakdown::compute(&Profile::default(), 0, false, false);
        assert_eq!(base.total(), 0);
        assert_eq!(ScoreBreakdown::compute(&Profile::default(), 0, true, false).total(), 15);
        assert_eq!(ScoreBreakdown::compute(&Profile::default(), 0, false, true).total(), 14);
    }

    #[test]
    fn whitespace_context_does_not_count() {
        assert!(!has_additional_context(""));
        assert!(!has_additional_context("  \n\t "));
        assert!(has_additional_context(" met at SaaStr "));
    }

    #[test]
    fn blank_profile_strings_do_not_count() {
        let p = profile(json!({"name": "   ", "title": ""}));
        assert_eq!(completeness_weights(&p), 0);
    }
}
