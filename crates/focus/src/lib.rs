//! Focus filtering for ProspectLens.
//!
//! A focus tag narrows the selected insights down to what a particular
//! message should lean on. Tags combine with OR semantics; `all` disables
//! filtering entirely.

pub mod rules;

pub use rules::{FOCUS_RULES, FocusRule};

use prospectlens_core::{FocusError, Insight};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{debug, warn};

/// A focus keyword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum FocusTag {
    /// Keep everything.
    All,
    Featured,
    RecentPosts,
    Skills,
    Recommendations,
    Geography,
    About,
    Education,
    Experience,
    /// Anything else. Matches nothing.
    Unknown(String),
}

impl FocusTag {
    pub const KNOWN: &[FocusTag] = &[
        FocusTag::All,
        FocusTag::Featured,
        FocusTag::RecentPosts,
        FocusTag::Skills,
        FocusTag::Recommendations,
        FocusTag::Geography,
        FocusTag::About,
        FocusTag::Education,
        FocusTag::Experience,
    ];

    /// Case-insensitive, whitespace-trimmed parse. Never fails.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        match normalized.as_str() {
            "all" => Self::All,
            "featured" => Self::Featured,
            "recent_posts" => Self::RecentPosts,
            "skills" => Self::Skills,
            "recommendations" => Self::Recommendations,
            "geography" => Self::Geography,
            "about" => Self::About,
            "education" => Self::Education,
            "experience" => Self::Experience,
            _ => Self::Unknown(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Featured => "featured",
            Self::RecentPosts => "recent_posts",
            Self::Skills => "skills",
            Self::Recommendations => "recommendations",
            Self::Geography => "geography",
            Self::About => "about",
            Self::Education => "education",
            Self::Experience => "experience",
            Self::Unknown(raw) => raw,
        }
    }

    /// The matching rule, if this tag has one.
    pub fn rule(&self) -> Option<&'static FocusRule> {
        FOCUS_RULES.iter().find(|r| r.tag == self.as_str())
    }

    pub fn matches(&self, insight: &Insight) -> bool {
        match self {
            Self::All => true,
            _ => self.rule().is_some_and(|rule| rule.matches(insight)),
        }
    }
}

impl FromStr for FocusTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<String> for FocusTag {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<FocusTag> for String {
    fn from(tag: FocusTag) -> Self {
        tag.as_str().to_string()
    }
}

impl std::fmt::Display for FocusTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split a comma-separated tag list, skipping blanks.
pub fn parse_tags(raw: &str) -> Vec<FocusTag> {
    raw.split(',')
        .filter(|t| !t.trim().is_empty())
        .map(FocusTag::parse)
        .collect()
}

/// Render tags comma-joined, as sent downstream.
pub fn join_tags(tags: &[FocusTag]) -> String {
    tags.iter().map(FocusTag::as_str).collect::<Vec<_>>().join(",")
}

/// `tags`, or `defaults` when no tags were given.
pub fn effective_tags<'a>(tags: &'a [FocusTag], defaults: &'a [FocusTag]) -> &'a [FocusTag] {
    if tags.is_empty() { defaults } else { tags }
}

/// Insights matching at least one tag, in input order.
///
/// No default substitution and no emptiness check.
pub fn matching<'a>(insights: &'a [Insight], tags: &[FocusTag]) -> Vec<&'a Insight> {
    if tags.contains(&FocusTag::All) {
        return insights.iter().collect();
    }
    for tag in tags {
        if let FocusTag::Unknown(raw) = tag {
            warn!(tag = %raw, "Unrecognized focus tag matches nothing");
        }
    }
    insights
        .iter()
        .filter(|insight| tags.iter().any(|tag| tag.matches(insight)))
        .collect()
}

/// Narrow `insights` to the focus.
///
/// Empty `tags` fall back to `defaults`. An empty result is an error so the
/// caller can ask for a different selection instead of sending nothing.
pub fn filter_by_focus(
    insights: &[Insight],
    tags: &[FocusTag],
    defaults: &[FocusTag],
) -> Result<Vec<Insight>, FocusError> {
    let tags = effective_tags(tags, defaults);
    let kept: Vec<Insight> = matching(insights, tags).into_iter().cloned().collect();
    debug!(
        tags = %join_tags(tags),
        input = insights.len(),
        kept = kept.len(),
        "Applied focus filter"
    );
    if kept.is_empty() {
        return Err(FocusError::NoMatchingInsights {
            tags: tags.iter().map(FocusTag::as_str).collect::<Vec<_>>().join(", "),
        });
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectlens_core::{Category, InsightId};

    fn insight(id: u32, category: Category, title: &str, content: &str) -> Insight {
        Insight::new(InsightId(id), category, title, content, 200).with_selected(true)
    }

    fn sample() -> Vec<Insight> {
        vec![
            insight(1, Category::LinkedInData, "About Me", "Builder of things"),
            insight(2, Category::LinkedInActivity, "Recent Post", "Shipping v2"),
            insight(3, Category::Recommendations, "Recommendation from Grace", "A joy to work with"),
            insight(4, Category::ProfessionalBackground, "Education", "BSc in Physics, MIT"),
            insight(5, Category::LinkedInData, "Top Skills", "Rust, Go"),
            insight(6, Category::CompanyExperience, "Tenure at Company", "3 years at Acme"),
            insight(7, Category::SharedExperience, "Shared Customer", "You both work with Globex"),
            insight(8, Category::LinkedInData, "Featured: Keynote", "Talk at RustConf"),
        ]
    }

    fn ids(insights: &[&Insight]) -> Vec<u32> {
        insights.iter().map(|i| i.id.0).collect()
    }

    fn owned_ids(insights: &[Insight]) -> Vec<u32> {
        insights.iter().map(|i| i.id.0).collect()
    }

    #[test]
    fn each_tag_hits_its_insight() {
        let list = sample();
        let cases = [
            (FocusTag::About, vec![1]),
            (FocusTag::RecentPosts, vec![2]),
            (FocusTag::Recommendations, vec![3]),
            (FocusTag::Education, vec![4]),
            (FocusTag::Skills, vec![5]),
            (FocusTag::Experience, vec![6]),
            (FocusTag::Geography, vec![7]),
            (FocusTag::Featured, vec![8]),
        ];
        for (tag, expected) in cases {
            assert_eq!(ids(&matching(&list, &[tag.clone()])), expected, "tag {tag}");
        }
    }

    #[test]
    fn union_law_preserves_order() {
        let list = sample();
        let tags: Vec<FocusTag> = FocusTag::KNOWN[1..].to_vec();
        for a in &tags {
            for b in &tags {
                let both = ids(&matching(&list, &[a.clone(), b.clone()]));
                let mut union: Vec<u32> = ids(&matching(&list, &[a.clone()]));
                union.extend(ids(&matching(&list, &[b.clone()])));
                union.sort_unstable();
                union.dedup();
                assert_eq!(both, union, "{a} + {b}");
            }
        }
    }

    #[test]
    fn all_short_circuits() {
        let list = sample();
        let tags = [FocusTag::Geography, FocusTag::All, FocusTag::parse("nonsense")];
        let kept = filter_by_focus(&list, &tags, &[FocusTag::RecentPosts]).unwrap();
        assert_eq!(kept, list);
    }

    #[test]
    fn geography_keeps_only_shared_experience() {
        let list = vec![
            insight(1, Category::LinkedInData, "About Me", "Builder"),
            insight(2, Category::SharedExperience, "Shared Customer", "You both work with Globex"),
            insight(3, Category::CompanyInformation, "Company", "Acme"),
        ];
        let kept = filter_by_focus(&list, &[FocusTag::Geography], &[]).unwrap();
        assert_eq!(owned_ids(&kept), vec![2]);
    }

    #[test]
    fn geography_matches_location_text() {
        let list = vec![insight(1, Category::OtherInsights, "Location", "Based in Berlin")];
        assert_eq!(ids(&matching(&list, &[FocusTag::Geography])), vec![1]);
    }

    #[test]
    fn unknown_tag_matches_nothing() {
        let list = sample();
        assert!(matching(&list, &[FocusTag::parse("hobbies")]).is_empty());
    }

    #[test]
    fn empty_result_is_an_error() {
        let list = vec![insight(1, Category::CompanyInformation, "Company", "Acme")];
        let err = filter_by_focus(&list, &[FocusTag::Education, FocusTag::Skills], &[]).unwrap_err();
        assert_eq!(
            err,
            FocusError::NoMatchingInsights {
                tags: "education, skills".into()
            }
        );
    }

    #[test]
    fn zero_tags_use_defaults() {
        let list = sample();
        let kept = filter_by_focus(&list, &[], &[FocusTag::RecentPosts]).unwrap();
        assert_eq!(owned_ids(&kept), vec![2]);
    }

    #[test]
    fn parsing_is_lenient() {
        assert_eq!(FocusTag::parse(" Recent_Posts "), FocusTag::RecentPosts);
        assert_eq!(FocusTag::parse("ALL"), FocusTag::All);
        assert_eq!(FocusTag::parse("Hobbies"), FocusTag::Unknown("hobbies".into()));
        assert_eq!(
            parse_tags("geography, ,skills,"),
            vec![FocusTag::Geography, FocusTag::Skills]
        );
        assert!(parse_tags("  ").is_empty());
    }

    #[test]
    fn tags_round_trip_through_serde() {
        let tags = vec![FocusTag::RecentPosts, FocusTag::Unknown("x".into())];
        let json = serde_json::to_string(&tags).unwrap();
        assert_eq!(json, r#"["recent_posts","x"]"#);
        let back: Vec<FocusTag> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tags);
        assert_eq!(join_tags(&tags), "recent_posts,x");
    }
}
