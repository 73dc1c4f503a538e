//! Static per-tag match rules.
//!
//! Every comparison runs on lower-cased text. A rule matches when any one
//! of its three conditions holds.

use prospectlens_core::Insight;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRule {
    pub tag: &'static str,
    /// Lower-cased category names that match outright.
    pub categories: &'static [&'static str],
    pub title_contains: &'static [&'static str],
    pub content_contains: &'static [&'static str],
}

pub const FOCUS_RULES: &[FocusRule] = &[
    FocusRule {
        tag: "featured",
        categories: &[],
        title_contains: &["featured"],
        content_contains: &["featured"],
    },
    FocusRule {
        tag: "recent_posts",
        categories: &["linkedin activity"],
        title_contains: &["post", "activity"],
        content_contains: &[],
    },
    FocusRule {
        tag: "skills",
        categories: &[],
        title_contains: &["skill", "certification", "expertise"],
        content_contains: &[],
    },
    FocusRule {
        tag: "recommendations",
        categories: &["recommendations"],
        title_contains: &["recommend"],
        content_contains: &["recommend"],
    },
    FocusRule {
        tag: "geography",
        categories: &["shared experience"],
        title_contains: &["location", "based in", "region"],
        content_contains: &["based in", "located in"],
    },
    FocusRule {
        tag: "about",
        categories: &[],
        title_contains: &["about", "summary"],
        content_contains: &[],
    },
    FocusRule {
        tag: "education",
        categories: &[],
        title_contains: &["education", "degree", "school", "university"],
        content_contains: &["university", "degree"],
    },
    FocusRule {
        tag: "experience",
        categories: &["company experience"],
        title_contains: &["experience", "role", "tenure"],
        content_contains: &[],
    },
];

impl FocusRule {
    pub fn matches(&self, insight: &Insight) -> bool {
        let category = insight.category.as_str().to_lowercase();
        if self.categories.iter().any(|c| *c == category) {
            return true;
        }
        let title = insight.title.to_lowercase();
        if self.title_contains.iter().any(|needle| title.contains(needle)) {
            return true;
        }
        if self.content_contains.is_empty() {
            return false;
        }
        let content = insight.content.to_lowercase();
        self.content_contains.iter().any(|needle| content.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prospectlens_core::{Category, InsightId};

    fn rule(tag: &str) -> &'static FocusRule {
        FOCUS_RULES.iter().find(|r| r.tag == tag).unwrap()
    }

    #[test]
    fn categories_in_table_are_real_categories() {
        for rule in FOCUS_RULES {
            for name in rule.categories {
                assert!(
                    Category::ALL.iter().any(|c| c.as_str().to_lowercase() == *name),
                    "{name} is not a category"
                );
            }
        }
    }

    #[test]
    fn matching_ignores_case() {
        let insight = Insight::new(
            InsightId(1),
            Category::OtherInsights,
            "Note",
            "Graduated from the UNIVERSITY of Oslo",
            200,
        );
        assert!(rule("education").matches(&insight));
        assert!(!rule("skills").matches(&insight));
    }

    #[test]
    fn content_only_checked_where_listed() {
        let insight = Insight::new(InsightId(1), Category::OtherInsights, "Note", "skill issue", 200);
        assert!(!rule("skills").matches(&insight));
    }

    #[test]
    fn tags_are_unique() {
        let mut tags: Vec<_> = FOCUS_RULES.iter().map(|r| r.tag).collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(tags.len(), FOCUS_RULES.len());
    }
}
