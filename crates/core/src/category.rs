//! Insight categories and the category → default-selection table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

/// The fixed set of categories an insight can belong to.
///
/// Serialized by display name (`"LinkedIn Data"`), which is also the form
/// used in configuration files and in outbound payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "LinkedIn Data")]
    LinkedInData,
    #[serde(rename = "Company Information")]
    CompanyInformation,
    #[serde(rename = "Company Experience")]
    CompanyExperience,
    #[serde(rename = "Behavioral & Personality Insights")]
    BehavioralPersonality,
    #[serde(rename = "Email Optimization")]
    EmailOptimization,
    #[serde(rename = "Other Insights")]
    OtherInsights,
    #[serde(rename = "LinkedIn Activity")]
    LinkedInActivity,
    #[serde(rename = "Recommendations")]
    Recommendations,
    #[serde(rename = "Shared Experience")]
    SharedExperience,
    #[serde(rename = "Professional Background")]
    ProfessionalBackground,
    #[serde(rename = "Suggested Next Steps")]
    SuggestedNextSteps,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 11] = [
        Category::LinkedInData,
        Category::CompanyInformation,
        Category::CompanyExperience,
        Category::BehavioralPersonality,
        Category::EmailOptimization,
        Category::OtherInsights,
        Category::LinkedInActivity,
        Category::Recommendations,
        Category::SharedExperience,
        Category::ProfessionalBackground,
        Category::SuggestedNextSteps,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LinkedInData => "LinkedIn Data",
            Self::CompanyInformation => "Company Information",
            Self::CompanyExperience => "Company Experience",
            Self::BehavioralPersonality => "Behavioral & Personality Insights",
            Self::EmailOptimization => "Email Optimization",
            Self::OtherInsights => "Other Insights",
            Self::LinkedInActivity => "LinkedIn Activity",
            Self::Recommendations => "Recommendations",
            Self::SharedExperience => "Shared Experience",
            Self::ProfessionalBackground => "Professional Background",
            Self::SuggestedNextSteps => "Suggested Next Steps",
        }
    }

    /// Presentation glyph shown next to insights of this category.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::LinkedInData => "👤",
            Self::CompanyInformation => "🏢",
            Self::CompanyExperience => "📈",
            Self::BehavioralPersonality => "🧠",
            Self::EmailOptimization => "✉️",
            Self::OtherInsights => "💡",
            Self::LinkedInActivity => "📝",
            Self::Recommendations => "⭐",
            Self::SharedExperience => "🤝",
            Self::ProfessionalBackground => "🎓",
            Self::SuggestedNextSteps => "🎯",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| crate::Error::UnknownCategory(wanted.to_string()))
    }
}

/// Which categories start out selected after extraction.
///
/// Profile narrative and recent activity are preselected; demographics,
/// company metadata and derived tips are not. Deployments override entries
/// through configuration, so this is data rather than branching code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDefaults {
    table: BTreeMap<Category, bool>,
}

impl CategoryDefaults {
    /// The built-in table.
    pub fn builtin() -> Self {
        let table = Category::ALL
            .iter()
            .map(|&c| {
                let selected = matches!(
                    c,
                    Category::LinkedInData
                        | Category::LinkedInActivity
                        | Category::Recommendations
                        | Category::SharedExperience
                        | Category::ProfessionalBackground
                );
                (c, selected)
            })
            .collect();
        Self { table }
    }

    /// Start from the built-in table and apply overrides keyed by category
    /// display name. Unknown names are rejected.
    pub fn with_overrides<'a, I>(overrides: I) -> crate::Result<Self>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let mut defaults = Self::builtin();
        for (name, selected) in overrides {
            let category: Category = name.parse()?;
            defaults.table.insert(category, selected);
        }
        Ok(defaults)
    }

    pub fn is_selected(&self, category: Category) -> bool {
        self.table.get(&category).copied().unwrap_or(false)
    }

    pub fn set(&mut self, category: Category, selected: bool) {
        self.table.insert(category, selected);
    }

    /// The table as display name → flag, in category order.
    pub fn to_names(&self) -> BTreeMap<String, bool> {
        self.table
            .iter()
            .map(|(c, s)| (c.as_str().to_string(), *s))
            .collect()
    }
}

impl Default for CategoryDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_serializes_by_display_name() {
        let json = serde_json::to_string(&Category::BehavioralPersonality).unwrap();
        assert_eq!(json, "\"Behavioral & Personality Insights\"");
        let back: Category = serde_json::from_str("\"Shared Experience\"").unwrap();
        assert_eq!(back, Category::SharedExperience);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(
            "company experience".parse::<Category>().unwrap(),
            Category::CompanyExperience
        );
        assert!("Hobbies".parse::<Category>().is_err());
    }

    #[test]
    fn builtin_table_preselects_narrative_categories() {
        let defaults = CategoryDefaults::builtin();
        assert!(defaults.is_selected(Category::LinkedInData));
        assert!(defaults.is_selected(Category::LinkedInActivity));
        assert!(!defaults.is_selected(Category::CompanyInformation));
        assert!(!defaults.is_selected(Category::CompanyExperience));
        assert!(!defaults.is_selected(Category::SuggestedNextSteps));
    }

    #[test]
    fn overrides_apply_on_top_of_builtin() {
        let defaults = CategoryDefaults::with_overrides([
            ("Company Experience", true),
            ("LinkedIn Data", false),
        ])
        .unwrap();
        assert!(defaults.is_selected(Category::CompanyExperience));
        assert!(!defaults.is_selected(Category::LinkedInData));
        // Untouched entries keep the built-in value.
        assert!(defaults.is_selected(Category::Recommendations));
    }

    #[test]
    fn unknown_override_is_rejected() {
        let err = CategoryDefaults::with_overrides([("Hobbies", true)]).unwrap_err();
        assert!(matches!(err, crate::Error::UnknownCategory(name) if name == "Hobbies"));
    }

    #[test]
    fn every_category_has_a_distinct_name() {
        let names: std::collections::HashSet<_> =
            Category::ALL.iter().map(|c| c.as_str()).collect();
        assert_eq!(names.len(), Category::ALL.len());
    }
}
