//! Typed view over the inbound profile record.
//!
//! The record arrives as loosely-shaped JSON: any field may be absent, null,
//! blank or of the wrong type, and several list fields mix bare strings with
//! objects. Deserialization here never fails on a field. Wrong-typed scalars
//! become `None`, wrong-typed lists become empty, and list elements that fit
//! neither shape are skipped. String-or-object unions are resolved once into
//! tagged variants (`TextOnly` / `Structured`).

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// A prospect's profile as seen by the extractor.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub location: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub about: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub personality_type: Option<String>,
    #[serde(deserialize_with = "crate::lenient::number")]
    pub years_at_company: Option<f64>,
    /// Zero is a meaningful value here.
    #[serde(deserialize_with = "crate::lenient::count")]
    pub num_roles_at_company: Option<u64>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub business_model: Option<String>,
    /// Either an exact count or a band such as `"51-200"`.
    #[serde(deserialize_with = "crate::lenient::scalar")]
    pub company_headcount: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub company_industry: Option<String>,

    #[serde(deserialize_with = "crate::lenient::list")]
    pub posts: Vec<Post>,
    #[serde(deserialize_with = "crate::lenient::list")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "crate::lenient::list")]
    pub recommendations: Vec<Recommendation>,
    #[serde(deserialize_with = "crate::lenient::list")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "crate::lenient::list")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "crate::lenient::list")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "crate::lenient::list")]
    pub featured: Vec<Featured>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub skills: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub shared_customers: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub work_milestones: Vec<String>,
    #[serde(deserialize_with = "crate::lenient::strings")]
    pub top_traits: Vec<String>,
}

impl Profile {
    /// Build a profile from the raw inbound record.
    ///
    /// Anything other than a JSON object yields an empty profile.
    pub fn from_value(raw: &Value) -> Self {
        if !raw.is_object() {
            warn!("Profile record is not an object, treating it as empty");
            return Self::default();
        }
        match serde_json::from_value(raw.clone()) {
            Ok(profile) => profile,
            Err(e) => {
                warn!("Profile record could not be read, treating it as empty: {e}");
                Self::default()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Post {
    TextOnly(String),
    Structured(PostDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostDetails {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub text: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub content: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub date: Option<String>,
    #[serde(deserialize_with = "crate::lenient::count")]
    pub likes: Option<u64>,
    #[serde(deserialize_with = "crate::lenient::count")]
    pub comments: Option<u64>,
}

impl Post {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::TextOnly(text) => non_blank(text),
            Self::Structured(details) => details.text.as_deref().or(details.content.as_deref()),
        }
    }

    pub fn date(&self) -> Option<&str> {
        match self {
            Self::TextOnly(_) => None,
            Self::Structured(details) => details.date.as_deref(),
        }
    }

    /// `(likes, comments)` when the post carries any engagement counts.
    pub fn engagement(&self) -> Option<(u64, u64)> {
        match self {
            Self::Structured(PostDetails { likes, comments, .. })
                if likes.is_some() || comments.is_some() =>
            {
                Some((likes.unwrap_or(0), comments.unwrap_or(0)))
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Experience {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub duration: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Recommendation {
    TextOnly(String),
    Structured(RecommendationDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct RecommendationDetails {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub author: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub text: Option<String>,
}

impl Recommendation {
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::TextOnly(text) => non_blank(text),
            Self::Structured(details) => details.text.as_deref(),
        }
    }

    pub fn author(&self) -> Option<&str> {
        match self {
            Self::TextOnly(_) => None,
            Self::Structured(details) => details.author.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Certification {
    TextOnly(String),
    Structured(CertificationDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CertificationDetails {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub authority: Option<String>,
}

impl Certification {
    /// `"Name (Authority)"`, or just the name.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::TextOnly(text) => non_blank(text).map(String::from),
            Self::Structured(CertificationDetails { name, authority }) => {
                let name = name.as_deref()?;
                Some(match authority {
                    Some(authority) => format!("{name} ({authority})"),
                    None => name.to_string(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Education {
    TextOnly(String),
    Structured(EducationDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EducationDetails {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub school: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub field: Option<String>,
}

impl Education {
    /// `"Degree in Field, School"` with missing parts left out.
    pub fn label(&self) -> Option<String> {
        match self {
            Self::TextOnly(text) => non_blank(text).map(String::from),
            Self::Structured(EducationDetails {
                school,
                degree,
                field,
            }) => {
                let program = match (degree, field) {
                    (Some(d), Some(f)) => Some(format!("{d} in {f}")),
                    (Some(d), None) => Some(d.clone()),
                    (None, Some(f)) => Some(f.clone()),
                    (None, None) => None,
                };
                match (program, school) {
                    (Some(p), Some(s)) => Some(format!("{p}, {s}")),
                    (Some(p), None) => Some(p),
                    (None, Some(s)) => Some(s.clone()),
                    (None, None) => None,
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Language {
    TextOnly(String),
    Structured(LanguageDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LanguageDetails {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub proficiency: Option<String>,
}

impl Language {
    pub fn label(&self) -> Option<String> {
        match self {
            Self::TextOnly(text) => non_blank(text).map(String::from),
            Self::Structured(LanguageDetails { name, proficiency }) => {
                let name = name.as_deref()?;
                Some(match proficiency {
                    Some(p) => format!("{name} ({p})"),
                    None => name.to_string(),
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Featured {
    TextOnly(String),
    Structured(FeaturedDetails),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct FeaturedDetails {
    #[serde(deserialize_with = "crate::lenient::text")]
    pub title: Option<String>,
    #[serde(deserialize_with = "crate::lenient::text")]
    pub description: Option<String>,
}

impl Featured {
    pub fn title(&self) -> Option<&str> {
        match self {
            Self::TextOnly(text) => non_blank(text),
            Self::Structured(details) => details.title.as_deref(),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            Self::TextOnly(_) => None,
            Self::Structured(details) => details.description.as_deref(),
        }
    }
}

fn non_blank(s: &str) -> Option<&str> {
    if s.trim().is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_fields_are_absent() {
        let profile = Profile::from_value(&json!({"name": null, "title": ""}));
        assert!(profile.name.is_none());
        assert!(profile.title.is_none());
        assert!(profile.posts.is_empty());
    }

    #[test]
    fn wrong_typed_fields_are_absorbed() {
        let profile = Profile::from_value(&json!({
            "name": 42,
            "posts": "not a list",
            "skills": {"rust": true},
            "years_at_company": "three",
            "experience": [1, 2, 3],
        }));
        assert!(profile.name.is_none());
        assert!(profile.posts.is_empty());
        assert!(profile.skills.is_empty());
        assert!(profile.years_at_company.is_none());
        assert!(profile.experience.is_empty());
    }

    #[test]
    fn zero_is_a_present_count() {
        let profile = Profile::from_value(&json!({
            "num_roles_at_company": 0,
            "company_headcount": 0,
        }));
        assert_eq!(profile.num_roles_at_company, Some(0));
        assert_eq!(profile.company_headcount.as_deref(), Some("0"));
    }

    #[test]
    fn non_object_record_is_empty_profile() {
        assert_eq!(Profile::from_value(&json!([1, 2])), Profile::default());
        assert_eq!(Profile::from_value(&json!("text")), Profile::default());
    }

    #[test]
    fn post_shapes_resolve_to_variants() {
        let profile = Profile::from_value(&json!({
            "posts": [
                "Plain text post",
                {"text": "Structured post", "likes": 12, "comments": 3, "date": "2d"},
                {"content": "Body under content"},
                17,
            ]
        }));
        assert_eq!(profile.posts.len(), 3);
        assert!(matches!(profile.posts[0], Post::TextOnly(_)));
        assert_eq!(profile.posts[1].text(), Some("Structured post"));
        assert_eq!(profile.posts[1].engagement(), Some((12, 3)));
        assert_eq!(profile.posts[1].date(), Some("2d"));
        assert_eq!(profile.posts[2].text(), Some("Body under content"));
        assert_eq!(profile.posts[0].engagement(), None);
    }

    #[test]
    fn post_with_text_and_content_keeps_text() {
        let profile = Profile::from_value(&json!({
            "posts": [
                {"text": "From text", "content": "From content"},
                {"text": "", "content": "Content fallback"},
                "plain"
            ]
        }));
        assert_eq!(profile.posts.len(), 3);
        assert_eq!(profile.posts[0].text(), Some("From text"));
        assert_eq!(profile.posts[1].text(), Some("Content fallback"));
        assert_eq!(profile.posts[2].text(), Some("plain"));
    }

    #[test]
    fn education_label_combines_parts() {
        let profile = Profile::from_value(&json!({
            "education": [
                {"school": "MIT", "degree": "BSc", "field": "Physics"},
                {"school": "Stanford"},
                "Self-taught",
                {},
            ]
        }));
        let labels: Vec<_> = profile.education.iter().map(|e| e.label()).collect();
        assert_eq!(labels[0].as_deref(), Some("BSc in Physics, MIT"));
        assert_eq!(labels[1].as_deref(), Some("Stanford"));
        assert_eq!(labels[2].as_deref(), Some("Self-taught"));
        assert_eq!(labels[3], None);
    }

    #[test]
    fn certification_and_language_labels() {
        let profile = Profile::from_value(&json!({
            "certifications": [{"name": "CKA", "authority": "CNCF"}, "PMP"],
            "languages": [{"name": "German", "proficiency": "Native"}, "French"],
        }));
        assert_eq!(profile.certifications[0].label().as_deref(), Some("CKA (CNCF)"));
        assert_eq!(profile.certifications[1].label().as_deref(), Some("PMP"));
        assert_eq!(profile.languages[0].label().as_deref(), Some("German (Native)"));
        assert_eq!(profile.languages[1].label().as_deref(), Some("French"));
    }

    #[test]
    fn blank_list_strings_are_dropped() {
        let profile = Profile::from_value(&json!({"skills": ["Rust", " ", "", 5, "Go"]}));
        assert_eq!(profile.skills, vec!["Rust".to_string(), "Go".to_string()]);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let profile = Profile::from_value(&json!({"name": "Ada", "favourite_color": "blue"}));
        assert_eq!(profile.name.as_deref(), Some("Ada"));
    }
}
