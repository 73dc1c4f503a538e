//! Case studies, as returned by the backend's case-study search.

use serde::{Deserialize, Serialize};

/// A reference document offered for inclusion in generated content.
///
/// `title` is the identity key. `relevance_score` is already on a 0–100
/// scale when it arrives and is passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub title: String,
    #[serde(default, deserialize_with = "crate::lenient::string_or_empty")]
    pub excerpt: String,
    #[serde(default, deserialize_with = "crate::lenient::strings")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "crate::lenient::strings")]
    pub keywords: Vec<String>,
    #[serde(default, deserialize_with = "crate::lenient::string_or_empty")]
    pub industry: String,
    #[serde(default, deserialize_with = "crate::lenient::number_or_zero")]
    pub relevance_score: f64,
    #[serde(default, deserialize_with = "crate::lenient::text")]
    pub pdf_url: Option<String>,
}

/// Body of a case-study fetch: `{ "case_studies": [...] }`.
///
/// Optional fields that are null or mistyped fall back to their empty value;
/// an entry without a usable `title` is skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyBatch {
    #[serde(default, deserialize_with = "crate::lenient::list")]
    pub case_studies: Vec<CaseStudy>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_parses_with_sparse_fields() {
        let batch: CaseStudyBatch = serde_json::from_str(
            r#"{"case_studies": [
                {"title": "Acme rollout", "relevance_score": 87.5, "pdf_url": "https://x/acme.pdf"},
                {"title": "Globex", "categories": ["Retail"], "keywords": ["pos"]}
            ]}"#,
        )
        .unwrap();
        assert_eq!(batch.case_studies.len(), 2);
        assert_eq!(batch.case_studies[0].relevance_score, 87.5);
        assert_eq!(batch.case_studies[1].excerpt, "");
        assert!(batch.case_studies[1].pdf_url.is_none());
    }

    #[test]
    fn null_optional_fields_fall_back_to_empty() {
        let batch: CaseStudyBatch = serde_json::from_str(
            r#"{"case_studies": [
                {"title": "A", "industry": null, "categories": null, "excerpt": 4,
                 "keywords": ["ok", null], "relevance_score": 50, "pdf_url": null}
            ]}"#,
        )
        .unwrap();
        assert_eq!(batch.case_studies.len(), 1);
        let study = &batch.case_studies[0];
        assert_eq!(study.industry, "");
        assert_eq!(study.excerpt, "");
        assert!(study.categories.is_empty());
        assert_eq!(study.keywords, vec!["ok"]);
        assert_eq!(study.relevance_score, 50.0);
        assert!(study.pdf_url.is_none());
    }

    #[test]
    fn entry_without_title_is_skipped() {
        let batch: CaseStudyBatch = serde_json::from_str(
            r#"{"case_studies": [{"title": null}, {"excerpt": "no title"}, {"title": "Kept"}]}"#,
        )
        .unwrap();
        assert_eq!(batch.case_studies.len(), 1);
        assert_eq!(batch.case_studies[0].title, "Kept");

        let empty: CaseStudyBatch = serde_json::from_str(r#"{"case_studies": null}"#).unwrap();
        assert!(empty.case_studies.is_empty());
    }

    #[test]
    fn relevance_score_survives_roundtrip_unscaled() {
        let study = CaseStudy {
            title: "T".into(),
            excerpt: String::new(),
            categories: vec![],
            keywords: vec![],
            industry: "SaaS".into(),
            relevance_score: 92.0,
            pdf_url: None,
        };
        let json = serde_json::to_value(&study).unwrap();
        assert_eq!(json["relevance_score"], 92.0);
    }
}
