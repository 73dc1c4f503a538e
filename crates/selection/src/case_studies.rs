//! Case-study display list, search and membership.

use prospectlens_core::CaseStudy;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// The currently fetched case studies plus the titles the user picked.
///
/// Membership is keyed by title and is kept apart from the fetched list, so
/// a chosen study survives being searched out of view or dropped by a later
/// fetch.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CaseStudySelector {
    available: Vec<CaseStudy>,
    selected: Vec<CaseStudy>,
}

impl CaseStudySelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the fetched list. Later duplicates of a title are dropped.
    pub fn replace_all(&mut self, studies: Vec<CaseStudy>) {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(studies.len());
        for study in studies {
            if seen.insert(study.title.clone()) {
                kept.push(study);
            } else {
                warn!(title = %study.title, "Dropping duplicate case study");
            }
        }
        self.available = kept;
        info!(
            available = self.available.len(),
            selected = self.selected.len(),
            "Replaced case studies"
        );
    }

    pub fn available(&self) -> &[CaseStudy] {
        &self.available
    }

    /// Remove `title` if selected, else add it when it is in the current
    /// fetch. Returns whether membership changed.
    pub fn toggle(&mut self, title: &str) -> bool {
        if let Some(pos) = self.selected.iter().position(|s| s.title == title) {
            self.selected.remove(pos);
            debug!(title, "Deselected case study");
            return true;
        }
        match self.available.iter().find(|s| s.title == title) {
            Some(study) => {
                self.selected.push(study.clone());
                debug!(title, "Selected case study");
                true
            }
            None => {
                debug!(title, "Ignoring toggle for unknown case study");
                false
            }
        }
    }

    pub fn is_selected(&self, title: &str) -> bool {
        self.selected.iter().any(|s| s.title == title)
    }

    /// Selected studies in the order they were picked.
    pub fn selected(&self) -> &[CaseStudy] {
        &self.selected
    }

    /// Studies from the current fetch matching `query`.
    pub fn search(&self, query: &str) -> Vec<&CaseStudy> {
        self.available.iter().filter(|s| matches_query(s, query)).collect()
    }

    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

/// Case-insensitive substring match over the study's searchable text.
/// A blank query matches everything.
pub fn matches_query(study: &CaseStudy, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    let haystack = format!(
        "{} {} {} {}",
        study.title,
        study.excerpt,
        study.categories.join(" "),
        study.keywords.join(" ")
    )
    .to_lowercase();
    haystack.contains(&needle)
}
