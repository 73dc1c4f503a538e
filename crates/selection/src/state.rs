//! Insight selection.

use crate::case_studies::CaseStudySelector;
use prospectlens_core::{Category, Insight, InsightId};
use serde::Serialize;
use tracing::{debug, info};

/// The current insights plus the user's selection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SelectionState {
    insights: Vec<Insight>,
    /// Case-study membership, independent of the insights.
    pub case_studies: CaseStudySelector,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a fresh extraction.
    pub fn with_insights(insights: Vec<Insight>) -> Self {
        let mut state = Self::new();
        state.replace_all(insights);
        state
    }

    /// Replace every insight. Prior choices are discarded; each new
    /// insight keeps its own `selected` flag.
    pub fn replace_all(&mut self, insights: Vec<Insight>) {
        let previous = self.insights.len();
        self.insights = insights;
        info!(
            previous,
            insights = self.insights.len(),
            selected = self.selected_count(),
            "Replaced insights"
        );
    }

    /// Flip one insight. Unknown ids are a no-op and return `false`.
    pub fn toggle(&mut self, id: InsightId) -> bool {
        match self.insights.iter_mut().find(|i| i.id == id) {
            Some(insight) => {
                insight.toggle();
                debug!(%id, selected = insight.selected, "Toggled insight");
                true
            }
            None => {
                debug!(%id, "Ignoring toggle for unknown insight");
                false
            }
        }
    }

    /// All insights in extraction order.
    pub fn all_insights(&self) -> &[Insight] {
        &self.insights
    }

    /// The selected subset, in extraction order.
    pub fn selected_insights(&self) -> Vec<&Insight> {
        self.insights.iter().filter(|i| i.selected).collect()
    }

    /// Owned copy of the selected subset.
    pub fn selected_cloned(&self) -> Vec<Insight> {
        self.insights.iter().filter(|i| i.selected).cloned().collect()
    }

    pub fn selected_count(&self) -> usize {
        self.insights.iter().filter(|i| i.selected).count()
    }

    pub fn insight(&self, id: InsightId) -> Option<&Insight> {
        self.insights.iter().find(|i| i.id == id)
    }

    pub fn select_all(&mut self) {
        self.insights.iter_mut().for_each(|i| i.selected = true);
    }

    pub fn clear_selection(&mut self) {
        self.insights.iter_mut().for_each(|i| i.selected = false);
    }

    /// Set every insight of `category`; returns how many were touched.
    pub fn set_category(&mut self, category: Category, selected: bool) -> usize {
        let mut touched = 0;
        for insight in self.insights.iter_mut().filter(|i| i.category == category) {
            insight.selected = selected;
            touched += 1;
        }
        debug!(%category, selected, touched, "Set category selection");
        touched
    }

    /// Insights grouped by category, groups ordered by first appearance.
    pub fn by_category(&self) -> Vec<(Category, Vec<&Insight>)> {
        let mut groups: Vec<(Category, Vec<&Insight>)> = Vec::new();
        for insight in &self.insights {
            match groups.iter_mut().find(|(c, _)| *c == insight.category) {
                Some((_, members)) => members.push(insight),
                None => groups.push((insight.category, vec![insight])),
            }
        }
        groups
    }

    pub fn is_empty(&self) -> bool {
        self.insights.is_empty()
    }

    pub fn len(&self) -> usize {
        self.insights.len()
    }
}
