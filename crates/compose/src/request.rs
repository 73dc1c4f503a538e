//! The generation request body.

use prospectlens_config::ComposeConfig;
use prospectlens_core::{CaseStudy, Category, Insight};
use prospectlens_focus::{FocusTag, effective_tags, filter_by_focus, join_tags};
use prospectlens_selection::SelectionState;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

/// Composer inputs that are not part of the selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposeOptions {
    /// Requested focus; empty means the configured default.
    pub focus: Vec<FocusTag>,
    pub content_type: String,
    pub writing_style: String,
    pub message_length: String,
    pub value_proposition: Option<String>,
    pub additional_context: String,
}

impl ComposeOptions {
    pub fn from_config(config: &ComposeConfig) -> Self {
        Self {
            focus: Vec::new(),
            content_type: config.content_type.clone(),
            writing_style: config.writing_style.clone(),
            message_length: config.message_length.clone(),
            value_proposition: None,
            additional_context: String::new(),
        }
    }

    /// Whether a non-blank value proposition was chosen.
    pub fn has_value_proposition(&self) -> bool {
        self.value_proposition
            .as_deref()
            .is_some_and(|v| !v.trim().is_empty())
    }
}

impl Default for ComposeOptions {
    fn default() -> Self {
        Self::from_config(&ComposeConfig::default())
    }
}

/// One selected insight as sent downstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightPayload {
    pub category: Category,
    pub title: String,
    /// Untruncated text when available.
    pub content: String,
    pub icon: String,
}

impl From<&Insight> for InsightPayload {
    fn from(insight: &Insight) -> Self {
        Self {
            category: insight.category,
            title: insight.title.clone(),
            content: insight.payload_content().to_string(),
            icon: insight.icon.clone(),
        }
    }
}

/// Body of a content-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// The inbound profile record, verbatim.
    pub linkedin_data: Value,
    pub selected_insights: Vec<InsightPayload>,
    pub content_type: String,
    /// Effective focus tags, comma-joined.
    pub content_focus: String,
    pub writing_style: String,
    pub value_proposition: String,
    pub additional_context: String,
    pub message_length: String,
    pub case_studies: Vec<CaseStudy>,
}

impl GenerationRequest {
    /// Assemble a request from the current state.
    ///
    /// Fails only when the focus leaves no selected insight.
    pub fn compose(
        raw_profile: &Value,
        state: &SelectionState,
        options: &ComposeOptions,
        focus_default: &[FocusTag],
    ) -> prospectlens_core::Result<Self> {
        let selected = state.selected_cloned();
        let focused = filter_by_focus(&selected, &options.focus, focus_default)?;
        let content_focus = join_tags(effective_tags(&options.focus, focus_default));

        let request = Self {
            linkedin_data: raw_profile.clone(),
            selected_insights: focused.iter().map(InsightPayload::from).collect(),
            content_type: options.content_type.clone(),
            content_focus,
            writing_style: options.writing_style.clone(),
            value_proposition: options
                .value_proposition
                .as_deref()
                .map(str::trim)
                .unwrap_or_default()
                .to_string(),
            additional_context: options.additional_context.trim().to_string(),
            message_length: options.message_length.clone(),
            case_studies: state.case_studies.selected().to_vec(),
        };

        info!(
            insights = request.selected_insights.len(),
            selected = selected.len(),
            focus = %request.content_focus,
            case_studies = request.case_studies.len(),
            "Composed generation request"
        );
        Ok(request)
    }

    pub fn to_json_pretty(&self) -> prospectlens_core::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
