//! Insight records — single derived facts about a profile.

use crate::category::Category;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Marker appended to display text that was cut short.
pub const ELLIPSIS: &str = "...";

/// Default display-text bound, in characters.
pub const DEFAULT_DISPLAY_LIMIT: usize = 200;

/// Identifier of an insight, unique within one extraction run.
///
/// Ids are handed out sequentially, so they also encode insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InsightId(pub u32);

impl std::fmt::Display for InsightId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "insight-{}", self.0)
    }
}

impl FromStr for InsightId {
    type Err = crate::Error;

    /// Accepts both `insight-7` and a bare `7`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix("insight-").unwrap_or(trimmed);
        digits
            .parse::<u32>()
            .map(InsightId)
            .map_err(|_| crate::Error::InvalidInsightId(trimmed.to_string()))
    }
}

/// A single derived fact about a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub id: InsightId,
    pub category: Category,
    pub icon: String,
    pub title: String,
    /// Display text, bounded to the display limit plus [`ELLIPSIS`].
    pub content: String,
    /// Untruncated text, present only when `content` was cut short.
    #[serde(rename = "fullContent", default, skip_serializing_if = "Option::is_none")]
    pub full_content: Option<String>,
    pub selected: bool,
}

impl Insight {
    /// Build an insight, truncating `text` to `display_limit` characters.
    ///
    /// The insight starts unselected; extractors apply the category default.
    pub fn new(
        id: InsightId,
        category: Category,
        title: impl Into<String>,
        text: impl Into<String>,
        display_limit: usize,
    ) -> Self {
        let text = text.into();
        let (content, full_content) = match truncate(&text, display_limit) {
            Some(short) => (short, Some(text)),
            None => (text, None),
        };
        Self {
            id,
            category,
            icon: category.icon().to_string(),
            title: title.into(),
            content,
            full_content,
            selected: false,
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Text to send downstream: the full text when truncated, else the
    /// display text.
    pub fn payload_content(&self) -> &str {
        self.full_content.as_deref().unwrap_or(&self.content)
    }

    pub fn toggle(&mut self) {
        self.selected = !self.selected;
    }
}

/// Cut `text` to its first `limit` characters plus [`ELLIPSIS`].
///
/// Returns `None` when the text already fits, so callers can tell whether
/// truncation happened.
pub fn truncate(text: &str, limit: usize) -> Option<String> {
    match text.char_indices().nth(limit) {
        Some((byte_idx, _)) => {
            let mut short = String::with_capacity(byte_idx + ELLIPSIS.len());
            short.push_str(&text[..byte_idx]);
            short.push_str(ELLIPSIS);
            Some(short)
        }
        None => None,
    }
}
