//! Value-proposition catalog.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// A named group of value propositions offered to the composer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuePropositionGroup {
    pub name: String,
    #[serde(default)]
    pub value_props: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_leader_configured: Option<bool>,
}

impl ValuePropositionGroup {
    pub fn is_leader_configured(&self) -> bool {
        self.is_leader_configured.unwrap_or(false)
    }
}

/// Keep the first group of each name, in catalog order.
pub fn dedupe_by_name(groups: Vec<ValuePropositionGroup>) -> Vec<ValuePropositionGroup> {
    let before = groups.len();
    let mut seen = HashSet::new();
    let kept: Vec<_> = groups
        .into_iter()
        .filter(|g| seen.insert(g.name.clone()))
        .collect();
    if kept.len() < before {
        debug!(dropped = before - kept.len(), "Dropped duplicate value propositions");
    }
    kept
}
