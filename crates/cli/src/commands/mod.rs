//! Subcommand implementations and the helpers they share.

pub mod case_studies;
pub mod compose;
pub mod config_cmd;
pub mod extract;
pub mod onboard;
pub mod score;
pub mod value_props;

use prospectlens_config::{AppConfig, ConfigError};
use prospectlens_core::{InsightId, Profile};
use prospectlens_extractor::{Extraction, Extractor};
use prospectlens_selection::SelectionState;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Load the config from `path`, or from the default location.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    match path {
        Some(path) => AppConfig::load_with_env(path),
        None => AppConfig::load(),
    }
}

pub fn config_file(path: Option<&Path>) -> PathBuf {
    path.map(Path::to_path_buf)
        .unwrap_or_else(|| AppConfig::config_dir().join("config.toml"))
}

/// Read and parse a JSON file.
pub async fn read_json(path: &Path) -> Result<Value, Box<dyn std::error::Error>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let value = serde_json::from_str(&content)
        .map_err(|e| format!("Invalid JSON in {}: {e}", path.display()))?;
    Ok(value)
}

/// A profile loaded from disk and run through the extractor.
pub struct Session {
    pub raw: Value,
    pub profile: Profile,
    pub extraction: Extraction,
    pub state: SelectionState,
}

impl Session {
    pub async fn open(
        config: &AppConfig,
        profile_path: &Path,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = read_json(profile_path).await?;
        let profile = Profile::from_value(&raw);
        let extraction = Extractor::from_config(config)?.extract(&profile);
        let state = SelectionState::with_insights(extraction.insights.clone());
        Ok(Self {
            raw,
            profile,
            extraction,
            state,
        })
    }

    /// Apply `--toggle` arguments. Unknown ids are logged and skipped.
    pub fn apply_toggles(&mut self, toggles: &[String]) -> Result<(), Box<dyn std::error::Error>> {
        for raw in toggles {
            let id: InsightId = raw.parse()?;
            if !self.state.toggle(id) {
                tracing::warn!(%id, "No insight with that id, ignoring toggle");
            }
        }
        Ok(())
    }
}
