//! Configuration loading, validation, and management for ProspectLens.
//!
//! Loads configuration from `~/.prospectlens/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use prospectlens_core::CategoryDefaults;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable overriding `focus.default_tags` (comma-separated).
pub const ENV_FOCUS: &str = "PROSPECTLENS_FOCUS";
/// Environment variable overriding `extraction.display_limit`.
pub const ENV_DISPLAY_LIMIT: &str = "PROSPECTLENS_DISPLAY_LIMIT";

/// The root configuration structure.
///
/// Maps directly to `~/.prospectlens/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Insight extraction settings
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Default selection per insight category
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Focus filter settings
    #[serde(default)]
    pub focus: FocusConfig,

    /// Defaults for outbound generation requests
    #[serde(default)]
    pub compose: ComposeConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Maximum characters of display text before truncation
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,

    /// Per-field caps for list-valued profile fields
    #[serde(default)]
    pub limits: ListLimits,
}

fn default_display_limit() -> usize {
    prospectlens_core::DEFAULT_DISPLAY_LIMIT
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            display_limit: default_display_limit(),
            limits: ListLimits::default(),
        }
    }
}

/// How many entries of each list field turn into insights.
///
/// For fields rendered as a single joined insight (skills, languages,
/// top traits) the cap counts list items instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListLimits {
    #[serde(default = "default_posts")]
    pub posts: usize,
    #[serde(default = "default_experience")]
    pub experience: usize,
    #[serde(default = "default_three")]
    pub recommendations: usize,
    #[serde(default = "default_five")]
    pub certifications: usize,
    #[serde(default = "default_three")]
    pub education: usize,
    #[serde(default = "default_skills")]
    pub skills: usize,
    #[serde(default = "default_five")]
    pub languages: usize,
    #[serde(default = "default_three")]
    pub featured: usize,
    #[serde(default = "default_three")]
    pub shared_customers: usize,
    #[serde(default = "default_three")]
    pub work_milestones: usize,
    #[serde(default = "default_five")]
    pub top_traits: usize,
}

fn default_posts() -> usize {
    3
}
fn default_experience() -> usize {
    12
}
fn default_skills() -> usize {
    10
}
fn default_three() -> usize {
    3
}
fn default_five() -> usize {
    5
}

impl Default for ListLimits {
    fn default() -> Self {
        Self {
            posts: default_posts(),
            experience: default_experience(),
            recommendations: default_three(),
            certifications: default_five(),
            education: default_three(),
            skills: default_skills(),
            languages: default_five(),
            featured: default_three(),
            shared_customers: default_three(),
            work_milestones: default_three(),
            top_traits: default_five(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Category display name → preselected after extraction.
    /// Categories left out keep the built-in default.
    #[serde(default = "default_selected")]
    pub default_selected: BTreeMap<String, bool>,
}

fn default_selected() -> BTreeMap<String, bool> {
    CategoryDefaults::builtin().to_names()
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            default_selected: default_selected(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Tags used when a request names no focus at all
    #[serde(default = "default_focus_tags")]
    pub default_tags: Vec<String>,
}

fn default_focus_tags() -> Vec<String> {
    vec!["recent_posts".into()]
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            default_tags: default_focus_tags(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComposeConfig {
    #[serde(default = "default_content_type")]
    pub content_type: String,

    #[serde(default = "default_writing_style")]
    pub writing_style: String,

    #[serde(default = "default_message_length")]
    pub message_length: String,
}

fn default_content_type() -> String {
    "email".into()
}
fn default_writing_style() -> String {
    "professional".into()
}
fn default_message_length() -> String {
    "medium".into()
}

impl Default for ComposeConfig {
    fn default() -> Self {
        Self {
            content_type: default_content_type(),
            writing_style: default_writing_style(),
            message_length: default_message_length(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.prospectlens/config.toml).
    ///
    /// Also checks environment variables:
    /// - `PROSPECTLENS_FOCUS` — default focus tags, comma-separated
    /// - `PROSPECTLENS_DISPLAY_LIMIT` — display-text bound
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        Self::load_with_env(&config_path)
    }

    /// Load from `path`, then apply environment overrides.
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load_from(path)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (the process environment in
    /// production).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(tags) = lookup(ENV_FOCUS) {
            let tags: Vec<String> = tags
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            if !tags.is_empty() {
                self.focus.default_tags = tags;
            }
        }

        if let Some(limit) = lookup(ENV_DISPLAY_LIMIT) {
            self.extraction.display_limit = limit.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "{ENV_DISPLAY_LIMIT} must be a positive integer, got {limit:?}"
                ))
            })?;
        }

        self.validate()
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".prospectlens")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.extraction.display_limit == 0 {
            return Err(ConfigError::ValidationError(
                "extraction.display_limit must be greater than 0".into(),
            ));
        }

        if self.focus.default_tags.is_empty() {
            return Err(ConfigError::ValidationError(
                "focus.default_tags must name at least one tag".into(),
            ));
        }

        self.category_defaults()?;
        Ok(())
    }

    /// The category → default-selection table, built-in values overridden
    /// by `[selection.default_selected]`.
    pub fn category_defaults(&self) -> Result<CategoryDefaults, ConfigError> {
        CategoryDefaults::with_overrides(
            self.selection
                .default_selected
                .iter()
                .map(|(name, selected)| (name.as_str(), *selected)),
        )
        .map_err(|e| ConfigError::ValidationError(format!("selection.default_selected: {e}")))
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            extraction: ExtractionConfig::default(),
            selection: SelectionConfig::default(),
            focus: FocusConfig::default(),
            compose: ComposeConfig::default(),
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
