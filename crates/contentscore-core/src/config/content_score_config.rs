//! Top-level contentscore configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, NoveltyConfig, ScoreConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Host overrides (applied via `apply_host_overrides`)
/// 2. Environment variables (`CONTENTSCORE_*`)
/// 3. Project config (`contentscore.toml` in project root)
/// 4. User config (`~/.contentscore/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ContentScoreConfig {
    pub analysis: AnalysisConfig,
    pub scores: ScoreConfig,
    pub novelty: NoveltyConfig,
}

/// Values the embedding host knows at startup and that beat every file.
#[derive(Debug, Clone, Default)]
pub struct HostOverrides {
    pub locale: Option<String>,
    pub site_url: Option<String>,
    pub object_id: Option<u64>,
    pub object_type: Option<String>,
    pub has_toc_plugin: Option<bool>,
}

const ENV_KEYS: &[&str] = &[
    "CONTENTSCORE_LOCALE",
    "CONTENTSCORE_SITE_URL",
    "CONTENTSCORE_PARAGRAPH_WORD_LIMIT",
    "CONTENTSCORE_PERMALINK_MAX_LENGTH",
    "CONTENTSCORE_OBJECT_ID",
    "CONTENTSCORE_OBJECT_TYPE",
    "CONTENTSCORE_NOVELTY_QUEUE_CAPACITY",
];

impl ContentScoreConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, host: Option<&HostOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("contentscore.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config)?;

        // Layer 1 (highest priority): host
        if let Some(host) = host {
            Self::apply_host_overrides(&mut config, host);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &ContentScoreConfig) -> Result<(), ConfigError> {
        if config.analysis.paragraph_word_limit == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.paragraph_word_limit".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.analysis.permalink_max_length == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "analysis.permalink_max_length".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.novelty.queue_capacity == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "novelty.queue_capacity".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (name, table) in &config.scores.boundaries {
            if table.is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("scores.boundaries.{name}"),
                    message: "must contain at least one boundary".to_string(),
                });
            }
            if table.windows(2).any(|w| w[0].boundary <= w[1].boundary) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("scores.boundaries.{name}"),
                    message: "boundaries must be strictly descending".to_string(),
                });
            }
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".contentscore").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are ignored.
    fn merge_toml_file(config: &mut ContentScoreConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: ContentScoreConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it has a value.
    fn merge(base: &mut ContentScoreConfig, other: &ContentScoreConfig) {
        // Analysis
        if other.analysis.locale.is_some() {
            base.analysis.locale = other.analysis.locale.clone();
        }
        if other.analysis.site_url.is_some() {
            base.analysis.site_url = other.analysis.site_url.clone();
        }
        if !other.analysis.enabled_rules.is_empty() {
            base.analysis.enabled_rules = other.analysis.enabled_rules.clone();
        }
        if !other.analysis.disabled_rules.is_empty() {
            base.analysis.disabled_rules = other.analysis.disabled_rules.clone();
        }
        if other.analysis.paragraph_word_limit.is_some() {
            base.analysis.paragraph_word_limit = other.analysis.paragraph_word_limit;
        }
        if other.analysis.permalink_max_length.is_some() {
            base.analysis.permalink_max_length = other.analysis.permalink_max_length;
        }
        if !other.analysis.power_words.is_empty() {
            base.analysis.power_words = other.analysis.power_words.clone();
        }
        if other.analysis.has_toc_plugin.is_some() {
            base.analysis.has_toc_plugin = other.analysis.has_toc_plugin;
        }

        // Scores: per-key, so a project file can override one cap of many.
        for (name, score) in &other.scores.scores {
            base.scores.scores.insert(name.clone(), *score);
        }
        for (name, table) in &other.scores.boundaries {
            base.scores.boundaries.insert(name.clone(), table.clone());
        }

        // Novelty
        if other.novelty.object_id.is_some() {
            base.novelty.object_id = other.novelty.object_id;
        }
        if other.novelty.object_type.is_some() {
            base.novelty.object_type = other.novelty.object_type.clone();
        }
        if other.novelty.focus_keyword_link.is_some() {
            base.novelty.focus_keyword_link = other.novelty.focus_keyword_link.clone();
        }
        if other.novelty.queue_capacity.is_some() {
            base.novelty.queue_capacity = other.novelty.queue_capacity;
        }
    }

    /// Apply environment variable overrides.
    /// Numeric variables that fail to parse are rejected, not ignored.
    fn apply_env_overrides(config: &mut ContentScoreConfig) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("CONTENTSCORE_LOCALE") {
            config.analysis.locale = Some(val);
        }
        if let Ok(val) = std::env::var("CONTENTSCORE_SITE_URL") {
            config.analysis.site_url = Some(val);
        }
        if let Some(v) = parse_env::<u32>("CONTENTSCORE_PARAGRAPH_WORD_LIMIT")? {
            config.analysis.paragraph_word_limit = Some(v);
        }
        if let Some(v) = parse_env::<u32>("CONTENTSCORE_PERMALINK_MAX_LENGTH")? {
            config.analysis.permalink_max_length = Some(v);
        }
        if let Some(v) = parse_env::<u64>("CONTENTSCORE_OBJECT_ID")? {
            config.novelty.object_id = Some(v);
        }
        if let Ok(val) = std::env::var("CONTENTSCORE_OBJECT_TYPE") {
            config.novelty.object_type = Some(val);
        }
        if let Some(v) = parse_env::<usize>("CONTENTSCORE_NOVELTY_QUEUE_CAPACITY")? {
            config.novelty.queue_capacity = Some(v);
        }
        Ok(())
    }

    /// Apply host overrides (highest priority).
    fn apply_host_overrides(config: &mut ContentScoreConfig, host: &HostOverrides) {
        if let Some(ref v) = host.locale {
            config.analysis.locale = Some(v.clone());
        }
        if let Some(ref v) = host.site_url {
            config.analysis.site_url = Some(v.clone());
        }
        if let Some(v) = host.object_id {
            config.novelty.object_id = Some(v);
        }
        if let Some(ref v) = host.object_type {
            config.novelty.object_type = Some(v.clone());
        }
        if let Some(v) = host.has_toc_plugin {
            config.analysis.has_toc_plugin = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }

    /// Names of every environment variable `load` reads.
    pub fn env_keys() -> &'static [&'static str] {
        ENV_KEYS
    }
}

fn parse_env<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(val) => val
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse {val:?}"),
            }),
        Err(_) => Ok(None),
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
