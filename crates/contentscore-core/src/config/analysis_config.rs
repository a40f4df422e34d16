//! Analysis configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the rule set and research registry.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Full locale of the content, e.g. `en_US`. Default: `en_US`.
    pub locale: Option<String>,
    /// Site URL used to tell internal links from external ones.
    pub site_url: Option<String>,
    /// Rule ids to run. Empty means every standard rule.
    #[serde(default)]
    pub enabled_rules: Vec<String>,
    /// Rule ids never to run, applied after `enabled_rules`.
    #[serde(default)]
    pub disabled_rules: Vec<String>,
    /// Paragraphs longer than this many words count as long. Default: 120.
    pub paragraph_word_limit: Option<u32>,
    /// Longest permalink that still earns the permalink score. Default: 75.
    pub permalink_max_length: Option<u32>,
    /// Power words checked against the title. Empty disables the rule.
    #[serde(default)]
    pub power_words: Vec<String>,
    /// Whether a table-of-contents plugin is active on the host.
    pub has_toc_plugin: Option<bool>,
}

impl AnalysisConfig {
    /// Returns the effective locale, defaulting to `en_US`.
    pub fn effective_locale(&self) -> &str {
        self.locale.as_deref().unwrap_or("en_US")
    }

    /// Returns the effective paragraph word limit, defaulting to 120.
    pub fn effective_paragraph_word_limit(&self) -> u32 {
        self.paragraph_word_limit.unwrap_or(120)
    }

    /// Returns the effective permalink length limit, defaulting to 75.
    pub fn effective_permalink_max_length(&self) -> u32 {
        self.permalink_max_length.unwrap_or(75)
    }

    pub fn effective_has_toc_plugin(&self) -> bool {
        self.has_toc_plugin.unwrap_or(false)
    }

    /// Whether `rule_id` survives the enabled/disabled lists.
    pub fn is_rule_enabled(&self, rule_id: &str) -> bool {
        let enabled = self.enabled_rules.is_empty()
            || self.enabled_rules.iter().any(|r| r == rule_id);
        enabled && !self.disabled_rules.iter().any(|r| r == rule_id)
    }
}
