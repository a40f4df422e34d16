//! RuleSet: the ordered list of rules built once from configuration.

use std::fmt;
use std::sync::Arc;

use contentscore_core::config::ContentScoreConfig;
use contentscore_core::traits::OverrideProvider;

use super::ids;
use super::variants::*;
use super::Rule;

/// Ordered rule list. Caps and boundary tables are resolved through the
/// override provider when the set is built, so they hold for every pass.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Arc<dyn Rule>>,
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.ids()).finish()
    }
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The synchronous rules enabled by `config`, caps resolved through
    /// `overrides`.
    pub fn standard(config: &ContentScoreConfig, overrides: &dyn OverrideProvider) -> Self {
        let analysis = &config.analysis;
        let mut set = Self::new();
        for id in ids::STANDARD {
            if !analysis.is_rule_enabled(id) {
                tracing::debug!(rule_id = id, "rule disabled by configuration");
                continue;
            }
            let rule: Arc<dyn Rule> = match id {
                ids::LENGTH_CONTENT => Arc::new(LengthContent::new(overrides)),
                ids::CONTENT_HAS_SHORT_PARAGRAPHS => Arc::new(ContentHasShortParagraphs::new(
                    overrides,
                    analysis.effective_paragraph_word_limit(),
                )),
                ids::KEYWORD_IN_TITLE => Arc::new(KeywordInTitle::new(overrides)),
                ids::TITLE_START_WITH_KEYWORD => Arc::new(TitleStartWithKeyword::new(overrides)),
                ids::TITLE_HAS_NUMBER => Arc::new(TitleHasNumber::new(overrides)),
                ids::TITLE_HAS_POWER_WORDS => {
                    Arc::new(TitleHasPowerWords::new(overrides, &analysis.power_words))
                }
                ids::LENGTH_PERMALINK => Arc::new(LengthPermalink::new(
                    overrides,
                    analysis.effective_permalink_max_length(),
                )),
                ids::LINKS_HAS_EXTERNALS => Arc::new(LinksHasExternals::new(overrides)),
                ids::LINKS_NOT_ALL_EXTERNALS => Arc::new(LinksNotAllExternals::new(overrides)),
                ids::KEYWORD_DENSITY => Arc::new(KeywordDensity::new(overrides)),
                ids::KEYWORD_IN_IMAGE_ALT => Arc::new(KeywordInImageAlt::new(overrides)),
                ids::CONTENT_HAS_ASSETS => Arc::new(ContentHasAssets::new(overrides)),
                ids::HAS_PRODUCT_SCHEMA => Arc::new(HasProductSchema::new(overrides)),
                ids::CONTENT_AI => Arc::new(ContentAi::new(
                    overrides,
                    config.novelty.effective_object_type(),
                )),
                ids::CONTENT_HAS_TOC => Arc::new(ContentHasToc::new(
                    overrides,
                    analysis.effective_has_toc_plugin(),
                )),
                _ => continue,
            };
            set.rules.push(rule);
        }
        set
    }

    /// Append a rule, replacing any rule with the same id in place.
    pub fn with_rule(mut self, rule: Arc<dyn Rule>) -> Self {
        self.push(rule);
        self
    }

    pub fn push(&mut self, rule: Arc<dyn Rule>) {
        match self.rules.iter_mut().find(|r| r.id() == rule.id()) {
            Some(slot) => *slot = rule,
            None => self.rules.push(rule),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Rule>> {
        self.rules.iter().find(|r| r.id() == id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.rules.iter()
    }

    pub fn as_slice(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
