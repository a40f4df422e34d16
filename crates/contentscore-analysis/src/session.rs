//! ScoringSession: one editing session's rules, aggregate and novelty
//! memo, wired together.

use std::sync::Arc;
use std::time::Duration;

use contentscore_core::config::ContentScoreConfig;
use contentscore_core::errors::AnalysisError;
use contentscore_core::events::types::{ResultUpdatedEvent, ScoreChangedEvent};
use contentscore_core::events::{ContentScoreEventHandler, EventDispatcher};
use contentscore_core::traits::{OverrideProvider, PassthroughText, TextProvider};

use crate::analyzer::{Analyzer, RuleFailure};
use crate::novelty::{KeywordNotUsed, NoveltyClient, NoveltyUpdate};
use crate::paper::{normalize, Paper, PaperBuilder};
use crate::research::Researcher;
use crate::results::ResultManager;
use crate::rules::RuleSet;

/// What one keyword's pass produced.
#[derive(Debug, Clone)]
pub struct PassReport {
    pub keyword: String,
    pub score: u32,
    pub failures: Vec<RuleFailure>,
    pub skipped: Vec<String>,
}

pub struct SessionBuilder {
    config: ContentScoreConfig,
    overrides: Option<Arc<dyn OverrideProvider>>,
    text: Arc<dyn TextProvider>,
    novelty_client: Option<Arc<dyn NoveltyClient>>,
    events: EventDispatcher,
    parallel: bool,
}

impl SessionBuilder {
    /// Score overrides. Defaults to the `[scores]` table of the config.
    pub fn overrides(mut self, overrides: Arc<dyn OverrideProvider>) -> Self {
        self.overrides = Some(overrides);
        self
    }

    pub fn text_provider(mut self, text: Arc<dyn TextProvider>) -> Self {
        self.text = text;
        self
    }

    /// Enables the keyword-novelty rule.
    pub fn novelty_client(mut self, client: Arc<dyn NoveltyClient>) -> Self {
        self.novelty_client = Some(client);
        self
    }

    pub fn event_handler(mut self, handler: Arc<dyn ContentScoreEventHandler>) -> Self {
        self.events.register(handler);
        self
    }

    /// Evaluate rules on the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn build(self) -> Result<ScoringSession, AnalysisError> {
        ContentScoreConfig::validate(&self.config)?;

        let overrides: Arc<dyn OverrideProvider> = match self.overrides {
            Some(overrides) => overrides,
            None => Arc::new(self.config.scores.clone()),
        };
        let mut rules = RuleSet::standard(&self.config, overrides.as_ref());

        let novelty = match self.novelty_client {
            Some(client) if self.config.analysis.is_rule_enabled(crate::rules::ids::KEYWORD_NOT_USED) => {
                let rule = Arc::new(KeywordNotUsed::new(
                    overrides.as_ref(),
                    &self.config.novelty,
                    client,
                    self.events.clone(),
                )?);
                rules.push(rule.clone());
                Some(rule)
            }
            _ => None,
        };

        let researcher = Researcher::new(self.config.analysis.site_url.as_deref().unwrap_or(""));
        tracing::info!(rules = rules.len(), novelty = novelty.is_some(), "scoring session ready");

        Ok(ScoringSession {
            analyzer: Analyzer::new(self.events.clone()),
            config: self.config,
            rules,
            researcher,
            results: ResultManager::new(),
            events: self.events,
            text: self.text,
            novelty,
            parallel: self.parallel,
        })
    }
}

/// Scores content for one editing session.
///
/// The aggregate is keyed by normalized keyword. Novelty answers arriving
/// after a pass are merged by [`pump`](Self::pump), and only for keywords
/// the aggregate still holds.
pub struct ScoringSession {
    config: ContentScoreConfig,
    rules: RuleSet,
    researcher: Researcher,
    analyzer: Analyzer,
    results: ResultManager,
    events: EventDispatcher,
    text: Arc<dyn TextProvider>,
    novelty: Option<Arc<KeywordNotUsed>>,
    parallel: bool,
}

impl ScoringSession {
    pub fn builder(config: ContentScoreConfig) -> SessionBuilder {
        SessionBuilder {
            config,
            overrides: None,
            text: Arc::new(PassthroughText),
            novelty_client: None,
            events: EventDispatcher::new(),
            parallel: false,
        }
    }

    /// Paper builder preset with the configured locale.
    pub fn paper(&self) -> PaperBuilder {
        Paper::builder().locale(self.config.analysis.effective_locale())
    }

    /// Score `paper` for its focus keyword and merge into the aggregate.
    pub fn score(&mut self, paper: &Paper, is_primary: bool) -> PassReport {
        let keyword = paper.keyword_lower().to_string();
        let outcome = if self.parallel {
            self.analyzer
                .analyze_parallel(paper, self.rules.as_slice(), &self.researcher, self.text.as_ref())
        } else {
            self.analyzer
                .analyze(paper, self.rules.as_slice(), &self.researcher, self.text.as_ref())
        };

        let previous = self
            .results
            .contains(&keyword)
            .then(|| self.results.get_score(&keyword));
        let score = self.results.update(&keyword, outcome.results, is_primary);
        self.score_changed(&keyword, previous, score);

        PassReport {
            keyword,
            score,
            failures: outcome.failures,
            skipped: outcome.skipped,
        }
    }

    /// Score the focus keyword as primary, then every distinct secondary
    /// keyword against the same content.
    pub fn score_all(&mut self, paper: &Paper) -> Vec<PassReport> {
        let mut reports = vec![self.score(paper, true)];
        let mut seen = vec![paper.keyword_lower().to_string()];
        for secondary in paper.secondary_keywords() {
            let normalized = normalize(secondary);
            if normalized.is_empty() || seen.contains(&normalized) {
                continue;
            }
            let snapshot = paper.with_keyword(secondary);
            reports.push(self.score(&snapshot, false));
            seen.push(normalized);
        }
        reports
    }

    /// Stop tracking `keyword`. Late novelty answers for it are dropped.
    pub fn retire(&mut self, keyword: &str) -> bool {
        self.results.delete_result(&normalize(keyword))
    }

    /// Merge novelty answers received so far. Returns how many were merged.
    pub fn pump(&mut self) -> usize {
        let Some(novelty) = self.novelty.clone() else {
            return 0;
        };
        novelty
            .poll_updates(self.text.as_ref())
            .into_iter()
            .filter(|update| self.apply_update(update))
            .count()
    }

    /// Wait up to `timeout` for one novelty answer, then merge it and
    /// anything else that has arrived.
    pub fn wait_and_pump(&mut self, timeout: Duration) -> usize {
        let Some(novelty) = self.novelty.clone() else {
            return 0;
        };
        let first = novelty
            .wait_for_update(timeout, self.text.as_ref())
            .is_some_and(|update| self.apply_update(&update));
        usize::from(first) + self.pump()
    }

    fn apply_update(&mut self, update: &NoveltyUpdate) -> bool {
        if !self.results.contains(&update.keyword) {
            tracing::debug!(keyword = %update.keyword, "update for retired keyword dropped");
            return false;
        }

        let previous = self.results.get_score(&update.keyword);
        let score = self
            .results
            .update_one(&update.keyword, update.rule_id, update.result.clone());
        self.events.emit_result_updated(&ResultUpdatedEvent {
            keyword: update.keyword.clone(),
            rule_id: update.rule_id.to_string(),
            score: update.result.score(),
            max_score: update.result.max_score(),
            text: update.result.text().to_string(),
        });
        self.score_changed(&update.keyword, Some(previous), score);
        true
    }

    fn score_changed(&self, keyword: &str, previous: Option<u32>, score: u32) {
        if previous != Some(score) {
            self.events.emit_score_changed(&ScoreChangedEvent {
                keyword: keyword.to_string(),
                previous,
                score,
            });
        }
    }

    pub fn results(&self) -> &ResultManager {
        &self.results
    }

    pub fn get_score(&self, keyword: &str) -> u32 {
        self.results.get_score(&normalize(keyword))
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn researcher(&self) -> &Researcher {
        &self.researcher
    }

    pub fn config(&self) -> &ContentScoreConfig {
        &self.config
    }

    pub fn novelty(&self) -> Option<&Arc<KeywordNotUsed>> {
        self.novelty.as_ref()
    }
}

impl std::fmt::Debug for ScoringSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScoringSession")
            .field("rules", &self.rules)
            .field("keywords", &self.results.keywords())
            .field("novelty", &self.novelty.is_some())
            .field("parallel", &self.parallel)
            .finish()
    }
}
