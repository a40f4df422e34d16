//! `keywordNotUsed`: the one rule whose answer arrives after the pass.

use std::sync::Arc;
use std::time::{Duration, Instant};

use contentscore_core::config::NoveltyConfig;
use contentscore_core::errors::{NoveltyError, RuleError, ScoreErrorCode};
use contentscore_core::events::types::{
    ErrorEvent, NoveltyQueryFailedEvent, NoveltyQueryIssuedEvent,
};
use contentscore_core::events::EventDispatcher;
use contentscore_core::traits::{OverrideProvider, TextProvider};

use super::client::{NoveltyClient, NoveltyRequest};
use super::state::{Lookup, NoveltyMemo, NoveltyState};
use super::worker::{NoveltyCompletion, NoveltyWorker};
use crate::paper::Paper;
use crate::research::Researcher;
use crate::rules::ids;
use crate::rules::variants::tr;
use crate::rules::{AnalysisResult, Rule};

pub const SEARCHING_TEXT: &str = "We are searching in database.";

/// Corrected result for a keyword, produced when its query completes.
#[derive(Debug, Clone, PartialEq)]
pub struct NoveltyUpdate {
    pub keyword: String,
    pub rule_id: &'static str,
    pub result: AnalysisResult,
}

/// Focus keyword not used by any other content object.
///
/// The first pass that sees a keyword queues one query and returns a
/// placeholder. While the query is in flight the keyword is assumed novel.
/// Once answered, the result is memoized for the rest of the session and
/// an update is handed out through [`poll_updates`](Self::poll_updates).
pub struct KeywordNotUsed {
    score: u32,
    object_id: u64,
    object_type: String,
    focus_keyword_link: String,
    memo: NoveltyMemo,
    worker: NoveltyWorker,
    events: EventDispatcher,
}

impl KeywordNotUsed {
    pub fn new(
        overrides: &dyn OverrideProvider,
        config: &NoveltyConfig,
        client: Arc<dyn NoveltyClient>,
        events: EventDispatcher,
    ) -> Result<Self, NoveltyError> {
        Ok(Self {
            score: overrides.score(ids::KEYWORD_NOT_USED, 2),
            object_id: config.effective_object_id(),
            object_type: config.effective_object_type().to_string(),
            focus_keyword_link: config.effective_focus_keyword_link().to_string(),
            memo: NoveltyMemo::new(),
            worker: NoveltyWorker::spawn(client, config.effective_queue_capacity())?,
            events,
        })
    }

    pub fn state(&self, keyword: &str) -> Option<NoveltyState> {
        self.memo.state(keyword)
    }

    /// Drop the memo entry so the next pass asks again.
    pub fn forget(&self, keyword: &str) {
        self.memo.forget(keyword);
    }

    /// Link to the content already using `keyword`.
    pub fn focus_keyword_link(&self, keyword: &str) -> String {
        self.focus_keyword_link
            .replace("%focus_keyword%", keyword)
            .replace("%post_type%", &self.object_type)
    }

    /// Apply every completion received so far. Non-blocking.
    pub fn poll_updates(&self, text: &dyn TextProvider) -> Vec<NoveltyUpdate> {
        self.worker
            .drain()
            .into_iter()
            .filter_map(|completion| self.apply(completion, text))
            .collect()
    }

    /// Block until one query resolves or `timeout` passes. Failed
    /// queries are applied on the way and do not end the wait.
    pub fn wait_for_update(&self, timeout: Duration, text: &dyn TextProvider) -> Option<NoveltyUpdate> {
        let deadline = Instant::now() + timeout;
        while let Some(completion) = self.worker.recv_until(deadline) {
            if let Some(update) = self.apply(completion, text) {
                return Some(update);
            }
        }
        None
    }

    fn apply(&self, completion: NoveltyCompletion, text: &dyn TextProvider) -> Option<NoveltyUpdate> {
        let NoveltyCompletion { keyword, outcome } = completion;
        match outcome {
            Ok(is_new) => {
                tracing::debug!(keyword = %keyword, is_new, "novelty query resolved");
                self.memo.resolve(&keyword, is_new);
                let mut result = self.base_result(text);
                self.fill_resolved(&mut result, &keyword, is_new, text);
                Some(NoveltyUpdate {
                    keyword,
                    rule_id: ids::KEYWORD_NOT_USED,
                    result,
                })
            }
            Err(error) => {
                self.query_failed(&keyword, &error);
                None
            }
        }
    }

    fn query_failed(&self, keyword: &str, error: &NoveltyError) {
        tracing::warn!(keyword, error = %error.coded_string(), "novelty query failed; keyword stays pending");
        self.memo.fail(keyword);
        self.events.emit_novelty_query_failed(&NoveltyQueryFailedEvent {
            keyword: keyword.to_string(),
            message: error.to_string(),
        });
    }

    fn issue_query(&self, keyword: &str) {
        let request = NoveltyRequest {
            keyword: keyword.to_string(),
            object_id: self.object_id,
            object_type: self.object_type.clone(),
        };
        match self.worker.submit(request) {
            Ok(()) => {
                tracing::debug!(keyword, object_id = self.object_id, "novelty query issued");
                self.events.emit_novelty_query_issued(&NoveltyQueryIssuedEvent {
                    keyword: keyword.to_string(),
                    object_id: self.object_id,
                    object_type: self.object_type.clone(),
                });
            }
            Err(error) => {
                // The worker could not take the request at all.
                self.events.emit_error(&ErrorEvent {
                    message: error.to_string(),
                    error_code: error.error_code().to_string(),
                });
                self.query_failed(keyword, &error);
            }
        }
    }

    fn base_result(&self, text: &dyn TextProvider) -> AnalysisResult {
        AnalysisResult::new(self.score).with_empty(self.empty_text(text))
    }

    fn fill_resolved(&self, result: &mut AnalysisResult, keyword: &str, is_new: bool, text: &dyn TextProvider) {
        if is_new {
            result.set_score(Some(self.score));
            result.set_text(tr(text, "You haven't used this Focus Keyword before.", &[]));
        } else {
            let already_used = format!(
                "<a target=\"_blank\" href=\"{}\">{}</a>",
                self.focus_keyword_link(keyword),
                tr(text, "already used", &[])
            );
            result.set_score(None);
            result.set_text(tr(text, "You have %1$s this Focus Keyword.", &[&already_used]));
        }
    }
}

impl Rule for KeywordNotUsed {
    fn id(&self) -> &'static str {
        ids::KEYWORD_NOT_USED
    }

    fn max_score(&self, _short_locale: &str) -> u32 {
        self.score
    }

    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_keyword()
    }

    fn empty_text(&self, text: &dyn TextProvider) -> String {
        tr(text, "Set a Focus Keyword for this content.", &[])
    }

    fn evaluate(
        &self,
        paper: &Paper,
        _researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError> {
        let keyword = paper.keyword_lower();
        let mut result = self.new_result(paper, text);
        match self.memo.begin(keyword) {
            Lookup::Query => {
                self.issue_query(keyword);
                result.set_text(tr(text, SEARCHING_TEXT, &[]));
            }
            // Not authoritative yet: show the optimistic answer.
            Lookup::Waiting => self.fill_resolved(&mut result, keyword, true, text),
            Lookup::Known { is_new } => self.fill_resolved(&mut result, keyword, is_new, text),
        }
        Ok(result)
    }
}

impl std::fmt::Debug for KeywordNotUsed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeywordNotUsed")
            .field("score", &self.score)
            .field("object_id", &self.object_id)
            .field("object_type", &self.object_type)
            .field("worker", &self.worker)
            .finish()
    }
}
