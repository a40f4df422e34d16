//! Analyzer: runs a rule list against one snapshot.
//!
//! Non-applicable rules are skipped without being scored. A rule that
//! errors or panics is reported and left out of the map; the rest of the
//! pass continues.

pub mod outcome;

pub use outcome::{AnalysisOutcome, RuleFailure};

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use contentscore_core::errors::{RuleError, ScoreErrorCode};
use contentscore_core::events::types::{
    ErrorEvent, PassCompleteEvent, PassStartedEvent, RuleFailedEvent, RuleSkippedEvent,
};
use contentscore_core::events::EventDispatcher;
use contentscore_core::traits::TextProvider;
use rayon::prelude::*;

use crate::paper::Paper;
use crate::research::Researcher;
use crate::rules::{AnalysisResult, Rule};

enum RuleRun {
    Skipped,
    Scored(AnalysisResult),
    Failed(RuleError),
}

/// Orchestrates one scoring pass.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    events: EventDispatcher,
}

impl Analyzer {
    pub fn new(events: EventDispatcher) -> Self {
        Self { events }
    }

    /// Evaluate `rules` one after another.
    pub fn analyze(
        &self,
        paper: &Paper,
        rules: &[Arc<dyn Rule>],
        researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> AnalysisOutcome {
        let start = Instant::now();
        self.pass_started(paper, rules.len());
        let runs: Vec<(&'static str, RuleRun)> = rules
            .iter()
            .map(|rule| (rule.id(), run_rule(rule.as_ref(), paper, researcher, text)))
            .collect();
        self.collect(paper, runs, start)
    }

    /// Evaluate `rules` on the rayon pool. Rules share nothing mutable, so
    /// the map equals the one [`analyze`](Self::analyze) produces.
    pub fn analyze_parallel(
        &self,
        paper: &Paper,
        rules: &[Arc<dyn Rule>],
        researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> AnalysisOutcome {
        let start = Instant::now();
        self.pass_started(paper, rules.len());
        let runs: Vec<(&'static str, RuleRun)> = rules
            .par_iter()
            .map(|rule| (rule.id(), run_rule(rule.as_ref(), paper, researcher, text)))
            .collect();
        self.collect(paper, runs, start)
    }

    fn pass_started(&self, paper: &Paper, rule_count: usize) {
        tracing::debug!(keyword = %paper.keyword_lower(), rule_count, "analysis pass started");
        self.events.emit_pass_started(&PassStartedEvent {
            keyword: paper.keyword_lower().to_string(),
            rule_count,
        });
    }

    /// Fold per-rule runs into the outcome, emitting events in rule order.
    fn collect(
        &self,
        paper: &Paper,
        runs: Vec<(&'static str, RuleRun)>,
        start: Instant,
    ) -> AnalysisOutcome {
        let mut outcome = AnalysisOutcome::default();
        for (rule_id, run) in runs {
            match run {
                RuleRun::Skipped => {
                    self.events.emit_rule_skipped(&RuleSkippedEvent {
                        rule_id: rule_id.to_string(),
                    });
                    outcome.skipped.push(rule_id.to_string());
                }
                RuleRun::Scored(result) => {
                    outcome.results.insert(rule_id.to_string(), result);
                }
                RuleRun::Failed(error) => {
                    tracing::warn!(rule_id, error = %error.coded_string(), "rule failed; excluded from results");
                    self.events.emit_rule_failed(&RuleFailedEvent {
                        rule_id: rule_id.to_string(),
                        error_code: error.error_code().to_string(),
                        message: error.to_string(),
                    });
                    if matches!(error, RuleError::Panicked { .. }) {
                        self.events.emit_error(&ErrorEvent {
                            message: error.to_string(),
                            error_code: error.error_code().to_string(),
                        });
                    }
                    outcome.failures.push(RuleFailure {
                        rule_id: rule_id.to_string(),
                        error,
                    });
                }
            }
        }

        let duration_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(
            keyword = %paper.keyword_lower(),
            scored = outcome.results.len(),
            skipped = outcome.skipped.len(),
            failed = outcome.failures.len(),
            pass_duration = duration_ms,
            "analysis pass complete"
        );
        self.events.emit_pass_complete(&PassCompleteEvent {
            keyword: paper.keyword_lower().to_string(),
            scored: outcome.results.len(),
            skipped: outcome.skipped.len(),
            failed: outcome.failures.len(),
            duration_ms,
        });
        outcome
    }
}

fn run_rule(
    rule: &dyn Rule,
    paper: &Paper,
    researcher: &Researcher,
    text: &dyn TextProvider,
) -> RuleRun {
    if !rule.is_applicable(paper) {
        return RuleRun::Skipped;
    }

    let start = Instant::now();
    let evaluated = catch_unwind(AssertUnwindSafe(|| rule.evaluate(paper, researcher, text)));
    tracing::debug!(
        rule_id = rule.id(),
        rule_evaluation_time = start.elapsed().as_micros() as u64,
        "rule evaluated"
    );

    match evaluated {
        Ok(Ok(result)) => RuleRun::Scored(result),
        Ok(Err(error)) => RuleRun::Failed(error),
        Err(payload) => RuleRun::Failed(RuleError::Panicked {
            rule_id: rule.id().to_string(),
            message: panic_message(payload.as_ref()),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
