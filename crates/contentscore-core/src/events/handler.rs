//! ContentScoreEventHandler trait, every method a no-op by default.

use super::types::*;

/// Trait for observing scoring activity.
///
/// Handlers override only the events they care about. `Send + Sync` so a
/// handler can be shared with the parallel analyzer.
pub trait ContentScoreEventHandler: Send + Sync {
    // ---- Pass lifecycle ----
    fn on_pass_started(&self, _event: &PassStartedEvent) {}
    fn on_pass_complete(&self, _event: &PassCompleteEvent) {}

    // ---- Rules ----
    fn on_rule_skipped(&self, _event: &RuleSkippedEvent) {}
    fn on_rule_failed(&self, _event: &RuleFailedEvent) {}
    fn on_result_updated(&self, _event: &ResultUpdatedEvent) {}

    // ---- Keyword novelty ----
    fn on_novelty_query_issued(&self, _event: &NoveltyQueryIssuedEvent) {}
    fn on_novelty_query_failed(&self, _event: &NoveltyQueryFailedEvent) {}

    // ---- Aggregate ----
    fn on_score_changed(&self, _event: &ScoreChangedEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
