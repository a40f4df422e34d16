//! EventDispatcher: synchronous fan-out, free when no handler is registered.

use std::sync::Arc;

use super::handler::ContentScoreEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Clone, Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn ContentScoreEventHandler>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn ContentScoreEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop the others.
    fn emit<F: Fn(&dyn ContentScoreEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("event handler panicked; continuing with remaining handlers");
            }
        }
    }

    // ---- Pass lifecycle ----
    pub fn emit_pass_started(&self, event: &PassStartedEvent) {
        self.emit(|h| h.on_pass_started(event));
    }

    pub fn emit_pass_complete(&self, event: &PassCompleteEvent) {
        self.emit(|h| h.on_pass_complete(event));
    }

    // ---- Rules ----
    pub fn emit_rule_skipped(&self, event: &RuleSkippedEvent) {
        self.emit(|h| h.on_rule_skipped(event));
    }

    pub fn emit_rule_failed(&self, event: &RuleFailedEvent) {
        self.emit(|h| h.on_rule_failed(event));
    }

    pub fn emit_result_updated(&self, event: &ResultUpdatedEvent) {
        self.emit(|h| h.on_result_updated(event));
    }

    // ---- Keyword novelty ----
    pub fn emit_novelty_query_issued(&self, event: &NoveltyQueryIssuedEvent) {
        self.emit(|h| h.on_novelty_query_issued(event));
    }

    pub fn emit_novelty_query_failed(&self, event: &NoveltyQueryFailedEvent) {
        self.emit(|h| h.on_novelty_query_failed(event));
    }

    // ---- Aggregate ----
    pub fn emit_score_changed(&self, event: &ScoreChangedEvent) {
        self.emit(|h| h.on_score_changed(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit(|h| h.on_error(event));
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
