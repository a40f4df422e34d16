//! Tests for the contentscore event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use contentscore_core::events::dispatcher::EventDispatcher;
use contentscore_core::events::handler::ContentScoreEventHandler;
use contentscore_core::events::types::*;

#[derive(Default)]
struct CountingHandler {
    passes: AtomicUsize,
    failures: AtomicUsize,
    updates: Mutex<Vec<(String, String)>>,
}

impl ContentScoreEventHandler for CountingHandler {
    fn on_pass_complete(&self, _event: &PassCompleteEvent) {
        self.passes.fetch_add(1, Ordering::Relaxed);
    }

    fn on_rule_failed(&self, _event: &RuleFailedEvent) {
        self.failures.fetch_add(1, Ordering::Relaxed);
    }

    fn on_result_updated(&self, event: &ResultUpdatedEvent) {
        self.updates
            .lock()
            .unwrap()
            .push((event.keyword.clone(), event.rule_id.clone()));
    }
}

struct PanickingHandler;

impl ContentScoreEventHandler for PanickingHandler {
    fn on_rule_failed(&self, _event: &RuleFailedEvent) {
        panic!("handler bug");
    }
}

fn failed_event() -> RuleFailedEvent {
    RuleFailedEvent {
        rule_id: "lengthContent".into(),
        error_code: "RULE_FAILED".into(),
        message: "boom".into(),
    }
}

#[test]
fn test_handler_noop_defaults() {
    struct NoopHandler;
    impl ContentScoreEventHandler for NoopHandler {}

    let handler = NoopHandler;
    handler.on_pass_started(&PassStartedEvent {
        keyword: "seo".into(),
        rule_count: 3,
    });
    handler.on_score_changed(&ScoreChangedEvent {
        keyword: "seo".into(),
        previous: None,
        score: 64,
    });
    handler.on_error(&ErrorEvent {
        message: "test".into(),
        error_code: "TEST".into(),
    });
}

#[test]
fn test_dispatch_reaches_every_handler() {
    let a = Arc::new(CountingHandler::default());
    let b = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());
    assert_eq!(dispatcher.handler_count(), 2);

    dispatcher.emit_rule_failed(&failed_event());
    dispatcher.emit_result_updated(&ResultUpdatedEvent {
        keyword: "rust".into(),
        rule_id: "keywordNotUsed".into(),
        score: Some(2),
        max_score: 2,
        text: "new".into(),
    });

    for handler in [&a, &b] {
        assert_eq!(handler.failures.load(Ordering::Relaxed), 1);
        assert_eq!(
            handler.updates.lock().unwrap().as_slice(),
            &[("rust".to_string(), "keywordNotUsed".to_string())]
        );
    }
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_rule_failed(&failed_event());
    assert_eq!(counter.failures.load(Ordering::Relaxed), 1);
}

#[test]
fn test_empty_dispatcher_is_a_no_op() {
    let dispatcher = EventDispatcher::default();
    dispatcher.emit_pass_complete(&PassCompleteEvent {
        keyword: "seo".into(),
        scored: 1,
        skipped: 0,
        failed: 0,
        duration_ms: 0,
    });
    assert_eq!(dispatcher.handler_count(), 0);
}
