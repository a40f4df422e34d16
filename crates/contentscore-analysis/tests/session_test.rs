//! ScoringSession: keyword-novelty convergence, retirement, secondary
//! keywords.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use contentscore_analysis::novelty::{
    NoveltyClient, NoveltyRequest, NoveltyResponse, NoveltyState, SEARCHING_TEXT,
};
use contentscore_analysis::rules::ids;
use contentscore_analysis::{Paper, ScoringSession};
use contentscore_core::config::ContentScoreConfig;
use contentscore_core::errors::{AnalysisError, NoveltyError};
use contentscore_core::events::types::*;
use contentscore_core::events::ContentScoreEventHandler;

const WAIT: Duration = Duration::from_secs(5);

/// Records every query; fails while `failing` is set.
#[derive(Default)]
struct ScriptedClient {
    queries: Mutex<Vec<String>>,
    failing: AtomicBool,
    used: Vec<String>,
}

impl ScriptedClient {
    fn with_used(used: &[&str]) -> Self {
        Self {
            used: used.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn query_count(&self) -> usize {
        self.queries.lock().unwrap().len()
    }
}

impl NoveltyClient for ScriptedClient {
    fn is_keyword_new(&self, request: &NoveltyRequest) -> Result<NoveltyResponse, NoveltyError> {
        self.queries.lock().unwrap().push(request.keyword.clone());
        if self.failing.load(Ordering::SeqCst) {
            return Err(NoveltyError::Transport("503 Service Unavailable".into()));
        }
        Ok(NoveltyResponse {
            is_new: !self.used.contains(&request.keyword),
        })
    }
}

#[derive(Default)]
struct Observer {
    updates: Mutex<Vec<(String, Option<u32>)>>,
    score_changes: Mutex<Vec<ScoreChangedEvent>>,
    issued: AtomicUsize,
    failed: AtomicUsize,
}

impl ContentScoreEventHandler for Observer {
    fn on_result_updated(&self, event: &ResultUpdatedEvent) {
        self.updates
            .lock()
            .unwrap()
            .push((event.keyword.clone(), event.score));
    }
    fn on_score_changed(&self, event: &ScoreChangedEvent) {
        self.score_changes.lock().unwrap().push(event.clone());
    }
    fn on_novelty_query_issued(&self, _event: &NoveltyQueryIssuedEvent) {
        self.issued.fetch_add(1, Ordering::SeqCst);
    }
    fn on_novelty_query_failed(&self, _event: &NoveltyQueryFailedEvent) {
        self.failed.fetch_add(1, Ordering::SeqCst);
    }
}

fn session(client: Arc<ScriptedClient>, observer: Arc<Observer>) -> ScoringSession {
    ScoringSession::builder(ContentScoreConfig::default())
        .novelty_client(client)
        .event_handler(observer)
        .build()
        .unwrap()
}

fn post(keyword: &str) -> Paper {
    Paper::builder()
        .title(format!("{keyword} for beginners"))
        .keyword(keyword)
        .text("<p>A short introduction.</p>")
        .build()
}

fn novelty_score(session: &ScoringSession, keyword: &str) -> Option<u32> {
    session
        .results()
        .get_result(keyword)
        .and_then(|entry| entry.results().get(ids::KEYWORD_NOT_USED))
        .and_then(|result| result.score())
}

#[test]
fn novel_keyword_converges_after_pump() {
    let client = Arc::new(ScriptedClient::default());
    let observer = Arc::new(Observer::default());
    let mut session = session(client.clone(), observer.clone());

    let first = session.score(&post("Rust"), true);
    let entry = session.results().get_result("rust").unwrap();
    assert_eq!(entry.results()[ids::KEYWORD_NOT_USED].text(), SEARCHING_TEXT);
    assert_eq!(novelty_score(&session, "rust"), None);

    assert_eq!(session.wait_and_pump(WAIT), 1);
    assert_eq!(novelty_score(&session, "rust"), Some(2));
    assert!(session.get_score("rust") > first.score);
    assert_eq!(observer.updates.lock().unwrap().as_slice(), &[("rust".to_string(), Some(2))]);
    let changes = observer.score_changes.lock().unwrap();
    let last = changes.last().unwrap();
    assert_eq!(last.previous, Some(first.score));

    // Resolved keywords are answered from the memo.
    drop(changes);
    session.score(&post("rust"), true);
    assert_eq!(novelty_score(&session, "rust"), Some(2));
    assert_eq!(client.query_count(), 1);
    assert_eq!(observer.issued.load(Ordering::SeqCst), 1);
}

#[test]
fn used_keyword_scores_nothing() {
    let client = Arc::new(ScriptedClient::with_used(&["rust"]));
    let mut session = session(client.clone(), Arc::new(Observer::default()));

    session.score(&post("rust"), true);
    assert_eq!(session.wait_and_pump(WAIT), 1);
    let entry = session.results().get_result("rust").unwrap();
    let result = &entry.results()[ids::KEYWORD_NOT_USED];
    assert_eq!(result.score(), None);
    assert!(result.text().starts_with("You have <a"));
    assert_eq!(
        session.novelty().unwrap().state("rust"),
        Some(NoveltyState::Resolved { is_new: false })
    );
}

#[test]
fn failed_query_stays_pending_then_requeries_once() {
    let client = Arc::new(ScriptedClient::default());
    client.failing.store(true, Ordering::SeqCst);
    let observer = Arc::new(Observer::default());
    let mut session = session(client.clone(), observer.clone());

    session.score(&post("rust"), true);
    assert_eq!(session.wait_and_pump(Duration::from_millis(300)), 0);
    assert_eq!(observer.failed.load(Ordering::SeqCst), 1);
    assert_eq!(
        session.novelty().unwrap().state("rust"),
        Some(NoveltyState::Pending { in_flight: false })
    );
    assert_eq!(novelty_score(&session, "rust"), None);

    client.failing.store(false, Ordering::SeqCst);
    session.score(&post("rust"), true);
    assert_eq!(session.wait_and_pump(WAIT), 1);
    assert_eq!(client.query_count(), 2);
    assert_eq!(novelty_score(&session, "rust"), Some(2));
}

#[test]
fn pending_keyword_is_assumed_novel() {
    let gate = Arc::new(Mutex::new(()));
    let held = gate.lock().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));

    let client_gate = Arc::clone(&gate);
    let client_calls = Arc::clone(&calls);
    let client = move |_: &NoveltyRequest| {
        client_calls.fetch_add(1, Ordering::SeqCst);
        let _wait = client_gate.lock();
        Ok::<_, NoveltyError>(NoveltyResponse { is_new: false })
    };
    let mut session = ScoringSession::builder(ContentScoreConfig::default())
        .novelty_client(Arc::new(client))
        .build()
        .unwrap();

    session.score(&post("rust"), true);
    session.score(&post("rust"), true);
    let entry = session.results().get_result("rust").unwrap();
    let optimistic = &entry.results()[ids::KEYWORD_NOT_USED];
    assert_eq!(optimistic.score(), Some(2));
    assert_eq!(optimistic.text(), "You haven't used this Focus Keyword before.");

    drop(held);
    assert_eq!(session.wait_and_pump(WAIT), 1);
    assert_eq!(novelty_score(&session, "rust"), None);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn retired_keyword_is_not_resurrected() {
    let client = Arc::new(ScriptedClient::default());
    let observer = Arc::new(Observer::default());
    let mut session = session(client, observer.clone());

    session.score(&post("rust"), true);
    assert!(session.retire("Rust"));
    // The answer still lands in the memo but not in the aggregate.
    std::thread::sleep(Duration::from_millis(100));
    let mut merged = session.pump();
    merged += session.wait_and_pump(Duration::from_millis(200));
    assert_eq!(merged, 0);
    assert!(session.results().get_result("rust").is_none());
    assert_eq!(session.get_score("rust"), 0);
    assert!(observer.updates.lock().unwrap().is_empty());
}

#[test]
fn score_all_covers_secondary_keywords() {
    let mut session = ScoringSession::builder(ContentScoreConfig::default())
        .build()
        .unwrap();
    let paper = Paper::builder()
        .title("Rust and Go compared")
        .keyword("Rust")
        .secondary_keywords(vec!["Go".into(), "rust".into(), " ".into()])
        .text("<p>Rust and Go.</p>")
        .build();

    let reports = session.score_all(&paper);
    let keywords: Vec<&str> = reports.iter().map(|r| r.keyword.as_str()).collect();
    assert_eq!(keywords, vec!["rust", "go"]);
    assert!(session.results().is_primary("rust"));
    assert!(!session.results().is_primary("go"));
    assert!(session.novelty().is_none());
    assert_eq!(session.pump(), 0);
}

#[test]
fn parallel_session_matches_sequential() {
    let paper = post("rust");
    let mut sequential = ScoringSession::builder(ContentScoreConfig::default()).build().unwrap();
    let mut parallel = ScoringSession::builder(ContentScoreConfig::default())
        .parallel(true)
        .build()
        .unwrap();
    let a = sequential.score(&paper, true);
    let b = parallel.score(&paper, true);
    assert_eq!(a.score, b.score);
    assert_eq!(
        sequential.results().get_result("rust"),
        parallel.results().get_result("rust")
    );
}

#[test]
fn invalid_config_is_rejected() {
    let mut config = ContentScoreConfig::default();
    config.novelty.queue_capacity = Some(0);
    let err = ScoringSession::builder(config).build().unwrap_err();
    assert!(matches!(err, AnalysisError::Config(_)));
}

#[test]
fn disabled_novelty_rule_is_not_built() {
    let mut config = ContentScoreConfig::default();
    config.analysis.disabled_rules = vec![ids::KEYWORD_NOT_USED.to_string()];
    let session = ScoringSession::builder(config)
        .novelty_client(Arc::new(ScriptedClient::default()))
        .build()
        .unwrap();
    assert!(session.novelty().is_none());
    assert!(session.rules().get(ids::KEYWORD_NOT_USED).is_none());
}

#[test]
fn dropping_session_does_not_wait_for_queries() {
    let (release_tx, release_rx) = crossbeam_channel::bounded::<()>(0);
    let calls = Arc::new(AtomicUsize::new(0));
    let client_calls = Arc::clone(&calls);
    let client = move |_: &NoveltyRequest| {
        client_calls.fetch_add(1, Ordering::SeqCst);
        // Blocks until the test lets go of the sender.
        let _ = release_rx.recv();
        Ok::<_, NoveltyError>(NoveltyResponse { is_new: true })
    };
    let mut session = ScoringSession::builder(ContentScoreConfig::default())
        .novelty_client(Arc::new(client))
        .build()
        .unwrap();
    for keyword in ["rust", "go", "zig"] {
        session.score(&post(keyword), true);
    }
    while calls.load(Ordering::SeqCst) == 0 {
        std::thread::sleep(Duration::from_millis(5));
    }

    let start = Instant::now();
    drop(session);
    assert!(start.elapsed() < Duration::from_millis(500));

    drop(release_tx);
    std::thread::sleep(Duration::from_millis(200));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}
