//! Analyzer: applicability gating, failure isolation, order independence.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use contentscore_analysis::rules::ids;
use contentscore_analysis::{AnalysisResult, Analyzer, Paper, Researcher, Rule, RuleSet};
use contentscore_core::config::ContentScoreConfig;
use contentscore_core::errors::{error_code, ResearchError, RuleError};
use contentscore_core::events::types::*;
use contentscore_core::events::{ContentScoreEventHandler, EventDispatcher};
use contentscore_core::traits::{PassthroughText, StaticOverrides, TextProvider};

/// Rule that counts evaluations and is applicable only with a title.
struct CountingRule {
    evaluations: AtomicUsize,
}

impl Rule for CountingRule {
    fn id(&self) -> &'static str {
        "countingRule"
    }
    fn max_score(&self, _short_locale: &str) -> u32 {
        2
    }
    fn is_applicable(&self, paper: &Paper) -> bool {
        paper.has_title()
    }
    fn empty_text(&self, _text: &dyn TextProvider) -> String {
        "empty".into()
    }
    fn evaluate(&self, paper: &Paper, _r: &Researcher, text: &dyn TextProvider) -> Result<AnalysisResult, RuleError> {
        self.evaluations.fetch_add(1, Ordering::SeqCst);
        let mut result = self.new_result(paper, text);
        result.set_score(Some(2));
        Ok(result)
    }
}

struct MissingResearchRule;

impl Rule for MissingResearchRule {
    fn id(&self) -> &'static str {
        "missingResearch"
    }
    fn max_score(&self, _short_locale: &str) -> u32 {
        5
    }
    fn is_applicable(&self, _paper: &Paper) -> bool {
        true
    }
    fn empty_text(&self, _text: &dyn TextProvider) -> String {
        String::new()
    }
    fn evaluate(&self, _paper: &Paper, researcher: &Researcher, _text: &dyn TextProvider) -> Result<AnalysisResult, RuleError> {
        researcher.get_research("fleschReading")?;
        unreachable!("research is not registered");
    }
}

struct PanickingRule;

impl Rule for PanickingRule {
    fn id(&self) -> &'static str {
        "panickingRule"
    }
    fn max_score(&self, _short_locale: &str) -> u32 {
        1
    }
    fn is_applicable(&self, _paper: &Paper) -> bool {
        true
    }
    fn empty_text(&self, _text: &dyn TextProvider) -> String {
        String::new()
    }
    fn evaluate(&self, _paper: &Paper, _r: &Researcher, _text: &dyn TextProvider) -> Result<AnalysisResult, RuleError> {
        panic!("malformed heuristic");
    }
}

#[derive(Default)]
struct Recorder {
    skipped: Mutex<Vec<String>>,
    failed: Mutex<Vec<(String, String)>>,
    errors: Mutex<Vec<String>>,
    completed: AtomicUsize,
}

impl ContentScoreEventHandler for Recorder {
    fn on_rule_skipped(&self, event: &RuleSkippedEvent) {
        self.skipped.lock().unwrap().push(event.rule_id.clone());
    }
    fn on_rule_failed(&self, event: &RuleFailedEvent) {
        self.failed
            .lock()
            .unwrap()
            .push((event.rule_id.clone(), event.error_code.clone()));
    }
    fn on_error(&self, event: &ErrorEvent) {
        self.errors.lock().unwrap().push(event.error_code.clone());
    }
    fn on_pass_complete(&self, _event: &PassCompleteEvent) {
        self.completed.fetch_add(1, Ordering::SeqCst);
    }
}

fn sample_paper() -> Paper {
    Paper::builder()
        .title("7 Rust Tips for Faster Builds")
        .keyword("Rust Tips")
        .url("https://example.com/rust-tips")
        .text(format!(
            "<p>{}</p><p>Read <a href=\"https://doc.rust-lang.org\">the book</a>.</p><img src=\"a.png\" alt=\"rust tips cheat sheet\">",
            "rust tips ".repeat(20) + &"filler ".repeat(700)
        ))
        .thumbnail("cover.png")
        .build()
}

#[test]
fn non_applicable_rule_is_never_evaluated() {
    let rule = Arc::new(CountingRule {
        evaluations: AtomicUsize::new(0),
    });
    let rules: Vec<Arc<dyn Rule>> = vec![rule.clone()];
    let analyzer = Analyzer::default();

    let outcome = analyzer.analyze(&Paper::builder().text("body").build(), &rules, &Researcher::default(), &PassthroughText);
    assert_eq!(rule.evaluations.load(Ordering::SeqCst), 0);
    assert!(outcome.results.is_empty());
    assert_eq!(outcome.skipped, vec!["countingRule".to_string()]);

    let outcome = analyzer.analyze(&Paper::builder().title("t").build(), &rules, &Researcher::default(), &PassthroughText);
    assert_eq!(rule.evaluations.load(Ordering::SeqCst), 1);
    assert_eq!(outcome.get("countingRule").and_then(AnalysisResult::score), Some(2));
}

#[test]
fn failing_rules_are_isolated_and_reported() {
    let recorder = Arc::new(Recorder::default());
    let mut events = EventDispatcher::new();
    events.register(recorder.clone());
    let analyzer = Analyzer::new(events);

    let rules: Vec<Arc<dyn Rule>> = vec![
        Arc::new(MissingResearchRule),
        Arc::new(PanickingRule),
        Arc::new(CountingRule {
            evaluations: AtomicUsize::new(0),
        }),
    ];
    let paper = Paper::builder().title("A title").build();
    let outcome = analyzer.analyze(&paper, &rules, &Researcher::default(), &PassthroughText);

    assert_eq!(outcome.results.keys().collect::<Vec<_>>(), vec!["countingRule"]);
    assert_eq!(outcome.failures.len(), 2);
    assert!(!outcome.is_clean());

    let missing = &outcome.failures[0];
    assert_eq!(missing.rule_id, "missingResearch");
    assert!(matches!(
        &missing.error,
        RuleError::Research(ResearchError::NotFound { name }) if name == "fleschReading"
    ));
    assert!(matches!(&outcome.failures[1].error, RuleError::Panicked { message, .. } if message == "malformed heuristic"));

    let failed = recorder.failed.lock().unwrap().clone();
    assert_eq!(failed.len(), 2);
    assert_eq!(failed[0].0, "missingResearch");
    // Only the panic is an engine error; a missing research is the rule's own failure.
    assert_eq!(
        recorder.errors.lock().unwrap().as_slice(),
        &[error_code::RULE_PANICKED.to_string()]
    );
    assert_eq!(recorder.completed.load(Ordering::SeqCst), 1);
}

#[test]
fn parallel_and_reversed_orders_produce_the_same_map() {
    let set = RuleSet::standard(&ContentScoreConfig::default(), &StaticOverrides);
    let researcher = Researcher::new("https://example.com");
    let paper = sample_paper();
    let analyzer = Analyzer::default();

    let sequential = analyzer.analyze(&paper, set.as_slice(), &researcher, &PassthroughText);
    let parallel = analyzer.analyze_parallel(&paper, set.as_slice(), &researcher, &PassthroughText);
    let mut reversed_rules = set.as_slice().to_vec();
    reversed_rules.reverse();
    let reversed = analyzer.analyze(&paper, &reversed_rules, &researcher, &PassthroughText);

    assert!(!sequential.results.is_empty());
    assert_eq!(sequential.results, parallel.results);
    assert_eq!(sequential.results, reversed.results);
}

#[test]
fn standard_rules_score_a_realistic_post() {
    let set = RuleSet::standard(&ContentScoreConfig::default(), &StaticOverrides);
    let outcome = Analyzer::default().analyze(
        &sample_paper(),
        set.as_slice(),
        &Researcher::new("https://example.com"),
        &PassthroughText,
    );

    assert!(outcome.is_clean());
    let score = |id: &str| outcome.get(id).and_then(AnalysisResult::score);
    assert_eq!(score(ids::KEYWORD_IN_TITLE), Some(36));
    assert_eq!(score(ids::TITLE_HAS_NUMBER), Some(1));
    assert_eq!(score(ids::LINKS_HAS_EXTERNALS), Some(4));
    assert_eq!(score(ids::KEYWORD_IN_IMAGE_ALT), Some(2));
    assert_eq!(score(ids::LENGTH_PERMALINK), Some(4));
    // Rules gated on host flags stay out of the map.
    assert!(outcome.get(ids::CONTENT_AI).is_none());
    assert!(outcome.get(ids::CONTENT_HAS_TOC).is_none());
    assert!(outcome.get(ids::HAS_PRODUCT_SCHEMA).is_none());
    assert!(outcome.skipped.contains(&ids::TITLE_HAS_POWER_WORDS.to_string()));
}

#[test]
fn every_result_respects_its_cap() {
    let set = RuleSet::standard(&ContentScoreConfig::default(), &StaticOverrides);
    let outcome = Analyzer::default().analyze(&sample_paper(), set.as_slice(), &Researcher::default(), &PassthroughText);
    for (id, result) in &outcome.results {
        if let Some(score) = result.score() {
            assert!(score <= result.max_score(), "{id}: {score} > {}", result.max_score());
        }
    }
}
