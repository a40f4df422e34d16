//! Property tests: score bounds and aggregate invariants.

use std::collections::BTreeMap;

use contentscore_analysis::results::composite_score;
use contentscore_analysis::{AnalysisResult, Analyzer, Paper, Researcher, ResultManager, RuleSet};
use contentscore_core::config::ContentScoreConfig;
use contentscore_core::traits::{PassthroughText, StaticOverrides};
use proptest::prelude::*;

fn arb_result() -> impl Strategy<Value = AnalysisResult> {
    (0u32..50, proptest::option::of(0u32..80)).prop_map(|(max, score)| {
        let mut result = AnalysisResult::new(max);
        result.set_score(score);
        result
    })
}

fn arb_map() -> impl Strategy<Value = BTreeMap<String, AnalysisResult>> {
    proptest::collection::btree_map("[a-z]{1,8}", arb_result(), 0..12)
}

fn arb_paper() -> impl Strategy<Value = Paper> {
    (
        "[a-zA-Z0-9 <>/=\"]{0,200}",
        "[a-zA-Z0-9 ]{0,40}",
        "[a-z ]{0,12}",
        "[a-z/:.-]{0,90}",
        any::<bool>(),
    )
        .prop_map(|(text, title, keyword, url, content_ai)| {
            Paper::builder()
                .text(text)
                .title(title)
                .keyword(keyword)
                .url(url)
                .content_ai(content_ai)
                .build()
        })
}

// ── Result bounds ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn set_score_never_exceeds_cap(result in arb_result()) {
        if let Some(score) = result.score() {
            prop_assert!(score <= result.max_score());
        }
    }

    #[test]
    fn standard_rules_stay_within_caps(paper in arb_paper()) {
        let set = RuleSet::standard(&ContentScoreConfig::default(), &StaticOverrides);
        let outcome = Analyzer::default().analyze(&paper, set.as_slice(), &Researcher::default(), &PassthroughText);
        prop_assert!(outcome.failures.is_empty());
        for result in outcome.results.values() {
            if let Some(score) = result.score() {
                prop_assert!(score <= result.max_score());
            }
        }
    }
}

// ── Aggregate ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn composite_is_a_percentage(results in arb_map()) {
        prop_assert!(composite_score(results.values()) <= 100);
    }

    #[test]
    fn update_is_idempotent(results in arb_map()) {
        let mut manager = ResultManager::new();
        let first = manager.update("kw", results.clone(), false);
        let second = manager.update("kw", results, false);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn merge_keeps_untouched_rules(base in arb_map(), patch in arb_map()) {
        let mut manager = ResultManager::new();
        manager.update("kw", base.clone(), false);
        manager.update("kw", patch.clone(), false);
        let stored = manager.get_result("kw").unwrap().results();
        for (id, result) in &base {
            if !patch.contains_key(id) {
                prop_assert_eq!(stored.get(id), Some(result));
            }
        }
        for (id, result) in &patch {
            prop_assert_eq!(stored.get(id), Some(result));
        }
    }
}
