//! Result of one analyzer pass.

use std::collections::BTreeMap;

use contentscore_core::errors::RuleError;

use crate::rules::AnalysisResult;

/// One rule that failed during a pass and was left out of the map.
#[derive(Debug, Clone)]
pub struct RuleFailure {
    pub rule_id: String,
    pub error: RuleError,
}

/// Rule id -> result for every applicable rule that scored, plus the
/// failures and skips of the same pass.
#[derive(Debug, Clone, Default)]
pub struct AnalysisOutcome {
    pub results: BTreeMap<String, AnalysisResult>,
    pub failures: Vec<RuleFailure>,
    pub skipped: Vec<String>,
}

impl AnalysisOutcome {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn get(&self, rule_id: &str) -> Option<&AnalysisResult> {
        self.results.get(rule_id)
    }

    pub fn into_results(self) -> BTreeMap<String, AnalysisResult> {
        self.results
    }
}
