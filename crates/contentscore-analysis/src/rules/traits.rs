//! Rule trait: the contract shared by every scoring heuristic.

use contentscore_core::errors::RuleError;
use contentscore_core::traits::TextProvider;

use super::result::AnalysisResult;
use crate::paper::Paper;
use crate::research::Researcher;

/// One independent heuristic check.
///
/// Rules are built once from configuration and reused across passes and
/// snapshots. They never call one another; the only shared input is the
/// read-only [`Researcher`], so any evaluation order yields the same map.
pub trait Rule: Send + Sync {
    /// Stable id, used as the aggregation key.
    fn id(&self) -> &'static str;

    /// Score cap for content in `short_locale` (`en`, `de`, ...).
    fn max_score(&self, short_locale: &str) -> u32;

    /// Whether the rule has anything to say about `paper`. Pure.
    fn is_applicable(&self, paper: &Paper) -> bool;

    /// Message shown before the rule has scored anything.
    fn empty_text(&self, text: &dyn TextProvider) -> String;

    fn tooltip(&self, text: &dyn TextProvider) -> Option<String> {
        let _ = text;
        None
    }

    /// Default result: cap plus the empty/tooltip texts, no score.
    fn new_result(&self, paper: &Paper, text: &dyn TextProvider) -> AnalysisResult {
        let result = AnalysisResult::new(self.max_score(paper.short_locale()))
            .with_empty(self.empty_text(text));
        match self.tooltip(text) {
            Some(tooltip) => result.with_tooltip(tooltip),
            None => result,
        }
    }

    /// Score `paper`. Only called when [`is_applicable`](Self::is_applicable)
    /// returned true.
    fn evaluate(
        &self,
        paper: &Paper,
        researcher: &Researcher,
        text: &dyn TextProvider,
    ) -> Result<AnalysisResult, RuleError>;
}

/// Full cap when `satisfied`, otherwise no score.
pub(crate) fn score_if(satisfied: bool, cap: u32) -> Option<u32> {
    satisfied.then_some(cap)
}
