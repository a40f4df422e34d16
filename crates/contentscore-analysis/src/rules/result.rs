//! AnalysisResult: one rule's bounded score and explanation.

use serde::{Deserialize, Serialize};

/// Score, cap and explanation produced by one rule invocation.
///
/// `score` is `None` when the rule is not satisfied. A present score never
/// exceeds `max_score`; [`set_score`](Self::set_score) clamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "AnalysisResultData")]
pub struct AnalysisResult {
    score: Option<u32>,
    max_score: u32,
    text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tooltip: Option<String>,
    empty: String,
}

/// Wire shape of a result handed back by the host. Unchecked until it is
/// converted.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct AnalysisResultData {
    #[serde(default)]
    score: Option<u32>,
    max_score: u32,
    #[serde(default)]
    text: String,
    #[serde(default)]
    tooltip: Option<String>,
    #[serde(default)]
    empty: String,
}

impl From<AnalysisResultData> for AnalysisResult {
    fn from(data: AnalysisResultData) -> Self {
        let mut result = AnalysisResult::new(data.max_score).with_empty(data.empty);
        result.tooltip = data.tooltip;
        result.set_score(data.score).set_text(data.text);
        result
    }
}

impl AnalysisResult {
    pub fn new(max_score: u32) -> Self {
        Self {
            score: None,
            max_score,
            text: String::new(),
            tooltip: None,
            empty: String::new(),
        }
    }

    pub fn with_empty(mut self, empty: impl Into<String>) -> Self {
        self.empty = empty.into();
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Set the score, clamped to the cap.
    pub fn set_score(&mut self, score: Option<u32>) -> &mut Self {
        self.score = score.map(|s| s.min(self.max_score));
        self
    }

    pub fn set_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.text = text.into();
        self
    }

    pub fn score(&self) -> Option<u32> {
        self.score
    }

    /// Score counted towards the composite: absent scores count as 0.
    pub fn earned(&self) -> u32 {
        self.score.unwrap_or(0)
    }

    pub fn has_score(&self) -> bool {
        self.score.is_some()
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tooltip(&self) -> Option<&str> {
        self.tooltip.as_deref()
    }

    pub fn empty(&self) -> &str {
        &self.empty
    }

    /// Text to show: the explanation once one exists, otherwise the
    /// empty/default text.
    pub fn display_text(&self) -> &str {
        if self.text.is_empty() {
            &self.empty
        } else {
            &self.text
        }
    }
}
