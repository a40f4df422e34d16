//! Rule evaluation errors.

use super::error_code::{self, ScoreErrorCode};
use super::ResearchError;

/// Errors that can occur while a single rule scores a snapshot.
/// Always fatal to that rule only; the analyzer isolates them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum RuleError {
    #[error("Research failed: {0}")]
    Research(#[from] ResearchError),

    #[error("Rule {rule_id} failed: {message}")]
    EvaluationFailed { rule_id: String, message: String },

    #[error("Rule {rule_id} panicked: {message}")]
    Panicked { rule_id: String, message: String },
}

impl ScoreErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Research(e) => e.error_code(),
            Self::EvaluationFailed { .. } => error_code::RULE_FAILED,
            Self::Panicked { .. } => error_code::RULE_PANICKED,
        }
    }
}
