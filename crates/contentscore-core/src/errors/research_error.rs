//! Research registry errors.

use super::error_code::{self, ScoreErrorCode};

/// Errors raised when a rule asks the registry for a research function.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResearchError {
    #[error("Research not registered: {name}")]
    NotFound { name: String },

    #[error("Research {name} returned an unexpected shape (expected {expected})")]
    UnexpectedOutput { name: String, expected: &'static str },
}

impl ScoreErrorCode for ResearchError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::RESEARCH_NOT_FOUND,
            Self::UnexpectedOutput { .. } => error_code::RESEARCH_MISMATCH,
        }
    }
}
