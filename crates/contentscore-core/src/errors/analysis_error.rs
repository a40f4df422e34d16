//! Top-level analysis errors.

use super::error_code::ScoreErrorCode;
use super::{ConfigError, NoveltyError, ResearchError, RuleError};

/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("Research error: {0}")]
    Research(#[from] ResearchError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Novelty error: {0}")]
    Novelty(#[from] NoveltyError),
}

impl ScoreErrorCode for AnalysisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Research(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Novelty(e) => e.error_code(),
        }
    }
}
