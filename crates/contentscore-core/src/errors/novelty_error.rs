//! Keyword-novelty query errors.

use super::error_code::{self, ScoreErrorCode};

/// Errors from the outbound "is this keyword new" query.
///
/// None of these are retried by the rule; the keyword stays pending
/// until a later scoring pass asks again.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoveltyError {
    #[error("Novelty query transport failed: {0}")]
    Transport(String),

    #[error("Novelty query returned an invalid response: {0}")]
    InvalidResponse(String),

    #[error("Novelty worker disconnected")]
    Disconnected,

    #[error("Novelty request queue full (capacity {capacity})")]
    QueueFull { capacity: usize },
}

impl ScoreErrorCode for NoveltyError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Transport(_) | Self::InvalidResponse(_) => error_code::NOVELTY_QUERY_FAILED,
            Self::Disconnected | Self::QueueFull { .. } => error_code::NOVELTY_UNAVAILABLE,
        }
    }
}
