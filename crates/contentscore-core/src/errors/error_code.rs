//! ScoreErrorCode trait for host-facing error strings.

/// Trait for mapping contentscore errors to stable error codes.
/// Every error enum implements this so the editing surface can branch
/// on a code instead of parsing messages.
pub trait ScoreErrorCode {
    /// Returns the stable error code string (e.g., "RESEARCH_NOT_FOUND").
    fn error_code(&self) -> &'static str;

    /// Returns the coded error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const RESEARCH_NOT_FOUND: &str = "RESEARCH_NOT_FOUND";
pub const RESEARCH_MISMATCH: &str = "RESEARCH_MISMATCH";
pub const RULE_FAILED: &str = "RULE_FAILED";
pub const RULE_PANICKED: &str = "RULE_PANICKED";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const NOVELTY_QUERY_FAILED: &str = "NOVELTY_QUERY_FAILED";
pub const NOVELTY_UNAVAILABLE: &str = "NOVELTY_UNAVAILABLE";
