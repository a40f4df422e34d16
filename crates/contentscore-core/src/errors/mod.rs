//! Error handling for contentscore.
//! One error enum per subsystem, `thiserror` only.

pub mod analysis_error;
pub mod config_error;
pub mod error_code;
pub mod novelty_error;
pub mod research_error;
pub mod rule_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use error_code::ScoreErrorCode;
pub use novelty_error::NoveltyError;
pub use research_error::ResearchError;
pub use rule_error::RuleError;
