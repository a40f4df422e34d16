//! Configuration system for contentscore.
//! TOML-based, layered resolution: host > env > project > user > defaults.

pub mod analysis_config;
pub mod content_score_config;
pub mod novelty_config;
pub mod score_config;

pub use analysis_config::AnalysisConfig;
pub use content_score_config::{ContentScoreConfig, HostOverrides};
pub use novelty_config::NoveltyConfig;
pub use score_config::ScoreConfig;
