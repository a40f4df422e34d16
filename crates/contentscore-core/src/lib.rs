//! contentscore-core: shared foundation for the content scoring engine.
//!
//! - Errors: one `thiserror` enum per subsystem, each with a stable code
//! - Config: layered TOML configuration and score overrides
//! - Events: handler trait and synchronous dispatcher
//! - Tracing: subscriber setup and field names
//! - Traits: host hooks for overrides and message translation

pub mod config;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;

pub use config::ContentScoreConfig;
pub use errors::ScoreErrorCode;
pub use events::{ContentScoreEventHandler, EventDispatcher};
pub use traits::{OverrideProvider, ScoreBoundary, TextProvider};
