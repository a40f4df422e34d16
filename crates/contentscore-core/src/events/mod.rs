//! Event system for contentscore.
//! Trait with no-op defaults, synchronous dispatch.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::ContentScoreEventHandler;
