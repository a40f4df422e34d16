//! Host-facing traits.

pub mod override_provider;
pub mod text_provider;

pub use override_provider::{OverrideProvider, ScoreBoundary, StaticOverrides};
pub use text_provider::{format_text, PassthroughText, TextProvider};
