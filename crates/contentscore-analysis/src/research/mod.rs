//! Research registry and the built-in researches.

pub mod links;
pub mod paragraphs;
pub mod registry;
pub mod types;
pub mod word_count;

pub use registry::{ResearchFn, Researcher, LINK_STATS, PARAGRAPHS, WORD_COUNT};
pub use types::{LinkStats, Paragraph, ResearchOutput};
