//! Text helpers consumed by researches and rules.

pub mod clean;
pub mod patterns;

pub use clean::{clean_text, strip_scripts, strip_styles, strip_tags, strip_toc_block};
