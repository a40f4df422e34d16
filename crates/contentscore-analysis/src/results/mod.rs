//! Aggregation of rule results into per-keyword composite scores.

pub mod manager;

pub use manager::{composite_score, KeywordEntry, KeywordReport, ResultManager};
