//! OverrideProvider trait: the host's hook for score caps and boundary tables.
//!
//! Standalone, rules use their compiled defaults. A host implements the trait
//! (or hands over its `ScoreConfig`) to retune caps without touching rules.

use serde::{Deserialize, Serialize};

/// One row of a boundary table: values at or above `boundary` (and below
/// the previous row's boundary) earn `score`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoundary {
    pub boundary: u32,
    pub score: u32,
}

impl ScoreBoundary {
    pub const fn new(boundary: u32, score: u32) -> Self {
        Self { boundary, score }
    }
}

/// Provider of named overrides: `(name, default) -> effective value`.
///
/// Resolved when a rule is constructed, so a value stays fixed for every
/// pass the rule takes part in.
pub trait OverrideProvider: Send + Sync {
    /// Effective score cap for `name`.
    fn score(&self, name: &str, default: u32) -> u32 {
        let _ = name;
        default
    }

    /// Effective boundary table for `name`, highest boundary first.
    fn boundaries(&self, name: &str, default: Vec<ScoreBoundary>) -> Vec<ScoreBoundary> {
        let _ = name;
        default
    }
}

/// No-op implementation; every rule keeps its compiled defaults.
pub struct StaticOverrides;

impl OverrideProvider for StaticOverrides {}
