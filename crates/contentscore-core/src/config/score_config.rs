//! Score cap and boundary-table overrides.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::traits::{OverrideProvider, ScoreBoundary};

/// Named override points for rule caps and boundary tables.
///
/// Keys are rule ids (`lengthPermalink`) or rule-scoped names
/// (`keywordDensity_fair`). Missing keys fall back to the rule default.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScoreConfig {
    #[serde(default)]
    pub scores: HashMap<String, u32>,
    #[serde(default)]
    pub boundaries: HashMap<String, Vec<ScoreBoundary>>,
}

impl OverrideProvider for ScoreConfig {
    fn score(&self, name: &str, default: u32) -> u32 {
        self.scores.get(name).copied().unwrap_or(default)
    }

    fn boundaries(&self, name: &str, default: Vec<ScoreBoundary>) -> Vec<ScoreBoundary> {
        match self.boundaries.get(name) {
            Some(table) if !table.is_empty() => table.clone(),
            _ => default,
        }
    }
}
