//! ResultManager: per-keyword result maps and the composite score.

use std::collections::BTreeMap;

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::rules::AnalysisResult;

/// Stored results for one keyword.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordEntry {
    results: BTreeMap<String, AnalysisResult>,
    is_primary: bool,
}

impl KeywordEntry {
    pub fn results(&self) -> &BTreeMap<String, AnalysisResult> {
        &self.results
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    /// `round(sum(score or 0) / sum(max_score) * 100)`; 0 when the caps
    /// sum to 0.
    pub fn score(&self) -> u32 {
        composite_score(self.results.values())
    }
}

/// Composite 0-100 score over `results`.
pub fn composite_score<'a>(results: impl IntoIterator<Item = &'a AnalysisResult>) -> u32 {
    let (earned, total) = results.into_iter().fold((0u64, 0u64), |(earned, total), r| {
        (earned + u64::from(r.earned()), total + u64::from(r.max_score()))
    });
    if total == 0 {
        return 0;
    }
    (earned as f64 / total as f64 * 100.0).round() as u32
}

/// Snapshot of one keyword as handed to the editing surface.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordReport {
    pub results: BTreeMap<String, AnalysisResult>,
    pub is_primary: bool,
    pub score: u32,
}

/// Accumulates result maps per keyword.
///
/// `update` is the only mutator besides `delete_result`. The composite is
/// never stored; every read recomputes it from the current map.
#[derive(Debug, Clone, Default)]
pub struct ResultManager {
    entries: FxHashMap<String, KeywordEntry>,
}

impl ResultManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `results` into the map for `keyword`; same rule ids are
    /// overwritten, others kept. `is_primary` only takes effect on the
    /// first update of a keyword. Returns the new composite score.
    pub fn update(
        &mut self,
        keyword: &str,
        results: BTreeMap<String, AnalysisResult>,
        is_primary: bool,
    ) -> u32 {
        let entry = self
            .entries
            .entry(keyword.to_string())
            .or_insert_with(|| KeywordEntry {
                results: BTreeMap::new(),
                is_primary,
            });
        entry.results.extend(results);
        let score = entry.score();
        tracing::debug!(keyword, composite_score = score, rules = entry.results.len(), "composite score recomputed");
        score
    }

    /// Merge a single corrected result for `keyword`.
    pub fn update_one(&mut self, keyword: &str, rule_id: &str, result: AnalysisResult) -> u32 {
        self.update(keyword, BTreeMap::from([(rule_id.to_string(), result)]), false)
    }

    pub fn get_result(&self, keyword: &str) -> Option<&KeywordEntry> {
        self.entries.get(keyword)
    }

    /// Every entry with its composite score.
    pub fn get_results(&self) -> BTreeMap<String, KeywordReport> {
        self.entries
            .iter()
            .map(|(keyword, entry)| {
                (
                    keyword.clone(),
                    KeywordReport {
                        results: entry.results.clone(),
                        is_primary: entry.is_primary,
                        score: entry.score(),
                    },
                )
            })
            .collect()
    }

    pub fn keywords(&self) -> Vec<&str> {
        let mut keywords: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        keywords.sort_unstable();
        keywords
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.entries.contains_key(keyword)
    }

    /// Composite score, 0 for an unknown keyword.
    pub fn get_score(&self, keyword: &str) -> u32 {
        self.entries.get(keyword).map_or(0, KeywordEntry::score)
    }

    /// Primary flag, false for an unknown keyword.
    pub fn is_primary(&self, keyword: &str) -> bool {
        self.entries.get(keyword).is_some_and(KeywordEntry::is_primary)
    }

    pub fn delete_result(&mut self, keyword: &str) -> bool {
        self.entries.remove(keyword).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(max: u32, score: Option<u32>) -> AnalysisResult {
        let mut r = AnalysisResult::new(max);
        r.set_score(score);
        r
    }

    #[test]
    fn composite_rounds_half_up() {
        // 1 / 8 = 12.5%
        assert_eq!(composite_score([&result(8, Some(1))]), 13);
        assert_eq!(composite_score(std::iter::empty()), 0);
        assert_eq!(composite_score([&result(0, None)]), 0);
    }

    #[test]
    fn primary_flag_sticks_to_first_update() {
        let mut manager = ResultManager::new();
        manager.update("rust", BTreeMap::new(), true);
        manager.update("rust", BTreeMap::new(), false);
        assert!(manager.is_primary("rust"));

        manager.update("go", BTreeMap::new(), false);
        manager.update("go", BTreeMap::new(), true);
        assert!(!manager.is_primary("go"));
    }

    #[test]
    fn reports_serialize() {
        let mut manager = ResultManager::new();
        manager.update("rust", BTreeMap::from([("a".to_string(), result(4, Some(2)))]), true);
        let json = serde_json::to_value(manager.get_results()).unwrap();
        assert_eq!(json["rust"]["score"], 50);
        assert_eq!(json["rust"]["isPrimary"], true);
        assert_eq!(json["rust"]["results"]["a"]["maxScore"], 4);
    }
}
