//! Keyword novelty memo: one state machine per normalized keyword.
//!
//! `NotRequested -> Pending -> Resolved(is_new)`. Absence from the memo is
//! `NotRequested`. A failed query drops the keyword back to
//! `Pending { in_flight: false }`, which the next pass may query again.

use std::sync::{Mutex, MutexGuard};

use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoveltyState {
    /// Treated as novel for display until the answer arrives.
    Pending { in_flight: bool },
    Resolved { is_new: bool },
}

/// What a scoring pass should do for a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    /// The caller must issue the query; the memo already says in flight.
    Query,
    /// Query in flight; assume novel.
    Waiting,
    Known { is_new: bool },
}

/// Novelty states for the life of a session. Entries are never evicted.
#[derive(Debug, Default)]
pub struct NoveltyMemo {
    states: Mutex<FxHashMap<String, NoveltyState>>,
}

impl NoveltyMemo {
    pub fn new() -> Self {
        Self::default()
    }

    fn states(&self) -> MutexGuard<'_, FxHashMap<String, NoveltyState>> {
        self.states.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn state(&self, keyword: &str) -> Option<NoveltyState> {
        self.states().get(keyword).copied()
    }

    pub fn len(&self) -> usize {
        self.states().len()
    }

    pub fn is_empty(&self) -> bool {
        self.states().is_empty()
    }

    /// Read the state and claim the query when one is due. At most one
    /// caller is told to query per `Pending` transition.
    pub fn begin(&self, keyword: &str) -> Lookup {
        let mut states = self.states();
        match states.get(keyword).copied() {
            Some(NoveltyState::Resolved { is_new }) => Lookup::Known { is_new },
            Some(NoveltyState::Pending { in_flight: true }) => Lookup::Waiting,
            Some(NoveltyState::Pending { in_flight: false }) | None => {
                states.insert(keyword.to_string(), NoveltyState::Pending { in_flight: true });
                Lookup::Query
            }
        }
    }

    pub fn resolve(&self, keyword: &str, is_new: bool) {
        self.states()
            .insert(keyword.to_string(), NoveltyState::Resolved { is_new });
    }

    /// The query for `keyword` failed or was never sent.
    pub fn fail(&self, keyword: &str) {
        let mut states = self.states();
        if !matches!(states.get(keyword), Some(NoveltyState::Resolved { .. })) {
            states.insert(keyword.to_string(), NoveltyState::Pending { in_flight: false });
        }
    }

    pub fn forget(&self, keyword: &str) {
        self.states().remove(keyword);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_lookup_claims_the_query() {
        let memo = NoveltyMemo::new();
        assert_eq!(memo.state("rust"), None);
        assert_eq!(memo.begin("rust"), Lookup::Query);
        assert_eq!(memo.begin("rust"), Lookup::Waiting);
        assert_eq!(memo.state("rust"), Some(NoveltyState::Pending { in_flight: true }));
    }

    #[test]
    fn resolved_state_is_memoized() {
        let memo = NoveltyMemo::new();
        memo.begin("rust");
        memo.resolve("rust", false);
        assert_eq!(memo.begin("rust"), Lookup::Known { is_new: false });
        assert_eq!(memo.begin("rust"), Lookup::Known { is_new: false });
    }

    #[test]
    fn failure_allows_one_more_query() {
        let memo = NoveltyMemo::new();
        memo.begin("rust");
        memo.fail("rust");
        assert_eq!(memo.state("rust"), Some(NoveltyState::Pending { in_flight: false }));
        assert_eq!(memo.begin("rust"), Lookup::Query);
        assert_eq!(memo.begin("rust"), Lookup::Waiting);
    }

    #[test]
    fn late_failure_does_not_undo_resolution() {
        let memo = NoveltyMemo::new();
        memo.begin("rust");
        memo.resolve("rust", true);
        memo.fail("rust");
        assert_eq!(memo.state("rust"), Some(NoveltyState::Resolved { is_new: true }));
    }

    #[test]
    fn entries_survive_many_other_keywords() {
        let memo = NoveltyMemo::new();
        assert_eq!(memo.begin("target"), Lookup::Query);
        memo.resolve("target", false);
        assert_eq!(memo.begin("in flight"), Lookup::Query);

        for i in 0..5_000 {
            let keyword = format!("keyword {i}");
            memo.begin(&keyword);
            memo.resolve(&keyword, true);
        }

        assert_eq!(memo.len(), 5_002);
        assert_eq!(memo.begin("target"), Lookup::Known { is_new: false });
        assert_eq!(memo.begin("in flight"), Lookup::Waiting);
    }

    #[test]
    fn forget_returns_keyword_to_not_requested() {
        let memo = NoveltyMemo::new();
        memo.begin("rust");
        memo.resolve("rust", true);
        memo.forget("rust");
        assert_eq!(memo.state("rust"), None);
        assert_eq!(memo.begin("rust"), Lookup::Query);
    }
}
