//! Staging list for AI-suggested rules awaiting review.
//!
//! DESIGN
//! ======
//! Candidates live here, never in `RulesState`, until the user accepts one.
//! Accepting moves the candidate into the rule store; dismissing drops it.
//! Each staged entry carries a `SuggestionKey` minted when it was staged, so
//! a button rendered for an entry keeps addressing that entry even after
//! earlier entries are resolved. A stale key or index is a silent no-op.
//!
//! A fetch runs as `begin_fetch` → await → `finish_fetch`. `finish_fetch`
//! clears `loading` on every outcome, and only a successful result touches
//! the staged list (full replacement).

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod suggestions_test;

use crate::net::api::FetchError;
use crate::net::types::SuggestedRule;
use crate::state::rules::RulesState;

/// Notification shown when a suggestion fetch fails.
pub const FETCH_FAILED_NOTICE: &str = "Failed to fetch rule suggestions.";

/// Stable handle for one staged candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuggestionKey(u64);

/// A candidate rule plus its staging handle.
#[derive(Clone, Debug, PartialEq)]
pub struct StagedSuggestion {
    pub key: SuggestionKey,
    pub rule: SuggestedRule,
}

/// Suggestion workflow state.
///
/// Provided as an `RwSignal<SuggestionsState>` via Leptos context.
#[derive(Clone, Debug, Default)]
pub struct SuggestionsState {
    staged: Vec<StagedSuggestion>,
    pub loading: bool,
    next_key: u64,
}

impl SuggestionsState {
    /// Candidates in the order the service returned them.
    #[must_use]
    pub fn staged(&self) -> &[StagedSuggestion] {
        &self.staged
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.staged.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    /// Mark a fetch as outstanding.
    ///
    /// Returns `false` and changes nothing if one is already in flight.
    pub fn begin_fetch(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.loading = true;
        true
    }

    /// Settle an outstanding fetch.
    ///
    /// Success replaces the staged list. Failure keeps it and returns the
    /// notification text for the user.
    pub fn finish_fetch(&mut self, result: Result<Vec<SuggestedRule>, FetchError>) -> Option<&'static str> {
        self.loading = false;
        match result {
            Ok(rules) => {
                self.replace(rules);
                None
            }
            Err(_) => Some(FETCH_FAILED_NOTICE),
        }
    }

    /// Replace all staged candidates with `rules`, minting fresh keys.
    pub fn replace(&mut self, rules: Vec<SuggestedRule>) {
        let staged: Vec<StagedSuggestion> = rules
            .into_iter()
            .map(|rule| StagedSuggestion { key: self.mint_key(), rule })
            .collect();
        self.staged = staged;
    }

    /// Move the candidate for `key` into `rules`. Returns the new rule id.
    pub fn accept(&mut self, key: SuggestionKey, rules: &mut RulesState) -> Option<String> {
        let staged = self.take(key)?;
        Some(rules.push_suggestion(staged.rule))
    }

    /// Drop the candidate for `key`. Returns whether anything was removed.
    pub fn dismiss(&mut self, key: SuggestionKey) -> bool {
        self.take(key).is_some()
    }

    /// Positional form of [`accept`](Self::accept).
    pub fn accept_at(&mut self, index: usize, rules: &mut RulesState) -> Option<String> {
        let key = self.staged.get(index)?.key;
        self.accept(key, rules)
    }

    /// Positional form of [`dismiss`](Self::dismiss).
    pub fn dismiss_at(&mut self, index: usize) -> bool {
        match self.staged.get(index) {
            Some(staged) => {
                let key = staged.key;
                self.dismiss(key)
            }
            None => false,
        }
    }

    fn take(&mut self, key: SuggestionKey) -> Option<StagedSuggestion> {
        let pos = self.staged.iter().position(|s| s.key == key)?;
        Some(self.staged.remove(pos))
    }

    fn mint_key(&mut self) -> SuggestionKey {
        let key = SuggestionKey(self.next_key);
        self.next_key += 1;
        key
    }
}
