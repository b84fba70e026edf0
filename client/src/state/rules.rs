//! Authoritative rule set built up in the rules tab.
//!
//! DESIGN
//! ======
//! Accepted rules get a random UUIDv4 id rather than a counter so that
//! acceptance from independent UI actions can never collide.

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;

use crate::net::types::{Rule, SuggestedRule};

/// Accepted rules in insertion order.
///
/// Provided as an `RwSignal<RulesState>` via Leptos context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RulesState {
    pub rules: Vec<Rule>,
}

impl RulesState {
    /// Append a suggestion as an accepted rule and return its new id.
    pub fn push_suggestion(&mut self, suggestion: SuggestedRule) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.rules.push(Rule::from_suggestion(id.clone(), suggestion));
        id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn get(&self, id: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.id == id)
    }
}
