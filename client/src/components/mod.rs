//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render workspace chrome and the suggestion review surface while
//! reading/writing shared state from Leptos context providers.

pub mod entity_summary;
pub mod natural_language_input;
pub mod panel_card;
pub mod rule_list;
pub mod rule_suggestions;
pub mod tab_bar;
