//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`data`, `rules`, `suggestions`, `ui`) so
//! individual components can depend on small focused models. The suggestion
//! staging list is kept apart from the rule store.

pub mod data;
pub mod rules;
pub mod suggestions;
pub mod ui;
