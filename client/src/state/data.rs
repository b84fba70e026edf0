//! Uploaded entity collections shared across tabs.
//!
//! SYSTEM CONTEXT
//! ==============
//! The uploader fills this store; the grid, validation, and suggestion flows
//! read it. The suggestion flow snapshots it at request time and never writes.

#[cfg(test)]
#[path = "data_test.rs"]
mod data_test;

use crate::net::types::{Client, EntityKind, EntityRow, SuggestionRequest, Task, Worker};

/// Parsed spreadsheet rows for each entity sheet.
///
/// Provided as an `RwSignal<DataState>` via Leptos context.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataState {
    pub tasks: Vec<Task>,
    pub workers: Vec<Worker>,
    pub clients: Vec<Client>,
}

impl DataState {
    /// Rows for one sheet.
    #[must_use]
    pub fn rows(&self, kind: EntityKind) -> &[EntityRow] {
        match kind {
            EntityKind::Task => &self.tasks,
            EntityKind::Worker => &self.workers,
            EntityKind::Client => &self.clients,
        }
    }

    #[cfg(test)]
    pub(crate) fn replace(&mut self, kind: EntityKind, rows: Vec<EntityRow>) {
        match kind {
            EntityKind::Task => self.tasks = rows,
            EntityKind::Worker => self.workers = rows,
            EntityKind::Client => self.clients = rows,
        }
    }

    /// True when no sheet has any rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty() && self.workers.is_empty() && self.clients.is_empty()
    }

    /// Owned copy of the tasks and workers for a suggestion request.
    ///
    /// Later store changes do not affect a request already built.
    #[must_use]
    pub fn suggestion_snapshot(&self) -> SuggestionRequest {
        SuggestionRequest { tasks: self.tasks.clone(), workers: self.workers.clone() }
    }
}
