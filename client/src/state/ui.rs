//! Local UI chrome state (active workspace tab).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`data`, `rules`,
//! `suggestions`) so the tab shell can evolve independently of the stores.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Top-level workspace tabs, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    Upload,
    Grid,
    Validation,
    Rules,
    Priority,
    Export,
}

impl Tab {
    pub const ALL: [Tab; 6] = [Tab::Upload, Tab::Grid, Tab::Validation, Tab::Rules, Tab::Priority, Tab::Export];

    /// Stable identifier used in markup.
    #[must_use]
    pub fn value(self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Grid => "grid",
            Self::Validation => "validation",
            Self::Rules => "rules",
            Self::Priority => "priority",
            Self::Export => "export",
        }
    }

    /// Label shown on the tab trigger.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Grid => "Data Grid",
            Self::Validation => "Validation",
            Self::Rules => "Rules",
            Self::Priority => "Priority",
            Self::Export => "Export",
        }
    }
}

/// Which page hosts a natural-language input box.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageType {
    Grid,
    Rules,
}

impl PageType {
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Grid => "Search your data in plain English, e.g. \"tasks longer than 2 phases\"",
            Self::Rules => "Describe a rule, e.g. \"T1 and T2 must always run together\"",
        }
    }
}

/// UI state for the tab shell.
///
/// Provided as an `RwSignal<UiState>` via Leptos context.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub active_tab: Tab,
}

impl UiState {
    /// Switch to `tab` on direct user selection.
    pub fn select(&mut self, tab: Tab) {
        self.active_tab = tab;
    }
}
