//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! server keeps no per-user data: suggestion requests carry their own data
//! snapshot, so the state is just the LLM client and request limits.

use std::sync::Arc;

use crate::llm::ToolModel;
use crate::services::suggestions::SuggestConfig;

/// Shared application state, injected into Axum handlers via State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Optional LLM client. `None` if LLM env vars are not configured.
    pub llm: Option<Arc<dyn ToolModel>>,
    pub suggest: SuggestConfig,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn ToolModel>>, suggest: SuggestConfig) -> Self {
        Self { llm, suggest }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use super::*;

    /// `AppState` with no LLM configured.
    #[must_use]
    pub fn test_app_state() -> AppState {
        AppState::new(None, SuggestConfig::default())
    }

    /// `AppState` backed by a mock LLM.
    #[must_use]
    pub fn test_app_state_with_llm(llm: Arc<dyn ToolModel>) -> AppState {
        AppState::new(Some(llm), SuggestConfig::default())
    }
}
