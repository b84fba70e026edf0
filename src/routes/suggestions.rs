//! Rule suggestion route.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use serde::Serialize;
use tracing::warn;
use uuid::Uuid;

use client::net::types::{SuggestionRequest, SuggestionResponse};

use crate::services::suggestions::{self, SuggestError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: &'static str,
    pub retryable: bool,
}

pub(crate) fn suggest_error_to_status(err: &SuggestError) -> StatusCode {
    match err {
        SuggestError::LlmNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
        SuggestError::Llm(_) | SuggestError::InvalidPayload(_) => StatusCode::BAD_GATEWAY,
    }
}

/// `POST /api/ai-rule-suggestions`: propose rules for a tasks/workers snapshot.
///
/// # Errors
///
/// 503 when no LLM is configured, 502 when the LLM call or its payload fails.
pub async fn suggest_rules(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<SuggestionResponse>, (StatusCode, Json<ErrorBody>)> {
    let request_id = Uuid::new_v4();
    let result = match state.llm.as_deref() {
        Some(llm) => suggestions::suggest_rules(llm, state.suggest, &request).await,
        None => Err(SuggestError::LlmNotConfigured),
    };

    match result {
        Ok(rules) => Ok(Json(SuggestionResponse { rules })),
        Err(e) => {
            let status = suggest_error_to_status(&e);
            warn!(%request_id, status = status.as_u16(), code = e.error_code(), error = %e, "suggest: request failed");
            Err((status, Json(ErrorBody { error: e.to_string(), code: e.error_code(), retryable: e.retryable() })))
        }
    }
}

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod tests;
