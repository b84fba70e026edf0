//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get a `Result` instead of panics so a failed suggestion fetch
//! degrades to a notification without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use super::types::{SuggestedRule, SuggestionRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::SuggestionResponse;

/// Endpoint that proposes rules for the current data snapshot.
pub const RULE_SUGGESTIONS_ENDPOINT: &str = "/api/ai-rule-suggestions";

/// Why a suggestion fetch failed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    Network(String),
    /// The server answered with a non-2xx status.
    Status(u16),
    /// The response body was not the expected JSON shape.
    Decode(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network(e) => write!(f, "suggestion request failed: {e}"),
            Self::Status(status) => write!(f, "suggestion request failed: {status}"),
            Self::Decode(e) => write!(f, "suggestion response malformed: {e}"),
        }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Parse a suggestion response body. A body without `rules` yields an empty list.
#[cfg(any(test, feature = "hydrate"))]
fn parse_suggestion_response(body: &str) -> Result<Vec<SuggestedRule>, FetchError> {
    serde_json::from_str::<SuggestionResponse>(body)
        .map(|resp| resp.rules)
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Ask the server for rule suggestions via `POST /api/ai-rule-suggestions`.
///
/// # Errors
///
/// Returns a [`FetchError`] on transport failure, non-2xx status, or a body
/// that is not `{ "rules": [...] }` JSON.
pub async fn fetch_rule_suggestions(request: &SuggestionRequest) -> Result<Vec<SuggestedRule>, FetchError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(RULE_SUGGESTIONS_ENDPOINT)
            .json(request)
            .map_err(|e| FetchError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        if !is_success_status(resp.status()) {
            return Err(FetchError::Status(resp.status()));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;
        parse_suggestion_response(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(FetchError::Network("not available on server".to_owned()))
    }
}
