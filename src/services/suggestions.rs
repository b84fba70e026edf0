//! Rule suggestion service: data snapshot to LLM to candidate rules.
//!
//! DESIGN
//! ======
//! The model sees a bounded sample of the uploaded tasks and workers and
//! answers through the `suggest_rules` tool, so its output is structured.
//! When a provider ignores the tool and replies in text, a JSON object in
//! the text is accepted instead. A reply with neither means zero suggestions.
//! Nothing here is persisted; the browser stages the result for review.

use std::fmt::Write;

use serde_json::Value;
use tracing::{info, warn};

use client::net::types::{SuggestedRule, SuggestionRequest, SuggestionResponse};

use crate::llm::ToolModel;
use crate::llm::tools::{RULE_KINDS, SUGGEST_RULES_TOOL, suggest_rules_tool};
use crate::llm::types::{LlmError, ToolCall, ToolReply};

pub const DEFAULT_SUGGEST_MAX_TOKENS: u32 = 4096;
pub const DEFAULT_SUGGEST_MAX_ROWS: usize = 50;

// =============================================================================
// CONFIG
// =============================================================================

/// Limits for one suggestion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuggestConfig {
    /// Output token budget for the model.
    pub max_tokens: u32,
    /// Rows per entity sheet included in the prompt.
    pub max_rows: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self { max_tokens: DEFAULT_SUGGEST_MAX_TOKENS, max_rows: DEFAULT_SUGGEST_MAX_ROWS }
    }
}

impl SuggestConfig {
    /// Read `SUGGEST_MAX_TOKENS` and `SUGGEST_MAX_ROWS`, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            max_tokens: env_parse(&lookup, "SUGGEST_MAX_TOKENS", DEFAULT_SUGGEST_MAX_TOKENS),
            max_rows: env_parse(&lookup, "SUGGEST_MAX_ROWS", DEFAULT_SUGGEST_MAX_ROWS),
        }
    }
}

fn env_parse<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: std::str::FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

// =============================================================================
// ERRORS
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum SuggestError {
    #[error("LLM not configured")]
    LlmNotConfigured,
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),
    #[error("invalid suggestion payload: {0}")]
    InvalidPayload(String),
}

impl SuggestError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::LlmNotConfigured => "E_LLM_NOT_CONFIGURED",
            Self::Llm(e) => e.error_code(),
            Self::InvalidPayload(_) => "E_INVALID_PAYLOAD",
        }
    }

    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Llm(e) if e.retryable())
    }
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Ask the model for rule suggestions covering `request`.
///
/// # Errors
///
/// Returns [`SuggestError::Llm`] when the provider call fails and
/// [`SuggestError::InvalidPayload`] when the tool input is not a rule list.
pub async fn suggest_rules(
    llm: &dyn ToolModel,
    config: SuggestConfig,
    request: &SuggestionRequest,
) -> Result<Vec<SuggestedRule>, SuggestError> {
    info!(tasks = request.tasks.len(), workers = request.workers.len(), "suggest: request received");

    let system = build_system_prompt();
    let prompt = build_user_prompt(request, config.max_rows);
    let tool = suggest_rules_tool();
    let call = ToolCall { system: &system, prompt: &prompt, tool: &tool, max_tokens: config.max_tokens };

    let reply = llm.call_tool(&call).await.inspect_err(|e| {
        if let LlmError::Rejected { status, body } = e {
            let excerpt: String = body.chars().take(300).collect();
            warn!(status, body = %excerpt, "suggest: provider rejected request");
        }
    })?;

    info!(
        called_tool = reply.input.is_some(),
        truncated = reply.truncated,
        input_tokens = reply.input_tokens,
        output_tokens = reply.output_tokens,
        "suggest: LLM reply"
    );

    let rules = parse_suggestions(&reply)?;
    info!(count = rules.len(), "suggest: rules parsed");
    Ok(rules)
}

// =============================================================================
// PROMPTS
// =============================================================================

pub(crate) fn build_system_prompt() -> String {
    let mut prompt = String::from(
        "You are a data-quality assistant for a resource-scheduling spreadsheet tool. \
         Clients request tasks; workers have skills, available slots, and load limits; \
         tasks have durations, required skills, and preferred phases.\n\n\
         Study the sample rows and propose business rules that would help schedule this data. \
         Only propose rules supported by patterns in the rows (shared skills, repeated co-requests, \
         overloaded worker groups, narrow phase windows).\n\n",
    );
    let _ = writeln!(prompt, "Allowed rule types: {}.", RULE_KINDS.join(", "));
    let _ = writeln!(
        prompt,
        "Call the {SUGGEST_RULES_TOOL} tool exactly once with all proposals. \
         Reference tasks and workers by their TaskID/WorkerID values. \
         If nothing is worth proposing, call it with an empty list."
    );
    prompt
}

pub(crate) fn build_user_prompt(request: &SuggestionRequest, max_rows: usize) -> String {
    let mut prompt = String::new();
    write_sheet(&mut prompt, "tasks", &request.tasks, max_rows);
    write_sheet(&mut prompt, "workers", &request.workers, max_rows);
    prompt
}

fn write_sheet<T: serde::Serialize>(out: &mut String, label: &str, rows: &[T], max_rows: usize) {
    let shown = rows.len().min(max_rows);
    if rows.is_empty() {
        let _ = writeln!(out, "<{label}>none uploaded</{label}>");
        return;
    }
    let _ = writeln!(out, "<{label} total=\"{}\" shown=\"{shown}\">", rows.len());
    for row in &rows[..shown] {
        let line = serde_json::to_string(row).unwrap_or_default();
        let _ = writeln!(out, "{line}");
    }
    let _ = writeln!(out, "</{label}>");
}

// =============================================================================
// PARSING
// =============================================================================

pub(crate) fn parse_suggestions(reply: &ToolReply) -> Result<Vec<SuggestedRule>, SuggestError> {
    if let Some(input) = &reply.input {
        let parsed: SuggestionResponse =
            serde_json::from_value(input.clone()).map_err(|e| SuggestError::InvalidPayload(e.to_string()))?;
        return Ok(parsed.rules);
    }

    if reply.text.trim().is_empty() {
        return Ok(Vec::new());
    }
    match extract_json_object(&reply.text).and_then(|v| serde_json::from_value::<SuggestionResponse>(v).ok()) {
        Some(parsed) => Ok(parsed.rules),
        None => {
            warn!(text_len = reply.text.len(), truncated = reply.truncated, "suggest: reply had no tool call or rule JSON");
            Ok(Vec::new())
        }
    }
}

/// First complete JSON object in `text`, tolerating code fences, prose and
/// stray braces before or after it.
fn extract_json_object(text: &str) -> Option<Value> {
    text.match_indices('{').find_map(|(start, _)| {
        let mut stream = serde_json::Deserializer::from_str(&text[start..]).into_iter::<Value>();
        match stream.next() {
            Some(Ok(value @ Value::Object(_))) => Some(value),
            _ => None,
        }
    })
}

#[cfg(test)]
#[path = "suggestions_test.rs"]
mod tests;
