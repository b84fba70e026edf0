//! The seam between the rule suggestion service and a model provider.
//!
//! A suggestion is always one forced tool call: the service sends a system
//! prompt, one user prompt and one tool, and reads back the tool arguments.
//! Providers translate `ToolCall` into their own wire format.

use serde_json::Value;

/// Why a model call produced nothing usable.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// An `LLM_*` setting holds a value the server cannot use.
    #[error("invalid LLM setting {key}: {reason}")]
    Setting { key: &'static str, reason: String },

    #[error("no API key in {var}")]
    MissingKey { var: String },

    /// Connection, TLS or timeout failure, or the reply body was cut off.
    #[error("model provider unreachable: {0}")]
    Transport(String),

    #[error("model provider answered {status}")]
    Rejected { status: u16, body: String },

    /// The provider answered 2xx with a body that is not its documented shape.
    #[error("model reply unreadable: {0}")]
    Decode(String),
}

impl LlmError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Setting { .. } => "E_LLM_SETTING",
            Self::MissingKey { .. } => "E_LLM_MISSING_KEY",
            Self::Transport(_) => "E_LLM_UNREACHABLE",
            Self::Rejected { .. } => "E_LLM_REJECTED",
            Self::Decode(_) => "E_LLM_UNREADABLE",
        }
    }

    /// Whether pressing "Get AI Rule Suggestions" again may succeed.
    ///
    /// Timeouts, rate limits and provider outages clear up on their own; bad
    /// settings, rejected prompts and malformed replies do not.
    #[must_use]
    pub fn retryable(&self) -> bool {
        match self {
            Self::Transport(_) => true,
            Self::Rejected { status, .. } => matches!(status, 408 | 429 | 500..=599),
            Self::Setting { .. } | Self::MissingKey { .. } | Self::Decode(_) => false,
        }
    }
}

/// A tool the model must call, with a JSON Schema for its arguments.
#[derive(Debug, Clone)]
pub struct ToolSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// One request: the model sees `system` and `prompt` and is forced to call `tool`.
#[derive(Debug, Clone, Copy)]
pub struct ToolCall<'a> {
    pub system: &'a str,
    pub prompt: &'a str,
    pub tool: &'a ToolSpec,
    pub max_tokens: u32,
}

/// What a provider returned for a [`ToolCall`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolReply {
    /// Arguments of the first call to the requested tool.
    pub input: Option<Value>,
    /// Prose emitted next to or instead of the call.
    pub text: String,
    /// The provider stopped at the token limit.
    pub truncated: bool,
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl ToolReply {
    /// Append a prose segment, one segment per line.
    pub fn push_text(&mut self, segment: &str) {
        if segment.is_empty() {
            return;
        }
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(segment);
    }
}

/// A model that can answer a [`ToolCall`]. Mocked in service and route tests.
#[async_trait::async_trait]
pub trait ToolModel: Send + Sync {
    /// # Errors
    ///
    /// Returns an [`LlmError`] when the provider is unreachable, rejects the
    /// request, or replies with an unreadable body.
    async fn call_tool(&self, call: &ToolCall<'_>) -> Result<ToolReply, LlmError>;
}

#[cfg(test)]
#[path = "types_test.rs"]
mod tests;
