//! Model providers for rule suggestions.
//!
//! DESIGN
//! ======
//! `LLM_PROVIDER` picks Anthropic Messages or an OpenAI-compatible Chat
//! Completions endpoint. Both share one `reqwest` client and one POST helper,
//! and both force the single tool named in the `ToolCall`. The service only
//! sees the `ToolModel` trait.

pub mod anthropic;
pub mod config;
pub mod openai;
pub mod tools;
pub mod types;

use std::time::Duration;

use serde::Serialize;

use config::{LlmConfig, LlmProviderKind, LlmTimeouts};
pub use types::ToolModel;
use types::{LlmError, ToolCall, ToolReply};

/// The configured provider.
pub enum LlmClient {
    Anthropic(anthropic::AnthropicClient),
    OpenAi(openai::OpenAiClient),
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns [`LlmError::Transport`] if the HTTP client cannot be built.
    pub fn from_config(config: &LlmConfig) -> Result<Self, LlmError> {
        let http = http_client(config.timeouts)?;
        Ok(match config.provider {
            LlmProviderKind::Anthropic => {
                Self::Anthropic(anthropic::AnthropicClient::new(http, &config.api_key, &config.model))
            }
            LlmProviderKind::OpenAi => Self::OpenAi(openai::OpenAiClient::new(http, config)),
        })
    }
}

#[async_trait::async_trait]
impl ToolModel for LlmClient {
    async fn call_tool(&self, call: &ToolCall<'_>) -> Result<ToolReply, LlmError> {
        match self {
            Self::Anthropic(client) => client.call_tool(call).await,
            Self::OpenAi(client) => client.call_tool(call).await,
        }
    }
}

fn http_client(timeouts: LlmTimeouts) -> Result<reqwest::Client, LlmError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeouts.request_secs))
        .connect_timeout(Duration::from_secs(timeouts.connect_secs))
        .build()
        .map_err(|e| LlmError::Transport(format!("http client: {e}")))
}

/// Send `body` as JSON and return the reply text of a 2xx answer.
async fn post_json<B: Serialize + Sync>(request: reqwest::RequestBuilder, body: &B) -> Result<String, LlmError> {
    let response = request
        .json(body)
        .send()
        .await
        .map_err(|e| LlmError::Transport(e.to_string()))?;
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| LlmError::Transport(e.to_string()))?;
    if !status.is_success() {
        return Err(LlmError::Rejected { status: status.as_u16(), body: text });
    }
    Ok(text)
}
