//! Anthropic Messages API with `tool_choice` pinned to one tool.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::post_json;
use super::types::{LlmError, ToolCall, ToolReply};

const MESSAGES_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
}

impl AnthropicClient {
    #[must_use]
    pub fn new(http: reqwest::Client, api_key: &str, model: &str) -> Self {
        Self { http, api_key: api_key.to_owned(), model: model.to_owned() }
    }

    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx answer, or a body that
    /// is not a Messages reply.
    pub async fn call_tool(&self, call: &ToolCall<'_>) -> Result<ToolReply, LlmError> {
        let body = MessagesBody::new(&self.model, call);
        let request = self
            .http
            .post(MESSAGES_URL)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", API_VERSION);
        let text = post_json(request, &body).await?;
        read_reply(&text, call.tool.name)
    }
}

// =============================================================================
// REQUEST
// =============================================================================

#[derive(Serialize)]
struct MessagesBody<'a> {
    model: &'a str,
    max_tokens: u32,
    system: &'a str,
    messages: [UserTurn<'a>; 1],
    tools: [ToolDef<'a>; 1],
    tool_choice: ForcedTool<'a>,
}

#[derive(Serialize)]
struct UserTurn<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ToolDef<'a> {
    name: &'a str,
    description: &'a str,
    input_schema: &'a Value,
}

#[derive(Serialize)]
struct ForcedTool<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
}

impl<'a> MessagesBody<'a> {
    fn new(model: &'a str, call: &ToolCall<'a>) -> Self {
        let tool = call.tool;
        Self {
            model,
            max_tokens: call.max_tokens,
            system: call.system,
            messages: [UserTurn { role: "user", content: call.prompt }],
            tools: [ToolDef { name: tool.name, description: tool.description, input_schema: &tool.input_schema }],
            tool_choice: ForcedTool { kind: "tool", name: tool.name },
        }
    }
}

// =============================================================================
// REPLY
// =============================================================================

#[derive(Deserialize)]
struct MessagesReply {
    content: Vec<Block>,
    #[serde(default)]
    stop_reason: Option<String>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Default, Deserialize)]
struct Usage {
    #[serde(default)]
    input_tokens: u64,
    #[serde(default)]
    output_tokens: u64,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Block {
    Text { text: String },
    ToolUse { name: String, input: Value },
    /// Thinking and any block type added later.
    #[serde(other)]
    Other,
}

fn read_reply(body: &str, tool: &str) -> Result<ToolReply, LlmError> {
    let reply: MessagesReply = serde_json::from_str(body).map_err(|e| LlmError::Decode(e.to_string()))?;
    let mut out = ToolReply {
        truncated: reply.stop_reason.as_deref() == Some("max_tokens"),
        input_tokens: reply.usage.input_tokens,
        output_tokens: reply.usage.output_tokens,
        ..ToolReply::default()
    };
    for block in reply.content {
        match block {
            Block::Text { text } => out.push_text(&text),
            Block::ToolUse { name, input } if name == tool && out.input.is_none() => out.input = Some(input),
            Block::ToolUse { .. } | Block::Other => {}
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "anthropic_test.rs"]
mod tests;
