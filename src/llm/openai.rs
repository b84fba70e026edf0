//! OpenAI-compatible Chat Completions with a forced function call.
//!
//! Any gateway exposing `{base_url}/chat/completions` works. Function
//! arguments arrive as a JSON-encoded string and are decoded here.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::config::LlmConfig;
use super::post_json;
use super::types::{LlmError, ToolCall, ToolReply};

pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &LlmConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!("{}/chat/completions", config.openai_base_url),
        }
    }

    /// # Errors
    ///
    /// Returns an error on transport failure, a non-2xx answer, a reply with
    /// no choices, or function arguments that are not JSON.
    pub async fn call_tool(&self, call: &ToolCall<'_>) -> Result<ToolReply, LlmError> {
        let body = CompletionBody::new(&self.model, call);
        let request = self.http.post(&self.endpoint).bearer_auth(&self.api_key);
        let text = post_json(request, &body).await?;
        read_reply(&text, call.tool.name)
    }
}

// =============================================================================
// REQUEST
// =============================================================================

#[derive(Serialize)]
struct CompletionBody<'a> {
    model: &'a str,
    max_tokens: u32,
    messages: Vec<Turn<'a>>,
    tools: [FunctionTool<'a>; 1],
    tool_choice: FunctionTool<'a>,
}

#[derive(Serialize)]
struct Turn<'a> {
    role: &'static str,
    content: &'a str,
}

/// `{"type":"function","function":{...}}`; also the shape of a forced `tool_choice`.
#[derive(Serialize)]
struct FunctionTool<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: Function<'a>,
}

#[derive(Serialize)]
struct Function<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parameters: Option<&'a Value>,
}

impl<'a> CompletionBody<'a> {
    fn new(model: &'a str, call: &ToolCall<'a>) -> Self {
        let tool = call.tool;
        let mut messages = Vec::with_capacity(2);
        if !call.system.trim().is_empty() {
            messages.push(Turn { role: "system", content: call.system });
        }
        messages.push(Turn { role: "user", content: call.prompt });
        Self {
            model,
            max_tokens: call.max_tokens,
            messages,
            tools: [FunctionTool {
                kind: "function",
                function: Function {
                    name: tool.name,
                    description: Some(tool.description),
                    parameters: Some(&tool.input_schema),
                },
            }],
            tool_choice: FunctionTool {
                kind: "function",
                function: Function { name: tool.name, description: None, parameters: None },
            },
        }
    }
}

// =============================================================================
// REPLY
// =============================================================================

#[derive(Deserialize)]
struct CompletionReply {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Usage,
}

#[derive(Default, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u64,
    #[serde(default)]
    completion_tokens: u64,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    tool_calls: Option<Vec<FunctionCall>>,
}

#[derive(Deserialize)]
struct FunctionCall {
    function: CalledFunction,
}

#[derive(Deserialize)]
struct CalledFunction {
    name: String,
    #[serde(default)]
    arguments: String,
}

fn read_reply(body: &str, tool: &str) -> Result<ToolReply, LlmError> {
    let reply: CompletionReply = serde_json::from_str(body).map_err(|e| LlmError::Decode(e.to_string()))?;
    let Some(choice) = reply.choices.into_iter().next() else {
        return Err(LlmError::Decode("reply has no choices".into()));
    };

    let mut out = ToolReply {
        truncated: choice.finish_reason.as_deref() == Some("length"),
        input_tokens: reply.usage.prompt_tokens,
        output_tokens: reply.usage.completion_tokens,
        ..ToolReply::default()
    };
    if let Some(text) = &choice.message.content {
        out.push_text(text);
    }
    let called = choice
        .message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .find(|c| c.function.name == tool);
    if let Some(call) = called {
        let input = serde_json::from_str::<Value>(&call.function.arguments)
            .map_err(|e| LlmError::Decode(format!("{tool} arguments: {e}")))?;
        out.input = Some(input);
    }
    Ok(out)
}

#[cfg(test)]
#[path = "openai_test.rs"]
mod tests;
