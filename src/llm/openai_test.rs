use super::*;
use crate::llm::config::{LlmProviderKind, LlmTimeouts};
use crate::llm::tools::{SUGGEST_RULES_TOOL, suggest_rules_tool};

fn completion(message: serde_json::Value, finish_reason: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-1",
        "model": "gpt-4o",
        "choices": [{ "index": 0, "message": message, "finish_reason": finish_reason }],
        "usage": { "prompt_tokens": 12, "completion_tokens": 7 }
    })
    .to_string()
}

fn config(base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: LlmProviderKind::OpenAi,
        api_key: "sk-test".into(),
        model: "gpt-4o".into(),
        openai_base_url: base_url.into(),
        timeouts: LlmTimeouts { request_secs: 5, connect_secs: 1 },
    }
}

#[test]
fn endpoint_appends_chat_completions() {
    let client = OpenAiClient::new(reqwest::Client::new(), &config("http://localhost:8080/v1"));
    assert_eq!(client.endpoint, "http://localhost:8080/v1/chat/completions");
}

#[test]
fn body_forces_the_function_and_prepends_system() {
    let tool = suggest_rules_tool();
    let call = ToolCall { system: "be terse", prompt: "rows", tool: &tool, max_tokens: 256 };
    let body = serde_json::to_value(CompletionBody::new("gpt-4o", &call)).unwrap();

    assert_eq!(body["messages"][0], serde_json::json!({ "role": "system", "content": "be terse" }));
    assert_eq!(body["messages"][1], serde_json::json!({ "role": "user", "content": "rows" }));
    assert_eq!(body["tools"][0]["type"], "function");
    assert_eq!(body["tools"][0]["function"]["parameters"]["type"], "object");
    assert_eq!(
        body["tool_choice"],
        serde_json::json!({ "type": "function", "function": { "name": SUGGEST_RULES_TOOL } })
    );
}

#[test]
fn blank_system_prompt_is_skipped() {
    let tool = suggest_rules_tool();
    let call = ToolCall { system: "  ", prompt: "rows", tool: &tool, max_tokens: 256 };
    assert_eq!(CompletionBody::new("gpt-4o", &call).messages.len(), 1);
}

#[test]
fn decodes_function_arguments() {
    let body = completion(
        serde_json::json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "call_1",
                "type": "function",
                "function": { "name": "suggest_rules", "arguments": "{\"rules\":[{\"name\":\"R1\",\"type\":\"loadLimit\"}]}" }
            }]
        }),
        "tool_calls",
    );
    let out = read_reply(&body, SUGGEST_RULES_TOOL).unwrap();
    assert_eq!(out.input.unwrap()["rules"][0]["type"], "loadLimit");
    assert!(out.text.is_empty());
    assert_eq!((out.input_tokens, out.output_tokens), (12, 7));
}

#[test]
fn text_only_reply_has_no_input() {
    let body = completion(serde_json::json!({ "role": "assistant", "content": "nothing to add" }), "stop");
    let out = read_reply(&body, SUGGEST_RULES_TOOL).unwrap();
    assert!(out.input.is_none());
    assert_eq!(out.text, "nothing to add");
}

#[test]
fn bad_arguments_are_decode_error() {
    let body = completion(
        serde_json::json!({
            "role": "assistant",
            "tool_calls": [{ "id": "call_1", "function": { "name": "suggest_rules", "arguments": "{not json" } }]
        }),
        "tool_calls",
    );
    assert!(matches!(read_reply(&body, SUGGEST_RULES_TOOL).unwrap_err(), LlmError::Decode(ref m) if m.contains("suggest_rules")));
}

#[test]
fn length_finish_marks_truncated() {
    let body = completion(serde_json::json!({ "role": "assistant", "content": "partial" }), "length");
    assert!(read_reply(&body, SUGGEST_RULES_TOOL).unwrap().truncated);
}

#[test]
fn empty_choices_is_decode_error() {
    let err = read_reply(r#"{"choices":[]}"#, SUGGEST_RULES_TOOL).unwrap_err();
    assert!(matches!(err, LlmError::Decode(ref m) if m.contains("choices")));
}
