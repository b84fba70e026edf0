use std::sync::Mutex;

use super::*;
use client::net::types::EntityRow;

// =========================================================================
// MockModel
// =========================================================================

struct MockModel {
    reply: Mutex<Option<Result<ToolReply, LlmError>>>,
    seen_prompt: Mutex<Option<String>>,
    seen_tool: Mutex<Option<&'static str>>,
}

impl MockModel {
    fn new(reply: Result<ToolReply, LlmError>) -> Self {
        Self { reply: Mutex::new(Some(reply)), seen_prompt: Mutex::new(None), seen_tool: Mutex::new(None) }
    }
}

#[async_trait::async_trait]
impl ToolModel for MockModel {
    async fn call_tool(&self, call: &ToolCall<'_>) -> Result<ToolReply, LlmError> {
        *self.seen_prompt.lock().unwrap() = Some(call.prompt.to_owned());
        *self.seen_tool.lock().unwrap() = Some(call.tool.name);
        self.reply
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(LlmError::Transport("mock exhausted".into())))
    }
}

fn tool_reply(input: serde_json::Value) -> ToolReply {
    ToolReply { input: Some(input), input_tokens: 10, output_tokens: 5, ..ToolReply::default() }
}

fn text_reply(text: &str) -> ToolReply {
    ToolReply { text: text.into(), ..ToolReply::default() }
}

fn task(id: &str) -> EntityRow {
    serde_json::from_value(serde_json::json!({ "TaskID": id, "Duration": 1 })).unwrap()
}

fn worker(id: &str) -> EntityRow {
    serde_json::from_value(serde_json::json!({ "WorkerID": id, "WorkerGroup": "GroupA" })).unwrap()
}

// =========================================================================
// SuggestConfig
// =========================================================================

#[test]
fn config_defaults() {
    let cfg = SuggestConfig::from_lookup(|_| None);
    assert_eq!(cfg, SuggestConfig::default());
    assert_eq!(cfg.max_tokens, DEFAULT_SUGGEST_MAX_TOKENS);
    assert_eq!(cfg.max_rows, DEFAULT_SUGGEST_MAX_ROWS);
}

#[test]
fn config_reads_overrides_and_ignores_garbage() {
    let cfg = SuggestConfig::from_lookup(|key| match key {
        "SUGGEST_MAX_TOKENS" => Some("1024".into()),
        "SUGGEST_MAX_ROWS" => Some("lots".into()),
        _ => None,
    });
    assert_eq!(cfg.max_tokens, 1024);
    assert_eq!(cfg.max_rows, DEFAULT_SUGGEST_MAX_ROWS);
}

// =========================================================================
// Prompts
// =========================================================================

#[test]
fn system_prompt_names_tool_and_kinds() {
    let prompt = build_system_prompt();
    assert!(prompt.contains(SUGGEST_RULES_TOOL));
    for kind in RULE_KINDS {
        assert!(prompt.contains(kind));
    }
}

#[test]
fn user_prompt_includes_rows() {
    let request = SuggestionRequest { tasks: vec![task("T1"), task("T2")], workers: vec![worker("W1")] };
    let prompt = build_user_prompt(&request, 50);
    assert!(prompt.contains("<tasks total=\"2\" shown=\"2\">"));
    assert!(prompt.contains("\"TaskID\":\"T2\""));
    assert!(prompt.contains("\"WorkerID\":\"W1\""));
}

#[test]
fn user_prompt_truncates_to_max_rows() {
    let tasks = (0..10).map(|i| task(&format!("T{i}"))).collect();
    let request = SuggestionRequest { tasks, workers: Vec::new() };
    let prompt = build_user_prompt(&request, 3);
    assert!(prompt.contains("<tasks total=\"10\" shown=\"3\">"));
    assert!(prompt.contains("\"T2\""));
    assert!(!prompt.contains("\"T3\""));
    assert!(prompt.contains("<workers>none uploaded</workers>"));
}

// =========================================================================
// parse_suggestions
// =========================================================================

#[test]
fn parse_from_tool_call() {
    let resp = tool_reply(serde_json::json!({
        "rules": [
            { "name": "R1", "description": "d1", "type": "coRun", "conditions": { "tasks": ["T1", "T2"] }, "actions": {} },
            { "name": "R2", "description": "d2", "type": "loadLimit", "conditions": {}, "actions": { "maxSlotsPerPhase": 2 } }
        ]
    }));
    let rules = parse_suggestions(&resp).unwrap();
    assert_eq!(rules.len(), 2);
    assert_eq!(rules[0].name, "R1");
    assert_eq!(rules[1].kind, "loadLimit");
}

#[test]
fn parse_tool_call_without_rules_is_empty() {
    let resp = tool_reply(serde_json::json!({}));
    assert!(parse_suggestions(&resp).unwrap().is_empty());
}

#[test]
fn parse_malformed_tool_input_is_invalid_payload() {
    let resp = tool_reply(serde_json::json!({ "rules": [{ "description": "no name" }] }));
    let err = parse_suggestions(&resp).unwrap_err();
    assert!(matches!(err, SuggestError::InvalidPayload(_)));
    assert_eq!(err.error_code(), "E_INVALID_PAYLOAD");
}

#[test]
fn parse_falls_back_to_json_text() {
    let text = "Sure:\n```json\n{\"rules\":[{\"name\":\"R1\",\"type\":\"phaseWindow\"}]}\n```";
    let resp = text_reply(text);
    let rules = parse_suggestions(&resp).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].kind, "phaseWindow");
}

#[test]
fn parse_plain_text_is_zero_suggestions() {
    let resp = text_reply("I could not find any patterns.");
    assert!(parse_suggestions(&resp).unwrap().is_empty());
}

#[test]
fn parse_empty_reply_is_zero_suggestions() {
    assert!(parse_suggestions(&ToolReply::default()).unwrap().is_empty());
}

#[test]
fn parse_text_with_trailing_braced_prose_keeps_rules() {
    let text = "{\"rules\":[{\"name\":\"R1\",\"type\":\"coRun\"}]}\nReference tasks as {TaskID} in the builder.";
    let rules = parse_suggestions(&text_reply(text)).unwrap();
    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].name, "R1");
}

#[test]
fn extract_json_object_skips_braces_that_are_not_json() {
    assert!(extract_json_object("} nothing {").is_none());
    assert_eq!(extract_json_object("x {\"a\":1} y"), Some(serde_json::json!({ "a": 1 })));
    assert_eq!(
        extract_json_object("use {TaskID}, then {\"rules\":[]} and {WorkerID}"),
        Some(serde_json::json!({ "rules": [] }))
    );
}

// =========================================================================
// suggest_rules
// =========================================================================

#[tokio::test]
async fn suggest_rules_returns_tool_rules() {
    let llm = MockModel::new(Ok(tool_reply(serde_json::json!({
        "rules": [{ "name": "R1", "type": "coRun" }]
    }))));
    let request = SuggestionRequest { tasks: vec![task("T1")], workers: vec![worker("W1")] };

    let rules = suggest_rules(&llm, SuggestConfig::default(), &request).await.unwrap();

    assert_eq!(rules.len(), 1);
    assert_eq!(rules[0].name, "R1");
    let prompt = llm.seen_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.contains("T1"));
    assert_eq!(*llm.seen_tool.lock().unwrap(), Some(SUGGEST_RULES_TOOL));
}

#[tokio::test]
async fn suggest_rules_propagates_llm_error() {
    let llm = MockModel::new(Err(LlmError::Rejected { status: 529, body: "overloaded".into() }));
    let err = suggest_rules(&llm, SuggestConfig::default(), &SuggestionRequest::default())
        .await
        .unwrap_err();
    assert!(matches!(err, SuggestError::Llm(LlmError::Rejected { status: 529, .. })));
    assert!(err.retryable());
    assert_eq!(err.error_code(), "E_LLM_REJECTED");
}

#[test]
fn not_configured_error_code() {
    let err = SuggestError::LlmNotConfigured;
    assert_eq!(err.error_code(), "E_LLM_NOT_CONFIGURED");
    assert!(!err.retryable());
}
