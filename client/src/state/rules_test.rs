use std::collections::HashSet;

use super::*;

fn suggestion(name: &str) -> SuggestedRule {
    SuggestedRule {
        name: name.to_owned(),
        description: String::new(),
        kind: "coRun".to_owned(),
        conditions: serde_json::json!({ "tasks": ["T1", "T2"] }),
        actions: serde_json::Value::Null,
    }
}

#[test]
fn rules_state_default_empty() {
    let state = RulesState::default();
    assert!(state.is_empty());
    assert_eq!(state.len(), 0);
}

#[test]
fn push_suggestion_appends_with_parseable_uuid() {
    let mut state = RulesState::default();
    let id = state.push_suggestion(suggestion("R1"));
    assert_eq!(state.len(), 1);
    assert!(uuid::Uuid::parse_str(&id).is_ok());

    let rule = state.get(&id).unwrap();
    assert_eq!(rule.name, "R1");
    assert_eq!(rule.kind, "coRun");
}

#[test]
fn push_suggestion_ids_are_unique() {
    let mut state = RulesState::default();
    let ids: HashSet<String> = (0..200)
        .map(|i| state.push_suggestion(suggestion(&format!("R{i}"))))
        .collect();
    assert_eq!(ids.len(), 200);
    assert_eq!(state.len(), 200);
}

#[test]
fn push_suggestion_keeps_insertion_order() {
    let mut state = RulesState::default();
    state.push_suggestion(suggestion("first"));
    state.push_suggestion(suggestion("second"));
    assert_eq!(state.rules[0].name, "first");
    assert_eq!(state.rules[1].name, "second");
}

#[test]
fn get_unknown_id_is_none() {
    let state = RulesState::default();
    assert!(state.get("missing").is_none());
}
