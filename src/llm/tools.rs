//! The `suggest_rules` tool the model answers through.

use super::types::ToolSpec;

pub const SUGGEST_RULES_TOOL: &str = "suggest_rules";

/// Rule kinds the rule builder understands.
pub const RULE_KINDS: [&str; 6] =
    ["coRun", "slotRestriction", "loadLimit", "phaseWindow", "patternMatch", "precedenceOverride"];

/// Tool whose arguments are exactly a `SuggestionResponse` body.
#[must_use]
pub fn suggest_rules_tool() -> ToolSpec {
    ToolSpec {
        name: SUGGEST_RULES_TOOL,
        description: "Propose scheduling/validation rules for the uploaded tasks and workers.",
        input_schema: serde_json::json!({
            "type": "object",
            "properties": {
                "rules": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "name": { "type": "string", "description": "Short rule title" },
                            "description": { "type": "string", "description": "Why this rule fits the data" },
                            "type": { "type": "string", "enum": RULE_KINDS, "description": "Rule kind" },
                            "conditions": { "type": "object", "description": "When the rule applies (task IDs, worker groups, phases)" },
                            "actions": { "type": "object", "description": "What the rule enforces" }
                        },
                        "required": ["name", "description", "type", "conditions", "actions"]
                    }
                }
            },
            "required": ["rules"]
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_enumerates_rule_kinds() {
        let tool = suggest_rules_tool();
        assert_eq!(tool.name, SUGGEST_RULES_TOOL);
        let kinds = &tool.input_schema["properties"]["rules"]["items"]["properties"]["type"]["enum"];
        assert_eq!(kinds.as_array().map(Vec::len), Some(RULE_KINDS.len()));
    }
}
