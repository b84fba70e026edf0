//! Shared wire DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! The server reuses these types for `POST /api/ai-rule-suggestions`, so the
//! request and response shapes are defined once. Entity rows stay as open JSON
//! objects because their columns come straight from uploaded spreadsheets.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Deserializer, Serialize};

/// One uploaded spreadsheet row, keyed by column header.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityRow(pub serde_json::Map<String, serde_json::Value>);

/// A row from the tasks sheet.
pub type Task = EntityRow;
/// A row from the workers sheet.
pub type Worker = EntityRow;
/// A row from the clients sheet.
pub type Client = EntityRow;

/// Which uploaded sheet a row belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Task,
    Worker,
    Client,
}

impl EntityKind {
    /// Column holding the row identifier for this sheet.
    #[must_use]
    pub fn id_column(self) -> &'static str {
        match self {
            Self::Task => "TaskID",
            Self::Worker => "WorkerID",
            Self::Client => "ClientID",
        }
    }

    /// Plural display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Task => "tasks",
            Self::Worker => "workers",
            Self::Client => "clients",
        }
    }
}

impl EntityRow {
    /// Look up a raw cell by column header.
    #[must_use]
    pub fn field(&self, column: &str) -> Option<&serde_json::Value> {
        self.0.get(column)
    }

    /// Row identifier for the given sheet, rendered as a string.
    ///
    /// Numeric IDs are stringified; empty and missing cells yield `None`.
    #[must_use]
    pub fn id(&self, kind: EntityKind) -> Option<String> {
        match self.field(kind.id_column())? {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_owned()),
            serde_json::Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// A rule proposed by the suggestion service, not yet accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuggestedRule {
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Rule kind discriminator (e.g. `"coRun"`, `"loadLimit"`).
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub conditions: serde_json::Value,
    #[serde(default)]
    pub actions: serde_json::Value,
}

/// An accepted rule owned by the rule store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Random UUID string minted at acceptance time.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub conditions: serde_json::Value,
    #[serde(default)]
    pub actions: serde_json::Value,
}

impl Rule {
    /// Promote a suggestion into an accepted rule under `id`.
    #[must_use]
    pub fn from_suggestion(id: String, rule: SuggestedRule) -> Self {
        Self {
            id,
            name: rule.name,
            description: rule.description,
            kind: rule.kind,
            conditions: rule.conditions,
            actions: rule.actions,
        }
    }
}

/// Body of `POST /api/ai-rule-suggestions`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub workers: Vec<Worker>,
}

/// Response of `POST /api/ai-rule-suggestions`.
///
/// A missing or `null` `rules` field means zero suggestions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SuggestionResponse {
    #[serde(default, deserialize_with = "deserialize_null_as_empty")]
    pub rules: Vec<SuggestedRule>,
}

fn deserialize_null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
