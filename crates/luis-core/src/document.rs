//! LUIS application document.
//!
//! Field names follow the LUIS import format exactly, which mixes
//! `snake_case` and `camelCase`. The reserved collections are never populated
//! by the exporter but must be present in the JSON, so they serialize as
//! empty arrays rather than being skipped.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Culture written into every exported app.
pub const CULTURE: &str = "en-us";

/// Tokenizer version written into every exported app.
pub const TOKENIZER_VERSION: &str = "1.0.0";

/// The full LUIS import document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LuisApp {
    pub luis_schema_version: String,
    #[serde(rename = "versionId")]
    pub version_id: String,
    pub name: String,
    pub desc: String,
    pub culture: String,
    #[serde(rename = "tokenizerVersion")]
    pub tokenizer_version: String,
    pub intents: Vec<IntentEntry>,
    pub entities: Vec<EntityEntry>,
    pub composites: Vec<Value>,
    #[serde(rename = "closedLists")]
    pub closed_lists: Vec<Value>,
    #[serde(rename = "patternAnyEntities")]
    pub pattern_any_entities: Vec<Value>,
    pub regex_entities: Vec<Value>,
    #[serde(rename = "prebuiltEntities")]
    pub prebuilt_entities: Vec<Value>,
    pub model_features: Vec<Value>,
    pub regex_features: Vec<Value>,
    pub patterns: Vec<Value>,
    pub utterances: Vec<LabeledUtterance>,
}

/// Field names that must appear at the top level of every exported document.
pub const REQUIRED_FIELDS: [&str; 17] = [
    "luis_schema_version",
    "versionId",
    "name",
    "desc",
    "culture",
    "tokenizerVersion",
    "intents",
    "entities",
    "composites",
    "closedLists",
    "patternAnyEntities",
    "regex_entities",
    "prebuiltEntities",
    "model_features",
    "regex_features",
    "patterns",
    "utterances",
];

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IntentEntry {
    pub name: String,
}

/// A simple entity. Roles are never populated.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntityEntry {
    pub name: String,
    pub roles: Vec<String>,
}

/// One training utterance with its labeled entity spans.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LabeledUtterance {
    pub text: String,
    pub intent: String,
    pub entities: Vec<EntityLabel>,
}

/// An entity occurrence; `end_pos` is the index of the last character.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EntityLabel {
    pub entity: String,
    #[serde(rename = "startPos")]
    pub start_pos: usize,
    #[serde(rename = "endPos")]
    pub end_pos: usize,
}
