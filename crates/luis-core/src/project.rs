//! Source project model as delivered by the Botmock provider.
//!
//! Only the fields the exporter reads are modelled; unknown fields in the
//! provider payload are ignored by serde.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// A conversational-design project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Project {
    /// Used verbatim as the output file stem and the document `name`.
    pub name: String,
    /// Target platform label; becomes the document `desc`.
    pub platform: String,
    pub intents: Vec<Intent>,
    pub variables: Vec<Variable>,
}

impl Project {
    /// Check the preconditions the exporter relies on.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Validation`] when the project name is empty, since
    /// it would produce an output file named `.json`.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::Validation("project name is empty".into()));
        }
        if self.name.contains(['/', '\\']) || matches!(self.name.as_str(), "." | "..") {
            return Err(CoreError::Validation(format!(
                "project name {:?} cannot be used as a file name",
                self.name
            )));
        }
        Ok(())
    }

    /// Total number of utterances across all intents.
    #[must_use]
    pub fn utterance_count(&self) -> usize {
        self.intents.iter().map(|i| i.utterances.len()).sum()
    }
}

/// A named conversational goal with its example utterances.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Intent {
    pub name: String,
    pub utterances: Vec<Utterance>,
}

/// One example sentence. `text` still contains the `%` markers.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Utterance {
    pub text: String,
    #[serde(default)]
    pub variables: Vec<VariableRef>,
}

/// One annotated variable occurrence inside an utterance.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct VariableRef {
    /// The reference as written in the raw text, markers included (`%city%`).
    pub name: String,
    /// Raw-text character offset of the opening marker, as a numeric string.
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String")]
    pub start_index: String,
}

/// A project-level entity declaration.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Variable {
    pub name: String,
}

/// Botmock has shipped `start_index` both as `"7"` and as `7`.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
        Float(f64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Str(s) => s,
        Raw::Int(n) => n.to_string(),
        Raw::Float(f) => f.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn start_index_accepts_string_and_number() {
        let json = r#"{
            "text": "fly to %city% from %city%",
            "variables": [
                { "name": "%city%", "start_index": "7" },
                { "name": "%city%", "start_index": 19 }
            ]
        }"#;
        let utterance: Utterance = serde_json::from_str(json).unwrap();
        assert_eq!(utterance.variables[0].start_index, "7");
        assert_eq!(utterance.variables[1].start_index, "19");
    }

    #[test]
    fn utterance_variables_default_to_empty() {
        let utterance: Utterance = serde_json::from_str(r#"{ "text": "hi" }"#).unwrap();
        assert!(utterance.variables.is_empty());
    }

    #[test]
    fn unknown_provider_fields_are_ignored() {
        let json = r#"{
            "id": "abc",
            "name": "greeting",
            "created_at": { "date": "2020-01-01" },
            "utterances": []
        }"#;
        let intent: Intent = serde_json::from_str(json).unwrap();
        assert_eq!(intent.name, "greeting");
    }

    #[test]
    fn missing_intents_is_a_structural_error() {
        let json = r#"{ "name": "Demo", "platform": "generic", "variables": [] }"#;
        let err = serde_json::from_str::<Project>(json).unwrap_err();
        assert!(err.to_string().contains("intents"), "{err}");
    }

    #[test]
    fn validate_rejects_empty_name() {
        let project = Project {
            name: "  ".into(),
            platform: "generic".into(),
            intents: vec![],
            variables: vec![],
        };
        assert!(matches!(project.validate(), Err(CoreError::Validation(_))));
    }

    #[rstest]
    #[case("../escape")]
    #[case("nested/name")]
    #[case("win\\dir")]
    #[case("..")]
    fn validate_rejects_path_like_names(#[case] name: &str) {
        let project = Project {
            name: name.into(),
            platform: "generic".into(),
            intents: vec![],
            variables: vec![],
        };
        assert!(matches!(project.validate(), Err(CoreError::Validation(_))));
    }

    #[test]
    fn validate_accepts_plain_names_with_dots() {
        let project = Project {
            name: "Travel Bot v1.2".into(),
            platform: "generic".into(),
            intents: vec![],
            variables: vec![],
        };
        assert!(project.validate().is_ok());
    }

    #[test]
    fn utterance_count_sums_over_intents() {
        let utterance = Utterance {
            text: "hi".into(),
            variables: vec![],
        };
        let project = Project {
            name: "Demo".into(),
            platform: "generic".into(),
            intents: vec![
                Intent {
                    name: "a".into(),
                    utterances: vec![utterance.clone(), utterance.clone()],
                },
                Intent {
                    name: "b".into(),
                    utterances: vec![],
                },
                Intent {
                    name: "c".into(),
                    utterances: vec![utterance],
                },
            ],
            variables: vec![],
        };
        assert!(project.validate().is_ok());
        assert_eq!(project.utterance_count(), 3);
    }
}
