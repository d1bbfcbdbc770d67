//! Assembly of the LUIS document from a fetched project.

use serde::{Deserialize, Serialize};

use crate::document::{
    CULTURE, EntityEntry, EntityLabel, IntentEntry, LabeledUtterance, LuisApp, TOKENIZER_VERSION,
};
use crate::errors::MapError;
use crate::project::{Intent, Project, Utterance};
use crate::sanitize::sanitize;
use crate::span::compute_span;

/// Default LUIS schema version.
pub const DEFAULT_SCHEMA_VERSION: &str = "3.2.0";

/// Default LUIS app version id.
pub const DEFAULT_VERSION_ID: &str = "0.1";

/// Export options the mapper needs. Built once from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSettings {
    pub schema_version: String,
    pub version_id: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            schema_version: DEFAULT_SCHEMA_VERSION.into(),
            version_id: DEFAULT_VERSION_ID.into(),
        }
    }
}

/// Build the LUIS document for `project`.
///
/// Ordering of intents, entities, and utterances follows the project. No
/// deduplication is performed. Intents without utterances still appear in
/// `intents` but contribute nothing to `utterances`.
///
/// # Errors
///
/// Returns [`MapError::Span`] if any variable reference has a non-numeric
/// `start_index`.
pub fn build_document(project: &Project, settings: &ExportSettings) -> Result<LuisApp, MapError> {
    let intents = project
        .intents
        .iter()
        .map(|intent| IntentEntry {
            name: intent.name.clone(),
        })
        .collect();

    let entities = project
        .variables
        .iter()
        .map(|variable| EntityEntry {
            name: variable.name.clone(),
            roles: Vec::new(),
        })
        .collect();

    let mut utterances = Vec::with_capacity(project.utterance_count());
    for intent in project.intents.iter().filter(|i| !i.utterances.is_empty()) {
        for (index, utterance) in intent.utterances.iter().enumerate() {
            utterances.push(label_utterance(intent, index, utterance)?);
        }
    }

    tracing::debug!(
        project = %project.name,
        intents = project.intents.len(),
        entities = project.variables.len(),
        utterances = utterances.len(),
        "built luis document"
    );

    Ok(LuisApp {
        luis_schema_version: settings.schema_version.clone(),
        version_id: settings.version_id.clone(),
        name: project.name.clone(),
        desc: project.platform.clone(),
        culture: CULTURE.into(),
        tokenizer_version: TOKENIZER_VERSION.into(),
        intents,
        entities,
        composites: Vec::new(),
        closed_lists: Vec::new(),
        pattern_any_entities: Vec::new(),
        regex_entities: Vec::new(),
        prebuilt_entities: Vec::new(),
        model_features: Vec::new(),
        regex_features: Vec::new(),
        patterns: Vec::new(),
        utterances,
    })
}

fn label_utterance(
    intent: &Intent,
    index: usize,
    utterance: &Utterance,
) -> Result<LabeledUtterance, MapError> {
    let entities = utterance
        .variables
        .iter()
        .map(|reference| {
            let span = compute_span(reference, &utterance.text).map_err(|source| {
                MapError::Span {
                    intent: intent.name.clone(),
                    utterance: index,
                    source,
                }
            })?;
            Ok(EntityLabel {
                entity: sanitize(&reference.name),
                start_pos: span.start_pos,
                end_pos: span.end_pos,
            })
        })
        .collect::<Result<Vec<_>, MapError>>()?;

    Ok(LabeledUtterance {
        text: sanitize(&utterance.text),
        intent: intent.name.clone(),
        entities,
    })
}
