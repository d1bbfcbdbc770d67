//! Export (document and output) configuration.

use std::path::PathBuf;

use luis_core::ExportSettings;
use luis_core::mapper::{DEFAULT_SCHEMA_VERSION, DEFAULT_VERSION_ID};
use serde::{Deserialize, Serialize};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "output";

fn default_schema_version() -> String {
    String::from(DEFAULT_SCHEMA_VERSION)
}

fn default_version_id() -> String {
    String::from(DEFAULT_VERSION_ID)
}

fn default_output_directory() -> String {
    String::from(DEFAULT_OUTPUT_DIRECTORY)
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ExportConfig {
    /// `luis_schema_version` written into the document.
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// `versionId` written into the document.
    #[serde(default = "default_version_id")]
    pub version_id: String,

    /// Directory the document is written into. Recreated on every run.
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            version_id: default_version_id(),
            output_directory: default_output_directory(),
        }
    }
}

impl ExportConfig {
    /// Mapper settings; empty values fall back to the defaults.
    #[must_use]
    pub fn settings(&self) -> ExportSettings {
        ExportSettings {
            schema_version: non_empty_or(&self.schema_version, DEFAULT_SCHEMA_VERSION),
            version_id: non_empty_or(&self.version_id, DEFAULT_VERSION_ID),
        }
    }

    /// Output directory; empty falls back to [`DEFAULT_OUTPUT_DIRECTORY`].
    #[must_use]
    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(non_empty_or(
            &self.output_directory,
            DEFAULT_OUTPUT_DIRECTORY,
        ))
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_string()
    } else {
        trimmed.to_string()
    }
}
