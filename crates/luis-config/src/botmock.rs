//! Botmock API configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    String::from("https://app.botmock.com/api")
}

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotmockConfig {
    /// Personal API token, sent as a bearer token.
    #[serde(default)]
    pub token: String,

    #[serde(default)]
    pub team_id: String,

    #[serde(default)]
    pub project_id: String,

    /// Optional. The board is fetched only when set.
    #[serde(default)]
    pub board_id: String,

    /// API root, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BotmockConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            team_id: String::new(),
            project_id: String::new(),
            board_id: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl BotmockConfig {
    /// Check if the Botmock config has the minimum required fields.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Board id, if one is configured.
    #[must_use]
    pub fn board(&self) -> Option<&str> {
        let board = self.board_id.trim();
        (!board.is_empty()).then_some(board)
    }

    /// Fail with the list of missing required fields.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if the token, team id, or project
    /// id is empty.
    pub fn require(&self) -> Result<(), ConfigError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            return Ok(());
        }
        Err(ConfigError::NotConfigured {
            section: "botmock".into(),
            missing: missing.join(", "),
        })
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("token", &self.token),
            ("team_id", &self.team_id),
            ("project_id", &self.project_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect()
    }
}
