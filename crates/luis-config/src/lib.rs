//! # luis-config
//!
//! Layered configuration loading for the Botmock to LUIS exporter using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`BOTMOCK_LUIS_*` prefix, `__` as separator)
//! 2. Flat environment names (`BOTMOCK_TOKEN`, `VERSION_ID`, `OUTPUT_DIR`, ...)
//! 3. Project-level `botmock-luis.toml`
//! 4. User-level `~/.config/botmock-luis/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `BOTMOCK_LUIS_EXPORT__VERSION_ID` -> `export.version_id`,
//! `BOTMOCK_LUIS_BOTMOCK__TOKEN` -> `botmock.token`, etc. The flat names are
//! listed in [`FLAT_ENV_KEYS`].
//!
//! # Usage
//!
//! ```no_run
//! use luis_config::LuisConfig;
//!
//! let config = LuisConfig::load().expect("config");
//! let settings = config.export.settings();
//! println!("schema {}", settings.schema_version);
//! ```

mod botmock;
mod env;
mod error;
mod export;

pub use botmock::BotmockConfig;
pub use env::{ENV_PREFIX, STRING_KEYS};
pub use error::ConfigError;
pub use export::{DEFAULT_OUTPUT_DIRECTORY, ExportConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "botmock-luis.toml";

/// Flat environment names and the config keys they set.
pub const FLAT_ENV_KEYS: [(&str, &str); 7] = [
    ("LUIS_SCHEMA_VERSION", "export.schema_version"),
    ("VERSION_ID", "export.version_id"),
    ("OUTPUT_DIR", "export.output_directory"),
    ("BOTMOCK_TOKEN", "botmock.token"),
    ("BOTMOCK_TEAM_ID", "botmock.team_id"),
    ("BOTMOCK_PROJECT_ID", "botmock.project_id"),
    ("BOTMOCK_BOARD_ID", "botmock.board_id"),
];

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LuisConfig {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub botmock: BotmockConfig,
}

impl LuisConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT read `.env`; the binary loads it before calling this.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Flat env names, all string-valued
        figment = env::merge_verbatim(
            figment,
            FLAT_ENV_KEYS.map(|(name, key)| (name.to_string(), key)),
        );

        // Layer 4: Prefixed env (highest priority). String keys are re-read
        // verbatim so figment's number parsing cannot rewrite them.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        env::merge_verbatim(
            figment,
            STRING_KEYS.map(|key| (env::prefixed_name(key), key)),
        )
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("botmock-luis").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LuisConfig::default();
        assert!(!config.botmock.is_configured());
        assert_eq!(config.export.schema_version, "3.2.0");
        assert_eq!(config.export.version_id, "0.1");
    }
}
