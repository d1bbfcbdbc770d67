//! Environment values for string-typed keys, kept exactly as written.
//!
//! Figment's `Env` provider parses values, so `VERSION_ID=1.0` would reach a
//! `String` field as a float and `BOTMOCK_TEAM_ID=00123` as the integer 123.
//! These layers read the variables directly and merge them as strings.

use figment::{Figment, providers::Serialized};

/// Prefix for nested environment overrides.
pub const ENV_PREFIX: &str = "BOTMOCK_LUIS_";

/// Config keys whose values are strings.
pub const STRING_KEYS: [&str; 8] = [
    "export.schema_version",
    "export.version_id",
    "export.output_directory",
    "botmock.token",
    "botmock.team_id",
    "botmock.project_id",
    "botmock.board_id",
    "botmock.base_url",
];

/// Environment name that overrides `key` through the prefixed layer.
pub fn prefixed_name(key: &str) -> String {
    format!("{ENV_PREFIX}{}", key.replace('.', "__").to_ascii_uppercase())
}

/// Merge every set variable in `vars` as a string at its config key.
pub fn merge_verbatim<'a>(
    figment: Figment,
    vars: impl IntoIterator<Item = (String, &'a str)>,
) -> Figment {
    vars.into_iter().fold(figment, |figment, (name, key)| {
        match std::env::var(&name) {
            Ok(value) => figment.merge(Serialized::default(key, value)),
            Err(_) => figment,
        }
    })
}
