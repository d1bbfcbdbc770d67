//! Botmock client error types.

use thiserror::Error;

use crate::Asset;

/// Errors that can occur when fetching a project from Botmock.
#[derive(Debug, Error)]
pub enum BotmockError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Botmock returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by Botmock.
        status: u16,
        /// Response body.
        message: String,
    },

    /// The token was rejected (401/403).
    #[error("unauthorized ({status}): check BOTMOCK_TOKEN and team access")]
    Unauthorized { status: u16 },

    /// The team, project, or board does not exist.
    #[error("not found: {url}")]
    NotFound { url: String },

    /// Botmock returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A response body did not have the expected shape.
    #[error("failed to parse {asset}: {source}")]
    Parse {
        asset: Asset,
        #[source]
        source: serde_json::Error,
    },

    /// Required credentials or ids are missing.
    #[error(transparent)]
    NotConfigured(#[from] luis_config::ConfigError),
}
