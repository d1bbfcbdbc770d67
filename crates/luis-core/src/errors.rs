//! Error types for the transformation engine.
//!
//! Provider and configuration errors live in their own crates. The binary
//! converges everything into `anyhow::Error`.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while computing an entity span.
#[derive(Debug, Error)]
pub enum SpanError {
    /// `start_index` is not a base-10 unsigned integer.
    #[error("invalid start_index '{value}' for variable '{variable}': {source}")]
    InvalidStartIndex {
        variable: String,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Errors raised while assembling the output document.
#[derive(Debug, Error)]
pub enum MapError {
    /// A variable reference on one utterance could not be converted to a span.
    #[error("intent '{intent}', utterance {utterance}: {source}")]
    Span {
        intent: String,
        utterance: usize,
        #[source]
        source: SpanError,
    },
}

/// Precondition failures on a fetched project.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The project failed a precondition (e.g. empty name).
    #[error("Validation error: {0}")]
    Validation(String),
}
