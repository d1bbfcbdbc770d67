//! # luis-core
//!
//! Source project model, LUIS document model, and the transformation engine
//! that maps one onto the other.
//!
//! - [`project`]: the Botmock project as fetched (intents, utterances, variables)
//! - [`document`]: the LUIS application JSON shape
//! - [`sanitize`]: marker stripping for text and entity names
//! - [`span`]: entity character offsets from `%`-delimited references
//! - [`mapper`]: assembly of the full document
//!
//! Everything in this crate is synchronous and free of I/O. Configuration is
//! handed in as an [`ExportSettings`] value; nothing here reads the environment.

pub mod document;
pub mod errors;
pub mod mapper;
pub mod project;
pub mod sanitize;
pub mod span;

pub use document::LuisApp;
pub use errors::{CoreError, MapError, SpanError};
pub use mapper::{ExportSettings, build_document};
pub use project::{Intent, Project, Utterance, Variable, VariableRef};
pub use sanitize::{MARKER, sanitize};
pub use span::{EntitySpan, compute_span, legacy_span};
