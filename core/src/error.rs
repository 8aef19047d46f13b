//! Error types for the Jellyfin API client core.
//!
//! # Design
//! Only faults raised by this crate live here. `ApiError` covers caller
//! contract violations detected before a request is handed to the executor,
//! plus body encoding failures executors hit in `RequestDescriptor::body`;
//! `ConfigError` covers lookups against `ClientConfig`. Transport, auth and
//! server-side failures belong to the executor's own error type and are never
//! wrapped by this crate.

use thiserror::Error;

/// Faults raised by this crate. Every variant except `Serialization` is a
/// caller-contract fault raised before the executor is invoked.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The required item identifier was empty or blank.
    #[error("{action}: missing item identifier")]
    MissingIdentifier { action: &'static str },

    /// The identifier would not survive being formatted into a path segment.
    #[error("{action}: malformed item identifier {id:?}")]
    MalformedIdentifier { action: &'static str, id: String },

    /// A required parameter was not supplied, or was blank.
    #[error("{action}: missing required argument `{name}`")]
    MissingArgument { action: &'static str, name: String },

    /// An override named a parameter or body field the action does not declare.
    #[error("{action}: unknown argument `{name}`")]
    UnknownArgument { action: &'static str, name: String },

    /// The request body could not be serialized to JSON. Raised by
    /// `RequestDescriptor::body`, inside the executor.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Faults raised while reading or loading `ClientConfig`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing configuration key `{0}`")]
    MissingKey(String),

    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
