//! Storage Errors
//!
//! Failures of the persistence layer. Mutations never fail; these only
//! describe what went wrong while reading or writing durable state.

use thiserror::Error;

/// Common result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to decode `{key}`: {source}")]
    Decode {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to encode todo list: {0}")]
    Encode(#[from] serde_json::Error),
}
