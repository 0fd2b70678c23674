//! Error types for decoding interaction log payloads.

use thiserror::Error;

/// A specialized Result type for model decoding operations.
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors that can occur while decoding interaction log payloads.
#[derive(Debug, Error)]
pub enum ModelError {
    /// JSON deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A batch contained the same log id more than once.
    ///
    /// Log ids are unique within a batch; a payload that repeats one is
    /// rejected as a whole rather than deduplicated.
    #[error("duplicate interaction log id: {id}")]
    DuplicateId {
        /// The id that appeared more than once.
        id: i64,
    },
}
