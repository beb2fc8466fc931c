use thiserror::Error;

use attribute_store::StoreError;

/// Errors that can occur while projecting change events.
///
/// All variants are per-record: the batch loop logs them, counts the record
/// as failed, and moves on.
#[derive(Debug, Error)]
pub enum ProjectorError {
    /// The wire record could not be decoded into a usable change event.
    #[error("decode error: {0}")]
    Decode(String),

    /// A parsed record is missing a required field.
    #[error("invalid record: missing required field `{field}`")]
    Validation { field: &'static str },

    /// The underlying store rejected an operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for projector operations.
pub type Result<T> = std::result::Result<T, ProjectorError>;
