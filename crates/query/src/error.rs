use thiserror::Error;

use attribute_store::StoreError;

/// Errors internal to query execution.
///
/// These never escape the engine: [`crate::QueryEngine::execute`] converts
/// them into a `success = false` response with a human-readable message, so
/// callers always receive the uniform response shape.
#[derive(Debug, Error)]
pub enum QueryError {
    /// The store rejected the query's primary operation.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for query operations.
pub type Result<T> = std::result::Result<T, QueryError>;
