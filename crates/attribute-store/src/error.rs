use thiserror::Error;

/// Errors surfaced by the underlying attribute store.
///
/// These pass through the projection repository and query engine unchanged;
/// retry policy belongs to the caller's redelivery mechanism, not here.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected the request due to throughput limits.
    #[error("request throttled: {0}")]
    Throttled(String),

    /// The request was malformed, e.g. an item missing a key attribute.
    #[error("validation error: {0}")]
    Validation(String),

    /// The store could not be reached.
    #[error("connection error: {0}")]
    Connection(String),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
