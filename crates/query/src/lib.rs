//! Query side of the notification read service.
//!
//! Serves parameterized read requests against the projection store:
//! - [`QueryRequest`] — the closed set of supported queries (by identifier,
//!   by failure status, by correlation identifier, most recent N)
//! - [`QueryEngine`] — executes requests, always producing a
//!   [`QueryResponse`]; store failures become `success = false`, never a
//!   raised error
//! - [`formatter`] — renders stored items into the public response shape
//!
//! The store offers no server-side sort, so recency queries over-fetch and
//! rank client-side.

pub mod config;
pub mod engine;
pub mod error;
pub mod formatter;
pub mod request;

pub use config::QueryConfig;
pub use engine::QueryEngine;
pub use error::{QueryError, Result};
pub use formatter::{FormattedRecord, format_items};
pub use request::{QueryInfo, QueryRequest, QueryResponse};
