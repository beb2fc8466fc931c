//! Contract over the keyed attribute store backing the read side.
//!
//! The durable store engine is an external collaborator; this crate defines
//! the [`AttributeStore`] trait the projector and query engine depend on
//! (point get/put/delete plus full-table scan with an optional server-side
//! filter) and an in-memory implementation for tests. The store offers no
//! server-side sort over arbitrary attributes, which is why the query engine
//! ranks recency results client-side.

pub mod config;
pub mod error;
pub mod memory;
pub mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use memory::InMemoryAttributeStore;
pub use store::{AttributeStore, RecordKey, ScanFilter, ScanOptions};
