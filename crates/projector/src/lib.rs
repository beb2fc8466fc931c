//! Change-feed projector for the CQRS read side.
//!
//! Consumes batches of change events from the write-optimized store and
//! maintains the read-optimized projection table:
//! - [`decoder`] turns wire-format change records into typed [`ChangeEvent`]s
//! - [`transform`] reconstructs the write-side [`SourceRecord`] and maps it
//!   to the denormalized [`ProjectionRecord`]
//! - [`ProjectionRepository`] applies idempotent upserts and deletes
//! - [`StreamProjector`] orchestrates a batch, recovering per-record failures
//!   so one bad record never aborts the rest

pub mod decoder;
pub mod error;
pub mod processor;
pub mod repository;
pub mod transform;

pub use decoder::{ChangeEvent, EventKind, RawChangeRecord, decode};
pub use error::{ProjectorError, Result};
pub use processor::{BatchOutcome, StreamProjector};
pub use repository::ProjectionRepository;
pub use transform::{
    ProjectionRecord, SourceRecord, parse_record_identity, parse_source_record, project,
    to_storage_item,
};
