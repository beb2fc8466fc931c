//! Stream projector: orchestrates decode → transform → apply for a batch.

use crate::decoder::{ChangeEvent, EventKind, RawChangeRecord, decode};
use crate::repository::ProjectionRepository;
use crate::transform::{parse_record_identity, parse_source_record, project};
use crate::{ProjectorError, Result};

/// Outcome of projecting one delivered batch.
///
/// `skipped` counts records with an unknown event kind, separately from
/// success and failure. `total = succeeded + failed + skipped`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchOutcome {
    /// Percentage of records that applied successfully; an empty batch is 100%.
    pub fn success_rate(&self) -> f64 {
        if self.total == 0 {
            100.0
        } else {
            self.succeeded as f64 / self.total as f64 * 100.0
        }
    }
}

impl std::fmt::Display for BatchOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}/{} succeeded ({} failed, {} skipped)",
            self.succeeded, self.total, self.failed, self.skipped
        )
    }
}

/// Projects batches of change events into the read-optimized store.
///
/// Records process strictly in delivery order. Every per-record error
/// (decode, parse, store) is logged, counted, and recovered locally — the
/// batch never aborts early. Duplicate or out-of-order redelivery of the
/// same event is tolerated because upsert and delete are idempotent.
pub struct StreamProjector {
    repository: ProjectionRepository,
}

impl StreamProjector {
    /// Creates a projector over an already-constructed repository.
    pub fn new(repository: ProjectionRepository) -> Self {
        Self { repository }
    }

    /// Processes a delivered batch, returning per-disposition counts.
    ///
    /// Infallible: every per-record error is recovered locally.
    #[tracing::instrument(skip(self, records), fields(batch_size = records.len()))]
    pub async fn process_batch(&self, records: &[RawChangeRecord]) -> BatchOutcome {
        let mut outcome = BatchOutcome {
            total: records.len(),
            ..BatchOutcome::default()
        };

        for record in records {
            let event = decode(record);
            match self.apply(&event).await {
                Ok(true) => {
                    outcome.succeeded += 1;
                    metrics::counter!("projector_records_succeeded").increment(1);
                }
                Ok(false) => {
                    outcome.skipped += 1;
                    tracing::warn!(
                        kind = ?record.event_kind,
                        "skipping change record with unknown event kind"
                    );
                    metrics::counter!("projector_records_skipped").increment(1);
                }
                Err(err) => {
                    outcome.failed += 1;
                    tracing::warn!(error = %err, "failed to project change record");
                    metrics::counter!("projector_records_failed").increment(1);
                }
            }
        }

        tracing::info!(
            success_rate = outcome.success_rate(),
            "batch projection complete: {outcome}"
        );

        outcome
    }

    /// Applies one decoded event. `Ok(false)` means skipped (unknown kind).
    async fn apply(&self, event: &ChangeEvent) -> Result<bool> {
        match event.kind {
            EventKind::Created | EventKind::Updated => {
                let image = event.after_image.as_ref().ok_or_else(|| {
                    ProjectorError::Decode(format!(
                        "{} event carries no after image",
                        event.kind
                    ))
                })?;
                let source = parse_source_record(image)?;
                let record = project(source);
                self.repository.upsert(&record).await?;
                Ok(true)
            }
            EventKind::Removed => {
                let image = event.before_image.as_ref().ok_or_else(|| {
                    ProjectorError::Decode("REMOVED event carries no before image".to_string())
                })?;
                // A removal image may be truncated; only the key attributes
                // are needed to address the stored item.
                let (user_id, created_at) = parse_record_identity(image)?;
                self.repository
                    .delete_by_identity(&user_id, created_at)
                    .await?;
                Ok(true)
            }
            EventKind::Unknown => Ok(false),
        }
    }
}
