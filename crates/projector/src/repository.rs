//! Projection repository applying records against the read-optimized store.

use std::sync::Arc;

use attribute_store::{AttributeStore, RecordKey};
use common::AttrValue;

use crate::Result;
use crate::transform::{ProjectionRecord, to_storage_item};

/// Applies upserts and deletes against the read-optimized store.
///
/// Store failures (throttling, validation, connectivity) surface unchanged;
/// there is no internal retry. Retry policy belongs to the caller's
/// redelivery mechanism.
#[derive(Clone)]
pub struct ProjectionRepository {
    store: Arc<dyn AttributeStore>,
}

impl ProjectionRepository {
    /// Creates a repository over an explicitly constructed store handle.
    ///
    /// The store client's lifecycle is owned by process bootstrap, not by
    /// first use inside the repository.
    pub fn new(store: Arc<dyn AttributeStore>) -> Self {
        Self { store }
    }

    /// Whole-item upsert (last-writer-wins, no partial merge).
    ///
    /// Idempotent: replaying the same event converges on the same stored item.
    pub async fn upsert(&self, record: &ProjectionRecord) -> Result<()> {
        let item = to_storage_item(record);
        self.store.put_item(item).await?;
        tracing::info!(
            transaction_id = %record.transaction_id,
            user_id = %record.user_id,
            "saved projection record"
        );
        Ok(())
    }

    /// Deletes by `(user_id, created_at)` identity.
    ///
    /// Idempotent: deleting an absent record is a no-op, not an error.
    pub async fn delete_by_identity(&self, user_id: &str, created_at: i64) -> Result<()> {
        let key = RecordKey::new()
            .with("user_id", AttrValue::text(user_id))
            .with("created_at", AttrValue::number(created_at));
        self.store.delete_item(&key).await?;
        tracing::info!(user_id, created_at, "deleted projection record");
        Ok(())
    }
}
