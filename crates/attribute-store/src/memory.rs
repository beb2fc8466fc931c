use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AttrValue, AttributeMap};

use crate::{
    Result, StoreError,
    store::{AttributeStore, RecordKey, ScanOptions},
};

/// In-memory attribute store for testing.
///
/// Items are indexed by the configured key schema and kept in insertion
/// order, so scans return items in a stable order. A put replaces the whole
/// item with the same key (last-writer-wins), matching the durable store's
/// semantics.
#[derive(Clone)]
pub struct InMemoryAttributeStore {
    key_schema: Vec<String>,
    items: Arc<RwLock<Vec<(String, AttributeMap)>>>,
}

impl InMemoryAttributeStore {
    /// Creates an empty store keyed by the given attribute names.
    pub fn new(key_schema: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            key_schema: key_schema.into_iter().map(Into::into).collect(),
            items: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the total number of stored items.
    pub async fn item_count(&self) -> usize {
        self.items.read().await.len()
    }

    /// Clears all items.
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }

    /// Builds the canonical index string from an attribute map, requiring
    /// every key-schema attribute to be present.
    fn index_of(&self, attributes: &AttributeMap) -> Result<String> {
        let mut parts = Vec::with_capacity(self.key_schema.len());
        for name in &self.key_schema {
            let value = attributes
                .get(name)
                .ok_or_else(|| StoreError::Validation(format!("missing key attribute `{name}`")))?;
            let rendered = match value {
                AttrValue::Text(s) => s.clone(),
                AttrValue::Number(n) => n.clone(),
                AttrValue::Boolean(b) => b.to_string(),
            };
            parts.push(rendered);
        }
        Ok(parts.join("\u{1f}"))
    }
}

#[async_trait]
impl AttributeStore for InMemoryAttributeStore {
    async fn get_item(&self, key: &RecordKey) -> Result<Option<AttributeMap>> {
        let index = self.index_of(key.attributes())?;
        let items = self.items.read().await;
        Ok(items
            .iter()
            .find(|(idx, _)| *idx == index)
            .map(|(_, item)| item.clone()))
    }

    async fn put_item(&self, item: AttributeMap) -> Result<()> {
        let index = self.index_of(&item)?;
        let mut items = self.items.write().await;
        if let Some(slot) = items.iter_mut().find(|(idx, _)| *idx == index) {
            slot.1 = item;
        } else {
            items.push((index, item));
        }
        Ok(())
    }

    async fn delete_item(&self, key: &RecordKey) -> Result<()> {
        let index = self.index_of(key.attributes())?;
        let mut items = self.items.write().await;
        items.retain(|(idx, _)| *idx != index);
        Ok(())
    }

    async fn scan(&self, options: ScanOptions) -> Result<Vec<AttributeMap>> {
        let items = self.items.read().await;
        let limit = options.limit.unwrap_or(usize::MAX);
        Ok(items
            .iter()
            .map(|(_, item)| item)
            .filter(|item| options.filter.as_ref().is_none_or(|f| f.matches(item)))
            .take(limit)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::ScanFilter;

    fn record(user_id: &str, created_at: i64, status: &str) -> AttributeMap {
        let mut item = AttributeMap::new();
        item.insert("user_id".to_string(), AttrValue::text(user_id));
        item.insert("created_at".to_string(), AttrValue::number(created_at));
        item.insert("status".to_string(), AttrValue::text(status));
        item
    }

    fn store() -> InMemoryAttributeStore {
        InMemoryAttributeStore::new(["user_id", "created_at"])
    }

    fn key(user_id: &str, created_at: i64) -> RecordKey {
        RecordKey::new()
            .with("user_id", AttrValue::text(user_id))
            .with("created_at", AttrValue::number(created_at))
    }

    #[tokio::test]
    async fn put_then_get_roundtrip() {
        let store = store();
        store.put_item(record("u1", 100, "SENT")).await.unwrap();

        let item = store.get_item(&key("u1", 100)).await.unwrap().unwrap();
        assert_eq!(item.get("status"), Some(&AttrValue::text("SENT")));
        assert!(store.get_item(&key("u1", 200)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn put_replaces_whole_item() {
        let store = store();
        let mut first = record("u1", 100, "SENT");
        first.insert("error_msg".to_string(), AttrValue::text("boom"));
        store.put_item(first).await.unwrap();

        store.put_item(record("u1", 100, "DELIVERED")).await.unwrap();

        assert_eq!(store.item_count().await, 1);
        let item = store.get_item(&key("u1", 100)).await.unwrap().unwrap();
        assert_eq!(item.get("status"), Some(&AttrValue::text("DELIVERED")));
        // No partial merge: stale attributes from the old item are gone.
        assert!(!item.contains_key("error_msg"));
    }

    #[tokio::test]
    async fn put_missing_key_attribute_is_validation_error() {
        let store = store();
        let mut item = AttributeMap::new();
        item.insert("user_id".to_string(), AttrValue::text("u1"));

        let err = store.put_item(item).await.unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_absent_item_is_noop() {
        let store = store();
        store.delete_item(&key("ghost", 1)).await.unwrap();
        assert_eq!(store.item_count().await, 0);
    }

    #[tokio::test]
    async fn delete_removes_item() {
        let store = store();
        store.put_item(record("u1", 100, "SENT")).await.unwrap();
        store.put_item(record("u2", 200, "SENT")).await.unwrap();

        store.delete_item(&key("u1", 100)).await.unwrap();

        assert_eq!(store.item_count().await, 1);
        assert!(store.get_item(&key("u1", 100)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn scan_preserves_insertion_order() {
        let store = store();
        store.put_item(record("u1", 100, "SENT")).await.unwrap();
        store.put_item(record("u2", 200, "FAILED")).await.unwrap();
        store.put_item(record("u3", 300, "SENT")).await.unwrap();

        let items = store.scan(ScanOptions::new()).await.unwrap();
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].get("user_id"), Some(&AttrValue::text("u1")));
        assert_eq!(items[2].get("user_id"), Some(&AttrValue::text("u3")));
    }

    #[tokio::test]
    async fn scan_applies_filter_and_limit() {
        let store = store();
        for i in 0..5 {
            let status = if i % 2 == 0 { "FAILED" } else { "SENT" };
            store
                .put_item(record(&format!("u{i}"), i, status))
                .await
                .unwrap();
        }

        let failed = store
            .scan(ScanOptions::new().with_filter(ScanFilter::eq("status", AttrValue::text("FAILED"))))
            .await
            .unwrap();
        assert_eq!(failed.len(), 3);

        let limited = store
            .scan(ScanOptions::new().with_limit(2))
            .await
            .unwrap();
        assert_eq!(limited.len(), 2);
    }

    #[tokio::test]
    async fn single_attribute_key_schema() {
        let store = InMemoryAttributeStore::new(["transaction_id"]);
        let mut item = AttributeMap::new();
        item.insert("transaction_id".to_string(), AttrValue::text("tx_001"));
        item.insert("status".to_string(), AttrValue::text("FAILED"));
        store.put_item(item).await.unwrap();

        let key = RecordKey::new().with("transaction_id", AttrValue::text("tx_001"));
        assert!(store.get_item(&key).await.unwrap().is_some());
    }
}
