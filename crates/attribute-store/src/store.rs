use async_trait::async_trait;

use common::{AttrValue, AttributeMap};

use crate::Result;

/// Primary key of an item: a map of the table's key attributes.
///
/// The read table is keyed `(user_id, created_at)`; tables serving point
/// lookups by identifier are keyed on the identifier attribute alone.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordKey(AttributeMap);

impl RecordKey {
    /// Creates an empty key.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key attribute.
    pub fn with(mut self, name: impl Into<String>, value: AttrValue) -> Self {
        self.0.insert(name.into(), value);
        self
    }

    /// Returns the key attributes.
    pub fn attributes(&self) -> &AttributeMap {
        &self.0
    }
}

/// Server-side filter predicates the store supports during a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanFilter {
    /// Keep items whose attribute equals the given value.
    AttributeEquals { attribute: String, value: AttrValue },
}

impl ScanFilter {
    /// Equality filter on a single attribute.
    pub fn eq(attribute: impl Into<String>, value: AttrValue) -> Self {
        Self::AttributeEquals {
            attribute: attribute.into(),
            value,
        }
    }

    /// Evaluates the predicate against one item.
    pub fn matches(&self, item: &AttributeMap) -> bool {
        match self {
            Self::AttributeEquals { attribute, value } => item.get(attribute) == Some(value),
        }
    }
}

/// Options for a full-table scan.
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    /// Optional server-side filter applied before results are returned.
    pub filter: Option<ScanFilter>,
    /// Maximum number of items to return, in scan order.
    pub limit: Option<usize>,
}

impl ScanOptions {
    /// Creates an unfiltered, unbounded scan.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a server-side filter.
    pub fn with_filter(mut self, filter: ScanFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    /// Bounds the number of returned items.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Core trait over a keyed attribute store bound to one table.
///
/// Implementations must be thread-safe (Send + Sync). Writes are last-writer-
/// wins on the whole item; there are no client-side transactions. Scans are
/// O(table size) and offer no server-side sort over arbitrary attributes.
#[async_trait]
pub trait AttributeStore: Send + Sync {
    /// Point lookup by full primary key; at most one item.
    async fn get_item(&self, key: &RecordKey) -> Result<Option<AttributeMap>>;

    /// Writes a whole item, replacing any item with the same key.
    async fn put_item(&self, item: AttributeMap) -> Result<()>;

    /// Deletes by full primary key. Deleting an absent item is a no-op.
    async fn delete_item(&self, key: &RecordKey) -> Result<()>;

    /// Full-table scan with an optional filter and item limit.
    async fn scan(&self, options: ScanOptions) -> Result<Vec<AttributeMap>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_attributes_accumulate() {
        let key = RecordKey::new()
            .with("user_id", AttrValue::text("u1"))
            .with("created_at", AttrValue::number(100));
        assert_eq!(key.attributes().len(), 2);
        assert_eq!(
            key.attributes().get("user_id"),
            Some(&AttrValue::text("u1"))
        );
    }

    #[test]
    fn filter_matches_equal_attribute() {
        let mut item = AttributeMap::new();
        item.insert("status".to_string(), AttrValue::text("FAILED"));

        let filter = ScanFilter::eq("status", AttrValue::text("FAILED"));
        assert!(filter.matches(&item));

        let filter = ScanFilter::eq("status", AttrValue::text("SENT"));
        assert!(!filter.matches(&item));
    }

    #[test]
    fn filter_missing_attribute_does_not_match() {
        let item = AttributeMap::new();
        let filter = ScanFilter::eq("status", AttrValue::text("FAILED"));
        assert!(!filter.matches(&item));
    }
}
