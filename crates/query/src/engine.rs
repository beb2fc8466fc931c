//! Query engine executing read requests against the projection store.

use std::sync::Arc;

use attribute_store::{AttributeStore, RecordKey, ScanFilter, ScanOptions};
use common::{AttrValue, AttributeMap, NotificationStatus, extract_number, extract_text};

use crate::Result;
use crate::config::QueryConfig;
use crate::formatter::format_items;
use crate::request::{QueryInfo, QueryRequest, QueryResponse};

/// Attribute used for point lookups by primary identifier.
const IDENTIFIER_ATTRIBUTE: &str = "transaction_id";
/// Attribute carrying the delivery status.
const STATUS_ATTRIBUTE: &str = "status";
/// Attribute used for recency ranking.
const TIMESTAMP_ATTRIBUTE: &str = "created_at";
/// Over-fetch multiplier compensating for the lack of server-side sort.
const RECENT_OVERFETCH_FACTOR: usize = 2;

/// Executes [`QueryRequest`]s, always producing a [`QueryResponse`].
///
/// A store failure on the primary operation yields `success = false` with a
/// human-readable message; zero matching rows is a successful empty
/// response. Correlation and unscoped failure queries are full-table scans —
/// O(table size) — because the store supports no secondary-index sort or
/// arbitrary-attribute lookup.
pub struct QueryEngine {
    store: Arc<dyn AttributeStore>,
    config: QueryConfig,
}

impl QueryEngine {
    /// Creates an engine over an explicitly constructed store handle.
    pub fn new(store: Arc<dyn AttributeStore>, config: QueryConfig) -> Self {
        Self { store, config }
    }

    /// Executes a request. Never fails: store errors become a structured
    /// failure response.
    #[tracing::instrument(skip(self))]
    pub async fn execute(&self, request: QueryRequest) -> QueryResponse {
        let result = match &request {
            QueryRequest::ByIdentifier(id) => self.by_identifier(id).await,
            QueryRequest::ByFailureStatus(id) => self.by_failure(id.as_deref()).await,
            QueryRequest::ByCorrelationId(id) => self.by_correlation(id).await,
            QueryRequest::Recent(limit) => self.recent(*limit).await,
        };

        match result {
            Ok(response) => {
                metrics::counter!("queries_executed").increment(1);
                response
            }
            Err(err) => {
                metrics::counter!("queries_failed").increment(1);
                tracing::error!(error = %err, "query could not be executed");
                QueryResponse::failure(format!("Query failed: {err}"))
            }
        }
    }

    /// Point lookup by primary identifier.
    pub async fn query_by_identifier(&self, id: &str) -> QueryResponse {
        self.execute(QueryRequest::ByIdentifier(id.to_owned())).await
    }

    /// Failed notifications, optionally narrowed to one identifier.
    pub async fn query_by_failure(&self, id: Option<&str>) -> QueryResponse {
        self.execute(QueryRequest::ByFailureStatus(id.map(str::to_owned)))
            .await
    }

    /// Notifications carrying the given correlation identifier.
    pub async fn query_by_correlation(&self, id: &str) -> QueryResponse {
        self.execute(QueryRequest::ByCorrelationId(id.to_owned()))
            .await
    }

    /// The most recent notifications; `None` uses the configured default.
    pub async fn query_recent(&self, limit: Option<usize>) -> QueryResponse {
        let limit = limit.unwrap_or(self.config.default_recent_limit);
        self.execute(QueryRequest::Recent(limit)).await
    }

    async fn by_identifier(&self, id: &str) -> Result<QueryResponse> {
        let key = RecordKey::new().with(IDENTIFIER_ATTRIBUTE, AttrValue::text(id));
        let raw: Vec<AttributeMap> = self.store.get_item(&key).await?.into_iter().collect();
        let items = format_items(&raw);

        let message = if items.is_empty() {
            format!("No notifications found for transaction ID: {id}")
        } else {
            format!(
                "Successfully retrieved {} notifications for transaction ID: {id}",
                items.len()
            )
        };

        Ok(QueryResponse::ok(
            items,
            message,
            Some(QueryInfo {
                query_type: "by_identifier",
                identifier: Some(id.to_owned()),
                limit: None,
            }),
        ))
    }

    async fn by_failure(&self, id: Option<&str>) -> Result<QueryResponse> {
        // An empty or blank identifier means "all failed records".
        let id = id.map(str::trim).filter(|s| !s.is_empty());

        let raw: Vec<AttributeMap> = match id {
            Some(id) => {
                // Point lookup, then filter locally: a record that exists with
                // another status yields an empty success, not an error.
                let key = RecordKey::new().with(IDENTIFIER_ATTRIBUTE, AttrValue::text(id));
                self.store
                    .get_item(&key)
                    .await?
                    .filter(|item| {
                        extract_text(item, STATUS_ATTRIBUTE)
                            == Some(NotificationStatus::Failed.as_str())
                    })
                    .into_iter()
                    .collect()
            }
            None => {
                let filter = ScanFilter::eq(
                    STATUS_ATTRIBUTE,
                    AttrValue::text(NotificationStatus::Failed.as_str()),
                );
                self.store
                    .scan(ScanOptions::new().with_filter(filter))
                    .await?
            }
        };

        let items = format_items(&raw);
        let message = match (id, items.len()) {
            (Some(id), 0) => format!("No failed notifications found for transaction ID: {id}"),
            (None, 0) => "No failed notifications found in the system".to_string(),
            (Some(id), n) => {
                format!("Successfully retrieved {n} failed notifications for transaction ID: {id}")
            }
            (None, n) => format!("Successfully retrieved {n} failed notifications"),
        };

        Ok(QueryResponse::ok(
            items,
            message,
            Some(QueryInfo {
                query_type: "failed_notifications",
                identifier: id.map(str::to_owned),
                limit: None,
            }),
        ))
    }

    async fn by_correlation(&self, id: &str) -> Result<QueryResponse> {
        let filter = ScanFilter::eq(self.config.correlation_attribute.clone(), AttrValue::text(id));
        let raw = self
            .store
            .scan(ScanOptions::new().with_filter(filter))
            .await?;
        let items = format_items(&raw);

        let message = if items.is_empty() {
            format!("No notifications found for correlation ID: {id}")
        } else {
            format!(
                "Successfully retrieved {} notifications for correlation ID: {id}",
                items.len()
            )
        };

        Ok(QueryResponse::ok(
            items,
            message,
            Some(QueryInfo {
                query_type: "by_correlation",
                identifier: Some(id.to_owned()),
                limit: None,
            }),
        ))
    }

    async fn recent(&self, requested: usize) -> Result<QueryResponse> {
        let limit = self.config.clamp_limit(requested);

        // No sort index exists, so over-fetch and rank client-side.
        let mut raw = self
            .store
            .scan(ScanOptions::new().with_limit(limit * RECENT_OVERFETCH_FACTOR))
            .await?;

        // Stable descending sort on the creation timestamp. Items with a
        // missing or non-numeric timestamp sort last; ties keep scan order.
        raw.sort_by_key(|item| {
            std::cmp::Reverse(extract_number(item, TIMESTAMP_ATTRIBUTE).unwrap_or(i64::MIN))
        });
        raw.truncate(limit);

        let items = format_items(&raw);
        let message = if items.is_empty() {
            "No recent notifications found in the system".to_string()
        } else {
            format!(
                "Successfully retrieved {} recent notifications (limit: {limit})",
                items.len()
            )
        };

        Ok(QueryResponse::ok(
            items,
            message,
            Some(QueryInfo {
                query_type: "recent",
                identifier: None,
                limit: Some(limit),
            }),
        ))
    }
}
