//! Query request and response shapes.

use serde::Serialize;

use crate::formatter::FormattedRecord;

/// A parameterized read request against the projection store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryRequest {
    /// Point lookup by primary identifier; at most one result.
    ByIdentifier(String),
    /// Records with delivery status FAILED, optionally narrowed to one
    /// identifier. Without an identifier this is a full-table scan.
    ByFailureStatus(Option<String>),
    /// Records carrying the given external correlation identifier.
    /// Always a full-table scan.
    ByCorrelationId(String),
    /// The most recent `limit` records by creation timestamp, descending.
    Recent(usize),
}

/// Metadata echoed back with a response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryInfo {
    pub query_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

/// Uniform response shape for every query variant.
///
/// `success = false` only when the query itself could not be satisfied
/// (store error). Zero matching rows is `success = true` with empty `items`;
/// the two cases are distinguishable via the `success` flag.
#[derive(Debug, Clone, Serialize)]
pub struct QueryResponse {
    pub success: bool,
    pub items: Vec<FormattedRecord>,
    pub message: String,
    pub total_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_info: Option<QueryInfo>,
}

impl QueryResponse {
    /// A successful response; `total_count` tracks the item count.
    pub fn ok(
        items: Vec<FormattedRecord>,
        message: impl Into<String>,
        query_info: Option<QueryInfo>,
    ) -> Self {
        Self {
            success: true,
            total_count: items.len(),
            items,
            message: message.into(),
            query_info,
        }
    }

    /// A failure response for a query that could not be executed.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            items: Vec::new(),
            message: message.into(),
            total_count: 0,
            query_info: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_counts_items() {
        let response = QueryResponse::ok(Vec::new(), "empty", None);
        assert!(response.success);
        assert_eq!(response.total_count, 0);
    }

    #[test]
    fn failure_has_no_items() {
        let response = QueryResponse::failure("store unavailable");
        assert!(!response.success);
        assert!(response.items.is_empty());
        assert_eq!(response.message, "store unavailable");
    }

    #[test]
    fn serialization_prunes_absent_query_info() {
        let response = QueryResponse::failure("nope");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json.get("query_info").is_none());
        assert_eq!(json["success"], serde_json::json!(false));
    }

    #[test]
    fn query_info_prunes_absent_fields() {
        let info = QueryInfo {
            query_type: "recent",
            identifier: None,
            limit: Some(30),
        };
        let json = serde_json::to_value(&info).unwrap();
        assert!(json.get("identifier").is_none());
        assert_eq!(json["limit"], serde_json::json!(30));
    }
}
