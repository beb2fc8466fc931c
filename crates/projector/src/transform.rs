//! Write-side record reconstruction and read-side projection mapping.

use common::{
    AttrValue, AttributeMap, NotificationStatus, Platform, extract_number, extract_text,
};

use crate::{ProjectorError, Result};

/// A write-side record reconstructed from a change image.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceRecord {
    pub transaction_id: String,
    pub user_id: String,
    pub created_at: i64,
    pub notification_title: String,
    pub status: NotificationStatus,
    pub platform: Platform,
    pub marketing_id: Option<String>,
    pub device_token: Option<String>,
    pub payload: Option<String>,
    pub error_msg: Option<String>,
}

/// The read-side denormalized record, keyed by `(user_id, created_at)`.
///
/// Optional attributes are carried only when non-empty (sparse projection);
/// `device_token` and `payload` are write-side-only and never projected.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionRecord {
    pub user_id: String,
    pub created_at: i64,
    pub transaction_id: String,
    pub notification_title: String,
    pub status: NotificationStatus,
    pub platform: Platform,
    pub marketing_id: Option<String>,
    pub error_msg: Option<String>,
}

fn required_text(image: &AttributeMap, field: &'static str) -> Result<String> {
    extract_text(image, field)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .ok_or(ProjectorError::Validation { field })
}

fn optional_text(image: &AttributeMap, field: &str) -> Option<String> {
    extract_text(image, field).map(str::to_owned)
}

/// Reconstructs a [`SourceRecord`] from a change image.
///
/// Missing identifier, creation timestamp, owner key, or title is a hard
/// per-record failure. Status and platform are best-effort metadata: absent
/// or unrecognized values become the explicit `Unknown` variant.
pub fn parse_source_record(image: &AttributeMap) -> Result<SourceRecord> {
    let created_at = extract_number(image, "created_at").ok_or(ProjectorError::Validation {
        field: "created_at",
    })?;

    Ok(SourceRecord {
        transaction_id: required_text(image, "transaction_id")?,
        user_id: required_text(image, "user_id")?,
        created_at,
        notification_title: required_text(image, "notification_title")?,
        status: NotificationStatus::parse(extract_text(image, "status")),
        platform: Platform::parse(extract_text(image, "platform")),
        marketing_id: optional_text(image, "marketing_id"),
        device_token: optional_text(image, "device_token"),
        payload: optional_text(image, "payload"),
        error_msg: optional_text(image, "error_msg"),
    })
}

/// Extracts the `(user_id, created_at)` identity from a change image.
///
/// Deletes only need the key attributes; a removal image may be truncated
/// and carry nothing else. Missing identity attributes are still a hard
/// per-record failure.
pub fn parse_record_identity(image: &AttributeMap) -> Result<(String, i64)> {
    let user_id = required_text(image, "user_id")?;
    let created_at = extract_number(image, "created_at").ok_or(ProjectorError::Validation {
        field: "created_at",
    })?;
    Ok((user_id, created_at))
}

/// Maps a write-side record to its read-side projection. Pure and total.
pub fn project(source: SourceRecord) -> ProjectionRecord {
    ProjectionRecord {
        user_id: source.user_id,
        created_at: source.created_at,
        transaction_id: source.transaction_id,
        notification_title: source.notification_title,
        status: source.status,
        platform: source.platform,
        marketing_id: source.marketing_id.filter(|s| !s.is_empty()),
        error_msg: source.error_msg.filter(|s| !s.is_empty()),
    }
}

/// Renders a projection record as a storage item.
///
/// Enums become their wire strings; empty optional attributes are omitted.
pub fn to_storage_item(record: &ProjectionRecord) -> AttributeMap {
    let mut item = AttributeMap::new();
    item.insert("user_id".to_string(), AttrValue::text(&record.user_id));
    item.insert("created_at".to_string(), AttrValue::number(record.created_at));
    item.insert(
        "transaction_id".to_string(),
        AttrValue::text(&record.transaction_id),
    );
    item.insert(
        "notification_title".to_string(),
        AttrValue::text(&record.notification_title),
    );
    item.insert("status".to_string(), AttrValue::text(record.status.as_str()));
    item.insert(
        "platform".to_string(),
        AttrValue::text(record.platform.as_str()),
    );

    if let Some(marketing_id) = record.marketing_id.as_deref().filter(|s| !s.is_empty()) {
        item.insert("marketing_id".to_string(), AttrValue::text(marketing_id));
    }
    if let Some(error_msg) = record.error_msg.as_deref().filter(|s| !s.is_empty()) {
        item.insert("error_msg".to_string(), AttrValue::text(error_msg));
    }

    item
}
