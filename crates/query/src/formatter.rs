//! Rendering of raw store items into the public response shape.

use chrono::{FixedOffset, LocalResult, TimeZone};
use serde::Serialize;

use common::{AttributeMap, extract_number, extract_text};

/// Display timezone for rendered timestamps (UTC+8).
const DISPLAY_OFFSET_SECS: i32 = 8 * 3600;

/// A projection record rendered into the public response shape.
///
/// Absent optional fields are pruned during serialization, keeping the
/// response sparse like the stored item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormattedRecord {
    pub transaction_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub created_at: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_msg: Option<String>,
}

/// Renders a millisecond timestamp as a UTC+8 wall-clock string.
///
/// Zero and unrepresentable timestamps render as absent, not as the epoch.
pub fn format_timestamp(millis: i64) -> Option<String> {
    if millis == 0 {
        return None;
    }
    let offset = FixedOffset::east_opt(DISPLAY_OFFSET_SECS)?;
    match offset.timestamp_millis_opt(millis) {
        LocalResult::Single(dt) => Some(dt.format("%Y-%m-%d %H:%M:%S UTC+8").to_string()),
        _ => {
            tracing::warn!(millis, "timestamp out of representable range");
            None
        }
    }
}

/// Non-empty text attribute, normalizing empty strings to absent.
fn optional_text(item: &AttributeMap, key: &str) -> Option<String> {
    extract_text(item, key)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}

/// Converts one raw item; `None` when the item is malformed.
///
/// An item without its identifier cannot be rendered meaningfully and is
/// dropped with a warning. Everything else is best-effort: a missing or
/// non-numeric timestamp becomes `0` with no rendered wall-clock time.
pub fn format_item(item: &AttributeMap) -> Option<FormattedRecord> {
    let Some(transaction_id) = optional_text(item, "transaction_id") else {
        tracing::warn!("dropping malformed item without transaction_id");
        return None;
    };

    let created_at = extract_number(item, "created_at").unwrap_or(0);

    Some(FormattedRecord {
        transaction_id,
        user_id: optional_text(item, "user_id"),
        created_at,
        created_time: format_timestamp(created_at),
        notification_title: optional_text(item, "notification_title"),
        status: optional_text(item, "status"),
        platform: optional_text(item, "platform"),
        marketing_id: optional_text(item, "marketing_id"),
        error_msg: optional_text(item, "error_msg"),
    })
}

/// Converts raw items independently, dropping malformed ones.
///
/// Never fails the whole response: a malformed item only logs a warning.
pub fn format_items(items: &[AttributeMap]) -> Vec<FormattedRecord> {
    let formatted: Vec<_> = items.iter().filter_map(format_item).collect();
    if formatted.len() < items.len() {
        tracing::warn!(
            dropped = items.len() - formatted.len(),
            "dropped malformed items while formatting response"
        );
    }
    formatted
}
