//! Typed wire values for the keyed attribute store.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A scalar value in the store's wire encoding.
///
/// The wire format tags each scalar with its kind: `"S"` for text, `"N"` for
/// numbers (carried as decimal strings), `"BOOL"` for booleans. The serde
/// representation reproduces that encoding exactly, so a wire image like
/// `{"created_at": {"N": "100"}}` deserializes directly into an
/// [`AttributeMap`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttrValue {
    /// A text value (wire tag `"S"`).
    #[serde(rename = "S")]
    Text(String),
    /// A numeric value carried as a decimal string (wire tag `"N"`).
    #[serde(rename = "N")]
    Number(String),
    /// A boolean value (wire tag `"BOOL"`).
    #[serde(rename = "BOOL")]
    Boolean(bool),
}

impl AttrValue {
    /// Creates a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a numeric value from an integer.
    pub fn number(value: i64) -> Self {
        Self::Number(value.to_string())
    }

    /// Returns the text content, or `None` for non-text values.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) | Self::Boolean(_) => None,
        }
    }

    /// Returns the parsed integer content, or `None` for non-numeric values.
    ///
    /// A `Number` whose string content does not parse yields `None` and logs
    /// a warning; it never fails.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Self::Number(raw) => match raw.parse() {
                Ok(n) => Some(n),
                Err(_) => {
                    tracing::warn!(raw, "non-numeric content in number attribute");
                    None
                }
            },
            Self::Text(_) | Self::Boolean(_) => None,
        }
    }

    /// Returns the boolean content, or `None` for non-boolean values.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            Self::Text(_) | Self::Number(_) => None,
        }
    }
}

/// An attribute map: one stored item, change image, or primary key.
pub type AttributeMap = HashMap<String, AttrValue>;

/// Extracts a text attribute, `None` when absent or of another kind.
pub fn extract_text<'a>(map: &'a AttributeMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(AttrValue::as_text)
}

/// Extracts a numeric attribute, `None` when absent, non-numeric, or
/// unparseable.
pub fn extract_number(map: &AttributeMap, key: &str) -> Option<i64> {
    map.get(key).and_then(AttrValue::as_number)
}

/// Extracts a boolean attribute, `None` when absent or of another kind.
pub fn extract_bool(map: &AttributeMap, key: &str) -> Option<bool> {
    map.get(key).and_then(AttrValue::as_bool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_encoding_roundtrip() {
        let value = AttrValue::text("tx_001");
        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json, serde_json::json!({"S": "tx_001"}));

        let back: AttrValue = serde_json::from_value(json).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn number_travels_as_string() {
        let json = serde_json::json!({"N": "1704038400000"});
        let value: AttrValue = serde_json::from_value(json).unwrap();
        assert_eq!(value.as_number(), Some(1_704_038_400_000));
    }

    #[test]
    fn non_numeric_number_yields_none() {
        let value = AttrValue::Number("not-a-number".to_string());
        assert_eq!(value.as_number(), None);
    }

    #[test]
    fn kind_mismatch_yields_none() {
        let value = AttrValue::text("hello");
        assert_eq!(value.as_number(), None);
        assert_eq!(value.as_bool(), None);
        assert_eq!(AttrValue::Boolean(true).as_text(), None);
    }

    #[test]
    fn extract_helpers() {
        let mut map = AttributeMap::new();
        map.insert("user_id".to_string(), AttrValue::text("u1"));
        map.insert("created_at".to_string(), AttrValue::number(100));
        map.insert("read".to_string(), AttrValue::Boolean(false));

        assert_eq!(extract_text(&map, "user_id"), Some("u1"));
        assert_eq!(extract_number(&map, "created_at"), Some(100));
        assert_eq!(extract_bool(&map, "read"), Some(false));
        assert_eq!(extract_text(&map, "missing"), None);
        assert_eq!(extract_number(&map, "user_id"), None);
    }

    #[test]
    fn image_deserializes_from_wire_json() {
        let json = serde_json::json!({
            "transaction_id": {"S": "tx_001"},
            "created_at": {"N": "100"},
            "read": {"BOOL": true},
        });
        let map: AttributeMap = serde_json::from_value(json).unwrap();
        assert_eq!(extract_text(&map, "transaction_id"), Some("tx_001"));
        assert_eq!(extract_number(&map, "created_at"), Some(100));
        assert_eq!(extract_bool(&map, "read"), Some(true));
    }
}
