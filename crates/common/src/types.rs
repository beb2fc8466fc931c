use serde::{Deserialize, Serialize};

/// Delivery status of a notification.
///
/// Parsing is permissive: an absent or unrecognized wire string becomes
/// [`NotificationStatus::Unknown`] rather than silently defaulting to an
/// arbitrary real status, so data-quality issues stay visible downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum NotificationStatus {
    Sent,
    Delivered,
    Failed,
    Unknown,
}

impl NotificationStatus {
    /// Parses a wire string, mapping absent or unrecognized input to `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("SENT") => Self::Sent,
            Some("DELIVERED") => Self::Delivered,
            Some("FAILED") => Self::Failed,
            _ => Self::Unknown,
        }
    }

    /// Returns the wire string for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sent => "SENT",
            Self::Delivered => "DELIVERED",
            Self::Failed => "FAILED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Target platform of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Platform {
    Ios,
    Android,
    Webpush,
    Unknown,
}

impl Platform {
    /// Parses a wire string, mapping absent or unrecognized input to `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("IOS") => Self::Ios,
            Some("ANDROID") => Self::Android,
            Some("WEBPUSH") => Self::Webpush,
            _ => Self::Unknown,
        }
    }

    /// Returns the wire string for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "IOS",
            Self::Android => "ANDROID",
            Self::Webpush => "WEBPUSH",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
