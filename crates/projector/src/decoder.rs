//! Change event decoding from the wire format.

use serde::Deserialize;

use common::AttributeMap;

/// The kind of mutation a change record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Created,
    Updated,
    Removed,
    /// Absent or unrecognized kind. Records with this kind are skipped.
    Unknown,
}

impl EventKind {
    /// Parses a wire string, mapping absent or unrecognized input to `Unknown`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("CREATED") => Self::Created,
            Some("UPDATED") => Self::Updated,
            Some("REMOVED") => Self::Removed,
            _ => Self::Unknown,
        }
    }

    /// Returns the wire string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Updated => "UPDATED",
            Self::Removed => "REMOVED",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A change record as delivered on the wire, prior to decoding.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawChangeRecord {
    #[serde(default)]
    pub event_kind: Option<String>,
    #[serde(default)]
    pub before_image: Option<AttributeMap>,
    #[serde(default)]
    pub after_image: Option<AttributeMap>,
}

/// A typed change event.
///
/// CREATED/UPDATED events are expected to carry `after_image`; REMOVED
/// events `before_image`. The decoder does not enforce this — a missing
/// image is a per-record failure in the projector.
#[derive(Debug, Clone)]
pub struct ChangeEvent {
    pub kind: EventKind,
    pub before_image: Option<AttributeMap>,
    pub after_image: Option<AttributeMap>,
}

/// Decodes a wire change record into a typed event.
///
/// Total and side-effect free: an absent or unrecognized kind becomes
/// [`EventKind::Unknown`] rather than an error.
pub fn decode(raw: &RawChangeRecord) -> ChangeEvent {
    ChangeEvent {
        kind: EventKind::parse(raw.event_kind.as_deref()),
        before_image: raw.before_image.clone(),
        after_image: raw.after_image.clone(),
    }
}
