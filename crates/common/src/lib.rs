//! Shared types for the notification query service.
//!
//! Provides the typed wire-value model ([`AttrValue`], [`AttributeMap`]) used
//! by both the change-feed projector and the query engine, plus the closed
//! domain enums ([`NotificationStatus`], [`Platform`]).

pub mod types;
pub mod value;

pub use types::{NotificationStatus, Platform};
pub use value::{AttrValue, AttributeMap, extract_bool, extract_number, extract_text};
