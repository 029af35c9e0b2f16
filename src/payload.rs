//! The outbound event payload record.
//!
//! A [`Payload`] is built once by the builder and immutable afterwards;
//! downstream queueing and transport only read it. Identity is the message
//! id, ordering is the creation timestamp.

use crate::value::Properties;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Distinct id substituted for the real subject in sensitive mode.
///
/// 36 characters and deliberately not a well-formed UUID. Downstream
/// consumers match this literal byte-for-byte; it must never change.
pub const SENSITIVE_DISTINCT_ID: &str = "00000000-0000-0000-00000000000000000";

/// Kind of analytics event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    /// Regular analytics event; context and feature flags are merged into
    /// its properties.
    Capture,
    /// Links two distinct ids; properties pass through untouched.
    Alias,
}

/// One immutable analytics event, ready for transport.
///
/// Wire field names are camelCase (`messageId`, `distinctId`); the event
/// type serializes as its lowercase name under the key `type`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    /// Instant of creation
    pub timestamp: DateTime<Utc>,
    /// Globally unique identifier; payload identity for equality and hashing
    pub message_id: String,
    /// Subject of the event
    pub distinct_id: String,
    /// Caller-supplied event name, opaque
    pub event: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub properties: Properties,
}

// Two payloads are the same event iff their message ids match, independent
// of every other field.
impl PartialEq for Payload {
    fn eq(&self, other: &Self) -> bool {
        self.message_id == other.message_id
    }
}

impl Eq for Payload {}

impl Hash for Payload {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message_id.hash(state);
    }
}

// Queue ordering is by timestamp only. Equal timestamps compare Equal, so
// a stable sort preserves input order; this ordering is intentionally not
// consistent with `Eq`, which keys on the message id.
impl Ord for Payload {
    fn cmp(&self, other: &Self) -> Ordering {
        self.timestamp.cmp(&other.timestamp)
    }
}

impl PartialOrd for Payload {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
