//! Payload construction.
//!
//! [`PayloadBuilder`] merges caller-supplied event data with provider
//! context, feature-flag state, and the privacy rules for sensitive
//! events, and emits an immutable [`Payload`]. It is a total function:
//! every well-typed input produces a payload, there is no error path.
//!
//! The clock and message-id source are injected so tests can pin both.

use crate::context::{ContextProvider, APP_VERSION};
use crate::payload::{EventType, Payload, SENSITIVE_DISTINCT_ID};
use crate::value::{Properties, Value};
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Feature-flag values are namespaced under this prefix in properties.
pub const FEATURE_FLAG_PREFIX: &str = "$feature/";

/// Sub-object holding fields that are recorded once and never overwritten.
pub const SET_ONCE: &str = "$set_once";

/// App version at first report. Upstream spelling is `$inital_app_version`
/// (sic); kept verbatim for wire compatibility.
pub const INITIAL_APP_VERSION: &str = "$inital_app_version";

/// Source of payload timestamps.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Source of unique message ids.
pub trait MessageIdGenerator {
    fn next_id(&self) -> String;
}

/// Random v4 UUID message ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidMessageIds;

impl MessageIdGenerator for UuidMessageIds {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Builds event payloads from caller data and injected context.
///
/// Stateless apart from its collaborators; a builder may be shared across
/// threads and invoked concurrently, each call producing a fresh payload.
pub struct PayloadBuilder<P, C = SystemClock, G = UuidMessageIds> {
    context: P,
    clock: C,
    ids: G,
}

impl<P: ContextProvider> PayloadBuilder<P> {
    /// Create a builder over the system clock and random UUID message ids.
    pub fn new(context: P) -> Self {
        Self {
            context,
            clock: SystemClock,
            ids: UuidMessageIds,
        }
    }
}

impl<P, C, G> PayloadBuilder<P, C, G>
where
    P: ContextProvider,
    C: Clock,
    G: MessageIdGenerator,
{
    /// Create a builder with an explicit clock and id source.
    pub fn with_parts(context: P, clock: C, ids: G) -> Self {
        Self { context, clock, ids }
    }

    /// Build one payload.
    ///
    /// Sensitive events always get the sentinel distinct id and the
    /// reduced context; feature flags and the event-type branch are
    /// ignored entirely. Non-sensitive capture events merge, later wins:
    /// full context, then `$feature/`-prefixed flags, then caller
    /// properties. Alias events pass caller properties through untouched.
    ///
    /// `event` and `distinct_id` are expected non-empty; the builder does
    /// not validate them.
    pub fn build(
        &self,
        event: impl Into<String>,
        distinct_id: impl Into<String>,
        event_type: EventType,
        is_sensitive: bool,
        properties: Properties,
        feature_flags: Properties,
    ) -> Payload {
        let timestamp = self.clock.now();
        let message_id = self.ids.next_id();

        let (distinct_id, properties) = if is_sensitive {
            let mut merged = self.context.sensitive_context();
            merged.extend(properties);
            (SENSITIVE_DISTINCT_ID.to_string(), merged)
        } else {
            match event_type {
                EventType::Capture => {
                    let mut merged = self.context.full_context();
                    merged.extend(
                        feature_flags
                            .into_iter()
                            .map(|(flag, value)| (format!("{FEATURE_FLAG_PREFIX}{flag}"), value)),
                    );
                    merged.extend(properties);
                    record_initial_app_version(&mut merged);
                    (distinct_id.into(), merged)
                }
                EventType::Alias => (distinct_id.into(), properties),
            }
        };

        Payload {
            timestamp,
            message_id,
            distinct_id,
            event: event.into(),
            event_type,
            properties,
        }
    }
}

/// Mirror `$app_version` into `$set_once.$inital_app_version`.
///
/// First write wins inside `$set_once`: once an initial version has been
/// recorded it is never overwritten, independent of the last-writer-wins
/// rule governing the outer map.
fn record_initial_app_version(properties: &mut Properties) {
    let Some(version) = properties.get(APP_VERSION).cloned() else {
        return;
    };

    let set_once = properties
        .entry(SET_ONCE.to_string())
        .or_insert_with(|| Value::Object(Properties::new()));
    // A non-object $set_once is a caller contract violation; start over
    // rather than drop the record.
    if set_once.as_object().is_none() {
        *set_once = Value::Object(Properties::new());
    }
    if let Some(map) = set_once.as_object_mut() {
        map.entry(INITIAL_APP_VERSION.to_string()).or_insert(version);
    }
}
