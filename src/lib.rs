//! Telemetry Payload - privacy-aware analytics event construction.
//!
//! This library builds the single outbound record ("event payload") for an
//! analytics pipeline: it merges caller-supplied data with injected
//! environment context and feature-flag state, applies the privacy rules
//! for sensitive events, and returns an immutable [`Payload`] with stable
//! identity for queueing, hashing, and ordering.
//!
//! # Privacy Guarantees
//!
//! - **Sensitive events are anonymized**: the subject identifier is
//!   replaced with a fixed sentinel, never the caller's id
//! - **No device leakage in sensitive mode**: only app identity and
//!   library info are attached, never device, screen, or locale data
//! - **No introspection**: all environment data comes from an injected
//!   [`ContextProvider`]; the library itself reads nothing from the host
//!
//! Transport, batching, and persistence are deliberately out of scope;
//! downstream components consume the finished payload.
//!
//! # Example
//!
//! ```
//! use telemetry_payload::{
//!     AppInfo, EventType, PayloadBuilder, Properties, StaticContextProvider, Value,
//! };
//!
//! let mut provider = StaticContextProvider::default();
//! provider.app = AppInfo {
//!     name: Some("Structured".to_string()),
//!     version: Some("2.1".to_string()),
//!     ..AppInfo::default()
//! };
//!
//! let builder = PayloadBuilder::new(provider);
//!
//! let mut properties = Properties::new();
//! properties.insert("source".to_string(), Value::from("widget"));
//!
//! let payload = builder.build(
//!     "task_created",
//!     "user-1",
//!     EventType::Capture,
//!     false,
//!     properties,
//!     Properties::new(),
//! );
//!
//! assert_eq!(payload.event, "task_created");
//! assert_eq!(payload.properties["$app_name"], Value::from("Structured"));
//! ```

pub mod builder;
pub mod context;
pub mod payload;
pub mod value;

// Re-export key types at crate root for convenience
pub use builder::{
    Clock, MessageIdGenerator, PayloadBuilder, SystemClock, UuidMessageIds, FEATURE_FLAG_PREFIX,
    INITIAL_APP_VERSION, SET_ONCE,
};
pub use context::{
    AppInfo, ContextProvider, DeviceInfo, LibInfo, LocaleInfo, ScreenInfo, StaticContextProvider,
};
pub use payload::{EventType, Payload, SENSITIVE_DISTINCT_ID};
pub use value::{Properties, Value};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
