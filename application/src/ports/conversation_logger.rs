//! Port for structured conversation events.
//!
//! Defines the [`ConversationLogger`] trait for recording what happens during
//! a turn (generation attempts, cache hits, posts, comments, phase changes).
//!
//! This is separate from `tracing`-based operation logs: tracing handles
//! human-readable diagnostic messages, while this port feeds the
//! operational tooling with machine-readable records.

use serde_json::Value;

/// A structured conversation event.
///
/// Each event has a type string and a JSON payload containing
/// event-specific fields.
#[derive(Debug, Clone)]
pub struct ConversationEvent {
    /// Event type identifier (e.g., "generation_attempt", "post_created").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for conversation events.
///
/// The `log` method is synchronous and non-fallible so that a broken sink
/// can never fail a turn.
pub trait ConversationLogger: Send + Sync {
    /// Record a conversation event.
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when the sink is disabled.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
