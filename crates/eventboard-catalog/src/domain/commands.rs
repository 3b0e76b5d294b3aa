//! Commands for the Event Catalog context.

use uuid::Uuid;

/// Command to register an attendee for an event.
///
/// Name and email are carried as received; the handler validates them.
#[derive(Debug, Clone)]
pub struct RegisterForEvent {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The event to register for.
    pub event_id: i64,
    /// Attendee name.
    pub name: Option<String>,
    /// Attendee email.
    pub email: Option<String>,
}
