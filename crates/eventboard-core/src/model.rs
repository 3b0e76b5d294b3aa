//! Domain model for events, registrations and their derived views.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A listed event. Events are created by seeding and never updated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Generated identifier.
    pub id: i64,
    /// Short title shown in listings.
    pub title: String,
    /// Long-form description.
    pub description: String,
    /// City or venue name; matched exactly by the location filter.
    pub location: String,
    /// When the event takes place.
    pub date: DateTime<Utc>,
    /// When the row was inserted.
    pub created_at: DateTime<Utc>,
}

/// A person's registration for an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Generated identifier.
    pub id: i64,
    /// The event registered for.
    pub event_id: i64,
    /// Registrant name.
    pub name: String,
    /// Registrant email, compared case-sensitively.
    pub email: String,
    /// When the registration was recorded.
    pub created_at: DateTime<Utc>,
}

/// An event annotated with the number of registrations it has received.
///
/// Serializes flat, with `registration_count` alongside the event fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventWithRegistrationCount {
    /// The event itself.
    #[serde(flatten)]
    pub event: Event,
    /// Count of registration rows joined to the event.
    pub registration_count: i64,
}

/// Registration activity for a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyStats {
    /// The UTC calendar day.
    pub date: NaiveDate,
    /// Registrations created that day.
    pub total_registrations: i64,
    /// Distinct events that received at least one registration that day.
    pub total_events: i64,
}

/// Insert payload for an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistration {
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}
