//! Repository abstractions over event and registration storage.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::DomainError;
use crate::model::{
    DailyStats, EventWithRegistrationCount, NewEvent, NewRegistration, Registration,
};
use crate::query::{EventFilter, EventPage, PageRequest};

/// Read and insert access to events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Returns one page of events matching `filter`, ordered by date
    /// ascending, together with the total match count.
    async fn list_events(
        &self,
        filter: &EventFilter,
        page: PageRequest,
    ) -> Result<EventPage, DomainError>;

    /// Loads a single event with its registration count.
    async fn find_event(
        &self,
        event_id: i64,
    ) -> Result<Option<EventWithRegistrationCount>, DomainError>;

    /// Returns `true` if an event with this id exists.
    async fn event_exists(&self, event_id: i64) -> Result<bool, DomainError>;

    /// Inserts an event and returns its generated id.
    async fn insert_event(&self, event: &NewEvent) -> Result<i64, DomainError>;
}

/// Read and insert access to registrations.
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    /// Finds the registration for `email` on `event_id`, if any.
    async fn find_registration(
        &self,
        event_id: i64,
        email: &str,
    ) -> Result<Option<Registration>, DomainError>;

    /// Inserts a registration and returns its generated id.
    async fn insert_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<i64, DomainError>;
}

/// Aggregate queries backing the admin dashboard.
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Events ranked by registration count, descending, at most `limit`.
    async fn popular_events(
        &self,
        limit: u32,
    ) -> Result<Vec<EventWithRegistrationCount>, DomainError>;

    /// Per-day registration totals for registrations created on or after
    /// `since`, newest day first. Days without registrations are omitted.
    async fn daily_stats(&self, since: NaiveDate) -> Result<Vec<DailyStats>, DomainError>;
}
