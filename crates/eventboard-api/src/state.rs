//! Shared application state.

use std::sync::Arc;

use eventboard_core::clock::Clock;
use eventboard_core::repository::{AnalyticsRepository, EventRepository, RegistrationRepository};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of "now" for registration timestamps and the stats window.
    pub clock: Arc<dyn Clock + Send + Sync>,
    /// Event reads and inserts.
    pub events: Arc<dyn EventRepository>,
    /// Registration reads and inserts.
    pub registrations: Arc<dyn RegistrationRepository>,
    /// Dashboard aggregates.
    pub analytics: Arc<dyn AnalyticsRepository>,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock + Send + Sync>,
        events: Arc<dyn EventRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        analytics: Arc<dyn AnalyticsRepository>,
    ) -> Self {
        Self {
            clock,
            events,
            registrations,
            analytics,
        }
    }

    /// Create state where one repository serves every role.
    #[must_use]
    pub fn with_repository<R>(clock: Arc<dyn Clock + Send + Sync>, repository: Arc<R>) -> Self
    where
        R: EventRepository + RegistrationRepository + AnalyticsRepository + 'static,
    {
        Self::new(
            clock,
            repository.clone(),
            repository.clone(),
            repository,
        )
    }
}
