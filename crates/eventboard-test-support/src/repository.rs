//! Test repositories — in-memory and failing implementations of the
//! repository traits.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;
use eventboard_core::error::DomainError;
use eventboard_core::model::{
    DailyStats, Event, EventWithRegistrationCount, NewEvent, NewRegistration, Registration,
};
use eventboard_core::query::{EventFilter, EventPage, PageRequest};
use eventboard_core::repository::{AnalyticsRepository, EventRepository, RegistrationRepository};

#[derive(Debug, Default)]
struct Tables {
    events: Vec<Event>,
    registrations: Vec<Registration>,
}

impl Tables {
    fn with_count(&self, event: &Event) -> EventWithRegistrationCount {
        let registration_count = self
            .registrations
            .iter()
            .filter(|r| r.event_id == event.id)
            .count();
        EventWithRegistrationCount {
            event: event.clone(),
            registration_count: i64::try_from(registration_count).unwrap_or(i64::MAX),
        }
    }
}

/// Applies `filter` to `event` the way the SQLite listing query does.
///
/// `LIKE` folds ASCII letters only, so search compares ASCII-lowercased
/// text. Empty `search` and `location` values impose no constraint.
fn matches_filter(filter: &EventFilter, event: &Event) -> bool {
    if let Some(term) = filter.search.as_deref().filter(|t| !t.is_empty()) {
        let term = term.to_ascii_lowercase();
        if !event.title.to_ascii_lowercase().contains(&term)
            && !event.description.to_ascii_lowercase().contains(&term)
        {
            return false;
        }
    }
    if let Some(location) = filter.location.as_deref().filter(|l| !l.is_empty())
        && event.location != location
    {
        return false;
    }
    if let Some(start) = filter.start_date
        && event.date < start
    {
        return false;
    }
    if let Some(end) = filter.end_date
        && event.date > end
    {
        return false;
    }
    true
}

/// A repository that keeps events and registrations in memory. Listing
/// follows the SQLite query: ASCII case-insensitive search, exact location,
/// inclusive dates, ordered by date then id.
#[derive(Debug, Default)]
pub struct InMemoryRepository {
    tables: Mutex<Tables>,
}

impl InMemoryRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an event synchronously, for arranging test state.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn add_event(&self, event: &NewEvent) -> i64 {
        let mut tables = self.tables.lock().unwrap();
        let id = i64::try_from(tables.events.len()).unwrap() + 1;
        tables.events.push(Event {
            id,
            title: event.title.clone(),
            description: event.description.clone(),
            location: event.location.clone(),
            date: event.date,
            created_at: event.created_at,
        });
        id
    }

    /// Inserts a registration synchronously, for arranging test state.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn add_registration(&self, registration: &NewRegistration) -> i64 {
        let mut tables = self.tables.lock().unwrap();
        let id = i64::try_from(tables.registrations.len()).unwrap() + 1;
        tables.registrations.push(Registration {
            id,
            event_id: registration.event_id,
            name: registration.name.clone(),
            email: registration.email.clone(),
            created_at: registration.created_at,
        });
        id
    }

    /// Returns a snapshot of all stored registrations.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn registrations(&self) -> Vec<Registration> {
        self.tables.lock().unwrap().registrations.clone()
    }

    /// Returns a snapshot of all stored events.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn events(&self) -> Vec<Event> {
        self.tables.lock().unwrap().events.clone()
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn list_events(
        &self,
        filter: &EventFilter,
        page: PageRequest,
    ) -> Result<EventPage, DomainError> {
        let tables = self.tables.lock().unwrap();
        let mut matching: Vec<&Event> = tables.events.iter().filter(|e| matches_filter(filter, e)).collect();
        matching.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit()).unwrap_or(usize::MAX);
        let events = matching
            .iter()
            .skip(offset)
            .take(limit)
            .map(|e| tables.with_count(e))
            .collect();

        Ok(EventPage {
            events,
            total: i64::try_from(matching.len()).unwrap_or(i64::MAX),
        })
    }

    async fn find_event(
        &self,
        event_id: i64,
    ) -> Result<Option<EventWithRegistrationCount>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .events
            .iter()
            .find(|e| e.id == event_id)
            .map(|e| tables.with_count(e)))
    }

    async fn event_exists(&self, event_id: i64) -> Result<bool, DomainError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .events
            .iter()
            .any(|e| e.id == event_id))
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<i64, DomainError> {
        Ok(self.add_event(event))
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRepository {
    async fn find_registration(
        &self,
        event_id: i64,
        email: &str,
    ) -> Result<Option<Registration>, DomainError> {
        Ok(self
            .tables
            .lock()
            .unwrap()
            .registrations
            .iter()
            .find(|r| r.event_id == event_id && r.email == email)
            .cloned())
    }

    async fn insert_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<i64, DomainError> {
        Ok(self.add_registration(registration))
    }
}

#[async_trait]
impl AnalyticsRepository for InMemoryRepository {
    async fn popular_events(
        &self,
        limit: u32,
    ) -> Result<Vec<EventWithRegistrationCount>, DomainError> {
        let tables = self.tables.lock().unwrap();
        let mut ranked: Vec<EventWithRegistrationCount> =
            tables.events.iter().map(|e| tables.with_count(e)).collect();
        ranked.sort_by(|a, b| {
            b.registration_count
                .cmp(&a.registration_count)
                .then(a.event.id.cmp(&b.event.id))
        });
        ranked.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
        Ok(ranked)
    }

    async fn daily_stats(&self, since: NaiveDate) -> Result<Vec<DailyStats>, DomainError> {
        let tables = self.tables.lock().unwrap();
        let mut days: BTreeMap<NaiveDate, (i64, BTreeSet<i64>)> = BTreeMap::new();
        for registration in &tables.registrations {
            let day = registration.created_at.date_naive();
            if day >= since {
                let entry = days.entry(day).or_default();
                entry.0 += 1;
                entry.1.insert(registration.event_id);
            }
        }
        Ok(days
            .into_iter()
            .rev()
            .map(|(date, (total_registrations, events))| DailyStats {
                date,
                total_registrations,
                total_events: i64::try_from(events.len()).unwrap_or(i64::MAX),
            })
            .collect())
    }
}

/// A repository that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingRepository;

fn connection_refused() -> DomainError {
    DomainError::Infrastructure("connection refused".into())
}

#[async_trait]
impl EventRepository for FailingRepository {
    async fn list_events(
        &self,
        _filter: &EventFilter,
        _page: PageRequest,
    ) -> Result<EventPage, DomainError> {
        Err(connection_refused())
    }

    async fn find_event(
        &self,
        _event_id: i64,
    ) -> Result<Option<EventWithRegistrationCount>, DomainError> {
        Err(connection_refused())
    }

    async fn event_exists(&self, _event_id: i64) -> Result<bool, DomainError> {
        Err(connection_refused())
    }

    async fn insert_event(&self, _event: &NewEvent) -> Result<i64, DomainError> {
        Err(connection_refused())
    }
}

#[async_trait]
impl RegistrationRepository for FailingRepository {
    async fn find_registration(
        &self,
        _event_id: i64,
        _email: &str,
    ) -> Result<Option<Registration>, DomainError> {
        Err(connection_refused())
    }

    async fn insert_registration(
        &self,
        _registration: &NewRegistration,
    ) -> Result<i64, DomainError> {
        Err(connection_refused())
    }
}

#[async_trait]
impl AnalyticsRepository for FailingRepository {
    async fn popular_events(
        &self,
        _limit: u32,
    ) -> Result<Vec<EventWithRegistrationCount>, DomainError> {
        Err(connection_refused())
    }

    async fn daily_stats(&self, _since: NaiveDate) -> Result<Vec<DailyStats>, DomainError> {
        Err(connection_refused())
    }
}
