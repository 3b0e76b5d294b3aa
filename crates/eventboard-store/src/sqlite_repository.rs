//! SQLite implementation of the repository traits.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use eventboard_core::error::DomainError;
use eventboard_core::model::{
    DailyStats, EventWithRegistrationCount, NewEvent, NewRegistration, Registration,
};
use eventboard_core::query::{EventFilter, EventPage, PageRequest};
use eventboard_core::repository::{AnalyticsRepository, EventRepository, RegistrationRepository};

use crate::accessor::{SqlParam, SqliteStore};
use crate::event_query::{FIND_EVENT_SQL, build_event_query};
use crate::rows::{DailyStatsRow, EventWithCountRow, RegistrationRow, TotalRow};

const EVENT_EXISTS_SQL: &str = "SELECT COUNT(*) AS total FROM events WHERE id = ?";

const INSERT_EVENT_SQL: &str =
    "INSERT INTO events (title, description, location, date, created_at) VALUES (?, ?, ?, ?, ?)";

const FIND_REGISTRATION_SQL: &str = "SELECT id, event_id, name, email, created_at \
     FROM registrations WHERE event_id = ? AND email = ?";

const INSERT_REGISTRATION_SQL: &str =
    "INSERT INTO registrations (event_id, name, email, created_at) VALUES (?, ?, ?, ?)";

const POPULAR_EVENTS_SQL: &str = "SELECT e.id, e.title, e.description, e.location, e.date, \
     e.created_at, COUNT(r.id) AS registration_count \
     FROM events e \
     LEFT JOIN registrations r ON e.id = r.event_id \
     GROUP BY e.id \
     ORDER BY registration_count DESC, e.id ASC \
     LIMIT ?";

const DAILY_STATS_SQL: &str = "SELECT DATE(r.created_at) AS date, \
     COUNT(DISTINCT r.id) AS total_registrations, \
     COUNT(DISTINCT e.id) AS total_events \
     FROM registrations r \
     JOIN events e ON r.event_id = e.id \
     WHERE r.created_at >= ? \
     GROUP BY DATE(r.created_at) \
     ORDER BY date DESC";

/// SQLite-backed repository for events, registrations and analytics.
#[derive(Debug, Clone)]
pub struct SqliteRepository {
    store: SqliteStore,
}

impl SqliteRepository {
    /// Creates a repository over `store`.
    #[must_use]
    pub fn new(store: SqliteStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventRepository for SqliteRepository {
    async fn list_events(
        &self,
        filter: &EventFilter,
        page: PageRequest,
    ) -> Result<EventPage, DomainError> {
        let query = build_event_query(filter, page);
        debug!(sql = %query.select_sql, params = query.select_params.len(), "listing events");

        let rows: Vec<EventWithCountRow> = self
            .store
            .fetch_all(&query.select_sql, &query.select_params)
            .await?;
        let total = self
            .store
            .fetch_one::<TotalRow>(&query.count_sql, &query.count_params)
            .await?
            .map_or(0, |row| row.total);

        Ok(EventPage {
            events: rows.into_iter().map(Into::into).collect(),
            total,
        })
    }

    async fn find_event(
        &self,
        event_id: i64,
    ) -> Result<Option<EventWithRegistrationCount>, DomainError> {
        let row: Option<EventWithCountRow> = self
            .store
            .fetch_one(FIND_EVENT_SQL, &[SqlParam::Integer(event_id)])
            .await?;
        Ok(row.map(Into::into))
    }

    async fn event_exists(&self, event_id: i64) -> Result<bool, DomainError> {
        let row: Option<TotalRow> = self
            .store
            .fetch_one(EVENT_EXISTS_SQL, &[SqlParam::Integer(event_id)])
            .await?;
        Ok(row.is_some_and(|row| row.total > 0))
    }

    async fn insert_event(&self, event: &NewEvent) -> Result<i64, DomainError> {
        self.store
            .execute(
                INSERT_EVENT_SQL,
                &[
                    SqlParam::from(event.title.as_str()),
                    SqlParam::from(event.description.as_str()),
                    SqlParam::from(event.location.as_str()),
                    SqlParam::Timestamp(event.date),
                    SqlParam::Timestamp(event.created_at),
                ],
            )
            .await
    }
}

#[async_trait]
impl RegistrationRepository for SqliteRepository {
    async fn find_registration(
        &self,
        event_id: i64,
        email: &str,
    ) -> Result<Option<Registration>, DomainError> {
        let row: Option<RegistrationRow> = self
            .store
            .fetch_one(
                FIND_REGISTRATION_SQL,
                &[SqlParam::Integer(event_id), SqlParam::from(email)],
            )
            .await?;
        Ok(row.map(Into::into))
    }

    async fn insert_registration(
        &self,
        registration: &NewRegistration,
    ) -> Result<i64, DomainError> {
        self.store
            .execute(
                INSERT_REGISTRATION_SQL,
                &[
                    SqlParam::Integer(registration.event_id),
                    SqlParam::from(registration.name.as_str()),
                    SqlParam::from(registration.email.as_str()),
                    SqlParam::Timestamp(registration.created_at),
                ],
            )
            .await
    }
}

#[async_trait]
impl AnalyticsRepository for SqliteRepository {
    async fn popular_events(
        &self,
        limit: u32,
    ) -> Result<Vec<EventWithRegistrationCount>, DomainError> {
        let rows: Vec<EventWithCountRow> = self
            .store
            .fetch_all(POPULAR_EVENTS_SQL, &[SqlParam::Integer(i64::from(limit))])
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn daily_stats(&self, since: NaiveDate) -> Result<Vec<DailyStats>, DomainError> {
        let rows: Vec<DailyStatsRow> = self
            .store
            .fetch_all(DAILY_STATS_SQL, &[SqlParam::Date(since)])
            .await?;
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
