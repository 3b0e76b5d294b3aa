//! Row shapes decoded from SQLite and their conversions into the domain model.

use chrono::{DateTime, NaiveDate, Utc};
use eventboard_core::model::{DailyStats, Event, EventWithRegistrationCount, Registration};
use sqlx::FromRow;

#[derive(Debug, FromRow)]
pub(crate) struct EventWithCountRow {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub registration_count: i64,
}

impl From<EventWithCountRow> for EventWithRegistrationCount {
    fn from(row: EventWithCountRow) -> Self {
        Self {
            event: Event {
                id: row.id,
                title: row.title,
                description: row.description,
                location: row.location,
                date: row.date,
                created_at: row.created_at,
            },
            registration_count: row.registration_count,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct RegistrationRow {
    pub id: i64,
    pub event_id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<RegistrationRow> for Registration {
    fn from(row: RegistrationRow) -> Self {
        Self {
            id: row.id,
            event_id: row.event_id,
            name: row.name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct DailyStatsRow {
    pub date: NaiveDate,
    pub total_registrations: i64,
    pub total_events: i64,
}

impl From<DailyStatsRow> for DailyStats {
    fn from(row: DailyStatsRow) -> Self {
        Self {
            date: row.date,
            total_registrations: row.total_registrations,
            total_events: row.total_events,
        }
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct TotalRow {
    pub total: i64,
}

