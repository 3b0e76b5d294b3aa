//! Query handlers for the Analytics context.

use chrono::{DateTime, Days, NaiveDate, Utc};
use eventboard_core::clock::Clock;
use eventboard_core::error::DomainError;
use eventboard_core::model::{DailyStats, EventWithRegistrationCount};
use eventboard_core::repository::AnalyticsRepository;
use serde::Serialize;
use tracing::debug;

/// Number of events shown in the popular list.
pub const POPULAR_EVENTS_LIMIT: u32 = 5;

/// Days of history covered by the daily stats, counted back from today.
pub const DAILY_STATS_WINDOW_DAYS: u64 = 7;

/// The admin dashboard payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsView {
    /// Top events by registration count, descending.
    pub popular_events: Vec<EventWithRegistrationCount>,
    /// Per-day registration activity, newest first.
    pub daily_stats: Vec<DailyStats>,
}

/// First calendar day included in the daily stats when "now" is `now`.
#[must_use]
pub fn daily_stats_cutoff(now: DateTime<Utc>) -> NaiveDate {
    let today = now.date_naive();
    today
        .checked_sub_days(Days::new(DAILY_STATS_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MIN)
}

/// Builds the dashboard: popular events plus daily stats for the trailing
/// window.
///
/// # Errors
///
/// Returns `DomainError::Infrastructure` if either aggregate query fails.
pub async fn get_dashboard(
    clock: &dyn Clock,
    repo: &dyn AnalyticsRepository,
) -> Result<AnalyticsView, DomainError> {
    let popular_events = repo.popular_events(POPULAR_EVENTS_LIMIT).await?;
    let since = daily_stats_cutoff(clock.now());
    let daily_stats = repo.daily_stats(since).await?;
    debug!(%since, days = daily_stats.len(), "built analytics dashboard");
    Ok(AnalyticsView {
        popular_events,
        daily_stats,
    })
}
