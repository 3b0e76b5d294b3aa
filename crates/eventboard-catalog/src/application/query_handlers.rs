//! Query handlers for the Event Catalog context.
//!
//! Handlers read through the repository traits and return read-only views.

use eventboard_core::error::DomainError;
use eventboard_core::model::EventWithRegistrationCount;
use eventboard_core::query::Pagination;
use eventboard_core::repository::EventRepository;
use serde::Serialize;
use tracing::debug;

use crate::domain::listing::ListEvents;

/// One page of the event listing.
#[derive(Debug, Serialize)]
pub struct EventListView {
    /// Events on this page.
    pub events: Vec<EventWithRegistrationCount>,
    /// Totals for rendering page controls.
    pub pagination: Pagination,
}

/// Lists events matching the criteria, one page at a time.
///
/// A page past the end is an empty list, not an error.
///
/// # Errors
///
/// Returns `DomainError::Validation` for unparseable date bounds.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn list_events(
    criteria: &ListEvents,
    repo: &dyn EventRepository,
) -> Result<EventListView, DomainError> {
    let (filter, page) = criteria.to_query()?;
    let result = repo.list_events(&filter, page).await?;
    debug!(
        total = result.total,
        returned = result.events.len(),
        page = page.page(),
        "listed events"
    );
    Ok(EventListView {
        events: result.events,
        pagination: Pagination::new(page, result.total),
    })
}

/// Retrieves a single event with its registration count.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no event has this id.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn get_event(
    event_id: i64,
    repo: &dyn EventRepository,
) -> Result<EventWithRegistrationCount, DomainError> {
    repo.find_event(event_id)
        .await?
        .ok_or_else(DomainError::event_not_found)
}
