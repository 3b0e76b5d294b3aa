//! Command handlers for the Event Catalog context.
//!
//! Registration is gated by two reads (event exists, email not yet
//! registered) followed by a single insert. The sequence is not wrapped in a
//! transaction, so two identical concurrent requests can both pass the checks.

use eventboard_core::clock::Clock;
use eventboard_core::error::DomainError;
use eventboard_core::model::NewRegistration;
use eventboard_core::repository::{EventRepository, RegistrationRepository};
use tracing::{info, warn};

use crate::domain::commands::RegisterForEvent;

/// Trims `value` and rejects it when missing or blank.
fn required(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
}

/// Handles the `RegisterForEvent` command: validates input, checks that the
/// event exists and the email is not yet registered, and inserts the
/// registration.
///
/// Returns the id of the new registration.
///
/// # Errors
///
/// Returns `DomainError::Validation` if name or email is missing.
/// Returns `DomainError::NotFound` if the event does not exist.
/// Returns `DomainError::Conflict` if the email is already registered.
/// Returns `DomainError::Infrastructure` if the repository fails.
pub async fn handle_register_for_event(
    command: &RegisterForEvent,
    clock: &dyn Clock,
    events: &dyn EventRepository,
    registrations: &dyn RegistrationRepository,
) -> Result<i64, DomainError> {
    let (Some(name), Some(email)) = (
        required(command.name.as_deref()),
        required(command.email.as_deref()),
    ) else {
        return Err(DomainError::Validation(
            "Name and email are required".to_owned(),
        ));
    };

    if !events.event_exists(command.event_id).await? {
        return Err(DomainError::event_not_found());
    }

    if registrations
        .find_registration(command.event_id, &email)
        .await?
        .is_some()
    {
        warn!(
            correlation_id = %command.correlation_id,
            event_id = command.event_id,
            "duplicate registration rejected"
        );
        return Err(DomainError::Conflict(
            "Already registered for this event".to_owned(),
        ));
    }

    let registration_id = registrations
        .insert_registration(&NewRegistration {
            event_id: command.event_id,
            name,
            email,
            created_at: clock.now(),
        })
        .await?;

    info!(
        correlation_id = %command.correlation_id,
        event_id = command.event_id,
        registration_id,
        "registration recorded"
    );
    Ok(registration_id)
}
