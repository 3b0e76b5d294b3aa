//! Demo data: a year of tech events with a handful of attendees each.
//!
//! Attendees are registered through the same command handler the API uses,
//! so a randomly repeated email is skipped as a duplicate instead of being
//! inserted twice.

use chrono::{DateTime, Duration, TimeZone, Utc};
use eventboard_catalog::application::command_handlers::handle_register_for_event;
use eventboard_catalog::domain::commands::RegisterForEvent;
use eventboard_core::clock::Clock;
use eventboard_core::error::DomainError;
use eventboard_core::model::NewEvent;
use eventboard_core::repository::{EventRepository, RegistrationRepository};
use eventboard_core::rng::DeterministicRng;
use tracing::info;
use uuid::Uuid;

/// Number of events the seed binary creates by default.
pub const DEFAULT_EVENT_COUNT: usize = 100;

const MAX_REGISTRATIONS_PER_EVENT: u32 = 5;

/// Seconds from the first to the last day of the seeded year.
const SEEDED_SPAN_SECONDS: u32 = 365 * 24 * 60 * 60;

const LOCATIONS: [&str; 15] = [
    "San Francisco",
    "New York",
    "London",
    "Berlin",
    "Tokyo",
    "Paris",
    "Singapore",
    "Sydney",
    "Toronto",
    "Dubai",
    "Mumbai",
    "Seoul",
    "Amsterdam",
    "Barcelona",
    "Austin",
];

const EVENT_TYPES: [&str; 10] = [
    "Conference",
    "Workshop",
    "Meetup",
    "Summit",
    "Hackathon",
    "Seminar",
    "Webinar",
    "Networking",
    "Training",
    "Symposium",
];

const TOPICS: [&str; 15] = [
    "AI",
    "Machine Learning",
    "Web Development",
    "Cloud Computing",
    "Blockchain",
    "Cybersecurity",
    "Data Science",
    "DevOps",
    "Mobile Development",
    "UI/UX Design",
    "IoT",
    "Quantum Computing",
    "AR/VR",
    "Big Data",
    "Edge Computing",
];

const FIRST_NAMES: [&str; 10] = [
    "John", "Jane", "Bob", "Alice", "Charlie", "Diana", "Edward", "Emma", "Frank", "Grace",
];

const LAST_NAMES: [&str; 10] = [
    "Smith",
    "Johnson",
    "Brown",
    "Wilson",
    "Miller",
    "Davis",
    "Garcia",
    "Rodriguez",
    "Martinez",
    "Anderson",
];

/// Counts from a seeding run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub events: usize,
    pub registrations: usize,
    pub duplicates_skipped: usize,
}

fn pick<'a>(rng: &mut dyn DeterministicRng, items: &[&'a str]) -> &'a str {
    let last = items.len().saturating_sub(1);
    let index = rng.next_u32_range(0, u32::try_from(last).unwrap_or(u32::MAX));
    items[usize::try_from(index).unwrap_or(last).min(last)]
}

fn seeded_year_start() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Generates the `index`-th (0-based) demo event.
pub fn generate_event(
    rng: &mut dyn DeterministicRng,
    index: usize,
    created_at: DateTime<Utc>,
) -> NewEvent {
    let location = pick(rng, &LOCATIONS);
    let event_type = pick(rng, &EVENT_TYPES);
    let topic = pick(rng, &TOPICS);
    let offset = rng.next_u32_range(0, SEEDED_SPAN_SECONDS);

    NewEvent {
        title: format!("{topic} {event_type} {}", index + 1),
        description: format!(
            "A {} on {topic}: talks from practitioners, hands-on sessions and time to meet peers.",
            event_type.to_lowercase()
        ),
        location: location.to_owned(),
        date: seeded_year_start() + Duration::seconds(i64::from(offset)),
        created_at,
    }
}

/// Generates an attendee name and the matching `first.last@example.com` email.
pub fn generate_attendee(rng: &mut dyn DeterministicRng) -> (String, String) {
    let first = pick(rng, &FIRST_NAMES);
    let last = pick(rng, &LAST_NAMES);
    (
        format!("{first} {last}"),
        format!(
            "{}.{}@example.com",
            first.to_lowercase(),
            last.to_lowercase()
        ),
    )
}

/// Inserts `count` events and 1 to 5 registration attempts per event.
///
/// # Errors
///
/// Returns the first `DomainError` other than a duplicate registration.
pub async fn seed(
    count: usize,
    rng: &mut dyn DeterministicRng,
    clock: &dyn Clock,
    events: &dyn EventRepository,
    registrations: &dyn RegistrationRepository,
) -> Result<SeedSummary, DomainError> {
    let mut summary = SeedSummary::default();

    for index in 0..count {
        let event = generate_event(rng, index, clock.now());
        let event_id = events.insert_event(&event).await?;
        summary.events += 1;

        let attendees = rng.next_u32_range(1, MAX_REGISTRATIONS_PER_EVENT);
        for _ in 0..attendees {
            let (name, email) = generate_attendee(rng);
            let command = RegisterForEvent {
                correlation_id: Uuid::new_v4(),
                event_id,
                name: Some(name),
                email: Some(email),
            };
            match handle_register_for_event(&command, clock, events, registrations).await {
                Ok(_) => summary.registrations += 1,
                Err(DomainError::Conflict(_)) => summary.duplicates_skipped += 1,
                Err(e) => return Err(e),
            }
        }
    }

    info!(
        events = summary.events,
        registrations = summary.registrations,
        duplicates_skipped = summary.duplicates_skipped,
        "seeding complete"
    );
    Ok(summary)
}
