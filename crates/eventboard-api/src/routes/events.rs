//! Routes for the Event Catalog: listing, detail and registration.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use eventboard_catalog::application::query_handlers::{self, EventListView};
use eventboard_catalog::application::command_handlers;
use eventboard_catalog::domain::commands::RegisterForEvent;
use eventboard_catalog::domain::listing::ListEvents;
use eventboard_core::error::DomainError;
use eventboard_core::model::EventWithRegistrationCount;

use crate::error::ApiError;
use crate::state::AppState;

/// Query string for GET /api/events.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEventsParams {
    pub search: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl From<ListEventsParams> for ListEvents {
    fn from(params: ListEventsParams) -> Self {
        Self {
            search: params.search,
            location: params.location,
            start_date: params.start_date,
            end_date: params.end_date,
            page: params.page,
            limit: params.limit,
        }
    }
}

/// Request body for POST /api/events/{id}/register.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Response body returned after a successful registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub message: &'static str,
    pub registration_id: i64,
}

/// Path ids that are not integers cannot name an event.
fn parse_event_id(raw: &str) -> Result<i64, DomainError> {
    raw.parse().map_err(|_| DomainError::event_not_found())
}

/// Request bodies that do not decode into a `RegisterRequest` are
/// validation failures, reported with the same `{error, code}` body as any
/// other 400.
fn body_rejection(rejection: &JsonRejection) -> DomainError {
    warn!(reason = %rejection.body_text(), "rejected registration body");
    match rejection {
        JsonRejection::JsonDataError(_) => {
            DomainError::Validation("Name and email are required".to_owned())
        }
        _ => DomainError::Validation("Invalid request body".to_owned()),
    }
}

/// GET /api/events
#[instrument(skip(state))]
async fn list_events(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> Result<Json<EventListView>, ApiError> {
    let criteria = ListEvents::from(params);
    let view = query_handlers::list_events(&criteria, &*state.events)
        .await
        .map_err(ApiError::failed("Failed to fetch events"))?;
    Ok(Json(view))
}

/// GET /api/events/{id}
#[instrument(skip(state))]
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EventWithRegistrationCount>, ApiError> {
    let fail = ApiError::failed("Failed to fetch event");
    let event_id = parse_event_id(&id).map_err(&fail)?;
    let view = query_handlers::get_event(event_id, &*state.events)
        .await
        .map_err(&fail)?;
    Ok(Json(view))
}

/// POST /api/events/{id}/register
#[instrument(skip(state, payload))]
async fn register(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let fail = ApiError::failed("Failed to register for event");
    let Json(request) = payload.map_err(|rejection| fail(body_rejection(&rejection)))?;
    let event_id = parse_event_id(&id).map_err(&fail)?;
    let command = RegisterForEvent {
        correlation_id: Uuid::new_v4(),
        event_id,
        name: request.name,
        email: request.email,
    };

    info!(correlation_id = %command.correlation_id, event_id, "handling register_for_event command");

    let registration_id = command_handlers::handle_register_for_event(
        &command,
        state.clock.as_ref(),
        &*state.events,
        &*state.registrations,
    )
    .await
    .map_err(&fail)?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Registration successful",
            registration_id,
        }),
    ))
}

/// Returns the router for the event catalog.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_events))
        .route("/{id}", get(get_event))
        .route("/{id}/register", post(register))
}
