//! Route modules and the assembled application router.

use axum::Router;

use crate::state::AppState;

pub mod admin;
pub mod events;
pub mod health;

/// Builds the full router: health check plus the `/api` surface.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .nest("/api/events", events::router())
        .nest("/api/admin", admin::router())
        .with_state(state)
}
