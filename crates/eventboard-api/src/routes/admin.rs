//! Routes for the admin analytics dashboard.

use axum::extract::State;
use axum::{Json, Router, routing::get};
use tracing::instrument;

use eventboard_analytics::application::query_handlers::{self, AnalyticsView};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/admin/analytics
#[instrument(skip(state))]
async fn analytics(State(state): State<AppState>) -> Result<Json<AnalyticsView>, ApiError> {
    let view = query_handlers::get_dashboard(state.clock.as_ref(), &*state.analytics)
        .await
        .map_err(ApiError::failed("Failed to fetch analytics"))?;
    Ok(Json(view))
}

/// Returns the router for the admin context.
pub fn router() -> Router<AppState> {
    Router::new().route("/analytics", get(analytics))
}
