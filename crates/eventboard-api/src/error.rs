//! Eventboard — API error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use eventboard_core::error::DomainError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Database connection, pool or schema error.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),

    /// A domain operation failed outside a request, e.g. while seeding.
    #[error("{0}")]
    Domain(#[from] DomainError),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
    /// Machine-readable error code.
    pub code: &'static str,
}

/// HTTP-layer wrapper around `DomainError` that implements `IntoResponse`.
///
/// `failure` is the message shown to callers when the underlying error is
/// an infrastructure fault; the fault itself is only logged.
#[derive(Debug)]
pub struct ApiError {
    source: DomainError,
    failure: &'static str,
}

impl ApiError {
    /// Wraps `source`, using `failure` as the client message for 500s.
    #[must_use]
    pub fn new(source: DomainError, failure: &'static str) -> Self {
        Self { source, failure }
    }

    /// Returns a `map_err` adapter that tags errors with `failure`.
    pub fn failed(failure: &'static str) -> impl Fn(DomainError) -> Self {
        move |source| Self::new(source, failure)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::new(err, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self.source {
            DomainError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            DomainError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            DomainError::Conflict(msg) => (StatusCode::BAD_REQUEST, "already_registered", msg),
            DomainError::Infrastructure(detail) => {
                error!(error = %detail, "{}", self.failure);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "infrastructure_error",
                    self.failure.to_owned(),
                )
            }
        };

        let body = ErrorBody {
            error: message,
            code,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use serde_json::Value;

    fn status_of(err: DomainError) -> StatusCode {
        let response = ApiError::from(err).into_response();
        response.status()
    }

    async fn body_of(err: ApiError) -> Value {
        let response = err.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_not_found_maps_to_404() {
        assert_eq!(
            status_of(DomainError::event_not_found()),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn test_conflict_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Conflict("Already registered for this event".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(DomainError::Validation("bad input".into())),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_infrastructure_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Infrastructure("db down".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_conflict_body_carries_message() {
        let json = body_of(ApiError::from(DomainError::Conflict(
            "Already registered for this event".into(),
        )))
        .await;

        assert_eq!(json["error"], "Already registered for this event");
        assert_eq!(json["code"], "already_registered");
    }

    #[tokio::test]
    async fn test_infrastructure_body_hides_detail() {
        let err = ApiError::new(
            DomainError::Infrastructure("disk I/O error at page 7".into()),
            "Failed to fetch events",
        );

        let json = body_of(err).await;

        assert_eq!(json["error"], "Failed to fetch events");
        assert_eq!(json["code"], "infrastructure_error");
        assert!(!json.to_string().contains("disk"));
    }
}
