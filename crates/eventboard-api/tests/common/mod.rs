//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use eventboard_core::clock::Clock;
use eventboard_core::model::NewEvent;
use eventboard_core::repository::EventRepository;
use eventboard_store::{SqliteRepository, SqliteStore};
use eventboard_test_support::FixedClock;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use eventboard_api::routes;
use eventboard_api::state::AppState;

/// Fixed "now" used across all integration tests.
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap()
}

/// SQLite repository over the test pool.
pub fn repository(pool: SqlitePool) -> SqliteRepository {
    SqliteRepository::new(SqliteStore::new(pool))
}

/// Build the full app router over a real `SqliteRepository` and a fixed
/// clock. Uses the same route structure as `main.rs`.
pub fn build_test_app(pool: SqlitePool) -> Router {
    let clock: Arc<dyn Clock + Send + Sync> = Arc::new(FixedClock(fixed_now()));
    let state = AppState::with_repository(clock, Arc::new(repository(pool)));
    routes::app(state)
}

/// Insert an event directly and return its id.
pub async fn insert_event(
    pool: &SqlitePool,
    title: &str,
    location: &str,
    date: DateTime<Utc>,
) -> i64 {
    repository(pool.clone())
        .insert_event(&NewEvent {
            title: title.to_owned(),
            description: format!("Sessions on {title}"),
            location: location.to_owned(),
            date,
            created_at: fixed_now(),
        })
        .await
        .unwrap()
}

/// Send a POST request with a JSON body and return the response.
pub async fn post_json(
    app: Router,
    uri: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a POST request with a raw body and optional content type.
pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: Option<&str>,
    body: &str,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method("POST").uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body.to_owned())).unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
