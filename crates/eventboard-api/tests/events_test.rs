//! Integration tests for event listing and detail.

mod common;

use axum::http::StatusCode;
use chrono::{DateTime, TimeZone, Utc};
use sqlx::SqlitePool;

fn may(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 18, 0, 0).unwrap()
}

async fn seed_catalog(pool: &SqlitePool) {
    let catalog = [
        ("AI Conference 1", "Berlin", 3),
        ("Machine Learning Workshop 2", "Tokyo", 8),
        ("AI Meetup 3", "Berlin", 12),
        ("DevOps Summit 4", "Paris", 14),
        ("Big Data Seminar 5", "Berlin", 20),
        ("AI Hackathon 6", "Tokyo", 22),
        ("IoT Training 7", "Berlin", 28),
    ];
    for (title, location, day) in catalog {
        common::insert_event(pool, title, location, may(day)).await;
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_events_default_page(pool: SqlitePool) {
    seed_catalog(&pool).await;
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, "/api/events").await;

    assert_eq!(status, StatusCode::OK);
    let events = json["events"].as_array().unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[0]["title"], "AI Conference 1");
    assert_eq!(events[0]["registration_count"], 0);
    assert_eq!(json["pagination"]["total"], 7);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 6);
    assert_eq!(json["pagination"]["totalPages"], 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_events_combined_filters(pool: SqlitePool) {
    seed_catalog(&pool).await;
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(
        app,
        "/api/events?search=ai&location=Berlin&startDate=2024-05-04&endDate=2024-05-31",
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = json["events"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap())
        .collect();
    // "Training" contains "ai" as a plain substring.
    assert_eq!(titles, ["AI Meetup 3", "IoT Training 7"]);
    assert_eq!(json["pagination"]["total"], 2);
    assert!(json["events"]
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["location"] == "Berlin"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_events_end_date_includes_whole_day(pool: SqlitePool) {
    seed_catalog(&pool).await;
    let app = common::build_test_app(pool);

    let (status, json) =
        common::get_json(app, "/api/events?startDate=2024-05-12&endDate=2024-05-14").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pagination"]["total"], 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_events_page_beyond_total_is_empty(pool: SqlitePool) {
    seed_catalog(&pool).await;
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, "/api/events?page=3&limit=5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["events"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total"], 7);
    assert_eq!(json["pagination"]["totalPages"], 2);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_events_malformed_paging_falls_back(pool: SqlitePool) {
    seed_catalog(&pool).await;
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, "/api/events?page=-2&limit=lots").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pagination"]["page"], 1);
    assert_eq!(json["pagination"]["limit"], 6);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_list_events_empty_database(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, "/api/events").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["events"].as_array().unwrap().is_empty());
    assert_eq!(json["pagination"]["total"], 0);
    assert_eq!(json["pagination"]["totalPages"], 0);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_event_round_trip(pool: SqlitePool) {
    let id = common::insert_event(&pool, "Edge Computing Symposium", "Seoul", may(9)).await;
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, &format!("/api/events/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], id);
    assert_eq!(json["title"], "Edge Computing Symposium");
    assert_eq!(json["location"], "Seoul");
    assert_eq!(json["registration_count"], 0);
    assert!(json["date"].as_str().unwrap().starts_with("2024-05-09T18:00:00"));
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_get_event_missing_returns_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, "/api/events/12345").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Event not found");
}
