//! Integration tests for the admin analytics endpoint.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, TimeZone, Utc};
use eventboard_core::model::NewRegistration;
use eventboard_core::repository::RegistrationRepository;
use serde_json::json;
use sqlx::SqlitePool;

#[sqlx::test(migrations = "../../migrations")]
async fn test_popular_events_are_capped_and_sorted(pool: SqlitePool) {
    let date = Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap();
    for n in 0..7_usize {
        let id = common::insert_event(&pool, &format!("Cloud Summit {n}"), "Lisbon", date).await;
        for k in 0..n {
            common::post_json(
                common::build_test_app(pool.clone()),
                &format!("/api/events/{id}/register"),
                &json!({ "name": "Attendee", "email": format!("a{k}@example.com") }),
            )
            .await;
        }
    }
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, "/api/admin/analytics").await;

    assert_eq!(status, StatusCode::OK);
    let popular = json["popularEvents"].as_array().unwrap();
    assert_eq!(popular.len(), 5);
    let counts: Vec<i64> = popular
        .iter()
        .map(|e| e["registration_count"].as_i64().unwrap())
        .collect();
    assert_eq!(counts, [6, 5, 4, 3, 2]);
    assert_eq!(popular[0]["title"], "Cloud Summit 6");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_daily_stats_cover_the_last_week_only(pool: SqlitePool) {
    let date = Utc.with_ymd_and_hms(2026, 2, 1, 9, 0, 0).unwrap();
    let first = common::insert_event(&pool, "Security Workshop 1", "Oslo", date).await;
    let second = common::insert_event(&pool, "Security Workshop 2", "Oslo", date).await;
    let repo = common::repository(pool.clone());
    let now = common::fixed_now();
    let registrations = [
        (first, "a@example.com", now - Duration::hours(1)),
        (second, "b@example.com", now - Duration::hours(2)),
        (first, "c@example.com", now - Duration::days(2)),
        (first, "old@example.com", now - Duration::days(30)),
    ];
    for (event_id, email, created_at) in registrations {
        repo.insert_registration(&NewRegistration {
            event_id,
            name: "Attendee".to_owned(),
            email: email.to_owned(),
            created_at,
        })
        .await
        .unwrap();
    }
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, "/api/admin/analytics").await;

    assert_eq!(status, StatusCode::OK);
    let stats = json["dailyStats"].as_array().unwrap();
    assert_eq!(stats.len(), 2);
    assert_eq!(stats[0]["date"], "2026-01-15");
    assert_eq!(stats[0]["total_registrations"], 2);
    assert_eq!(stats[0]["total_events"], 2);
    assert_eq!(stats[1]["date"], "2026-01-13");
    assert_eq!(stats[1]["total_registrations"], 1);
    assert_eq!(stats[1]["total_events"], 1);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_analytics_on_empty_database(pool: SqlitePool) {
    let app = common::build_test_app(pool);

    let (status, json) = common::get_json(app, "/api/admin/analytics").await;

    assert_eq!(status, StatusCode::OK);
    assert!(json["popularEvents"].as_array().unwrap().is_empty());
    assert!(json["dailyStats"].as_array().unwrap().is_empty());
}
