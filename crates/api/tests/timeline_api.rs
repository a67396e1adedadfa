//! Integration tests for the timeline read endpoint: grouping, ordering,
//! and idempotence over unchanged storage.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, request, seed_admin_and_token};
use serde_json::json;
use sqlx::PgPool;

async fn create_printer(app: &axum::Router, token: &str, name: &str, status: &str) -> i64 {
    let response = request(
        app.clone(),
        Method::POST,
        "/api/v1/printers",
        token,
        Some(json!({ "name": name, "status": status })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_job(
    app: &axum::Router,
    token: &str,
    printer_id: i64,
    filename: &str,
    start_time: Option<&str>,
) {
    let response = request(
        app.clone(),
        Method::POST,
        "/api/v1/jobs",
        token,
        Some(json!({
            "printer_id": printer_id,
            "filename": filename,
            "status": "done",
            "start_time": start_time,
        })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
}

// ---------------------------------------------------------------------------
// Test: timeline requires authentication
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn timeline_requires_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = common::get(app, "/api/v1/timeline").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Test: printers without jobs still appear, with an empty job list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn printer_without_jobs_has_empty_list(pool: PgPool) {
    let token = seed_admin_and_token(&pool).await;
    let app = common::build_test_app(pool);

    create_printer(&app, &token, "Idle One", "Standby").await;

    let response = request(app, Method::GET, "/api/v1/timeline", &token, None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["jobs"].as_array().unwrap().len(), 0);
    // Status is lowercased in the projection.
    assert_eq!(items[0]["status"], "standby");
    // The read endpoint never carries a generation timestamp.
    assert!(body.get("ts").is_none());
}

// ---------------------------------------------------------------------------
// Test: jobs order newest-first with null starts last; entries by printer id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn jobs_order_newest_first_nulls_last(pool: PgPool) {
    let token = seed_admin_and_token(&pool).await;
    let app = common::build_test_app(pool);

    let printer_a = create_printer(&app, &token, "A", "idle").await;
    let printer_b = create_printer(&app, &token, "B", "idle").await;

    create_job(&app, &token, printer_a, "old.gcode", Some("2024-03-01T08:00:00Z")).await;
    create_job(&app, &token, printer_a, "pending.gcode", None).await;
    create_job(&app, &token, printer_a, "new.gcode", Some("2024-03-05T08:00:00Z")).await;
    create_job(&app, &token, printer_b, "other.gcode", None).await;

    let response = request(app, Method::GET, "/api/v1/timeline", &token, None).await;
    let body = body_json(response).await;
    let items = body["items"].as_array().unwrap();

    // Entries ascend by printer id.
    assert_eq!(items[0]["id"].as_i64().unwrap(), printer_a);
    assert_eq!(items[1]["id"].as_i64().unwrap(), printer_b);

    let filenames: Vec<&str> = items[0]["jobs"]
        .as_array()
        .unwrap()
        .iter()
        .map(|j| j["filename"].as_str().unwrap())
        .collect();
    assert_eq!(filenames, vec!["new.gcode", "old.gcode", "pending.gcode"]);

    // Null timestamps serialize as explicit null, not a sentinel date.
    let pending = &items[0]["jobs"][2];
    assert!(pending["start_time"].is_null());
    assert!(pending["end_time"].is_null());
}

// ---------------------------------------------------------------------------
// Test: two reads with no intervening writes are identical
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn timeline_is_idempotent_without_writes(pool: PgPool) {
    let token = seed_admin_and_token(&pool).await;
    let app = common::build_test_app(pool);

    let printer = create_printer(&app, &token, "A", "idle").await;
    create_job(&app, &token, printer, "a.gcode", Some("2024-03-01T08:00:00Z")).await;
    create_job(&app, &token, printer, "b.gcode", None).await;

    let first = body_json(
        request(app.clone(), Method::GET, "/api/v1/timeline", &token, None).await,
    )
    .await;
    let second =
        body_json(request(app, Method::GET, "/api/v1/timeline", &token, None).await).await;

    assert_eq!(first, second);
}
