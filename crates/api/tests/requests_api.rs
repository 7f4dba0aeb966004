//! HTTP-level tests for the `/api` JSON endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, insert_request, insert_with_status, post};
use materials_db::models::status::RequestStatus;
use materials_db::repositories::MaterialRequestRepo;
use sqlx::SqlitePool;

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn stats_on_empty_store_are_zero(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/stats").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    for key in ["total", "pending", "approved", "ordered", "received", "rejected"] {
        assert_eq!(json[key], 0, "{key}");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn stats_total_is_sum_of_status_counts(pool: SqlitePool) {
    insert_request(&pool, "a", None, None).await;
    insert_with_status(&pool, "b", RequestStatus::Approved).await;
    insert_with_status(&pool, "c", RequestStatus::Approved).await;
    insert_with_status(&pool, "d", RequestStatus::Rejected).await;

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/stats").await).await;

    assert_eq!(json["total"], 4);
    assert_eq!(json["pending"], 1);
    assert_eq!(json["approved"], 2);
    assert_eq!(json["ordered"], 0);
    assert_eq!(json["received"], 0);
    assert_eq!(json["rejected"], 1);
    assert!(json.get("data").is_none());
}

// ---------------------------------------------------------------------------
// List / get
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn list_returns_newest_first(pool: SqlitePool) {
    let first = insert_request(&pool, "first", None, None).await;
    let second = insert_request(&pool, "second", None, None).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/requests").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], second.id);
    assert_eq!(data[1]["id"], first.id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_applies_status_and_search(pool: SqlitePool) {
    let approved_bolt = insert_with_status(&pool, "볼트", RequestStatus::Approved).await;
    insert_with_status(&pool, "너트", RequestStatus::Approved).await;
    insert_request(&pool, "볼트", None, None).await;

    let app = common::build_test_app(pool);
    // search=볼트
    let response = get(app, "/api/requests?status=approved&search=%EB%B3%BC%ED%8A%B8").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["id"], approved_bolt.id);
    assert_eq!(data[0]["status"], "approved");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn list_rejects_unknown_status(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/requests?status=bogus").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_returns_request_fields(pool: SqlitePool) {
    let created = insert_request(&pool, "안전모", Some("흰색"), Some("현장용")).await;

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/requests/{}", created.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let data = &body_json(response).await["data"];
    assert_eq!(data["item_name"], "안전모");
    assert_eq!(data["specifications"], "흰색");
    assert_eq!(data["urgency"], "normal");
    assert_eq!(data["status"], "pending");
    assert!(data["request_date"].is_string());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn get_missing_request_is_404(pool: SqlitePool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/requests/999999").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn copy_creates_pending_request_without_vendor(pool: SqlitePool) {
    let source = insert_with_status(&pool, "전선", RequestStatus::Received).await;

    let app = common::build_test_app(pool.clone());
    let response = post(app, &format!("/api/requests/{}/copy", source.id)).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let data = &body_json(response).await["data"];
    assert_ne!(data["id"], source.id);
    assert_eq!(data["item_name"], "전선");
    assert_eq!(data["status"], "pending");
    assert!(data["vendor"].is_null());

    let unchanged = MaterialRequestRepo::find_by_id(&pool, source.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(unchanged, source);
    assert_eq!(MaterialRequestRepo::count(&pool).await.unwrap(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn copy_missing_request_is_404(pool: SqlitePool) {
    let app = common::build_test_app(pool.clone());
    let response = post(app, "/api/requests/999999/copy").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(MaterialRequestRepo::count(&pool).await.unwrap(), 0);
}

// ---------------------------------------------------------------------------
// Backup
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn backup_exports_every_record_by_id(pool: SqlitePool) {
    let a = insert_request(&pool, "a", None, None).await;
    let b = insert_with_status(&pool, "b", RequestStatus::Ordered).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/backup").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["total_records"], 2);
    assert_eq!(json["columns"].as_array().unwrap().len(), 11);
    assert!(json["backup_date"].is_string());

    let data = json["data"].as_array().unwrap();
    assert_eq!(data[0]["id"], a.id);
    assert_eq!(data[1]["id"], b.id);
    assert_eq!(data[1]["status"], "ordered");
}
