#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::SqlitePool;
use tower::ServiceExt;

use materials_api::config::{ServerConfig, StorageConfig, StorageMode};
use materials_api::router::build_app_router;
use materials_api::state::AppState;
use materials_core::storage::StorageLocation;
use materials_db::models::material_request::{CreateMaterialRequest, MaterialRequest};
use materials_db::models::status::{RequestStatus, Urgency};
use materials_db::repositories::MaterialRequestRepo;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5000` as CORS origin (matching the default) and a
/// 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5000".to_string()],
        request_timeout_secs: 30,
        storage: StorageConfig {
            mode: StorageMode::Local,
            data_dir: PathBuf::from("."),
            app_folder: "MaterialTracker".to_string(),
            database_url: None,
        },
        seed_sample_data: false,
        backup_json: None,
    }
}

/// Build the full application router using the given database pool.
///
/// Images are served from a directory that does not exist, so every image
/// request is a 404.
pub fn build_test_app(pool: SqlitePool) -> Router {
    build_test_app_with_images(pool, &std::env::temp_dir().join("materials-api-no-images"))
}

/// Same as [`build_test_app`] but serving images from `images_dir`.
pub fn build_test_app_with_images(pool: SqlitePool, images_dir: &Path) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        storage: Arc::new(StorageLocation {
            database_path: images_dir.join("unused.db"),
            images_dir: images_dir.to_path_buf(),
        }),
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST with an empty body.
pub async fn post(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// POST an `application/x-www-form-urlencoded` body.
pub async fn post_form(app: Router, uri: &str, body: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response) -> &str {
    response
        .headers()
        .get(header::LOCATION)
        .expect("Missing Location header")
        .to_str()
        .unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a request directly through the repository.
pub async fn insert_request(
    pool: &SqlitePool,
    item_name: &str,
    specifications: Option<&str>,
    reason: Option<&str>,
) -> MaterialRequest {
    let input = CreateMaterialRequest {
        item_name: item_name.to_string(),
        specifications: specifications.map(str::to_string),
        quantity: 1,
        urgency: Urgency::Normal,
        reason: reason.map(str::to_string),
        vendor: Some("대한상사".to_string()),
        images: None,
    };
    MaterialRequestRepo::create(pool, &input).await.unwrap()
}

/// Insert a request and move it to `status`.
pub async fn insert_with_status(
    pool: &SqlitePool,
    item_name: &str,
    status: RequestStatus,
) -> MaterialRequest {
    let created = insert_request(pool, item_name, None, None).await;
    assert!(MaterialRequestRepo::update_status(pool, created.id, status)
        .await
        .unwrap());
    MaterialRequestRepo::find_by_id(pool, created.id)
        .await
        .unwrap()
        .unwrap()
}
