pub mod health;
pub mod pages;
pub mod requests;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /stats                         per-status counts (GET)
/// /requests                      list (?status, search)
/// /requests/{id}                 get
/// /requests/{id}/copy            duplicate as a new pending request (POST)
/// /backup                        full JSON snapshot (GET)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/stats", get(handlers::stats::stats))
        .nest("/requests", requests::router())
        .route("/backup", get(handlers::backup::export))
}
