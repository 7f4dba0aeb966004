//! Liveness endpoint, mounted at the root rather than under `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use materials_db::repositories::MaterialRequestRepo;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the store cannot be queried.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Stored material requests; absent when the store is unreachable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_requests: Option<i64>,
}

/// GET /health
///
/// Counting the table doubles as the database probe, so a missing or
/// unmigrated store reports `degraded`.
async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let total_requests = match MaterialRequestRepo::count(&state.pool).await {
        Ok(n) => Some(n),
        Err(err) => {
            tracing::warn!(error = %err, "Health probe could not count material requests");
            None
        }
    };
    let db_healthy = total_requests.is_some();

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        total_requests,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
