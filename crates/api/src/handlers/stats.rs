use axum::extract::State;
use axum::Json;
use materials_db::models::material_request::StatusCounts;
use materials_db::repositories::MaterialRequestRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/stats
///
/// `{total, pending, approved, ordered, received, rejected}`, not wrapped in
/// a data envelope.
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<StatusCounts>> {
    let counts = MaterialRequestRepo::status_counts(&state.pool).await?;
    Ok(Json(counts))
}
