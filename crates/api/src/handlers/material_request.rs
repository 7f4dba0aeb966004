//! JSON handlers for the `/api/requests` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use materials_core::error::CoreError;
use materials_core::types::DbId;
use materials_db::repositories::MaterialRequestRepo;

use crate::error::{AppError, AppResult};
use crate::query::RequestListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/requests?status=&search=
///
/// Same filters and ordering as the list page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> AppResult<impl IntoResponse> {
    let filter = params.to_filter()?;
    let requests = MaterialRequestRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: requests }))
}

/// GET /api/requests/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let request = MaterialRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaterialRequest",
            id,
        }))?;
    Ok(Json(DataResponse { data: request }))
}

/// POST /api/requests/{id}/copy
///
/// Duplicate a request as a new pending one with the vendor cleared.
pub async fn copy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let copy = MaterialRequestRepo::copy(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MaterialRequest",
            id,
        }))?;
    tracing::info!(source_id = id, new_id = copy.id, "Material request copied");
    Ok((StatusCode::CREATED, Json(DataResponse { data: copy })))
}
