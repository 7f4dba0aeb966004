//! Route definitions for the JSON material request resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::material_request;
use crate::state::AppState;

/// Routes mounted at `/api/requests`.
///
/// ```text
/// GET    /              -> list
/// GET    /{id}          -> get
/// POST   /{id}/copy     -> copy
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(material_request::list))
        .route("/{id}", get(material_request::get))
        .route("/{id}/copy", post(material_request::copy))
}
