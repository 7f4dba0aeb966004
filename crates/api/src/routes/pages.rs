//! Route definitions for the server-rendered pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// GET    /                      -> home
/// GET    /requests              -> list_page
/// GET    /add                   -> add_form
/// POST   /add                   -> submit
/// GET    /request/{id}          -> detail_page
/// POST   /request/{id}/status   -> change_status
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::home))
        .route("/requests", get(pages::list_page))
        .route("/add", get(pages::add_form).post(pages::submit))
        .route("/request/{id}", get(pages::detail_page))
        .route("/request/{id}/status", post(pages::change_status))
}
