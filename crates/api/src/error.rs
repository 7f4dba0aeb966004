use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use materials_core::error::CoreError;
use serde_json::json;
use sqlx::error::ErrorKind;

use crate::views::ErrorPage;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `materials_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A page template failed to render.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Map the error to an HTTP status, a stable error code and a message
    /// safe to show to the client. Server-side failures are logged here.
    pub fn classify(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    internal_error()
                }
            },

            AppError::Database(err) => classify_sqlx_error(err),

            AppError::Template(err) => {
                tracing::error!(error = %err, "Template rendering failed");
                internal_error()
            }

            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal_error()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.classify();

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal_error() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - `CHECK` constraint violations map to 400 (the row broke a field rule).
/// - Unique constraint violations map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.kind() {
            ErrorKind::CheckViolation | ErrorKind::NotNullViolation => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                "A field value violates a data constraint".to_string(),
            ),
            ErrorKind::UniqueViolation => (
                StatusCode::CONFLICT,
                "CONFLICT",
                "Duplicate value violates a unique constraint".to_string(),
            ),
            _ => {
                tracing::error!(error = %db_err, "Database error");
                internal_error()
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            internal_error()
        }
    }
}

// ---------------------------------------------------------------------------
// HTML pages
// ---------------------------------------------------------------------------

/// Error type for handlers that render HTML.
///
/// Uses the same classification as [`AppError`] but answers with an error
/// page instead of a JSON body.
#[derive(Debug)]
pub struct PageError(pub AppError);

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        PageError(AppError::Core(err))
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError(AppError::Database(err))
    }
}

impl From<askama::Error> for PageError {
    fn from(err: askama::Error) -> Self {
        PageError(AppError::Template(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _code, message) = self.0.classify();
        let page = ErrorPage {
            status: status.as_u16(),
            title: status.canonical_reason().unwrap_or("Error").to_string(),
            message,
        };
        match page.render() {
            Ok(html) => (status, Html(html)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "Error page failed to render");
                (status, page.message).into_response()
            }
        }
    }
}
