//! Handlers for the server-rendered pages.
//!
//! ```text
//! GET  /                      -> redirect to /requests
//! GET  /requests              -> list page (status / search filters)
//! GET  /add                   -> empty create form
//! POST /add                   -> create, redirect to /requests
//! GET  /request/{id}          -> detail page
//! POST /request/{id}/status   -> status transition, redirect to detail
//! ```
//!
//! Page handlers answer failures with an HTML error page, except the status
//! transition which is called from scripts and answers with a JSON error.

use askama::Template;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use materials_core::error::CoreError;
use materials_core::types::DbId;
use materials_core::validation::{normalize_item_name, normalize_optional_text, parse_quantity};
use materials_db::models::material_request::CreateMaterialRequest;
use materials_db::models::status::{RequestStatus, Urgency};
use materials_db::repositories::MaterialRequestRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult, PageError};
use crate::query::RequestListParams;
use crate::state::AppState;
use crate::views::{AddFormValues, AddRequestPage, RequestDetailPage, RequestListPage};

// ---------------------------------------------------------------------------
// Forms
// ---------------------------------------------------------------------------

/// Fields posted by the create form. Everything is optional at the
/// extraction stage so that missing fields produce a form error, not a
/// rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SubmitRequestForm {
    #[serde(default)]
    pub item_name: String,
    pub specifications: Option<String>,
    #[serde(default)]
    pub quantity: String,
    pub urgency: Option<String>,
    pub reason: Option<String>,
    pub vendor: Option<String>,
}

impl SubmitRequestForm {
    /// Validate and normalize into an insert DTO.
    pub fn validate(&self) -> Result<CreateMaterialRequest, CoreError> {
        let item_name = normalize_item_name(&self.item_name)?;
        let quantity = parse_quantity(&self.quantity)?;
        let urgency = match self.urgency.as_deref().map(str::trim) {
            None | Some("") => Urgency::default(),
            Some(raw) => raw.parse()?,
        };
        Ok(CreateMaterialRequest {
            item_name,
            specifications: normalize_optional_text(
                self.specifications.as_deref(),
                "specifications",
            )?,
            quantity,
            urgency,
            reason: normalize_optional_text(self.reason.as_deref(), "reason")?,
            vendor: normalize_optional_text(self.vendor.as_deref(), "vendor")?,
            images: None,
        })
    }

    fn echo(&self) -> AddFormValues {
        AddFormValues {
            item_name: self.item_name.clone(),
            specifications: self.specifications.clone().unwrap_or_default(),
            quantity: self.quantity.clone(),
            reason: self.reason.clone().unwrap_or_default(),
            vendor: self.vendor.clone().unwrap_or_default(),
        }
    }
}

/// Body of `POST /request/{id}/status`.
#[derive(Debug, Default, Deserialize)]
pub struct StatusForm {
    #[serde(default)]
    pub status: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /
pub async fn home() -> Redirect {
    Redirect::to("/requests")
}

/// GET /requests?status=all&search=
pub async fn list_page(
    State(state): State<AppState>,
    Query(params): Query<RequestListParams>,
) -> Result<Html<String>, PageError> {
    let filter = params.to_filter()?;
    let counts = MaterialRequestRepo::status_counts(&state.pool).await?;
    let rows = MaterialRequestRepo::list(&state.pool, &filter).await?;

    let page = RequestListPage::new(&rows, &counts, filter.status, filter.search.as_deref());
    Ok(Html(page.render()?))
}

/// GET /request/{id}
pub async fn detail_page(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> Result<Html<String>, PageError> {
    let request = MaterialRequestRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "MaterialRequest",
            id,
        })?;
    Ok(Html(RequestDetailPage::new(&request).render()?))
}

/// GET /add
pub async fn add_form() -> Result<Html<String>, PageError> {
    Ok(Html(AddRequestPage::blank().render()?))
}

/// POST /add
///
/// Validation failures re-render the form (400) with the submitted values;
/// nothing is written in that case.
pub async fn submit(
    State(state): State<AppState>,
    Form(form): Form<SubmitRequestForm>,
) -> Result<Response, PageError> {
    let input = match form.validate() {
        Ok(input) => input,
        Err(CoreError::Validation(msg)) => {
            tracing::debug!(error = %msg, "Rejected material request submission");
            let urgency = form.urgency.as_deref().unwrap_or(Urgency::default().as_str());
            let page = AddRequestPage::with_error(msg, form.echo(), urgency);
            return Ok((StatusCode::BAD_REQUEST, Html(page.render()?)).into_response());
        }
        Err(other) => return Err(other.into()),
    };

    let created = MaterialRequestRepo::create(&state.pool, &input).await?;
    tracing::info!(
        id = created.id,
        item_name = %created.item_name,
        quantity = created.quantity,
        urgency = %created.urgency,
        "Material request created"
    );

    Ok(Redirect::to("/requests").into_response())
}

/// POST /request/{id}/status
///
/// Any status may follow any other; setting the current status again is a
/// no-op that still succeeds.
pub async fn change_status(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Form(form): Form<StatusForm>,
) -> AppResult<Redirect> {
    let status: RequestStatus = form.status.parse()?;

    let updated = MaterialRequestRepo::update_status(&state.pool, id, status).await?;
    if !updated {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "MaterialRequest",
            id,
        }));
    }

    tracing::info!(id, status = %status, "Material request status changed");
    Ok(Redirect::to(&format!("/request/{id}")))
}
