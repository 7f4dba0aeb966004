//! Server-rendered pages.
//!
//! Each page is an askama template under `crates/api/templates`. Handlers
//! build these view structs from repository rows; templates only format.

use askama::Template;
use materials_db::models::material_request::{MaterialRequest, StatusCounts};
use materials_db::models::status::{RequestStatus, Urgency};

/// One `<option>` of a `<select>`.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// Status options with `current` pre-selected.
pub fn status_options(current: Option<RequestStatus>) -> Vec<SelectOption> {
    RequestStatus::ALL
        .iter()
        .map(|s| SelectOption {
            value: s.as_str(),
            label: s.label(),
            selected: Some(*s) == current,
        })
        .collect()
}

/// Urgency options with `current` pre-selected.
pub fn urgency_options(current: &str) -> Vec<SelectOption> {
    Urgency::ALL
        .iter()
        .map(|u| SelectOption {
            value: u.as_str(),
            label: u.label(),
            selected: u.as_str() == current,
        })
        .collect()
}

/// Display-ready copy of a [`MaterialRequest`]. Missing text becomes `""`.
#[derive(Debug, Clone)]
pub struct RequestView {
    pub id: i64,
    pub request_date: String,
    pub created_at: String,
    pub item_name: String,
    pub specifications: String,
    pub quantity: i64,
    pub urgency: &'static str,
    pub urgency_label: &'static str,
    pub reason: String,
    pub vendor: String,
    pub status: &'static str,
    pub status_label: &'static str,
    pub images: Vec<String>,
}

impl From<&MaterialRequest> for RequestView {
    fn from(r: &MaterialRequest) -> Self {
        Self {
            id: r.id,
            request_date: r.request_date.format("%Y-%m-%d").to_string(),
            created_at: r.created_at.format("%Y-%m-%d %H:%M").to_string(),
            item_name: r.item_name.clone(),
            specifications: r.specifications.clone().unwrap_or_default(),
            quantity: r.quantity,
            urgency: r.urgency.as_str(),
            urgency_label: r.urgency.label(),
            reason: r.reason.clone().unwrap_or_default(),
            vendor: r.vendor.clone().unwrap_or_default(),
            status: r.status.as_str(),
            status_label: r.status.label(),
            images: r
                .images
                .as_deref()
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

/// Count badge shown above the list.
#[derive(Debug, Clone)]
pub struct StatusBadge {
    pub status: &'static str,
    pub label: &'static str,
    pub count: i64,
}

// ---------------------------------------------------------------------------
// Pages
// ---------------------------------------------------------------------------

#[derive(Template)]
#[template(path = "requests.html")]
pub struct RequestListPage {
    pub rows: Vec<RequestView>,
    pub total: i64,
    pub badges: Vec<StatusBadge>,
    pub filter_all: bool,
    pub filter_options: Vec<SelectOption>,
    pub search: String,
}

impl RequestListPage {
    pub fn new(
        rows: &[MaterialRequest],
        counts: &StatusCounts,
        status: Option<RequestStatus>,
        search: Option<&str>,
    ) -> Self {
        Self {
            rows: rows.iter().map(RequestView::from).collect(),
            total: counts.total,
            badges: RequestStatus::ALL
                .iter()
                .map(|s| StatusBadge {
                    status: s.as_str(),
                    label: s.label(),
                    count: counts.get(*s),
                })
                .collect(),
            filter_all: status.is_none(),
            filter_options: status_options(status),
            search: search.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "detail.html")]
pub struct RequestDetailPage {
    pub request: RequestView,
    pub status_options: Vec<SelectOption>,
}

impl RequestDetailPage {
    pub fn new(request: &MaterialRequest) -> Self {
        Self {
            request: RequestView::from(request),
            status_options: status_options(Some(request.status)),
        }
    }
}

/// Values echoed back into the create form after a failed submission.
#[derive(Debug, Clone, Default)]
pub struct AddFormValues {
    pub item_name: String,
    pub specifications: String,
    pub quantity: String,
    pub reason: String,
    pub vendor: String,
}

#[derive(Template)]
#[template(path = "add.html")]
pub struct AddRequestPage {
    pub error: String,
    pub values: AddFormValues,
    pub urgency_options: Vec<SelectOption>,
}

impl AddRequestPage {
    /// Empty form with quantity 1 and normal urgency.
    pub fn blank() -> Self {
        Self {
            error: String::new(),
            values: AddFormValues {
                quantity: "1".into(),
                ..Default::default()
            },
            urgency_options: urgency_options(Urgency::default().as_str()),
        }
    }

    /// Re-render a submitted form with an error message.
    pub fn with_error(error: String, values: AddFormValues, urgency: &str) -> Self {
        Self {
            error,
            values,
            urgency_options: urgency_options(urgency),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorPage {
    pub status: u16,
    pub title: String,
    pub message: String,
}
