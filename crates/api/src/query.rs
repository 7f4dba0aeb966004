//! Shared query parameter types for list handlers.

use materials_core::error::CoreError;
use materials_core::validation::normalize_search;
use materials_db::models::material_request::RequestFilter;
use serde::Deserialize;

/// Sentinel status value meaning "no status filter".
pub const STATUS_ALL: &str = "all";

/// `?status=<enum|all>&search=<text>` as accepted by the list page and the
/// JSON list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RequestListParams {
    pub status: Option<String>,
    pub search: Option<String>,
}

impl RequestListParams {
    /// Turn raw parameters into a repository filter.
    ///
    /// Missing, blank or `all` status means no status filter; anything else
    /// must be one of the five statuses.
    pub fn to_filter(&self) -> Result<RequestFilter, CoreError> {
        let status = match self.status.as_deref().map(str::trim) {
            None | Some("") | Some(STATUS_ALL) => None,
            Some(raw) => Some(raw.parse()?),
        };
        Ok(RequestFilter {
            status,
            search: normalize_search(self.search.as_deref()),
        })
    }
}
