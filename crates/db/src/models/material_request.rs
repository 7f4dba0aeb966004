//! Material request entity model and DTOs.

use materials_core::types::{DbId, RequestDate, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::status::{RequestStatus, Urgency};

/// A row from the `material_requests` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct MaterialRequest {
    pub id: DbId,
    pub request_date: RequestDate,
    pub item_name: String,
    pub specifications: Option<String>,
    pub quantity: i64,
    pub urgency: Urgency,
    pub reason: Option<String>,
    pub vendor: Option<String>,
    pub status: RequestStatus,
    pub images: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for inserting a new request. Fields are expected to be validated.
///
/// There is no status field: new requests always start as `pending`.
#[derive(Debug, Clone, Default)]
pub struct CreateMaterialRequest {
    pub item_name: String,
    pub specifications: Option<String>,
    pub quantity: i64,
    pub urgency: Urgency,
    pub reason: Option<String>,
    pub vendor: Option<String>,
    pub images: Option<String>,
}

/// Optional filters for listing requests. Both default to "no filter".
#[derive(Debug, Clone, Default)]
pub struct RequestFilter {
    /// Exact-match status.
    pub status: Option<RequestStatus>,
    /// Case-insensitive substring over item name, specifications and reason.
    pub search: Option<String>,
}

/// Per-status row counts. `total` is the sum of the five buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: i64,
    pub pending: i64,
    pub approved: i64,
    pub ordered: i64,
    pub received: i64,
    pub rejected: i64,
}

impl StatusCounts {
    /// Build from `(status, count)` pairs; missing statuses count as zero.
    pub fn from_groups(groups: impl IntoIterator<Item = (RequestStatus, i64)>) -> Self {
        let mut counts = StatusCounts::default();
        for (status, n) in groups {
            match status {
                RequestStatus::Pending => counts.pending += n,
                RequestStatus::Approved => counts.approved += n,
                RequestStatus::Ordered => counts.ordered += n,
                RequestStatus::Received => counts.received += n,
                RequestStatus::Rejected => counts.rejected += n,
            }
        }
        counts.total =
            counts.pending + counts.approved + counts.ordered + counts.received + counts.rejected;
        counts
    }

    /// Count for a single status.
    pub fn get(&self, status: RequestStatus) -> i64 {
        match status {
            RequestStatus::Pending => self.pending,
            RequestStatus::Approved => self.approved,
            RequestStatus::Ordered => self.ordered,
            RequestStatus::Received => self.received,
            RequestStatus::Rejected => self.rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_zero_fill_missing_statuses() {
        let counts = StatusCounts::from_groups([
            (RequestStatus::Pending, 3),
            (RequestStatus::Received, 1),
        ]);
        assert_eq!(counts.pending, 3);
        assert_eq!(counts.received, 1);
        assert_eq!(counts.approved, 0);
        assert_eq!(counts.ordered, 0);
        assert_eq!(counts.rejected, 0);
        assert_eq!(counts.total, 4);
    }

    #[test]
    fn total_is_sum_of_buckets() {
        let counts = StatusCounts::from_groups(
            RequestStatus::ALL.iter().map(|s| (*s, 2)),
        );
        assert_eq!(counts.total, 10);
        for s in RequestStatus::ALL {
            assert_eq!(counts.get(*s), 2);
        }
    }
}
