//! Repository for the `material_requests` table.

use materials_core::types::DbId;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::models::material_request::{
    CreateMaterialRequest, MaterialRequest, RequestFilter, StatusCounts,
};
use crate::models::status::RequestStatus;
use crate::repositories::MATERIAL_REQUEST_COLUMNS as COLUMNS;

/// Provides create, query and status-transition operations for material requests.
///
/// There is deliberately no delete and no general update: after creation
/// only the status column changes.
pub struct MaterialRequestRepo;

impl MaterialRequestRepo {
    /// Insert a new request with status `pending`, returning the created row.
    pub async fn create(
        pool: &SqlitePool,
        input: &CreateMaterialRequest,
    ) -> Result<MaterialRequest, sqlx::Error> {
        let query = format!(
            "INSERT INTO material_requests \
                (item_name, specifications, quantity, urgency, reason, vendor, status, images) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialRequest>(&query)
            .bind(&input.item_name)
            .bind(&input.specifications)
            .bind(input.quantity)
            .bind(input.urgency)
            .bind(&input.reason)
            .bind(&input.vendor)
            .bind(RequestStatus::Pending)
            .bind(&input.images)
            .fetch_one(pool)
            .await
    }

    /// Find a request by its ID.
    pub async fn find_by_id(
        pool: &SqlitePool,
        id: DbId,
    ) -> Result<Option<MaterialRequest>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM material_requests WHERE id = ?");
        sqlx::query_as::<_, MaterialRequest>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List requests matching `filter`, newest first.
    ///
    /// Status is filtered in SQL. The search text is matched as a literal
    /// substring of item name, specifications or reason after lower-casing
    /// both sides, so case folding covers all Unicode letters.
    pub async fn list(
        pool: &SqlitePool,
        filter: &RequestFilter,
    ) -> Result<Vec<MaterialRequest>, sqlx::Error> {
        let mut qb: QueryBuilder<Sqlite> =
            QueryBuilder::new(format!("SELECT {COLUMNS} FROM material_requests"));

        if let Some(status) = filter.status {
            qb.push(" WHERE status = ").push_bind(status);
        }

        qb.push(" ORDER BY created_at DESC, id DESC");

        let rows = qb.build_query_as::<MaterialRequest>().fetch_all(pool).await?;

        Ok(match filter.search.as_deref() {
            Some(search) => {
                let needle = search.to_lowercase();
                rows.into_iter()
                    .filter(|row| matches_search(row, &needle))
                    .collect()
            }
            None => rows,
        })
    }

    /// Set the status of a request. Other columns are never touched.
    ///
    /// Returns `false` if no row with the given `id` exists.
    pub async fn update_status(
        pool: &SqlitePool,
        id: DbId,
        status: RequestStatus,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE material_requests SET status = ? WHERE id = ?")
            .bind(status)
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Duplicate an existing request as a new `pending` one with no vendor.
    ///
    /// Returns `None` if the source request does not exist.
    pub async fn copy(
        pool: &SqlitePool,
        source_id: DbId,
    ) -> Result<Option<MaterialRequest>, sqlx::Error> {
        let query = format!(
            "INSERT INTO material_requests \
                (item_name, specifications, quantity, urgency, reason, vendor, status, images) \
             SELECT item_name, specifications, quantity, urgency, reason, NULL, ?, images \
             FROM material_requests WHERE id = ? \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MaterialRequest>(&query)
            .bind(RequestStatus::Pending)
            .bind(source_id)
            .fetch_optional(pool)
            .await
    }

    /// Count requests per status over the whole table.
    pub async fn status_counts(pool: &SqlitePool) -> Result<StatusCounts, sqlx::Error> {
        let groups = sqlx::query_as::<_, (RequestStatus, i64)>(
            "SELECT status, COUNT(*) FROM material_requests GROUP BY status",
        )
        .fetch_all(pool)
        .await?;
        Ok(StatusCounts::from_groups(groups))
    }

    /// Total number of requests.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM material_requests")
            .fetch_one(pool)
            .await?;
        Ok(n)
    }
}

/// Whether any searchable field of `row` contains `needle` (already lower-cased).
fn matches_search(row: &MaterialRequest, needle: &str) -> bool {
    [
        Some(row.item_name.as_str()),
        row.specifications.as_deref(),
        row.reason.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, Utc};

    use super::*;
    use crate::models::status::Urgency;

    fn row(item_name: &str, specifications: Option<&str>, reason: Option<&str>) -> MaterialRequest {
        MaterialRequest {
            id: 1,
            request_date: NaiveDate::from_ymd_opt(2025, 1, 6).unwrap(),
            item_name: item_name.into(),
            specifications: specifications.map(str::to_string),
            quantity: 1,
            urgency: Urgency::Normal,
            reason: reason.map(str::to_string),
            vendor: Some("볼트상사".into()),
            status: RequestStatus::Pending,
            images: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn search_folds_non_ascii_case() {
        assert!(matches_search(&row("ÉCROU inox", None, None), "écrou"));
        assert!(matches_search(&row("écrou inox", None, None), &"ÉCROU".to_lowercase()));
    }

    #[test]
    fn search_checks_specifications_and_reason_but_not_vendor() {
        assert!(matches_search(&row("너트", Some("M8 볼트용"), None), "볼트"));
        assert!(matches_search(&row("너트", None, Some("볼트 체결")), "볼트"));
        assert!(!matches_search(&row("너트", None, None), "볼트"));
    }

    #[test]
    fn search_is_literal() {
        assert!(matches_search(&row("100% cotton", None, None), "100%"));
        assert!(!matches_search(&row("100 cotton", None, None), "100%"));
        assert!(!matches_search(&row("a_b", None, None), "a%b"));
    }
}
