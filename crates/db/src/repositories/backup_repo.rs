//! Whole-table export and restore for `material_requests`.

use chrono::Utc;
use sqlx::SqlitePool;

use crate::models::backup::Backup;
use crate::models::material_request::MaterialRequest;
use crate::repositories::MATERIAL_REQUEST_COLUMNS as COLUMNS;

/// Provides JSON-snapshot export and restore.
pub struct BackupRepo;

impl BackupRepo {
    /// Read every request, ordered by id, into a [`Backup`].
    pub async fn snapshot(pool: &SqlitePool) -> Result<Backup, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM material_requests ORDER BY id");
        let rows = sqlx::query_as::<_, MaterialRequest>(&query)
            .fetch_all(pool)
            .await?;
        Ok(Backup::new(Utc::now(), rows))
    }

    /// Insert every record of `backup`, keeping ids and timestamps.
    ///
    /// Runs in one transaction and only if the table is empty; returns
    /// `Ok(None)` without writing anything otherwise. Records are expected
    /// to have been validated by the caller.
    pub async fn restore_into_empty(
        pool: &SqlitePool,
        backup: &Backup,
    ) -> Result<Option<u64>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM material_requests")
            .fetch_one(&mut *tx)
            .await?;
        if existing > 0 {
            tracing::debug!(existing, "Skipping restore, table is not empty");
            return Ok(None);
        }

        let mut restored = 0u64;
        for record in &backup.data {
            sqlx::query(
                "INSERT INTO material_requests \
                    (id, request_date, item_name, specifications, quantity, urgency, \
                     reason, vendor, status, images, created_at) \
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, strftime('%Y-%m-%d %H:%M:%f', ?))",
            )
            .bind(record.id)
            .bind(record.request_date)
            .bind(&record.item_name)
            .bind(&record.specifications)
            .bind(record.quantity)
            .bind(record.urgency)
            .bind(&record.reason)
            .bind(&record.vendor)
            .bind(record.status)
            .bind(&record.images)
            .bind(record.created_at)
            .execute(&mut *tx)
            .await?;
            restored += 1;
        }

        tx.commit().await?;
        Ok(Some(restored))
    }
}
