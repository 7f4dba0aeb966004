//! Startup population of an empty database.
//!
//! Runs once, after migrations. When the table already holds rows nothing
//! happens. Otherwise a snapshot from `DB_BACKUP_JSON` is restored, and if
//! there is none (or it cannot be used) sample rows are inserted when
//! `SEED_SAMPLE_DATA` is on.

use materials_core::error::CoreError;
use materials_core::validation::{normalize_item_name, validate_quantity};
use materials_db::models::backup::Backup;
use materials_db::models::material_request::CreateMaterialRequest;
use materials_db::models::status::Urgency;
use materials_db::repositories::{BackupRepo, MaterialRequestRepo};
use materials_db::DbPool;

use crate::config::ServerConfig;

/// What [`bootstrap`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapOutcome {
    /// The table already had rows.
    Skipped { existing: i64 },
    /// This many records were restored from the backup snapshot.
    Restored(u64),
    /// This many sample records were inserted.
    Seeded(usize),
    /// Nothing to restore and seeding is off.
    Empty,
}

/// Populate an empty database from the configured backup or sample data.
///
/// A backup that fails to parse or validate is logged and ignored; only
/// database failures are returned as errors.
pub async fn bootstrap(
    pool: &DbPool,
    config: &ServerConfig,
) -> Result<BootstrapOutcome, sqlx::Error> {
    let existing = MaterialRequestRepo::count(pool).await?;
    if existing > 0 {
        return Ok(BootstrapOutcome::Skipped { existing });
    }

    if let Some(raw) = config.backup_json.as_deref() {
        match parse_backup(raw) {
            Ok(backup) => match BackupRepo::restore_into_empty(pool, &backup).await? {
                Some(restored) => {
                    tracing::info!(restored, "Database restored from backup snapshot");
                    return Ok(BootstrapOutcome::Restored(restored));
                }
                None => {
                    // Another writer got there first.
                    let existing = MaterialRequestRepo::count(pool).await?;
                    return Ok(BootstrapOutcome::Skipped { existing });
                }
            },
            Err(err) => {
                tracing::error!(error = %err, "Ignoring unusable DB_BACKUP_JSON");
            }
        }
    }

    if config.seed_sample_data {
        let samples = sample_requests();
        for sample in &samples {
            MaterialRequestRepo::create(pool, sample).await?;
        }
        tracing::info!(count = samples.len(), "Inserted sample material requests");
        return Ok(BootstrapOutcome::Seeded(samples.len()));
    }

    Ok(BootstrapOutcome::Empty)
}

/// Parse a snapshot and check every record against the submission rules.
pub fn parse_backup(raw: &str) -> Result<Backup, CoreError> {
    let backup: Backup = serde_json::from_str(raw)
        .map_err(|e| CoreError::Validation(format!("backup is not valid JSON: {e}")))?;

    for record in &backup.data {
        normalize_item_name(&record.item_name).map_err(|e| {
            CoreError::Validation(format!("backup record {}: {e}", record.id))
        })?;
        validate_quantity(record.quantity).map_err(|e| {
            CoreError::Validation(format!("backup record {}: {e}", record.id))
        })?;
    }

    Ok(backup)
}

fn sample_requests() -> Vec<CreateMaterialRequest> {
    let sample = |item_name: &str, specifications: &str, quantity, urgency, reason: &str| {
        CreateMaterialRequest {
            item_name: item_name.into(),
            specifications: Some(specifications.into()),
            quantity,
            urgency,
            reason: Some(reason.into()),
            ..Default::default()
        }
    };

    vec![
        sample("안전모", "흰색, CE 인증", 10, Urgency::High, "현장 안전 강화를 위해 필요"),
        sample("작업장갑", "면장갑, L사이즈", 20, Urgency::Normal, "작업자 보호용"),
        sample("전선", "2.5sq, 100m", 3, Urgency::Normal, "전기 배선 작업용"),
    ]
}
