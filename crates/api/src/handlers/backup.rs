use axum::extract::State;
use axum::Json;
use materials_db::models::backup::Backup;
use materials_db::repositories::BackupRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /api/backup
///
/// Full JSON snapshot of the table. The output can be fed back through
/// `DB_BACKUP_JSON` to repopulate an empty database.
pub async fn export(State(state): State<AppState>) -> AppResult<Json<Backup>> {
    let backup = BackupRepo::snapshot(&state.pool).await?;
    tracing::info!(total_records = backup.total_records, "Backup exported");
    Ok(Json(backup))
}
