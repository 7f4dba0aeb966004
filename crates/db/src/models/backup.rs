//! JSON snapshot of the whole `material_requests` table.
//!
//! Produced by the export endpoint and accepted at startup to repopulate an
//! empty database.

use materials_core::types::Timestamp;
use serde::{Deserialize, Serialize};

use crate::models::material_request::MaterialRequest;

/// Column order of the table, recorded in every snapshot.
pub const BACKUP_COLUMNS: &[&str] = &[
    "id",
    "request_date",
    "item_name",
    "specifications",
    "quantity",
    "urgency",
    "reason",
    "vendor",
    "status",
    "images",
    "created_at",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Backup {
    pub backup_date: Timestamp,
    pub total_records: usize,
    #[serde(default)]
    pub columns: Vec<String>,
    pub data: Vec<MaterialRequest>,
}

impl Backup {
    pub fn new(backup_date: Timestamp, data: Vec<MaterialRequest>) -> Self {
        Self {
            backup_date,
            total_records: data.len(),
            columns: BACKUP_COLUMNS.iter().map(|c| c.to_string()).collect(),
            data,
        }
    }
}
