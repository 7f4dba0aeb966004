//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&SqlitePool` as the first argument.

pub mod backup_repo;
pub mod material_request_repo;

pub use backup_repo::BackupRepo;
pub use material_request_repo::MaterialRequestRepo;

/// Column list shared across `material_requests` queries.
pub(crate) const MATERIAL_REQUEST_COLUMNS: &str = "id, request_date, item_name, specifications, \
     quantity, urgency, reason, vendor, status, images, created_at";
