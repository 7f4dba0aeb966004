//! Domain model structs and DTOs.
//!
//! - [`status`]: text-backed enums for the `status` and `urgency` columns
//! - [`material_request`]: the `material_requests` row plus create/filter DTOs
//! - [`backup`]: JSON snapshot format used for export and restore

pub mod backup;
pub mod material_request;
pub mod status;
