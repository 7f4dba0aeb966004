use std::sync::Arc;

use materials_core::storage::StorageLocation;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: materials_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Resolved database and image locations.
    pub storage: Arc<StorageLocation>,
}
