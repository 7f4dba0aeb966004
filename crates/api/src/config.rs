use std::path::PathBuf;

use axum::http::HeaderValue;
use materials_core::storage::{
    home_dir, ProjectDirLocator, StorageLocator, SyncProvider, SyncedFolderLocator,
};

/// Error raised when an environment variable holds an unusable value.
#[derive(Debug, thiserror::Error)]
#[error("Invalid value for {var}: '{value}' ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

/// Where the database file and image folder live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageMode {
    /// `<DATA_DIR>/db/...`
    Local,
    /// A folder synced by a desktop client.
    Synced(SyncProvider),
}

/// Storage-related settings.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub mode: StorageMode,
    /// Root for [`StorageMode::Local`] (default: `.`).
    pub data_dir: PathBuf,
    /// Folder name inside a synced drive (default: `MaterialTracker`).
    pub app_folder: String,
    /// Explicit `sqlite:` URL; overrides the resolved database path.
    pub database_url: Option<String>,
}

impl StorageConfig {
    /// Build the locator matching the configured mode.
    pub fn locator(&self) -> Box<dyn StorageLocator> {
        match self.mode {
            StorageMode::Local => Box::new(ProjectDirLocator::new(self.data_dir.clone())),
            StorageMode::Synced(provider) => Box::new(SyncedFolderLocator::new(
                provider,
                home_dir(),
                self.app_folder.clone(),
            )),
        }
    }
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for running on a single desktop.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `5000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub storage: StorageConfig,
    /// Insert a few sample requests when the database starts empty.
    pub seed_sample_data: bool,
    /// JSON snapshot restored into an empty database at startup.
    pub backup_json: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    ///
    /// | Env Var                | Default                  |
    /// |------------------------|--------------------------|
    /// | `HOST`                 | `0.0.0.0`                |
    /// | `PORT`                 | `5000`                   |
    /// | `CORS_ORIGINS`         | `http://localhost:5000`  |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                     |
    /// | `STORAGE_MODE`         | `local`                  |
    /// | `DATA_DIR`             | `.`                      |
    /// | `APP_FOLDER`           | `MaterialTracker`        |
    /// | `DATABASE_URL`         | unset                    |
    /// | `SEED_SAMPLE_DATA`     | `false`                  |
    /// | `DB_BACKUP_JSON`       | unset                    |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port = parse_var("PORT", var("PORT"), 5000u16)?;

        let cors_origins: Vec<String> = var("CORS_ORIGINS")
            .unwrap_or_else(|| "http://localhost:5000".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            // Credentials are allowed, which rules out a wildcard origin.
            if origin == "*" {
                return Err(ConfigError {
                    var: "CORS_ORIGINS",
                    value: origin.clone(),
                    reason: "wildcard origin is not allowed, list origins explicitly".into(),
                });
            }
            HeaderValue::from_str(origin).map_err(|e| ConfigError {
                var: "CORS_ORIGINS",
                value: origin.clone(),
                reason: e.to_string(),
            })?;
        }

        let request_timeout_secs = parse_var("REQUEST_TIMEOUT_SECS", var("REQUEST_TIMEOUT_SECS"), 30u64)?;

        let mode = match var("STORAGE_MODE").as_deref().map(str::to_ascii_lowercase).as_deref() {
            None | Some("local") => StorageMode::Local,
            Some("onedrive") => StorageMode::Synced(SyncProvider::OneDrive),
            Some("icloud") => StorageMode::Synced(SyncProvider::ICloud),
            Some(other) => {
                return Err(ConfigError {
                    var: "STORAGE_MODE",
                    value: other.to_string(),
                    reason: "expected local, onedrive or icloud".into(),
                })
            }
        };

        let storage = StorageConfig {
            mode,
            data_dir: var("DATA_DIR").map(PathBuf::from).unwrap_or_else(|| ".".into()),
            app_folder: var("APP_FOLDER").unwrap_or_else(|| "MaterialTracker".into()),
            database_url: var("DATABASE_URL"),
        };

        let seed_sample_data = parse_bool("SEED_SAMPLE_DATA", var("SEED_SAMPLE_DATA"))?;

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
            seed_sample_data,
            backup_json: var("DB_BACKUP_JSON"),
        })
    }
}

fn parse_var<T>(name: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError {
            var: name,
            reason: e.to_string(),
            value,
        }),
    }
}

fn parse_bool(name: &'static str, raw: Option<String>) -> Result<bool, ConfigError> {
    match raw.as_deref().map(|v| v.trim().to_ascii_lowercase()).as_deref() {
        None | Some("0" | "false" | "no" | "off") => Ok(false),
        Some("1" | "true" | "yes" | "on") => Ok(true),
        Some(_) => Err(ConfigError {
            var: name,
            value: raw.unwrap_or_default(),
            reason: "expected true or false".into(),
        }),
    }
}
