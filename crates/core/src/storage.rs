//! Storage location resolution.
//!
//! The application never decides on its own where the database file and the
//! image directory live. It asks a [`StorageLocator`], which may point at a
//! plain project directory or at a cloud-synced folder (OneDrive, iCloud
//! Drive).

use std::path::{Path, PathBuf};

use crate::error::CoreError;

/// File name of the SQLite database inside the `db` folder.
pub const DATABASE_FILE_NAME: &str = "material_rq.db";

/// iCloud Drive root, relative to the user's home directory (macOS).
const ICLOUD_DRIVE_DIR: &str = "Library/Mobile Documents/com~apple~CloudDocs";

/// OneDrive root, relative to the user's home directory.
const ONEDRIVE_DIR: &str = "OneDrive";

/// Resolved on-disk locations for persistent data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageLocation {
    pub database_path: PathBuf,
    pub images_dir: PathBuf,
}

impl StorageLocation {
    /// Create the database folder and the image folder if missing.
    pub fn ensure_dirs(&self) -> Result<(), CoreError> {
        if let Some(parent) = self.database_path.parent() {
            create_dir(parent)?;
        }
        create_dir(&self.images_dir)
    }
}

fn create_dir(path: &Path) -> Result<(), CoreError> {
    std::fs::create_dir_all(path).map_err(|e| {
        CoreError::Internal(format!("Failed to create directory {}: {e}", path.display()))
    })
}

/// Something that knows where persistent data should live.
pub trait StorageLocator: Send + Sync {
    fn locate(&self) -> Result<StorageLocation, CoreError>;

    /// Human-readable description for startup logs.
    fn describe(&self) -> String;
}

// ---------------------------------------------------------------------------
// Project directory
// ---------------------------------------------------------------------------

/// Keeps everything under `<root>/db`.
#[derive(Debug, Clone)]
pub struct ProjectDirLocator {
    root: PathBuf,
}

impl ProjectDirLocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl StorageLocator for ProjectDirLocator {
    fn locate(&self) -> Result<StorageLocation, CoreError> {
        let db_dir = self.root.join("db");
        Ok(StorageLocation {
            database_path: db_dir.join(DATABASE_FILE_NAME),
            images_dir: db_dir.join("images"),
        })
    }

    fn describe(&self) -> String {
        format!("project directory {}", self.root.display())
    }
}

// ---------------------------------------------------------------------------
// Cloud-synced folder
// ---------------------------------------------------------------------------

/// Desktop sync clients whose folders can hold the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncProvider {
    OneDrive,
    ICloud,
}

impl SyncProvider {
    fn root_under_home(self) -> &'static str {
        match self {
            SyncProvider::OneDrive => ONEDRIVE_DIR,
            SyncProvider::ICloud => ICLOUD_DRIVE_DIR,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SyncProvider::OneDrive => "onedrive",
            SyncProvider::ICloud => "icloud",
        }
    }
}

/// Keeps data in `<home>/<provider root>/<app_folder>/{db,images}`.
#[derive(Debug, Clone)]
pub struct SyncedFolderLocator {
    provider: SyncProvider,
    home: Option<PathBuf>,
    app_folder: String,
}

impl SyncedFolderLocator {
    /// `home` is usually [`home_dir()`]; `None` makes [`locate`](StorageLocator::locate) fail.
    pub fn new(provider: SyncProvider, home: Option<PathBuf>, app_folder: impl Into<String>) -> Self {
        Self {
            provider,
            home,
            app_folder: app_folder.into(),
        }
    }
}

impl StorageLocator for SyncedFolderLocator {
    fn locate(&self) -> Result<StorageLocation, CoreError> {
        let home = self.home.as_ref().ok_or_else(|| {
            CoreError::Internal(format!(
                "Cannot resolve {} folder: home directory is unknown",
                self.provider.as_str()
            ))
        })?;
        let base = home
            .join(self.provider.root_under_home())
            .join(&self.app_folder);
        Ok(StorageLocation {
            database_path: base.join("db").join(DATABASE_FILE_NAME),
            images_dir: base.join("images"),
        })
    }

    fn describe(&self) -> String {
        format!("{} folder '{}'", self.provider.as_str(), self.app_folder)
    }
}

/// The current user's home directory, from `HOME` or `USERPROFILE`.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
