//! Backup manager for agenda-cli
//!
//! Copies the event record file to a secondary path and back. A missing
//! source file is reported as `Ok(false)`, not an error, so the shell can
//! tell "nothing to back up" apart from a real I/O failure.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::paths::AgendaPaths;
use crate::error::{AgendaError, AgendaResult};

/// Manages the single-file backup of the event record file
pub struct BackupManager {
    /// The live record file
    primary: PathBuf,
    /// Where the backup copy lives
    backup: PathBuf,
}

impl BackupManager {
    /// Create a new BackupManager from the configured paths
    pub fn new(paths: &AgendaPaths) -> Self {
        Self {
            primary: paths.events_file(),
            backup: paths.backup_file(),
        }
    }

    /// Create a BackupManager over explicit files (useful for testing)
    pub fn with_files(primary: PathBuf, backup: PathBuf) -> Self {
        Self { primary, backup }
    }

    /// Copy the primary file to the backup path, overwriting any existing
    /// backup
    ///
    /// Returns `Ok(false)` if there is no primary file to back up.
    pub fn backup(&self) -> AgendaResult<bool> {
        if !self.primary.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.backup.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Io(format!("Failed to create backup directory: {}", e))
            })?;
        }

        fs::copy(&self.primary, &self.backup)
            .map_err(|e| AgendaError::Io(format!("Failed to write backup: {}", e)))?;

        log::info!("Backed up {} to {}", self.primary.display(), self.backup.display());
        Ok(true)
    }

    /// Copy the backup over the primary file, overwriting current data
    ///
    /// Destructive and irreversible without a prior backup of the current
    /// state. Returns `Ok(false)` if no backup exists.
    pub fn restore(&self) -> AgendaResult<bool> {
        if !self.backup.exists() {
            return Ok(false);
        }

        if let Some(parent) = self.primary.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AgendaError::Io(format!("Failed to create data directory: {}", e))
            })?;
        }

        fs::copy(&self.backup, &self.primary)
            .map_err(|e| AgendaError::Io(format!("Failed to restore backup: {}", e)))?;

        log::info!("Restored {} from {}", self.primary.display(), self.backup.display());
        Ok(true)
    }

    /// Whether a backup file currently exists
    pub fn backup_exists(&self) -> bool {
        self.backup.exists()
    }

    /// Path of the backup file
    pub fn backup_path(&self) -> &Path {
        &self.backup
    }
}
