//! Path management for agenda-cli
//!
//! Provides XDG-compliant path resolution for configuration, data, and the
//! backup file.
//!
//! ## Path Resolution Order
//!
//! 1. `AGENDA_CLI_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/agenda-cli` or `~/.config/agenda-cli`
//! 3. Windows: `%APPDATA%\agenda-cli`

use std::path::PathBuf;

use crate::error::AgendaError;

/// Manages all paths used by agenda-cli
#[derive(Debug, Clone)]
pub struct AgendaPaths {
    /// Base directory for all agenda-cli data
    base_dir: PathBuf,
}

impl AgendaPaths {
    /// Create a new AgendaPaths instance
    ///
    /// Path resolution:
    /// 1. `AGENDA_CLI_DATA_DIR` env var (explicit override)
    /// 2. Unix: `$XDG_CONFIG_HOME/agenda-cli` or `~/.config/agenda-cli`
    /// 3. Windows: `%APPDATA%\agenda-cli`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, AgendaError> {
        let base_dir = if let Ok(custom) = std::env::var("AGENDA_CLI_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create AgendaPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/agenda-cli/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (~/.config/agenda-cli/data/)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the backup directory (~/.config/agenda-cli/backups/)
    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join("backups")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the event record file
    pub fn events_file(&self) -> PathBuf {
        self.data_dir().join("events.csv")
    }

    /// Get the path to the event backup file
    pub fn backup_file(&self) -> PathBuf {
        self.backup_dir().join("events_backup.csv")
    }

    /// Ensure all required directories exist
    ///
    /// Creates:
    /// - Base directory (~/.config/agenda-cli/)
    /// - Data directory (~/.config/agenda-cli/data/)
    /// - Backup directory (~/.config/agenda-cli/backups/)
    pub fn ensure_directories(&self) -> Result<(), AgendaError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| AgendaError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| AgendaError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.backup_dir())
            .map_err(|e| AgendaError::Io(format!("Failed to create backup directory: {}", e)))?;

        Ok(())
    }

    /// Check if agenda-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, AgendaError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
    Ok(config_base.join("agenda-cli"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, AgendaError> {
    // Windows: Use APPDATA
    let appdata = std::env::var("APPDATA")
        .map_err(|_| AgendaError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join("agenda-cli"))
}
