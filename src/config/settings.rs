//! User settings for agenda-cli
//!
//! Manages user preferences: display date format and whether destructive
//! operations take an automatic backup first.

use serde::{Deserialize, Serialize};

use super::paths::AgendaPaths;
use crate::error::AgendaError;

/// User settings for agenda-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Date format used when displaying events (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Whether to back up the event file before destructive operations
    #[serde(default = "default_auto_backup")]
    pub auto_backup: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_date_format() -> String {
    "%Y-%m-%d %H:%M".to_string()
}

fn default_auto_backup() -> bool {
    false
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            date_format: default_date_format(),
            auto_backup: default_auto_backup(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &AgendaPaths) -> Result<Self, AgendaError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| AgendaError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| AgendaError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &AgendaPaths) -> Result<(), AgendaError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| AgendaError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| AgendaError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}
