//! Backup system for agenda-cli
//!
//! The backup is a byte-identical copy of the event record file under a
//! distinct path, overwritten on each backup and never merged. Restore
//! copies it back over the primary file.
//!
//! # Example
//!
//! ```rust,ignore
//! use agenda::backup::BackupManager;
//! use agenda::config::paths::AgendaPaths;
//!
//! let paths = AgendaPaths::new()?;
//! let manager = BackupManager::new(&paths);
//!
//! if manager.backup()? {
//!     println!("Backed up to {}", manager.backup_path().display());
//! }
//! ```

mod manager;

pub use manager::BackupManager;
