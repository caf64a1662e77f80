//! Storage layer for agenda-cli
//!
//! Provides delimited-text file storage with atomic rewrites, an in-process
//! read/write lock, and automatic directory creation.

pub mod codec;
pub mod events;
pub mod file_io;

pub use codec::{decode_record, encode_record, DecodeError};
pub use events::{EventRepository, LoadReport};
pub use file_io::{read_lines, write_lines_atomic};

use crate::config::paths::AgendaPaths;
use crate::error::AgendaError;

/// Main storage coordinator that provides access to the event repository
pub struct Storage {
    paths: AgendaPaths,
    pub events: EventRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: AgendaPaths) -> Result<Self, AgendaError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            events: EventRepository::new(paths.events_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &AgendaPaths {
        &self.paths
    }
}
