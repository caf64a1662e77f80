//! File I/O utilities with atomic writes
//!
//! Provides safe line-oriented file operations that won't corrupt the record
//! file on failure.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::AgendaError;

/// Read all lines from a text file, returning an empty Vec if it doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, AgendaError> {
    let path = path.as_ref();

    if !path.exists() {
        return Ok(Vec::new());
    }

    let file = File::open(path)
        .map_err(|e| AgendaError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let reader = BufReader::new(file);
    reader
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| AgendaError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Write lines to a file atomically (write to temp, then rename)
///
/// This ensures that the file is either completely written or not modified at
/// all, so a failed rewrite can never truncate existing records.
pub fn write_lines_atomic<P, S>(path: P, lines: &[S]) -> Result<(), AgendaError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AgendaError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| AgendaError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| AgendaError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| AgendaError::Storage(format!("Failed to flush data: {}", e)))?;

    // Sync to disk before rename
    writer
        .get_ref()
        .sync_all()
        .map_err(|e| AgendaError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        AgendaError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append lines to a file, creating it (and its parent directory) if needed
///
/// Returns whether the file was newly created, so callers can decide to
/// write a header first.
pub fn append_lines<P, S>(path: P, lines: &[S]) -> Result<bool, AgendaError>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            AgendaError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let created = !path.exists();

    let file = fs::OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|e| AgendaError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| AgendaError::Storage(format!("Failed to append data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| AgendaError::Storage(format!("Failed to flush data: {}", e)))?;

    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        let lines = read_lines(&path).unwrap();
        assert!(lines.is_empty());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_lines_atomic(&path, &["header", "record one", "record two"]).unwrap();
        assert!(path.exists());

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["header", "record one", "record two"]);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        write_lines_atomic(&path, &["line"]).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_lines_atomic(&path, &["line"]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_append_reports_creation() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let created = append_lines(&path, &["first"]).unwrap();
        assert!(created);

        let created = append_lines(&path, &["second"]).unwrap();
        assert!(!created);

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        write_lines_atomic(&path, &["old one", "old two"]).unwrap();
        write_lines_atomic(&path, &["new"]).unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines, vec!["new"]);
    }
}
