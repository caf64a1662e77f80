//! Event repository for delimited-text storage
//!
//! Sole reader/writer of the on-disk record file. The file is the single
//! source of truth: every operation reloads it rather than trusting a cached
//! index, which bounds staleness at the cost of O(n) per call. Fine for a
//! personal calendar.
//!
//! All mutations serialize behind one RwLock spanning the whole
//! read-modify-write sequence; readers take the shared side so they never
//! observe a file mid-rewrite.

use std::path::{Path, PathBuf};
use std::sync::RwLock;

use chrono::NaiveDateTime;

use crate::error::{AgendaError, AgendaResult};
use crate::models::{Event, EventId};

use super::codec::{self, HEADER};
use super::file_io::{append_lines, read_lines, write_lines_atomic};

/// Result of a bulk load: decoded events plus how many records were skipped
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    /// Events sorted ascending by start time (file order breaks ties)
    pub events: Vec<Event>,
    /// Number of corrupt records skipped
    pub skipped: usize,
}

/// Repository owning the persisted event file
pub struct EventRepository {
    path: PathBuf,
    lock: RwLock<()>,
}

impl EventRepository {
    /// Create a new event repository backed by `path`
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: RwLock::new(()),
        }
    }

    /// Path of the record file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all events, sorted ascending by start time
    ///
    /// A missing file is an empty calendar, not an error. Blank lines, the
    /// header line, and corrupt records are skipped; corrupt records are
    /// logged, never fatal.
    pub fn load_all(&self) -> AgendaResult<Vec<Event>> {
        Ok(self.load_with_report()?.events)
    }

    /// Load all events along with the count of skipped corrupt records
    pub fn load_with_report(&self) -> AgendaResult<LoadReport> {
        let _guard = self
            .lock
            .read()
            .map_err(|e| AgendaError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        self.read_unlocked()
    }

    /// Overwrite the record file with the given events, in the given order
    ///
    /// Writes header plus one record per event via an atomic temp-file
    /// rename, so a failed write leaves the previous content intact.
    /// Callers that want chronological order on disk must sort first.
    pub fn save_all(&self, events: &[Event]) -> AgendaResult<()> {
        let _guard = self
            .lock
            .write()
            .map_err(|e| AgendaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        self.write_unlocked(events)
    }

    /// Append a single event record
    ///
    /// Writes the header first only when the file is being created. Does not
    /// re-read the file or validate the ID against existing records.
    pub fn append(&self, event: &Event) -> AgendaResult<()> {
        let _guard = self
            .lock
            .write()
            .map_err(|e| AgendaError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        self.append_unlocked(event)
    }

    /// Compute the next free ID: `max(existing) + 1`, or 1 when empty
    ///
    /// Corrupt records do not contribute an ID. Pairing this with a separate
    /// `append` is racy; prefer [`EventRepository::create`], which holds the
    /// write lock across both steps.
    pub fn next_id(&self) -> AgendaResult<EventId> {
        let _guard = self
            .lock
            .read()
            .map_err(|e| AgendaError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        self.next_id_unlocked()
    }

    /// Assign the next free ID and append the event, as one exclusive section
    ///
    /// Returns the stored event with its assigned ID. Interval validity is
    /// the caller's concern (see [`Event::validate`]).
    pub fn create(
        &self,
        title: &str,
        description: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AgendaResult<Event> {
        let _guard = self
            .lock
            .write()
            .map_err(|e| AgendaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let id = self.next_id_unlocked()?;
        let event = Event::new(id, title, description, start, end);
        self.append_unlocked(&event)?;
        Ok(event)
    }

    /// Delete the event with the given ID
    ///
    /// Rewrites the whole file without that record. Returns whether a
    /// removal occurred; when the ID is absent the file is left untouched
    /// (no gratuitous rewrite).
    pub fn delete(&self, id: EventId) -> AgendaResult<bool> {
        let _guard = self
            .lock
            .write()
            .map_err(|e| AgendaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut events = self.read_unlocked()?.events;
        let before = events.len();
        events.retain(|e| e.id != id);

        if events.len() == before {
            return Ok(false);
        }

        self.write_unlocked(&events)?;
        Ok(true)
    }

    /// Replace the stored event carrying `updated.id` in one read-modify-write
    ///
    /// Keeps the ID stable across edits without the lost-update window of a
    /// delete-then-append. Returns false (and leaves the file untouched) if
    /// no event has that ID.
    pub fn replace(&self, updated: Event) -> AgendaResult<bool> {
        let _guard = self
            .lock
            .write()
            .map_err(|e| AgendaError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        let mut events = self.read_unlocked()?.events;
        let Some(slot) = events.iter_mut().find(|e| e.id == updated.id) else {
            return Ok(false);
        };
        *slot = updated;

        // Re-sort in case the start time moved
        events.sort_by_key(|e| e.start);
        self.write_unlocked(&events)?;
        Ok(true)
    }

    fn read_unlocked(&self) -> AgendaResult<LoadReport> {
        let lines = read_lines(&self.path)?;

        let mut events = Vec::new();
        let mut skipped = 0;

        for (idx, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            if idx == 0 && trimmed == HEADER {
                continue;
            }
            match codec::decode_record(trimmed) {
                Ok(event) => events.push(event),
                Err(err) => {
                    log::warn!(
                        "Skipping corrupt record at {}:{}: {}",
                        self.path.display(),
                        idx + 1,
                        err
                    );
                    skipped += 1;
                }
            }
        }

        // Stable sort: ties keep original file order
        events.sort_by_key(|e| e.start);

        Ok(LoadReport { events, skipped })
    }

    fn write_unlocked(&self, events: &[Event]) -> AgendaResult<()> {
        let mut lines = Vec::with_capacity(events.len() + 1);
        lines.push(HEADER.to_string());
        for event in events {
            lines.push(codec::encode_record(event));
        }
        write_lines_atomic(&self.path, &lines)
    }

    fn append_unlocked(&self, event: &Event) -> AgendaResult<()> {
        let record = codec::encode_record(event);
        let lines: Vec<String> = if self.path.exists() {
            vec![record]
        } else {
            vec![HEADER.to_string(), record]
        };
        append_lines(&self.path, &lines)?;
        Ok(())
    }

    fn next_id_unlocked(&self) -> AgendaResult<EventId> {
        let max_id = self
            .read_unlocked()?
            .events
            .iter()
            .map(|e| e.id.as_u32())
            .max();
        Ok(max_id.map(|m| EventId::new(m + 1)).unwrap_or(EventId::FIRST))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use std::fs;
    use tempfile::TempDir;

    fn create_test_repo() -> (TempDir, EventRepository) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.csv");
        let repo = EventRepository::new(path);
        (temp_dir, repo)
    }

    fn dt(day: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, day)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn event(id: u32, title: &str, day: u32, start_h: u32, end_h: u32) -> Event {
        Event::new(EventId::new(id), title, "", dt(day, start_h, 0), dt(day, end_h, 0))
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let (_temp_dir, repo) = create_test_repo();
        assert!(repo.load_all().unwrap().is_empty());
    }

    #[test]
    fn test_append_and_load() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "Standup", 2, 9, 10)).unwrap();
        repo.append(&event(2, "Review", 2, 11, 12)).unwrap();

        let events = repo.load_all().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].title, "Standup");
    }

    #[test]
    fn test_append_writes_header_once() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "A", 1, 9, 10)).unwrap();
        repo.append(&event(2, "B", 1, 11, 12)).unwrap();

        let contents = fs::read_to_string(repo.path()).unwrap();
        assert_eq!(contents.matches(HEADER).count(), 1);
        assert!(contents.starts_with(HEADER));
    }

    #[test]
    fn test_load_sorted_by_start() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "Later", 3, 9, 10)).unwrap();
        repo.append(&event(2, "Earlier", 1, 9, 10)).unwrap();
        repo.append(&event(3, "Middle", 2, 9, 10)).unwrap();

        let titles: Vec<_> = repo.load_all().unwrap().into_iter().map(|e| e.title).collect();
        assert_eq!(titles, vec!["Earlier", "Middle", "Later"]);
    }

    #[test]
    fn test_sort_is_stable_on_ties() {
        let (_temp_dir, repo) = create_test_repo();

        // Same start time: file order must be preserved
        repo.append(&event(5, "First in file", 1, 9, 10)).unwrap();
        repo.append(&event(2, "Second in file", 1, 9, 11)).unwrap();

        let events = repo.load_all().unwrap();
        assert_eq!(events[0].title, "First in file");
        assert_eq!(events[1].title, "Second in file");
    }

    #[test]
    fn test_load_idempotent() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "A", 1, 9, 10)).unwrap();
        repo.append(&event(2, "B", 2, 9, 10)).unwrap();

        assert_eq!(repo.load_all().unwrap(), repo.load_all().unwrap());
    }

    #[test]
    fn test_corrupt_and_blank_lines_skipped() {
        let (_temp_dir, repo) = create_test_repo();

        fs::write(
            repo.path(),
            format!(
                "{}\n1,Good,,2025-01-01T09:00:00,2025-01-01T10:00:00\n\nnot a record\n\
                 2,Bad date,,yesterday,2025-01-01T10:00:00\n\
                 3,Also good,,2025-01-02T09:00:00,2025-01-02T10:00:00\n",
                HEADER
            ),
        )
        .unwrap();

        let report = repo.load_with_report().unwrap();
        assert_eq!(report.events.len(), 2);
        assert_eq!(report.skipped, 2);
    }

    #[test]
    fn test_headerless_file_loads() {
        let (_temp_dir, repo) = create_test_repo();

        fs::write(repo.path(), "1,Solo,,2025-01-01T09:00:00,2025-01-01T10:00:00\n").unwrap();

        let events = repo.load_all().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Solo");
    }

    #[test]
    fn test_next_id_monotonic() {
        let (_temp_dir, repo) = create_test_repo();

        assert_eq!(repo.next_id().unwrap(), EventId::new(1));

        let created = repo.create("A", "", dt(1, 9, 0), dt(1, 10, 0)).unwrap();
        assert_eq!(created.id, EventId::new(1));
        assert_eq!(repo.next_id().unwrap(), EventId::new(2));
    }

    #[test]
    fn test_next_id_skips_gaps() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(7, "A", 1, 9, 10)).unwrap();
        assert_eq!(repo.next_id().unwrap(), EventId::new(8));
    }

    #[test]
    fn test_save_all_overwrites() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "Old", 1, 9, 10)).unwrap();
        repo.save_all(&[event(2, "New", 2, 9, 10)]).unwrap();

        let events = repo.load_all().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "New");
    }

    #[test]
    fn test_delete_removes_exactly_one() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "Keep", 1, 9, 10)).unwrap();
        repo.append(&event(2, "Drop", 2, 9, 10)).unwrap();

        assert!(repo.delete(EventId::new(2)).unwrap());

        let events = repo.load_all().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].id, EventId::new(1));
    }

    #[test]
    fn test_delete_missing_leaves_file_untouched() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "Keep", 1, 9, 10)).unwrap();
        let before = fs::read(repo.path()).unwrap();

        assert!(!repo.delete(EventId::new(99)).unwrap());

        let after = fs::read(repo.path()).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_replace_preserves_id() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "Original", 1, 9, 10)).unwrap();
        repo.append(&event(2, "Other", 2, 9, 10)).unwrap();

        let replaced = repo
            .replace(event(1, "Renamed", 3, 9, 10))
            .unwrap();
        assert!(replaced);

        let events = repo.load_all().unwrap();
        assert_eq!(events.len(), 2);
        // Start moved to day 3, so the edited event now sorts last
        assert_eq!(events[1].id, EventId::new(1));
        assert_eq!(events[1].title, "Renamed");
    }

    #[test]
    fn test_replace_missing_returns_false() {
        let (_temp_dir, repo) = create_test_repo();

        repo.append(&event(1, "A", 1, 9, 10)).unwrap();
        assert!(!repo.replace(event(42, "Ghost", 1, 9, 10)).unwrap());
    }

    #[test]
    fn test_save_all_leaves_no_temp_file() {
        let (temp_dir, repo) = create_test_repo();

        repo.save_all(&[event(1, "A", 1, 9, 10)]).unwrap();
        assert!(!temp_dir.path().join("events.csv.tmp").exists());
    }
}
