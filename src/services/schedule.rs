//! Schedule service
//!
//! Business logic for the calendar: booking events, interval-overlap conflict
//! detection, keyword search, deletion, edits, and aggregate statistics.
//! Every operation goes through the repository; nothing here touches the
//! record file directly.

use chrono::{Local, NaiveDateTime};

use crate::error::{AgendaError, AgendaResult};
use crate::models::{Event, EventId};
use crate::storage::Storage;

/// Aggregate statistics over the whole calendar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduleStats {
    /// Total number of events
    pub total: usize,
    /// Events whose start is strictly after "now"
    pub upcoming: usize,
    /// Sum of event durations in minutes, past and future alike
    pub total_scheduled_minutes: i64,
}

/// Service for schedule management
pub struct ScheduleService<'a> {
    storage: &'a Storage,
}

impl<'a> ScheduleService<'a> {
    /// Create a new schedule service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Book a new event with a repository-assigned ID
    ///
    /// Validates the interval; conflict checking is a separate query the
    /// caller runs first (a conflicting booking is allowed once warned).
    pub fn schedule(
        &self,
        title: &str,
        description: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AgendaResult<Event> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AgendaError::Validation("Event title cannot be empty".into()));
        }
        validate_interval(start, end)?;

        self.storage.events.create(title, description, start, end)
    }

    /// Check whether `[start, end)` overlaps any stored event
    ///
    /// `exclude` skips one event by ID, used when re-checking an edited
    /// event against everything but itself. Half-open semantics: zero-length
    /// and back-to-back intervals never conflict.
    pub fn has_conflict(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude: Option<EventId>,
    ) -> AgendaResult<bool> {
        let events = self.storage.events.load_all()?;
        Ok(events
            .iter()
            .filter(|e| Some(e.id) != exclude)
            .any(|e| e.overlaps(start, end)))
    }

    /// Find the stored events overlapping `[start, end)`
    ///
    /// Same rule as [`ScheduleService::has_conflict`], but returns the
    /// conflicting events so the shell can name them.
    pub fn conflicts_with(
        &self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        exclude: Option<EventId>,
    ) -> AgendaResult<Vec<Event>> {
        let events = self.storage.events.load_all()?;
        Ok(events
            .into_iter()
            .filter(|e| Some(e.id) != exclude && e.overlaps(start, end))
            .collect())
    }

    /// Case-insensitive substring search over title and description
    ///
    /// An empty keyword matches everything. Results come back in
    /// chronological order, same as a plain load.
    pub fn search(&self, keyword: &str) -> AgendaResult<Vec<Event>> {
        let keyword = keyword.to_lowercase();
        let events = self.storage.events.load_all()?;
        Ok(events
            .into_iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&keyword)
                    || e.description.to_lowercase().contains(&keyword)
            })
            .collect())
    }

    /// Delete an event by ID, returning whether a removal occurred
    pub fn delete(&self, id: EventId) -> AgendaResult<bool> {
        self.storage.events.delete(id)
    }

    /// Replace an event's fields in place, keeping its ID
    ///
    /// One read-modify-write under the repository's exclusive lock; no
    /// delete-then-reinsert window. Returns false if the ID is unknown.
    pub fn replace(
        &self,
        id: EventId,
        title: &str,
        description: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> AgendaResult<bool> {
        let title = title.trim();
        if title.is_empty() {
            return Err(AgendaError::Validation("Event title cannot be empty".into()));
        }
        validate_interval(start, end)?;

        self.storage
            .events
            .replace(Event::new(id, title, description, start, end))
    }

    /// Statistics relative to the local wall clock
    pub fn statistics(&self) -> AgendaResult<ScheduleStats> {
        self.statistics_at(Local::now().naive_local())
    }

    /// Statistics relative to an explicit "now" (injectable for tests)
    pub fn statistics_at(&self, now: NaiveDateTime) -> AgendaResult<ScheduleStats> {
        let events = self.storage.events.load_all()?;

        let total = events.len();
        let upcoming = events.iter().filter(|e| e.is_upcoming(now)).count();
        let total_scheduled_minutes = events.iter().map(Event::duration_minutes).sum();

        Ok(ScheduleStats {
            total,
            upcoming,
            total_scheduled_minutes,
        })
    }
}

fn validate_interval(start: NaiveDateTime, end: NaiveDateTime) -> AgendaResult<()> {
    if end < start {
        return Err(AgendaError::Validation(format!(
            "Event end ({}) is before start ({})",
            end, start
        )));
    }
    Ok(())
}
