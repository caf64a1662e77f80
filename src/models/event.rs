//! Event model
//!
//! Represents a single time-bounded calendar item. Events are immutable
//! values: editing one means replacing the stored record wholesale while
//! keeping its ID.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::ids::EventId;
use crate::error::{AgendaError, AgendaResult};

/// A calendar event
///
/// Timestamps are naive local datetimes; the record file format is
/// locale-independent (see [`storage::codec`](crate::storage::codec)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Unique identifier assigned by the repository
    pub id: EventId,

    /// Short title, shown in listings
    pub title: String,

    /// Free-form description (may be empty)
    pub description: String,

    /// When the event starts
    pub start: NaiveDateTime,

    /// When the event ends
    pub end: NaiveDateTime,
}

impl Event {
    /// Create a new event
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        description: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            start,
            end,
        }
    }

    /// Validate the event's interval
    ///
    /// The repository itself never checks ordering; callers run this before
    /// persisting.
    pub fn validate(&self) -> AgendaResult<()> {
        if self.end < self.start {
            return Err(AgendaError::Validation(format!(
                "Event end ({}) is before start ({})",
                self.end, self.start
            )));
        }
        Ok(())
    }

    /// Scheduled duration in whole minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether this event's interval overlaps `[start, end)`
    ///
    /// Half-open rule: back-to-back events (`self.end == start`) and
    /// zero-length intervals do not overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && end > self.start
    }

    /// Whether the event starts strictly after `now`
    pub fn is_upcoming(&self, now: NaiveDateTime) -> bool {
        self.start > now
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn test_validate_rejects_inverted_interval() {
        let event = Event::new(EventId::new(1), "Standup", "", dt(10, 0), dt(9, 0));
        assert!(event.validate().is_err());
    }

    #[test]
    fn test_validate_accepts_zero_length() {
        let event = Event::new(EventId::new(1), "Ping", "", dt(9, 0), dt(9, 0));
        assert!(event.validate().is_ok());
    }

    #[test]
    fn test_duration_minutes() {
        let event = Event::new(EventId::new(1), "Standup", "", dt(9, 0), dt(10, 30));
        assert_eq!(event.duration_minutes(), 90);
    }

    #[test]
    fn test_overlap_half_open() {
        let event = Event::new(EventId::new(1), "A", "", dt(9, 0), dt(10, 0));

        // Plain overlap
        assert!(event.overlaps(dt(9, 30), dt(10, 30)));
        // Containment
        assert!(event.overlaps(dt(8, 0), dt(11, 0)));
        // Back-to-back never conflicts
        assert!(!event.overlaps(dt(10, 0), dt(11, 0)));
        assert!(!event.overlaps(dt(8, 0), dt(9, 0)));
        // Zero-length candidate
        assert!(!event.overlaps(dt(9, 30), dt(9, 30)));
    }

    #[test]
    fn test_is_upcoming() {
        let event = Event::new(EventId::new(1), "A", "", dt(10, 0), dt(11, 0));
        assert!(event.is_upcoming(dt(9, 59)));
        // Strictly after: an event starting exactly now is not upcoming
        assert!(!event.is_upcoming(dt(10, 0)));
    }
}
