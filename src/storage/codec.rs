//! Record codec for the event file
//!
//! One event per line, five comma-delimited fields:
//!
//! ```text
//! eventId,title,description,startDateTime,endDateTime
//! ```
//!
//! Commas inside title/description are replaced with `|` on encode and
//! restored on decode. The escape is lossy when the original text itself
//! contains `|`; this is a known limitation of the file format, kept rather
//! than silently changing the format.
//!
//! Timestamps use a fixed ISO-style pattern parsed and produced
//! deterministically regardless of host locale.

use chrono::NaiveDateTime;
use thiserror::Error;

use crate::models::{Event, EventId};

/// Field delimiter for records
pub const FIELD_DELIMITER: char = ',';

/// Stand-in character for delimiters occurring inside free text
pub const DELIMITER_PLACEHOLDER: char = '|';

/// Timestamp wire format (ISO local date-time, second precision)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Header line written at the top of the record file
pub const HEADER: &str = "eventId,title,description,startDateTime,endDateTime";

/// Why a single record failed to decode
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    /// Fewer than five delimited fields
    #[error("expected 5 fields, found {found}")]
    MissingFields { found: usize },

    /// The ID field is not a positive integer
    #[error("invalid event id: {0:?}")]
    InvalidId(String),

    /// A timestamp field did not match the wire format
    #[error("invalid timestamp: {0:?}")]
    InvalidTimestamp(String),
}

/// Encode an event as one record line
pub fn encode_record(event: &Event) -> String {
    format!(
        "{id}{d}{title}{d}{desc}{d}{start}{d}{end}",
        id = event.id,
        d = FIELD_DELIMITER,
        title = escape(&event.title),
        desc = escape(&event.description),
        start = event.start.format(TIMESTAMP_FORMAT),
        end = event.end.format(TIMESTAMP_FORMAT),
    )
}

/// Decode one record line into an event
///
/// Fields beyond the fifth are ignored. Never panics; corrupt lines come
/// back as a [`DecodeError`] for the caller to skip and report.
pub fn decode_record(line: &str) -> Result<Event, DecodeError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < 5 {
        return Err(DecodeError::MissingFields {
            found: fields.len(),
        });
    }

    let id: u32 = fields[0]
        .trim()
        .parse()
        .map_err(|_| DecodeError::InvalidId(fields[0].to_string()))?;
    if id == 0 {
        return Err(DecodeError::InvalidId(fields[0].to_string()));
    }

    let start = parse_timestamp(fields[3])?;
    let end = parse_timestamp(fields[4])?;

    Ok(Event::new(
        EventId::new(id),
        unescape(fields[1]),
        unescape(fields[2]),
        start,
        end,
    ))
}

fn parse_timestamp(field: &str) -> Result<NaiveDateTime, DecodeError> {
    NaiveDateTime::parse_from_str(field.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| DecodeError::InvalidTimestamp(field.to_string()))
}

fn escape(text: &str) -> String {
    text.replace(FIELD_DELIMITER, &DELIMITER_PLACEHOLDER.to_string())
}

fn unescape(text: &str) -> String {
    text.replace(DELIMITER_PLACEHOLDER, &FIELD_DELIMITER.to_string())
}
