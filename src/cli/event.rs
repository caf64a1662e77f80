//! Event CLI commands
//!
//! Implements CLI commands for event management. All raw-text parsing of
//! dates and IDs happens here; the service layer only sees typed values.

use chrono::NaiveDateTime;
use clap::Subcommand;

use crate::backup::BackupManager;
use crate::config::settings::Settings;
use crate::display::{format_event_list, format_stats};
use crate::error::{AgendaError, AgendaResult};
use crate::models::EventId;
use crate::services::ScheduleService;
use crate::storage::Storage;

/// Event subcommands
#[derive(Subcommand)]
pub enum EventCommands {
    /// Add a new event
    Add {
        /// Event title
        title: String,
        /// Start time (e.g. "2025-01-01 09:00" or "2025-01-01T09:00")
        start: String,
        /// End time (e.g. "2025-01-01 10:00" or "10:00" for same day)
        end: String,
        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,
        /// Book even if the slot conflicts with an existing event
        #[arg(short, long)]
        force: bool,
    },
    /// List all events in chronological order
    List,
    /// Search events by keyword (title or description)
    Search {
        /// Keyword, case-insensitive; empty matches everything
        keyword: String,
    },
    /// Delete an event by ID
    Delete {
        /// Event ID
        id: String,
    },
    /// Edit an event, keeping its ID
    Edit {
        /// Event ID
        id: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New start time
        #[arg(short, long)]
        start: Option<String>,
        /// New end time
        #[arg(short, long)]
        end: Option<String>,
    },
    /// Check a time slot for conflicts without booking it
    Check {
        /// Slot start time
        start: String,
        /// Slot end time
        end: String,
    },
    /// Show schedule statistics
    Stats,
}

/// Handle an event command
pub fn handle_event_command(
    storage: &Storage,
    settings: &Settings,
    cmd: EventCommands,
) -> AgendaResult<()> {
    let service = ScheduleService::new(storage);

    match cmd {
        EventCommands::Add {
            title,
            start,
            end,
            description,
            force,
        } => {
            let start = parse_datetime(&start)?;
            let end = parse_end_datetime(&end, start)?;

            let conflicts = service.conflicts_with(start, end, None)?;
            if !conflicts.is_empty() && !force {
                eprintln!("Conflict with existing event(s):");
                for event in &conflicts {
                    eprintln!("  [{}] {}", event.id, event.title);
                }
                eprintln!("Use --force to book anyway.");
                return Err(AgendaError::Validation(
                    "Time slot conflicts with an existing event".into(),
                ));
            }

            let event = service.schedule(&title, &description, start, end)?;
            if !conflicts.is_empty() {
                println!("Warning: booked despite {} conflict(s).", conflicts.len());
            }
            println!("Created event [{}] {}", event.id, event.title);
            println!(
                "  {} -> {}",
                event.start.format(&settings.date_format),
                event.end.format(&settings.date_format)
            );
        }

        EventCommands::List => {
            let report = storage.events.load_with_report()?;
            if report.skipped > 0 {
                eprintln!("Warning: skipped {} corrupt record(s).", report.skipped);
            }
            print!("{}", format_event_list(&report.events, &settings.date_format));
        }

        EventCommands::Search { keyword } => {
            let events = service.search(&keyword)?;
            print!("{}", format_event_list(&events, &settings.date_format));
        }

        EventCommands::Delete { id } => {
            let id = parse_id(&id)?;

            if settings.auto_backup {
                BackupManager::new(storage.paths()).backup()?;
            }

            if service.delete(id)? {
                println!("Deleted event {}", id);
            } else {
                return Err(AgendaError::event_not_found(id.to_string()));
            }
        }

        EventCommands::Edit {
            id,
            title,
            description,
            start,
            end,
        } => {
            let id = parse_id(&id)?;

            let current = storage
                .events
                .load_all()?
                .into_iter()
                .find(|e| e.id == id)
                .ok_or_else(|| AgendaError::event_not_found(id.to_string()))?;

            let new_start = match start {
                Some(s) => parse_datetime(&s)?,
                None => current.start,
            };
            let new_end = match end {
                Some(s) => parse_end_datetime(&s, new_start)?,
                None => current.end,
            };
            let new_title = title.unwrap_or(current.title);
            let new_description = description.unwrap_or(current.description);

            if service.has_conflict(new_start, new_end, Some(id))? {
                println!("Warning: new time slot conflicts with another event.");
            }

            if !service.replace(id, &new_title, &new_description, new_start, new_end)? {
                return Err(AgendaError::event_not_found(id.to_string()));
            }
            println!("Updated event [{}] {}", id, new_title);
        }

        EventCommands::Check { start, end } => {
            let start = parse_datetime(&start)?;
            let end = parse_end_datetime(&end, start)?;

            let conflicts = service.conflicts_with(start, end, None)?;
            if conflicts.is_empty() {
                println!("Slot is free.");
            } else {
                println!("Slot conflicts with:");
                print!("{}", format_event_list(&conflicts, &settings.date_format));
            }
        }

        EventCommands::Stats => {
            let stats = service.statistics()?;
            print!("{}", format_stats(&stats));
        }
    }

    Ok(())
}

/// Parse a user-supplied date-time
///
/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM`, and the same with
/// seconds.
fn parse_datetime(input: &str) -> AgendaResult<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];

    for format in FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(input.trim(), format) {
            return Ok(dt);
        }
    }

    Err(AgendaError::Validation(format!(
        "Invalid date-time: '{}'. Use a format like '2025-01-01 09:00'.",
        input
    )))
}

/// Parse an end time, allowing a bare `HH:MM` meaning "same day as start"
fn parse_end_datetime(input: &str, start: NaiveDateTime) -> AgendaResult<NaiveDateTime> {
    let trimmed = input.trim();
    if let Ok(time) = chrono::NaiveTime::parse_from_str(trimmed, "%H:%M") {
        return Ok(NaiveDateTime::new(start.date(), time));
    }
    parse_datetime(trimmed)
}

/// Parse an event ID argument
fn parse_id(input: &str) -> AgendaResult<EventId> {
    input
        .parse::<EventId>()
        .map_err(|_| AgendaError::Validation(format!("Invalid event ID: '{}'", input)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    #[test]
    fn test_parse_datetime_variants() {
        let expected = sample_date().and_hms_opt(9, 0, 0).unwrap();
        assert_eq!(parse_datetime("2025-01-01 09:00").unwrap(), expected);
        assert_eq!(parse_datetime("2025-01-01T09:00").unwrap(), expected);
        assert_eq!(parse_datetime("2025-01-01T09:00:00").unwrap(), expected);
    }

    #[test]
    fn test_parse_datetime_rejects_garbage() {
        assert!(parse_datetime("tomorrow").is_err());
        assert!(parse_datetime("2025-13-01 09:00").is_err());
    }

    #[test]
    fn test_parse_end_bare_time_uses_start_date() {
        let start = sample_date().and_hms_opt(9, 0, 0).unwrap();
        let end = parse_end_datetime("10:30", start).unwrap();
        assert_eq!(end, sample_date().and_hms_opt(10, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3").unwrap(), EventId::new(3));
        assert!(parse_id("three").is_err());
    }
}
