//! Event display formatting
//!
//! Formats events for terminal output in table and summary views.

use crate::models::Event;
use crate::services::ScheduleStats;

/// Format a list of events as a table
///
/// `date_format` is the user's strftime preference from settings.
pub fn format_event_list(events: &[Event], date_format: &str) -> String {
    if events.is_empty() {
        return "No events found.\n".to_string();
    }

    let title_width = events
        .iter()
        .map(|e| e.title.len())
        .max()
        .unwrap_or(5)
        .max(5);

    let mut output = String::new();
    output.push_str(&format!(
        "{:>4}  {:<16}  {:<5}  {:<title_width$}  {}\n",
        "ID",
        "Start",
        "End",
        "Title",
        "Description",
        title_width = title_width,
    ));
    output.push_str(&format!(
        "{:->4}  {:-<16}  {:-<5}  {:-<title_width$}  {:-<11}\n",
        "",
        "",
        "",
        "",
        "",
        title_width = title_width,
    ));

    for event in events {
        // Same-day events only need the end time of day
        let end = if event.end.date() == event.start.date() {
            event.end.format("%H:%M").to_string()
        } else {
            event.end.format(date_format).to_string()
        };

        output.push_str(&format!(
            "{:>4}  {:<16}  {:<5}  {:<title_width$}  {}\n",
            event.id,
            event.start.format(date_format),
            end,
            event.title,
            event.description,
            title_width = title_width,
        ));
    }

    output
}

/// Format aggregate statistics as a short summary block
pub fn format_stats(stats: &ScheduleStats) -> String {
    let hours = stats.total_scheduled_minutes / 60;
    let minutes = stats.total_scheduled_minutes % 60;

    let mut output = String::new();
    output.push_str("Schedule Statistics\n");
    output.push_str("===================\n");
    output.push_str(&format!("Total events:    {}\n", stats.total));
    output.push_str(&format!("Upcoming events: {}\n", stats.upcoming));
    output.push_str(&format!(
        "Scheduled time:  {} hours {} minutes\n",
        hours, minutes
    ));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EventId;
    use chrono::NaiveDate;

    fn sample_events() -> Vec<Event> {
        let day = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        vec![Event::new(
            EventId::new(1),
            "Standup",
            "Daily sync",
            day.and_hms_opt(9, 0, 0).unwrap(),
            day.and_hms_opt(9, 15, 0).unwrap(),
        )]
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(format_event_list(&[], "%Y-%m-%d %H:%M"), "No events found.\n");
    }

    #[test]
    fn test_list_contains_fields() {
        let output = format_event_list(&sample_events(), "%Y-%m-%d %H:%M");
        assert!(output.contains("Standup"));
        assert!(output.contains("Daily sync"));
        assert!(output.contains("2025-01-01 09:00"));
        // Same-day event shows a bare end time
        assert!(output.contains("09:15"));
    }

    #[test]
    fn test_stats_formatting() {
        let stats = ScheduleStats {
            total: 3,
            upcoming: 1,
            total_scheduled_minutes: 150,
        };
        let output = format_stats(&stats);
        assert!(output.contains("Total events:    3"));
        assert!(output.contains("2 hours 30 minutes"));
    }
}
