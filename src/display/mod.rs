//! Display formatting for terminal output
//!
//! Provides utilities for formatting events and statistics for terminal
//! display. The core data layer never formats anything; everything
//! human-readable is produced here.

pub mod event;

pub use event::{format_event_list, format_stats};
