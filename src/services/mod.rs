//! Service layer for agenda-cli
//!
//! The service layer provides scheduling logic on top of the storage layer:
//! conflict detection, keyword search, statistics, and validated mutations.

pub mod schedule;

pub use schedule::{ScheduleService, ScheduleStats};
