//! agenda-cli - Terminal-based personal calendar
//!
//! This library provides the core functionality for the agenda-cli
//! scheduling application: durable storage of calendar events as delimited
//! text records, monotonic ID assignment, chronological ordering,
//! interval-overlap conflict detection, keyword search, and single-file
//! backup/restore.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (events and their IDs)
//! - `storage`: Delimited-text record storage layer
//! - `services`: Scheduling logic layer
//! - `backup`: Single-file backup and restore
//! - `display`: Terminal output formatting
//! - `cli`: Command handlers for the `agenda` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use agenda::config::paths::AgendaPaths;
//! use agenda::services::ScheduleService;
//! use agenda::storage::Storage;
//!
//! let paths = AgendaPaths::new()?;
//! let storage = Storage::new(paths)?;
//! let service = ScheduleService::new(&storage);
//!
//! let free = !service.has_conflict(start, end, None)?;
//! ```

pub mod backup;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::AgendaError;
