//! Core data models for agenda-cli
//!
//! This module contains the data structures that represent the scheduling
//! domain: calendar events and their identifiers.

pub mod event;
pub mod ids;

pub use event::Event;
pub use ids::EventId;
