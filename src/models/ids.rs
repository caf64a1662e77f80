//! Strongly-typed ID wrapper for events
//!
//! Event IDs are small sequential integers assigned by the repository
//! (`max(existing) + 1`), not random UUIDs, so they stay short enough to type
//! on the command line. The newtype prevents mixing raw integers into APIs
//! that expect an identifier.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for an [`Event`](crate::models::Event)
///
/// Always >= 1; 0 is never a valid ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(u32);

impl EventId {
    /// The first ID handed out by an empty repository
    pub const FIRST: EventId = EventId(1);

    /// Create an ID from a raw integer
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the underlying integer
    pub fn as_u32(&self) -> u32 {
        self.0
    }

    /// The ID following this one
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EventId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl FromStr for EventId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}
