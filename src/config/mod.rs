//! Configuration module for agenda-cli
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::AgendaPaths;
pub use settings::Settings;
