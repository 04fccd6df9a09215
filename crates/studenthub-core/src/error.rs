//! Core error types for studenthub-core.
//!
//! This module defines the error hierarchy using thiserror. Filtering never
//! fails; errors only come from loading the snapshot, reading or writing the
//! configuration, and parsing user-supplied values.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for studenthub-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Snapshot could not be retrieved or decoded
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Snapshot transport and decoding errors.
///
/// Any of these is terminal for a view: there is no retry.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Snapshot file could not be read
    #[error("Failed to read snapshot at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// HTTP transport failed before a response arrived
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    /// Document is not a valid snapshot
    #[error("Malformed snapshot: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration directory could not be determined or created
    #[error("Failed to prepare config directory {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Key does not exist in the configuration
    #[error("unknown config key: {0}")]
    UnknownKey(String),
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Wall-clock string is not `HH:MM` within range
    #[error("Invalid time of day '{0}': expected HH:MM with hours 0-23 and minutes 0-59")]
    InvalidTime(String),

    /// Weekday name is not one of Monday..Sunday
    #[error("Invalid day of week '{0}'")]
    InvalidWeekday(String),

    /// Refresh period outside 1 second .. 1 day
    #[error("Invalid refresh interval {0}s: expected 1 to 86400 seconds")]
    InvalidInterval(u64),

    /// Instant could not be interpreted
    #[error("Invalid instant '{value}': {message}")]
    InvalidInstant { value: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
