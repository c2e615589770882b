//! Error types for `issue-core`.
//!
//! Repository and manager operations are total and never fail. These
//! variants cover the edges that parse text or read configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for issue tracker operations.
#[derive(Error, Debug)]
pub enum TrackerError {
    // === Parse Errors ===
    /// Invalid status value.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    /// Invalid sort order value.
    #[error("Invalid sort order: {order} (expected 'oldest' or 'newest')")]
    InvalidSortOrder { order: String },

    /// Invalid log output format.
    #[error("Invalid log format: {format} (expected 'text' or 'json')")]
    InvalidLogFormat { format: String },

    // === Configuration Errors ===
    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration in {path}: {reason}")]
    ConfigParse { path: PathBuf, reason: String },

    /// File not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TrackerError {
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config(reason.into())
    }
}

/// Result type using `TrackerError`.
pub type Result<T> = std::result::Result<T, TrackerError>;
