//! Custom error types for nsx-dfw-backup
//!
//! This module defines the error hierarchy for the tool using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::api::ApiError;

/// The main error type for backup and restore operations
#[derive(Error, Debug)]
pub enum DfwError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A backup file that restore needs is not on disk
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Manager API call failed
    #[error("Manager API error: {0}")]
    Api(#[from] ApiError),

    /// The manager rejected a request but its body had no usable error_message
    #[error("Malformed error response (HTTP {status}): {detail}")]
    MalformedErrorBody { status: u16, detail: String },
}

impl DfwError {
    /// Create a "not found" error for backup files
    pub fn backup_file_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Backup file",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for DfwError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DfwError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for nsx-dfw-backup operations
pub type DfwResult<T> = Result<T, DfwError>;
