use std::path::PathBuf;

use thiserror::Error;

use crate::gate::Rejection;

/// Unified error type for release-gate operations
#[derive(Error, Debug)]
pub enum ReleaseGateError {
    #[error("Invalid version format: '{input}' - {reason}")]
    InvalidVersionFormat { input: String, reason: String },

    #[error(transparent)]
    Rejected(#[from] Rejection),

    #[error("Missing field '{field}' in {}", .path.display())]
    MissingField { field: String, path: PathBuf },

    #[error("Missing required metadata field: {0}")]
    MissingRequiredField(String),

    #[error("Invalid dependency name: '{0}' (allowed: letters, digits, spaces, '_' and '-')")]
    InvalidDependencyName(String),

    #[error("Merging pull request failed{}: {message}", status_suffix(.status))]
    MergeFailed { status: Option<u16>, message: String },

    #[error("Creating release failed{}: {message}", status_suffix(.status))]
    ReleaseCreationFailed { status: Option<u16>, message: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in release-gate
pub type Result<T> = std::result::Result<T, ReleaseGateError>;

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" (HTTP {})", code),
        None => String::new(),
    }
}

impl ReleaseGateError {
    /// Create a version format error for the given input
    pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        ReleaseGateError::InvalidVersionFormat {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a missing field error for a metadata file
    pub fn missing_field(field: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        ReleaseGateError::MissingField {
            field: field.into(),
            path: path.into(),
        }
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseGateError::Config(msg.into())
    }

    /// Create a merge failure, optionally carrying the HTTP status
    pub fn merge_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        ReleaseGateError::MergeFailed {
            status,
            message: message.into(),
        }
    }

    /// Create a release creation failure, optionally carrying the HTTP status
    pub fn release_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        ReleaseGateError::ReleaseCreationFailed {
            status,
            message: message.into(),
        }
    }
}
