//! Core error types for lifeasify-core.
//!
//! This module defines the error hierarchy using thiserror. The derivation
//! engines themselves never return errors: malformed numeric input degrades
//! to an absent projection and out-of-range dates are clamped, so only
//! record validation, the store, and file IO can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for lifeasify-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Snapshot-related errors
    #[error("Snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    /// Store-related errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Record validation errors.
///
/// Display texts match the messages the original client surfaced next to
/// its form fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name missing or blank after trimming
    #[error("Name is required")]
    MissingName,

    /// Time effort missing on a chore draft
    #[error("Time effort is required")]
    MissingTimeEffort,

    /// Negative per-occurrence effort
    #[error("Time effort must not be negative")]
    NegativeTimeEffort,

    /// Repeating chore without a usable frequency
    #[error("Repeat frequency must be at least 1 day for a repeating chore")]
    MissingRepeatFrequency,

    /// Contact info missing or blank after trimming
    #[error("Contact info is required")]
    MissingContactInfo,

    /// Name over the maximum length
    #[error("Name must be less than {max} characters")]
    NameTooLong { max: usize },

    /// Contact info over the maximum length
    #[error("Contact info must be less than {max} characters")]
    ContactInfoTooLong { max: usize },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Snapshot-specific errors.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// Failed to read the snapshot file
    #[error("Failed to read snapshot at {path}: {message}")]
    ReadFailed { path: PathBuf, message: String },

    /// Failed to write the snapshot file
    #[error("Failed to write snapshot at {path}: {message}")]
    WriteFailed { path: PathBuf, message: String },

    /// Snapshot file held invalid JSON
    #[error("Failed to parse snapshot at {path}: {message}")]
    ParseFailed { path: PathBuf, message: String },
}

/// Errors from store mutations.
///
/// Unknown ids are reported instead of silently ignored, so a stale UI
/// action cannot vanish without a trace.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No chore with the given id
    #[error("Chore not found: {0}")]
    ChoreNotFound(String),

    /// No contact with the given id
    #[error("Contact not found: {0}")]
    ContactNotFound(String),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
