//! Core error types for focuslog-core.
//!
//! This module defines the error hierarchy using thiserror. Validation
//! errors are local to the timer engine and block the attempted transition;
//! storage errors are reported upward but never roll back a completed
//! countdown.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for focuslog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Timer input validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Session store errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Completed session that failed to persist
    #[error(transparent)]
    Unsaved(#[from] UnsavedSession),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors raised by `SessionTimer::start` and input edits.
///
/// These are user-facing and recoverable: the engine state is left
/// untouched and the caller may retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Configured minutes and seconds add up to zero.
    #[error("non-positive duration")]
    NonPositiveDuration,

    /// No category was selected.
    #[error("missing category")]
    MissingCategory,

    /// Duration and category cannot change until the timer is reset.
    #[error("inputs are locked until the timer is reset")]
    InputsLocked,
}

/// Persistence failures.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open the backing database
    #[error("Failed to open store at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Read or write against the backing store failed
    #[error("Store I/O failed: {0}")]
    Io(String),

    /// A stored record could not be decoded
    #[error("Corrupt data under '{key}': {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be encoded
    #[error("Failed to encode '{key}': {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The data directory could not be resolved or created
    #[error("Failed to access data directory: {0}")]
    DataDir(String),
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

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// A countdown finished but its record could not be appended.
///
/// The session still happened: the engine is already `Completed` and the
/// record is carried here for display or a later retry.
#[derive(Error, Debug)]
#[error("session {} completed but was not saved: {source}", .session.id)]
pub struct UnsavedSession {
    pub session: crate::session::FocusSession,
    #[source]
    pub source: StorageError,
}

/// Failure reported by a completion side effect (haptics, notification).
///
/// Never propagated past the effect dispatcher.
#[derive(Error, Debug)]
#[error("{effect} failed: {message}")]
pub struct EffectError {
    pub effect: &'static str,
    pub message: String,
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg)
                if e.code == rusqlite::ErrorCode::DatabaseBusy
                    || e.code == rusqlite::ErrorCode::DatabaseLocked =>
            {
                StorageError::Io(format!("database is locked: {err}"))
            }
            _ => StorageError::Io(err.to_string()),
        }
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
