//! Core error types for keepchain-core.
//!
//! This module defines the error hierarchy using thiserror. Validation
//! errors are the only ones a user normally sees: they abort a command
//! before anything is mutated.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for keepchain-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

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
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Data directory could not be created or resolved
    #[error("Failed to prepare data directory {path}: {message}")]
    DataDir { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Validation errors.
///
/// Raised by the day-status engine and the command dispatcher. None of
/// them leaves a partial mutation behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Closing the day as kept with an empty promise list
    #[error("No promises set. Add at least one promise first. Discipline needs rules.")]
    NoPromises,

    /// Closing the day as kept with unfinished promises
    #[error("Not all promises are completed ({done}/{total}). Finish all promises first.")]
    PromisesIncomplete { done: usize, total: usize },

    /// Promise list is full
    #[error("Max {max} promises. Discipline requires focus.")]
    PromiseLimit { max: usize },

    /// No promise with the given id
    #[error("Unknown promise: {0}")]
    UnknownPromise(String),

    /// Required text was blank after trimming
    #[error("'{field}' must not be empty")]
    EmptyText { field: String },

    /// Expense amount was zero, negative or not a number
    #[error("Invalid amount: {0}")]
    InvalidAmount(f64),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Database(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_user_facing() {
        let err = ValidationError::PromisesIncomplete { done: 1, total: 2 };
        assert_eq!(
            err.to_string(),
            "Not all promises are completed (1/2). Finish all promises first."
        );
        assert_eq!(
            ValidationError::PromiseLimit { max: 3 }.to_string(),
            "Max 3 promises. Discipline requires focus."
        );
    }

    #[test]
    fn validation_error_converts_into_core_error() {
        let err: CoreError = ValidationError::NoPromises.into();
        assert!(matches!(err, CoreError::Validation(ValidationError::NoPromises)));
        assert!(err.to_string().starts_with("Validation error:"));
    }
}
