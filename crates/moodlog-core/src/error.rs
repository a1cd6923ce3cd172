//! Core error types for moodlog-core.
//!
//! This module defines the error hierarchy using thiserror for better
//! error handling and reporting across the library.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for moodlog-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A date key that is not a valid `YYYY-MM-DD` calendar date.
    ///
    /// Streak evaluation surfaces this to the caller rather than treating
    /// a malformed key as "no entry found" -- a bad key is a programmer
    /// error in the calling layer, not missing data.
    #[error("Invalid date key '{key}': expected YYYY-MM-DD")]
    InvalidDate { key: String },

    /// Storage-related errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

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

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to read state from disk
    #[error("Failed to load state from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to write state to disk
    #[error("Failed to save state to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// State file exists but cannot be decoded
    #[error("Corrupt state in {path}: {message}")]
    Corrupt { path: PathBuf, message: String },

    /// Data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
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

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
