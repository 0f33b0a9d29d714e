//! Domain error types for dialpick
//!
//! Provides structured error types for different domains:
//! - `PickerError` for domain and layout construction
//! - `FeedbackError` for the audible tick device
//! - `ConfigError` for the configuration file

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while describing a picker
#[derive(Debug, Error)]
pub enum PickerError {
    #[error("Inverted domain: min {min} is greater than max {max}")]
    InvertedDomain { min: i64, max: i64 },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Errors from the chime device behind the feedback tick
#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("Audio device unavailable: {0}")]
    Unavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    Read(PathBuf, std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<PickerError> for ConfigError {
    fn from(err: PickerError) -> Self {
        ConfigError::Invalid(err.to_string())
    }
}

/// Result type alias for PickerError
pub type PickerResult<T> = std::result::Result<T, PickerError>;

/// Result type alias for FeedbackError
pub type FeedbackResult<T> = std::result::Result<T, FeedbackError>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
