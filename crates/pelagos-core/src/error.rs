//! Error types for the Pelagos core crate.
//!
//! All errors implement `std::error::Error` via `thiserror` and are kept
//! serializable where they may cross an API boundary.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias using CoreError as the error type.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Top-level error type for core operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Domain-value validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Errors produced by domain-value validation.
///
/// Out-of-range coordinates are the common case: feed data is externally
/// sourced and individual bad records must be skippable without aborting
/// whatever pass discovered them.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ValidationError {
    /// Latitude outside [-90, 90]
    #[error("Invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180]
    #[error("Invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    /// Advisory validity window is inverted
    #[error("Invalid validity window: valid_upto ({0}) must be after valid_from ({1})")]
    InvalidValidityWindow(String, String),

    /// A required identifier is empty
    #[error("Empty identifier: {0}")]
    EmptyId(String),
}

/// Errors related to configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load configuration from a source
    #[error("Failed to load configuration from {path}: {reason}")]
    LoadFailed { path: String, reason: String },

    /// Configuration content could not be parsed
    #[error("Invalid configuration format: {reason}")]
    InvalidFormat { reason: String },

    /// A configured value is out of its allowed range
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}
