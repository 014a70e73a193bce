//! Error types for the Surcharge Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that can be rejected before or around classification.
//! The classifier itself is total and never produces one of these.

use thiserror::Error;

/// The main error type for the Surcharge Engine.
///
/// # Example
///
/// ```
/// use surcharge_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/thresholds.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/thresholds.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A threshold value was outside its valid domain.
    #[error("Invalid threshold '{field}': {message}")]
    InvalidThresholds {
        /// The threshold that was invalid.
        field: String,
        /// A description of what made the threshold invalid.
        message: String,
    },

    /// Shift input was negative, non-finite or otherwise inconsistent.
    #[error("Invalid shift input '{field}': {message}")]
    InvalidInput {
        /// The input field that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },
}

impl EngineError {
    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_thresholds(field: &str, message: impl Into<String>) -> Self {
        EngineError::InvalidThresholds {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
