//! Result and error types for Screenfit.

use thiserror::Error;

/// Result type for Screenfit operations
pub type ScreenfitResult<T> = Result<T, ScreenfitError>;

/// Errors that can occur in Screenfit
#[derive(Debug, Error)]
pub enum ScreenfitError {
    /// A metrics field is non-positive or not finite
    #[error("Invalid metrics: {field} must be a positive finite number, got {value}")]
    InvalidMetrics {
        /// Name of the offending field
        field: &'static str,
        /// Value that was rejected
        value: f64,
    },

    /// Breakpoint thresholds are inconsistent
    #[error("Invalid breakpoint policy: {reason}")]
    InvalidPolicy {
        /// What is wrong with the policy
        reason: String,
    },

    /// Platform name not recognised
    #[error("Unknown platform '{value}' (expected ios or android)")]
    UnknownPlatform {
        /// The rejected input
        value: String,
    },

    /// Category name not recognised
    #[error("Unknown breakpoint category '{value}' (expected small, medium, large or tablet)")]
    UnknownCategory {
        /// The rejected input
        value: String,
    },

    /// No preset registered under this name
    #[error("Unknown device preset: {name}")]
    UnknownPreset {
        /// Requested preset name
        name: String,
    },

    /// Two custom presets share a name
    #[error("Duplicate device preset: {name}")]
    DuplicatePreset {
        /// Repeated preset name
        name: String,
    },

    /// Configuration file could not be parsed
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        /// Parser message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ScreenfitError {
    /// Create an invalid policy error
    #[must_use]
    pub fn invalid_policy(reason: impl Into<String>) -> Self {
        Self::InvalidPolicy {
            reason: reason.into(),
        }
    }

    /// Create an unknown preset error
    #[must_use]
    pub fn unknown_preset(name: impl Into<String>) -> Self {
        Self::UnknownPreset { name: name.into() }
    }
}
