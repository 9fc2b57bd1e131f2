//! Vitals error types

use thiserror::Error;

/// Result type for vitals operations
pub type Result<T> = std::result::Result<T, VitalsError>;

/// Errors surfaced to callers.
///
/// Only configuration problems are hard failures. Unreadable metric
/// sources are absorbed inside the samplers as invalid readings and
/// never reach this type.
#[derive(Debug, Error)]
pub enum VitalsError {
    /// Malformed caller-supplied configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Configuration value that parsed but fails validation
    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

impl VitalsError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Create an invalid config error for a named field
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.into(),
            reason: reason.into(),
        }
    }
}
