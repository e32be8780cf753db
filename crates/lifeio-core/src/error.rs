//! Error types for the visualization core.

use thiserror::Error;

use crate::models::{MetadataField, MetadataValue};

/// Error type for catalog lookups and playback operations.
#[derive(Error, Debug)]
pub enum VisualizerError {
    /// Step index outside `[0, len - 1]`
    #[error("Step index {index} is out of range (catalog has {len} steps)")]
    IndexOutOfRange { index: usize, len: usize },
    /// Playback speed must be a positive, finite multiplier
    #[error("Invalid speed {speed}: must be a positive number")]
    InvalidSpeed { speed: f64 },
    /// A metadata change carries a value of the wrong kind for its field
    #[error("Field '{field}' cannot hold value '{value}'")]
    FieldTypeMismatch {
        field: MetadataField,
        value: MetadataValue,
    },
    /// A step table failed validation
    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// The player task is no longer running
    #[error("Player has stopped")]
    PlayerStopped,
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> VisualizerError {
        VisualizerError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl VisualizerError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates an invalid catalog error.
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }
}

/// Result type alias for visualization operations
pub type Result<T> = std::result::Result<T, VisualizerError>;
