//! Error types for manifest form rendering

use thiserror::Error;

/// Errors that can occur while rendering or collecting a manifest form
#[derive(Debug, Error)]
pub enum FormError {
    /// An input was requested without a key
    #[error("Input name is required")]
    MissingKey,

    /// Tag name does not map to a supported element kind
    #[error("Unknown element tag: {0}")]
    UnknownTag(String),

    /// The container element could not be located in the document
    #[error("Container element not found: #{0}")]
    ContainerNotFound(String),

    /// JSON encoder failure while serializing a default
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A structured input holds text that is not valid JSON
    #[error("Invalid JSON for '{key}': {source}")]
    InvalidJson {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A numeric input holds text that does not parse as a number
    #[error("Invalid number for '{key}': {value:?}")]
    InvalidNumber { key: String, value: String },

    /// Manifest or settings validation failed
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for form operations
pub type FormResult<T> = Result<T, FormError>;
