//! Error types for the assistant

use thiserror::Error;

/// A payload that does not conform to the answer schema
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SchemaError {
    /// A required field is absent
    #[error("Missing required field '{0}'")]
    MissingField(String),

    /// A field has a type that cannot be coerced safely
    #[error("Field '{field}' expected {expected}, got {actual}")]
    TypeMismatch {
        /// Field name
        field: String,
        /// Human-readable expected type
        expected: String,
        /// Compact JSON rendering of the offending value
        actual: String,
    },

    /// The payload is not a JSON object
    #[error("Expected a JSON object, got {0}")]
    NotAnObject(String),
}

/// Failure to turn a raw completion into an answer record
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtractionError {
    /// No decodable JSON object in the completion
    #[error("Could not find a JSON object in the response: \"{excerpt}\"")]
    MalformedPayload {
        /// Leading part of the raw completion
        excerpt: String,
    },

    /// A payload was decoded but does not match the schema
    #[error("Response does not match the product schema: {0}")]
    SchemaViolation(#[from] SchemaError),

    /// The service reported that no catalog entry matches the query
    #[error("No matching product: {0}")]
    NotFound(String),
}

/// Errors that can occur while answering a query
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Completion service failure (network, timeout, quota, credential)
    #[error("Completion service error: {0}")]
    Service(String),

    /// The completion could not be turned into an answer
    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

impl AssistantError {
    /// Whether the service reported that the product does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, AssistantError::Extraction(ExtractionError::NotFound(_)))
    }
}

/// Errors raised while loading a catalog file
#[derive(Error, Debug)]
pub enum CatalogLoadError {
    /// The file could not be read
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid catalog TOML
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// The products violate a catalog invariant
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] textile_domain::CatalogError),
}
