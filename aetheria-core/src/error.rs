//! Error types for the Aetheria workspace

use std::error::Error as StdError;
use thiserror::Error;

/// The main error type for all Aetheria operations
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Network-related errors, including non-success HTTP statuses
    #[error("Network error: {message}")]
    Network {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Provider-specific errors
    #[error("Provider error ({provider}): {message}")]
    Provider {
        /// Provider name (e.g., "openai")
        provider: String,
        /// Error message
        message: String,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message
        message: String,
        /// Underlying error if available
        #[source]
        source: Option<Box<dyn StdError + Send + Sync>>,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Authentication errors
    #[error("Authentication error: {0}")]
    Authentication(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Response parsing errors
    #[error("Response error: {message}")]
    ResponseError {
        /// Error message
        message: String,
    },

    /// Document extraction errors
    #[error("Document error: {0}")]
    Document(String),

    /// Token counting and context errors
    #[error("Context error: {0}")]
    Context(String),
}

/// Result type alias for Aetheria operations
pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            message: err.to_string(),
            source: Some(Box::new(err)),
        }
    }
}
