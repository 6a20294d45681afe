//! Error types for digraph-map operations.
//!
//! Map mutations and queries are infallible. Only the export paths return
//! [`Result<T>`].

use thiserror::Error;

/// Result type alias for digraph-map operations.
pub type Result<T> = std::result::Result<T, GraphError>;

/// Error type for fallible graph map operations.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Invalid operation (e.g., exporting a map over the size limit)
    #[error("Invalid operation: {message}")]
    InvalidOperation {
        /// Description of what went wrong
        message: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error details
        message: String,
        /// Optional source error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GraphError {
    /// Create an invalid operation error from a message.
    pub fn invalid_operation(message: impl Into<String>) -> Self {
        Self::InvalidOperation {
            message: message.into(),
        }
    }

    /// Create a serialization error from a message and optional source.
    pub fn serialization<E>(message: impl Into<String>, source: Option<E>) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Serialization {
            message: message.into(),
            source: source.map(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization("JSON encoding failed", Some(err))
    }
}
