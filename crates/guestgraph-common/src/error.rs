//! Error types and utilities for GuestGraph.

use thiserror::Error;

/// Result type alias for GuestGraph operations.
pub type Result<T> = std::result::Result<T, GuestGraphError>;

/// Main error type for GuestGraph operations.
#[derive(Error, Debug)]
pub enum GuestGraphError {
    /// Configuration related errors.
    #[error("Configuration error: {message}")]
    Config {
        /// Human readable description.
        message: String,
        /// Underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// I/O related errors.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Data loading errors (unreachable source, unparsable CSV). Fatal at
    /// startup: the server cannot serve without data.
    #[error("Load error: {message}")]
    Load {
        /// Human readable description.
        message: String,
        /// Underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Chart generation and plotting errors.
    #[error("Graph error: {message}")]
    Graph {
        /// Human readable description.
        message: String,
        /// Underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Serialization/deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Validation errors for user input or data.
    #[error("Validation error: {message}")]
    Validation {
        /// Human readable description.
        message: String,
        /// The field that failed validation, when known.
        field: Option<String>,
    },

    /// Generic error with a custom message.
    #[error("{message}")]
    Generic {
        /// Human readable description.
        message: String,
        /// Underlying cause, when one exists.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl GuestGraphError {
    /// Create a new generic error with a custom message.
    pub fn new(msg: impl Into<String>) -> Self {
        Self::Generic {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new load error.
    pub fn load(msg: impl Into<String>) -> Self {
        Self::Load {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new load error with source.
    pub fn load_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Load {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new graph error.
    pub fn graph(msg: impl Into<String>) -> Self {
        Self::Graph {
            message: msg.into(),
            source: None,
        }
    }

    /// Create a new graph error with source.
    pub fn graph_with_source(
        msg: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Graph {
            message: msg.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a new validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: None,
        }
    }

    /// Create a new validation error scoped to a field.
    pub fn validation_for_field(msg: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Validation {
            message: msg.into(),
            field: Some(field.into()),
        }
    }
}
