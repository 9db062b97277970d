//! Error types for the Mnemo framework.
//!
//! Capacity limits are never reported as errors: every strategy enforces its
//! limits by truncation or eviction. The variants here cover failures of the
//! injected collaborators (summarizers and embedders) and of configuration
//! loading.

use thiserror::Error;

/// Core error types for the Mnemo framework.
#[derive(Error, Debug)]
pub enum MemoryError {
    /// I/O related errors (reading configuration files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A summarizer failed to condense a batch of messages
    #[error("summarization failed: {message}")]
    Summarization {
        /// Detailed error message
        message: String,
    },

    /// An embedder failed to produce a vector
    #[error("{message}")]
    Embedding {
        /// Detailed error message
        message: String,
    },

    /// Configuration validation errors
    #[error("Configuration error: {message}")]
    Configuration {
        /// Detailed error message
        message: String,
    },

    /// Input validation errors
    #[error("Validation error: {message}")]
    Validation {
        /// Detailed error message
        message: String,
    },

    /// Generic errors from external dependencies
    #[error("External error: {source}")]
    External {
        /// The underlying error
        #[source]
        source: anyhow::Error,
    },
}

impl MemoryError {
    /// Create a new summarization error with a message.
    pub fn summarization<S: Into<String>>(message: S) -> Self {
        Self::Summarization {
            message: message.into(),
        }
    }

    /// Create a new embedding error with a message.
    pub fn embedding<S: Into<String>>(message: S) -> Self {
        Self::Embedding {
            message: message.into(),
        }
    }

    /// Create a new configuration error with a message.
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a new validation error with a message.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new external error from any error that implements `Into<anyhow::Error>`.
    pub fn external<E: Into<anyhow::Error>>(error: E) -> Self {
        Self::External {
            source: error.into(),
        }
    }

    /// Check if this error came from an injected collaborator (summarizer or
    /// embedder) rather than from configuration or I/O.
    #[must_use]
    pub fn is_injection_failure(&self) -> bool {
        matches!(
            self,
            Self::Summarization { .. } | Self::Embedding { .. } | Self::External { .. }
        )
    }

    /// Check if this error is a client error caused by invalid input or
    /// configuration.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation { .. } | Self::Configuration { .. } | Self::Serialization(_)
        )
    }
}

/// Convert from `anyhow::Error` to `MemoryError`.
impl From<anyhow::Error> for MemoryError {
    fn from(error: anyhow::Error) -> Self {
        Self::External { source: error }
    }
}

/// Result type alias for convenience.
///
/// This is the standard result type used throughout the Mnemo framework.
pub type Result<T> = std::result::Result<T, MemoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = MemoryError::summarization("llm unavailable");
        assert!(matches!(err, MemoryError::Summarization { .. }));
        assert_eq!(err.to_string(), "summarization failed: llm unavailable");
    }

    #[test]
    fn test_embedding_error_keeps_prefix_from_caller() {
        let err = MemoryError::embedding("failed to generate embedding: timeout");
        assert_eq!(err.to_string(), "failed to generate embedding: timeout");
    }

    #[test]
    fn test_error_classification() {
        assert!(MemoryError::summarization("x").is_injection_failure());
        assert!(MemoryError::embedding("x").is_injection_failure());
        assert!(MemoryError::external(anyhow::anyhow!("boom")).is_injection_failure());
        assert!(!MemoryError::configuration("x").is_injection_failure());

        assert!(MemoryError::validation("bad").is_client_error());
        assert!(MemoryError::configuration("bad").is_client_error());
        assert!(!MemoryError::summarization("x").is_client_error());
    }
}
