//! Error types for the core domain crate

use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum CoreError {
    /// Stored session blob could not be parsed
    #[error("Malformed session payload: {0}")]
    MalformedSession(#[from] serde_json::Error),
}

/// Result type for core domain operations
pub type Result<T> = std::result::Result<T, CoreError>;
