//! Error types for queue operations

use thiserror::Error;

/// Queue error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("no value supplied for insert")]
    MissingValue,

    #[error("queue is empty")]
    Empty,

    #[error("output buffer capacity must be at least 1")]
    ZeroCapacity,
}

/// Result type for queue operations
pub type Result<T> = std::result::Result<T, QueueError>;
