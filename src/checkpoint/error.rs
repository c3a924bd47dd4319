//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur during checkpoint operations
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CheckpointError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// History does not end in the recorded current state
    #[error("History ends in '{history}' but current state is '{current}'")]
    HistoryMismatch { history: String, current: String },

    /// Consecutive history entries do not connect
    #[error("History is broken at sequence {sequence}")]
    BrokenHistory { sequence: u64 },

    /// Checkpoint data failed more than one check
    #[error("Checkpoint validation failed: {0}")]
    ValidationFailed(String),
}
