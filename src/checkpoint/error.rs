//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur while saving or resuming a machine position
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// Encoding the checkpoint to JSON or binary failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Decoding a checkpoint from JSON or binary failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// The checkpoint was written by an incompatible format version
    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// The checkpoint references a state the machine never declared
    #[error("Checkpoint state '{0}' is not in the machine's declared state set")]
    UnknownState(String),
}
