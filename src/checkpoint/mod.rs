//! Checkpoint and resume functionality for machines.
//!
//! This module provides serialization and deserialization of a live
//! machine's position, so a long-running driver can survive process
//! restarts. A checkpoint captures the mutable half of an [`Fsm`] - the
//! current state and the transition history - not the definition: the
//! restoring side reconstructs the machine from the same definition and
//! then applies the checkpoint, which is re-validated against the declared
//! state set.

use crate::core::{Fsm, State, StateHistory, Symbol};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable checkpoint of a machine's position.
///
/// Does NOT include the transition table, state set, or alphabet - the
/// definition is code, not data, and is rebuilt by the restoring side.
///
/// # Example
///
/// ```rust
/// use fsmkit::builder::FsmBuilder;
/// use fsmkit::checkpoint::Checkpoint;
/// use fsmkit::{state_enum, symbol_enum};
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
///
/// symbol_enum! {
///     enum Action { Toggle }
/// }
///
/// fn door() -> fsmkit::core::Fsm<Door, Action> {
///     FsmBuilder::new()
///         .states([Door::Open, Door::Closed])
///         .symbols([Action::Toggle])
///         .transition(Door::Open, Action::Toggle, Door::Closed)
///         .transition(Door::Closed, Action::Toggle, Door::Open)
///         .initial(Door::Open)
///         .accepting_states([Door::Closed])
///         .build()
///         .unwrap()
/// }
///
/// let mut fsm = door();
/// fsm.input(Action::Toggle).unwrap();
///
/// let json = fsm.checkpoint().to_json().unwrap();
///
/// // Later, possibly in another process:
/// let mut resumed = door();
/// resumed.restore(Checkpoint::from_json(&json).unwrap()).unwrap();
/// assert_eq!(resumed.state(), &Door::Closed);
/// assert!(resumed.is_accepting());
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, I: Symbol> {
    /// Checkpoint format version
    pub version: u32,

    /// When the checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// Initial state of the machine
    pub initial_state: S,

    /// Current state of the machine
    pub current_state: S,

    /// Complete transition history
    pub history: StateHistory<S, I>,
}

impl<S: State, I: Symbol> Checkpoint<S, I> {
    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Serialize to a compact binary format.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize from the compact binary format.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }
}

impl<S: State, I: Symbol> Fsm<S, I> {
    /// Capture the machine's current position as a checkpoint.
    pub fn checkpoint(&self) -> Checkpoint<S, I> {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            timestamp: Utc::now(),
            initial_state: self.initial_state().clone(),
            current_state: self.state().clone(),
            history: self.history().clone(),
        }
    }

    /// Resume from a checkpoint taken against the same definition.
    ///
    /// The checkpoint's states are re-validated against this machine's
    /// declared state set, so restoring cannot break the current-state
    /// invariant. On error the machine is left unchanged.
    pub fn restore(&mut self, checkpoint: Checkpoint<S, I>) -> Result<(), CheckpointError> {
        if checkpoint.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: checkpoint.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        if !self.states().contains(&checkpoint.initial_state) {
            return Err(CheckpointError::UnknownState(
                checkpoint.initial_state.name().to_string(),
            ));
        }
        if !self.states().contains(&checkpoint.current_state) {
            return Err(CheckpointError::UnknownState(
                checkpoint.current_state.name().to_string(),
            ));
        }
        self.restore_parts(checkpoint.current_state, checkpoint.history);
        Ok(())
    }
}
