//! Core state machine types and logic.
//!
//! This module contains the engine itself:
//! - State and input-symbol definitions via the `State` and `Symbol` traits
//! - The `(state, symbol) -> state` transition table
//! - The `Fsm` interpreter with eager definition validation
//! - Immutable transition history tracking
//!
//! All queries in this module are pure (no side effects); the only state
//! mutation in the system is a successful `Fsm::input` call.

mod error;
mod history;
mod machine;
mod state;
mod symbol;
mod table;

pub use error::{DefinitionError, TransitionError};
pub use history::{StateHistory, TransitionRecord};
pub use machine::Fsm;
pub use state::State;
pub use symbol::Symbol;
pub use table::TransitionTable;
