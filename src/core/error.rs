//! Error types for machine definition and runtime transitions.

use thiserror::Error;

/// Errors detected while validating a machine definition.
///
/// All variants are fatal to construction: no [`Fsm`](crate::core::Fsm) is
/// ever created from an invalid definition. Checks run eagerly, in the order
/// the variants are listed, failing fast on the first violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("State set is empty. Declare at least one state")]
    EmptyStateSet,

    #[error("Input alphabet is empty. Declare at least one symbol")]
    EmptyAlphabet,

    #[error("Initial state '{state}' is not in the declared state set")]
    InvalidInitialState { state: String },

    #[error("Accepting state '{state}' is not in the declared state set")]
    InvalidAcceptingState { state: String },

    #[error("Transition input '{symbol}' is not in the declared alphabet")]
    InvalidTransitionInput { symbol: String },

    #[error("Transition target '{state}' is not in the declared state set")]
    InvalidTransitionTarget { state: String },
}

/// Errors raised while driving a live machine.
///
/// Every variant leaves the machine in its prior valid state: a failed
/// `input` or `set_state` never mutates anything. These are caller errors,
/// not transient conditions - there is no retry policy.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The fed symbol is not part of the declared alphabet.
    #[error("Invalid input symbol '{symbol}'. Expected one of: [{alphabet}]")]
    InvalidInputSymbol { symbol: String, alphabet: String },

    /// No table entry for the current `(state, symbol)` pair. A missing
    /// transition is always an error, never a silent self-loop.
    #[error("No transition defined for state '{state}' with input '{symbol}'")]
    MissingTransition { state: String, symbol: String },

    /// Direct state replacement with a value outside the declared state set.
    #[error("Invalid state assignment '{state}'. Not in the declared state set")]
    InvalidStateAssignment { state: String },
}
