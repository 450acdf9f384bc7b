//! Fsmkit: a table-driven deterministic finite state machine library
//!
//! Fsmkit interprets a single transition table: callers declare a finite
//! state set, a finite input alphabet, a `(state, symbol) -> state` table,
//! an initial state, and an accepting-state subset, then drive the machine
//! one symbol at a time. The definition is validated eagerly at
//! construction; every runtime failure leaves the machine in its prior
//! valid state.
//!
//! # Core Concepts
//!
//! - **State**: identity token with optional caller payload, via the `State` trait
//! - **Symbol**: one unit of the input alphabet, via the `Symbol` trait
//! - **TransitionTable**: the complete or intentionally partial transition map
//! - **Fsm**: a live machine bound to one table, tracking one current state
//!
//! Deliberately not an automata-theory library: no minimization, no regex
//! compilation, no nondeterminism, no epsilon transitions, no entry/exit
//! hooks. One machine, one table, one current state.
//!
//! # Example
//!
//! A two-state turnstile:
//!
//! ```rust
//! use fsmkit::builder::FsmBuilder;
//! use fsmkit::{state_enum, symbol_enum};
//!
//! state_enum! {
//!     enum Turnstile {
//!         Locked,
//!         Unlocked,
//!     }
//! }
//!
//! symbol_enum! {
//!     enum Event {
//!         Coin,
//!         Push,
//!     }
//! }
//!
//! let mut fsm = FsmBuilder::new()
//!     .states([Turnstile::Locked, Turnstile::Unlocked])
//!     .symbols([Event::Coin, Event::Push])
//!     .transition(Turnstile::Locked, Event::Coin, Turnstile::Unlocked)
//!     .transition(Turnstile::Unlocked, Event::Push, Turnstile::Locked)
//!     .initial(Turnstile::Locked)
//!     .accepting_states([Turnstile::Locked])
//!     .build()
//!     .unwrap();
//!
//! fsm.input(Event::Coin).unwrap();
//! assert_eq!(fsm.state(), &Turnstile::Unlocked);
//! assert!(!fsm.is_accepting());
//!
//! fsm.input(Event::Push).unwrap();
//! assert!(fsm.is_accepting());
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    DefinitionError, Fsm, State, StateHistory, Symbol, TransitionError, TransitionRecord,
    TransitionTable,
};
pub use builder::{BuildError, FsmBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
