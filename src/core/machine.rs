//! The deterministic finite state machine engine.

use super::error::{DefinitionError, TransitionError};
use super::history::{StateHistory, TransitionRecord};
use super::state::State;
use super::symbol::Symbol;
use super::table::TransitionTable;
use chrono::Utc;
use std::collections::HashSet;

/// A deterministic, table-driven finite state machine.
///
/// An `Fsm` owns a declared state set, an input alphabet, a transition
/// table, an accepting-state subset, and a mutable current state. The
/// definition is validated eagerly at construction; after that, the only
/// state mutation in the system is a successful [`input`](Fsm::input) call
/// (or an explicit [`set_state`](Fsm::set_state) / [`reset`](Fsm::reset)).
///
/// The machine is deterministic: for a fixed transition table and a fixed
/// input sequence, the terminal state is uniquely determined.
///
/// Single-threaded by design: the machine performs no internal
/// synchronization. If an embedding application shares an instance across
/// threads, it must wrap the whole instance in an exclusive lock.
///
/// # Example
///
/// Modulo-3 of a binary string, consumed digit by digit:
///
/// ```rust
/// use fsmkit::core::{Fsm, TransitionTable};
/// use fsmkit::{state_enum, symbol_enum};
///
/// state_enum! {
///     enum Remainder { S0, S1, S2 }
/// }
///
/// symbol_enum! {
///     enum Bit { Zero, One }
/// }
///
/// let table: TransitionTable<_, _> = [
///     (Remainder::S0, Bit::Zero, Remainder::S0),
///     (Remainder::S0, Bit::One, Remainder::S1),
///     (Remainder::S1, Bit::Zero, Remainder::S2),
///     (Remainder::S1, Bit::One, Remainder::S0),
///     (Remainder::S2, Bit::Zero, Remainder::S1),
///     (Remainder::S2, Bit::One, Remainder::S2),
/// ]
/// .into_iter()
/// .collect();
///
/// let mut fsm = Fsm::new(
///     [Remainder::S0, Remainder::S1, Remainder::S2],
///     [Bit::Zero, Bit::One],
///     table,
///     Remainder::S0,
///     [Remainder::S0, Remainder::S1, Remainder::S2],
/// )
/// .unwrap();
///
/// // "1101" is 13 in binary; 13 mod 3 = 1.
/// fsm.run([Bit::One, Bit::One, Bit::Zero, Bit::One]).unwrap();
/// assert_eq!(fsm.state(), &Remainder::S1);
/// assert!(fsm.is_accepting());
/// ```
#[derive(Clone, Debug)]
pub struct Fsm<S: State, I: Symbol> {
    states: HashSet<S>,
    alphabet: HashSet<I>,
    transitions: TransitionTable<S, I>,
    accepting: HashSet<S>,
    initial: S,
    current: S,
    history: StateHistory<S, I>,
}

impl<S: State, I: Symbol> Fsm<S, I> {
    /// Construct a machine from its definition, validating eagerly.
    ///
    /// Validation fails fast on the first violation, in this order:
    ///
    /// 1. the state set and the alphabet must be non-empty;
    /// 2. the initial state must be a declared state
    ///    ([`DefinitionError::InvalidInitialState`]);
    /// 3. every accepting state must be a declared state
    ///    ([`DefinitionError::InvalidAcceptingState`]);
    /// 4. every transition key's input must be in the alphabet
    ///    ([`DefinitionError::InvalidTransitionInput`]);
    /// 5. every transition target must be a declared state
    ///    ([`DefinitionError::InvalidTransitionTarget`]).
    ///
    /// On success the current state is the initial state. There is no
    /// implicit accepting-state default: pass the full state set explicitly
    /// if every state should accept, or an empty collection if none should.
    pub fn new(
        states: impl IntoIterator<Item = S>,
        alphabet: impl IntoIterator<Item = I>,
        transitions: TransitionTable<S, I>,
        initial: S,
        accepting: impl IntoIterator<Item = S>,
    ) -> Result<Self, DefinitionError> {
        let states: HashSet<S> = states.into_iter().collect();
        let alphabet: HashSet<I> = alphabet.into_iter().collect();
        let accepting: HashSet<S> = accepting.into_iter().collect();

        if states.is_empty() {
            return Err(DefinitionError::EmptyStateSet);
        }
        if alphabet.is_empty() {
            return Err(DefinitionError::EmptyAlphabet);
        }
        if !states.contains(&initial) {
            return Err(DefinitionError::InvalidInitialState {
                state: initial.name().to_string(),
            });
        }
        for state in &accepting {
            if !states.contains(state) {
                return Err(DefinitionError::InvalidAcceptingState {
                    state: state.name().to_string(),
                });
            }
        }
        for ((_, symbol), _) in transitions.iter() {
            if !alphabet.contains(symbol) {
                return Err(DefinitionError::InvalidTransitionInput {
                    symbol: symbol.name().to_string(),
                });
            }
        }
        for (_, target) in transitions.iter() {
            if !states.contains(target) {
                return Err(DefinitionError::InvalidTransitionTarget {
                    state: target.name().to_string(),
                });
            }
        }

        let current = initial.clone();
        Ok(Self {
            states,
            alphabet,
            transitions,
            accepting,
            initial,
            current,
            history: StateHistory::new(),
        })
    }

    /// Advance the machine by one input symbol.
    ///
    /// Fails with [`TransitionError::InvalidInputSymbol`] if the symbol is
    /// outside the declared alphabet, or [`TransitionError::MissingTransition`]
    /// if the table has no entry for the current `(state, symbol)` pair.
    /// Either way the current state is left unchanged. A missing transition
    /// is always an error, never treated as a self-loop.
    ///
    /// On success the current state is replaced with the table's target and
    /// the transition is appended to the [`history`](Fsm::history).
    pub fn input(&mut self, symbol: I) -> Result<(), TransitionError> {
        if !self.alphabet.contains(&symbol) {
            return Err(TransitionError::InvalidInputSymbol {
                symbol: symbol.name().to_string(),
                alphabet: self.alphabet_names(),
            });
        }

        let next = self
            .transitions
            .get(&self.current, &symbol)
            .ok_or_else(|| TransitionError::MissingTransition {
                state: self.current.name().to_string(),
                symbol: symbol.name().to_string(),
            })?
            .clone();

        self.history = self.history.record(TransitionRecord {
            from: self.current.clone(),
            to: next.clone(),
            symbol,
            timestamp: Utc::now(),
        });
        self.current = next;
        Ok(())
    }

    /// Feed a sequence of symbols in order, one [`input`](Fsm::input) each.
    ///
    /// Stops at the first error; the machine is left in the state it held
    /// before the failing symbol.
    pub fn run(&mut self, symbols: impl IntoIterator<Item = I>) -> Result<(), TransitionError> {
        for symbol in symbols {
            self.input(symbol)?;
        }
        Ok(())
    }

    /// Get the current state (pure).
    pub fn state(&self) -> &S {
        &self.current
    }

    /// Replace the current state directly, validating first.
    ///
    /// Used to reset or fast-forward a machine from outside. The new value
    /// must be a declared state, else
    /// [`TransitionError::InvalidStateAssignment`]; on success the
    /// replacement is atomic - no intermediate invalid state is observable.
    pub fn set_state(&mut self, new_state: S) -> Result<(), TransitionError> {
        if !self.states.contains(&new_state) {
            return Err(TransitionError::InvalidStateAssignment {
                state: new_state.name().to_string(),
            });
        }
        self.current = new_state;
        Ok(())
    }

    /// Check if the current state is an accepting state (pure).
    pub fn is_accepting(&self) -> bool {
        self.accepting.contains(&self.current)
    }

    /// Return to the initial state and clear the history.
    pub fn reset(&mut self) {
        self.current = self.initial.clone();
        self.history = StateHistory::new();
    }

    /// Get the declared state set.
    pub fn states(&self) -> &HashSet<S> {
        &self.states
    }

    /// Get the declared input alphabet.
    pub fn alphabet(&self) -> &HashSet<I> {
        &self.alphabet
    }

    /// Get the accepting-state subset.
    pub fn accepting_states(&self) -> &HashSet<S> {
        &self.accepting
    }

    /// Get the initial state the machine was defined with.
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Get the transition history (pure).
    pub fn history(&self) -> &StateHistory<S, I> {
        &self.history
    }

    // Checkpoint restore bypasses input() but must uphold the same
    // invariants; callers validate membership first.
    pub(crate) fn restore_parts(&mut self, current: S, history: StateHistory<S, I>) {
        self.current = current;
        self.history = history;
    }

    /// Sorted alphabet names for stable error messages.
    fn alphabet_names(&self) -> String {
        let mut names: Vec<&str> = self.alphabet.iter().map(Symbol::name).collect();
        names.sort_unstable();
        names.join(", ")
    }
}
