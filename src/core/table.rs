//! Transition table: the `(state, symbol) -> state` mapping.

use super::state::State;
use super::symbol::Symbol;
use std::collections::HashMap;

/// A deterministic transition table.
///
/// Maps `(current state, input symbol)` pairs to a next state. Keys are
/// unique (map semantics); the table may be complete or intentionally
/// partial. Built once, then handed to [`Fsm`](crate::core::Fsm), which
/// validates it against the declared state set and alphabet and never
/// mutates it afterwards.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::TransitionTable;
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
/// let mut table = TransitionTable::new();
/// table.insert(Door::Open, Action::Toggle, Door::Closed);
/// table.insert(Door::Closed, Action::Toggle, Door::Open);
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.get(&Door::Open, &Action::Toggle), Some(&Door::Closed));
/// ```
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State, I: Symbol> {
    entries: HashMap<(S, I), S>,
}

impl<S: State, I: Symbol> Default for TransitionTable<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Symbol> TransitionTable<S, I> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Define a transition: on `symbol`, move from `from` to `to`.
    ///
    /// Returns the previously defined target for the `(from, symbol)` pair,
    /// if any - keys are unique, so redefining replaces.
    pub fn insert(&mut self, from: S, symbol: I, to: S) -> Option<S> {
        self.entries.insert((from, symbol), to)
    }

    /// Look up the target state for `(state, symbol)`, if defined.
    pub fn get(&self, state: &S, symbol: &I) -> Option<&S> {
        self.entries.get(&(state.clone(), symbol.clone()))
    }

    /// Iterate over all defined transitions as `((from, symbol), to)`.
    pub fn iter(&self) -> impl Iterator<Item = (&(S, I), &S)> {
        self.entries.iter()
    }

    /// Number of defined transitions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no transitions at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: State, I: Symbol> FromIterator<(S, I, S)> for TransitionTable<S, I> {
    fn from_iter<T: IntoIterator<Item = (S, I, S)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (from, symbol, to) in iter {
            table.insert(from, symbol, to);
        }
        table
    }
}
