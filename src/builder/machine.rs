//! Builder for constructing machines with a fluent API.

use crate::builder::error::BuildError;
use crate::core::{Fsm, State, Symbol, TransitionTable};

/// Builder for constructing an [`Fsm`] with a fluent API.
///
/// Collects the state set, alphabet, transitions, initial state, and
/// accepting states, then delegates to [`Fsm::new`] for the eager
/// definition validation.
///
/// # Example
///
/// ```rust
/// use fsmkit::builder::FsmBuilder;
/// use fsmkit::{state_enum, symbol_enum};
///
/// state_enum! {
///     enum Turnstile { Locked, Unlocked }
/// }
///
/// symbol_enum! {
///     enum Event { Coin, Push }
/// }
///
/// let mut fsm = FsmBuilder::new()
///     .states([Turnstile::Locked, Turnstile::Unlocked])
///     .symbols([Event::Coin, Event::Push])
///     .transition(Turnstile::Locked, Event::Coin, Turnstile::Unlocked)
///     .transition(Turnstile::Unlocked, Event::Push, Turnstile::Locked)
///     .initial(Turnstile::Locked)
///     .accepting_states([Turnstile::Locked])
///     .build()
///     .unwrap();
///
/// fsm.input(Event::Coin).unwrap();
/// assert_eq!(fsm.state(), &Turnstile::Unlocked);
/// ```
pub struct FsmBuilder<S: State, I: Symbol> {
    states: Vec<S>,
    alphabet: Vec<I>,
    transitions: TransitionTable<S, I>,
    initial: Option<S>,
    accepting: Vec<S>,
}

impl<S: State, I: Symbol> FsmBuilder<S, I> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            alphabet: Vec::new(),
            transitions: TransitionTable::new(),
            initial: None,
            accepting: Vec::new(),
        }
    }

    /// Declare the state set (required, non-empty).
    pub fn states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.states.extend(states);
        self
    }

    /// Declare the input alphabet (required, non-empty).
    pub fn symbols(mut self, symbols: impl IntoIterator<Item = I>) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Define one transition: on `symbol`, move from `from` to `to`.
    pub fn transition(mut self, from: S, symbol: I, to: S) -> Self {
        self.transitions.insert(from, symbol, to);
        self
    }

    /// Define multiple transitions from `(from, symbol, to)` triples.
    pub fn transitions(mut self, triples: impl IntoIterator<Item = (S, I, S)>) -> Self {
        for (from, symbol, to) in triples {
            self.transitions.insert(from, symbol, to);
        }
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: S) -> Self {
        self.initial = Some(state);
        self
    }

    /// Declare the accepting-state subset.
    ///
    /// There is no default to "all states accepting": if this is never
    /// called, the accepting set is empty and `is_accepting` is false in
    /// every state. Spell out the full state set if every state accepts.
    pub fn accepting_states(mut self, states: impl IntoIterator<Item = S>) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Build the machine.
    ///
    /// Returns an error if the initial state is missing or the assembled
    /// definition fails [`Fsm::new`]'s validation.
    pub fn build(self) -> Result<Fsm<S, I>, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        let fsm = Fsm::new(
            self.states,
            self.alphabet,
            self.transitions,
            initial,
            self.accepting,
        )?;
        Ok(fsm)
    }
}

impl<S: State, I: Symbol> Default for FsmBuilder<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DefinitionError;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        On,
        Off,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::On => "On",
                Self::Off => "Off",
            }
        }
    }

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestSymbol {
        Press,
    }

    impl Symbol for TestSymbol {
        fn name(&self) -> &str {
            "Press"
        }
    }

    #[test]
    fn builder_requires_initial_state() {
        let result = FsmBuilder::<TestState, TestSymbol>::new()
            .states([TestState::On, TestState::Off])
            .symbols([TestSymbol::Press])
            .build();

        assert_eq!(result.unwrap_err(), BuildError::MissingInitialState);
    }

    #[test]
    fn builder_surfaces_definition_errors() {
        let result = FsmBuilder::<TestState, TestSymbol>::new()
            .states([TestState::On])
            .symbols([TestSymbol::Press])
            .initial(TestState::Off)
            .build();

        assert_eq!(
            result.unwrap_err(),
            BuildError::Definition(DefinitionError::InvalidInitialState {
                state: "Off".to_string()
            })
        );
    }

    #[test]
    fn fluent_api_builds_machine() {
        let fsm = FsmBuilder::new()
            .states([TestState::On, TestState::Off])
            .symbols([TestSymbol::Press])
            .transition(TestState::Off, TestSymbol::Press, TestState::On)
            .transition(TestState::On, TestSymbol::Press, TestState::Off)
            .initial(TestState::Off)
            .accepting_states([TestState::On])
            .build();

        assert!(fsm.is_ok());
        let fsm = fsm.unwrap();
        assert_eq!(fsm.state(), &TestState::Off);
        assert!(!fsm.is_accepting());
    }

    #[test]
    fn accepting_set_defaults_to_empty() {
        let mut fsm = FsmBuilder::new()
            .states([TestState::On, TestState::Off])
            .symbols([TestSymbol::Press])
            .transition(TestState::Off, TestSymbol::Press, TestState::On)
            .initial(TestState::Off)
            .build()
            .unwrap();

        assert!(!fsm.is_accepting());
        fsm.input(TestSymbol::Press).unwrap();
        assert!(!fsm.is_accepting());
    }

    #[test]
    fn transitions_accepts_triples() {
        let fsm = FsmBuilder::new()
            .states([TestState::On, TestState::Off])
            .symbols([TestSymbol::Press])
            .transitions([
                (TestState::Off, TestSymbol::Press, TestState::On),
                (TestState::On, TestSymbol::Press, TestState::Off),
            ])
            .initial(TestState::Off)
            .build()
            .unwrap();

        assert_eq!(fsm.states().len(), 2);
    }
}
