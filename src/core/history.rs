//! Transition history tracking.
//!
//! Provides immutable tracking of the symbols a machine consumed and the
//! states it moved through, following functional programming principles.

use super::state::State;
use super::symbol::Symbol;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single successful transition.
///
/// Records are immutable values: a move from one state to another, driven
/// by one input symbol, at a specific point in time.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TransitionRecord<S: State, I: Symbol> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// The input symbol that drove the transition
    pub symbol: I,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of successful transitions.
///
/// History is immutable - the `record` method returns a new history with
/// the record appended. Failed inputs never appear here; only transitions
/// that actually moved the machine are recorded.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::{StateHistory, TransitionRecord};
/// use fsmkit::{state_enum, symbol_enum};
/// use chrono::Utc;
///
/// state_enum! {
///     enum Door { Open, Closed }
/// }
///
/// symbol_enum! {
///     enum Action { Toggle }
/// }
///
/// let history = StateHistory::new();
/// let history = history.record(TransitionRecord {
///     from: Door::Open,
///     to: Door::Closed,
///     symbol: Action::Toggle,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 2); // Open -> Closed
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, I: Symbol> {
    records: Vec<TransitionRecord<S, I>>,
}

impl<S: State, I: Symbol> Default for StateHistory<S, I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, I: Symbol> StateHistory<S, I> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record appended.
    pub fn record(&self, record: TransitionRecord<S, I>) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the state before the first
    /// recorded transition, then the `to` state of each record.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(&first.from);
        }
        for record in &self.records {
            path.push(&record.to);
        }
        path
    }

    /// Get the sequence of symbols consumed, in order.
    pub fn consumed(&self) -> Vec<&I> {
        self.records.iter().map(|r| &r.symbol).collect()
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[TransitionRecord<S, I>] {
        &self.records
    }
}
