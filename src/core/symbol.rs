//! Input symbol trait for automaton alphabets.
//!
//! Symbols are the units the machine consumes, one at a time, drawn from a
//! fixed, finite alphabet declared at machine-definition time.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for input symbols.
///
/// Symbols are immutable, hashable tokens. They key the transition table
/// together with the current state, so the same bounds as
/// [`State`](crate::core::State) apply.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::Symbol;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Bit {
///     Zero,
///     One,
/// }
///
/// impl Symbol for Bit {
///     fn name(&self) -> &str {
///         match self {
///             Self::Zero => "0",
///             Self::One => "1",
///         }
///     }
/// }
///
/// assert_eq!(Bit::One.name(), "1");
/// ```
pub trait Symbol:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the symbol's name for display/logging.
    ///
    /// Used to identify the offending symbol (and the valid alphabet) in
    /// error messages.
    fn name(&self) -> &str;
}
