//! Core State trait for automaton states.
//!
//! All states fed to an [`Fsm`](crate::core::Fsm) must implement this trait,
//! which provides pure methods for inspecting state identity without side
//! effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for automaton states.
///
/// All methods are pure - no side effects. States represent immutable
/// values drawn from a fixed, finite set declared at machine-definition
/// time. The machine never creates or destroys states; it only moves
/// between the declared ones.
///
/// # Required Traits
///
/// - `Clone`: states must be cloneable for history tracking
/// - `Eq` + `Hash`: states are transition-table keys and set members
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states must be serializable for checkpoints
///
/// # Payload Values
///
/// A state may carry an arbitrary payload value - a result to report once
/// the input is exhausted, for example. Payloads live on the implementing
/// enum as inherent items; the engine itself never inspects them.
///
/// # Example
///
/// ```rust
/// use fsmkit::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Remainder {
///     S0,
///     S1,
///     S2,
/// }
///
/// impl State for Remainder {
///     fn name(&self) -> &str {
///         match self {
///             Self::S0 => "S0",
///             Self::S1 => "S1",
///             Self::S2 => "S2",
///         }
///     }
/// }
///
/// // Payload: the remainder each state represents.
/// impl Remainder {
///     fn value(&self) -> u32 {
///         match self {
///             Self::S0 => 0,
///             Self::S1 => 1,
///             Self::S2 => 2,
///         }
///     }
/// }
///
/// assert_eq!(Remainder::S1.name(), "S1");
/// assert_eq!(Remainder::S1.value(), 1);
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    ///
    /// Returns a static string reference for zero-cost naming. Names appear
    /// in error messages, so they should uniquely identify the state.
    fn name(&self) -> &str;
}
