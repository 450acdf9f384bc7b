//! Build errors for the machine builder.

use crate::core::DefinitionError;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// The assembled definition failed the engine's eager validation.
    #[error(transparent)]
    Definition(#[from] DefinitionError),
}
