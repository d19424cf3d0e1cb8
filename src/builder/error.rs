//! Build errors for the reducer builder.

use thiserror::Error;

/// Errors that can occur when building a reducer.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Handler registered twice for kind '{0}'. Kinds must be unique")]
    DuplicateKind(String),
}
