//! Build errors for state graph construction.

use thiserror::Error;

/// Errors that can occur when building a state graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("No states declared. Add at least one state")]
    NoStates,

    #[error("Initial state '{initial}' is not a declared state")]
    UnknownInitialState { initial: String },

    #[error("State '{id}' declared more than once")]
    DuplicateState { id: String },
}
