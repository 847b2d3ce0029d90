//! Machine operation errors.

use thiserror::Error;

/// Errors raised by state machine operations.
///
/// Both variants abort the attempted operation before any cursor or history
/// mutation, so a failed call leaves the machine exactly as it was. `undo` and
/// `redo` never produce these errors; they report "nothing to do" through
/// their boolean return instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MachineError {
    /// The requested state is not declared in the graph.
    #[error("Unknown state '{0}'")]
    InvalidState(String),

    /// The current state declares no transition for the given event.
    #[error("No transition for event '{event}' from state '{state}'")]
    TransitionNotFound { state: String, event: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_state_names_the_state() {
        let err = MachineError::InvalidState("limbo".to_string());
        assert_eq!(err.to_string(), "Unknown state 'limbo'");
    }

    #[test]
    fn transition_not_found_names_state_and_event() {
        let err = MachineError::TransitionNotFound {
            state: "idle".to_string(),
            event: "stop".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "No transition for event 'stop' from state 'idle'"
        );
    }
}
