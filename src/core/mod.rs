//! Core state machine types and logic.
//!
//! This module contains the engine itself:
//! - Graph definitions via `StateGraph` and `StateDefinition`
//! - The branch-truncating `History` stack
//! - The `StateMachine` cursor and its operations
//!
//! Everything here is synchronous and in-memory. The machine assumes a single
//! sequential owner; callers sharing one instance across threads must provide
//! their own mutual exclusion.

mod error;
mod graph;
mod history;
mod machine;

pub use error::MachineError;
pub use graph::{StateDefinition, StateGraph};
pub use history::History;
pub use machine::StateMachine;
