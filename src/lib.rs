//! Retrace: A finite state machine library with linear undo/redo history
//!
//! Retrace keeps the machine deliberately small: a read-only state graph, a
//! cursor over the active state, and a linear history stack that supports
//! stepping backward and forward through previously visited states. Forward
//! moves prune any redo-able future, giving the same semantics as a browser's
//! back/forward navigation.
//!
//! # Core Concepts
//!
//! - **StateGraph**: Immutable, insertion-ordered states and their
//!   event-triggered transitions
//! - **StateMachine**: The live cursor plus the undo/redo history
//! - **History**: Branch-truncating stack of visited states
//!
//! # Example
//!
//! ```rust
//! use retrace::state_graph;
//! use retrace::core::StateMachine;
//!
//! let graph = state_graph! {
//!     initial: "idle",
//!     "idle" => { "start" => "running" },
//!     "running" => { "stop" => "idle" },
//! }
//! .unwrap();
//!
//! let mut machine = StateMachine::new(graph);
//! assert_eq!(machine.state(), "idle");
//!
//! machine.trigger("start").unwrap();
//! machine.trigger("stop").unwrap();
//!
//! assert!(machine.undo());
//! assert_eq!(machine.state(), "running");
//! assert!(machine.redo());
//! assert_eq!(machine.state(), "idle");
//! ```

pub mod builder;
pub mod core;

// Re-export commonly used types
pub use builder::{BuildError, StateBuilder, StateGraphBuilder};
pub use core::{History, MachineError, StateDefinition, StateGraph, StateMachine};
