//! Builder API for ergonomic state graph construction.
//!
//! This module provides fluent builders and a macro for declaring state
//! graphs with minimal boilerplate. All construction paths validate that the
//! initial state is one of the declared states, which is what lets
//! `StateMachine::reset` stay infallible.

pub mod error;
pub mod graph;
pub mod macros;

pub use error::BuildError;
pub use graph::{StateBuilder, StateGraphBuilder};

use crate::core::StateGraph;

/// Build a linear chain of states where each state advances to its successor
/// on `event`. The first state is the initial state; the last has no outgoing
/// transitions.
///
/// # Example
///
/// ```
/// use retrace::builder::linear_graph;
/// use retrace::core::StateMachine;
///
/// let graph = linear_graph("next", ["draft", "review", "published"]).unwrap();
/// let mut machine = StateMachine::new(graph);
///
/// machine.trigger("next").unwrap();
/// machine.trigger("next").unwrap();
/// assert_eq!(machine.state(), "published");
/// assert!(machine.trigger("next").is_err());
/// ```
pub fn linear_graph<I, S>(event: &str, states: I) -> Result<StateGraph, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let ids: Vec<String> = states.into_iter().map(Into::into).collect();
    let mut builder = StateGraphBuilder::new();
    if let Some(first) = ids.first() {
        builder = builder.initial(first.clone());
    }
    for (index, id) in ids.iter().enumerate() {
        let mut state = StateBuilder::new(id.clone());
        if let Some(successor) = ids.get(index + 1) {
            state = state.on(event, successor.clone());
        }
        builder = builder.state(state);
    }
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_graph_chains_states_in_order() {
        let graph = linear_graph("advance", ["a", "b", "c"]).unwrap();

        assert_eq!(graph.initial(), "a");
        assert_eq!(graph.state_ids().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(graph.get("a").unwrap().target("advance"), Some("b"));
        assert_eq!(graph.get("b").unwrap().target("advance"), Some("c"));
        assert_eq!(graph.get("c").unwrap().target("advance"), None);
    }

    #[test]
    fn linear_graph_rejects_empty_input() {
        let result = linear_graph("advance", Vec::<String>::new());
        assert!(matches!(result, Err(BuildError::MissingInitialState)));
    }

    #[test]
    fn linear_graph_single_state_has_no_transitions() {
        let graph = linear_graph("advance", ["only"]).unwrap();
        assert_eq!(graph.len(), 1);
        assert!(!graph.get("only").unwrap().handles("advance"));
    }
}
