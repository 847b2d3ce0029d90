//! Immutable state graph definitions.
//!
//! A `StateGraph` is the read-only half of a machine: the declared states,
//! each state's event-to-target transition table, and the designated initial
//! state. Graphs are built once (see the `builder` module) and never mutated
//! afterwards.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single state's transition table.
///
/// Transitions are deterministic: at most one target state per event. Targets
/// are plain identifiers and are not required to name a declared state at
/// build time; a dangling target surfaces as an error when a trigger resolves
/// to it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    transitions: HashMap<String, String>,
}

impl StateDefinition {
    /// Create an empty definition with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, event: String, target: String) {
        self.transitions.insert(event, target);
    }

    /// Target state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Whether this state declares a transition for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }
}

/// Immutable graph of states and transitions.
///
/// Declaration order is preserved: [`StateGraph::state_ids`] enumerates states
/// in the order they were added to the builder, stable and unsorted.
///
/// Construction goes through [`StateGraphBuilder`](crate::builder::StateGraphBuilder),
/// the [`state_graph!`](crate::state_graph) macro, or
/// [`linear_graph`](crate::builder::linear_graph), all of which guarantee that
/// the initial state is one of the declared states.
///
/// # Example
///
/// ```rust
/// use retrace::state_graph;
///
/// let graph = state_graph! {
///     initial: "closed",
///     "closed" => { "open" => "open" },
///     "open" => { "close" => "closed" },
/// }
/// .unwrap();
///
/// assert_eq!(graph.initial(), "closed");
/// assert!(graph.contains("open"));
/// assert_eq!(graph.state_ids().collect::<Vec<_>>(), ["closed", "open"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateGraph {
    initial: String,
    order: Vec<String>,
    states: HashMap<String, StateDefinition>,
}

impl StateGraph {
    pub(crate) fn from_parts(
        initial: String,
        order: Vec<String>,
        states: HashMap<String, StateDefinition>,
    ) -> Self {
        Self {
            initial,
            order,
            states,
        }
    }

    /// The designated starting state.
    pub fn initial(&self) -> &str {
        &self.initial
    }

    /// Whether `id` names a declared state.
    pub fn contains(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Definition for `id`, if declared.
    pub fn get(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    /// All state identifiers in declaration order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// State identifiers that declare a transition for `event`, in
    /// declaration order. Empty when no state handles the event.
    pub fn states_handling<'a>(&'a self, event: &str) -> Vec<&'a str> {
        self.order
            .iter()
            .filter(|id| {
                self.states
                    .get(id.as_str())
                    .is_some_and(|def| def.handles(event))
            })
            .map(String::as_str)
            .collect()
    }

    /// Number of declared states.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether the graph declares no states. Builders reject this shape, so
    /// a graph obtained through them is never empty.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
