//! Fluent builders for states and graphs.

use crate::builder::error::BuildError;
use crate::core::{StateDefinition, StateGraph};
use std::collections::HashMap;

/// Builder for a single state's transition table.
///
/// Declares the state identifier and its event-to-target mappings; feed the
/// result into [`StateGraphBuilder::state`].
///
/// # Example
///
/// ```
/// use retrace::builder::{StateBuilder, StateGraphBuilder};
///
/// let graph = StateGraphBuilder::new()
///     .initial("closed")
///     .state(StateBuilder::new("closed").on("open", "open"))
///     .state(StateBuilder::new("open").on("close", "closed"))
///     .build()
///     .unwrap();
///
/// assert_eq!(graph.initial(), "closed");
/// ```
pub struct StateBuilder {
    id: String,
    definition: StateDefinition,
}

impl StateBuilder {
    /// Start declaring the state named `id`.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            definition: StateDefinition::new(),
        }
    }

    /// Declare that `event` moves this state to `target`.
    ///
    /// Declaring the same event twice keeps the later target; transitions are
    /// deterministic, one target per event.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.definition.insert(event.into(), target.into());
        self
    }

    fn into_parts(self) -> (String, StateDefinition) {
        (self.id, self.definition)
    }
}

/// Builder for constructing state graphs with a fluent API.
///
/// States are kept in declaration order, which is the order
/// [`StateGraph::state_ids`] later enumerates them in.
pub struct StateGraphBuilder {
    initial: Option<String>,
    order: Vec<String>,
    states: HashMap<String, StateDefinition>,
    duplicate: Option<String>,
}

impl StateGraphBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial: None,
            order: Vec::new(),
            states: HashMap::new(),
            duplicate: None,
        }
    }

    /// Set the initial state (required). Must match one of the declared
    /// states by the time `build` runs.
    pub fn initial(mut self, id: impl Into<String>) -> Self {
        self.initial = Some(id.into());
        self
    }

    /// Declare a state. Declaring the same identifier twice is reported as
    /// [`BuildError::DuplicateState`] at `build` time.
    pub fn state(mut self, builder: StateBuilder) -> Self {
        let (id, definition) = builder.into_parts();
        if self.states.contains_key(&id) {
            self.duplicate.get_or_insert(id);
            return self;
        }
        self.order.push(id.clone());
        self.states.insert(id, definition);
        self
    }

    /// Declare multiple states at once.
    pub fn states(mut self, builders: impl IntoIterator<Item = StateBuilder>) -> Self {
        for builder in builders {
            self = self.state(builder);
        }
        self
    }

    /// Build the graph.
    ///
    /// Validates that an initial state was set, at least one state was
    /// declared, no state was declared twice, and the initial state is one
    /// of the declared states. Transition targets are deliberately not
    /// validated here; a dangling target surfaces as an error when a trigger
    /// resolves to it.
    pub fn build(self) -> Result<StateGraph, BuildError> {
        if let Some(id) = self.duplicate {
            return Err(BuildError::DuplicateState { id });
        }
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        if self.order.is_empty() {
            return Err(BuildError::NoStates);
        }
        if !self.states.contains_key(&initial) {
            return Err(BuildError::UnknownInitialState { initial });
        }
        Ok(StateGraph::from_parts(initial, self.order, self.states))
    }
}

impl Default for StateGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
