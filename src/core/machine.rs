//! The state machine cursor and its operations.

use crate::core::error::MachineError;
use crate::core::graph::StateGraph;
use crate::core::history::History;

/// Finite state machine with linear undo/redo history.
///
/// The machine owns a read-only [`StateGraph`], the live cursor (current,
/// previous, and pending-redo state), and a [`History`] stack. Three
/// operations move the cursor forward (`change_state`, `trigger`, `reset`)
/// and two navigate it (`undo`, `redo`). Every forward move prunes the
/// redo-able future before appending, so history stays a single linear
/// sequence.
///
/// All operations are synchronous in-memory mutations. A machine is meant to
/// have a single sequential owner; wrap it in a lock if it must be shared.
///
/// # Example
///
/// ```rust
/// use retrace::state_graph;
/// use retrace::core::StateMachine;
///
/// let graph = state_graph! {
///     initial: "draft",
///     "draft" => { "submit" => "review" },
///     "review" => { "approve" => "published", "reject" => "draft" },
///     "published" => {},
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(graph);
/// machine.trigger("submit").unwrap();
/// machine.trigger("approve").unwrap();
/// assert_eq!(machine.state(), "published");
///
/// machine.undo();
/// assert_eq!(machine.state(), "review");
/// machine.trigger("reject").unwrap();
/// // The pruned future is gone.
/// assert!(!machine.redo());
/// ```
#[derive(Debug)]
pub struct StateMachine {
    graph: StateGraph,
    current: String,
    prev: Option<String>,
    next: Option<String>,
    history: History,
}

impl StateMachine {
    /// Create a machine positioned at the graph's initial state.
    pub fn new(graph: StateGraph) -> Self {
        let initial = graph.initial().to_string();
        Self {
            graph,
            current: initial.clone(),
            prev: None,
            next: None,
            history: History::new(initial),
        }
    }

    /// The active state.
    pub fn state(&self) -> &str {
        &self.current
    }

    /// The state before the last committed move, if one has been made since
    /// construction or the last `clear_history`.
    pub fn previous_state(&self) -> Option<&str> {
        self.prev.as_deref()
    }

    /// The state a pending `redo` would move to. Populated only by `undo`;
    /// cleared by any forward move.
    pub fn next_state(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// The graph this machine runs over.
    pub fn graph(&self) -> &StateGraph {
        &self.graph
    }

    /// Move to `target` explicitly, recording the move in history.
    ///
    /// Returns the new current state. Fails with
    /// [`MachineError::InvalidState`] when `target` is not declared in the
    /// graph, leaving cursor and history untouched.
    pub fn change_state(&mut self, target: &str) -> Result<&str, MachineError> {
        if !self.graph.contains(target) {
            return Err(MachineError::InvalidState(target.to_string()));
        }
        self.commit(target.to_string());
        Ok(&self.current)
    }

    /// Follow the current state's transition for `event`.
    ///
    /// History effects are identical to an equivalent `change_state`. Fails
    /// with [`MachineError::TransitionNotFound`] when the current state does
    /// not handle `event`, and with [`MachineError::InvalidState`] when the
    /// graph maps the event to an undeclared state; neither failure mutates
    /// anything.
    pub fn trigger(&mut self, event: &str) -> Result<(), MachineError> {
        let definition = self
            .graph
            .get(&self.current)
            .ok_or_else(|| MachineError::InvalidState(self.current.clone()))?;
        let target = definition
            .target(event)
            .ok_or_else(|| MachineError::TransitionNotFound {
                state: self.current.clone(),
                event: event.to_string(),
            })?
            .to_string();
        if !self.graph.contains(&target) {
            return Err(MachineError::InvalidState(target));
        }
        self.commit(target);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// This is a forward move (it prunes the redo branch and records an
    /// entry) whose landing point is then treated as the history origin:
    /// the pointer is forced back to zero.
    pub fn reset(&mut self) {
        let initial = self.graph.initial().to_string();
        self.commit(initial);
        self.history.rewind();
    }

    /// All declared state identifiers, in declaration order.
    pub fn states(&self) -> Vec<&str> {
        self.graph.state_ids().collect()
    }

    /// Declared states that handle `event`, in declaration order. Empty when
    /// no state declares the event.
    pub fn states_handling(&self, event: &str) -> Vec<&str> {
        self.graph.states_handling(event)
    }

    /// Step back to the previously visited state.
    ///
    /// Returns `false` without mutating anything when the machine is already
    /// at the history origin. Otherwise captures the departed state for a
    /// subsequent `redo` and returns `true`.
    pub fn undo(&mut self) -> bool {
        if !self.history.can_go_back() {
            return false;
        }
        self.next = Some(self.history.current().to_string());
        self.history.back();
        self.current = self.history.current().to_string();
        self.prev = self.history.previous().map(str::to_string);
        true
    }

    /// Step forward to the state the last `undo` departed from.
    ///
    /// Returns `false` without mutating anything when no redo is pending:
    /// either the pointer is already at the newest entry, or no `undo` has
    /// run since the last forward move.
    pub fn redo(&mut self) -> bool {
        if self.next.is_none() || !self.history.can_go_forward() {
            return false;
        }
        self.prev = Some(self.history.current().to_string());
        self.history.forward();
        self.current = self.history.current().to_string();
        self.next = self.history.upcoming().map(str::to_string);
        true
    }

    /// Discard all history and return the cursor to its construction shape.
    ///
    /// The graph itself is untouched.
    pub fn clear_history(&mut self) {
        let initial = self.graph.initial().to_string();
        self.current = initial.clone();
        self.prev = None;
        self.next = None;
        self.history.clear(initial);
    }

    // Shared tail of every forward move: shift the cursor, record the new
    // state (truncating the redo branch), and drop any pending redo.
    fn commit(&mut self, target: String) {
        self.prev = Some(std::mem::replace(&mut self.current, target.clone()));
        self.history.record(target);
        self.next = None;
    }
}
