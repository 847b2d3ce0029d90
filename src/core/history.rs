//! Linear undo/redo history over visited states.
//!
//! `History` is a stack of state identifiers plus a pointer marking the
//! current position, with browser back/forward semantics: recording a new
//! state truncates everything after the pointer before appending, so a
//! forward move always discards the redo-able future.

use serde::{Deserialize, Serialize};

/// Branch-truncating navigation stack.
///
/// Invariants, maintained by every method:
/// - the first entry is always the state the history was created with,
/// - the pointer stays within `[0, len - 1]`,
/// - entries after the pointer exist only between an `undo` and the next
///   forward move.
///
/// # Example
///
/// ```rust
/// use retrace::core::History;
///
/// let mut history = History::new("idle".to_string());
/// history.record("running".to_string());
/// history.record("idle".to_string());
///
/// assert!(history.back());
/// assert_eq!(history.current(), "running");
///
/// // A forward move prunes the redo branch.
/// history.record("paused".to_string());
/// assert!(!history.forward());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<String>,
    pointer: usize,
}

impl History {
    /// Create a history whose single entry is `origin`.
    pub fn new(origin: String) -> Self {
        Self {
            entries: vec![origin],
            pointer: 0,
        }
    }

    /// Record a forward move: truncate the redo branch after the pointer,
    /// append `state`, and advance the pointer onto it.
    pub fn record(&mut self, state: String) {
        self.entries.truncate(self.pointer + 1);
        self.entries.push(state);
        self.pointer += 1;
    }

    /// The entry at the pointer.
    pub fn current(&self) -> &str {
        &self.entries[self.pointer]
    }

    /// The entry one step behind the pointer, if any.
    pub fn previous(&self) -> Option<&str> {
        self.pointer
            .checked_sub(1)
            .map(|i| self.entries[i].as_str())
    }

    /// The entry one step ahead of the pointer, if any.
    pub fn upcoming(&self) -> Option<&str> {
        self.entries.get(self.pointer + 1).map(String::as_str)
    }

    /// Whether a step back is possible.
    pub fn can_go_back(&self) -> bool {
        self.pointer > 0
    }

    /// Whether a step forward is possible.
    pub fn can_go_forward(&self) -> bool {
        self.pointer + 1 < self.entries.len()
    }

    /// Step the pointer back one entry. Returns `false` at the origin.
    pub fn back(&mut self) -> bool {
        if self.pointer == 0 {
            return false;
        }
        self.pointer -= 1;
        true
    }

    /// Step the pointer forward one entry. Returns `false` at the newest
    /// entry.
    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.pointer += 1;
        true
    }

    /// Force the pointer back to the origin without touching the entries.
    pub fn rewind(&mut self) {
        self.pointer = 0;
    }

    /// Discard everything and start over from `origin`.
    pub fn clear(&mut self, origin: String) {
        self.entries.clear();
        self.entries.push(origin);
        self.pointer = 0;
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// A history is never empty; this exists for the conventional pairing
    /// with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Current pointer position.
    pub fn position(&self) -> usize {
        self.pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(origin: &str) -> History {
        History::new(origin.to_string())
    }

    #[test]
    fn new_history_holds_only_the_origin() {
        let history = hist("idle");
        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 0);
        assert_eq!(history.current(), "idle");
        assert!(history.previous().is_none());
        assert!(history.upcoming().is_none());
    }

    #[test]
    fn record_appends_and_advances() {
        let mut history = hist("idle");
        history.record("running".to_string());

        assert_eq!(history.len(), 2);
        assert_eq!(history.position(), 1);
        assert_eq!(history.current(), "running");
        assert_eq!(history.previous(), Some("idle"));
    }

    #[test]
    fn back_at_origin_is_rejected() {
        let mut history = hist("idle");
        assert!(!history.back());
        assert_eq!(history.position(), 0);
    }

    #[test]
    fn forward_at_newest_entry_is_rejected() {
        let mut history = hist("idle");
        history.record("running".to_string());
        assert!(!history.forward());
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn back_then_forward_returns_to_same_entry() {
        let mut history = hist("idle");
        history.record("running".to_string());
        history.record("idle".to_string());

        assert!(history.back());
        assert_eq!(history.current(), "running");
        assert_eq!(history.upcoming(), Some("idle"));

        assert!(history.forward());
        assert_eq!(history.current(), "idle");
        assert!(history.upcoming().is_none());
    }

    #[test]
    fn record_truncates_the_redo_branch() {
        let mut history = hist("idle");
        history.record("running".to_string());
        history.record("idle".to_string());
        history.back();

        history.record("paused".to_string());

        assert_eq!(history.len(), 3);
        assert_eq!(history.position(), 2);
        assert_eq!(history.current(), "paused");
        assert!(!history.can_go_forward());
    }

    #[test]
    fn rewind_keeps_entries() {
        let mut history = hist("idle");
        history.record("running".to_string());
        history.rewind();

        assert_eq!(history.position(), 0);
        assert_eq!(history.len(), 2);
        assert_eq!(history.current(), "idle");
    }

    #[test]
    fn clear_restores_single_origin() {
        let mut history = hist("idle");
        history.record("running".to_string());
        history.record("paused".to_string());

        history.clear("idle".to_string());

        assert_eq!(history.len(), 1);
        assert_eq!(history.position(), 0);
        assert_eq!(history.current(), "idle");
    }

    #[test]
    fn first_entry_stays_the_origin() {
        let mut history = hist("idle");
        for state in ["a", "b", "c"] {
            history.record(state.to_string());
        }
        history.back();
        history.back();
        history.record("d".to_string());

        assert_eq!(history.entries[0], "idle");
    }

    #[test]
    fn history_serializes_round_trip() {
        let mut history = hist("idle");
        history.record("running".to_string());
        history.back();

        let json = serde_json::to_string(&history).unwrap();
        let back: History = serde_json::from_str(&json).unwrap();
        assert_eq!(history, back);
    }
}
