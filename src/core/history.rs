//! Transition history tracking.
//!
//! Provides immutable tracking of the transitions a container adopted,
//! in the order they happened.

use super::action::Action;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single adopted transition.
///
/// # Example
///
/// ```rust
/// use flipswitch::core::{StateTransition, ToggleAction, ToggleState};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: ToggleState::switched_off(),
///     to: ToggleState::switched_on(),
///     action: ToggleAction::toggle(),
///     timestamp: Utc::now(),
///     sequence: 1,
/// };
/// assert!(transition.changed());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State, A: Action> {
    /// The state the reducer was handed
    pub from: S,
    /// The state the reducer returned
    pub to: S,
    /// The action that was dispatched
    pub action: A,
    /// When the transition was adopted
    pub timestamp: DateTime<Utc>,
    /// Position of the dispatch since the container was created (1-based)
    pub sequence: u64,
}

impl<S: State, A: Action> StateTransition<S, A> {
    /// True when the reducer produced a different state.
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

/// Ordered history of transitions.
///
/// History is immutable: `record` returns a new history with the
/// transition added. A history created with [`StateHistory::with_limit`]
/// keeps only the most recent `limit` transitions.
///
/// # Example
///
/// ```rust
/// use flipswitch::core::{StateHistory, StateTransition, ToggleAction, ToggleState};
/// use chrono::Utc;
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition {
///     from: ToggleState::switched_off(),
///     to: ToggleState::switched_on(),
///     action: ToggleAction::toggle(),
///     timestamp: Utc::now(),
///     sequence: 1,
/// });
/// let history = history.record(StateTransition {
///     from: ToggleState::switched_on(),
///     to: ToggleState::switched_off(),
///     action: ToggleAction::set_off(),
///     timestamp: Utc::now(),
///     sequence: 2,
/// });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // off -> on -> off
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, A: Action> {
    transitions: Vec<StateTransition<S, A>>,
    limit: Option<usize>,
}

impl<S: State, A: Action> Default for StateHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> StateHistory<S, A> {
    /// Create a new empty, unbounded history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that retains at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Maximum number of retained transitions, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left unchanged. When bounded, the oldest
    /// transitions are dropped to stay within the limit.
    pub fn record(&self, transition: StateTransition<S, A>) -> Self {
        let mut next = self.clone();
        next.push(transition);
        next
    }

    /// Record a transition in place.
    ///
    /// Same retention rules as [`record`](Self::record) without copying the
    /// retained transitions.
    pub fn push(&mut self, transition: StateTransition<S, A>) {
        self.transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = self.transitions.len().saturating_sub(limit);
            self.transitions.drain(..excess);
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest retained transition followed
    /// by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last retained transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// All retained transitions, oldest first.
    pub fn transitions(&self) -> &[StateTransition<S, A>] {
        &self.transitions
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition<S, A>> {
        self.transitions.last()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ToggleAction, ToggleState};

    type ToggleHistory = StateHistory<ToggleState, ToggleAction>;

    fn transition(from: bool, to: bool, sequence: u64) -> StateTransition<ToggleState, ToggleAction> {
        StateTransition {
            from: ToggleState::new(from),
            to: ToggleState::new(to),
            action: ToggleAction::toggle(),
            timestamp: Utc::now(),
            sequence,
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history = ToggleHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = ToggleHistory::new();
        let new_history = history.record(transition(false, true, 1));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = ToggleHistory::new()
            .record(transition(false, true, 1))
            .record(transition(true, false, 2));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &ToggleState::switched_off());
        assert_eq!(path[1], &ToggleState::switched_on());
        assert_eq!(path[2], &ToggleState::switched_off());
    }

    #[test]
    fn bounded_history_drops_oldest() {
        let history = ToggleHistory::with_limit(2)
            .record(transition(false, true, 1))
            .record(transition(true, false, 2))
            .record(transition(false, true, 3));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[0].sequence, 2);
        assert_eq!(history.last().map(|t| t.sequence), Some(3));
        assert_eq!(history.limit(), Some(2));
    }

    #[test]
    fn push_records_in_place_within_limit() {
        let mut history = ToggleHistory::with_limit(3);
        for sequence in 1..=10_000 {
            history.push(transition(sequence % 2 == 1, sequence % 2 == 0, sequence));
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.transitions()[0].sequence, 9_998);
        assert_eq!(history.last().map(|t| t.sequence), Some(10_000));
    }

    #[test]
    fn push_matches_record() {
        let base = ToggleHistory::with_limit(2)
            .record(transition(false, true, 1))
            .record(transition(true, false, 2));

        let mut pushed = base.clone();
        pushed.push(transition(false, true, 3));

        assert_eq!(pushed, base.record(transition(false, true, 3)));
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = ToggleHistory::new().record(transition(false, true, 1));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(transition(true, false, 2));

        let duration = history.duration();
        assert!(duration.is_some());
        assert!(duration.unwrap() >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = ToggleHistory::new().record(transition(false, true, 1));
        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn unchanged_transition_is_detected() {
        assert!(transition(false, true, 1).changed());
        assert!(!transition(true, true, 1).changed());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = ToggleHistory::with_limit(5).record(transition(false, true, 1));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: ToggleHistory = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
