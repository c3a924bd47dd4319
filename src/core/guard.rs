//! Guard predicates over a pending transition.
//!
//! Guards are pure boolean functions of the current state and the action
//! being dispatched. Override reducers use them to decide when a patch
//! applies to the default reducer's result.

use super::action::Action;
use super::state::State;
use std::marker::PhantomData;
use std::sync::Arc;

/// Pure predicate over `(state, action)`.
///
/// A guard may capture consumer-owned context (for example a shared click
/// counter). The guard reads that context; it never owns or updates it.
///
/// # Example
///
/// ```rust
/// use flipswitch::core::{ActionKind, Guard, ToggleAction, ToggleState};
///
/// let is_toggle = Guard::new(|_: &ToggleState, a: &ToggleAction| a.kind == ActionKind::Toggle);
///
/// assert!(is_toggle.check(&ToggleState::default(), &ToggleAction::toggle()));
/// assert!(!is_toggle.check(&ToggleState::default(), &ToggleAction::set_on()));
/// ```
pub struct Guard<S: State, A: Action> {
    predicate: Arc<dyn Fn(&S, &A) -> bool + Send + Sync>,
    _phantom: PhantomData<(S, A)>,
}

impl<S: State, A: Action> Guard<S, A> {
    /// Create a guard from a pure predicate.
    ///
    /// The predicate must be deterministic for a given input and the
    /// context it captures, and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S, &A) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Guard that only looks at the action.
    pub fn action<F>(predicate: F) -> Self
    where
        F: Fn(&A) -> bool + Send + Sync + 'static,
    {
        Self::new(move |_, action| predicate(action))
    }

    /// Guard that only looks at the current state.
    pub fn state<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self::new(move |state, _| predicate(state))
    }

    /// Guard that passes for every transition.
    pub fn always() -> Self {
        Self::new(|_, _| true)
    }

    /// Check the guard against a pending transition.
    pub fn check(&self, state: &S, action: &A) -> bool {
        (self.predicate)(state, action)
    }

    /// Guard that passes only when both guards pass.
    pub fn and(self, other: Guard<S, A>) -> Self
    where
        S: 'static,
        A: 'static,
    {
        Self::new(move |state, action| self.check(state, action) && other.check(state, action))
    }

    /// Guard that passes when this one fails.
    pub fn negate(self) -> Self
    where
        S: 'static,
        A: 'static,
    {
        Self::new(move |state, action| !self.check(state, action))
    }
}

impl<S: State, A: Action> Clone for Guard<S, A> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
            _phantom: PhantomData,
        }
    }
}
