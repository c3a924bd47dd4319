//! Toggle switch handle.
//!
//! [`Toggle`] is the consumer-facing surface: the current state plus one
//! method per action kind. All of them route through [`Toggle::dispatch`],
//! which in turn defers to the reducer the toggle was built with.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{ActionKind, StateHistory, ToggleAction, ToggleState};
use crate::reducer::{shared, Reducer, ReducerError, ToggleReducer};
use crate::store::{Store, SubscriptionId};

/// Handle to a toggle switch driven by an injectable reducer.
///
/// # Example
///
/// ```rust
/// use flipswitch::Toggle;
///
/// let mut toggle = Toggle::new();
/// assert!(!toggle.is_on());
///
/// toggle.toggle().unwrap();
/// assert!(toggle.is_on());
///
/// toggle.set_off().unwrap();
/// assert!(!toggle.is_on());
/// ```
#[derive(Debug)]
pub struct Toggle {
    store: Store<ToggleState, ToggleAction>,
}

impl Default for Toggle {
    fn default() -> Self {
        Self::new()
    }
}

impl Toggle {
    /// Off, with the default reducer.
    pub fn new() -> Self {
        Self::from_store(Store::new(ToggleState::default(), ToggleReducer))
    }

    /// Off, with a consumer-supplied reducer.
    pub fn with_reducer<R>(reducer: R) -> Self
    where
        R: Reducer<ToggleState, ToggleAction> + 'static,
    {
        Self::from_store(Store::with_shared_reducer(
            ToggleState::default(),
            shared(reducer),
        ))
    }

    /// Wrap an existing store.
    pub fn from_store(store: Store<ToggleState, ToggleAction>) -> Self {
        Self { store }
    }

    /// Current state.
    pub fn state(&self) -> ToggleState {
        *self.store.state()
    }

    pub fn is_on(&self) -> bool {
        self.store.state().on
    }

    /// Apply the active reducer to the current state and `action`.
    pub fn dispatch(&mut self, action: impl Into<ToggleAction>) -> Result<ToggleState, ReducerError> {
        self.store.dispatch(action.into()).copied()
    }

    pub fn toggle(&mut self) -> Result<ToggleState, ReducerError> {
        self.dispatch(ActionKind::Toggle)
    }

    pub fn set_on(&mut self) -> Result<ToggleState, ReducerError> {
        self.dispatch(ActionKind::SetOn)
    }

    pub fn set_off(&mut self) -> Result<ToggleState, ReducerError> {
        self.dispatch(ActionKind::SetOff)
    }

    /// Return to the initial state without consulting the reducer.
    pub fn reset(&mut self) -> ToggleState {
        *self.store.reset()
    }

    /// Run `listener` with the new state after every adopted dispatch.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ToggleState) + Send + Sync + 'static,
    {
        self.store.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.store.unsubscribe(id)
    }

    pub fn history(&self) -> &StateHistory<ToggleState, ToggleAction> {
        self.store.history()
    }

    pub fn store(&self) -> &Store<ToggleState, ToggleAction> {
        &self.store
    }

    pub fn into_store(self) -> Store<ToggleState, ToggleAction> {
        self.store
    }

    /// Snapshot state and history.
    pub fn checkpoint(&self) -> Checkpoint<ToggleState, ToggleAction> {
        Checkpoint::capture(&self.store)
    }

    /// Rebuild a toggle from a checkpoint, driven by `reducer`.
    pub fn restore<R>(
        checkpoint: Checkpoint<ToggleState, ToggleAction>,
        reducer: R,
    ) -> Result<Self, CheckpointError>
    where
        R: Reducer<ToggleState, ToggleAction> + 'static,
    {
        checkpoint.restore(reducer).map(Self::from_store)
    }
}
