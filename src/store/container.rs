//! Container that adopts whatever its reducer returns.

use crate::core::{Action, State, StateHistory, StateTransition};
use crate::reducer::{shared, Reducer, ReducerError, SharedReducer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Callback run with the new state after every adopted dispatch.
pub type Listener<S> = Box<dyn Fn(&S) + Send + Sync>;

/// Handle returned by [`Store::subscribe`], used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Bookkeeping kept alongside the state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// Last adopted dispatch or reset
    pub updated_at: DateTime<Utc>,

    /// Number of adopted dispatches since creation
    pub dispatch_count: u64,
}

impl Default for StoreMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            dispatch_count: 0,
        }
    }
}

/// Holds one state value that changes only through its reducer.
///
/// The store never inspects actions. `dispatch` hands `(state, action)` to
/// the reducer and adopts the result as is; if the reducer fails, the error
/// is returned and the state stays where it was.
pub struct Store<S: State + 'static, A: Action + 'static> {
    initial: S,
    current: S,
    reducer: SharedReducer<S, A>,
    history: StateHistory<S, A>,
    record_history: bool,
    metadata: StoreMetadata,
    listeners: Vec<(SubscriptionId, Listener<S>)>,
    next_subscription: u64,
}

impl<S: State + 'static, A: Action + 'static> Store<S, A> {
    /// Create a store in `initial`, driven by `reducer`.
    pub fn new<R>(initial: S, reducer: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self::with_shared_reducer(initial, shared(reducer))
    }

    /// Create a store around an already type-erased reducer.
    pub fn with_shared_reducer(initial: S, reducer: SharedReducer<S, A>) -> Self {
        Self {
            current: initial.clone(),
            initial,
            reducer,
            history: StateHistory::new(),
            record_history: true,
            metadata: StoreMetadata::default(),
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Keep at most `limit` transitions in the history.
    ///
    /// A limit of 0 retains nothing: the store stops recording, as if
    /// [`record_history`](Self::record_history) were `false`.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history = StateHistory::with_limit(limit);
        self
    }

    /// Enable or disable transition recording.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    pub(crate) fn from_parts(
        initial: S,
        current: S,
        history: StateHistory<S, A>,
        metadata: StoreMetadata,
        reducer: SharedReducer<S, A>,
    ) -> Self {
        Self {
            initial,
            current,
            reducer,
            history,
            record_history: true,
            metadata,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Current state (pure)
    pub fn state(&self) -> &S {
        &self.current
    }

    /// State the store was created in (pure)
    pub fn initial_state(&self) -> &S {
        &self.initial
    }

    /// Transition history (pure)
    pub fn history(&self) -> &StateHistory<S, A> {
        &self.history
    }

    /// Store bookkeeping (pure)
    pub fn metadata(&self) -> &StoreMetadata {
        &self.metadata
    }

    /// Whether transitions are being recorded.
    pub fn is_recording(&self) -> bool {
        self.record_history && self.history.limit() != Some(0)
    }

    /// The active reducer.
    pub fn reducer(&self) -> &SharedReducer<S, A> {
        &self.reducer
    }

    /// Apply the active reducer to `(state, action)` and adopt the result.
    ///
    /// Returns the new state, or the reducer's error with the state left
    /// unchanged.
    pub fn dispatch(&mut self, action: A) -> Result<&S, ReducerError> {
        let next = match self.reducer.reduce(&self.current, &action) {
            Ok(next) => next,
            Err(err) => {
                tracing::warn!(
                    action = action.name(),
                    state = self.current.name(),
                    error = %err,
                    "reducer rejected action"
                );
                return Err(err);
            }
        };

        self.metadata.dispatch_count += 1;
        self.metadata.updated_at = Utc::now();
        let previous = std::mem::replace(&mut self.current, next);

        tracing::debug!(
            action = action.name(),
            from = previous.name(),
            to = self.current.name(),
            sequence = self.metadata.dispatch_count,
            "transition adopted"
        );

        if self.is_recording() {
            let transition = StateTransition {
                from: previous,
                to: self.current.clone(),
                action,
                timestamp: self.metadata.updated_at,
                sequence: self.metadata.dispatch_count,
            };
            self.history.push(transition);
        }

        self.notify();
        Ok(&self.current)
    }

    /// Return to the initial state.
    ///
    /// Clears the history, notifies listeners, and does not consult the
    /// reducer.
    pub fn reset(&mut self) -> &S {
        self.current = self.initial.clone();
        self.history = match self.history.limit() {
            Some(limit) => StateHistory::with_limit(limit),
            None => StateHistory::new(),
        };
        self.metadata.updated_at = Utc::now();

        tracing::info!(state = self.current.name(), "store reset");

        self.notify();
        &self.current
    }

    /// Register a listener run after every adopted dispatch and reset.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns `false` if it was already removed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&self) {
        for (_, listener) in &self.listeners {
            listener(&self.current);
        }
    }
}

impl<S: State + 'static, A: Action + 'static> fmt::Debug for Store<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Store")
            .field("initial", &self.initial)
            .field("current", &self.current)
            .field("history_len", &self.history.len())
            .field("metadata", &self.metadata)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
