//! Options accepted by [`initialize`](crate::builder::initialize).

use crate::core::{ToggleAction, ToggleState};
use crate::reducer::{shared, Reducer, SharedReducer};
use std::fmt;

/// Options for [`initialize`](crate::builder::initialize).
///
/// Recognises exactly one setting: the reducer. When absent, the default
/// toggle reducer is used.
#[derive(Clone, Default)]
pub struct ToggleOptions {
    pub reducer: Option<SharedReducer<ToggleState, ToggleAction>>,
}

impl ToggleOptions {
    /// Options that install `reducer` in place of the default.
    pub fn with_reducer<R>(reducer: R) -> Self
    where
        R: Reducer<ToggleState, ToggleAction> + 'static,
    {
        Self {
            reducer: Some(shared(reducer)),
        }
    }
}

impl fmt::Debug for ToggleOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToggleOptions")
            .field("custom_reducer", &self.reducer.is_some())
            .finish()
    }
}
