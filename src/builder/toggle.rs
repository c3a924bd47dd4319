//! Builder for constructing toggles.

use crate::config::{ConfigError, ToggleConfig};
use crate::core::{ToggleAction, ToggleState};
use crate::reducer::{shared, Reducer, SharedReducer, ToggleReducer};
use crate::store::Store;
use crate::toggle::Toggle;

/// Builder for constructing toggles with a fluent API.
///
/// Settings that can live in a config file go through [`ToggleConfig`];
/// the reducer is always supplied in code.
#[derive(Default)]
pub struct ToggleBuilder {
    config: ToggleConfig,
    reducer: Option<SharedReducer<ToggleState, ToggleAction>>,
}

impl ToggleBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: ToggleConfig) -> Self {
        Self {
            config,
            reducer: None,
        }
    }

    /// Set whether the switch starts on (default off).
    pub fn initial_on(mut self, on: bool) -> Self {
        self.config.initial_on = on;
        self
    }

    /// Keep at most `limit` transitions.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = Some(limit);
        self
    }

    /// Enable or disable transition recording.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.config.record_history = enabled;
        self
    }

    /// Replace the default reducer.
    pub fn reducer<R>(mut self, reducer: R) -> Self
    where
        R: Reducer<ToggleState, ToggleAction> + 'static,
    {
        self.reducer = Some(shared(reducer));
        self
    }

    /// Replace the default reducer with an already shared one.
    pub fn shared_reducer(mut self, reducer: SharedReducer<ToggleState, ToggleAction>) -> Self {
        self.reducer = Some(reducer);
        self
    }

    /// Build the toggle.
    /// Returns an error listing every invalid setting.
    pub fn build(self) -> Result<Toggle, ConfigError> {
        let config = self.config.validated()?;
        let reducer = self.reducer.unwrap_or_else(|| shared(ToggleReducer));

        let mut store = Store::with_shared_reducer(ToggleState::new(config.initial_on), reducer)
            .record_history(config.record_history);
        if let Some(limit) = config.history_limit {
            store = store.history_limit(limit);
        }

        Ok(Toggle::from_store(store))
    }
}
