//! The built-in toggle reducer.

use super::error::ReducerError;
use super::Reducer;
use crate::core::{ActionKind, ToggleAction, ToggleState};

/// Default transition function for a toggle switch.
///
/// - `Toggle` negates `on`
/// - `SetOn` sets `on` to `true`
/// - `SetOff` sets `on` to `false`
/// - any other kind is an error, never silently ignored
///
/// Overrides call this to get the natural next state and then adjust it.
///
/// # Example
///
/// ```rust
/// use flipswitch::core::{ToggleAction, ToggleState};
/// use flipswitch::reducer::{toggle_reducer, ReducerError};
///
/// let off = ToggleState::default();
/// assert_eq!(toggle_reducer(&off, &ToggleAction::toggle()), Ok(ToggleState::switched_on()));
/// assert_eq!(
///     toggle_reducer(&off, &ToggleAction::custom("blink")),
///     Err(ReducerError::unknown("blink"))
/// );
/// ```
pub fn toggle_reducer(
    state: &ToggleState,
    action: &ToggleAction,
) -> Result<ToggleState, ReducerError> {
    match &action.kind {
        ActionKind::Toggle => Ok(state.flipped()),
        ActionKind::SetOn => Ok(ToggleState::switched_on()),
        ActionKind::SetOff => Ok(ToggleState::switched_off()),
        ActionKind::Custom(kind) => Err(ReducerError::unknown(kind.as_str())),
    }
}

/// [`toggle_reducer`] as a nameable value.
///
/// Useful where a reducer value is wanted rather than a function, as in
/// `Override::wrap(ToggleReducer)`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleReducer;

impl Reducer<ToggleState, ToggleAction> for ToggleReducer {
    fn reduce(
        &self,
        state: &ToggleState,
        action: &ToggleAction,
    ) -> Result<ToggleState, ReducerError> {
        toggle_reducer(state, action)
    }
}
