//! Construction API for toggles.
//!
//! [`initialize`] is the minimal entry point: it takes [`ToggleOptions`],
//! whose only setting is the reducer. [`ToggleBuilder`] additionally covers
//! the initial value and history settings, and can start from a
//! [`ToggleConfig`](crate::config::ToggleConfig).

mod options;
mod toggle;

pub use options::ToggleOptions;
pub use toggle::ToggleBuilder;

use crate::core::ToggleState;
use crate::reducer::ToggleReducer;
use crate::store::Store;
use crate::toggle::Toggle;

/// Create a toggle, starting off, using the reducer in `options` or the
/// default reducer when none is given.
///
/// # Example
///
/// ```
/// use flipswitch::builder::{initialize, ToggleOptions};
/// use flipswitch::core::{ActionKind, ToggleAction, ToggleState};
/// use flipswitch::reducer::{toggle_reducer, ReducerError};
///
/// let mut plain = initialize(ToggleOptions::default());
/// plain.toggle().unwrap();
/// assert!(plain.is_on());
///
/// // Toggling does nothing; explicit on/off still work.
/// let mut stubborn = initialize(ToggleOptions::with_reducer(
///     |state: &ToggleState, action: &ToggleAction| -> Result<ToggleState, ReducerError> {
///         let next = toggle_reducer(state, action)?;
///         if action.kind == ActionKind::Toggle {
///             return Ok(*state);
///         }
///         Ok(next)
///     },
/// ));
/// stubborn.toggle().unwrap();
/// assert!(!stubborn.is_on());
/// stubborn.set_on().unwrap();
/// assert!(stubborn.is_on());
/// ```
pub fn initialize(options: ToggleOptions) -> Toggle {
    let store = match options.reducer {
        Some(reducer) => Store::with_shared_reducer(ToggleState::default(), reducer),
        None => Store::new(ToggleState::default(), ToggleReducer),
    };
    Toggle::from_store(store)
}
