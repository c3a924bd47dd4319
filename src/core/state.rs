//! State values held by a reducer-driven container.
//!
//! States are plain immutable values. A reducer never edits the state it is
//! handed; it returns a replacement which the container adopts.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values a [`Store`](crate::store::Store) can hold.
///
/// # Required Traits
///
/// - `Clone`: reducers build the next state from a borrowed current state
/// - `PartialEq`: listeners and tests compare states
/// - `Debug`: states show up in logs
/// - `Serialize` + `Deserialize`: states can be checkpointed
///
/// # Example
///
/// ```rust
/// use flipswitch::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Counter {
///     count: u32,
/// }
///
/// impl State for Counter {
///     fn name(&self) -> &str {
///         "Counter"
///     }
/// }
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short label for display and logging.
    fn name(&self) -> &str;
}

/// State of a toggle switch.
///
/// The switch has exactly one attribute. New values are produced by a
/// reducer on every transition; the struct is never mutated in place by
/// the container.
///
/// # Example
///
/// ```rust
/// use flipswitch::core::{State, ToggleState};
///
/// let state = ToggleState::default();
/// assert!(!state.on);
/// assert_eq!(state.name(), "off");
///
/// let flipped = state.flipped();
/// assert!(flipped.on);
/// assert!(!state.on); // original untouched
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
pub struct ToggleState {
    /// Whether the switch is on
    pub on: bool,
}

impl ToggleState {
    /// Create a state with the given value.
    pub const fn new(on: bool) -> Self {
        Self { on }
    }

    /// The switched-on state.
    pub const fn switched_on() -> Self {
        Self { on: true }
    }

    /// The switched-off state.
    pub const fn switched_off() -> Self {
        Self { on: false }
    }

    /// Return a new state with `on` negated.
    pub const fn flipped(self) -> Self {
        Self { on: !self.on }
    }
}

impl From<bool> for ToggleState {
    fn from(on: bool) -> Self {
        Self::new(on)
    }
}

impl State for ToggleState {
    fn name(&self) -> &str {
        if self.on {
            "on"
        } else {
            "off"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_off() {
        assert_eq!(ToggleState::default(), ToggleState::switched_off());
        assert!(!ToggleState::default().on);
    }

    #[test]
    fn name_reflects_value() {
        assert_eq!(ToggleState::switched_on().name(), "on");
        assert_eq!(ToggleState::switched_off().name(), "off");
    }

    #[test]
    fn flipped_returns_new_value() {
        let state = ToggleState::new(false);
        let flipped = state.flipped();

        assert!(flipped.on);
        assert!(!state.on);
        assert_eq!(flipped.flipped(), state);
    }

    #[test]
    fn from_bool_builds_state() {
        assert_eq!(ToggleState::from(true), ToggleState::switched_on());
        assert_eq!(ToggleState::from(false), ToggleState::switched_off());
    }

    #[test]
    fn state_serializes_with_on_field() {
        let json = serde_json::to_string(&ToggleState::switched_on()).unwrap();
        assert_eq!(json, r#"{"on":true}"#);

        let back: ToggleState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ToggleState::switched_on());
    }
}
