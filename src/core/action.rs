//! Actions: discrete, named requests to change state.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

/// Trait for values that can be dispatched to a [`Store`](crate::store::Store).
///
/// Actions are recorded in the transition history and checkpoints, so they
/// share the serialization requirements of [`State`](crate::core::State).
pub trait Action:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Short label for display and logging.
    fn name(&self) -> &str;
}

/// Discriminator for toggle actions.
///
/// `Toggle`, `SetOn` and `SetOff` are the kinds the default reducer
/// understands. `Custom` carries any other kind a consumer chooses to
/// dispatch; only an override reducer can give it meaning.
///
/// Built-in kinds serialize by their stable name: `"toggle"`, `"on"`,
/// `"off"`. Custom kinds serialize as `"custom:<name>"`, so a `Custom` that
/// happens to carry a stable name decodes back to the same `Custom`. A bare
/// unknown name still decodes as `Custom`.
///
/// # Example
///
/// ```rust
/// use flipswitch::core::ActionKind;
///
/// assert_eq!(ActionKind::from("toggle"), ActionKind::Toggle);
/// assert_eq!(ActionKind::SetOn.as_str(), "on");
/// assert!(!ActionKind::from("reset").is_recognized());
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub enum ActionKind {
    Toggle,
    SetOn,
    SetOff,
    Custom(String),
}

const CUSTOM_PREFIX: &str = "custom:";

impl ActionKind {
    pub const TOGGLE: &'static str = "toggle";
    pub const ON: &'static str = "on";
    pub const OFF: &'static str = "off";

    /// Stable name of this kind.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Toggle => Self::TOGGLE,
            Self::SetOn => Self::ON,
            Self::SetOff => Self::OFF,
            Self::Custom(name) => name,
        }
    }

    /// True for the kinds the default reducer handles.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }
}

impl From<&str> for ActionKind {
    fn from(name: &str) -> Self {
        match name {
            Self::TOGGLE => Self::Toggle,
            Self::ON => Self::SetOn,
            Self::OFF => Self::SetOff,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl From<String> for ActionKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            Self::TOGGLE | Self::ON | Self::OFF => Self::from(name.as_str()),
            _ => Self::Custom(name),
        }
    }
}

impl From<ActionKind> for String {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Custom(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for ActionKind {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(name))
    }
}

impl Serialize for ActionKind {
    fn serialize<Ser: Serializer>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error> {
        match self {
            Self::Custom(name) => serializer.serialize_str(&format!("{CUSTOM_PREFIX}{name}")),
            known => serializer.serialize_str(known.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for ActionKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = String::deserialize(deserializer)?;
        Ok(match wire.strip_prefix(CUSTOM_PREFIX) {
            Some(name) => Self::Custom(name.to_string()),
            None => Self::from(wire),
        })
    }
}

impl Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An action for a toggle switch. Carries no payload beyond its kind.
///
/// # Example
///
/// ```rust
/// use flipswitch::core::{Action, ActionKind, ToggleAction};
///
/// let action = ToggleAction::toggle();
/// assert_eq!(action.kind, ActionKind::Toggle);
/// assert_eq!(action.name(), "toggle");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct ToggleAction {
    pub kind: ActionKind,
}

impl ToggleAction {
    pub fn new(kind: ActionKind) -> Self {
        Self { kind }
    }

    pub fn toggle() -> Self {
        Self::new(ActionKind::Toggle)
    }

    pub fn set_on() -> Self {
        Self::new(ActionKind::SetOn)
    }

    pub fn set_off() -> Self {
        Self::new(ActionKind::SetOff)
    }

    /// An action of a consumer-defined kind.
    ///
    /// Passing one of the stable names yields the matching built-in kind.
    pub fn custom(name: impl Into<String>) -> Self {
        Self::new(ActionKind::from(name.into()))
    }
}

impl From<ActionKind> for ToggleAction {
    fn from(kind: ActionKind) -> Self {
        Self::new(kind)
    }
}

impl Action for ToggleAction {
    fn name(&self) -> &str {
        self.kind.as_str()
    }
}
