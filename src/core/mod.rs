//! Core value types for reducer-driven state.
//!
//! This module contains the pure pieces of the crate:
//! - States and actions via the `State` and `Action` traits, plus the
//!   concrete toggle types
//! - Guard predicates over pending transitions
//! - Immutable history tracking
//!
//! Nothing in this module performs side effects.

mod action;
mod guard;
mod history;
mod state;

pub use action::{Action, ActionKind, ToggleAction};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::{State, ToggleState};
