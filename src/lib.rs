//! Flipswitch: the state reducer pattern for a toggle switch
//!
//! A [`Toggle`] holds one boolean state and changes it only in response to
//! named actions. It never decides what an action means: every dispatch is
//! handed to a reducer, and whatever the reducer returns becomes the new
//! state. The crate ships a default reducer and lets the consumer replace it
//! or, more usefully, wrap it: call the default, look at the action and any
//! context the consumer owns, and patch the result.
//!
//! # Core Concepts
//!
//! - **State / Action**: immutable values ([`core`])
//! - **Reducer**: the pluggable transition function ([`reducer`])
//! - **Store**: the container that adopts reducer output ([`store`])
//! - **Toggle**: the consumer-facing handle ([`toggle`], [`builder`])
//!
//! # Example
//!
//! ```rust
//! use flipswitch::builder::{initialize, ToggleOptions};
//! use flipswitch::core::{ActionKind, ToggleAction, ToggleState};
//! use flipswitch::reducer::{toggle_reducer, ReducerError};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! // The click counter belongs to the consumer, not to the toggle.
//! let clicks = Arc::new(AtomicUsize::new(0));
//! let seen = Arc::clone(&clicks);
//!
//! let mut toggle = initialize(ToggleOptions::with_reducer(
//!     move |state: &ToggleState, action: &ToggleAction| -> Result<ToggleState, ReducerError> {
//!         let next = toggle_reducer(state, action)?;
//!         let too_many_clicks = seen.load(Ordering::SeqCst) >= 4;
//!         if too_many_clicks && action.kind == ActionKind::Toggle {
//!             return Ok(ToggleState { on: state.on });
//!         }
//!         Ok(next)
//!     },
//! ));
//!
//! for _ in 0..4 {
//!     toggle.toggle().unwrap();
//!     clicks.fetch_add(1, Ordering::SeqCst);
//! }
//! assert!(!toggle.is_on());
//!
//! toggle.toggle().unwrap();
//! assert!(!toggle.is_on()); // ignored
//!
//! toggle.set_on().unwrap();
//! assert!(toggle.is_on()); // still honoured
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod reducer;
pub mod store;
pub mod toggle;

// Re-export commonly used types
pub use crate::builder::{initialize, ToggleBuilder, ToggleOptions};
pub use crate::core::{Action, ActionKind, Guard, State, ToggleAction, ToggleState};
pub use crate::reducer::{toggle_reducer, Override, Reducer, ReducerError, ToggleReducer};
pub use crate::store::Store;
pub use crate::toggle::Toggle;
