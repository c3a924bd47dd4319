//! Transition functions ("reducers") and their composition.
//!
//! A reducer maps `(state, action)` to the next state. Containers never
//! decide transitions themselves: they hand every action to whichever
//! reducer they were built with and adopt the result.
//!
//! # Key Concepts
//!
//! - **Reducer**: the single-operation strategy trait; closures implement it
//! - **Default reducer**: [`toggle_reducer`] / [`ToggleReducer`], exported so
//!   overrides can delegate to it
//! - **Override**: a reducer that calls an inner reducer and patches the
//!   result under guard conditions
//!
//! # Example
//!
//! ```rust
//! use flipswitch::core::{ActionKind, ToggleAction, ToggleState};
//! use flipswitch::reducer::{toggle_reducer, Reducer, ReducerError};
//!
//! let locked = true;
//! let reducer = move |state: &ToggleState, action: &ToggleAction| -> Result<ToggleState, ReducerError> {
//!     let next = toggle_reducer(state, action)?;
//!     if locked && action.kind == ActionKind::Toggle {
//!         return Ok(ToggleState { on: state.on, ..next });
//!     }
//!     Ok(next)
//! };
//!
//! let off = ToggleState::default();
//! assert_eq!(reducer.reduce(&off, &ToggleAction::toggle()), Ok(off));
//! assert_eq!(reducer.reduce(&off, &ToggleAction::set_on()), Ok(ToggleState::switched_on()));
//! ```

mod compose;
mod default;
mod error;

pub use compose::{suppress, Override, Patch};
pub use default::{toggle_reducer, ToggleReducer};
pub use error::ReducerError;

use crate::core::{Action, State};
use std::sync::Arc;

/// Pure transition function from `(state, action)` to the next state.
///
/// Implementations must not mutate shared resources or dispatch into the
/// container that is calling them.
pub trait Reducer<S: State, A: Action>: Send + Sync {
    fn reduce(&self, state: &S, action: &A) -> Result<S, ReducerError>;
}

impl<S, A, F> Reducer<S, A> for F
where
    S: State,
    A: Action,
    F: Fn(&S, &A) -> Result<S, ReducerError> + Send + Sync,
{
    fn reduce(&self, state: &S, action: &A) -> Result<S, ReducerError> {
        self(state, action)
    }
}

/// Type-erased reducer held by containers.
pub type SharedReducer<S, A> = Arc<dyn Reducer<S, A>>;

/// Erase a reducer's concrete type.
pub fn shared<S, A, R>(reducer: R) -> SharedReducer<S, A>
where
    S: State,
    A: Action,
    R: Reducer<S, A> + 'static,
{
    Arc::new(reducer)
}
