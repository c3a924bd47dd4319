//! Reducer error types.

use thiserror::Error;

/// Errors a reducer can return instead of a next state.
///
/// These indicate integration bugs (an action the reducer was never meant
/// to see), not conditions worth retrying.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ReducerError {
    /// The reducer has no branch for this action kind
    #[error("Unhandled action kind '{kind}'")]
    UnknownAction { kind: String },

    /// A custom reducer deliberately refused the action
    #[error("Action '{action}' rejected: {reason}")]
    Rejected { action: String, reason: String },
}

impl ReducerError {
    pub fn unknown(kind: impl Into<String>) -> Self {
        Self::UnknownAction { kind: kind.into() }
    }

    pub fn rejected(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            action: action.into(),
            reason: reason.into(),
        }
    }
}
