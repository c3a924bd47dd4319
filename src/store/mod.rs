//! Reducer-driven state container.
//!
//! The store is an indirection layer. It owns one state value, forwards
//! every dispatched action to its reducer, and adopts the reducer's output
//! without looking at the action itself. Everything a caller might want to
//! customise about transitions lives in the reducer.
//!
//! Dispatch takes `&mut self`, so a reducer or listener cannot dispatch
//! back into the store that is calling it.

mod container;

pub use container::{Listener, Store, StoreMetadata, SubscriptionId};
