//! Checkpoint and restore for stores.
//!
//! A checkpoint captures everything about a store except its reducer:
//! the initial and current state, the transition history and bookkeeping.
//! Reducers are code, so restoring takes the reducer as an argument.
//!
//! Two encodings are supported: JSON for readability and bincode for
//! compactness.

use crate::core::{Action, State, StateHistory};
use crate::reducer::{shared, Reducer};
use crate::store::{Store, StoreMetadata};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a store.
/// Does NOT include the reducer (not serializable).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, A: Action> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State the store was created in
    pub initial_state: S,

    /// State at capture time
    pub current_state: S,

    /// Recorded transitions
    pub history: StateHistory<S, A>,

    /// Store bookkeeping
    pub metadata: StoreMetadata,
}

impl<S: State + 'static, A: Action + 'static> Checkpoint<S, A> {
    /// Snapshot a store.
    pub fn capture(store: &Store<S, A>) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state: store.initial_state().clone(),
            current_state: store.state().clone(),
            history: store.history().clone(),
            metadata: store.metadata().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        serde_json::from_str(json).map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))
    }

    /// Check the checkpoint for consistency, accumulating ALL problems.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<CheckpointError>> {
        let version_check = if self.version == CHECKPOINT_VERSION {
            Validation::success(())
        } else {
            Validation::fail(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            })
        };
        let mut checks: Vec<Validation<(), NonEmptyVec<CheckpointError>>> = vec![version_check];

        if let Some(last) = self.history.last() {
            checks.push(if last.to == self.current_state {
                Validation::success(())
            } else {
                Validation::fail(CheckpointError::HistoryMismatch {
                    history: last.to.name().to_string(),
                    current: self.current_state.name().to_string(),
                })
            });
        }

        for pair in self.history.transitions().windows(2) {
            if pair[0].to != pair[1].from {
                checks.push(Validation::fail(CheckpointError::BrokenHistory {
                    sequence: pair[1].sequence,
                }));
            }
        }

        Validation::all_vec(checks).map(|_| ())
    }

    /// Rebuild a store from this checkpoint, driven by `reducer`.
    pub fn restore<R>(self, reducer: R) -> Result<Store<S, A>, CheckpointError>
    where
        R: Reducer<S, A> + 'static,
    {
        if let Validation::Failure(errors) = self.validate() {
            let mut errors: Vec<CheckpointError> = errors.iter().cloned().collect();
            return Err(if errors.len() == 1 {
                errors.remove(0)
            } else {
                CheckpointError::ValidationFailed(
                    errors
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join("; "),
                )
            });
        }

        tracing::info!(
            checkpoint = %self.id,
            state = self.current_state.name(),
            transitions = self.history.len(),
            "restoring store from checkpoint"
        );

        Ok(Store::from_parts(
            self.initial_state,
            self.current_state,
            self.history,
            self.metadata,
            shared(reducer),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActionKind, StateTransition, ToggleAction, ToggleState};
    use crate::reducer::{toggle_reducer, ToggleReducer};

    fn busy_store() -> Store<ToggleState, ToggleAction> {
        let mut store = Store::new(ToggleState::default(), ToggleReducer);
        store.dispatch(ToggleAction::toggle()).unwrap();
        store.dispatch(ToggleAction::toggle()).unwrap();
        store.dispatch(ToggleAction::set_on()).unwrap();
        store
    }

    #[test]
    fn capture_copies_store_contents() {
        let store = busy_store();
        let checkpoint = Checkpoint::capture(&store);

        assert_eq!(checkpoint.version, CHECKPOINT_VERSION);
        assert_eq!(checkpoint.current_state, ToggleState::switched_on());
        assert_eq!(checkpoint.initial_state, ToggleState::switched_off());
        assert_eq!(checkpoint.history.len(), 3);
        assert_eq!(checkpoint.metadata.dispatch_count, 3);
        assert!(uuid::Uuid::parse_str(&checkpoint.id).is_ok());
    }

    #[test]
    fn json_round_trip() {
        let checkpoint = Checkpoint::capture(&busy_store());

        let json = checkpoint.to_json().unwrap();
        let decoded = Checkpoint::<ToggleState, ToggleAction>::from_json(&json).unwrap();

        assert_eq!(decoded, checkpoint);
    }

    #[test]
    fn custom_kinds_with_reserved_names_survive_round_trip() {
        let lenient = |state: &ToggleState, action: &ToggleAction| match &action.kind {
            ActionKind::Custom(_) => Ok(*state),
            _ => toggle_reducer(state, action),
        };
        let mut store = Store::new(ToggleState::default(), lenient);
        store
            .dispatch(ToggleAction::new(ActionKind::Custom("on".to_string())))
            .unwrap();
        let checkpoint = Checkpoint::capture(&store);

        let from_json =
            Checkpoint::<ToggleState, ToggleAction>::from_json(&checkpoint.to_json().unwrap())
                .unwrap();
        let from_bytes =
            Checkpoint::<ToggleState, ToggleAction>::from_bytes(&checkpoint.to_bytes().unwrap())
                .unwrap();

        assert_eq!(from_json, checkpoint);
        assert_eq!(from_bytes, checkpoint);
        assert_eq!(
            from_json.history.transitions()[0].action.kind,
            ActionKind::Custom("on".to_string())
        );
    }

    #[test]
    fn binary_round_trip() {
        let checkpoint = Checkpoint::capture(&busy_store());

        let bytes = checkpoint.to_bytes().unwrap();
        let decoded = Checkpoint::<ToggleState, ToggleAction>::from_bytes(&bytes).unwrap();

        assert_eq!(decoded, checkpoint);
    }

    #[test]
    fn garbage_input_fails_to_decode() {
        assert!(matches!(
            Checkpoint::<ToggleState, ToggleAction>::from_json("{not json"),
            Err(CheckpointError::DeserializationFailed(_))
        ));
        assert!(matches!(
            Checkpoint::<ToggleState, ToggleAction>::from_bytes(&[1, 2, 3]),
            Err(CheckpointError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn restore_continues_where_it_left_off() {
        let checkpoint = Checkpoint::capture(&busy_store());
        let mut store = checkpoint.restore(toggle_reducer).unwrap();

        assert_eq!(store.state(), &ToggleState::switched_on());
        store.dispatch(ToggleAction::toggle()).unwrap();

        assert_eq!(store.state(), &ToggleState::switched_off());
        assert_eq!(store.metadata().dispatch_count, 4);
        assert_eq!(store.history().last().map(|t| t.sequence), Some(4));
        assert_eq!(store.reset(), &ToggleState::switched_off());
    }

    #[test]
    fn restore_rejects_unsupported_version() {
        let mut checkpoint = Checkpoint::capture(&busy_store());
        checkpoint.version = 99;

        let result = checkpoint.restore(ToggleReducer);

        assert_eq!(
            result.unwrap_err(),
            CheckpointError::UnsupportedVersion {
                found: 99,
                supported: CHECKPOINT_VERSION
            }
        );
    }

    #[test]
    fn validation_accumulates_all_problems() {
        let mut checkpoint = Checkpoint::capture(&busy_store());
        checkpoint.version = 2;
        checkpoint.current_state = ToggleState::switched_off();
        checkpoint.history = checkpoint.history.record(StateTransition {
            from: ToggleState::switched_off(),
            to: ToggleState::switched_on(),
            action: ToggleAction::toggle(),
            timestamp: Utc::now(),
            sequence: 4,
        });

        match checkpoint.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CheckpointError::UnsupportedVersion { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CheckpointError::HistoryMismatch { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, CheckpointError::BrokenHistory { sequence: 4 })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }

        assert!(matches!(
            checkpoint.restore(ToggleReducer),
            Err(CheckpointError::ValidationFailed(_))
        ));
    }

    #[test]
    fn empty_store_checkpoint_is_valid() {
        let store: Store<ToggleState, ToggleAction> =
            Store::new(ToggleState::switched_on(), ToggleReducer);
        let checkpoint = Checkpoint::capture(&store);

        assert!(checkpoint.validate().is_success());
        let restored = checkpoint.restore(ToggleReducer).unwrap();
        assert!(restored.history().is_empty());
        assert_eq!(restored.state(), &ToggleState::switched_on());
    }
}
