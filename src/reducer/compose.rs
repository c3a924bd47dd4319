//! Override reducers built by delegation.
//!
//! An [`Override`] runs an inner reducer to get the natural next state and
//! then applies an ordered list of patch rules to it. Each rule fires only
//! when its [`Guard`] passes for the `(state, action)` being reduced.

use super::error::ReducerError;
use super::{shared, Reducer, SharedReducer};
use crate::core::{Action, Guard, State};
use std::sync::Arc;

/// Adjustment applied to a natural next state.
///
/// Receives the state the reducer was handed and the natural next state,
/// and returns the state to adopt.
pub type Patch<S> = Arc<dyn Fn(&S, S) -> S + Send + Sync>;

/// Patch that discards the natural result and keeps the previous state.
pub fn suppress<S: State>(previous: &S, _natural: S) -> S {
    previous.clone()
}

struct Rule<S: State, A: Action> {
    guard: Guard<S, A>,
    patch: Patch<S>,
}

impl<S: State, A: Action> Clone for Rule<S, A> {
    fn clone(&self) -> Self {
        Self {
            guard: self.guard.clone(),
            patch: Arc::clone(&self.patch),
        }
    }
}

/// Reducer that delegates to an inner reducer and patches its output.
///
/// Errors from the inner reducer propagate unchanged; patch rules only see
/// successful results. Rules apply in the order they were added, each to
/// the output of the previous one.
///
/// # Example
///
/// ```rust
/// use flipswitch::core::{ActionKind, Guard, ToggleAction, ToggleState};
/// use flipswitch::reducer::{Override, Reducer, ToggleReducer};
///
/// // Toggles are ignored while the switch is on.
/// let sticky = Override::wrap(ToggleReducer).suppress_when(
///     Guard::new(|s: &ToggleState, a: &ToggleAction| s.on && a.kind == ActionKind::Toggle),
/// );
///
/// let on = ToggleState::switched_on();
/// assert_eq!(sticky.reduce(&on, &ToggleAction::toggle()), Ok(on));
/// assert_eq!(
///     sticky.reduce(&on, &ToggleAction::set_off()),
///     Ok(ToggleState::switched_off())
/// );
/// ```
pub struct Override<S: State, A: Action> {
    inner: SharedReducer<S, A>,
    rules: Vec<Rule<S, A>>,
}

impl<S: State + 'static, A: Action + 'static> Override<S, A> {
    /// Wrap a reducer with no rules. Behaves exactly like `inner` until
    /// rules are added.
    pub fn wrap<R>(inner: R) -> Self
    where
        R: Reducer<S, A> + 'static,
    {
        Self {
            inner: shared(inner),
            rules: Vec::new(),
        }
    }

    /// Apply `patch` to the natural result whenever `guard` passes.
    pub fn patch_when<P>(mut self, guard: Guard<S, A>, patch: P) -> Self
    where
        P: Fn(&S, S) -> S + Send + Sync + 'static,
    {
        self.rules.push(Rule {
            guard,
            patch: Arc::new(patch),
        });
        self
    }

    /// Keep the previous state whenever `guard` passes.
    pub fn suppress_when(self, guard: Guard<S, A>) -> Self {
        self.patch_when(guard, suppress::<S>)
    }

    /// Number of patch rules.
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

impl<S: State, A: Action> Reducer<S, A> for Override<S, A> {
    fn reduce(&self, state: &S, action: &A) -> Result<S, ReducerError> {
        let natural = self.inner.reduce(state, action)?;
        let next = self.rules.iter().fold(natural, |next, rule| {
            if rule.guard.check(state, action) {
                (rule.patch)(state, next)
            } else {
                next
            }
        });
        Ok(next)
    }
}

impl<S: State, A: Action> Clone for Override<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            rules: self.rules.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ActionKind, ToggleAction, ToggleState};
    use crate::reducer::{toggle_reducer, ToggleReducer};
    use std::sync::atomic::{AtomicBool, Ordering};

    const OFF: ToggleState = ToggleState::switched_off();
    const ON: ToggleState = ToggleState::switched_on();

    fn is_toggle() -> Guard<ToggleState, ToggleAction> {
        Guard::action(|a: &ToggleAction| a.kind == ActionKind::Toggle)
    }

    #[test]
    fn wrap_without_rules_matches_inner() {
        let reducer = Override::wrap(ToggleReducer);

        assert_eq!(reducer.rule_count(), 0);
        assert_eq!(reducer.reduce(&OFF, &ToggleAction::toggle()), Ok(ON));
        assert_eq!(reducer.reduce(&ON, &ToggleAction::set_off()), Ok(OFF));
    }

    #[test]
    fn suppress_when_keeps_previous_state() {
        let reducer = Override::wrap(ToggleReducer).suppress_when(is_toggle());

        assert_eq!(reducer.reduce(&OFF, &ToggleAction::toggle()), Ok(OFF));
        assert_eq!(reducer.reduce(&ON, &ToggleAction::toggle()), Ok(ON));
        assert_eq!(reducer.reduce(&OFF, &ToggleAction::set_on()), Ok(ON));
    }

    #[test]
    fn guard_reads_consumer_flag() {
        let locked = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&locked);
        let reducer = Override::wrap(ToggleReducer)
            .suppress_when(is_toggle().and(Guard::state(move |_| flag.load(Ordering::SeqCst))));

        assert_eq!(reducer.reduce(&OFF, &ToggleAction::toggle()), Ok(ON));

        locked.store(true, Ordering::SeqCst);
        assert_eq!(reducer.reduce(&OFF, &ToggleAction::toggle()), Ok(OFF));
        assert_eq!(reducer.reduce(&OFF, &ToggleAction::set_on()), Ok(ON));
    }

    #[test]
    fn rules_apply_in_order() {
        // Force on, then flip: every toggle lands on off.
        let reducer = Override::wrap(toggle_reducer)
            .patch_when(is_toggle(), |_: &ToggleState, _: ToggleState| {
                ToggleState::switched_on()
            })
            .patch_when(is_toggle(), |_, next: ToggleState| next.flipped());

        assert_eq!(reducer.rule_count(), 2);
        assert_eq!(reducer.reduce(&OFF, &ToggleAction::toggle()), Ok(OFF));
        assert_eq!(reducer.reduce(&ON, &ToggleAction::toggle()), Ok(OFF));
    }

    #[test]
    fn inner_errors_propagate_before_rules() {
        let reducer = Override::wrap(ToggleReducer)
            .patch_when(Guard::always(), |_, _| ToggleState::switched_on());

        assert_eq!(
            reducer.reduce(&OFF, &ToggleAction::custom("reset")),
            Err(ReducerError::unknown("reset"))
        );
    }

    #[test]
    fn override_can_handle_custom_kinds_itself() {
        let reset = |state: &ToggleState, action: &ToggleAction| match &action.kind {
            ActionKind::Custom(name) if name == "reset" => Ok(OFF),
            _ => toggle_reducer(state, action),
        };
        let reducer = Override::wrap(reset);

        assert_eq!(reducer.reduce(&ON, &ToggleAction::custom("reset")), Ok(OFF));
        assert_eq!(reducer.reduce(&OFF, &ToggleAction::toggle()), Ok(ON));
    }

    #[test]
    fn clone_shares_rules() {
        let reducer = Override::wrap(ToggleReducer).suppress_when(is_toggle());
        let cloned = reducer.clone();

        assert_eq!(cloned.rule_count(), 1);
        assert_eq!(cloned.reduce(&ON, &ToggleAction::toggle()), Ok(ON));
    }
}
