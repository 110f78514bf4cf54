//! State machine that resolves and executes named transitions.

use crate::core::{State, Transition};
use crate::runtime::dispatch::TriggerTable;
use crate::runtime::error::TransitionError;
use crate::runtime::hooks::{HookError, HookPhase, Hooks};
use crate::validation::{ConfigContext, ConfigViolation};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use tracing::{debug, trace};

/// Flat state machine driven by trigger names.
///
/// Configuration methods take `&mut self` and return it, so a machine can be
/// set up in one chain and reconfigured later. Declared states and
/// transitions are ordered and duplicate tolerant: when two transitions share
/// a trigger, the first declared one is the only one ever resolved.
///
/// # Example
///
/// ```rust
/// use statecraft::{StateMachine, Transition};
///
/// let mut machine: StateMachine = StateMachine::new();
/// machine
///     .states(["draft", "review", "published"])
///     .transitions(vec![
///         Transition::new("SUBMIT", "draft", "review"),
///         Transition::new("APPROVE", "review", "published"),
///         Transition::new("REJECT", "review", "draft"),
///     ])
///     .default_state("draft");
///
/// assert_eq!(machine.allowed_transitions(), vec!["SUBMIT"]);
///
/// machine.transition_to("SUBMIT").unwrap();
/// assert_eq!(machine.current_state().unwrap(), "review");
/// assert_eq!(machine.allowed_transitions(), vec!["APPROVE", "REJECT"]);
///
/// machine.fire("approve").unwrap();
/// assert_eq!(machine.current_state().unwrap(), "published");
/// ```
#[derive(Debug)]
pub struct StateMachine<S: State = String> {
    states: Vec<S>,
    transitions: Vec<Transition<S>>,
    default_state: Option<S>,
    current: Option<S>,
    hooks: Hooks<S>,
    dispatch: TriggerTable,
}

impl<S: State> StateMachine<S> {
    /// Create an empty machine with no current state.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            transitions: Vec::new(),
            default_state: None,
            current: None,
            hooks: Hooks::new(),
            dispatch: TriggerTable::new(),
        }
    }

    /// Set the default state and move the machine into it.
    ///
    /// The state is not checked against the declared states.
    pub fn default_state(&mut self, state: impl Into<S>) -> &mut Self {
        let state = state.into();
        self.current = Some(state.clone());
        self.default_state = Some(state);
        self
    }

    /// Replace the declared states.
    pub fn states<I, T>(&mut self, states: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        self.states = states.into_iter().map(Into::into).collect();
        self
    }

    /// Append one declared state. Duplicates are kept.
    pub fn add_state(&mut self, state: impl Into<S>) -> &mut Self {
        self.states.push(state.into());
        self
    }

    /// Replace the declared transitions.
    pub fn transitions(&mut self, transitions: impl IntoIterator<Item = Transition<S>>) -> &mut Self {
        self.transitions = transitions.into_iter().collect();
        self.dispatch
            .rebuild(self.transitions.iter().map(|t| t.trigger.as_str()));
        self
    }

    /// Append one transition. Trigger uniqueness is not checked.
    pub fn add_transition(&mut self, transition: Transition<S>) -> &mut Self {
        self.dispatch.insert(&transition.trigger);
        self.transitions.push(transition);
        self
    }

    /// Set the hook run before every state change, replacing any previous one.
    pub fn before_each_transition<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&S, &S) -> Result<(), HookError> + Send + 'static,
    {
        self.hooks.set(HookPhase::Before, Box::new(hook));
        self
    }

    /// Set the hook run after every state change, replacing any previous one.
    pub fn after_each_transition<F>(&mut self, hook: F) -> &mut Self
    where
        F: FnMut(&S, &S) -> Result<(), HookError> + Send + 'static,
    {
        self.hooks.set(HookPhase::After, Box::new(hook));
        self
    }

    /// Declared states, in declaration order.
    pub fn declared_states(&self) -> &[S] {
        &self.states
    }

    /// Declared transitions, in declaration order.
    pub fn declared_transitions(&self) -> &[Transition<S>] {
        &self.transitions
    }

    /// The default state, if one was set.
    pub fn declared_default(&self) -> Option<&S> {
        self.default_state.as_ref()
    }

    /// Check whether a hook occupies the given slot.
    pub fn has_hook(&self, phase: HookPhase) -> bool {
        self.hooks.is_set(phase)
    }

    /// Get current state (pure).
    ///
    /// Fails with [`TransitionError::NoCurrentState`] until a default state
    /// has been set.
    pub fn current_state(&self) -> Result<&S, TransitionError> {
        self.current.as_ref().ok_or(TransitionError::NoCurrentState)
    }

    /// Triggers of every transition that may fire from the current state,
    /// in declaration order.
    ///
    /// Recomputed on each call. Empty while there is no current state.
    pub fn allowed_transitions(&self) -> Vec<&str> {
        let Some(current) = self.current.as_ref() else {
            return Vec::new();
        };

        self.transitions
            .iter()
            .filter(|t| t.permits(current))
            .map(|t| t.trigger.as_str())
            .collect()
    }

    /// Check if `trigger` would succeed right now (pure).
    ///
    /// True exactly when `trigger` appears in [`allowed_transitions`].
    /// Undefined and illegal triggers both report `false`.
    ///
    /// [`allowed_transitions`]: StateMachine::allowed_transitions
    pub fn can_transition_to(&self, trigger: &str) -> bool {
        self.current
            .as_ref()
            .is_some_and(|current| self.is_allowed(trigger, current))
    }

    /// Execute the transition named `trigger`.
    ///
    /// The trigger is legal when any declaration with that name lists the
    /// current state as a source. The destination always comes from the
    /// first declaration with that name.
    ///
    /// The before-hook runs with the current state unchanged; if it fails
    /// the machine stays where it was. If the after-hook fails the state
    /// change has already happened and is kept.
    pub fn transition_to(&mut self, trigger: &str) -> Result<&mut Self, TransitionError> {
        let Some(transition) = self.find_transition(trigger) else {
            debug!(trigger, "rejected undefined transition");
            return Err(TransitionError::NotDefined {
                trigger: trigger.to_string(),
            });
        };

        let current = self.current.as_ref().ok_or(TransitionError::NoCurrentState)?;

        if !self.is_allowed(trigger, current) {
            debug!(trigger, from = current.name(), "rejected transition from current state");
            return Err(TransitionError::NotAllowed {
                trigger: trigger.to_string(),
                from: current.name().to_string(),
            });
        }

        let from = current.clone();
        let to = transition.to.clone();

        self.hooks
            .run(HookPhase::Before, &from, &to)
            .map_err(|source| hook_failed(HookPhase::Before, &from, &to, source))?;

        self.current = Some(to.clone());

        self.hooks.run(HookPhase::After, &from, &to).map_err(|source| {
            debug!(trigger, to = to.name(), "after hook failed, state already changed");
            hook_failed(HookPhase::After, &from, &to, source)
        })?;

        debug!(trigger, from = from.name(), to = to.name(), "transition applied");
        Ok(self)
    }

    /// Fire a trigger by name, ignoring case.
    ///
    /// `fire("approve")` resolves to a trigger declared as `"APPROVE"` and
    /// then behaves exactly like `transition_to("APPROVE")`.
    pub fn fire(&mut self, name: &str) -> Result<&mut Self, TransitionError> {
        let Some(trigger) = self.dispatch.resolve(name).map(str::to_owned) else {
            debug!(name, "rejected undefined trigger");
            return Err(TransitionError::NotDefined {
                trigger: name.to_string(),
            });
        };

        trace!(name, trigger = trigger.as_str(), "resolved trigger");
        self.transition_to(&trigger)
    }

    /// Check the configuration for latent mistakes the machine tolerates.
    ///
    /// Accumulates every violation rather than stopping at the first one.
    /// Runtime behavior is unaffected either way.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        ConfigContext {
            states: &self.states,
            transitions: &self.transitions,
            default_state: self.default_state.as_ref(),
        }
        .validate()
    }

    /// Same test as `allowed_transitions().contains(&trigger)`.
    fn is_allowed(&self, trigger: &str, current: &S) -> bool {
        self.transitions
            .iter()
            .any(|t| t.trigger == trigger && t.permits(current))
    }

    /// First declared transition with exactly this trigger.
    fn find_transition(&self, trigger: &str) -> Option<&Transition<S>> {
        let found = self.transitions.iter().find(|t| t.trigger == trigger);
        trace!(trigger, found = found.is_some(), "resolved transition");
        found
    }
}

impl<S: State> Default for StateMachine<S> {
    fn default() -> Self {
        Self::new()
    }
}

fn hook_failed<S: State>(phase: HookPhase, from: &S, to: &S, source: HookError) -> TransitionError {
    TransitionError::HookFailed {
        phase,
        from: from.name().to_string(),
        to: to.name().to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type Calls = Arc<Mutex<Vec<(String, String, String)>>>;

    fn document_machine() -> StateMachine {
        let mut machine: StateMachine = StateMachine::new();
        machine
            .states(["draft", "review", "published"])
            .transitions(vec![
                Transition::new("SUBMIT", "draft", "review"),
                Transition::new("APPROVE", "review", "published"),
                Transition::new("REJECT", "review", "draft"),
            ])
            .default_state("draft");
        machine
    }

    fn record(machine: &mut StateMachine) -> Calls {
        let calls: Calls = Arc::new(Mutex::new(Vec::new()));
        let before = Arc::clone(&calls);
        let after = Arc::clone(&calls);
        machine
            .before_each_transition(move |from: &String, to: &String| {
                before
                    .lock()
                    .unwrap()
                    .push(("before".into(), from.clone(), to.clone()));
                Ok(())
            })
            .after_each_transition(move |from: &String, to: &String| {
                after
                    .lock()
                    .unwrap()
                    .push(("after".into(), from.clone(), to.clone()));
                Ok(())
            });
        calls
    }

    #[test]
    fn new_machine_has_no_current_state() {
        let machine: StateMachine = StateMachine::new();

        assert!(matches!(
            machine.current_state(),
            Err(TransitionError::NoCurrentState)
        ));
        assert!(machine.allowed_transitions().is_empty());
        assert!(machine.declared_default().is_none());
    }

    #[test]
    fn default_state_sets_current_and_default() {
        let mut machine: StateMachine = StateMachine::new();
        machine.default_state("draft");

        assert_eq!(machine.current_state().unwrap(), "draft");
        assert_eq!(machine.declared_default().unwrap(), "draft");
    }

    #[test]
    fn default_state_is_not_checked_against_declared_states() {
        let mut machine: StateMachine = StateMachine::new();
        machine.states(["a", "b"]).default_state("zzz");

        assert_eq!(machine.current_state().unwrap(), "zzz");
    }

    #[test]
    fn states_replace_and_add_state_appends_duplicates() {
        let mut machine: StateMachine = StateMachine::new();
        machine.states(["a", "b"]).states(["c"]).add_state("d").add_state("d");

        assert_eq!(machine.declared_states(), ["c", "d", "d"]);
    }

    #[test]
    fn transitions_replace_and_add_transition_appends() {
        let mut machine: StateMachine = StateMachine::new();
        machine
            .transitions(vec![Transition::new("OLD", "a", "b")])
            .transitions(vec![Transition::new("GO", "a", "b")])
            .add_transition(Transition::new("BACK", "b", "a"));

        let triggers: Vec<&str> = machine
            .declared_transitions()
            .iter()
            .map(|t| t.trigger.as_str())
            .collect();
        assert_eq!(triggers, vec!["GO", "BACK"]);
        assert!(matches!(
            machine.fire("old"),
            Err(TransitionError::NotDefined { .. })
        ));
    }

    #[test]
    fn allowed_transitions_follow_declaration_order() {
        let mut machine = document_machine();
        machine.transition_to("SUBMIT").unwrap();

        assert_eq!(machine.allowed_transitions(), vec!["APPROVE", "REJECT"]);
    }

    #[test]
    fn allowed_transitions_include_many_source_transitions() {
        let mut machine = document_machine();
        machine.add_transition(Transition::from_many(
            "ARCHIVE",
            ["draft", "review", "published"],
            "archived",
        ));

        assert_eq!(machine.allowed_transitions(), vec!["SUBMIT", "ARCHIVE"]);
        machine.transition_to("ARCHIVE").unwrap();
        assert_eq!(machine.current_state().unwrap(), "archived");
        assert!(machine.allowed_transitions().is_empty());
    }

    #[test]
    fn undefined_trigger_is_not_defined() {
        let mut machine = document_machine();

        let result = machine.transition_to("PUBLISH");
        assert!(matches!(
            result,
            Err(TransitionError::NotDefined { ref trigger }) if trigger == "PUBLISH"
        ));
        assert!(!machine.can_transition_to("PUBLISH"));
    }

    #[test]
    fn trigger_lookup_is_case_sensitive() {
        let mut machine = document_machine();

        assert!(machine.transition_to("submit").unwrap_err().is_not_defined());
        assert!(!machine.can_transition_to("submit"));
    }

    #[test]
    fn illegal_trigger_is_not_allowed_and_state_is_kept() {
        let mut machine = document_machine();
        let calls = record(&mut machine);

        let result = machine.transition_to("APPROVE");
        assert!(matches!(
            result,
            Err(TransitionError::NotAllowed { ref trigger, ref from })
                if trigger == "APPROVE" && from == "draft"
        ));
        assert_eq!(machine.current_state().unwrap(), "draft");
        assert!(!machine.can_transition_to("APPROVE"));
        assert!(calls.lock().unwrap().is_empty());
    }

    #[test]
    fn legal_trigger_moves_and_runs_hooks_in_order() {
        let mut machine = document_machine();
        let calls = record(&mut machine);

        assert!(machine.can_transition_to("SUBMIT"));
        machine.transition_to("SUBMIT").unwrap();

        assert_eq!(machine.current_state().unwrap(), "review");
        assert_eq!(
            *calls.lock().unwrap(),
            vec![
                ("before".to_string(), "draft".to_string(), "review".to_string()),
                ("after".to_string(), "draft".to_string(), "review".to_string()),
            ]
        );
    }

    #[test]
    fn hooks_observe_state_on_either_side_of_the_change() {
        let mut machine = document_machine();
        let observed = Arc::new(Mutex::new(Vec::new()));

        let before = Arc::clone(&observed);
        machine.before_each_transition(move |from: &String, _to: &String| {
            before.lock().unwrap().push(from.clone());
            Ok(())
        });

        machine.transition_to("SUBMIT").unwrap();
        machine.transition_to("REJECT").unwrap();

        assert_eq!(*observed.lock().unwrap(), vec!["draft", "review"]);
        assert_eq!(machine.current_state().unwrap(), "draft");
    }

    #[test]
    fn failing_before_hook_leaves_state_unmutated() {
        let mut machine = document_machine();
        machine.before_each_transition(|_: &String, _: &String| Err("vetoed".into()));

        let error = machine.transition_to("SUBMIT").unwrap_err();

        assert!(matches!(
            error,
            TransitionError::HookFailed {
                phase: HookPhase::Before,
                ..
            }
        ));
        assert_eq!(machine.current_state().unwrap(), "draft");
    }

    #[test]
    fn failing_after_hook_keeps_the_new_state() {
        let mut machine = document_machine();
        machine.after_each_transition(|_: &String, _: &String| Err("audit down".into()));

        let error = machine.transition_to("SUBMIT").unwrap_err();

        assert!(matches!(
            error,
            TransitionError::HookFailed {
                phase: HookPhase::After,
                ..
            }
        ));
        assert_eq!(machine.current_state().unwrap(), "review");
    }

    #[test]
    fn setting_a_hook_again_replaces_it() {
        let mut machine = document_machine();
        let hits = Arc::new(Mutex::new(Vec::new()));

        let first = Arc::clone(&hits);
        let second = Arc::clone(&hits);
        machine
            .after_each_transition(move |_: &String, _: &String| {
                first.lock().unwrap().push("first");
                Ok(())
            })
            .after_each_transition(move |_: &String, _: &String| {
                second.lock().unwrap().push("second");
                Ok(())
            });

        machine.transition_to("SUBMIT").unwrap();
        assert_eq!(*hits.lock().unwrap(), vec!["second"]);
        assert!(machine.has_hook(HookPhase::After));
        assert!(!machine.has_hook(HookPhase::Before));
    }

    #[test]
    fn transitions_chain() {
        let mut machine = document_machine();

        machine
            .transition_to("SUBMIT")
            .and_then(|m| m.transition_to("REJECT"))
            .and_then(|m| m.transition_to("SUBMIT"))
            .unwrap();

        assert_eq!(machine.current_state().unwrap(), "review");
    }

    #[test]
    fn transition_without_current_state_fails_explicitly() {
        let mut machine: StateMachine = StateMachine::new();
        machine.add_transition(Transition::new("GO", "a", "b"));

        assert!(matches!(
            machine.transition_to("GO"),
            Err(TransitionError::NoCurrentState)
        ));
        assert!(!machine.can_transition_to("GO"));
        assert!(machine.transition_to("STOP").unwrap_err().is_not_defined());
    }

    #[test]
    fn first_declared_transition_shadows_later_duplicates() {
        let mut machine: StateMachine = StateMachine::new();
        machine
            .transitions(vec![
                Transition::new("GO", "a", "b"),
                Transition::new("GO", "a", "c"),
                Transition::new("GO", "x", "y"),
            ])
            .default_state("a");

        machine.transition_to("GO").unwrap();
        assert_eq!(machine.current_state().unwrap(), "b");

        // Legal from "x" through the third declaration, but the first one
        // still supplies the destination.
        machine.default_state("x");
        assert!(machine.can_transition_to("GO"));
        machine.transition_to("GO").unwrap();
        assert_eq!(machine.current_state().unwrap(), "b");
    }

    #[test]
    fn can_transition_to_agrees_with_allowed_transitions_under_duplicates() {
        let mut machine: StateMachine = StateMachine::new();
        machine
            .transitions(vec![
                Transition::new("GO", "a", "b"),
                Transition::new("GO", "x", "y"),
            ])
            .default_state("x");

        assert_eq!(machine.allowed_transitions(), vec!["GO"]);
        assert!(machine.can_transition_to("GO"));

        machine.default_state("b");
        assert!(machine.allowed_transitions().is_empty());
        assert!(!machine.can_transition_to("GO"));
        assert!(machine.transition_to("GO").unwrap_err().is_not_allowed());
        assert_eq!(machine.current_state().unwrap(), "b");
    }

    #[test]
    fn fire_normalizes_to_declared_casing() {
        let mut machine = document_machine();
        let calls = record(&mut machine);

        machine.fire("submit").unwrap().fire("Approve").unwrap();

        assert_eq!(machine.current_state().unwrap(), "published");
        assert_eq!(calls.lock().unwrap().len(), 4);
    }

    #[test]
    fn fire_reports_the_same_errors_as_transition_to() {
        let mut machine = document_machine();

        assert!(machine.fire("publish").unwrap_err().is_not_defined());
        assert!(machine.fire("approve").unwrap_err().is_not_allowed());
        assert_eq!(machine.current_state().unwrap(), "draft");
    }

    #[test]
    fn fire_sees_transitions_added_later() {
        let mut machine = document_machine();
        machine.add_transition(Transition::new("Discard", "draft", "trash"));

        machine.fire("DISCARD").unwrap();
        assert_eq!(machine.current_state().unwrap(), "trash");
    }

    #[test]
    fn reads_do_not_change_state() {
        let machine = document_machine();

        for _ in 0..5 {
            assert_eq!(machine.allowed_transitions(), vec!["SUBMIT"]);
            assert!(machine.can_transition_to("SUBMIT"));
            assert!(!machine.can_transition_to("APPROVE"));
        }
        assert_eq!(machine.current_state().unwrap(), "draft");
    }

    #[test]
    fn no_terminal_state_after_cycles() {
        let mut machine = document_machine();

        for _ in 0..3 {
            machine.transition_to("SUBMIT").unwrap();
            machine.transition_to("REJECT").unwrap();
        }
        assert_eq!(machine.allowed_transitions(), vec!["SUBMIT"]);
    }

    #[test]
    fn validate_passes_for_consistent_configuration() {
        let machine = document_machine();
        assert!(machine.validate().is_success());
    }
}
