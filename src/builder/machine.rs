//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::builder::transition::TransitionBuilder;
use crate::core::{State, Transition};
use crate::runtime::{Hook, HookError, StateMachine};
use stillwater::validation::Validation;

/// Builder for constructing state machines with a fluent API.
///
/// Unlike the `&mut self` setters on [`StateMachine`], every method here
/// adds to what was configured before.
pub struct StateMachineBuilder<S: State + 'static = String> {
    default_state: Option<S>,
    states: Vec<S>,
    transitions: Vec<Transition<S>>,
    before: Option<Hook<S>>,
    after: Option<Hook<S>>,
}

impl<S: State + 'static> StateMachineBuilder<S> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            default_state: None,
            states: Vec::new(),
            transitions: Vec::new(),
            before: None,
            after: None,
        }
    }

    /// Set the default state (required).
    pub fn default_state(mut self, state: impl Into<S>) -> Self {
        self.default_state = Some(state.into());
        self
    }

    /// Declare one state.
    pub fn state(mut self, state: impl Into<S>) -> Self {
        self.states.push(state.into());
        self
    }

    /// Declare several states.
    pub fn states<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Add a transition using a builder.
    /// Returns an error if the builder fails validation.
    pub fn transition(mut self, builder: TransitionBuilder<S>) -> Result<Self, BuildError> {
        let transition = builder.build()?;
        self.transitions.push(transition);
        Ok(self)
    }

    /// Add a pre-built transition.
    pub fn add_transition(mut self, transition: Transition<S>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once.
    pub fn transitions(mut self, transitions: impl IntoIterator<Item = Transition<S>>) -> Self {
        self.transitions.extend(transitions);
        self
    }

    pub fn before_each_transition<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&S, &S) -> Result<(), HookError> + Send + 'static,
    {
        self.before = Some(Box::new(hook));
        self
    }

    pub fn after_each_transition<F>(mut self, hook: F) -> Self
    where
        F: FnMut(&S, &S) -> Result<(), HookError> + Send + 'static,
    {
        self.after = Some(Box::new(hook));
        self
    }

    /// Build the state machine.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<StateMachine<S>, BuildError> {
        let default_state = self.default_state.ok_or(BuildError::MissingDefaultState)?;

        if self.transitions.is_empty() {
            return Err(BuildError::NoTransitions);
        }

        let mut machine: StateMachine<S> = StateMachine::new();
        machine
            .states(self.states)
            .transitions(self.transitions)
            .default_state(default_state);

        if let Some(hook) = self.before {
            machine.before_each_transition(hook);
        }
        if let Some(hook) = self.after {
            machine.after_each_transition(hook);
        }

        Ok(machine)
    }

    /// Build the state machine and lint its configuration.
    /// Returns every violation at once if the lint fails.
    pub fn build_validated(self) -> Result<StateMachine<S>, BuildError> {
        let machine = self.build()?;

        match machine.validate() {
            Validation::Success(_) => Ok(machine),
            Validation::Failure(violations) => Err(BuildError::InvalidConfiguration {
                violations: violations.iter().cloned().collect(),
            }),
        }
    }
}

impl<S: State + 'static> Default for StateMachineBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
