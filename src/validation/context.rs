//! Borrowed view of a machine's configuration, handed to lint rules.

use crate::core::{State, Transition};
use crate::validation::rules;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Configuration under inspection
#[derive(Clone, Debug)]
pub struct ConfigContext<'a, S: State> {
    pub states: &'a [S],
    pub transitions: &'a [Transition<S>],
    pub default_state: Option<&'a S>,
}

impl<'a, S: State> ConfigContext<'a, S> {
    /// Run every rule, accumulating ALL violations.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<ConfigViolation>> {
        rules::check_all(self)
    }

    pub(crate) fn is_declared(&self, state: &S) -> bool {
        self.states.contains(state)
    }
}
