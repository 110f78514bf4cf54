//! Builder for constructing transition descriptors.

use crate::builder::error::BuildError;
use crate::core::{Sources, State, Transition};

/// Builder for constructing transitions with a fluent API.
///
/// Calling `.from()` more than once adds further sources.
pub struct TransitionBuilder<S: State = String> {
    trigger: Option<String>,
    from: Vec<S>,
    to: Option<S>,
}

impl<S: State> TransitionBuilder<S> {
    /// Create a new transition builder.
    pub fn new() -> Self {
        Self {
            trigger: None,
            from: Vec::new(),
            to: None,
        }
    }

    /// Set the trigger name (required).
    pub fn trigger(mut self, name: impl Into<String>) -> Self {
        self.trigger = Some(name.into());
        self
    }

    /// Add a source state (at least one required).
    pub fn from(mut self, state: impl Into<S>) -> Self {
        self.from.push(state.into());
        self
    }

    /// Add several source states.
    pub fn from_any<I, T>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        self.from.extend(states.into_iter().map(Into::into));
        self
    }

    /// Set the target state (required).
    pub fn to(mut self, state: impl Into<S>) -> Self {
        self.to = Some(state.into());
        self
    }

    /// Build the transition.
    pub fn build(self) -> Result<Transition<S>, BuildError> {
        let trigger = self.trigger.ok_or(BuildError::MissingTrigger)?;
        let to = self.to.ok_or(BuildError::MissingToState)?;

        let mut from = self.from;
        let from = match from.len() {
            0 => return Err(BuildError::MissingFromState),
            1 => Sources::One(from.remove(0)),
            _ => Sources::Many(from),
        };

        Ok(Transition { trigger, from, to })
    }
}

impl<S: State> Default for TransitionBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}
