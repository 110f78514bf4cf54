//! Transition descriptors.
//!
//! A transition is passive data: a trigger name, the states it may fire
//! from, and the single state it leads to. The machine owns the descriptors
//! and does all the resolving.

use super::state::State;
use serde::{Deserialize, Serialize};
use std::slice;

/// Source states that permit a transition to fire.
///
/// Serialized untagged, so a declaration may spell a single source as a
/// bare value and several sources as a list.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Sources;
///
/// let one: Sources<String> = Sources::One("draft".to_string());
/// let many: Sources<String> = Sources::Many(vec!["draft".to_string(), "review".to_string()]);
///
/// assert!(one.contains(&"draft".to_string()));
/// assert!(many.contains(&"review".to_string()));
/// assert!(!one.contains(&"review".to_string()));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged, bound = "")]
pub enum Sources<S: State> {
    /// Exactly one permitted source state
    One(S),
    /// Any of several permitted source states, in declaration order
    Many(Vec<S>),
}

impl<S: State> Sources<S> {
    /// Check whether `state` is one of the permitted sources.
    pub fn contains(&self, state: &S) -> bool {
        self.as_slice().contains(state)
    }

    /// Iterate the permitted sources in declaration order.
    pub fn iter(&self) -> slice::Iter<'_, S> {
        self.as_slice().iter()
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// True only for an empty `Many`, which no state can ever satisfy.
    pub fn is_empty(&self) -> bool {
        self.as_slice().is_empty()
    }

    fn as_slice(&self) -> &[S] {
        match self {
            Self::One(state) => slice::from_ref(state),
            Self::Many(states) => states,
        }
    }
}

/// A named rule moving the machine from any of its sources to `to`.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Transition;
///
/// let submit: Transition<String> = Transition::new("SUBMIT", "draft", "review");
/// let reopen: Transition<String> =
///     Transition::from_many("REOPEN", ["review", "published"], "draft");
///
/// assert!(submit.permits(&"draft".to_string()));
/// assert!(!submit.permits(&"review".to_string()));
/// assert!(reopen.permits(&"published".to_string()));
/// assert_eq!(reopen.to, "draft");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Transition<S: State> {
    /// Name used to request this transition
    pub trigger: String,
    /// States this transition may fire from
    pub from: Sources<S>,
    /// Destination state
    pub to: S,
}

impl<S: State> Transition<S> {
    /// Create a transition with a single source state.
    pub fn new(trigger: impl Into<String>, from: impl Into<S>, to: impl Into<S>) -> Self {
        Self {
            trigger: trigger.into(),
            from: Sources::One(from.into()),
            to: to.into(),
        }
    }

    /// Create a transition that may fire from any of several states.
    ///
    /// An empty `from` is accepted but yields a transition that can never
    /// fire. `validate()` reports it as `EmptySources`.
    pub fn from_many<I, T>(trigger: impl Into<String>, from: I, to: impl Into<S>) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<S>,
    {
        Self {
            trigger: trigger.into(),
            from: Sources::Many(from.into_iter().map(Into::into).collect()),
            to: to.into(),
        }
    }

    /// Check if `state` is among this transition's sources (pure)
    pub fn permits(&self, state: &S) -> bool {
        self.from.contains(state)
    }
}
