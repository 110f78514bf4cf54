//! Configuration violations reported by the lint.

use thiserror::Error;

/// Latent configuration mistakes a machine tolerates at runtime.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigViolation {
    #[error("No default state set")]
    MissingDefaultState,

    #[error("Default state '{state}' is not a declared state")]
    UndeclaredDefault { state: String },

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: String },

    #[error("Transition '{trigger}' has no source states")]
    EmptySources { trigger: String },

    #[error("Transition '{trigger}' fires from undeclared state '{state}'")]
    UndeclaredSource { trigger: String, state: String },

    #[error("Transition '{trigger}' leads to undeclared state '{state}'")]
    UndeclaredDestination { trigger: String, state: String },

    /// A later transition reuses a trigger; resolution never reaches it.
    #[error("Transition '{trigger}' at position {index} is shadowed by an earlier declaration")]
    ShadowedTrigger { trigger: String, index: usize },

    /// Two distinct triggers collide once case is ignored.
    #[error("Trigger '{trigger}' cannot be fired by name, '{shadowed_by}' takes its key")]
    AmbiguousDispatch { trigger: String, shadowed_by: String },
}
