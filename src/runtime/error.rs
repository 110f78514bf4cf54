//! Errors raised while resolving and executing transitions.

use crate::runtime::hooks::{HookError, HookPhase};
use thiserror::Error;

/// Errors that can occur during transitions
#[derive(Debug, Error)]
pub enum TransitionError {
    /// The trigger is not part of the machine's transition vocabulary.
    #[error("Transition '{trigger}' is not defined")]
    NotDefined { trigger: String },

    /// The trigger is declared, but not from the current state.
    #[error("Transition '{trigger}' is not allowed from state '{from}'")]
    NotAllowed { trigger: String, from: String },

    #[error("Machine has no current state. Call .default_state(state) first")]
    NoCurrentState,

    #[error("{phase} hook failed for '{from}' -> '{to}': {source}")]
    HookFailed {
        phase: HookPhase,
        from: String,
        to: String,
        #[source]
        source: HookError,
    },
}

impl TransitionError {
    /// True for the "unknown command" kind.
    pub fn is_not_defined(&self) -> bool {
        matches!(self, Self::NotDefined { .. })
    }

    /// True for the "illegal right now" kind.
    pub fn is_not_allowed(&self) -> bool {
        matches!(self, Self::NotAllowed { .. })
    }
}
