//! Build errors for state machine and transition builders.

use crate::validation::ConfigViolation;
use thiserror::Error;

/// Errors that can occur when building state machines and transitions.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Default state not specified. Call .default_state(state) before .build()")]
    MissingDefaultState,

    #[error("No transitions defined. Add at least one transition")]
    NoTransitions,

    #[error("Transition trigger not specified. Call .trigger(name)")]
    MissingTrigger,

    #[error("Transition source state not specified. Call .from(state)")]
    MissingFromState,

    #[error("Transition target state not specified. Call .to(state)")]
    MissingToState,

    #[error("Configuration has {} violation(s): {}", .violations.len(), summarize(.violations))]
    InvalidConfiguration { violations: Vec<ConfigViolation> },
}

fn summarize(violations: &[ConfigViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
