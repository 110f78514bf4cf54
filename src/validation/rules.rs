//! Lint rules for machine configuration using Validation.

use crate::core::State;
use crate::runtime::dispatch::TriggerTable;
use crate::validation::context::ConfigContext;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single rule
pub type ConfigCheck = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Run every rule against `ctx`.
/// Returns Validation::Failure with ALL violations if any rule fails.
pub(crate) fn check_all<S: State>(ctx: &ConfigContext<'_, S>) -> ConfigCheck {
    let mut checks: Vec<ConfigCheck> = vec![default_state(ctx)];

    checks.extend(duplicate_states(ctx));
    checks.extend(transition_endpoints(ctx));
    checks.extend(shadowed_triggers(ctx));
    checks.extend(ambiguous_dispatch(ctx));

    Validation::all_vec(checks).map(|_| ())
}

/// The default state must be set and declared.
pub fn default_state<S: State>(ctx: &ConfigContext<'_, S>) -> ConfigCheck {
    match ctx.default_state {
        None => Validation::fail(ConfigViolation::MissingDefaultState),
        Some(state) if !ctx.is_declared(state) => {
            Validation::fail(ConfigViolation::UndeclaredDefault {
                state: state.name().to_string(),
            })
        }
        Some(_) => Validation::success(()),
    }
}

/// Each repeated state is reported once.
pub fn duplicate_states<S: State>(ctx: &ConfigContext<'_, S>) -> Vec<ConfigCheck> {
    let mut reported: Vec<&S> = Vec::new();
    let mut checks = Vec::new();

    for (i, state) in ctx.states.iter().enumerate() {
        if ctx.states[..i].contains(state) && !reported.contains(&state) {
            reported.push(state);
            checks.push(Validation::fail(ConfigViolation::DuplicateState {
                state: state.name().to_string(),
            }));
        }
    }

    checks
}

/// Sources must be non-empty; sources and destinations must be declared.
pub fn transition_endpoints<S: State>(ctx: &ConfigContext<'_, S>) -> Vec<ConfigCheck> {
    let mut checks = Vec::new();

    for transition in ctx.transitions {
        if transition.from.is_empty() {
            checks.push(Validation::fail(ConfigViolation::EmptySources {
                trigger: transition.trigger.clone(),
            }));
        }

        for source in transition.from.iter().filter(|s| !ctx.is_declared(s)) {
            checks.push(Validation::fail(ConfigViolation::UndeclaredSource {
                trigger: transition.trigger.clone(),
                state: source.name().to_string(),
            }));
        }

        if !ctx.is_declared(&transition.to) {
            checks.push(Validation::fail(ConfigViolation::UndeclaredDestination {
                trigger: transition.trigger.clone(),
                state: transition.to.name().to_string(),
            }));
        }
    }

    checks
}

/// Later transitions reusing a trigger are unreachable.
pub fn shadowed_triggers<S: State>(ctx: &ConfigContext<'_, S>) -> Vec<ConfigCheck> {
    ctx.transitions
        .iter()
        .enumerate()
        .filter(|(i, t)| ctx.transitions[..*i].iter().any(|e| e.trigger == t.trigger))
        .map(|(index, t)| {
            Validation::fail(ConfigViolation::ShadowedTrigger {
                trigger: t.trigger.clone(),
                index,
            })
        })
        .collect()
}

/// Distinct triggers that collide once case is ignored.
pub fn ambiguous_dispatch<S: State>(ctx: &ConfigContext<'_, S>) -> Vec<ConfigCheck> {
    let mut checks = Vec::new();

    for (i, transition) in ctx.transitions.iter().enumerate() {
        let key = TriggerTable::normalize(&transition.trigger);
        let earlier = ctx.transitions[..i].iter().find(|e| {
            e.trigger != transition.trigger && TriggerTable::normalize(&e.trigger) == key
        });

        if let Some(earlier) = earlier {
            checks.push(Validation::fail(ConfigViolation::AmbiguousDispatch {
                trigger: transition.trigger.clone(),
                shadowed_by: earlier.trigger.clone(),
            }));
        }
    }

    checks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Transition;

    fn states(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn violations(check: ConfigCheck) -> Vec<ConfigViolation> {
        match check {
            Validation::Failure(errors) => errors.iter().cloned().collect(),
            Validation::Success(_) => Vec::new(),
        }
    }

    #[test]
    fn consistent_configuration_passes() {
        let declared = states(&["draft", "review"]);
        let transitions = vec![
            Transition::new("SUBMIT", "draft", "review"),
            Transition::new("REJECT", "review", "draft"),
        ];
        let default = "draft".to_string();
        let ctx = ConfigContext {
            states: &declared,
            transitions: &transitions,
            default_state: Some(&default),
        };

        assert!(ctx.validate().is_success());
    }

    #[test]
    fn lint_accumulates_all_violations() {
        let declared = states(&["draft", "review", "draft"]);
        let transitions = vec![
            Transition::new("SUBMIT", "draft", "review"),
            Transition::new("SUBMIT", "review", "gone"),
            Transition::from_many("NOWHERE", Vec::<String>::new(), "draft"),
            Transition::new("submit", "limbo", "draft"),
        ];
        let ctx = ConfigContext {
            states: &declared,
            transitions: &transitions,
            default_state: None,
        };

        let found = violations(ctx.validate());

        assert!(found.contains(&ConfigViolation::MissingDefaultState));
        assert!(found.contains(&ConfigViolation::DuplicateState {
            state: "draft".to_string()
        }));
        assert!(found.contains(&ConfigViolation::UndeclaredDestination {
            trigger: "SUBMIT".to_string(),
            state: "gone".to_string()
        }));
        assert!(found.contains(&ConfigViolation::EmptySources {
            trigger: "NOWHERE".to_string()
        }));
        assert!(found.contains(&ConfigViolation::UndeclaredSource {
            trigger: "submit".to_string(),
            state: "limbo".to_string()
        }));
        assert!(found.contains(&ConfigViolation::ShadowedTrigger {
            trigger: "SUBMIT".to_string(),
            index: 1
        }));
        assert!(found.contains(&ConfigViolation::AmbiguousDispatch {
            trigger: "submit".to_string(),
            shadowed_by: "SUBMIT".to_string()
        }));
        assert_eq!(found.len(), 7);
    }

    #[test]
    fn undeclared_default_is_reported() {
        let declared = states(&["a"]);
        let default = "b".to_string();
        let ctx: ConfigContext<'_, String> = ConfigContext {
            states: &declared,
            transitions: &[],
            default_state: Some(&default),
        };

        assert_eq!(
            violations(default_state(&ctx)),
            vec![ConfigViolation::UndeclaredDefault {
                state: "b".to_string()
            }]
        );
    }

    #[test]
    fn each_duplicate_state_is_reported_once() {
        let declared = states(&["a", "a", "a", "b", "b"]);
        let ctx: ConfigContext<'_, String> = ConfigContext {
            states: &declared,
            transitions: &[],
            default_state: None,
        };

        assert_eq!(duplicate_states(&ctx).len(), 2);
    }

    #[test]
    fn identical_duplicates_shadow_but_are_not_ambiguous() {
        let declared = states(&["a", "b"]);
        let transitions = vec![
            Transition::new("GO", "a", "b"),
            Transition::new("GO", "b", "a"),
        ];
        let ctx = ConfigContext {
            states: &declared,
            transitions: &transitions,
            default_state: None,
        };

        assert_eq!(shadowed_triggers(&ctx).len(), 1);
        assert!(ambiguous_dispatch(&ctx).is_empty());
    }
}
