//! Statecraft: a minimal flat finite state machine
//!
//! A machine holds a declared set of states, a declared list of named
//! transitions and a single current state. Callers ask which triggers are
//! legal right now, fire a trigger by name, and get one of two distinct
//! errors when the trigger is unknown or illegal from where the machine is.
//!
//! # Core Concepts
//!
//! - **State**: an opaque identifier via the `State` trait
//! - **Transition**: a trigger name, one or more source states, one destination
//! - **Hooks**: optional callbacks run before and after each state change
//! - **Dispatch**: `fire(name)` resolves trigger names case-insensitively
//! - **Lint**: opt-in configuration checks that report every problem at once
//!
//! # Example
//!
//! ```rust
//! use statecraft::{StateMachine, Transition, TransitionError};
//!
//! let mut machine: StateMachine = StateMachine::new();
//! machine
//!     .states(["draft", "review", "published"])
//!     .add_transition(Transition::new("SUBMIT", "draft", "review"))
//!     .add_transition(Transition::new("APPROVE", "review", "published"))
//!     .add_transition(Transition::new("REJECT", "review", "draft"))
//!     .default_state("draft")
//!     .after_each_transition(|from: &String, to: &String| {
//!         println!("{from} -> {to}");
//!         Ok(())
//!     });
//!
//! assert!(matches!(
//!     machine.transition_to("APPROVE"),
//!     Err(TransitionError::NotAllowed { .. })
//! ));
//! assert!(matches!(
//!     machine.transition_to("PUBLISH"),
//!     Err(TransitionError::NotDefined { .. })
//! ));
//!
//! machine.transition_to("SUBMIT").unwrap();
//! assert_eq!(machine.allowed_transitions(), vec!["APPROVE", "REJECT"]);
//! ```

pub mod builder;
pub mod core;
pub mod runtime;
pub mod validation;

// Re-export commonly used types
pub use crate::builder::{BuildError, StateMachineBuilder, TransitionBuilder};
pub use crate::core::{Sources, State, Transition};
pub use crate::runtime::{HookError, HookPhase, StateMachine, TransitionError};
pub use crate::validation::ConfigViolation;
