//! Validation-based lint for machine configuration.
//!
//! A machine accepts any configuration: undeclared endpoints, duplicate
//! states and shadowed triggers are all tolerated at runtime. This module
//! reports those latent mistakes on request, using Stillwater's
//! `Validation` type to accumulate ALL violations instead of stopping at
//! the first.
//!
//! # Example
//!
//! ```rust
//! use statecraft::validation::ConfigViolation;
//! use statecraft::{StateMachine, Transition};
//! use stillwater::validation::Validation;
//!
//! let mut machine: StateMachine = StateMachine::new();
//! machine
//!     .states(["draft", "review"])
//!     .add_transition(Transition::new("SUBMIT", "draft", "review"))
//!     .add_transition(Transition::new("SUBMIT", "review", "archived"));
//!
//! match machine.validate() {
//!     Validation::Failure(violations) => {
//!         assert!(violations
//!             .iter()
//!             .any(|v| matches!(v, ConfigViolation::MissingDefaultState)));
//!         assert!(violations
//!             .iter()
//!             .any(|v| matches!(v, ConfigViolation::ShadowedTrigger { index: 1, .. })));
//!     }
//!     Validation::Success(_) => panic!("expected violations"),
//! }
//! ```

pub mod context;
pub mod rules;
pub mod violations;

pub use context::ConfigContext;
pub use violations::ConfigViolation;
