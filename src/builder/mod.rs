//! Builder API for ergonomic state machine construction.
//!
//! This module provides consuming fluent builders and a macro for creating
//! state machines in a single expression. The machine's own `&mut self`
//! setters remain available for reconfiguring it later.
//!
//! # Example
//!
//! ```
//! use statecraft::builder::{StateMachineBuilder, TransitionBuilder};
//! use statecraft::state_enum;
//!
//! state_enum! {
//!     enum Door {
//!         Open,
//!         Closed,
//!         Locked,
//!     }
//! }
//!
//! let mut door = StateMachineBuilder::<Door>::new()
//!     .states([Door::Open, Door::Closed, Door::Locked])
//!     .default_state(Door::Open)
//!     .transition(TransitionBuilder::new().trigger("CLOSE").from(Door::Open).to(Door::Closed))
//!     .unwrap()
//!     .transition(TransitionBuilder::new().trigger("LOCK").from(Door::Closed).to(Door::Locked))
//!     .unwrap()
//!     .transition(
//!         TransitionBuilder::new()
//!             .trigger("OPEN")
//!             .from_any([Door::Closed, Door::Locked])
//!             .to(Door::Open),
//!     )
//!     .unwrap()
//!     .build_validated()
//!     .unwrap();
//!
//! door.fire("close").unwrap().fire("lock").unwrap();
//! assert_eq!(door.current_state().unwrap(), &Door::Locked);
//! ```

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
pub use transition::TransitionBuilder;
