//! Core State trait for state machine states.
//!
//! A state is an opaque identifier. The machine only ever compares states
//! for equality and asks for their name when reporting or logging.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// States carry no attributes beyond identity. Two states are the same state
/// exactly when they compare equal.
///
/// # Required Traits
///
/// - `Clone`: the machine hands copies of states to hooks
/// - `PartialEq`: legality checks compare the current state to sources
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: transition declarations are serde types
/// - `Send` + `Sync`: machines can be moved across threads
///
/// # Example
///
/// ```rust
/// use statecraft::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum TicketState {
///     Open,
///     Closed,
/// }
///
/// impl State for TicketState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// assert_eq!(TicketState::Open.name(), "Open");
/// assert_eq!("draft".to_string().name(), "draft");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;
}

impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}
