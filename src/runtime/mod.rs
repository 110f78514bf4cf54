//! Transition resolution and execution.
//!
//! This module holds the only part of the crate with real behavior:
//!
//! - **State Machine**: owns declarations, the current state and the hooks
//! - **Resolution**: first declared transition with a matching trigger wins
//! - **Legality**: the current state must be one of the resolved sources
//! - **Hooks**: before and after each state change, strictly outside it
//! - **Dispatch**: `fire(name)` looks triggers up case-insensitively
//!
//! Everything runs synchronously on the caller's thread. A machine shared
//! between threads or tasks belongs behind a mutex owned by the caller.

pub(crate) mod dispatch;
mod error;
mod hooks;
mod machine;

pub use error::TransitionError;
pub use hooks::{Hook, HookError, HookPhase};
pub use machine::StateMachine;
