//! Core state machine types.
//!
//! This module contains the passive declarations the machine works with:
//! - State identity via the `State` trait
//! - Transition descriptors and their one-or-many source sets
//!
//! Nothing here has behavior beyond answering questions about itself.

mod state;
mod transition;

pub use state::State;
pub use transition::{Sources, Transition};
