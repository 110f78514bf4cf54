//! Lifecycle hooks run around every successful transition.

use std::fmt;

/// Error a hook may return to abort the surrounding call.
pub type HookError = Box<dyn std::error::Error + Send + Sync>;

/// Callback invoked with `(from_state, to_state)`.
///
/// Hooks are side-effecting by nature, so they are `FnMut`. They must be
/// `Send` so a configured machine can move between threads.
pub type Hook<S> = Box<dyn FnMut(&S, &S) -> Result<(), HookError> + Send>;

/// Which hook slot a callback occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    /// Runs before the current state is mutated
    Before,
    /// Runs after the current state is mutated
    After,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Before => write!(f, "before"),
            Self::After => write!(f, "after"),
        }
    }
}

/// The two single-slot hooks of a machine.
///
/// Registering a hook overwrites whatever occupied its slot.
pub(crate) struct Hooks<S> {
    before: Option<Hook<S>>,
    after: Option<Hook<S>>,
}

impl<S> Hooks<S> {
    pub(crate) fn new() -> Self {
        Self {
            before: None,
            after: None,
        }
    }

    pub(crate) fn set(&mut self, phase: HookPhase, hook: Hook<S>) {
        match phase {
            HookPhase::Before => self.before = Some(hook),
            HookPhase::After => self.after = Some(hook),
        }
    }

    pub(crate) fn is_set(&self, phase: HookPhase) -> bool {
        match phase {
            HookPhase::Before => self.before.is_some(),
            HookPhase::After => self.after.is_some(),
        }
    }

    /// Invoke the hook for `phase`, if any. An empty slot is a no-op.
    pub(crate) fn run(&mut self, phase: HookPhase, from: &S, to: &S) -> Result<(), HookError> {
        let slot = match phase {
            HookPhase::Before => &mut self.before,
            HookPhase::After => &mut self.after,
        };
        match slot {
            Some(hook) => hook(from, to),
            None => Ok(()),
        }
    }
}

impl<S> Default for Hooks<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> fmt::Debug for Hooks<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks")
            .field("before", &self.before.is_some())
            .field("after", &self.after.is_some())
            .finish()
    }
}
