//! Lock indicator trait

use crate::state::LockState;

/// Two-colour lamp reflecting the lock state
///
/// Exactly one of the two outputs is active at any time.
pub trait Indicator {
    /// Show the given state
    fn show(&mut self, state: LockState);

    /// State currently shown
    fn state(&self) -> LockState;
}
