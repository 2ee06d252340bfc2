//! Controller phases
//!
//! Lockout is a sub-phase of being locked; the indicator only ever shows
//! [`LockState`].

/// What the indicator shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockState {
    Locked,
    Unlocked,
}

/// Controller phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Normal password entry
    AwaitingInput,
    /// Attempts exhausted; input is discarded until the timer runs out
    LockedOut,
    /// Credential accepted; terminal for the session
    Unlocked,
}

impl Phase {
    /// Lock state implied by this phase
    pub fn lock_state(&self) -> LockState {
        match self {
            Phase::Unlocked => LockState::Unlocked,
            Phase::AwaitingInput | Phase::LockedOut => LockState::Locked,
        }
    }

    /// Check if key events can be processed in this phase
    pub fn accepts_keys(&self) -> bool {
        matches!(self, Phase::AwaitingInput)
    }

    /// Check if this phase ends the session
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Unlocked)
    }
}
