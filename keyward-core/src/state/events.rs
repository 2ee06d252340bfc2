//! Events in and out of the lock controller

/// One key found by a keypad scan pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub row: u8,
    pub column: u8,
    pub key: char,
}

/// Outcome of feeding a key or a tick into the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LockEvent {
    /// Character appended to the entry buffer
    KeyAccepted { key: char, len: u8 },
    /// Entry buffer discarded by the clear key
    Cleared,
    /// Wrong credential, attempts remain
    Rejected { attempts_left: u8 },
    /// Wrong credential, attempts exhausted
    LockoutStarted,
    /// Countdown line redrawn during lockout
    Countdown { seconds_left: u8 },
    /// Lockout expired, entry resumes
    LockoutEnded,
    /// Credential accepted
    Unlocked,
    /// Entry buffer full, character dropped
    InputIgnored,
    /// Key arrived while input was suspended
    Discarded,
}

impl LockEvent {
    /// Attempts remaining after a failed submit, for the debug channel
    pub fn attempts_left(&self) -> Option<u8> {
        match self {
            LockEvent::Rejected { attempts_left } => Some(*attempts_left),
            LockEvent::LockoutStarted => Some(0),
            _ => None,
        }
    }
}
