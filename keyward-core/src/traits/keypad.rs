//! Keypad trait

use crate::state::KeyEvent;

/// Source of key events
pub trait Keypad {
    /// Run one scan pass
    ///
    /// Returns the first pressed key found, or `None`. At most one key is
    /// reported per pass.
    fn scan(&mut self) -> Option<KeyEvent>;
}
