//! Lock state definitions
//!
//! The phases the controller moves through and the events it reports.

pub mod events;
pub mod machine;

pub use events::{KeyEvent, LockEvent};
pub use machine::{LockState, Phase};
