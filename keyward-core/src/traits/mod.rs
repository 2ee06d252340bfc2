//! Hardware abstraction traits
//!
//! These traits define the interface between the lock logic
//! and hardware-specific implementations.

pub mod display;
pub mod indicator;
pub mod keypad;

pub use display::{CharDisplay, DisplayExt, DISPLAY_ROWS};
pub use indicator::Indicator;
pub use keypad::Keypad;
