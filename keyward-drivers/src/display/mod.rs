//! Character display drivers
//!
//! HD44780-compatible controllers wired in 4-bit mode behind a PCF8574
//! I2C expander ("LCD backpack").

pub mod hd44780;
pub mod transport;

pub use hd44780::{Hd44780, Lines, ROW_OFFSETS};
pub use transport::{Mode, Pcf8574Transport};
