//! RP2040-specific HAL for the keyward access controller
//!
//! This crate provides RP2040 implementations of the shared
//! `keyward-hal` traits on top of `embassy-rp`:
//!
//! - Keypad row/column pins and indicator lamp pins
//! - Blocking I2C master for the display backpack
//! - Transmit-only UART for the debug channel

#![no_std]

pub mod gpio;
pub mod i2c;
pub mod uart;

pub use gpio::{KeypadColumn, KeypadRow, LampPin};
pub use i2c::{BlockingI2c, I2cBusError};
pub use uart::{DebugUart, UartError};
