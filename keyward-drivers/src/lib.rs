//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in keyward-core:
//!
//! - Character display (HD44780 behind a PCF8574 I2C backpack)
//! - 4x4 matrix keypad scanner
//! - Two-line GPIO lock indicator

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod indicator;
pub mod keypad;

#[cfg(test)]
pub(crate) mod mock;
