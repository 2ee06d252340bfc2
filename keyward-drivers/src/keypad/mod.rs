//! Keypad drivers

pub mod matrix;

pub use matrix::{MatrixKeypad, DEFAULT_SETTLE_US};
