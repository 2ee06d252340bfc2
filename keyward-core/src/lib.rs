//! Board-agnostic core logic for the keyward access controller
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Hardware abstraction traits (character display, indicator, keypad)
//! - Lock state machine (password entry, attempt counting, lockout)
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod lock;
pub mod state;
pub mod traits;
