//! Keyward Hardware Abstraction Layer
//!
//! This crate defines the capability traits the lock logic and drivers are
//! written against. Chip-specific crates implement them, so the scanning
//! and display protocols never touch raw port registers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  keyward-core / keyward-drivers         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  keyward-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ keyward-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::FlexPin`] - Digital I/O
//! - [`i2c::I2cBus`] - Two-wire bus writes
//! - [`uart::UartTx`] - One-way serial output

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;
pub mod uart;

pub use gpio::{FlexPin, InputPin, OutputPin};
pub use i2c::I2cBus;
pub use uart::UartTx;
