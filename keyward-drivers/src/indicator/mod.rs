//! Lock indicator implementations

pub mod gpio;

pub use gpio::GpioIndicator;
