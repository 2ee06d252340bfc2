//! GPIO pin wrappers
//!
//! RP2040 exposes every user GPIO on a single bank, so keypad columns
//! need no per-bank handling here; the wrappers only adapt embassy pin
//! drivers to the `keyward-hal` traits.

use embassy_rp::gpio::{Flex, Input, Level, Output, Pin, Pull};
use embassy_rp::Peri;

/// Keypad row: input with pull-up
pub struct KeypadRow<'d> {
    pin: Input<'d>,
}

impl<'d> KeypadRow<'d> {
    /// Configure `pin` as a pulled-up input
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Input::new(pin, Pull::Up),
        }
    }
}

impl keyward_hal::InputPin for KeypadRow<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Keypad column: pulled-up input, driven low only while scanned
pub struct KeypadColumn<'d> {
    pin: Flex<'d>,
}

impl<'d> KeypadColumn<'d> {
    /// Configure `pin` as a pulled-up input
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(Pull::Up);
        pin.set_as_input();
        Self { pin }
    }
}

impl keyward_hal::FlexPin for KeypadColumn<'_> {
    fn drive_low(&mut self) {
        // Level first so the pin never glitches high when it turns around
        self.pin.set_low();
        self.pin.set_as_output();
    }

    fn set_input_pull_up(&mut self) {
        self.pin.set_as_input();
        self.pin.set_pull(Pull::Up);
    }

    fn read(&self) -> bool {
        self.pin.is_high()
    }
}

/// Indicator lamp output
pub struct LampPin<'d> {
    pin: Output<'d>,
}

impl<'d> LampPin<'d> {
    /// Configure `pin` as an output, initially low
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        Self {
            pin: Output::new(pin, Level::Low),
        }
    }
}

impl keyward_hal::OutputPin for LampPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
