//! GPIO pin abstractions
//!
//! Provides traits for digital input, output and direction-switching pins
//! that can be implemented by chip-specific HALs.

/// Digital output pin
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Pin that switches between a driven-low output and a pulled-up input
///
/// Keypad column lines idle as inputs with pull-up and are only driven
/// while they are being scanned. Implementations own the bank/port
/// details, so a matrix whose lines span several I/O banks looks uniform
/// to the scanner.
pub trait FlexPin {
    /// Reconfigure as a push-pull output and drive it low
    fn drive_low(&mut self);

    /// Reconfigure as an input with the internal pull-up enabled
    fn set_input_pull_up(&mut self);

    /// Sample the pin level (true = high)
    fn read(&self) -> bool;
}
