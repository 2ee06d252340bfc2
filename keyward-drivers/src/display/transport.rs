//! PCF8574 nibble transport
//!
//! The expander's eight outputs carry one 4-bit transfer at a time:
//! data in the high nibble, control lines in the low nibble.
//!
//! ```text
//! bit  7   6   5   4   3   2   1   0
//!     D7  D6  D5  D4  BL  E   RW  RS
//! ```
//!
//! The display latches a nibble on the falling edge of E, so every
//! transfer is presented, raised with E set, then dropped with E clear.

use embedded_hal::delay::DelayNs;
use keyward_hal::I2cBus;

/// Control bits in the low nibble of every transfer
pub mod control {
    /// Backlight, always set
    pub const BACKLIGHT: u8 = 0x08;
    /// Enable (latch strobe)
    pub const ENABLE: u8 = 0x04;
    /// Read/write, always write (0)
    pub const READ_WRITE: u8 = 0x02;
    /// Register select: 0 = command, 1 = data
    pub const REGISTER_SELECT: u8 = 0x01;
}

/// Minimum enable-high time (µs)
pub const ENABLE_PULSE_US: u32 = 1;

/// Settle time after each latch (µs)
pub const LATCH_SETTLE_US: u32 = 50;

/// Target register of a transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Mode {
    Command = 0x00,
    Data = control::REGISTER_SELECT,
}

/// Byte/nibble transport to a display behind a PCF8574
pub struct Pcf8574Transport<B, D> {
    bus: B,
    delay: D,
    address: u8,
}

impl<B: I2cBus, D: DelayNs> Pcf8574Transport<B, D> {
    /// Create a transport for the expander at `address` (7-bit)
    pub fn new(bus: B, delay: D, address: u8) -> Self {
        Self {
            bus,
            delay,
            address,
        }
    }

    /// Drive every display line low with the backlight on
    pub fn begin(&mut self) -> Result<(), B::Error> {
        self.expander_write(control::BACKLIGHT)
    }

    /// Send one 4-bit transfer and latch it
    ///
    /// Only the high nibble of `nibble` is used.
    pub fn send_nibble(&mut self, nibble: u8, mode: Mode) -> Result<(), B::Error> {
        let frame = (nibble & 0xF0) | mode as u8 | control::BACKLIGHT;
        self.expander_write(frame)?;
        self.pulse_enable(frame)
    }

    /// Send a full byte as two transfers, high nibble first
    pub fn send_byte(&mut self, value: u8, mode: Mode) -> Result<(), B::Error> {
        self.send_nibble(value & 0xF0, mode)?;
        self.send_nibble(value << 4, mode)
    }

    /// Blocking wait in microseconds
    pub fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    /// Blocking wait in milliseconds
    pub fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }

    fn pulse_enable(&mut self, frame: u8) -> Result<(), B::Error> {
        self.expander_write(frame | control::ENABLE)?;
        self.delay.delay_us(ENABLE_PULSE_US);
        self.expander_write(frame & !control::ENABLE)?;
        self.delay.delay_us(LATCH_SETTLE_US);
        Ok(())
    }

    fn expander_write(&mut self, frame: u8) -> Result<(), B::Error> {
        self.bus.write(self.address, &[frame])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{bytes, recorder, Op};

    #[test]
    fn test_nibble_enable_pulse() {
        let (bus, delay, log) = recorder();
        let mut transport = Pcf8574Transport::new(bus, delay, 0x27);

        transport.send_nibble(0x30, Mode::Command).unwrap();

        assert_eq!(
            *log.borrow(),
            [
                Op::Write(0x27, 0x38),
                Op::Write(0x27, 0x3C),
                Op::Delay(1),
                Op::Write(0x27, 0x38),
                Op::Delay(50),
            ]
        );
    }

    #[test]
    fn test_low_nibble_is_ignored() {
        let (bus, delay, log) = recorder();
        let mut transport = Pcf8574Transport::new(bus, delay, 0x27);

        // Stray low bits must not leak into the control lines
        transport.send_nibble(0x3F, Mode::Command).unwrap();
        assert_eq!(bytes(&log), [0x38, 0x3C, 0x38]);
    }

    #[test]
    fn test_data_byte_split() {
        let (bus, delay, log) = recorder();
        let mut transport = Pcf8574Transport::new(bus, delay, 0x27);

        transport.send_byte(b'A', Mode::Data).unwrap();

        // 'A' = 0x41: high nibble 0x4, low nibble 0x1, RS set, backlight on
        assert_eq!(bytes(&log), [0x49, 0x4D, 0x49, 0x19, 0x1D, 0x19]);
    }

    #[test]
    fn test_command_byte_split() {
        let (bus, delay, log) = recorder();
        let mut transport = Pcf8574Transport::new(bus, delay, 0x3F);

        transport.send_byte(0x0C, Mode::Command).unwrap();

        assert_eq!(bytes(&log), [0x08, 0x0C, 0x08, 0xC8, 0xCC, 0xC8]);
        assert!(log
            .borrow()
            .iter()
            .all(|op| !matches!(op, Op::Write(addr, _) if *addr != 0x3F)));
    }

    #[test]
    fn test_bus_error_propagates() {
        let (mut bus, delay, log) = recorder();
        bus.fail = true;
        let mut transport = Pcf8574Transport::new(bus, delay, 0x27);

        assert_eq!(transport.send_byte(0x01, Mode::Command), Err(()));
        assert!(log.borrow().is_empty());
    }
}
