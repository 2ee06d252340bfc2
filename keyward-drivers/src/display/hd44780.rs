//! HD44780 character display controller
//!
//! Command layer over [`Pcf8574Transport`]: power-up handshake, clear,
//! cursor addressing and character output for 16-column displays.

use embedded_hal::delay::DelayNs;
use keyward_core::traits::{CharDisplay, DISPLAY_ROWS};
use keyward_hal::I2cBus;

use super::transport::{Mode, Pcf8574Transport};

/// HD44780 instruction set (subset used here)
mod cmd {
    pub const CLEAR_DISPLAY: u8 = 0x01;
    pub const ENTRY_MODE_SET: u8 = 0x04;
    pub const DISPLAY_CONTROL: u8 = 0x08;
    pub const FUNCTION_SET: u8 = 0x20;
    pub const SET_DDRAM_ADDR: u8 = 0x80;

    // Entry mode flags
    pub const ENTRY_INCREMENT: u8 = 0x02;

    // Display control flags
    pub const DISPLAY_ON: u8 = 0x04;

    // Function set flags
    pub const MODE_8BIT: u8 = 0x10;
    pub const TWO_LINE: u8 = 0x08;
}

/// DDRAM base address of each row; rows 2 and 3 only exist on 4-line parts
pub const ROW_OFFSETS: [u8; 4] = [0x00, 0x40, 0x14, 0x54];

/// Wait after power-up before the first transfer (ms)
const POWER_UP_MS: u32 = 50;

/// Hold after the first 8-bit reset (µs)
const FIRST_RESET_US: u32 = 4500;

/// Hold after the later resets and the switch to 4-bit mode (µs)
const RESET_US: u32 = 150;

/// Settle after clear, which rewrites all of DDRAM (µs)
const CLEAR_US: u32 = 2000;

/// Line mode selected by function-set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Lines {
    #[default]
    One,
    Two,
}

/// HD44780 driver in 4-bit mode
pub struct Hd44780<B, D> {
    transport: Pcf8574Transport<B, D>,
    lines: Lines,
}

impl<B: I2cBus, D: DelayNs> Hd44780<B, D> {
    /// Create a driver; nothing is sent until [`Hd44780::initialize`]
    pub fn new(transport: Pcf8574Transport<B, D>, lines: Lines) -> Self {
        Self { transport, lines }
    }

    /// Run the power-up handshake
    ///
    /// Safe to repeat: every run drives the controller through the same
    /// reset into the same configured state.
    pub fn initialize(&mut self) -> Result<(), B::Error> {
        self.transport.begin()?;
        self.transport.delay_ms(POWER_UP_MS);

        // Three 8-bit resets bring the controller to a known state even
        // if it was mid-transfer in 4-bit mode
        let reset = cmd::FUNCTION_SET | cmd::MODE_8BIT;
        self.transport.send_nibble(reset, Mode::Command)?;
        self.transport.delay_us(FIRST_RESET_US);
        self.transport.send_nibble(reset, Mode::Command)?;
        self.transport.delay_us(RESET_US);
        self.transport.send_nibble(reset, Mode::Command)?;
        self.transport.delay_us(RESET_US);

        // Switch to 4-bit transfers
        self.transport.send_nibble(cmd::FUNCTION_SET, Mode::Command)?;
        self.transport.delay_us(RESET_US);

        let lines = match self.lines {
            Lines::One => 0,
            Lines::Two => cmd::TWO_LINE,
        };
        self.command(cmd::FUNCTION_SET | lines)?;
        self.command(cmd::DISPLAY_CONTROL)?;
        self.clear()?;
        self.command(cmd::ENTRY_MODE_SET | cmd::ENTRY_INCREMENT)?;
        self.command(cmd::DISPLAY_CONTROL | cmd::DISPLAY_ON)
    }

    /// Blank the display and home the cursor
    ///
    /// Returns after the controller's clear settle time.
    pub fn clear(&mut self) -> Result<(), B::Error> {
        self.command(cmd::CLEAR_DISPLAY)?;
        self.transport.delay_us(CLEAR_US);
        Ok(())
    }

    /// Move the cursor; rows past the last hardware row are clamped
    pub fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), B::Error> {
        let row = row.min(DISPLAY_ROWS - 1);
        let address = ROW_OFFSETS[usize::from(row)].wrapping_add(column);
        self.command(cmd::SET_DDRAM_ADDR | address)
    }

    /// Write one character; non-ASCII characters show as `?`
    pub fn write_char(&mut self, ch: char) -> Result<(), B::Error> {
        let byte = if ch.is_ascii() { ch as u8 } else { b'?' };
        self.transport.send_byte(byte, Mode::Data)
    }

    /// Write a string from the cursor, without wrapping
    pub fn write_str(&mut self, text: &str) -> Result<(), B::Error> {
        for ch in text.chars() {
            self.write_char(ch)?;
        }
        Ok(())
    }

    fn command(&mut self, value: u8) -> Result<(), B::Error> {
        self.transport.send_byte(value, Mode::Command)
    }
}

impl<B: I2cBus, D: DelayNs> CharDisplay for Hd44780<B, D> {
    type Error = B::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        Hd44780::clear(self)
    }

    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error> {
        Hd44780::set_cursor(self, column, row)
    }

    fn write_char(&mut self, ch: char) -> Result<(), Self::Error> {
        Hd44780::write_char(self, ch)
    }

    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        Hd44780::write_str(self, text)
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;
    use crate::mock::{bytes, recorder, Log, MockBus, MockDelay, Op};
    use keyward_core::traits::DisplayExt;

    fn lcd(lines: Lines) -> (Hd44780<MockBus, MockDelay>, Log) {
        let (bus, delay, log) = recorder();
        let transport = Pcf8574Transport::new(bus, delay, 0x27);
        (Hd44780::new(transport, lines), log)
    }

    /// High nibbles latched by the display, one per enable pulse
    fn latched(bytes: &[u8]) -> Vec<u8> {
        bytes
            .iter()
            .filter(|b| *b & 0x04 != 0)
            .map(|b| b >> 4)
            .collect()
    }

    /// Pair latched nibbles into bytes
    fn pack(nibbles: &[u8]) -> Vec<u8> {
        nibbles.chunks(2).map(|p| (p[0] << 4) | p[1]).collect()
    }

    #[test]
    fn test_initialize_sequence() {
        let (mut lcd, log) = lcd(Lines::One);
        lcd.initialize().unwrap();

        let written = bytes(&log);
        assert_eq!(written[0], 0x08);

        let nibbles = latched(&written);
        // Resets and the switch to 4-bit are single transfers
        assert_eq!(&nibbles[..4], &[0x3, 0x3, 0x3, 0x2]);
        // Then whole commands: function set, display off, clear,
        // entry mode, display on
        assert_eq!(pack(&nibbles[4..]), [0x20, 0x08, 0x01, 0x06, 0x0C]);

        // Every command byte goes to the instruction register
        assert!(written[1..].iter().all(|b| b & 0x01 == 0));
    }

    #[test]
    fn test_initialize_delays() {
        let (mut lcd, log) = lcd(Lines::One);
        lcd.initialize().unwrap();

        let log = log.borrow();
        // Power-up wait right after the bus begin
        assert_eq!(log[1], Op::Delay(50_000));

        // First reset is held for milliseconds
        let first_reset_end = log
            .iter()
            .position(|op| *op == Op::Delay(50))
            .unwrap();
        assert_eq!(log[first_reset_end + 1], Op::Delay(4500));

        // Clear is followed by its settle time before the next write
        let clear_at = log
            .iter()
            .position(|op| *op == Op::Delay(2000))
            .unwrap();
        assert!(matches!(log[clear_at - 1], Op::Delay(50)));
        assert!(matches!(log[clear_at + 1], Op::Write(_, _)));
    }

    #[test]
    fn test_two_line_function_set() {
        let (mut lcd, log) = lcd(Lines::Two);
        lcd.initialize().unwrap();

        let nibbles = latched(&bytes(&log));
        assert_eq!(pack(&nibbles[4..6]), [0x28]);
    }

    #[test]
    fn test_initialize_is_repeatable() {
        let (mut lcd, log) = lcd(Lines::One);
        lcd.initialize().unwrap();
        let once = log.borrow().clone();

        lcd.initialize().unwrap();
        let twice = log.borrow().clone();

        assert_eq!(twice.len(), once.len() * 2);
        assert_eq!(&twice[once.len()..], &once[..]);
    }

    #[test]
    fn test_set_cursor_addresses() {
        let (mut lcd, log) = lcd(Lines::One);

        lcd.set_cursor(0, 0).unwrap();
        lcd.set_cursor(3, 1).unwrap();
        // Rows beyond the second are clamped to it
        lcd.set_cursor(2, 5).unwrap();

        let nibbles = latched(&bytes(&log));
        assert_eq!(pack(&nibbles), [0x80, 0xC3, 0xC2]);
    }

    #[test]
    fn test_write_str_sends_data() {
        let (mut lcd, log) = lcd(Lines::One);
        lcd.write_str("2#").unwrap();

        let written = bytes(&log);
        assert!(written.iter().all(|b| b & 0x01 == 0x01));
        assert_eq!(pack(&latched(&written)), [b'2', b'#']);
    }

    #[test]
    fn test_non_ascii_replaced() {
        let (mut lcd, log) = lcd(Lines::One);
        lcd.write_char('é').unwrap();
        assert_eq!(pack(&latched(&bytes(&log))), [b'?']);
    }

    #[test]
    fn test_show_message_through_trait() {
        let (mut lcd, log) = lcd(Lines::One);
        lcd.show_message("Hi").unwrap();

        let nibbles = latched(&bytes(&log));
        assert_eq!(pack(&nibbles), [0x01, 0x80, b'H', b'i']);
    }

    #[test]
    fn test_bus_failure_surfaces() {
        let (mut bus, delay, _log) = recorder();
        bus.fail = true;
        let mut lcd = Hd44780::new(Pcf8574Transport::new(bus, delay, 0x27), Lines::One);

        assert_eq!(lcd.initialize(), Err(()));
        assert_eq!(CharDisplay::write_char(&mut lcd, 'x'), Err(()));
    }
}
