//! 4x4 matrix keypad scanner
//!
//! Rows are pulled-up inputs. Columns idle as pulled-up inputs too and
//! are driven low one at a time; a row reading low means the key at that
//! intersection is down. At most one column is ever driven, so two
//! pressed keys in the same row can never short two driven outputs.
//!
//! There is no debouncing here. The caller paces accepted keys.

use embedded_hal::delay::DelayNs;
use keyward_core::config::{KeyMap, KEYPAD_COLS, KEYPAD_ROWS};
use keyward_core::state::KeyEvent;
use keyward_core::traits::Keypad;
use keyward_hal::{FlexPin, InputPin};

/// Default wait between driving a column and sampling rows (µs)
pub const DEFAULT_SETTLE_US: u32 = 10;

/// Matrix keypad scanned over GPIO
pub struct MatrixKeypad<R, C, D> {
    rows: [R; KEYPAD_ROWS],
    columns: [C; KEYPAD_COLS],
    delay: D,
    keymap: KeyMap,
    settle_us: u32,
}

impl<R: InputPin, C: FlexPin, D: DelayNs> MatrixKeypad<R, C, D> {
    /// Create a scanner and park every column as a pulled-up input
    pub fn new(
        rows: [R; KEYPAD_ROWS],
        mut columns: [C; KEYPAD_COLS],
        delay: D,
        keymap: KeyMap,
        settle_us: u32,
    ) -> Self {
        for column in columns.iter_mut() {
            column.set_input_pull_up();
        }
        Self {
            rows,
            columns,
            delay,
            keymap,
            settle_us,
        }
    }

    /// Run one scan pass, stopping at the first pressed key
    pub fn scan_pass(&mut self) -> Option<KeyEvent> {
        for column in 0..KEYPAD_COLS {
            self.columns[column].drive_low();
            self.delay.delay_us(self.settle_us);

            let row = self.rows.iter().position(|r| r.is_low());

            // Release before anything else so the next column never
            // overlaps this one
            self.columns[column].set_input_pull_up();

            if let Some(row) = row {
                let key = self.keymap.key_at(row, column)?;
                return Some(KeyEvent {
                    row: row as u8,
                    column: column as u8,
                    key,
                });
            }
        }
        None
    }
}

impl<R: InputPin, C: FlexPin, D: DelayNs> Keypad for MatrixKeypad<R, C, D> {
    fn scan(&mut self) -> Option<KeyEvent> {
        self.scan_pass()
    }
}
