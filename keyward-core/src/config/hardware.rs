//! Board configuration
//!
//! Keypad layout, display geometry and scan timing. Pin numbers are
//! board-specific and live with the firmware.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keypad rows
pub const KEYPAD_ROWS: usize = 4;

/// Keypad columns
pub const KEYPAD_COLS: usize = 4;

/// Common address of a PCF8574 display backpack with all jumpers open
pub const DEFAULT_DISPLAY_ADDRESS: u8 = 0x27;

/// Logical character for every (row, column) intersection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct KeyMap(pub [[char; KEYPAD_COLS]; KEYPAD_ROWS]);

/// Standard 4x4 membrane keypad layout
pub const DEFAULT_KEYMAP: KeyMap = KeyMap([
    ['1', '2', '3', 'A'],
    ['4', '5', '6', 'B'],
    ['7', '8', '9', 'C'],
    ['*', '0', '#', 'D'],
]);

impl KeyMap {
    /// Character at an intersection, `None` outside the matrix
    pub fn key_at(&self, row: usize, column: usize) -> Option<char> {
        self.0.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Whether any key produces `ch`
    pub fn contains(&self, ch: char) -> bool {
        self.0.iter().any(|row| row.contains(&ch))
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        DEFAULT_KEYMAP
    }
}

/// Board-level settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoardConfig {
    /// 7-bit address of the display backpack
    pub display_address: u8,
    /// Visible characters per display row
    pub display_columns: u8,
    /// Keypad layout
    pub keymap: KeyMap,
    /// Interval between keypad scan passes (ms)
    pub scan_period_ms: u32,
    /// Wait between driving a column and sampling the rows (µs)
    pub column_settle_us: u32,
    /// Debug channel baud rate
    pub debug_baudrate: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            display_address: DEFAULT_DISPLAY_ADDRESS,
            display_columns: 16,
            keymap: DEFAULT_KEYMAP,
            scan_period_ms: 20,
            column_settle_us: 10,
            debug_baudrate: 115200,
        }
    }
}
