//! Character display trait

/// Rows on the two-line character display
pub const DISPLAY_ROWS: u8 = 2;

/// Trait for a character display with an explicit cursor
///
/// Characters do not wrap; callers keep the column inside the visible
/// width. Implementations must honour the controller's settle time after
/// [`CharDisplay::clear`] before the next write reaches the hardware.
pub trait CharDisplay {
    /// Bus error from the underlying transport
    type Error;

    /// Blank the display and home the cursor
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Move the cursor
    ///
    /// - `column`: 0-based column
    /// - `row`: 0-based row, clamped to the last hardware row
    fn set_cursor(&mut self, column: u8, row: u8) -> Result<(), Self::Error>;

    /// Write one character at the cursor
    fn write_char(&mut self, ch: char) -> Result<(), Self::Error>;

    /// Write a string at the cursor
    fn write_str(&mut self, text: &str) -> Result<(), Self::Error> {
        for ch in text.chars() {
            self.write_char(ch)?;
        }
        Ok(())
    }
}

/// Helper trait for drawing whole messages
pub trait DisplayExt: CharDisplay {
    /// Clear the screen and show `text` on the first row
    fn show_message(&mut self, text: &str) -> Result<(), Self::Error> {
        self.clear()?;
        self.set_cursor(0, 0)?;
        self.write_str(text)
    }
}

// Blanket implementation for all CharDisplay types
impl<T: CharDisplay> DisplayExt for T {}
