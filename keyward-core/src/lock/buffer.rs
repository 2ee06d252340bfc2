//! Entry buffer
//!
//! Holds the characters typed since the last clear or submit. Its
//! capacity matches one display row, so the cursor column for the next
//! character is always [`InputBuffer::len`].

use heapless::String;

use crate::config::INPUT_CAPACITY;

/// Errors from buffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BufferError {
    /// All slots are in use
    Full,
}

/// Typed characters awaiting submit
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputBuffer {
    chars: String<INPUT_CAPACITY>,
    len: u8,
}

impl InputBuffer {
    /// Create an empty buffer
    pub const fn new() -> Self {
        Self {
            chars: String::new(),
            len: 0,
        }
    }

    /// Append a character
    pub fn push(&mut self, ch: char) -> Result<(), BufferError> {
        if self.is_full() {
            return Err(BufferError::Full);
        }
        self.chars.push(ch).map_err(|_| BufferError::Full)?;
        self.len += 1;
        Ok(())
    }

    /// Number of characters entered
    pub fn len(&self) -> u8 {
        self.len
    }

    /// Check if nothing has been entered
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Check if no more characters fit
    pub fn is_full(&self) -> bool {
        usize::from(self.len) >= INPUT_CAPACITY
    }

    /// Entered characters
    pub fn as_str(&self) -> &str {
        self.chars.as_str()
    }

    /// Exact comparison against a credential
    pub fn matches(&self, credential: &str) -> bool {
        self.chars.as_bytes() == credential.as_bytes()
    }

    /// Drop every entered character
    pub fn clear(&mut self) {
        self.chars.clear();
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_match() {
        let mut buffer = InputBuffer::new();
        for ch in "2586A".chars() {
            buffer.push(ch).unwrap();
        }
        assert_eq!(buffer.len(), 5);
        assert!(buffer.matches("2586A"));
        assert!(!buffer.matches("2586"));
        assert!(!buffer.matches("2586AB"));
    }

    #[test]
    fn test_capacity() {
        let mut buffer = InputBuffer::new();
        for _ in 0..INPUT_CAPACITY {
            buffer.push('7').unwrap();
        }
        assert!(buffer.is_full());
        assert_eq!(buffer.push('7'), Err(BufferError::Full));
        assert_eq!(usize::from(buffer.len()), INPUT_CAPACITY);
    }

    #[test]
    fn test_clear() {
        let mut buffer = InputBuffer::new();
        buffer.push('1').unwrap();
        buffer.push('#').unwrap();
        buffer.clear();
        assert!(buffer.is_empty());
        assert_eq!(buffer.as_str(), "");
        assert!(buffer.matches(""));
    }
}
