//! Remaining-attempt counter

/// Failed submits left before a lockout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AttemptCounter {
    remaining: u8,
    max: u8,
}

impl AttemptCounter {
    /// Create a full counter
    pub const fn new(max: u8) -> Self {
        Self {
            remaining: max,
            max,
        }
    }

    /// Attempts left
    pub fn remaining(&self) -> u8 {
        self.remaining
    }

    /// Record a failed submit and return what is left
    pub fn decrement(&mut self) -> u8 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }

    /// Check if a lockout is due
    pub fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }

    /// Refill on unlock or when a lockout completes
    pub fn reset(&mut self) {
        self.remaining = self.max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_down_to_zero() {
        let mut counter = AttemptCounter::new(3);
        assert_eq!(counter.decrement(), 2);
        assert_eq!(counter.decrement(), 1);
        assert!(!counter.is_exhausted());
        assert_eq!(counter.decrement(), 0);
        assert!(counter.is_exhausted());

        // Never wraps
        assert_eq!(counter.decrement(), 0);
    }

    #[test]
    fn test_reset() {
        let mut counter = AttemptCounter::new(3);
        counter.decrement();
        counter.decrement();
        counter.reset();
        assert_eq!(counter.remaining(), 3);
    }
}
