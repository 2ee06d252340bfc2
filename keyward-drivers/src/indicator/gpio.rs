//! GPIO lock indicator
//!
//! Two lamp lines, one lit while locked and one while unlocked.

use keyward_core::state::LockState;
use keyward_core::traits::Indicator;
use keyward_hal::OutputPin;

/// Two-line GPIO indicator
///
/// The lines can be configured as active-high (default) or active-low.
pub struct GpioIndicator<P> {
    locked: P,
    unlocked: P,
    /// If true, lamp ON = pin LOW
    inverted: bool,
    state: LockState,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create an indicator showing [`LockState::Locked`]
    ///
    /// # Arguments
    /// - `locked`: Line lit while locked
    /// - `unlocked`: Line lit while unlocked
    /// - `inverted`: If true, a lamp is ON when its pin is LOW
    pub fn new(locked: P, unlocked: P, inverted: bool) -> Self {
        let mut indicator = Self {
            locked,
            unlocked,
            inverted,
            state: LockState::Locked,
        };
        indicator.show(LockState::Locked);
        indicator
    }

    /// Create an indicator with active-high lamps
    pub fn new_active_high(locked: P, unlocked: P) -> Self {
        Self::new(locked, unlocked, false)
    }

    /// Create an indicator with active-low lamps
    pub fn new_active_low(locked: P, unlocked: P) -> Self {
        Self::new(locked, unlocked, true)
    }
}

impl<P: OutputPin> Indicator for GpioIndicator<P> {
    fn show(&mut self, state: LockState) {
        self.state = state;
        let locked = state == LockState::Locked;

        // Normal: on=true, inverted=false → high
        // Inverted: on=true, inverted=true → low
        self.locked.set_state(locked != self.inverted);
        self.unlocked.set_state(!locked != self.inverted);
    }

    fn state(&self) -> LockState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
    }

    impl MockPin {
        fn new() -> Self {
            Self { high: false }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_indicator() {
        let mut indicator = GpioIndicator::new_active_high(MockPin::new(), MockPin::new());

        // Starts locked
        assert_eq!(indicator.state(), LockState::Locked);
        assert!(indicator.locked.is_set_high());
        assert!(!indicator.unlocked.is_set_high());

        indicator.show(LockState::Unlocked);
        assert_eq!(indicator.state(), LockState::Unlocked);
        assert!(!indicator.locked.is_set_high());
        assert!(indicator.unlocked.is_set_high());
    }

    #[test]
    fn test_active_low_indicator() {
        let mut indicator = GpioIndicator::new_active_low(MockPin::new(), MockPin::new());

        assert!(!indicator.locked.is_set_high());
        assert!(indicator.unlocked.is_set_high());

        indicator.show(LockState::Unlocked);
        assert!(indicator.locked.is_set_high());
        assert!(!indicator.unlocked.is_set_high());
    }

    #[test]
    fn test_lines_never_both_lit() {
        let mut indicator = GpioIndicator::new_active_high(MockPin::new(), MockPin::new());
        for state in [
            LockState::Unlocked,
            LockState::Locked,
            LockState::Locked,
            LockState::Unlocked,
        ] {
            indicator.show(state);
            assert_ne!(
                indicator.locked.is_set_high(),
                indicator.unlocked.is_set_high()
            );
        }
    }
}
