//! Lock controller
//!
//! Owns the entry buffer, attempt counter and phase, and drives the
//! display and indicator as keys arrive. Long waits (key pacing, lockout
//! notice, lockout countdown, unlock hold) are deadlines checked against
//! a caller-supplied millisecond clock, so the polling loop never blocks
//! on them. Keys offered while a deadline is pending are discarded.

use core::fmt::Write;

use heapless::String;

use super::attempts::AttemptCounter;
use super::buffer::InputBuffer;
use crate::config::{LockConfig, INPUT_CAPACITY};
use crate::state::{LockEvent, LockState, Phase};
use crate::traits::{CharDisplay, DisplayExt, Indicator};

/// Entry prompt, first row
pub const PROMPT: &str = "Enter Password";

/// Shown after the credential matches
pub const GRANTED: &str = "Access Granted";

/// Row that echoes typed characters
pub const ENTRY_ROW: u8 = 1;

type Line = String<INPUT_CAPACITY>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Deadline {
    since_ms: u32,
    duration_ms: u32,
}

impl Deadline {
    fn new(since_ms: u32, duration_ms: u32) -> Self {
        Self {
            since_ms,
            duration_ms,
        }
    }

    fn expired(&self, now_ms: u32) -> bool {
        now_ms.wrapping_sub(self.since_ms) >= self.duration_ms
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Lockout {
    /// When the notice went up
    since_ms: u32,
    /// Countdown second last drawn
    shown: Option<u32>,
}

/// Password-entry state machine
pub struct LockController<D, I> {
    display: D,
    indicator: I,
    config: LockConfig,
    buffer: InputBuffer,
    attempts: AttemptCounter,
    phase: Phase,
    hold: Option<Deadline>,
    lockout: Option<Lockout>,
}

impl<D: CharDisplay, I: Indicator> LockController<D, I> {
    /// Create a controller in the entry phase
    ///
    /// Nothing is drawn until [`LockController::start`].
    pub fn new(display: D, indicator: I, config: LockConfig) -> Self {
        let attempts = AttemptCounter::new(config.max_attempts);
        Self {
            display,
            indicator,
            config,
            buffer: InputBuffer::new(),
            attempts,
            phase: Phase::AwaitingInput,
            hold: None,
            lockout: None,
        }
    }

    /// Draw the prompt and show the locked indicator
    pub fn start(&mut self) {
        self.indicator.show(LockState::Locked);
        self.show_prompt();
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Lock state shown by the indicator
    pub fn lock_state(&self) -> LockState {
        self.phase.lock_state()
    }

    /// Attempts left before a lockout
    pub fn attempts_remaining(&self) -> u8 {
        self.attempts.remaining()
    }

    /// Characters entered so far
    pub fn input(&self) -> &InputBuffer {
        &self.buffer
    }

    /// Active policy
    pub fn config(&self) -> &LockConfig {
        &self.config
    }

    /// Get access to the display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get access to the indicator
    pub fn indicator(&self) -> &I {
        &self.indicator
    }

    /// Check if a key offered now would be processed
    pub fn accepts_input(&self, now_ms: u32) -> bool {
        self.phase.accepts_keys() && !self.holding(now_ms)
    }

    /// Check if the session is over and scanning can stop
    pub fn is_finished(&self, now_ms: u32) -> bool {
        self.phase.is_terminal() && !self.holding(now_ms)
    }

    /// Process one key
    pub fn handle_key(&mut self, key: char, now_ms: u32) -> LockEvent {
        if !self.accepts_input(now_ms) {
            return LockEvent::Discarded;
        }
        self.hold = None;

        if key == self.config.clear_key {
            self.buffer.clear();
            self.show_prompt();
            self.pace(now_ms);
            LockEvent::Cleared
        } else if key == self.config.submit_key {
            self.submit(now_ms)
        } else {
            self.enter(key, now_ms)
        }
    }

    /// Advance timers
    ///
    /// Call on every pass of the polling loop.
    pub fn tick(&mut self, now_ms: u32) -> Option<LockEvent> {
        if let Some(hold) = self.hold {
            if hold.expired(now_ms) {
                self.hold = None;
            }
        }

        let mut lockout = self.lockout?;
        let elapsed = now_ms.wrapping_sub(lockout.since_ms);
        if elapsed < self.config.lockout_notice_ms {
            return None;
        }

        let counted = elapsed - self.config.lockout_notice_ms;
        if counted >= self.config.lockout_ms() {
            self.end_lockout();
            return Some(LockEvent::LockoutEnded);
        }

        let second = counted / 1000;
        if lockout.shown == Some(second) {
            return None;
        }
        lockout.shown = Some(second);
        self.lockout = Some(lockout);

        let seconds_left = u32::from(self.config.lockout_secs) - 1 - second;
        let mut line = Line::new();
        let _ = write!(line, "Wait {} seconds", seconds_left);
        self.display.show_message(&line).ok();

        Some(LockEvent::Countdown {
            seconds_left: seconds_left as u8,
        })
    }

    fn submit(&mut self, now_ms: u32) -> LockEvent {
        let matched = self.buffer.matches(&self.config.credential);
        self.buffer.clear();

        if matched {
            self.attempts.reset();
            self.display.show_message(GRANTED).ok();
            self.indicator.show(LockState::Unlocked);
            self.phase = Phase::Unlocked;
            self.hold = Some(Deadline::new(now_ms, self.config.unlock_hold_ms));
            return LockEvent::Unlocked;
        }

        let attempts_left = self.attempts.decrement();
        if self.attempts.is_exhausted() {
            let mut line = Line::new();
            let _ = write!(line, "{}s to retry", self.config.lockout_secs);
            self.display.show_message(&line).ok();
            self.phase = Phase::LockedOut;
            self.lockout = Some(Lockout {
                since_ms: now_ms,
                shown: None,
            });
            LockEvent::LockoutStarted
        } else {
            let mut line = Line::new();
            let _ = write!(line, "{} tries left", attempts_left);
            self.display.show_message(&line).ok();
            self.pace(now_ms);
            LockEvent::Rejected { attempts_left }
        }
    }

    fn enter(&mut self, key: char, now_ms: u32) -> LockEvent {
        let column = self.buffer.len();
        if column >= self.config.entry_columns || self.buffer.push(key).is_err() {
            return LockEvent::InputIgnored;
        }

        self.display.set_cursor(column, ENTRY_ROW).ok();
        self.display.write_char(key).ok();
        self.pace(now_ms);

        LockEvent::KeyAccepted {
            key,
            len: self.buffer.len(),
        }
    }

    fn end_lockout(&mut self) {
        self.lockout = None;
        self.attempts.reset();
        self.buffer.clear();
        self.phase = Phase::AwaitingInput;
        self.show_prompt();
    }

    fn show_prompt(&mut self) {
        self.display.show_message(PROMPT).ok();
    }

    fn pace(&mut self, now_ms: u32) {
        self.hold = Some(Deadline::new(now_ms, self.config.key_pacing_ms));
    }

    fn holding(&self, now_ms: u32) -> bool {
        self.hold.is_some_and(|hold| !hold.expired(now_ms))
    }
}
