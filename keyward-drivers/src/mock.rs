//! Test doubles shared by the driver tests

extern crate std;

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::delay::DelayNs;
use keyward_hal::I2cBus;

/// One bus byte or delay, in the order they happened
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// (address, byte)
    Write(u8, u8),
    /// Microseconds
    Delay(u32),
}

pub type Log = Rc<RefCell<Vec<Op>>>;

/// I2C bus that records every written byte
pub struct MockBus {
    log: Log,
    pub fail: bool,
}

impl I2cBus for MockBus {
    type Error = ();

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        let mut log = self.log.borrow_mut();
        for b in data {
            log.push(Op::Write(address, *b));
        }
        Ok(())
    }
}

/// Delay that records requested durations
pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Op::Delay(ns.div_ceil(1000)));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Op::Delay(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Op::Delay(ms * 1000));
    }
}

/// Bus and delay sharing one log
pub fn recorder() -> (MockBus, MockDelay, Log) {
    let log: Log = Rc::new(RefCell::new(Vec::new()));
    (
        MockBus {
            log: log.clone(),
            fail: false,
        },
        MockDelay { log: log.clone() },
        log,
    )
}

/// Written bytes, ignoring delays
pub fn bytes(log: &Log) -> Vec<u8> {
    log.borrow()
        .iter()
        .filter_map(|op| match op {
            Op::Write(_, b) => Some(*b),
            Op::Delay(_) => None,
        })
        .collect()
}

/// Delay that does nothing
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}
