//! Lock task
//!
//! Polls the keypad at the configured scan period and feeds the lock
//! controller. Every deadline inside the controller is checked against
//! the embassy monotonic clock, so this loop never blocks for longer
//! than one scan pass.

use defmt::*;
use embassy_rp::peripherals::I2C0;
use embassy_time::{Delay, Duration, Instant, Ticker, Timer};

use keyward_core::lock::LockController;
use keyward_core::state::LockEvent;
use keyward_core::traits::Keypad;
use keyward_drivers::display::Hd44780;
use keyward_drivers::indicator::GpioIndicator;
use keyward_drivers::keypad::MatrixKeypad;
use keyward_hal_rp2040::{BlockingI2c, KeypadColumn, KeypadRow, LampPin};

use crate::channels::ATTEMPTS_REPORT;

/// LCD on I2C0
pub type Lcd = Hd44780<BlockingI2c<'static, I2C0>, Delay>;

/// Locked/unlocked lamps
pub type Lamps = GpioIndicator<LampPin<'static>>;

/// 4x4 matrix keypad
pub type Keys = MatrixKeypad<KeypadRow<'static>, KeypadColumn<'static>, Delay>;

/// Lock controller wired to the board
pub type Controller = LockController<Lcd, Lamps>;

/// Milliseconds since boot, wrapping
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

fn log_event(event: &LockEvent) {
    match event {
        LockEvent::KeyAccepted { key, len } => debug!("Key '{}' accepted ({} entered)", key, len),
        LockEvent::Cleared => info!("Entry cleared"),
        LockEvent::Rejected { attempts_left } => {
            info!("Wrong credential, {} attempts left", attempts_left)
        }
        LockEvent::LockoutStarted => warn!("Attempts exhausted, lockout started"),
        LockEvent::Countdown { seconds_left } => debug!("Lockout: {}s left", seconds_left),
        LockEvent::LockoutEnded => info!("Lockout ended"),
        LockEvent::Unlocked => info!("Access granted"),
        LockEvent::InputIgnored => debug!("Entry full, key ignored"),
        LockEvent::Discarded => trace!("Key discarded while input suspended"),
    }
}

/// Lock task
#[embassy_executor::task]
pub async fn lock_task(mut controller: Controller, mut keypad: Keys, scan_period_ms: u32) {
    let mut ticker = Ticker::every(Duration::from_millis(scan_period_ms as u64));

    controller.start();
    info!(
        "Lock controller started, {} attempts allowed",
        controller.attempts_remaining()
    );

    loop {
        let now = now_ms();

        if let Some(event) = controller.tick(now) {
            log_event(&event);
        }

        if controller.is_finished(now) {
            info!("Session complete, keypad scanning stopped");
            break;
        }

        if let Some(key) = keypad.scan() {
            trace!("Scan hit row {} column {}", key.row, key.column);
            let event = controller.handle_key(key.key, now);
            log_event(&event);

            if let Some(attempts_left) = event.attempts_left() {
                if ATTEMPTS_REPORT.try_send(attempts_left).is_err() {
                    warn!("Debug channel full, report dropped");
                }
            }
        }

        ticker.next().await;
    }

    // Returning would drop the controller and release the lamp pins.
    // Keep it owned so the unlocked lamp stays lit until power-off.
    loop {
        Timer::after_secs(60).await;
        trace!("Session idle, indicator {:?}", controller.lock_state());
    }
}
