//! Keyward - Keypad Access Controller Firmware
//!
//! Main firmware binary for RP2040-based keypad locks: a 4x4 matrix
//! keypad for entry, an HD44780 character LCD on a PCF8574 I2C backpack
//! for feedback and two indicator lamps for the lock state.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use keyward_core::lock::LockController;
use keyward_drivers::display::{Hd44780, Pcf8574Transport};
use keyward_drivers::indicator::GpioIndicator;
use keyward_drivers::keypad::MatrixKeypad;
use keyward_hal::i2c::I2cConfig;
use keyward_hal::uart::UartConfig;
use keyward_hal_rp2040::{BlockingI2c, DebugUart, KeypadColumn, KeypadRow, LampPin};

mod channels;
mod config;
mod tasks;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Keyward firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let board = config::board_config();
    let lock = config::lock_config(&board);

    // Display on I2C0
    // Pin assignments are board-specific (SDA=GPIO16, SCL=GPIO17)
    let i2c = BlockingI2c::new(p.I2C0, p.PIN_17, p.PIN_16, I2cConfig::STANDARD);
    let transport = Pcf8574Transport::new(i2c, Delay, board.display_address);
    let mut lcd = Hd44780::new(transport, config::display_lines());
    match lcd.initialize() {
        Ok(()) => info!("Display initialized at {=u8:#x}", board.display_address),
        Err(e) => warn!(
            "Display init failed at {=u8:#x}: {:?}",
            board.display_address, e
        ),
    }

    // Keypad rows GPIO2-5, columns GPIO6-9
    let rows = [
        KeypadRow::new(p.PIN_2),
        KeypadRow::new(p.PIN_3),
        KeypadRow::new(p.PIN_4),
        KeypadRow::new(p.PIN_5),
    ];
    let columns = [
        KeypadColumn::new(p.PIN_6),
        KeypadColumn::new(p.PIN_7),
        KeypadColumn::new(p.PIN_8),
        KeypadColumn::new(p.PIN_9),
    ];
    let keypad = MatrixKeypad::new(rows, columns, Delay, board.keymap, board.column_settle_us);
    info!("Keypad initialized");

    // Lamps: locked GPIO14, unlocked GPIO15
    let indicator =
        GpioIndicator::new_active_high(LampPin::new(p.PIN_14), LampPin::new(p.PIN_15));

    // Debug channel on UART0 TX (GPIO0)
    let uart = DebugUart::new(
        p.UART0,
        p.PIN_0,
        UartConfig {
            baudrate: board.debug_baudrate,
        },
    );

    let controller = LockController::new(lcd, indicator, lock);

    spawner.spawn(tasks::debug_tx_task(uart)).unwrap();
    spawner
        .spawn(tasks::lock_task(controller, keypad, board.scan_period_ms))
        .unwrap();

    info!("All tasks spawned, firmware running");

    loop {
        embassy_time::Timer::after_secs(60).await;
        trace!("Main loop heartbeat");
    }
}
