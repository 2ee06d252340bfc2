//! Debug channel task
//!
//! Writes the remaining attempt count to the debug UART after every
//! failed submit. Transmit only.

use core::fmt::Write;

use defmt::*;
use embassy_rp::peripherals::UART0;
use heapless::String;

use keyward_hal::UartTx;
use keyward_hal_rp2040::DebugUart;

use crate::channels::ATTEMPTS_REPORT;

/// Format one report line
fn report_line(attempts_left: u8) -> String<24> {
    let mut line = String::new();
    let _ = write!(line, "Attempts left: {}\r\n", attempts_left);
    line
}

/// Debug UART task
#[embassy_executor::task]
pub async fn debug_tx_task(mut uart: DebugUart<'static, UART0>) {
    info!("Debug channel ready");

    loop {
        let attempts_left = ATTEMPTS_REPORT.receive().await;
        info!("Attempts left: {}", attempts_left);

        let line = report_line(attempts_left);
        if let Err(e) = uart.write_blocking(line.as_bytes()) {
            warn!("Debug UART write failed: {:?}", e);
            continue;
        }
        if let Err(e) = uart.flush() {
            warn!("Debug UART flush failed: {:?}", e);
        }
    }
}
