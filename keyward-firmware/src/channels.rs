//! Inter-task communication channels

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;

/// Queued debug reports; one per failed submit
const REPORT_CHANNEL_SIZE: usize = 4;

/// Attempts remaining after each failed submit, for the debug UART
pub static ATTEMPTS_REPORT: Channel<CriticalSectionRawMutex, u8, REPORT_CHANNEL_SIZE> =
    Channel::new();
