//! Transmit-only UART for the debug channel

use embassy_rp::uart::{self, Blocking, Instance, TxPin, UartTx};
use embassy_rp::Peri;
use keyward_hal::uart::UartConfig;

/// Error from UART writes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum UartError {
    /// Transmit failed
    Write,
}

impl From<uart::Error> for UartError {
    fn from(_: uart::Error) -> Self {
        UartError::Write
    }
}

/// Blocking UART transmitter implementing [`keyward_hal::UartTx`]
pub struct DebugUart<'d, T: Instance> {
    tx: UartTx<'d, T, Blocking>,
}

impl<'d, T: Instance> DebugUart<'d, T> {
    /// Create the transmitter on `tx`
    pub fn new(
        peri: Peri<'d, T>,
        tx: Peri<'d, impl TxPin<T>>,
        config: UartConfig,
    ) -> Self {
        let mut cfg = uart::Config::default();
        cfg.baudrate = config.baudrate;
        Self {
            tx: UartTx::new_blocking(peri, tx, cfg),
        }
    }
}

impl<T: Instance> keyward_hal::UartTx for DebugUart<'_, T> {
    type Error = UartError;

    fn write_blocking(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.tx.blocking_write(data)?;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.tx.blocking_flush()?;
        Ok(())
    }
}
