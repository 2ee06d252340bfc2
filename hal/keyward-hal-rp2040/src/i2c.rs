//! Blocking I2C master
//!
//! The display backpack is written one byte at a time between short
//! microsecond delays, so the blocking driver is used rather than DMA.

use embassy_rp::i2c::{self, AbortReason, Blocking, I2c, Instance, SclPin, SdaPin};
use embassy_rp::Peri;
use keyward_hal::i2c::I2cConfig;

/// Error from I2C operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cBusError {
    /// Peripheral did not acknowledge (absent or wrong address)
    Nack,
    /// Arbitration lost
    ArbitrationLost,
    /// Address outside the 7-bit range or reserved
    BadAddress,
    /// Other error
    Other,
}

impl From<i2c::Error> for I2cBusError {
    fn from(e: i2c::Error) -> Self {
        match e {
            i2c::Error::Abort(AbortReason::NoAcknowledge) => I2cBusError::Nack,
            i2c::Error::Abort(AbortReason::ArbitrationLoss) => I2cBusError::ArbitrationLost,
            i2c::Error::AddressOutOfRange(_) | i2c::Error::AddressReserved(_) => {
                I2cBusError::BadAddress
            }
            _ => I2cBusError::Other,
        }
    }
}

/// Blocking I2C master implementing [`keyward_hal::I2cBus`]
pub struct BlockingI2c<'d, T: Instance> {
    i2c: I2c<'d, T, Blocking>,
}

impl<'d, T: Instance> BlockingI2c<'d, T> {
    /// Create the bus on the given pins
    pub fn new(
        peri: Peri<'d, T>,
        scl: Peri<'d, impl SclPin<T>>,
        sda: Peri<'d, impl SdaPin<T>>,
        config: I2cConfig,
    ) -> Self {
        let mut cfg = i2c::Config::default();
        cfg.frequency = config.frequency;
        Self {
            i2c: I2c::new_blocking(peri, scl, sda, cfg),
        }
    }
}

impl<T: Instance> keyward_hal::I2cBus for BlockingI2c<'_, T> {
    type Error = I2cBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.i2c.blocking_write(address, data)?;
        Ok(())
    }
}
