//! Error type shared by the transport and the driver.
//!
//! The PCD8544 bus is one-way: nothing can be read back, a failed write is
//! fatal, and the driver never retries. The variants record which contract
//! was broken, not the underlying HAL error value.

/// Everything that can go wrong talking to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The SPI write failed. The burst may have been partially shifted out;
    /// the pixel state of the display is undefined afterwards.
    Bus,
    /// A GPIO level change (chip-enable, data/command or reset) failed.
    /// Pin levels are left as they were at the point of failure.
    Pin,
    /// A column, bank or contrast argument was outside the controller's
    /// range. Nothing was sent to the hardware.
    InvalidArgument,
    /// An operation was attempted before [`init`](crate::Nokia5110::init).
    NotInitialized,
}

impl Error {
    /// Map an SPI write result onto [`Error::Bus`].
    pub fn bus<T, E>(result: Result<T, E>) -> Result<T, Error> {
        result.map_err(|_| Error::Bus)
    }

    /// Map a pin result onto [`Error::Pin`].
    pub fn pin<T, E>(result: Result<T, E>) -> Result<T, Error> {
        result.map_err(|_| Error::Pin)
    }
}
