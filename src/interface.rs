//! # Transport between the driver and the controller
//!
//! The PCD8544 receives plain bytes; whether a byte lands in a register or
//! in display RAM is decided by the D/C pin, sampled while the byte is
//! shifted in. A *burst* is one framed sequence: chip-enable asserted, the
//! D/C level held constant, N bytes written, chip-enable released.
//!
//! [`DisplayInterface`] is that contract. The driver in [`crate::display`]
//! only ever speaks in bursts, so anything implementing this trait (the SPI
//! transport here, a recorder in tests) can sit below it.

use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal::digital::v2::OutputPin;

use crate::error::Error;

/// A sink for command and data bursts.
pub trait DisplayInterface {
    /// Send one burst of command bytes (D/C low for the whole burst).
    fn send_commands(&mut self, bytes: &[u8]) -> Result<(), Error>;

    /// Send one burst of data bytes (D/C high for the whole burst).
    fn send_data(&mut self, bytes: &[u8]) -> Result<(), Error>;
}

/// [`DisplayInterface`] over an SPI bus plus the two framing pins.
///
/// The chip-enable pin is active low and released between bursts, so the
/// bus can be shared with other devices. On a failure mid-burst the pins
/// are left at whatever level they had; the caller must treat the display
/// state as undefined.
pub struct SpiInterface<SPI, DC, CE>
where
    SPI: SpiWrite<u8>,
    DC: OutputPin,
    CE: OutputPin,
{
    spi: SPI,
    dc: DC,
    ce: CE,
}

impl<SPI, DC, CE> SpiInterface<SPI, DC, CE>
where
    SPI: SpiWrite<u8>,
    DC: OutputPin,
    CE: OutputPin,
{
    /// Wrap the bus and the framing pins. Drives chip-enable inactive so
    /// the controller ignores bus traffic until the first burst.
    pub fn new(spi: SPI, dc: DC, mut ce: CE) -> Result<Self, Error> {
        Error::pin(ce.set_high())?;
        Ok(SpiInterface { spi, dc, ce })
    }

    // One chip-enable assertion, one bus write. The D/C level must already
    // be set; the controller samples it with every byte of the burst.
    fn burst(&mut self, bytes: &[u8]) -> Result<(), Error> {
        Error::pin(self.ce.set_low())?;
        Error::bus(self.spi.write(bytes))?;
        Error::pin(self.ce.set_high())?;
        Ok(())
    }
}

impl<SPI, DC, CE> DisplayInterface for SpiInterface<SPI, DC, CE>
where
    SPI: SpiWrite<u8>,
    DC: OutputPin,
    CE: OutputPin,
{
    fn send_commands(&mut self, bytes: &[u8]) -> Result<(), Error> {
        Error::pin(self.dc.set_low())?;
        self.burst(bytes)
    }

    fn send_data(&mut self, bytes: &[u8]) -> Result<(), Error> {
        Error::pin(self.dc.set_high())?;
        self.burst(bytes)
    }
}
