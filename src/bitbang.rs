//! Bit-banged half-duplex SPI.
//!
//! The PCD8544 only ever listens, so two GPIOs (clock and data) are enough
//! to drive it without spending an SPI peripheral. Bytes go out MSB-first
//! and the controller samples the data line on the rising clock edge, which
//! is exactly what [`BitBangSpi`] produces.
//!
//! Use [`BitBangSpi::new`] on MCUs clocked below ~8 MHz; faster cores
//! toggle the pins quicker than the controller's 4 Mbit/s limit and need
//! [`BitBangSpi::new_with_delay`] to stretch the clock.

use core::marker::PhantomData;

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal::digital::v2::OutputPin;

/// `Write<u8>` implementation over a clock pin and a data pin.
pub struct BitBangSpi<ERR, CLK, DIN, DELAY> {
    clk: CLK,
    din: DIN,
    delay: DELAY,
    _phantom: PhantomData<ERR>,
}

/// Clock stretcher that does not stretch, for slow enough cores.
pub struct NoDelay;

impl DelayUs<u8> for NoDelay {
    #[inline]
    fn delay_us(&mut self, _us: u8) {}
}

impl<ERR, CLK, DIN> BitBangSpi<ERR, CLK, DIN, NoDelay>
where
    CLK: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
{
    /// Construct without clock stretching. The clock idles low.
    pub fn new(mut clk: CLK, din: DIN) -> Result<BitBangSpi<ERR, CLK, DIN, NoDelay>, ERR> {
        clk.set_low()?;
        Ok(BitBangSpi {
            clk,
            din,
            delay: NoDelay,
            _phantom: PhantomData,
        })
    }
}

impl<ERR, CLK, DIN, DELAY> BitBangSpi<ERR, CLK, DIN, DELAY>
where
    CLK: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    DELAY: DelayUs<u8>,
{
    /// Construct with a delay provider that holds each clock phase for a
    /// microsecond, keeping the bit rate within the controller's limit on
    /// fast cores.
    pub fn new_with_delay(
        mut clk: CLK,
        din: DIN,
        delay: DELAY,
    ) -> Result<BitBangSpi<ERR, CLK, DIN, DELAY>, ERR> {
        clk.set_low()?;
        Ok(BitBangSpi {
            clk,
            din,
            delay,
            _phantom: PhantomData,
        })
    }

    #[inline]
    fn write_bit(&mut self, high: bool) -> Result<(), ERR> {
        if high {
            self.din.set_high()?;
        } else {
            self.din.set_low()?;
        }
        self.clk.set_high()?;
        self.delay.delay_us(1);
        self.clk.set_low()?;
        self.delay.delay_us(1);
        Ok(())
    }
}

impl<ERR, CLK, DIN, DELAY> SpiWrite<u8> for BitBangSpi<ERR, CLK, DIN, DELAY>
where
    CLK: OutputPin<Error = ERR>,
    DIN: OutputPin<Error = ERR>,
    DELAY: DelayUs<u8>,
{
    type Error = ERR;

    #[inline]
    fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
        for value in words {
            let mut v = *value;
            for _ in 0..8 {
                self.write_bit((v & 0x80) == 0x80)?;
                v <<= 1;
            }
        }
        Ok(())
    }
}
