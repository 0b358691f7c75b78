//! Transport framing tests.
//!
//! Verifies the burst contract of `SpiInterface`: one chip-enable
//! assertion and one bus write per burst, with the data/command pin held
//! at the right level for the whole burst.

use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal::digital::v2::OutputPin;
use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};
use embedded_hal_mock::spi::{Mock as SpiMock, Transaction as SpiTransaction};

use nokia5110::{DisplayInterface, Error, SpiInterface};

#[test]
fn command_burst_frames_dc_low_single_write() {
    let mut spi = SpiMock::new(&[SpiTransaction::write(vec![0x21, 0x06, 0x14])]);
    let mut dc = PinMock::new(&[PinTransaction::set(PinState::Low)]);
    let mut ce = PinMock::new(&[
        PinTransaction::set(PinState::High), // idle after construction
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);

    let mut interface = SpiInterface::new(spi.clone(), dc.clone(), ce.clone()).unwrap();
    interface.send_commands(&[0x21, 0x06, 0x14]).unwrap();

    spi.done();
    dc.done();
    ce.done();
}

#[test]
fn data_burst_frames_dc_high_single_write() {
    let bytes = [0x55, 0xAA, 0x55, 0xAA];

    let mut spi = SpiMock::new(&[SpiTransaction::write(bytes.to_vec())]);
    let mut dc = PinMock::new(&[PinTransaction::set(PinState::High)]);
    let mut ce = PinMock::new(&[
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);

    let mut interface = SpiInterface::new(spi.clone(), dc.clone(), ce.clone()).unwrap();
    interface.send_data(&bytes).unwrap();

    spi.done();
    dc.done();
    ce.done();
}

#[test]
fn consecutive_bursts_release_chip_enable_in_between() {
    let mut spi = SpiMock::new(&[
        SpiTransaction::write(vec![0x80, 0x40]),
        SpiTransaction::write(vec![0x01, 0x02]),
    ]);
    let mut dc = PinMock::new(&[
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);
    let mut ce = PinMock::new(&[
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
        PinTransaction::set(PinState::Low),
        PinTransaction::set(PinState::High),
    ]);

    let mut interface = SpiInterface::new(spi.clone(), dc.clone(), ce.clone()).unwrap();
    interface.send_commands(&[0x80, 0x40]).unwrap();
    interface.send_data(&[0x01, 0x02]).unwrap();

    spi.done();
    dc.done();
    ce.done();
}

// A bus that always fails, and a pin that never does, for checking how
// transport failures surface.
struct BrokenSpi;

impl SpiWrite<u8> for BrokenSpi {
    type Error = ();

    fn write(&mut self, _words: &[u8]) -> Result<(), Self::Error> {
        Err(())
    }
}

struct GoodPin;

impl OutputPin for GoodPin {
    type Error = core::convert::Infallible;

    fn set_low(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[test]
fn bus_failure_surfaces_as_bus_error() {
    let mut interface = SpiInterface::new(BrokenSpi, GoodPin, GoodPin).unwrap();
    assert_eq!(interface.send_commands(&[0x20]), Err(Error::Bus));
    assert_eq!(interface.send_data(&[0x00]), Err(Error::Bus));
}
