//! Bit-bang SPI wire-level tests: MSB-first ordering and clock edges.

use embedded_hal::blocking::spi::Write as SpiWrite;
use embedded_hal_mock::pin::{Mock as PinMock, State as PinState, Transaction as PinTransaction};

use nokia5110::bitbang::BitBangSpi;

fn clock_transactions(bits: usize) -> Vec<PinTransaction> {
    // idle low after construction, then one rising and falling edge per bit
    let mut txns = vec![PinTransaction::set(PinState::Low)];
    for _ in 0..bits {
        txns.push(PinTransaction::set(PinState::High));
        txns.push(PinTransaction::set(PinState::Low));
    }
    txns
}

fn level(bit: bool) -> PinTransaction {
    PinTransaction::set(if bit { PinState::High } else { PinState::Low })
}

#[test]
fn byte_is_shifted_out_msb_first() {
    // 0xA5 = 1010_0101
    let expected_levels = [true, false, true, false, false, true, false, true];

    let mut clk = PinMock::new(&clock_transactions(8));
    let mut din = PinMock::new(
        &expected_levels
            .iter()
            .map(|&bit| level(bit))
            .collect::<Vec<_>>(),
    );

    let mut spi = BitBangSpi::new(clk.clone(), din.clone()).unwrap();
    spi.write(&[0xA5]).unwrap();

    clk.done();
    din.done();
}

#[test]
fn multi_byte_write_keeps_byte_order() {
    // 0x80 then 0x01: the data line sees the leading one first, the
    // trailing one last
    let mut levels = vec![true];
    levels.extend([false; 7].iter());
    levels.extend([false; 7].iter());
    levels.push(true);

    let mut clk = PinMock::new(&clock_transactions(16));
    let mut din = PinMock::new(&levels.iter().map(|&bit| level(bit)).collect::<Vec<_>>());

    let mut spi = BitBangSpi::new(clk.clone(), din.clone()).unwrap();
    spi.write(&[0x80, 0x01]).unwrap();

    clk.done();
    din.done();
}
