//! Draws a test pattern and a smiley on a Nokia 5110 display
//! This demo is for the Raspberry Pico with the rp2040 chip
//!
//! Pin layout and connection for this demo
//!
//! display | Pico pin |  Pico function       | purpose
//!  1 RST     pin 9      GP6 (gpio6)           reset: active low to reset display
//!  2 CE      pin 10     GP7 (gpio7)           Chip Enable: active low allows data
//!  3 DC      pin 11     GP8 (gpio8)           Data/Command (1 = Data, 0 = Command)
//!  4 DIN     pin 5      GP3 (gpio3)           Serial data line
//!  5 CLK     pin 4      GP2 (gpio2)           Serial clock, should be in range 0 - 4.0 Mbit/s
//!  6 VCC     pin 36     3V3(OUT)              Power to the display (lcd and chip) and leds
//!  7 LIGHT   pin 27     GP21 (gpio21)         backlight, LOW turns it on for the red pcb boards
//!  8 GND     pin 38     GND                   Ground for display (lcd and chip) but not leds
//!
//! Adafruit and Sparkfun boards want the LIGHT pin HIGH to turn the
//! backlight on; change the backlight code below for those.

#![no_std]
#![no_main]

use panic_halt as _;

use cortex_m_rt::entry;
use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;
use embedded_time::rate::*;
use rp_pico as bsp;

use bsp::hal::{pac, prelude::*, sio::Sio, watchdog::Watchdog};

use nokia5110::{Nokia5110, SpiInterface, DDRAM_SIZE};

/// The cortex-m SysTick delay behind the embedded-hal trait the driver
/// wants for the reset pulse.
struct SysTickDelay(cortex_m::delay::Delay);

impl DelayUs<u8> for SysTickDelay {
    fn delay_us(&mut self, us: u8) {
        self.0.delay_us(us as u32);
    }
}

/// A 16x16 smiley bitmap, 16 bytes per bank.
const SMILEY_BANK_0: [u8; 16] = [
    0xE0, 0x38, 0xE4, 0x22, 0xA2, 0xE1, 0xE1, 0x61, 0xE1, 0x21, 0xA2, 0xE2, 0xE4, 0x38, 0xE0, 0x00,
];
const SMILEY_BANK_1: [u8; 16] = [
    0x03, 0x0C, 0x10, 0x21, 0x21, 0x41, 0x48, 0x48, 0x48, 0x49, 0x25, 0x21, 0x10, 0x0C, 0x03, 0x00,
];

#[entry]
fn main() -> ! {
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    let clocks = bsp::hal::clocks::init_clocks_and_plls(
        bsp::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    let sio = Sio::new(pac.SIO);
    let pins = bsp::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // The spi driver picks up these pins automatically once they are in
    // the right mode
    let _spi_sclk = pins.gpio2.into_mode::<bsp::hal::gpio::FunctionSpi>();
    let _spi_mosi = pins.gpio3.into_mode::<bsp::hal::gpio::FunctionSpi>();
    let spi = bsp::hal::Spi::<_, _, 8>::new(pac.SPI0);

    // 2 MHz is comfortable for the controller, which is good to 4 Mbit/s
    let lcd_spi = spi.init(
        &mut pac.RESETS,
        clocks.peripheral_clock.freq(),
        2_000_000u32.Hz(),
        &embedded_hal::spi::MODE_0,
    );

    let lcd_rst = pins.gpio6.into_push_pull_output();
    let lcd_ce = pins.gpio7.into_push_pull_output();
    let lcd_dc = pins.gpio8.into_push_pull_output();

    // backlight on (LOW on this board)
    let mut lcd_light = pins.gpio21.into_push_pull_output();
    lcd_light.set_low().unwrap();

    let mut delay = SysTickDelay(cortex_m::delay::Delay::new(
        core.SYST,
        clocks.system_clock.freq().integer(),
    ));

    let interface = SpiInterface::new(lcd_spi, lcd_dc, lcd_ce).unwrap();
    let mut lcd = Nokia5110::new(interface, lcd_rst);
    lcd.init(&mut delay).unwrap();
    lcd.clear().unwrap();

    // test pattern, every other pixel on
    let mut pattern = [0u8; DDRAM_SIZE];
    for (i, byte) in pattern.iter_mut().enumerate() {
        *byte = if i % 2 == 0 { 0x55 } else { 0xAA };
    }
    lcd.position(0, 0).unwrap();
    lcd.data(&pattern).unwrap();
    delay.0.delay_ms(2000);

    // 16x16 smiley in the top-left corner, one data burst per bank
    lcd.clear().unwrap();
    lcd.position(0, 0).unwrap();
    lcd.data(&SMILEY_BANK_0).unwrap();
    lcd.position(0, 1).unwrap();
    lcd.data(&SMILEY_BANK_1).unwrap();

    let mut pico_led = pins.led.into_push_pull_output();
    loop {
        pico_led.set_high().unwrap();
        delay.0.delay_ms(500);
        pico_led.set_low().unwrap();
        delay.0.delay_ms(500);
    }
}
