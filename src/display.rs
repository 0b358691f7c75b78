//! # Driver core for the PCD8544
//!
//! Owns the controller configuration, the reset pin and a shadow copy of
//! the controller's address counters. The bus is one-way: nothing can be
//! read back, so the driver keeps every piece of controller state it needs
//! in its own fields and re-sends it as commands.
//!
//! Typical use is [`Nokia5110::new`], one call to [`Nokia5110::init`], a
//! [`Nokia5110::clear`], and then [`Nokia5110::position`] and
//! [`Nokia5110::data`] to put pixel bytes on the glass. The tuning setters
//! ([`Nokia5110::set_contrast`] and friends) can be called at any time
//! after init.

use embedded_hal::blocking::delay::DelayUs;
use embedded_hal::digital::v2::OutputPin;

use crate::error::Error;
use crate::instructions::prelude::*;
use crate::interface::DisplayInterface;
use crate::{DDRAM_BANKS, DDRAM_SIZE, WIDTH};

/// Largest programmable operating voltage, 7 bits.
pub const MAX_CONTRAST: u8 = 127;

// The datasheet asks for a reset pulse of at least 100 ns and at most
// 100 ms after power-up; 100 us sits comfortably inside that window.
const RESET_PULSE_US: u8 = 100;

// All six banks worth of zeroes, so a clear is a single burst.
const BLANK: [u8; DDRAM_SIZE] = [0x00; DDRAM_SIZE];

/// Analog tuning written to the controller during [`Nokia5110::init`].
///
/// The defaults drive common Nokia 5110 boards at a readable contrast.
/// Boards differ (Sparkfun red vs. blue pcbs famously want different
/// contrast values), so everything here can also be changed at runtime
/// through the driver's setters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Operating voltage, 0..=127. Higher is darker.
    pub contrast: u8,
    /// Temperature compensation slope.
    pub temperature_coefficient: TemperatureCoefficient,
    /// Bias ratio for the multiplex waveform.
    pub bias: BiasMode,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            contrast: 63,
            temperature_coefficient: TC2,
            bias: Bias1To40,
        }
    }
}

/// Driver for one PCD8544-driven display.
///
/// Generic over the burst transport `IF` and the reset pin `RST`. All
/// operations take `&mut self`, so exclusive access to the bus during a
/// burst is enforced by ownership; wrap the driver in a lock if several
/// tasks need to share it.
pub struct Nokia5110<IF, RST>
where
    IF: DisplayInterface,
    RST: OutputPin,
{
    interface: IF,
    rst: RST,
    config: Config,
    initialized: bool,
    power_down: bool,
    addressing: AddressingMode,
    /// shadow of the controller's X address counter, 0..84
    x: u8,
    /// shadow of the controller's Y address counter, 0..6
    y: u8,
}

impl<IF, RST> Nokia5110<IF, RST>
where
    IF: DisplayInterface,
    RST: OutputPin,
{
    /// Create a driver with the default [`Config`]. No I/O happens until
    /// [`init`](Self::init).
    pub fn new(interface: IF, rst: RST) -> Self {
        Self::with_config(interface, rst, Config::default())
    }

    /// Create a driver with an explicit [`Config`].
    pub fn with_config(interface: IF, rst: RST, config: Config) -> Self {
        Nokia5110 {
            interface,
            rst,
            config,
            initialized: false,
            power_down: false,
            addressing: AddressingMode::Horizontal,
            x: 0,
            y: 0,
        }
    }

    /// Reset and configure the controller. Must be called once before any
    /// other operation; everything else fails with
    /// [`Error::NotInitialized`] until it ran.
    ///
    /// Pulses the reset line low (the controller is in an undefined state
    /// at power-on and may not even survive being driven without a reset),
    /// then sends one command burst: extended instruction set, temperature
    /// coefficient, bias, contrast, back to the basic set, display mode
    /// normal, and the address counters to (0, 0).
    ///
    /// The DDRAM is *not* cleared; its power-on content is random. Call
    /// [`clear`](Self::clear) before showing anything.
    pub fn init<D: DelayUs<u8>>(&mut self, delay: &mut D) -> Result<(), Error> {
        if self.config.contrast > MAX_CONTRAST {
            return Err(Error::InvalidArgument);
        }

        Error::pin(self.rst.set_low())?;
        delay.delay_us(RESET_PULSE_US);
        Error::pin(self.rst.set_high())?;

        // the reset cleared every register in the chip
        self.initialized = false;
        self.power_down = false;
        self.x = 0;
        self.y = 0;

        let sequence = [
            self.function_set(true).byte(),
            SetTemperatureCoefficient(self.config.temperature_coefficient).byte(),
            SetBias(self.config.bias).byte(),
            SetContrast(self.config.contrast).byte(),
            self.function_set(false).byte(),
            SetDisplayMode(Normal).byte(),
            SetXAddress(0).byte(),
            SetYAddress(0).byte(),
        ];
        self.interface.send_commands(&sequence)?;

        self.initialized = true;
        Ok(())
    }

    /// Set the operating voltage and with it the contrast, 0..=127.
    ///
    /// Values above 127 are rejected with [`Error::InvalidArgument`] before
    /// anything is sent; the driver never clamps.
    pub fn set_contrast(&mut self, contrast: u8) -> Result<(), Error> {
        if contrast > MAX_CONTRAST {
            return Err(Error::InvalidArgument);
        }
        self.command(SetContrast(contrast))?;
        self.config.contrast = contrast;
        Ok(())
    }

    /// Change the temperature compensation slope.
    pub fn set_temperature_coefficient(
        &mut self,
        coefficient: TemperatureCoefficient,
    ) -> Result<(), Error> {
        self.command(SetTemperatureCoefficient(coefficient))?;
        self.config.temperature_coefficient = coefficient;
        Ok(())
    }

    /// Change the bias ratio. Only needed when driving glass other than
    /// the common 5110 panel.
    pub fn set_bias(&mut self, bias: BiasMode) -> Result<(), Error> {
        self.command(SetBias(bias))?;
        self.config.bias = bias;
        Ok(())
    }

    /// Switch between normal, inverted, all-on and blank output. DDRAM is
    /// unaffected.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> Result<(), Error> {
        self.command(SetDisplayMode(mode))
    }

    /// Put the controller in standby (`true`) or wake it (`false`). DDRAM
    /// is retained in standby; the panel goes blank.
    pub fn set_power_down(&mut self, power_down: bool) -> Result<(), Error> {
        self.ensure_initialized()?;
        self.power_down = power_down;
        let byte = self.function_set(false).byte();
        self.interface.send_commands(&[byte])
    }

    /// Move the controller's address counters and the shadow cursor to
    /// `column` (0..=83), `bank` (0..=5).
    ///
    /// Out-of-range coordinates fail with [`Error::InvalidArgument`] and
    /// nothing is sent, so a bad call cannot move the hardware cursor
    /// halfway.
    pub fn position(&mut self, column: u8, bank: u8) -> Result<(), Error> {
        self.ensure_initialized()?;
        if column >= WIDTH || bank >= DDRAM_BANKS {
            return Err(Error::InvalidArgument);
        }
        self.interface
            .send_commands(&[SetXAddress(column).byte(), SetYAddress(bank).byte()])?;
        self.x = column;
        self.y = bank;
        Ok(())
    }

    /// Write pixel bytes to DDRAM at the current cursor, one burst.
    ///
    /// Each byte is a vertical strip of 8 pixels, LSB on top. The bytes go
    /// out exactly as given; the driver does not clip at bank or DDRAM
    /// boundaries. Past the end of a bank the controller's own
    /// auto-increment takes over (next bank, and from the last bank back
    /// to the first), and the shadow cursor follows the same rule, so
    /// consecutive `data` calls continue where the last one ended.
    pub fn data(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.ensure_initialized()?;
        if bytes.is_empty() {
            return Ok(());
        }
        self.interface.send_data(bytes)?;
        self.advance_cursor(bytes.len());
        Ok(())
    }

    /// Zero the entire DDRAM and leave the cursor at (0, 0).
    ///
    /// One positioning burst and one 504-byte data burst; writing the full
    /// RAM wraps the address counters back to the origin by themselves.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.position(0, 0)?;
        self.data(&BLANK)
    }

    /// Column the next [`data`](Self::data) byte will land in.
    pub fn column(&self) -> u8 {
        self.x
    }

    /// Bank the next [`data`](Self::data) byte will land in.
    pub fn bank(&self) -> u8 {
        self.y
    }

    fn ensure_initialized(&self) -> Result<(), Error> {
        if self.initialized {
            Ok(())
        } else {
            Err(Error::NotInitialized)
        }
    }

    fn function_set(&self, extended: bool) -> Instruction {
        FunctionSet {
            power_down: self.power_down,
            addressing: self.addressing,
            extended,
        }
    }

    // Send one instruction. Extended opcodes are bracketed with function-set
    // bytes inside the same burst; every burst leaves the controller in the
    // basic instruction set.
    fn command(&mut self, instruction: Instruction) -> Result<(), Error> {
        self.ensure_initialized()?;
        if instruction.extended() {
            let burst = [
                self.function_set(true).byte(),
                instruction.byte(),
                self.function_set(false).byte(),
            ];
            self.interface.send_commands(&burst)
        } else {
            self.interface.send_commands(&[instruction.byte()])
        }
    }

    // Mirror of the controller's auto-increment in horizontal addressing:
    // column first, carry into the bank, banks wrap modulo 6.
    fn advance_cursor(&mut self, written: usize) {
        let offset = self.y as usize * WIDTH as usize + self.x as usize;
        let offset = (offset + written) % DDRAM_SIZE;
        self.x = (offset % WIDTH as usize) as u8;
        self.y = (offset / WIDTH as usize) as u8;
    }
}
