//! # Driver for the PCD8544 LCD controller (Nokia 5110/3310 displays)
//!
//! The PCD8544 drives an 84x48 monochrome dot-matrix LCD over a one-way
//! serial bus. This crate talks to it through the `embedded_hal` traits, so
//! it runs on any MCU with an SPI peripheral (or two spare GPIOs, see
//! [`bitbang`]).
//!
//! The crate is split along the wire protocol:
//!  - [`interface`] frames byte bursts as command or data and owns the
//!    chip-enable and data/command pins,
//!  - [`instructions`] is the typed opcode table from the datasheet,
//!  - [`display`] owns controller state (contrast, bias, power) and the
//!    cursor, and exposes the operations you actually call:
//!    [`Nokia5110::init`], [`Nokia5110::clear`], [`Nokia5110::position`]
//!    and [`Nokia5110::data`].
//!
//! ```ignore
//! let interface = SpiInterface::new(spi, dc, ce)?;
//! let mut lcd = Nokia5110::new(interface, rst);
//! lcd.init(&mut delay)?;
//! lcd.clear()?;
//! lcd.position(0, 0)?;
//! lcd.data(&[0x55, 0xAA, 0x55, 0xAA])?;
//! ```
//!
//! With the `graphics` feature a [`Framebuffer`] implementing the
//! embedded-graphics `DrawTarget` can be pushed to the display in one burst.

#![no_std]

pub mod bitbang;
pub mod display;
pub mod error;
#[cfg(feature = "graphics")]
pub mod graphics;
pub mod instructions;
pub mod interface;

/// Display width in pixels, also the number of byte columns per bank.
pub const WIDTH: u8 = 84;

/// Display height in pixels.
pub const HEIGHT: u8 = 48;

/// Number of DDRAM banks. A bank is a horizontal strip of 8 pixel rows.
pub const DDRAM_BANKS: u8 = HEIGHT / 8;

/// Size of the controller's display RAM in bytes (84 columns * 6 banks).
pub const DDRAM_SIZE: usize = WIDTH as usize * DDRAM_BANKS as usize;

pub use crate::display::{Config, Nokia5110};
pub use crate::error::Error;
pub use crate::instructions::{
    AddressingMode, BiasMode, DisplayMode, Instruction, TemperatureCoefficient,
};
pub use crate::interface::{DisplayInterface, SpiInterface};

#[cfg(feature = "graphics")]
pub use crate::graphics::Framebuffer;
