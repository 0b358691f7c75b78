//! Framebuffer and embedded-graphics support.
//!
//! Behind the `graphics` feature flag. A [`Framebuffer`] is host-side
//! memory with the controller's DDRAM layout (one byte per 8-pixel column
//! strip, bank by bank), so pushing it to the glass is a single 504-byte
//! data burst. It implements the embedded-graphics `DrawTarget`, which
//! unlocks circles, rectangles, text and image drawing from that ecosystem.
//!
//! The buffer is deliberately separate from the driver: draw into as many
//! buffers as you like, then hand one to [`Nokia5110::write_frame`]. Direct
//! [`Framebuffer::set_pixel`] access stays available for custom effects.

use core::convert::Infallible;

use embedded_graphics_core::draw_target::DrawTarget;
use embedded_graphics_core::geometry::{Dimensions, OriginDimensions, Size};
use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::Pixel;

use embedded_hal::digital::v2::OutputPin;

use crate::display::Nokia5110;
use crate::error::Error;
use crate::interface::DisplayInterface;
use crate::{DDRAM_SIZE, HEIGHT, WIDTH};

/// In-memory copy of the 84x48 display, one bit per pixel in the
/// controller's DDRAM layout.
#[derive(Clone)]
pub struct Framebuffer {
    bytes: [u8; DDRAM_SIZE],
}

impl Framebuffer {
    /// An all-clear (all pixels off) buffer.
    pub fn new() -> Self {
        Framebuffer {
            bytes: [0x00; DDRAM_SIZE],
        }
    }

    /// Set or clear the pixel at `(x, y)`. Coordinates outside the display
    /// are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: BinaryColor) {
        if x >= WIDTH as u32 || y >= HEIGHT as u32 {
            return;
        }
        // DDRAM layout: banks of 8 rows, one byte per column, LSB on top.
        let index = (y / 8) as usize * WIDTH as usize + x as usize;
        let mask = 1 << (y % 8);
        match color {
            BinaryColor::On => self.bytes[index] |= mask,
            BinaryColor::Off => self.bytes[index] &= !mask,
        }
    }

    /// The raw DDRAM image, ready for [`Nokia5110::data`].
    pub fn bytes(&self) -> &[u8; DDRAM_SIZE] {
        &self.bytes
    }
}

impl Default for Framebuffer {
    fn default() -> Self {
        Framebuffer::new()
    }
}

impl OriginDimensions for Framebuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for Framebuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bb = self.bounding_box();
        pixels
            .into_iter()
            .filter(|Pixel(pos, _)| bb.contains(*pos))
            .for_each(|Pixel(pos, color)| self.set_pixel(pos.x as u32, pos.y as u32, color));
        Ok(())
    }

    fn clear(&mut self, color: BinaryColor) -> Result<(), Self::Error> {
        let byte = match color {
            BinaryColor::On => 0xFF,
            BinaryColor::Off => 0x00,
        };
        self.bytes = [byte; DDRAM_SIZE];
        Ok(())
    }
}

impl<IF, RST> Nokia5110<IF, RST>
where
    IF: DisplayInterface,
    RST: OutputPin,
{
    /// Push a whole framebuffer to the display.
    ///
    /// One positioning burst to (0, 0) and one full-DDRAM data burst; the
    /// cursor ends back at the origin.
    pub fn write_frame(&mut self, frame: &Framebuffer) -> Result<(), Error> {
        self.position(0, 0)?;
        self.data(&frame.bytes)
    }
}
