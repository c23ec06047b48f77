// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Four-pixel addressable RGB strip under the Maqueen chassis.
//!
//! The strip keeps a local copy of every pixel and pushes the whole buffer to the LEDs on each
//! update. Use [`RgbStrip::batch`] to change several pixels for a single push.

use smart_leds_trait::{SmartLedsWrite, RGB8};

/// Number of pixels on the chassis.
pub const PIXEL_COUNT: usize = 4;

/// Pixel slot, in the strip's wiring order.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(usize)]
pub enum Position {
    FrontLeft = 0,
    RearLeft = 1,
    RearRight = 2,
    FrontRight = 3,
}

impl Position {
    pub const ALL: [Position; PIXEL_COUNT] = [
        Position::FrontLeft,
        Position::RearLeft,
        Position::RearRight,
        Position::FrontRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Pixel buffer handed to [`RgbStrip::batch`] closures.
pub struct Pixels<'a> {
    buf: &'a mut [RGB8; PIXEL_COUNT],
}

impl Pixels<'_> {
    #[inline]
    pub fn set(&mut self, position: Position, color: RGB8) {
        self.buf[position.index()] = color;
    }

    pub fn fill(&mut self, color: RGB8) {
        self.buf.fill(color);
    }
}

/// Buffered RGB strip on top of any `smart-leds` writer.
pub struct RgbStrip<W> {
    writer: W,
    pixels: [RGB8; PIXEL_COUNT],
}

impl<W> RgbStrip<W>
where
    W: SmartLedsWrite<Color = RGB8>,
{
    /// Wrap a writer. The buffer starts dark; nothing is sent until the first update.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pixels: [RGB8::default(); PIXEL_COUNT],
        }
    }

    /// Set one pixel and push the whole strip.
    pub fn set(&mut self, position: Position, color: RGB8) -> Result<(), W::Error> {
        self.pixels[position.index()] = color;
        self.show()
    }

    /// Set every pixel to `color` and push once.
    pub fn fill(&mut self, color: RGB8) -> Result<(), W::Error> {
        self.pixels.fill(color);
        self.show()
    }

    /// Apply several pixel changes, then push once.
    pub fn batch<F>(&mut self, f: F) -> Result<(), W::Error>
    where
        F: FnOnce(&mut Pixels<'_>),
    {
        f(&mut Pixels {
            buf: &mut self.pixels,
        });
        self.show()
    }

    /// Push the current buffer to the LEDs.
    pub fn show(&mut self) -> Result<(), W::Error> {
        self.writer.write(self.pixels.iter().copied())
    }

    /// Current buffer contents.
    #[inline]
    pub fn pixels(&self) -> &[RGB8; PIXEL_COUNT] {
        &self.pixels
    }

    pub fn free(self) -> W {
        self.writer
    }
}
