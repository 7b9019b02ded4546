//! Packed-RGB frame buffer primitives for Plume
//!
//! The effect renderers composite onto a caller-owned byte buffer:
//! row-major, 3 bytes per pixel, no padding between rows. `Frame` is a
//! borrowed, dimension-checked view over such a buffer; `FrameBuffer` is
//! the owned equivalent for callers that start from a blank image.

use thiserror::Error;

/// Errors raised when wrapping a raw pixel buffer
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FrameError {
    #[error("pixel buffer is {actual} bytes, expected {expected} ({width}x{height}x3)")]
    SizeMismatch {
        actual: usize,
        expected: usize,
        width: u32,
        height: u32,
    },
}

/// Mutable view over a packed-RGB pixel buffer
#[derive(Debug)]
pub struct Frame<'a> {
    pixels: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Frame<'a> {
    /// Wrap a raw buffer, validating its length against the dimensions
    pub fn new(pixels: &'a mut [u8], width: u32, height: u32) -> Result<Self, FrameError> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(FrameError::SizeMismatch {
                actual: pixels.len(),
                expected,
                width,
                height,
            });
        }
        Ok(Self { pixels, width, height })
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether a sub-pixel coordinate lies inside `[0,w) x [0,h)`
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= 0.0 && y >= 0.0 && x < self.width as f64 && y < self.height as f64
    }

    /// Check whether an integer pixel coordinate is addressable
    pub fn contains_px(&self, x: i64, y: i64) -> bool {
        x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * 3
    }

    /// Read the RGB value at a pixel
    ///
    /// Coordinates must be in bounds; check with [`contains_px`](Self::contains_px)
    /// first when they come from particle positions.
    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        let o = self.offset(x, y);
        [self.pixels[o], self.pixels[o + 1], self.pixels[o + 2]]
    }

    /// Write the RGB value at a pixel
    pub fn set(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let o = self.offset(x, y);
        self.pixels[o..o + 3].copy_from_slice(&rgb);
    }

    /// Blend `rgb` over the existing pixel with factor `fac`
    ///
    /// `fac` is clamped to `[0, 1]`; 0 leaves the pixel untouched, 1
    /// replaces it. Each channel is mixed linearly.
    pub fn mix(&mut self, x: u32, y: u32, rgb: [u8; 3], fac: f64) {
        let fac = fac.clamp(0.0, 1.0);
        let original = self.get(x, y);
        let mut blended = [0u8; 3];
        for c in 0..3 {
            blended[c] = (original[c] as f64 * (1.0 - fac) + rgb[c] as f64 * fac) as u8;
        }
        self.set(x, y, blended);
    }
}

/// Owned packed-RGB image, zero-initialized (black)
pub struct FrameBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    /// Allocate a black frame of the given dimensions
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; width as usize * height as usize * 3],
            width,
            height,
        }
    }

    /// Frame width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Frame height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Borrow as a mutable [`Frame`] view
    pub fn as_frame(&mut self) -> Frame<'_> {
        // Length is correct by construction.
        Frame {
            pixels: &mut self.pixels,
            width: self.width,
            height: self.height,
        }
    }

    /// Raw packed-RGB bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}
