//! Physical strips and the virtual strip that concatenates them.
//!
//! Several physical strips are addressed as one contiguous run of pixels:
//! a logical index walks the strip list through prefix sums and lands on
//! exactly one `(strip, offset)` pair.

use heapless::Vec;

use crate::OutputDriver;
use crate::color::{OFF, Rgb};

/// Errors from virtual strip construction and addressing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError {
    /// Logical pixel index outside `[0, total_pixels)`.
    PixelOutOfBounds { index: usize, len: usize },
    /// Physical strip index outside `[0, strip_count)`.
    StripOutOfBounds { index: usize, len: usize },
    /// The strip list is empty or sums to zero pixels.
    NoPixels,
}

/// Location of a logical pixel: which physical strip, and where on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelLocation {
    pub strip: usize,
    pub offset: usize,
}

/// One physical LED strip: a borrowed pixel buffer plus its driver handle.
pub struct PhysicalStrip<'a, O: OutputDriver> {
    pixels: &'a mut [Rgb],
    driver: O,
}

impl<'a, O: OutputDriver> PhysicalStrip<'a, O> {
    pub fn new(pixels: &'a mut [Rgb], driver: O) -> Self {
        Self { pixels, driver }
    }

    /// Number of pixels on this strip.
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Set every pixel on this strip to `color`.
    pub fn fill(&mut self, color: Rgb) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }

    /// Push the current buffer out through the driver.
    pub fn show(&mut self) {
        self.driver.write(self.pixels);
    }
}

/// An ordered chain of physical strips addressed as one strip.
pub struct VirtualStrip<'a, O: OutputDriver, const MAX_STRIPS: usize> {
    strips: Vec<PhysicalStrip<'a, O>, MAX_STRIPS>,
    total: usize,
}

impl<'a, O: OutputDriver, const MAX_STRIPS: usize> VirtualStrip<'a, O, MAX_STRIPS> {
    /// Build a virtual strip from an ordered strip list.
    ///
    /// An empty list, or one whose strips sum to zero pixels, is a
    /// configuration error surfaced here rather than at first render.
    pub fn new(strips: Vec<PhysicalStrip<'a, O>, MAX_STRIPS>) -> Result<Self, StripError> {
        let total = strips.iter().map(PhysicalStrip::len).sum();
        if total == 0 {
            return Err(StripError::NoPixels);
        }
        Ok(Self { strips, total })
    }

    /// Total pixels across all member strips.
    pub fn total_pixels(&self) -> usize {
        self.total
    }

    /// Number of physical strips in the chain.
    pub fn strip_count(&self) -> usize {
        self.strips.len()
    }

    /// Pixel count of one physical strip, or 0 for an invalid strip index.
    pub fn strip_len(&self, strip: usize) -> usize {
        self.strips.get(strip).map_or(0, PhysicalStrip::len)
    }

    /// Map a logical pixel index to its `(strip, offset)` location.
    pub fn locate(&self, index: usize) -> Result<PixelLocation, StripError> {
        let mut before = 0;
        for (strip, member) in self.strips.iter().enumerate() {
            let end = before + member.len();
            if index < end {
                return Ok(PixelLocation {
                    strip,
                    offset: index - before,
                });
            }
            before = end;
        }
        Err(StripError::PixelOutOfBounds {
            index,
            len: self.total,
        })
    }

    /// Set one logical pixel.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), StripError> {
        let location = self.locate(index)?;
        self.strips[location.strip].pixels[location.offset] = color;
        Ok(())
    }

    /// Read one logical pixel.
    pub fn pixel(&self, index: usize) -> Result<Rgb, StripError> {
        let location = self.locate(index)?;
        Ok(self.strips[location.strip].pixels[location.offset])
    }

    /// Set the pixel closest to `ratio * total_pixels`.
    ///
    /// A ratio that rounds outside `[0, total_pixels)` is a bounds error,
    /// so `ratio` must stay strictly below the point that rounds to the
    /// pixel past the end.
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_pixel_at(&mut self, ratio: f32, color: Rgb) -> Result<(), StripError> {
        let scaled = libm::roundf(ratio * self.total as f32);
        if scaled < 0.0 {
            return Err(StripError::PixelOutOfBounds {
                index: self.total,
                len: self.total,
            });
        }
        self.set_pixel(scaled as usize, color)
    }

    /// Set one pixel by its strip-local address.
    pub fn set_local(&mut self, strip: usize, offset: usize, color: Rgb) -> Result<(), StripError> {
        let count = self.strips.len();
        let member = self
            .strips
            .get_mut(strip)
            .ok_or(StripError::StripOutOfBounds {
                index: strip,
                len: count,
            })?;
        let member_len = member.len();
        let pixel = member
            .pixels
            .get_mut(offset)
            .ok_or(StripError::PixelOutOfBounds {
                index: offset,
                len: member_len,
            })?;
        *pixel = color;
        Ok(())
    }

    /// Set every pixel on every strip to `color`.
    pub fn fill(&mut self, color: Rgb) {
        for member in &mut self.strips {
            member.fill(color);
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        self.fill(OFF);
    }

    /// Light one physical strip with `color` and blank the rest.
    ///
    /// Bring-up helper: stepping through strips with a distinct color
    /// verifies wiring order and per-strip pixel counts.
    pub fn highlight(&mut self, strip: usize, color: Rgb) -> Result<(), StripError> {
        if strip >= self.strips.len() {
            return Err(StripError::StripOutOfBounds {
                index: strip,
                len: self.strips.len(),
            });
        }
        for (index, member) in self.strips.iter_mut().enumerate() {
            member.fill(if index == strip { color } else { OFF });
        }
        Ok(())
    }

    /// Flush every strip's buffer to its driver.
    pub fn show(&mut self) {
        for member in &mut self.strips {
            member.show();
        }
    }
}
