//! Theater chase with sinusoidal band brightness
//!
//! A single band of pixels sweeps the virtual strip once per period.
//! Brightness inside the band follows |sin| of the distance from the
//! band center; everything outside idles at a dim gray.

use embassy_time::{Duration, Instant};
use libm::{fabsf, sinf};

use super::Effect;
use crate::OutputDriver;
use crate::color::Rgb;
use crate::math::{phase, scale8};
use crate::strip::{StripError, VirtualStrip};

/// Dim background for pixels outside the band.
const IDLE_GRAY: Rgb = Rgb {
    r: 20,
    g: 20,
    b: 20,
};

#[derive(Debug, Clone)]
pub struct TheaterChaseEffect {
    /// Band width in pixels
    width: usize,
    /// Duration of one full sweep
    period: Duration,
    /// Band color at peak brightness
    color: Rgb,
}

impl TheaterChaseEffect {
    pub const fn new(width: usize, period: Duration, color: Rgb) -> Self {
        Self {
            width,
            period,
            color,
        }
    }
}

impl Effect for TheaterChaseEffect {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render<O: OutputDriver, const MAX_STRIPS: usize>(
        &mut self,
        now: Instant,
        strip: &mut VirtualStrip<'_, O, MAX_STRIPS>,
    ) -> Result<(), StripError> {
        let total = strip.total_pixels();
        let width = self.width.max(1) as f32;
        let center = phase(now, self.period) * total as f32;

        for index in 0..total {
            let distance = fabsf(index as f32 - center);
            if distance < width {
                let falloff =
                    fabsf(sinf(core::f32::consts::FRAC_PI_2 * (1.0 - distance / width)));
                let level = (falloff * 255.0) as u8;
                let color = Rgb {
                    r: scale8(self.color.r, level),
                    g: scale8(self.color.g, level),
                    b: scale8(self.color.b, level),
                };
                strip.set_pixel(index, color)?;
            } else {
                strip.set_pixel(index, IDLE_GRAY)?;
            }
        }
        Ok(())
    }
}
