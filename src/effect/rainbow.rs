//! Rainbow constrained between two wheel positions
//!
//! A triangular ramp (rising over the first half of the strip-plus-phase
//! position, falling over the second) is remapped into the `[start, end]`
//! wheel range, so the hue sweeps back and forth inside the chosen band.

use embassy_time::{Duration, Instant};
use libm::fmodf;

use super::Effect;
use crate::OutputDriver;
use crate::color::wheel;
use crate::math::phase;
use crate::strip::{StripError, VirtualStrip};

#[derive(Debug, Clone)]
pub struct ConstrainedRainbowEffect {
    /// Lower wheel position of the hue band
    start: u8,
    /// Upper wheel position of the hue band
    end: u8,
    /// Duration of one complete sweep
    period: Duration,
}

impl ConstrainedRainbowEffect {
    pub const fn new(start: u8, end: u8, period: Duration) -> Self {
        Self { start, end, period }
    }

    /// Full-spectrum variant covering the whole wheel.
    pub const fn full(period: Duration) -> Self {
        Self::new(0, 255, period)
    }
}

impl Effect for ConstrainedRainbowEffect {
    #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn render<O: OutputDriver, const MAX_STRIPS: usize>(
        &mut self,
        now: Instant,
        strip: &mut VirtualStrip<'_, O, MAX_STRIPS>,
    ) -> Result<(), StripError> {
        let total = strip.total_pixels();
        let total_f = total as f32;
        let time_ratio = phase(now, self.period);
        let span = f32::from(self.end) - f32::from(self.start);

        for index in 0..total {
            let mut ramp = fmodf(index as f32 + time_ratio * total_f, total_f) / total_f;
            // Triangular ramp: up over 0..0.5, down over 0.5..1
            if ramp > 0.5 {
                ramp = 1.0 - ramp;
            }
            ramp *= 2.0;
            let position = f32::from(self.start) + ramp * span;
            strip.set_pixel(index, wheel(position as u8))?;
        }
        Ok(())
    }
}
