//! Every-Nth pixel pattern
//!
//! Lights one pixel out of every `interval` on each physical strip,
//! counted from the strip's own first pixel. All other pixels are off.

use embassy_time::Instant;

use super::Effect;
use crate::OutputDriver;
use crate::color::{OFF, Rgb};
use crate::strip::{StripError, VirtualStrip};

#[derive(Debug, Clone)]
pub struct EveryNthEffect {
    interval: usize,
    color: Rgb,
}

impl EveryNthEffect {
    /// An interval of 0 is clamped to 1, which lights every pixel.
    pub fn new(interval: usize, color: Rgb) -> Self {
        Self {
            interval: interval.max(1),
            color,
        }
    }
}

impl Effect for EveryNthEffect {
    fn render<O: OutputDriver, const MAX_STRIPS: usize>(
        &mut self,
        _now: Instant,
        strip: &mut VirtualStrip<'_, O, MAX_STRIPS>,
    ) -> Result<(), StripError> {
        for member in 0..strip.strip_count() {
            for offset in 0..strip.strip_len(member) {
                let color = if offset % self.interval == 0 {
                    self.color
                } else {
                    OFF
                };
                strip.set_local(member, offset, color)?;
            }
        }
        Ok(())
    }
}
