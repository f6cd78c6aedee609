//! Sequential color wipe, one physical strip at a time
//!
//! Each strip fills from its first pixel to its last over `strip_time`,
//! then the wipe moves on to the next strip. A strip counts as finished
//! once its last reachable pixel is lit, and the whole wipe reports
//! completion after the final strip.

use embassy_time::{Duration, Instant};

use super::Effect;
use crate::OutputDriver;
use crate::color::Rgb;
use crate::strip::{StripError, VirtualStrip};

#[derive(Debug, Clone)]
pub struct ColorWipeEffect {
    color: Rgb,
    /// Time to fill one physical strip
    strip_time: Duration,
    /// Clock reading when the current strip started filling
    epoch: Option<Instant>,
    current_strip: usize,
    complete: bool,
}

impl ColorWipeEffect {
    pub const fn new(color: Rgb, strip_time: Duration) -> Self {
        Self {
            color,
            strip_time,
            epoch: None,
            current_strip: 0,
            complete: false,
        }
    }

    fn advance(&mut self, now: Instant, strip_count: usize) {
        if self.current_strip + 1 >= strip_count {
            self.complete = true;
        } else {
            self.current_strip += 1;
            self.epoch = Some(now);
        }
    }
}

impl Effect for ColorWipeEffect {
    #[allow(clippy::cast_possible_truncation)]
    fn render<O: OutputDriver, const MAX_STRIPS: usize>(
        &mut self,
        now: Instant,
        strip: &mut VirtualStrip<'_, O, MAX_STRIPS>,
    ) -> Result<(), StripError> {
        if self.complete {
            return Ok(());
        }
        let epoch = *self.epoch.get_or_insert(now);
        let len = strip.strip_len(self.current_strip);
        if len == 0 {
            self.advance(now, strip.strip_count());
            return Ok(());
        }

        let total_ms = self.strip_time.as_millis().max(1);
        let elapsed_ms = now.duration_since(epoch).as_millis().min(total_ms);
        let last = (((elapsed_ms * len as u64) / total_ms) as usize).min(len - 1);

        for offset in 0..=last {
            strip.set_local(self.current_strip, offset, self.color)?;
        }
        if last >= len - 1 {
            self.advance(now, strip.strip_count());
        }
        Ok(())
    }

    fn reset(&mut self) {
        self.epoch = None;
        self.current_strip = 0;
        self.complete = false;
    }

    fn is_complete(&self) -> bool {
        self.complete
    }
}
