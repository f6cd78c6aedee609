//! Animations with compile-time known variants
//!
//! All animations are stored in an enum to avoid heap allocations.
//! Each animation implements the `Effect` trait and draws through the
//! virtual strip's logical addressing.

mod chase;
mod every_nth;
mod rainbow;
mod wipe;

use embassy_time::Instant;
pub use chase::TheaterChaseEffect;
pub use every_nth::EveryNthEffect;
pub use rainbow::ConstrainedRainbowEffect;
pub use wipe::ColorWipeEffect;

use crate::OutputDriver;
use crate::strip::{StripError, VirtualStrip};

pub trait Effect {
    /// Render a single frame through the virtual strip
    fn render<O: OutputDriver, const MAX_STRIPS: usize>(
        &mut self,
        now: Instant,
        strip: &mut VirtualStrip<'_, O, MAX_STRIPS>,
    ) -> Result<(), StripError>;

    /// Reset animation-local state
    fn reset(&mut self) {}

    /// Check if the animation has run to completion
    ///
    /// Periodic animations never complete; the color wipe does.
    fn is_complete(&self) -> bool {
        false
    }
}

/// Effect slot - enum containing all possible animations
#[derive(Debug, Clone)]
pub enum EffectSlot {
    /// Rainbow constrained between two wheel positions
    Rainbow(ConstrainedRainbowEffect),
    /// Sweeping band with sinusoidal brightness
    Chase(TheaterChaseEffect),
    /// Every Nth strip-local pixel lit
    EveryNth(EveryNthEffect),
    /// Sequential fill, one physical strip at a time
    Wipe(ColorWipeEffect),
}

impl EffectSlot {
    /// Render the current animation
    pub fn render<O: OutputDriver, const MAX_STRIPS: usize>(
        &mut self,
        now: Instant,
        strip: &mut VirtualStrip<'_, O, MAX_STRIPS>,
    ) -> Result<(), StripError> {
        match self {
            Self::Rainbow(effect) => effect.render(now, strip),
            Self::Chase(effect) => effect.render(now, strip),
            Self::EveryNth(effect) => effect.render(now, strip),
            Self::Wipe(effect) => effect.render(now, strip),
        }
    }

    /// Reset the animation state
    pub fn reset(&mut self) {
        match self {
            Self::Rainbow(effect) => Effect::reset(effect),
            Self::Chase(effect) => Effect::reset(effect),
            Self::EveryNth(effect) => Effect::reset(effect),
            Self::Wipe(effect) => Effect::reset(effect),
        }
    }

    /// Check if the animation has run to completion
    pub fn is_complete(&self) -> bool {
        match self {
            Self::Wipe(effect) => effect.is_complete(),
            Self::Rainbow(_) | Self::Chase(_) | Self::EveryNth(_) => false,
        }
    }
}
