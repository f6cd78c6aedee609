//! Scenario selection
//!
//! Five scenarios, each tied to one animation. Four external switches
//! select scenarios 1-4; scenario 5 is the fallback when every switch is
//! inactive. A committed change fires the entry action exactly once.

use embassy_time::{Duration, Instant};

use crate::color::Rgb;
use crate::effect::{
    ColorWipeEffect, ConstrainedRainbowEffect, EffectSlot, EveryNthEffect, TheaterChaseEffect,
};

const SCENARIO_NAME_CONSTRAINED_RAINBOW: &str = "constrained_rainbow";
const SCENARIO_NAME_THEATER_CHASE: &str = "theater_chase";
const SCENARIO_NAME_EVERY_THIRD: &str = "every_third";
const SCENARIO_NAME_COLOR_WIPE: &str = "color_wipe";
const SCENARIO_NAME_FULL_RAINBOW: &str = "full_rainbow";

// Animation tuning per scenario
const RAINBOW_RANGE: (u8, u8) = (0, 160);
const RAINBOW_PERIOD_MS: u64 = 8_000;
const FULL_RAINBOW_PERIOD_MS: u64 = 12_000;
const CHASE_WIDTH: usize = 4;
const CHASE_PERIOD_MS: u64 = 3_000;
const CHASE_COLOR: Rgb = Rgb {
    r: 255,
    g: 190,
    b: 80,
};
const EVERY_NTH_INTERVAL: usize = 3;
const EVERY_NTH_COLOR: Rgb = Rgb {
    r: 200,
    g: 200,
    b: 255,
};
const WIPE_STRIP_TIME_MS: u64 = 2_000;
const WIPE_COLOR: Rgb = Rgb { r: 180, g: 0, b: 90 };

/// Known scenarios that can be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ScenarioId {
    ConstrainedRainbow = 1,
    TheaterChase = 2,
    EveryThird = 3,
    ColorWipe = 4,
    FullRainbow = 5,
}

impl ScenarioId {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            1 => Self::ConstrainedRainbow,
            2 => Self::TheaterChase,
            3 => Self::EveryThird,
            4 => Self::ColorWipe,
            5 => Self::FullRainbow,
            _ => return None,
        })
    }

    /// Map the four selection switches to a scenario.
    ///
    /// When several switches are held at once the highest-numbered one
    /// wins, matching the panel wiring order. All inactive selects the
    /// fallback scenario.
    pub const fn from_switches(switches: [bool; 4]) -> Self {
        match switches {
            [_, _, _, true] => Self::ColorWipe,
            [_, _, true, _] => Self::EveryThird,
            [_, true, _, _] => Self::TheaterChase,
            [true, _, _, _] => Self::ConstrainedRainbow,
            _ => Self::FullRainbow,
        }
    }

    /// Map a console byte (`b'1'..=b'5'`) to a scenario.
    ///
    /// Anything else is ignored, so stray console traffic never changes
    /// the selection.
    pub fn from_console_byte(byte: u8) -> Option<Self> {
        byte.checked_sub(b'0').and_then(Self::from_raw)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ConstrainedRainbow => SCENARIO_NAME_CONSTRAINED_RAINBOW,
            Self::TheaterChase => SCENARIO_NAME_THEATER_CHASE,
            Self::EveryThird => SCENARIO_NAME_EVERY_THIRD,
            Self::ColorWipe => SCENARIO_NAME_COLOR_WIPE,
            Self::FullRainbow => SCENARIO_NAME_FULL_RAINBOW,
        }
    }

    /// Build the animation for this scenario with fresh state.
    pub fn to_slot(self) -> EffectSlot {
        match self {
            Self::ConstrainedRainbow => EffectSlot::Rainbow(ConstrainedRainbowEffect::new(
                RAINBOW_RANGE.0,
                RAINBOW_RANGE.1,
                Duration::from_millis(RAINBOW_PERIOD_MS),
            )),
            Self::TheaterChase => EffectSlot::Chase(TheaterChaseEffect::new(
                CHASE_WIDTH,
                Duration::from_millis(CHASE_PERIOD_MS),
                CHASE_COLOR,
            )),
            Self::EveryThird => {
                EffectSlot::EveryNth(EveryNthEffect::new(EVERY_NTH_INTERVAL, EVERY_NTH_COLOR))
            }
            Self::ColorWipe => EffectSlot::Wipe(ColorWipeEffect::new(
                WIPE_COLOR,
                Duration::from_millis(WIPE_STRIP_TIME_MS),
            )),
            Self::FullRainbow => EffectSlot::Rainbow(ConstrainedRainbowEffect::full(
                Duration::from_millis(FULL_RAINBOW_PERIOD_MS),
            )),
        }
    }
}

/// Debounces scenario changes coming from the input poller.
///
/// A scenario must be observed unchanged for the whole debounce interval
/// before it commits. `feed` returns the new scenario exactly once per
/// committed change, never once per poll. The selection is undefined
/// until the first commit.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioDebouncer {
    interval: Duration,
    committed: Option<ScenarioId>,
    candidate: Option<(ScenarioId, Instant)>,
}

impl ScenarioDebouncer {
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            committed: None,
            candidate: None,
        }
    }

    /// Feed one observed scenario reading.
    ///
    /// Returns `Some(id)` on the poll that commits a change.
    pub fn feed(&mut self, id: ScenarioId, now: Instant) -> Option<ScenarioId> {
        if self.committed == Some(id) {
            self.candidate = None;
            return None;
        }
        match self.candidate {
            Some((candidate, since)) if candidate == id => {
                if now.duration_since(since) >= self.interval {
                    self.commit(id)
                } else {
                    None
                }
            }
            _ => {
                if self.interval.as_ticks() == 0 {
                    return self.commit(id);
                }
                self.candidate = Some((id, now));
                None
            }
        }
    }

    /// The currently committed scenario, if any.
    pub const fn current(&self) -> Option<ScenarioId> {
        self.committed
    }

    fn commit(&mut self, id: ScenarioId) -> Option<ScenarioId> {
        self.committed = Some(id);
        self.candidate = None;
        Some(id)
    }
}
