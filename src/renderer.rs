use embassy_time::{Duration, Instant};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::OutputDriver;
use crate::effect::EffectSlot;
use crate::input::{InputMode, InputReceiver};
use crate::scenario::{ScenarioDebouncer, ScenarioId};
use crate::strip::{StripError, VirtualStrip};

/// Debounce interval applied to scenario changes by default.
const DEFAULT_DEBOUNCE_MS: u64 = 50;

/// Startup configuration for the scene renderer.
#[derive(Debug, Clone, Copy)]
pub struct SceneConfig {
    /// How long a new selection must stay stable before it commits
    pub debounce: Duration,
    /// Which input surface drives the selection
    pub input_mode: InputMode,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            input_mode: InputMode::default(),
        }
    }
}

/// Scene renderer - the main orchestrator
///
/// Owns the virtual strip, drains input events, and drives the current
/// scenario's animation once per frame. Everything runs to completion
/// inside one `render` call; there is no suspension or preemption.
pub struct Renderer<'a, O: OutputDriver, const MAX_STRIPS: usize, const INPUT_CHANNEL_SIZE: usize> {
    strip: VirtualStrip<'a, O, MAX_STRIPS>,
    inputs: InputReceiver<'a, INPUT_CHANNEL_SIZE>,
    input_mode: InputMode,
    debouncer: ScenarioDebouncer,
    // No scenario is active until the first committed selection
    slot: Option<EffectSlot>,
}

impl<'a, O: OutputDriver, const MAX_STRIPS: usize, const INPUT_CHANNEL_SIZE: usize>
    Renderer<'a, O, MAX_STRIPS, INPUT_CHANNEL_SIZE>
{
    pub fn new(
        strip: VirtualStrip<'a, O, MAX_STRIPS>,
        inputs: InputReceiver<'a, INPUT_CHANNEL_SIZE>,
        config: &SceneConfig,
    ) -> Self {
        Self {
            strip,
            inputs,
            input_mode: config.input_mode,
            debouncer: ScenarioDebouncer::new(config.debounce),
            slot: None,
        }
    }

    /// Process one frame
    ///
    /// Drains pending input events, enters a newly committed scenario if
    /// one debounced through, renders the active animation and flushes
    /// every physical strip. Before the first committed scenario this is
    /// a no-op.
    pub fn render(&mut self, now: Instant) -> Result<(), StripError> {
        self.process_inputs(now);

        let Some(slot) = &mut self.slot else {
            return Ok(());
        };
        slot.render(now, &mut self.strip)?;
        self.strip.show();
        Ok(())
    }

    /// The scenario currently driving the output, if any.
    pub const fn current_scenario(&self) -> Option<ScenarioId> {
        self.debouncer.current()
    }

    /// Whether the active animation has run to completion.
    ///
    /// Only the color wipe ever completes; periodic animations report
    /// `false` forever.
    pub fn is_scene_complete(&self) -> bool {
        self.slot.as_ref().is_some_and(EffectSlot::is_complete)
    }

    /// Read access to the virtual strip, for inspection.
    pub const fn strip(&self) -> &VirtualStrip<'a, O, MAX_STRIPS> {
        &self.strip
    }

    /// Drain pending input events from the channel (non-blocking)
    fn process_inputs(&mut self, now: Instant) {
        while let Some(event) = self.inputs.try_receive() {
            let Some(id) = event.scenario(self.input_mode) else {
                continue;
            };
            if let Some(entered) = self.debouncer.feed(id, now) {
                self.enter(entered);
            }
        }
    }

    /// One-time entry action for a committed scenario change.
    fn enter(&mut self, id: ScenarioId) {
        #[cfg(feature = "esp32-log")]
        println!("scenario {} entered", id.as_str());

        let mut slot = id.to_slot();
        slot.reset();
        self.slot = Some(slot);
    }
}
