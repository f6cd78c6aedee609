#![no_std]

pub mod color;
pub mod effect;
pub mod frame_scheduler;
pub mod input;
pub mod math;
pub mod renderer;
pub mod scenario;
pub mod strip;

pub use color::{Rgb, wheel};
pub use effect::{Effect, EffectSlot};
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use input::{InputChannel, InputEvent, InputMode, InputReceiver, InputSender};
pub use renderer::{Renderer, SceneConfig};
pub use scenario::{ScenarioDebouncer, ScenarioId};
pub use strip::{PhysicalStrip, PixelLocation, StripError, VirtualStrip};

pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
/// Each physical strip carries its own driver handle; `write` receives
/// the strip's full pixel buffer on every flush.
pub trait OutputDriver {
    /// Write colors to the LED strip
    fn write(&mut self, colors: &[Rgb]);
}
