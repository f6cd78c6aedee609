//! Frame scheduling and timing utilities.
//!
//! Provides portable frame pacing without async/await or platform-specific timers.
//! The caller is responsible for sleeping/waiting between frames.

use embassy_time::{Duration, Instant};

use crate::OutputDriver;
use crate::renderer::Renderer;
use crate::strip::StripError;

/// Default target frame rate (60 FPS).
pub const DEFAULT_FPS: u32 = 60;

/// Default frame duration based on target FPS.
pub const DEFAULT_FRAME_DURATION: Duration = Duration::from_millis(1000 / DEFAULT_FPS as u64);

/// Result of a frame tick operation.
#[derive(Debug, Clone, Copy)]
pub struct FrameResult {
    /// The deadline for the next frame.
    pub next_deadline: Instant,
    /// How long to wait until the next frame (may be zero if behind schedule).
    pub sleep_duration: Duration,
}

/// Portable frame scheduler that manages timing without async.
///
/// Tracks frame timing with drift correction, drives the renderer once
/// per tick, and returns timing info so the caller can sleep
/// appropriately between ticks.
pub struct FrameScheduler<'a, O: OutputDriver, const MAX_STRIPS: usize, const INPUT_CHANNEL_SIZE: usize>
{
    renderer: Renderer<'a, O, MAX_STRIPS, INPUT_CHANNEL_SIZE>,
    next_frame: Instant,
    frame_duration: Duration,
}

impl<'a, O: OutputDriver, const MAX_STRIPS: usize, const INPUT_CHANNEL_SIZE: usize>
    FrameScheduler<'a, O, MAX_STRIPS, INPUT_CHANNEL_SIZE>
{
    /// Create a new frame scheduler.
    ///
    /// Uses `DEFAULT_FRAME_DURATION` (60 FPS) for frame timing.
    pub fn new(renderer: Renderer<'a, O, MAX_STRIPS, INPUT_CHANNEL_SIZE>) -> Self {
        Self::with_frame_duration(renderer, DEFAULT_FRAME_DURATION)
    }

    /// Create a new frame scheduler with custom frame duration.
    pub fn with_frame_duration(
        renderer: Renderer<'a, O, MAX_STRIPS, INPUT_CHANNEL_SIZE>,
        frame_duration: Duration,
    ) -> Self {
        Self {
            renderer,
            next_frame: Instant::from_millis(0),
            frame_duration,
        }
    }

    /// Process one frame and return timing information.
    ///
    /// Applies drift correction if we have fallen too far behind, drives
    /// the renderer (which flushes the strips itself), then returns the
    /// deadline for the next frame. The caller waits until
    /// `next_deadline` before calling `tick` again.
    pub fn tick(&mut self, now: Instant) -> Result<FrameResult, StripError> {
        // Drift correction: if we've fallen too far behind, reset to now
        // This prevents catch-up bursts after long stalls
        let max_drift_ms = self.frame_duration.as_millis() * 2;
        if now.as_millis() > self.next_frame.as_millis() + max_drift_ms {
            self.next_frame = now;
        }

        self.renderer.render(now)?;

        self.next_frame += self.frame_duration;

        // Sleep duration may be zero if we're behind
        let sleep_duration = if self.next_frame.as_millis() > now.as_millis() {
            Duration::from_millis(self.next_frame.as_millis() - now.as_millis())
        } else {
            Duration::from_millis(0)
        };

        Ok(FrameResult {
            next_deadline: self.next_frame,
            sleep_duration,
        })
    }

    /// Get a reference to the renderer.
    pub fn renderer(&self) -> &Renderer<'a, O, MAX_STRIPS, INPUT_CHANNEL_SIZE> {
        &self.renderer
    }

    /// Get a mutable reference to the renderer.
    pub fn renderer_mut(&mut self) -> &mut Renderer<'a, O, MAX_STRIPS, INPUT_CHANNEL_SIZE> {
        &mut self.renderer
    }
}
