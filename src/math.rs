use embassy_time::{Duration, Instant};

/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Fractional position within a repeating period, in `[0, 1)`.
///
/// Derived from the monotonic clock only; a zero period is treated as 1 ms.
#[inline]
#[allow(clippy::cast_precision_loss)]
pub fn phase(now: Instant, period: Duration) -> f32 {
    let period_ms = period.as_millis().max(1);
    (now.as_millis() % period_ms) as f32 / period_ms as f32
}
