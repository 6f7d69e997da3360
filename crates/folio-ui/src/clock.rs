//! Time abstraction for the frame loop
//!
//! The browser supplies `performance.now()`; tests supply a
//! [`ManualClock`](crate::testing::ManualClock). [`FrameClock`] turns raw
//! timestamps into per-frame steps for the render routines.

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_FRAME_STEPS, REFERENCE_FRAME_MS};

/// Monotonic millisecond time source
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// How per-frame steps are derived
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameTiming {
    /// Every frame advances the animation by exactly one step,
    /// whatever the display refresh rate
    #[default]
    Fixed,
    /// Steps follow elapsed time, normalised to a 60 Hz frame
    Measured,
}

/// One frame's worth of animation progress
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameTick {
    /// Elapsed time in reference frames (1.0 = one 60 Hz frame)
    pub dt: f32,
}

impl FrameTick {
    pub const ONE: FrameTick = FrameTick { dt: 1.0 };
}

/// Converts clock readings into [`FrameTick`]s
#[derive(Debug)]
pub struct FrameClock<C: Clock> {
    clock: C,
    timing: FrameTiming,
    last_ms: Option<f64>,
}

impl<C: Clock> FrameClock<C> {
    pub fn new(clock: C, timing: FrameTiming) -> Self {
        Self {
            clock,
            timing,
            last_ms: None,
        }
    }

    pub fn timing(&self) -> FrameTiming {
        self.timing
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Advance to the current clock reading
    pub fn tick(&mut self) -> FrameTick {
        let now = self.clock.now_ms();
        let previous = self.last_ms.replace(now);

        match (self.timing, previous) {
            (FrameTiming::Fixed, _) | (FrameTiming::Measured, None) => FrameTick::ONE,
            (FrameTiming::Measured, Some(last)) => {
                let steps = ((now - last) / REFERENCE_FRAME_MS) as f32;
                FrameTick {
                    dt: steps.clamp(0.0, MAX_FRAME_STEPS),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ManualClock;

    #[test]
    fn test_fixed_timing_ignores_elapsed_time() {
        let mut frames = FrameClock::new(ManualClock::new(0.0), FrameTiming::Fixed);
        assert_eq!(frames.tick(), FrameTick::ONE);
        frames.clock().advance(250.0);
        assert_eq!(frames.tick(), FrameTick::ONE);
    }

    #[test]
    fn test_measured_timing_normalises_to_60hz() {
        let mut frames = FrameClock::new(ManualClock::new(1000.0), FrameTiming::Measured);
        // First frame has no reference point
        assert_eq!(frames.tick(), FrameTick::ONE);

        frames.clock().advance(REFERENCE_FRAME_MS * 2.0);
        assert!((frames.tick().dt - 2.0).abs() < 0.001);
    }

    #[test]
    fn test_measured_timing_is_clamped() {
        let mut frames = FrameClock::new(ManualClock::new(0.0), FrameTiming::Measured);
        frames.tick();
        frames.clock().advance(10_000.0);
        assert!((frames.tick().dt - MAX_FRAME_STEPS).abs() < 0.001);
    }

    #[test]
    fn test_frame_timing_serde() {
        let timing: FrameTiming = serde_json::from_str("\"measured\"").unwrap();
        assert_eq!(timing, FrameTiming::Measured);
        assert_eq!(serde_json::to_string(&FrameTiming::Fixed).unwrap(), "\"fixed\"");
    }
}
