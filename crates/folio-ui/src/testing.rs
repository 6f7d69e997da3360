//! Headless stand-ins for the browser capabilities
//!
//! These fakes let the render routines and the carousel run without a DOM:
//! - [`RecordingSurface`] records every draw call
//! - [`FakeTimers`] keeps scheduled timers in a table that tests fire by hand
//! - [`ManualClock`] only moves when told to

use std::cell::Cell;
use std::collections::BTreeMap;

use crate::clock::Clock;
use crate::math::{Rgba, Size, Vec2};
use crate::surface::{Glow, Surface};
use crate::timers::{TimerAction, TimerHandle, Timers};

// =============================================================================
// Surface
// =============================================================================

/// A single recorded drawing operation
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Clear,
    FillRect {
        origin: Vec2,
        size: Size,
        color: Rgba,
    },
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow: Option<Glow>,
    },
    StrokeLine {
        from: Vec2,
        to: Vec2,
        color: Rgba,
        width: f32,
    },
    StrokePolyline {
        points: Vec<Vec2>,
        color: Rgba,
        width: f32,
    },
}

/// Surface that records draw calls instead of painting
#[derive(Debug, Default)]
pub struct RecordingSurface {
    size: Size,
    calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            calls: Vec::new(),
        }
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Drop everything recorded so far
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Number of `stroke_line` calls recorded
    pub fn line_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::StrokeLine { .. }))
            .count()
    }

    /// Number of `fill_circle` calls recorded
    pub fn circle_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, DrawCall::FillCircle { .. }))
            .count()
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Size, color: Rgba) {
        self.calls.push(DrawCall::FillRect { origin, size, color });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>) {
        self.calls.push(DrawCall::FillCircle {
            center,
            radius,
            color,
            glow,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.calls.push(DrawCall::StrokeLine {
            from,
            to,
            color,
            width,
        });
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32) {
        self.calls.push(DrawCall::StrokePolyline {
            points: points.to_vec(),
            color,
            width,
        });
    }
}

// =============================================================================
// Timers
// =============================================================================

/// Kind of a scheduled fake timer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FakeTimerKind {
    Interval,
    Timeout,
}

/// A timer held by [`FakeTimers`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FakeTimer {
    pub kind: FakeTimerKind,
    pub delay_ms: u32,
    pub action: TimerAction,
}

/// Timer table driven manually by tests
#[derive(Debug, Default)]
pub struct FakeTimers {
    next_id: i32,
    active: BTreeMap<TimerHandle, FakeTimer>,
    cleared: usize,
}

impl FakeTimers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timers currently scheduled
    pub fn active(&self) -> impl Iterator<Item = (TimerHandle, &FakeTimer)> {
        self.active.iter().map(|(h, t)| (*h, t))
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Handles of active timers of the given kind
    pub fn handles_of(&self, kind: FakeTimerKind) -> Vec<TimerHandle> {
        self.active
            .iter()
            .filter(|(_, t)| t.kind == kind)
            .map(|(h, _)| *h)
            .collect()
    }

    /// Number of `clear` calls that removed a live timer
    pub fn cleared_count(&self) -> usize {
        self.cleared
    }

    /// Simulate the host firing a timer. Timeouts are removed once fired.
    pub fn fire(&mut self, handle: TimerHandle) -> Option<TimerAction> {
        let timer = *self.active.get(&handle)?;
        if timer.kind == FakeTimerKind::Timeout {
            self.active.remove(&handle);
        }
        Some(timer.action)
    }

    fn schedule(&mut self, kind: FakeTimerKind, delay_ms: u32, action: TimerAction) -> TimerHandle {
        self.next_id += 1;
        let handle = TimerHandle(self.next_id);
        self.active.insert(
            handle,
            FakeTimer {
                kind,
                delay_ms,
                action,
            },
        );
        handle
    }
}

impl Timers for FakeTimers {
    fn set_interval(&mut self, period_ms: u32, action: TimerAction) -> Option<TimerHandle> {
        Some(self.schedule(FakeTimerKind::Interval, period_ms, action))
    }

    fn set_timeout(&mut self, delay_ms: u32, action: TimerAction) -> Option<TimerHandle> {
        Some(self.schedule(FakeTimerKind::Timeout, delay_ms, action))
    }

    fn clear(&mut self, handle: TimerHandle) {
        if self.active.remove(&handle).is_some() {
            self.cleared += 1;
        }
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Clock that only moves when advanced
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: f64) {
        self.now.set(self.now.get() + ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_timeout_removed_after_fire() {
        let mut timers = FakeTimers::new();
        let handle = timers.set_timeout(2000, TimerAction::ResumeAutoplay).unwrap();
        assert_eq!(timers.fire(handle), Some(TimerAction::ResumeAutoplay));
        assert_eq!(timers.active_count(), 0);
        assert_eq!(timers.fire(handle), None);
    }

    #[test]
    fn test_fake_interval_survives_fire() {
        let mut timers = FakeTimers::new();
        let handle = timers.set_interval(4000, TimerAction::Advance).unwrap();
        assert_eq!(timers.fire(handle), Some(TimerAction::Advance));
        assert_eq!(timers.fire(handle), Some(TimerAction::Advance));
        timers.clear(handle);
        assert_eq!(timers.active_count(), 0);
        assert_eq!(timers.cleared_count(), 1);
    }
}
