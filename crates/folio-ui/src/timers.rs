//! Wall-clock timer capability
//!
//! The carousel schedules its autoplay interval and touch grace delay through
//! [`Timers`]. The host owns the real timers and calls back into the carousel
//! with the [`TimerAction`] it was given when the timer fires.

/// Opaque identifier of a scheduled timer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(pub i32);

/// What the host should ask the carousel to do when a timer fires
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerAction {
    /// Autoplay tick: move to the next slide
    Advance,
    /// Grace delay elapsed: restart autoplay
    ResumeAutoplay,
}

/// Host timer scheduling
///
/// Implementations return `None` when the host refuses to schedule; callers
/// treat that as "no timer running".
pub trait Timers {
    /// Fire `action` every `period_ms` until cleared
    fn set_interval(&mut self, period_ms: u32, action: TimerAction) -> Option<TimerHandle>;

    /// Fire `action` once after `delay_ms`
    fn set_timeout(&mut self, delay_ms: u32, action: TimerAction) -> Option<TimerHandle>;

    /// Cancel a timer. Clearing an unknown or already-fired handle is a no-op.
    fn clear(&mut self, handle: TimerHandle);
}
