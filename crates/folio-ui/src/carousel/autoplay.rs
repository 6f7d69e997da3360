//! Autoplay timer bookkeeping
//!
//! Holds the handles of the two timers the carousel may own: the repeating
//! advance interval and the one-shot resume after a touch.

use crate::timers::{TimerAction, TimerHandle, Timers};

#[derive(Clone, Copy, Debug)]
pub(crate) struct Autoplay {
    enabled: bool,
    interval_ms: u32,
    resume_delay_ms: u32,
    interval: Option<TimerHandle>,
    pending_resume: Option<TimerHandle>,
}

impl Autoplay {
    pub(crate) fn new(enabled: bool, interval_ms: u32, resume_delay_ms: u32) -> Self {
        Self {
            enabled,
            interval_ms,
            resume_delay_ms,
            interval: None,
            pending_resume: None,
        }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    pub(crate) fn has_pending_resume(&self) -> bool {
        self.pending_resume.is_some()
    }

    /// Start the interval unless one is already running
    pub(crate) fn start(&mut self, timers: &mut dyn Timers) -> bool {
        if !self.enabled || self.interval.is_some() {
            return false;
        }
        self.interval = timers.set_interval(self.interval_ms, TimerAction::Advance);
        self.interval.is_some()
    }

    pub(crate) fn stop(&mut self, timers: &mut dyn Timers) {
        if let Some(handle) = self.interval.take() {
            timers.clear(handle);
        }
    }

    /// Restart so the next automatic advance is a full interval away
    pub(crate) fn reset(&mut self, timers: &mut dyn Timers) {
        self.stop(timers);
        self.start(timers);
    }

    /// Schedule a delayed restart, replacing any pending one
    pub(crate) fn schedule_resume(&mut self, timers: &mut dyn Timers) {
        self.cancel_resume(timers);
        if self.enabled {
            self.pending_resume =
                timers.set_timeout(self.resume_delay_ms, TimerAction::ResumeAutoplay);
        }
    }

    pub(crate) fn cancel_resume(&mut self, timers: &mut dyn Timers) {
        if let Some(handle) = self.pending_resume.take() {
            timers.clear(handle);
        }
    }

    /// The resume timeout fired; its handle is dead
    pub(crate) fn resume_fired(&mut self) {
        self.pending_resume = None;
    }
}
