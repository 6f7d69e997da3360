//! Looping image carousel
//!
//! Slides sit side by side on a track at fixed offsets (`index × width`).
//! Moving between slides only changes which slide is current and the track
//! transform; offsets change only when the layout is recomputed on resize.
//!
//! Autoplay advances on a repeating timer owned through [`Timers`]. Pointer and
//! touch interaction pause it:
//!
//! | event          | effect                                          |
//! |----------------|-------------------------------------------------|
//! | pointer enter  | stop                                            |
//! | pointer leave  | start                                           |
//! | touch start    | stop, cancel pending resume                     |
//! | touch end      | resume after the grace delay                    |
//! | next / prev    | move, then restart the interval                 |

mod autoplay;
mod slide;

pub use slide::{track_transform, Slide};

use crate::config::CarouselConfig;
use crate::timers::{TimerAction, Timers};
use autoplay::Autoplay;

/// Result of moving between slides
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
    /// Offset of the new current slide; the track is translated by its negation
    pub track_offset: f32,
}

impl SlideChange {
    pub fn track_transform(&self) -> String {
        track_transform(self.track_offset)
    }
}

/// Carousel state: slide layout, current slide and autoplay timers
#[derive(Debug)]
pub struct Carousel<T: Timers> {
    slides: Vec<Slide>,
    current: usize,
    slide_width: f32,
    autoplay: Autoplay,
    timers: T,
}

impl<T: Timers> Carousel<T> {
    /// Lay out `slide_count` slides of `slide_width` pixels
    ///
    /// `initial` is the slide the markup marks as current; out-of-range or
    /// missing falls back to the first slide. Returns `None` when there are no
    /// slides. Autoplay is not started here.
    pub fn new(
        slide_count: usize,
        initial: Option<usize>,
        slide_width: f32,
        config: &CarouselConfig,
        timers: T,
    ) -> Option<Self> {
        if slide_count == 0 {
            return None;
        }

        let current = initial.filter(|i| *i < slide_count).unwrap_or(0);
        Some(Self {
            slides: (0..slide_count).map(|i| Slide::new(i, slide_width)).collect(),
            current,
            slide_width,
            autoplay: Autoplay::new(
                config.autoplay,
                config.autoplay_interval_ms,
                config.touch_resume_delay_ms,
            ),
            timers,
        })
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false: an empty carousel is never constructed
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.current == index
    }

    pub fn slide_width(&self) -> f32 {
        self.slide_width
    }

    /// Offset of the current slide
    pub fn track_offset(&self) -> f32 {
        self.slides
            .get(self.current)
            .map(Slide::offset)
            .unwrap_or(0.0)
    }

    pub fn track_transform(&self) -> String {
        track_transform(self.track_offset())
    }

    pub fn timers(&self) -> &T {
        &self.timers
    }

    pub fn timers_mut(&mut self) -> &mut T {
        &mut self.timers
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Move to the next slide, wrapping to the first
    pub fn advance(&mut self) -> SlideChange {
        let target = (self.current + 1) % self.slides.len();
        self.move_to(target)
    }

    /// Move to the previous slide, wrapping to the last
    pub fn retreat(&mut self) -> SlideChange {
        let target = self
            .current
            .checked_sub(1)
            .unwrap_or(self.slides.len() - 1);
        self.move_to(target)
    }

    /// Next control pressed: advance and restart the autoplay interval
    pub fn next_pressed(&mut self) -> SlideChange {
        let change = self.advance();
        self.reset_autoplay();
        change
    }

    /// Previous control pressed: retreat and restart the autoplay interval
    pub fn prev_pressed(&mut self) -> SlideChange {
        let change = self.retreat();
        self.reset_autoplay();
        change
    }

    fn move_to(&mut self, target: usize) -> SlideChange {
        let from = self.current;
        self.current = target;
        SlideChange {
            from,
            to: target,
            track_offset: self.track_offset(),
        }
    }

    // =========================================================================
    // Layout
    // =========================================================================

    /// Recompute every offset for a new slide width and return the track
    /// offset that keeps the current slide aligned
    pub fn recompute_layout(&mut self, slide_width: f32) -> f32 {
        self.slide_width = slide_width;
        for slide in &mut self.slides {
            slide.relayout(slide_width);
        }
        self.track_offset()
    }

    // =========================================================================
    // Autoplay
    // =========================================================================

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn has_pending_resume(&self) -> bool {
        self.autoplay.has_pending_resume()
    }

    /// Start autoplay; a no-op if it is already running or disabled
    pub fn start_autoplay(&mut self) -> bool {
        self.autoplay.start(&mut self.timers)
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay.stop(&mut self.timers);
    }

    pub fn reset_autoplay(&mut self) {
        self.autoplay.reset(&mut self.timers);
    }

    /// Pause while hovered. A pending touch resume is left alone: touch
    /// browsers follow a tap with a compatibility `mouseenter`, and the
    /// matching `mouseleave` may never arrive.
    pub fn pointer_enter(&mut self) {
        self.autoplay.stop(&mut self.timers);
    }

    pub fn pointer_leave(&mut self) {
        self.start_autoplay();
    }

    pub fn touch_start(&mut self) {
        self.autoplay.cancel_resume(&mut self.timers);
        self.autoplay.stop(&mut self.timers);
    }

    pub fn touch_end(&mut self) {
        self.autoplay.schedule_resume(&mut self.timers);
    }

    /// Dispatch a fired timer
    pub fn on_timer(&mut self, action: TimerAction) -> Option<SlideChange> {
        match action {
            TimerAction::Advance => Some(self.advance()),
            TimerAction::ResumeAutoplay => {
                self.autoplay.resume_fired();
                self.start_autoplay();
                None
            }
        }
    }

    /// Cancel every timer the carousel owns
    pub fn dispose(&mut self) {
        self.autoplay.cancel_resume(&mut self.timers);
        self.autoplay.stop(&mut self.timers);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeTimerKind, FakeTimers};

    fn carousel(count: usize) -> Carousel<FakeTimers> {
        Carousel::new(count, None, 800.0, &CarouselConfig::default(), FakeTimers::new()).unwrap()
    }

    #[test]
    fn test_empty_carousel_is_not_built() {
        assert!(Carousel::new(0, None, 800.0, &CarouselConfig::default(), FakeTimers::new()).is_none());
    }

    #[test]
    fn test_initial_slide_from_markup() {
        let c = Carousel::new(4, Some(2), 100.0, &CarouselConfig::default(), FakeTimers::new()).unwrap();
        assert_eq!(c.current(), 2);
        assert_eq!(c.track_transform(), "translateX(-200px)");

        let c = Carousel::new(4, Some(9), 100.0, &CarouselConfig::default(), FakeTimers::new()).unwrap();
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_advance_wraps() {
        let mut c = carousel(3);
        assert_eq!(c.advance().to, 1);
        assert_eq!(c.advance().to, 2);
        let change = c.advance();
        assert_eq!((change.from, change.to), (2, 0));
        assert_eq!(change.track_transform(), "translateX(-0px)");
    }

    #[test]
    fn test_retreat_wraps() {
        let mut c = carousel(3);
        let change = c.retreat();
        assert_eq!((change.from, change.to), (0, 2));
        assert!((change.track_offset - 1600.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_single_slide() {
        let mut c = carousel(1);
        assert_eq!(c.advance().to, 0);
        assert_eq!(c.retreat().to, 0);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_exactly_one_current() {
        let mut c = carousel(5);
        for _ in 0..7 {
            c.advance();
            let current = (0..c.len()).filter(|i| c.is_current(*i)).count();
            assert_eq!(current, 1);
        }
    }

    #[test]
    fn test_navigation_keeps_offsets() {
        let mut c = carousel(3);
        let before: Vec<f32> = c.slides().iter().map(Slide::offset).collect();
        c.advance();
        c.retreat();
        c.retreat();
        let after: Vec<f32> = c.slides().iter().map(Slide::offset).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_recompute_layout() {
        let mut c = carousel(4);
        c.advance();
        c.advance();

        let offset = c.recompute_layout(375.0);
        assert!((offset - 750.0).abs() < f32::EPSILON);
        for (i, slide) in c.slides().iter().enumerate() {
            assert!((slide.offset() - 375.0 * i as f32).abs() < f32::EPSILON);
        }
        assert_eq!(c.current(), 2);
    }

    #[test]
    fn test_start_autoplay_twice_keeps_one_timer() {
        let mut c = carousel(3);
        assert!(c.start_autoplay());
        assert!(!c.start_autoplay());
        assert_eq!(c.timers().handles_of(FakeTimerKind::Interval).len(), 1);
    }

    #[test]
    fn test_autoplay_disabled() {
        let config = CarouselConfig {
            autoplay: false,
            ..CarouselConfig::default()
        };
        let mut c = Carousel::new(3, None, 800.0, &config, FakeTimers::new()).unwrap();
        assert!(!c.start_autoplay());
        c.touch_end();
        assert_eq!(c.timers().active_count(), 0);
    }

    #[test]
    fn test_manual_navigation_resets_interval() {
        let mut c = carousel(3);
        c.start_autoplay();
        let first = c.timers().handles_of(FakeTimerKind::Interval)[0];

        c.next_pressed();
        let intervals = c.timers().handles_of(FakeTimerKind::Interval);
        assert_eq!(intervals.len(), 1);
        assert_ne!(intervals[0], first);
        assert_eq!(c.current(), 1);

        c.prev_pressed();
        assert_eq!(c.timers().handles_of(FakeTimerKind::Interval).len(), 1);
        assert_eq!(c.current(), 0);
    }

    #[test]
    fn test_pointer_pauses_and_resumes() {
        let mut c = carousel(3);
        c.start_autoplay();

        c.pointer_enter();
        assert!(!c.is_autoplaying());
        assert_eq!(c.timers().active_count(), 0);

        c.pointer_leave();
        assert!(c.is_autoplaying());
    }

    #[test]
    fn test_touch_resume_after_grace_delay() {
        let mut c = carousel(3);
        c.start_autoplay();

        c.touch_start();
        assert!(!c.is_autoplaying());

        c.touch_end();
        assert!(!c.is_autoplaying());
        let timeouts = c.timers().handles_of(FakeTimerKind::Timeout);
        assert_eq!(timeouts.len(), 1);
        let (_, timer) = c.timers().active().next().unwrap();
        assert_eq!(timer.delay_ms, 2000);

        let action = c.timers_mut().fire(timeouts[0]).unwrap();
        assert_eq!(c.on_timer(action), None);
        assert!(c.is_autoplaying());
        assert!(!c.has_pending_resume());
    }

    #[test]
    fn test_touch_start_cancels_pending_resume() {
        let mut c = carousel(3);
        c.start_autoplay();
        c.touch_start();
        c.touch_end();
        assert!(c.has_pending_resume());

        c.touch_start();
        assert!(!c.has_pending_resume());
        assert_eq!(c.timers().active_count(), 0);
    }

    #[test]
    fn test_pointer_enter_after_tap_keeps_resume() {
        let mut c = carousel(3);
        c.start_autoplay();
        c.touch_start();
        c.touch_end();
        c.pointer_enter();

        assert!(!c.is_autoplaying());
        assert!(c.has_pending_resume());
        let timeouts = c.timers().handles_of(FakeTimerKind::Timeout);
        assert_eq!(timeouts.len(), 1);

        let action = c.timers_mut().fire(timeouts[0]).unwrap();
        assert_eq!(c.on_timer(action), None);
        assert!(c.is_autoplaying());
        assert_eq!(c.timers().handles_of(FakeTimerKind::Interval).len(), 1);
    }

    #[test]
    fn test_interval_tick_advances() {
        let mut c = carousel(2);
        c.start_autoplay();
        let handle = c.timers().handles_of(FakeTimerKind::Interval)[0];

        let action = c.timers_mut().fire(handle).unwrap();
        let change = c.on_timer(action).unwrap();
        assert_eq!(change.to, 1);
    }

    #[test]
    fn test_dispose_clears_all_timers() {
        let mut c = carousel(3);
        c.start_autoplay();
        c.touch_end();
        assert_eq!(c.timers().active_count(), 2);

        c.dispose();
        assert_eq!(c.timers().active_count(), 0);
        assert!(!c.is_autoplaying());
    }
}
