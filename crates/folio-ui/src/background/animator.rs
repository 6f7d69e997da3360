//! Frame-driven owner of the selected render routine
//!
//! The host calls [`BackgroundAnimator::frame`] once per display refresh and
//! keeps rescheduling for as long as it returns `true`.

use rand::rngs::SmallRng;

use super::routine::{create_routine, RenderRoutine};
use super::types::BackgroundType;
use crate::clock::{Clock, FrameClock, FrameTiming};
use crate::math::Size;
use crate::surface::Surface;

pub struct BackgroundAnimator<C: Clock> {
    kind: BackgroundType,
    routine: Box<dyn RenderRoutine>,
    frames: FrameClock<C>,
    bounds: Size,
    running: bool,
    frame_count: u64,
}

impl<C: Clock> BackgroundAnimator<C> {
    /// Build the animator for `kind`; `None` when there is nothing to animate
    pub fn new(
        kind: BackgroundType,
        bounds: Size,
        clock: C,
        timing: FrameTiming,
        mut rng: SmallRng,
    ) -> Option<Self> {
        let routine = create_routine(kind, bounds, &mut rng)?;
        Some(Self {
            kind,
            routine,
            frames: FrameClock::new(clock, timing),
            bounds,
            running: true,
            frame_count: 0,
        })
    }

    pub fn kind(&self) -> BackgroundType {
        self.kind
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn timing(&self) -> FrameTiming {
        self.frames.timing()
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// New surface dimensions. Existing particles keep their positions.
    pub fn resize(&mut self, bounds: Size) {
        self.bounds = bounds;
    }

    /// Update then draw one frame. Returns whether another frame should be
    /// scheduled.
    pub fn frame(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.running {
            return false;
        }
        let tick = self.frames.tick();
        self.routine.update(tick.dt, self.bounds);
        self.routine.draw(surface);
        self.frame_count += 1;
        true
    }

    pub fn stop(&mut self) {
        self.running = false;
    }
}

impl<C: Clock> std::fmt::Debug for BackgroundAnimator<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BackgroundAnimator")
            .field("kind", &self.kind)
            .field("bounds", &self.bounds)
            .field("running", &self.running)
            .field("frame_count", &self.frame_count)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, ManualClock, RecordingSurface};
    use rand::SeedableRng;

    fn animator(kind: BackgroundType, bounds: Size) -> Option<BackgroundAnimator<ManualClock>> {
        BackgroundAnimator::new(
            kind,
            bounds,
            ManualClock::new(0.0),
            FrameTiming::Fixed,
            SmallRng::seed_from_u64(9),
        )
    }

    #[test]
    fn test_none_has_no_animator() {
        assert!(animator(BackgroundType::None, Size::new(800.0, 600.0)).is_none());
    }

    #[test]
    fn test_frame_draws_and_counts() {
        let bounds = Size::new(320.0, 240.0);
        let mut anim = animator(BackgroundType::Sine, bounds).unwrap();
        let mut surface = RecordingSurface::new(bounds);

        assert!(anim.frame(&mut surface));
        assert!(anim.frame(&mut surface));
        assert_eq!(anim.frame_count(), 2);
        let clears = surface.calls().iter().filter(|c| **c == DrawCall::Clear).count();
        assert_eq!(clears, 2);
    }

    #[test]
    fn test_stop_ends_loop_without_drawing() {
        let bounds = Size::new(320.0, 240.0);
        let mut anim = animator(BackgroundType::Oscillator, bounds).unwrap();
        let mut surface = RecordingSurface::new(bounds);

        anim.frame(&mut surface);
        anim.stop();
        surface.take_calls();

        assert!(!anim.is_running());
        assert!(!anim.frame(&mut surface));
        assert!(surface.calls().is_empty());
        assert_eq!(anim.frame_count(), 1);
    }

    #[test]
    fn test_resize_only_changes_bounds() {
        let mut anim = animator(BackgroundType::Constellation, Size::new(300.0, 100.0)).unwrap();
        anim.resize(Size::new(1920.0, 1080.0));
        assert_eq!(anim.bounds(), Size::new(1920.0, 1080.0));

        let mut surface = RecordingSurface::new(anim.bounds());
        anim.frame(&mut surface);
        // Population was sized for the initial surface
        assert_eq!(surface.circle_count(), 2);
    }

    #[test]
    fn test_every_animated_kind_builds() {
        for kind in BackgroundType::all() {
            let anim = animator(*kind, Size::new(640.0, 480.0)).unwrap();
            assert_eq!(anim.kind(), *kind);
            assert_eq!(anim.timing(), FrameTiming::Fixed);
        }
    }
}
