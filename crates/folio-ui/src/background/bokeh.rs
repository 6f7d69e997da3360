//! Rising out-of-focus bubbles
//!
//! A fixed population drifts upward forever: a bubble that leaves through the
//! top edge is moved back below the bottom edge at a fresh horizontal
//! position, keeping its speed, radius and opacity.

use rand::rngs::SmallRng;
use rand::Rng;

use super::routine::RenderRoutine;
use super::types::BackgroundType;
use crate::constants::BOKEH_BUBBLE_COUNT;
use crate::math::{Rgba, Size, Vec2};
use crate::surface::Surface;

const BUBBLE_RGB: Rgba = Rgba::new(200, 200, 255, 1.0);

/// A bubble leaving above this line is recycled
pub const TOP_EXIT: f32 = -10.0;
/// Recycled bubbles restart this far below the bottom edge
pub const BOTTOM_REENTRY: f32 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub position: Vec2,
    /// Upward pixels per reference frame
    pub speed: f32,
    pub radius: f32,
    pub opacity: f32,
}

impl Bubble {
    fn random(bounds: Size, rng: &mut SmallRng) -> Self {
        Self {
            position: Vec2::new(
                rng.gen::<f32>() * bounds.width,
                bounds.height + rng.gen::<f32>() * 100.0,
            ),
            speed: 0.5 + rng.gen::<f32>(),
            radius: rng.gen::<f32>() * 4.0 + 1.0,
            opacity: rng.gen::<f32>() * 0.3 + 0.1,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Bokeh {
    bubbles: Vec<Bubble>,
    rng: SmallRng,
    recycled: u64,
}

impl Bokeh {
    pub fn new(bounds: Size, mut rng: SmallRng) -> Self {
        let bubbles = (0..BOKEH_BUBBLE_COUNT)
            .map(|_| Bubble::random(bounds, &mut rng))
            .collect();
        Self {
            bubbles,
            rng,
            recycled: 0,
        }
    }

    pub fn bubbles(&self) -> &[Bubble] {
        &self.bubbles
    }

    /// Total number of recycles so far
    pub fn recycled(&self) -> u64 {
        self.recycled
    }
}

impl RenderRoutine for Bokeh {
    fn kind(&self) -> BackgroundType {
        BackgroundType::Bokeh
    }

    fn update(&mut self, dt: f32, bounds: Size) {
        for bubble in &mut self.bubbles {
            bubble.position.y -= bubble.speed * dt;
            if bubble.position.y < TOP_EXIT {
                bubble.position.y = bounds.height + BOTTOM_REENTRY;
                bubble.position.x = self.rng.gen::<f32>() * bounds.width;
                self.recycled += 1;
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        for bubble in &self.bubbles {
            surface.fill_circle(
                bubble.position,
                bubble.radius,
                BUBBLE_RGB.with_alpha(bubble.opacity),
                None,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingSurface;
    use rand::SeedableRng;

    fn bokeh(bounds: Size) -> Bokeh {
        Bokeh::new(bounds, SmallRng::seed_from_u64(1234))
    }

    #[test]
    fn test_fixed_population_starts_below_bottom() {
        let bounds = Size::new(1024.0, 768.0);
        let routine = bokeh(bounds);
        assert_eq!(routine.bubbles().len(), 40);
        for b in routine.bubbles() {
            assert!(b.position.y >= bounds.height && b.position.y < bounds.height + 100.0);
            assert!(b.speed >= 0.5 && b.speed < 1.5);
            assert!(b.radius >= 1.0 && b.radius < 5.0);
            assert!(b.opacity >= 0.1 && b.opacity < 0.4);
        }
    }

    #[test]
    fn test_bubbles_rise_at_own_speed() {
        let bounds = Size::new(1024.0, 768.0);
        let mut routine = bokeh(bounds);
        let before = routine.bubbles().to_vec();
        routine.update(1.0, bounds);
        for (old, new) in before.iter().zip(routine.bubbles()) {
            assert!((old.position.y - new.position.y - old.speed).abs() < 0.001);
            assert_eq!(old.position.x, new.position.x);
        }
    }

    #[test]
    fn test_recycled_below_bottom_edge() {
        let bounds = Size::new(640.0, 480.0);
        let mut routine = bokeh(bounds);
        // Slowest bubble needs < (480 + 100 + 10) / 0.5 frames to leave
        for _ in 0..1200 {
            routine.update(1.0, bounds);
            for b in routine.bubbles() {
                assert!(b.position.y >= TOP_EXIT);
                assert!(b.position.x >= 0.0 && b.position.x <= bounds.width);
            }
        }
        assert!(routine.recycled() >= 40);
    }

    #[test]
    fn test_recycle_keeps_appearance() {
        let bounds = Size::new(640.0, 480.0);
        let mut routine = bokeh(bounds);
        let before = routine.bubbles().to_vec();
        for _ in 0..1200 {
            routine.update(1.0, bounds);
        }
        for (old, new) in before.iter().zip(routine.bubbles()) {
            assert_eq!(old.speed, new.speed);
            assert_eq!(old.radius, new.radius);
            assert_eq!(old.opacity, new.opacity);
        }
    }

    #[test]
    fn test_draws_one_circle_per_bubble() {
        let bounds = Size::new(640.0, 480.0);
        let mut surface = RecordingSurface::new(bounds);
        bokeh(bounds).draw(&mut surface);
        assert_eq!(surface.circle_count(), 40);
    }
}
