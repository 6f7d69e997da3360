//! Oscilloscope-style Lissajous trace

use super::routine::RenderRoutine;
use super::types::BackgroundType;
use crate::math::{Rgba, Size, Vec2};
use crate::surface::{Glow, Surface};

/// Angular speeds per reference frame. Their ratio is irrational enough that
/// the figure takes a long time to repeat.
pub const SPEED_X: f32 = 0.015;
pub const SPEED_Y: f32 = 0.019;

/// Painted over the whole surface before each dot; leaves a fading trail
pub const FADE: Rgba = Rgba::new(15, 23, 42, 0.1);
pub const DOT: Rgba = Rgba::new(251, 191, 36, 0.8);
const DOT_RADIUS: f32 = 2.0;
const GLOW_BLUR: f32 = 15.0;

#[derive(Clone, Debug, Default)]
pub struct Oscillator {
    angle_x: f32,
    angle_y: f32,
}

impl Oscillator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.angle_x, self.angle_y)
    }

    /// Trace position on a surface of `size`
    pub fn position(&self, size: Size) -> Vec2 {
        let radius = size.min_side() / 3.0;
        let center = size.center();
        Vec2::new(
            center.x + self.angle_x.cos() * radius,
            center.y + self.angle_y.sin() * radius,
        )
    }
}

impl RenderRoutine for Oscillator {
    fn kind(&self) -> BackgroundType {
        BackgroundType::Oscillator
    }

    fn update(&mut self, dt: f32, _bounds: Size) {
        self.angle_x += SPEED_X * dt;
        self.angle_y += SPEED_Y * dt;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let size = surface.size();
        surface.fill_rect(Vec2::ZERO, size, FADE);
        surface.fill_circle(
            self.position(size),
            DOT_RADIUS,
            DOT,
            Some(Glow {
                blur: GLOW_BLUR,
                color: DOT,
            }),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingSurface};

    #[test]
    fn test_fade_painted_before_dot() {
        let size = Size::new(900.0, 600.0);
        let mut surface = RecordingSurface::new(size);
        Oscillator::new().draw(&mut surface);

        let calls = surface.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(
            calls[0],
            DrawCall::FillRect {
                origin: Vec2::ZERO,
                size,
                color: FADE
            }
        );
        match &calls[1] {
            DrawCall::FillCircle { radius, glow, .. } => {
                assert!((radius - 2.0).abs() < f32::EPSILON);
                assert_eq!(glow.map(|g| g.blur), Some(15.0));
            }
            other => panic!("expected dot, got {:?}", other),
        }
        // Fading, never clearing
        assert!(!calls.contains(&DrawCall::Clear));
    }

    #[test]
    fn test_start_position() {
        // cos(0) = 1, sin(0) = 0: right of center by a third of the short side
        let pos = Oscillator::new().position(Size::new(900.0, 600.0));
        assert!((pos.x - 650.0).abs() < 0.001);
        assert!((pos.y - 300.0).abs() < 0.001);
    }

    #[test]
    fn test_independent_axis_speeds() {
        let mut osc = Oscillator::new();
        for _ in 0..100 {
            osc.update(1.0, Size::ZERO);
        }
        let (ax, ay) = osc.angles();
        assert!((ax - 1.5).abs() < 0.001);
        assert!((ay - 1.9).abs() < 0.001);
    }

    #[test]
    fn test_trace_stays_inside_surface() {
        let size = Size::new(400.0, 1000.0);
        let mut osc = Oscillator::new();
        for _ in 0..2000 {
            osc.update(1.0, size);
            let p = osc.position(size);
            assert!(p.x >= 0.0 && p.x <= size.width);
            assert!(p.y >= 0.0 && p.y <= size.height);
        }
    }
}
