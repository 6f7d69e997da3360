//! Superimposed sine waves

use super::routine::RenderRoutine;
use super::types::BackgroundType;
use crate::math::{Rgba, Size, Vec2};
use crate::surface::Surface;

/// One wave's shape
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wave {
    /// Spatial frequency (radians per pixel)
    pub length: f32,
    pub amplitude: f32,
    /// Multiplier on the shared phase
    pub speed: f32,
    pub color: Rgba,
}

pub const WAVES: [Wave; 3] = [
    Wave {
        length: 0.01,
        amplitude: 50.0,
        speed: 0.01,
        color: Rgba::new(56, 189, 248, 0.1),
    },
    Wave {
        length: 0.02,
        amplitude: 30.0,
        speed: 0.02,
        color: Rgba::new(16, 185, 129, 0.1),
    },
    Wave {
        length: 0.03,
        amplitude: 20.0,
        speed: 0.04,
        color: Rgba::new(251, 191, 36, 0.1),
    },
];

const STROKE_WIDTH: f32 = 2.0;

/// Three waves sharing a single phase accumulator
#[derive(Clone, Debug, Default)]
pub struct SineWaves {
    phase: f32,
}

impl SineWaves {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Vertical position of `wave` at column `x` for the current phase
    pub fn sample(&self, wave: &Wave, x: f32, center_y: f32) -> f32 {
        center_y + (x * wave.length + self.phase * wave.speed).sin() * wave.amplitude
    }
}

impl RenderRoutine for SineWaves {
    fn kind(&self) -> BackgroundType {
        BackgroundType::Sine
    }

    fn update(&mut self, dt: f32, _bounds: Size) {
        self.phase += dt;
    }

    fn draw(&self, surface: &mut dyn Surface) {
        let size = surface.size();
        surface.clear();

        let center_y = size.height / 2.0;
        let columns = size.width.max(0.0) as usize;
        let mut points = Vec::with_capacity(columns);
        for wave in &WAVES {
            points.clear();
            points.extend((0..columns).map(|i| {
                let x = i as f32;
                Vec2::new(x, self.sample(wave, x, center_y))
            }));
            surface.stroke_polyline(&points, wave.color, STROKE_WIDTH);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{DrawCall, RecordingSurface};

    #[test]
    fn test_draws_three_full_width_strokes() {
        let mut surface = RecordingSurface::new(Size::new(320.0, 200.0));
        let waves = SineWaves::new();
        waves.draw(&mut surface);

        let calls = surface.calls();
        assert_eq!(calls[0], DrawCall::Clear);
        let strokes: Vec<_> = calls
            .iter()
            .filter_map(|c| match c {
                DrawCall::StrokePolyline { points, width, .. } => Some((points.len(), *width)),
                _ => None,
            })
            .collect();
        assert_eq!(strokes, vec![(320, 2.0); 3]);
    }

    #[test]
    fn test_waves_centered_at_phase_zero() {
        let waves = SineWaves::new();
        for wave in &WAVES {
            assert!((waves.sample(wave, 0.0, 100.0) - 100.0).abs() < 0.001);
        }
    }

    #[test]
    fn test_phase_shared_and_scaled_per_wave() {
        let mut waves = SineWaves::new();
        for _ in 0..10 {
            waves.update(1.0, Size::new(100.0, 100.0));
        }
        assert!((waves.phase() - 10.0).abs() < 0.001);

        let expected = (10.0_f32 * WAVES[2].speed).sin() * WAVES[2].amplitude;
        assert!((waves.sample(&WAVES[2], 0.0, 0.0) - expected).abs() < 0.001);
    }

    #[test]
    fn test_wave_stays_within_amplitude() {
        let mut waves = SineWaves::new();
        waves.update(37.0, Size::ZERO);
        for wave in &WAVES {
            for x in 0..500 {
                let y = waves.sample(wave, x as f32, 300.0);
                assert!((y - 300.0).abs() <= wave.amplitude + 0.001);
            }
        }
    }
}
