//! Render routine interface and construction by background type

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::bokeh::Bokeh;
use super::constellation::Constellation;
use super::oscillator::Oscillator;
use super::sine::SineWaves;
use super::types::BackgroundType;
use crate::math::Size;
use crate::surface::Surface;

/// A self-contained per-frame animation
///
/// The frame loop calls `update` then `draw` once per display refresh.
pub trait RenderRoutine {
    fn kind(&self) -> BackgroundType;

    /// Advance the animation by `dt` reference frames within `bounds`
    fn update(&mut self, dt: f32, bounds: Size);

    /// Paint the current state
    fn draw(&self, surface: &mut dyn Surface);
}

/// Build the routine for `kind`, or `None` for [`BackgroundType::None`]
pub fn create_routine(
    kind: BackgroundType,
    bounds: Size,
    rng: &mut SmallRng,
) -> Option<Box<dyn RenderRoutine>> {
    let routine: Box<dyn RenderRoutine> = match kind {
        BackgroundType::Sine => Box::new(SineWaves::new()),
        BackgroundType::Oscillator => Box::new(Oscillator::new()),
        BackgroundType::Constellation => Box::new(Constellation::new(bounds, rng)),
        BackgroundType::Bokeh => Box::new(Bokeh::new(bounds, SmallRng::seed_from_u64(rng.gen()))),
        BackgroundType::None => return None,
    };
    Some(routine)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_matches_kind() {
        let mut rng = SmallRng::seed_from_u64(7);
        let bounds = Size::new(1280.0, 720.0);
        for kind in BackgroundType::all() {
            let routine = create_routine(*kind, bounds, &mut rng).unwrap();
            assert_eq!(routine.kind(), *kind);
        }
    }

    #[test]
    fn test_none_builds_nothing() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert!(create_routine(BackgroundType::None, Size::new(800.0, 600.0), &mut rng).is_none());
    }
}
