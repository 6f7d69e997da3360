//! Network of drifting points joined by proximity lines
//!
//! Link detection is a plain pairwise scan, O(n²) per frame. The particle
//! count is tied to the surface area (one per 15 000 px²), which keeps n in
//! the tens to low hundreds for real viewports.

use rand::Rng;

use super::routine::RenderRoutine;
use super::types::BackgroundType;
use crate::constants::{CONSTELLATION_AREA_PER_PARTICLE, CONSTELLATION_LINK_DISTANCE};
use crate::math::{Rgba, Size, Vec2};
use crate::surface::Surface;

pub const PARTICLE_COLOR: Rgba = Rgba::new(52, 211, 153, 0.3);
const LINK_COLOR: Rgba = Rgba::new(52, 211, 153, 0.1);
const LINK_WIDTH: f32 = 1.0;

/// A drifting point
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
}

impl Particle {
    fn random<R: Rng + ?Sized>(bounds: Size, rng: &mut R) -> Self {
        Self {
            position: Vec2::new(
                rng.gen::<f32>() * bounds.width,
                rng.gen::<f32>() * bounds.height,
            ),
            velocity: Vec2::new(
                (rng.gen::<f32>() - 0.5) * 0.5,
                (rng.gen::<f32>() - 0.5) * 0.5,
            ),
            radius: rng.gen::<f32>() * 2.0,
        }
    }

    /// Move one step, turning back on any axis where it is outside the bounds
    /// and still heading away.
    ///
    /// A particle stranded outside by a shrinking resize turns once and then
    /// drifts back in rather than flipping every frame at the edge.
    fn step(&mut self, dt: f32, bounds: Size) {
        self.position += self.velocity * dt;
        if (self.position.x < 0.0 && self.velocity.x < 0.0)
            || (self.position.x > bounds.width && self.velocity.x > 0.0)
        {
            self.velocity.x = -self.velocity.x;
        }
        if (self.position.y < 0.0 && self.velocity.y < 0.0)
            || (self.position.y > bounds.height && self.velocity.y > 0.0)
        {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Number of particles for a surface
pub fn particle_count(bounds: Size) -> usize {
    if bounds.is_empty() {
        return 0;
    }
    (bounds.area() / CONSTELLATION_AREA_PER_PARTICLE).ceil() as usize
}

/// Link opacity for two points `distance` apart, or `None` if too far
pub fn link_alpha(distance: f32) -> Option<f32> {
    (distance < CONSTELLATION_LINK_DISTANCE).then(|| 0.1 - distance / 1000.0)
}

#[derive(Clone, Debug)]
pub struct Constellation {
    particles: Vec<Particle>,
}

impl Constellation {
    /// Scatter particles over `bounds`
    pub fn new<R: Rng + ?Sized>(bounds: Size, rng: &mut R) -> Self {
        let particles = (0..particle_count(bounds))
            .map(|_| Particle::random(bounds, rng))
            .collect();
        Self { particles }
    }

    /// Use a fixed particle set
    pub fn with_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Visit every unordered pair close enough to link
    pub fn for_each_link<F>(&self, mut f: F)
    where
        F: FnMut(&Particle, &Particle, f32),
    {
        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                if let Some(alpha) = link_alpha(a.position.distance(b.position)) {
                    f(a, b, alpha);
                }
            }
        }
    }
}

impl RenderRoutine for Constellation {
    fn kind(&self) -> BackgroundType {
        BackgroundType::Constellation
    }

    fn update(&mut self, dt: f32, bounds: Size) {
        for particle in &mut self.particles {
            particle.step(dt, bounds);
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        surface.clear();
        for particle in &self.particles {
            surface.fill_circle(particle.position, particle.radius, PARTICLE_COLOR, None);
        }
        self.for_each_link(|a, b, alpha| {
            surface.stroke_line(a.position, b.position, LINK_COLOR.with_alpha(alpha), LINK_WIDTH);
        });
    }
}
