//! Drawing capability used by the background render routines
//!
//! Routines never touch a canvas directly. They draw through [`Surface`], which
//! the browser layer implements on top of `CanvasRenderingContext2d` and tests
//! implement with [`RecordingSurface`](crate::testing::RecordingSurface).

use crate::math::{Rgba, Size, Vec2};

/// Soft halo drawn around a filled shape (canvas `shadowBlur`/`shadowColor`)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glow {
    pub blur: f32,
    pub color: Rgba,
}

/// Immediate-mode 2D drawing primitives
pub trait Surface {
    /// Current drawing-surface dimensions
    fn size(&self) -> Size;

    /// Clear every pixel to transparent
    fn clear(&mut self);

    /// Fill an axis-aligned rectangle
    fn fill_rect(&mut self, origin: Vec2, size: Size, color: Rgba);

    /// Fill a circle, optionally with a glow. The glow must not leak into
    /// later draw calls.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>);

    /// Stroke a single segment
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32);

    /// Stroke an open path through `points`
    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32);
}
