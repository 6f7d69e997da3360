//! Geometry and colour types shared by the components and render routines

mod color;
mod size;
mod vec2;

pub use color::Rgba;
pub use size::Size;
pub use vec2::Vec2;
