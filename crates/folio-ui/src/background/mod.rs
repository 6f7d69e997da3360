//! Decorative canvas backgrounds
//!
//! The page's `body` class picks one routine; everything after that is a
//! per-frame update and draw against a [`Surface`](crate::surface::Surface).
//!
//! ## Available Backgrounds
//!
//! - **Sine**: three slow waves across the vertical centre
//! - **Oscillator**: a glowing Lissajous trace fading behind itself
//! - **Constellation**: drifting points linked when close
//! - **Bokeh**: soft bubbles rising and recycling forever

mod animator;
mod bokeh;
mod constellation;
mod oscillator;
mod routine;
mod sine;
mod types;

pub use animator::BackgroundAnimator;
pub use bokeh::{Bokeh, Bubble};
pub use constellation::{link_alpha, particle_count, Constellation, Particle};
pub use oscillator::Oscillator;
pub use routine::{create_routine, RenderRoutine};
pub use sine::{SineWaves, Wave, WAVES};
pub use types::BackgroundType;
