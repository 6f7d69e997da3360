//! Interactive layer for a static portfolio site
//!
//! This crate holds every piece of page behaviour that does not need a browser:
//! - Modal image viewer state
//! - Mobile navigation toggle
//! - Scroll-triggered reveals
//! - Looping carousel with autoplay and pause-on-interaction
//! - Animated canvas backgrounds selected by page context
//!
//! ## Architecture
//!
//! - [`math`]: Geometry and colour (`Vec2`, `Size`, `Rgba`)
//! - [`modal`], [`nav`], [`reveal`], [`carousel`]: Component state machines
//! - [`background`]: Render routines and the frame-driven animator
//! - [`surface`], [`clock`], [`timers`]: Host capabilities the components draw,
//!   time and schedule through
//! - `testing`: Headless implementations of those capabilities, behind the
//!   `testing` feature
//! - [`config`]: Page configuration parsed from JSON
//!
//! ## Example
//!
//! ```rust
//! use folio_ui::config::CarouselConfig;
//! use folio_ui::{Carousel, TimerAction, TimerHandle, Timers};
//!
//! /// Host without timers: autoplay never starts
//! struct NoTimers;
//!
//! impl Timers for NoTimers {
//!     fn set_interval(&mut self, _: u32, _: TimerAction) -> Option<TimerHandle> {
//!         None
//!     }
//!     fn set_timeout(&mut self, _: u32, _: TimerAction) -> Option<TimerHandle> {
//!         None
//!     }
//!     fn clear(&mut self, _: TimerHandle) {}
//! }
//!
//! let mut carousel = Carousel::new(3, None, 640.0, &CarouselConfig::default(), NoTimers)
//!     .expect("has slides");
//! assert!(!carousel.start_autoplay());
//!
//! let change = carousel.advance();
//! assert_eq!(change.to, 1);
//! assert_eq!(change.track_transform(), "translateX(-640px)");
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state lives here and is testable without a browser
//! 2. **Injected Capabilities**: Drawing, time and timers come in through traits
//! 3. **Absence Is Not An Error**: Missing markup means a component is simply not built

pub mod background;
pub mod carousel;
pub mod clock;
pub mod config;
pub mod constants;
pub mod math;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod surface;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod timers;

// Re-export core types for convenience
pub use background::{BackgroundAnimator, BackgroundType, RenderRoutine};
pub use carousel::{Carousel, Slide, SlideChange};
pub use clock::{Clock, FrameClock, FrameTick, FrameTiming};
pub use config::PageConfig;
pub use math::{Rgba, Size, Vec2};
pub use modal::{BodyOverflow, ImageSource, ModalView, ModalViewer};
pub use nav::{NavIcon, NavMenu, NavState};
pub use reveal::ScrollReveal;
pub use surface::{Glow, Surface};
pub use timers::{TimerAction, TimerHandle, Timers};
