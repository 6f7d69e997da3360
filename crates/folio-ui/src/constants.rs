//! Centralized constants for the portfolio components
//!
//! Timings, thresholds and counts that shape the page behaviour live here so
//! they can be audited in one place. Most of them are defaults for
//! [`PageConfig`](crate::config::PageConfig) and can be overridden per page.

// =============================================================================
// Carousel
// =============================================================================

/// Period of the autoplay interval
pub const AUTOPLAY_INTERVAL_MS: u32 = 4000;

/// Grace delay between a touch ending and autoplay resuming
pub const TOUCH_RESUME_DELAY_MS: u32 = 2000;

// =============================================================================
// Scroll reveal
// =============================================================================

/// Elements are revealed this many pixels before their top edge reaches the
/// bottom of the viewport
pub const REVEAL_OFFSET_PX: f32 = 50.0;

// =============================================================================
// Modal
// =============================================================================

/// `KeyboardEvent.key` value that closes the modal
pub const CANCEL_KEY: &str = "Escape";

// =============================================================================
// Frame timing
// =============================================================================

/// Reference frame duration (60 Hz) used to normalise measured deltas
pub const REFERENCE_FRAME_MS: f64 = 1000.0 / 60.0;

/// Upper bound on a measured frame delta, in reference frames.
/// A tab returning from the background would otherwise jump the animation.
pub const MAX_FRAME_STEPS: f32 = 3.0;

// =============================================================================
// Background routines
// =============================================================================

/// Surface area covered by one constellation particle (px²)
pub const CONSTELLATION_AREA_PER_PARTICLE: f32 = 15_000.0;

/// Constellation particles closer than this are linked
pub const CONSTELLATION_LINK_DISTANCE: f32 = 100.0;

/// Number of bokeh bubbles
pub const BOKEH_BUBBLE_COUNT: usize = 40;
