//! Page configuration
//!
//! Every selector, class name and timing the components rely on. Pages that
//! follow the default markup need no configuration at all; others pass a JSON
//! object with only the fields they want to change:
//!
//! ```rust
//! use folio_ui::config::PageConfig;
//!
//! let config = PageConfig::from_json(r#"{ "carousel": { "autoplayIntervalMs": 6000 } }"#).unwrap();
//! assert_eq!(config.carousel.autoplay_interval_ms, 6000);
//! assert_eq!(config.selectors.carousel_track, ".carousel-track");
//! ```

use serde::{Deserialize, Serialize};

use crate::background::BackgroundType;
use crate::clock::FrameTiming;
use crate::constants::{AUTOPLAY_INTERVAL_MS, REVEAL_OFFSET_PX, TOUCH_RESUME_DELAY_MS};
use crate::nav::NavIcon;

/// Complete configuration for one page view
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub selectors: Selectors,
    pub carousel: CarouselConfig,
    pub reveal: RevealConfig,
    pub background: BackgroundConfig,
}

impl PageConfig {
    /// Parse a (possibly partial) JSON configuration
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Markup contract: how each component finds its elements
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    // Modal
    pub modal_id: String,
    pub modal_image_id: String,
    pub modal_caption_id: String,
    /// Close control, queried inside the modal
    pub modal_close: String,
    pub caption_attribute: String,

    // Navigation
    pub menu_toggle: String,
    pub nav_links: String,
    pub nav_link_items: String,
    /// Icon element, queried inside the menu toggle
    pub nav_icon: String,
    pub nav_open_class: String,
    pub icon_menu_class: String,
    pub icon_close_class: String,

    // Scroll reveal
    pub scroll_element: String,
    pub revealed_class: String,

    // Carousel
    pub carousel_track: String,
    pub carousel_next: String,
    pub carousel_prev: String,
    pub carousel_container: String,
    pub current_slide_class: String,

    // Background
    pub canvas_id: String,
}

impl Selectors {
    /// Icon class for a navigation icon state
    pub fn icon_class(&self, icon: NavIcon) -> &str {
        match icon {
            NavIcon::Menu => &self.icon_menu_class,
            NavIcon::Close => &self.icon_close_class,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            modal_id: "imageModal".to_string(),
            modal_image_id: "img01".to_string(),
            modal_caption_id: "caption".to_string(),
            modal_close: ".close".to_string(),
            caption_attribute: "data-caption".to_string(),
            menu_toggle: ".menu-toggle".to_string(),
            nav_links: ".nav-links".to_string(),
            nav_link_items: ".nav-links a".to_string(),
            nav_icon: "i".to_string(),
            nav_open_class: "active".to_string(),
            icon_menu_class: "fa-bars".to_string(),
            icon_close_class: "fa-times".to_string(),
            scroll_element: ".scroll-element".to_string(),
            revealed_class: "scrolled".to_string(),
            carousel_track: ".carousel-track".to_string(),
            carousel_next: ".next-btn".to_string(),
            carousel_prev: ".prev-btn".to_string(),
            carousel_container: ".carousel-container".to_string(),
            current_slide_class: "current-slide".to_string(),
            canvas_id: "particles-canvas".to_string(),
        }
    }
}

/// Carousel timings
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CarouselConfig {
    /// Start autoplay when the carousel mounts
    pub autoplay: bool,
    pub autoplay_interval_ms: u32,
    pub touch_resume_delay_ms: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay: true,
            autoplay_interval_ms: AUTOPLAY_INTERVAL_MS,
            touch_resume_delay_ms: TOUCH_RESUME_DELAY_MS,
        }
    }
}

/// Scroll reveal threshold
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub offset_px: f32,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            offset_px: REVEAL_OFFSET_PX,
        }
    }
}

/// Background selection and frame timing
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BackgroundConfig {
    /// Use this routine regardless of the page's body markers
    pub force_type: Option<BackgroundType>,
    pub frame_timing: FrameTiming,
}
