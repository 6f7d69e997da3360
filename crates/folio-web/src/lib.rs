//! Browser bindings for the Folio portfolio site
//!
//! Binds the headless components in `folio-ui` to the page DOM:
//! - [`modal`]: overlay image viewer
//! - [`nav`]: mobile menu toggle
//! - [`reveal`]: scroll-triggered reveals
//! - [`carousel`]: slide track with browser timers
//! - [`background`]: canvas background and its frame loop
//!
//! Everything is reached through the exported [`Portfolio`] handle:
//!
//! ```js
//! import init, { Portfolio } from "./pkg/folio_web.js";
//!
//! await init();
//! const portfolio = new Portfolio();
//! window.openModal = (el) => portfolio.openModal(el);
//! window.closeModal = () => portfolio.closeModal();
//! ```

use wasm_bindgen::prelude::*;
use web_sys::Element;

use folio_ui::{BackgroundType, PageConfig};

pub mod background;
pub mod carousel;
pub mod dom;
pub mod error;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod util;

use background::MountedBackground;
use carousel::MountedCarousel;
use dom::Page;
use error::MountError;
use modal::MountedModal;
use nav::MountedNav;
use reveal::MountedReveal;
use util::log;

/// Install the panic hook so Rust panics show up in the browser console
fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Parse the optional page config, falling back to defaults on bad input
fn load_config(json: Option<String>) -> PageConfig {
    let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(&json).map_err(MountError::from) {
        Ok(config) => config,
        Err(e) => {
            log(&format!("[portfolio] {}; using defaults", e));
            PageConfig::default()
        }
    }
}

/// Log a mount outcome and keep the component if it mounted
fn mounted<T>(name: &str, result: Result<Option<T>, MountError>) -> Option<T> {
    match result {
        Ok(Some(component)) => Some(component),
        Ok(None) => None,
        Err(e) => {
            log(&format!("[portfolio] Failed to mount {}: {}", name, e));
            None
        }
    }
}

/// The page's mounted components
///
/// Each component mounts independently; a missing element only skips that
/// component. Dropping or disposing the handle removes every listener, timer,
/// frame callback and the background canvas.
#[wasm_bindgen]
pub struct Portfolio {
    modal: Option<MountedModal>,
    nav: Option<MountedNav>,
    reveal: Option<MountedReveal>,
    carousel: Option<MountedCarousel>,
    background: Option<MountedBackground>,
}

#[wasm_bindgen]
impl Portfolio {
    /// Mount every component found on the current page
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<Portfolio, JsValue> {
        set_panic_hook();

        let page = Page::current(load_config(config_json))?;
        let portfolio = Self {
            modal: mounted("modal", modal::mount(&page)),
            nav: mounted("nav", nav::mount(&page)),
            reveal: mounted("reveal", reveal::mount(&page)),
            carousel: mounted("carousel", carousel::mount(&page)),
            background: mounted("background", background::mount(&page)),
        };

        log(&format!(
            "[portfolio] Ready: {}",
            portfolio.component_ids().join(", ")
        ));
        Ok(portfolio)
    }

    /// Show `element`'s image in the modal
    #[wasm_bindgen(js_name = openModal)]
    pub fn open_modal(&self, element: &Element) {
        if let Some(modal) = &self.modal {
            modal.open(element);
        }
    }

    #[wasm_bindgen(js_name = closeModal)]
    pub fn close_modal(&self) {
        if let Some(modal) = &self.modal {
            modal.close();
        }
    }

    /// Mounted component ids as a JSON array
    #[wasm_bindgen(js_name = mountedComponents)]
    pub fn mounted_components(&self) -> String {
        serde_json::to_string(&self.component_ids()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Id of the running background, `"none"` if there is none
    #[wasm_bindgen(js_name = backgroundType)]
    pub fn background_type(&self) -> String {
        self.background
            .as_ref()
            .map_or(BackgroundType::None, |bg| bg.kind())
            .id()
            .to_string()
    }

    /// Unmount everything
    pub fn dispose(&mut self) {
        self.modal = None;
        self.nav = None;
        self.reveal = None;
        self.carousel = None;
        self.background = None;
        log("[portfolio] Disposed");
    }
}

impl Portfolio {
    fn component_ids(&self) -> Vec<&'static str> {
        [
            ("modal", self.modal.is_some()),
            ("nav", self.nav.is_some()),
            ("reveal", self.reveal.is_some()),
            ("carousel", self.carousel.is_some()),
            ("background", self.background.is_some()),
        ]
        .into_iter()
        .filter_map(|(id, on)| on.then_some(id))
        .collect()
    }

    pub fn modal(&self) -> Option<&MountedModal> {
        self.modal.as_ref()
    }

    pub fn reveal(&self) -> Option<&MountedReveal> {
        self.reveal.as_ref()
    }

    pub fn carousel(&self) -> Option<&MountedCarousel> {
        self.carousel.as_ref()
    }

    pub fn background(&self) -> Option<&MountedBackground> {
        self.background.as_ref()
    }
}
