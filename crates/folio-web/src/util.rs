//! Console logging and viewport helpers shared by the components

use wasm_bindgen::prelude::*;
use web_sys::Window;

use folio_ui::Size;

#[wasm_bindgen]
extern "C" {
    /// Console.log binding for WASM
    #[wasm_bindgen(js_namespace = console)]
    pub fn log(s: &str);
}

/// Current viewport size in CSS pixels
pub fn viewport_size(window: &Window) -> Size {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Size::new(width as f32, viewport_height(window))
}

/// Viewport height, falling back to the root element's client height
pub fn viewport_height(window: &Window) -> f32 {
    if let Some(height) = window.inner_height().ok().and_then(|v| v.as_f64()) {
        return height as f32;
    }
    window
        .document()
        .and_then(|d| d.document_element())
        .map(|root| root.client_height() as f32)
        .unwrap_or(0.0)
}
