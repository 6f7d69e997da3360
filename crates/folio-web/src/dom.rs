//! DOM access for the mounted components
//!
//! [`Page`] bundles the handles every component needs. [`Listener`] keeps an
//! event callback alive and unregisters it when dropped, so dropping a mounted
//! component leaves nothing attached to the page.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use folio_ui::PageConfig;

use crate::error::MountError;

/// Host handles and configuration for one page view
pub struct Page {
    pub window: Window,
    pub document: Document,
    pub body: HtmlElement,
    pub config: PageConfig,
}

impl Page {
    pub fn current(config: PageConfig) -> Result<Self, MountError> {
        let window = web_sys::window().ok_or(MountError::NoWindow)?;
        let document = window.document().ok_or(MountError::NoDocument)?;
        let body = document.body().ok_or(MountError::NoBody)?;
        Ok(Self {
            window,
            document,
            body,
            config,
        })
    }

    /// First element matching `selector`, if any
    pub fn query(&self, selector: &str) -> Result<Option<Element>, MountError> {
        Ok(self.document.query_selector(selector)?)
    }

    /// Every element matching `selector`, in document order
    pub fn query_all(&self, selector: &str) -> Result<Vec<Element>, MountError> {
        let list = self.document.query_selector_all(selector)?;
        Ok((0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    pub fn by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }
}

/// Element children of `parent`
pub fn children(parent: &Element) -> Vec<Element> {
    let list = parent.children();
    (0..list.length()).filter_map(|i| list.item(i)).collect()
}

/// Downcast to `HtmlElement` for style access
pub fn html(element: Element) -> Result<HtmlElement, MountError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|el| MountError::Js(format!("<{}> is not an HTML element", el.tag_name())))
}

/// Set one inline style property
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        crate::util::log(&format!("[dom] Failed to set {}: {:?}", property, e));
    }
}

/// Add or remove a class
pub fn set_class(element: &Element, class: &str, on: bool) {
    let result = if on {
        element.class_list().add_1(class)
    } else {
        element.class_list().remove_1(class)
    };
    if let Err(e) = result {
        crate::util::log(&format!("[dom] Failed to update class {}: {:?}", class, e));
    }
}

/// A registered event callback, removed from its target on drop
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, MountError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
