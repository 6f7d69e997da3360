//! Modal image viewer bound to the page overlay

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent};

use folio_ui::constants::CANCEL_KEY;
use folio_ui::{BodyOverflow, ImageSource, ModalViewer};

use crate::dom::{self, Listener, Page};
use crate::error::MountError;
use crate::util::log;

struct ModalView {
    viewer: ModalViewer,
    overlay: HtmlElement,
    image: HtmlImageElement,
    caption: Element,
    body: HtmlElement,
    caption_attribute: String,
}

impl ModalView {
    fn open(&mut self, element: &Element) {
        let source = image_source(element, &self.caption_attribute);
        let view = self.viewer.open(&source);
        dom::set_style(&self.overlay, "display", "block");
        self.image.set_src(&view.image_src);
        self.caption.set_inner_html(&view.caption);
        dom::set_style(&self.body, "overflow", BodyOverflow::Hidden.css());
    }

    fn close(&mut self) {
        let overflow = self.viewer.close();
        dom::set_style(&self.overlay, "display", "none");
        dom::set_style(&self.body, "overflow", overflow.css());
    }

    /// Cancel key closes from any state
    fn key(&mut self, key: &str) {
        if key == CANCEL_KEY {
            self.close();
        }
    }
}

/// Read what the clicked element offers the viewer
fn image_source(element: &Element, caption_attribute: &str) -> ImageSource {
    let src = match element.dyn_ref::<HtmlImageElement>() {
        Some(img) => img.src(),
        None => element.get_attribute("src").unwrap_or_default(),
    };
    ImageSource {
        src,
        caption: element.get_attribute(caption_attribute),
        alt: element.get_attribute("alt").unwrap_or_default(),
    }
}

pub struct MountedModal {
    view: Rc<RefCell<ModalView>>,
    _listeners: Vec<Listener>,
}

impl MountedModal {
    pub fn open(&self, element: &Element) {
        if let Ok(mut view) = self.view.try_borrow_mut() {
            view.open(element);
        }
    }

    pub fn close(&self) {
        if let Ok(mut view) = self.view.try_borrow_mut() {
            view.close();
        }
    }

    pub fn is_open(&self) -> bool {
        self.view.borrow().viewer.is_open()
    }
}

pub fn mount(page: &Page) -> Result<Option<MountedModal>, MountError> {
    let selectors = &page.config.selectors;
    let (Some(overlay), Some(image), Some(caption)) = (
        page.by_id(&selectors.modal_id),
        page.by_id(&selectors.modal_image_id),
        page.by_id(&selectors.modal_caption_id),
    ) else {
        return Ok(None);
    };
    let image = image
        .dyn_into::<HtmlImageElement>()
        .map_err(|_| MountError::Js(format!("#{} is not an <img>", selectors.modal_image_id)))?;
    let close_control = overlay.query_selector(&selectors.modal_close)?;
    let overlay = dom::html(overlay)?;

    let view = Rc::new(RefCell::new(ModalView {
        viewer: ModalViewer::new(),
        overlay: overlay.clone(),
        image,
        caption,
        body: page.body.clone(),
        caption_attribute: selectors.caption_attribute.clone(),
    }));

    let mut listeners = Vec::with_capacity(3);

    let keys = Rc::clone(&view);
    listeners.push(Listener::new(&page.document, "keydown", move |event: Event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            if let Ok(mut view) = keys.try_borrow_mut() {
                view.key(&key_event.key());
            }
        }
    })?);

    // Only clicks on the backdrop itself, not on the image or caption
    let backdrop = Rc::clone(&view);
    let overlay_target: Element = overlay.clone().into();
    listeners.push(Listener::new(&overlay, "click", move |event: Event| {
        let on_backdrop = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .is_some_and(|t| t == overlay_target);
        if on_backdrop {
            if let Ok(mut view) = backdrop.try_borrow_mut() {
                view.close();
            }
        }
    })?);

    if let Some(control) = close_control {
        let closer = Rc::clone(&view);
        listeners.push(Listener::new(&control, "click", move |_| {
            if let Ok(mut view) = closer.try_borrow_mut() {
                view.close();
            }
        })?);
    }

    log("[modal] Mounted");
    Ok(Some(MountedModal {
        view,
        _listeners: listeners,
    }))
}
