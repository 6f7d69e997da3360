//! Scroll-triggered reveal of tagged elements

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::{Element, Window};

use folio_ui::ScrollReveal;

use crate::dom::{self, Listener, Page};
use crate::error::MountError;
use crate::util::{log, viewport_height};

struct RevealView {
    reveal: ScrollReveal,
    elements: Vec<Element>,
    revealed_class: String,
    window: Window,
}

impl RevealView {
    fn check(&mut self) {
        if self.reveal.all_revealed() {
            return;
        }
        let height = viewport_height(&self.window);
        let elements = &self.elements;
        let newly = self
            .reveal
            .check(height, |i| elements[i].get_bounding_client_rect().top() as f32);
        for index in newly {
            dom::set_class(&self.elements[index], &self.revealed_class, true);
        }
    }
}

pub struct MountedReveal {
    view: Rc<RefCell<RevealView>>,
    _scroll: Listener,
}

impl MountedReveal {
    pub fn revealed_count(&self) -> usize {
        self.view.borrow().reveal.revealed_count()
    }
}

pub fn mount(page: &Page) -> Result<Option<MountedReveal>, MountError> {
    let elements = page.query_all(&page.config.selectors.scroll_element)?;
    if elements.is_empty() {
        return Ok(None);
    }

    let view = Rc::new(RefCell::new(RevealView {
        reveal: ScrollReveal::new(elements.len(), page.config.reveal.offset_px),
        elements,
        revealed_class: page.config.selectors.revealed_class.clone(),
        window: page.window.clone(),
    }));

    let scroller = Rc::clone(&view);
    let scroll = Listener::new(&page.window, "scroll", move |_| {
        if let Ok(mut view) = scroller.try_borrow_mut() {
            view.check();
        }
    })?;

    // Elements already on screen at load
    view.borrow_mut().check();

    log(&format!(
        "[reveal] Mounted with {} elements",
        view.borrow().reveal.len()
    ));
    Ok(Some(MountedReveal {
        view,
        _scroll: scroll,
    }))
}
