//! Mobile navigation toggle bound to the header markup

use std::cell::RefCell;
use std::rc::Rc;

use web_sys::Element;

use folio_ui::config::Selectors;
use folio_ui::{NavMenu, NavState};

use crate::dom::{self, Listener, Page};
use crate::error::MountError;
use crate::util::log;

struct NavView {
    menu: NavMenu,
    panel: Element,
    /// Missing icons are tolerated; the panel still toggles
    icon: Option<Element>,
    selectors: Selectors,
}

impl NavView {
    fn apply(&self, state: NavState) {
        dom::set_class(&self.panel, &self.selectors.nav_open_class, state.open);
        if let Some(icon) = &self.icon {
            dom::set_class(icon, self.selectors.icon_class(state.icon.other()), false);
            dom::set_class(icon, self.selectors.icon_class(state.icon), true);
        }
    }

    fn toggle(&mut self) {
        let state = self.menu.toggle();
        self.apply(state);
    }

    fn link_selected(&mut self) {
        if let Some(state) = self.menu.link_selected() {
            self.apply(state);
        }
    }
}

pub struct MountedNav {
    _listeners: Vec<Listener>,
}

pub fn mount(page: &Page) -> Result<Option<MountedNav>, MountError> {
    let selectors = &page.config.selectors;
    let (Some(toggle), Some(panel)) = (
        page.query(&selectors.menu_toggle)?,
        page.query(&selectors.nav_links)?,
    ) else {
        return Ok(None);
    };
    let icon = toggle.query_selector(&selectors.nav_icon)?;
    let links = page.query_all(&selectors.nav_link_items)?;

    let initially_open = panel.class_list().contains(&selectors.nav_open_class);
    let view = Rc::new(RefCell::new(NavView {
        menu: NavMenu::new(initially_open),
        panel,
        icon,
        selectors: selectors.clone(),
    }));

    let mut listeners = Vec::with_capacity(links.len() + 1);

    let toggler = Rc::clone(&view);
    listeners.push(Listener::new(&toggle, "click", move |_| {
        if let Ok(mut view) = toggler.try_borrow_mut() {
            view.toggle();
        }
    })?);

    for link in &links {
        let closer = Rc::clone(&view);
        listeners.push(Listener::new(link, "click", move |_| {
            if let Ok(mut view) = closer.try_borrow_mut() {
                view.link_selected();
            }
        })?);
    }

    log(&format!("[nav] Mounted with {} links", links.len()));
    Ok(Some(MountedNav {
        _listeners: listeners,
    }))
}
