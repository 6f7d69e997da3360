//! Carousel bound to the track markup
//!
//! [`BrowserTimers`] backs the carousel's autoplay with `setInterval` /
//! `setTimeout`. A fired timer reaches the carousel through a weak reference,
//! so pending timers never keep a disposed carousel alive.

use std::cell::{Cell, OnceCell, RefCell};
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, HtmlElement, Window};

use folio_ui::{Carousel, SlideChange, TimerAction, TimerHandle, Timers};

use crate::dom::{self, Listener, Page};
use crate::error::MountError;
use crate::util::log;

type Target = Rc<OnceCell<Weak<RefCell<CarouselView>>>>;

// =============================================================================
// Timers
// =============================================================================

struct Scheduled {
    _callback: Closure<dyn FnMut()>,
    /// Set once a one-shot timer has run; the entry can then be dropped
    fired: Option<Rc<Cell<bool>>>,
}

/// Host timers dispatching back into the mounted carousel
pub struct BrowserTimers {
    window: Window,
    target: Target,
    scheduled: HashMap<TimerHandle, Scheduled>,
}

impl BrowserTimers {
    fn new(window: Window, target: Target) -> Self {
        Self {
            window,
            target,
            scheduled: HashMap::new(),
        }
    }

    fn callback(&self, action: TimerAction, fired: Option<Rc<Cell<bool>>>) -> Closure<dyn FnMut()> {
        let target = Rc::clone(&self.target);
        Closure::wrap(Box::new(move || {
            if let Some(view) = target.get().and_then(Weak::upgrade) {
                if let Ok(mut view) = view.try_borrow_mut() {
                    view.on_timer(action);
                }
            }
            if let Some(flag) = &fired {
                flag.set(true);
            }
        }) as Box<dyn FnMut()>)
    }

    /// Drop closures of timeouts that already ran
    fn sweep(&mut self) {
        self.scheduled
            .retain(|_, s| !s.fired.as_ref().is_some_and(|f| f.get()));
    }
}

impl Timers for BrowserTimers {
    fn set_interval(&mut self, period_ms: u32, action: TimerAction) -> Option<TimerHandle> {
        self.sweep();
        let callback = self.callback(action, None);
        let id = self
            .window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                period_ms as i32,
            )
            .map_err(|e| log(&format!("[carousel] setInterval failed: {:?}", e)))
            .ok()?;
        let handle = TimerHandle(id);
        self.scheduled.insert(
            handle,
            Scheduled {
                _callback: callback,
                fired: None,
            },
        );
        Some(handle)
    }

    fn set_timeout(&mut self, delay_ms: u32, action: TimerAction) -> Option<TimerHandle> {
        self.sweep();
        let fired = Rc::new(Cell::new(false));
        let callback = self.callback(action, Some(Rc::clone(&fired)));
        let id = self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms as i32,
            )
            .map_err(|e| log(&format!("[carousel] setTimeout failed: {:?}", e)))
            .ok()?;
        let handle = TimerHandle(id);
        self.scheduled.insert(
            handle,
            Scheduled {
                _callback: callback,
                fired: Some(fired),
            },
        );
        Some(handle)
    }

    fn clear(&mut self, handle: TimerHandle) {
        if let Some(scheduled) = self.scheduled.remove(&handle) {
            // Interval and timeout ids share one pool
            if scheduled.fired.is_some() {
                self.window.clear_timeout_with_handle(handle.0);
            } else {
                self.window.clear_interval_with_handle(handle.0);
            }
        }
    }
}

impl Drop for BrowserTimers {
    fn drop(&mut self) {
        let handles: Vec<TimerHandle> = self.scheduled.keys().copied().collect();
        for handle in handles {
            self.clear(handle);
        }
    }
}

// =============================================================================
// View
// =============================================================================

struct CarouselView {
    carousel: Carousel<BrowserTimers>,
    track: HtmlElement,
    slides: Vec<HtmlElement>,
    current_class: String,
}

impl CarouselView {
    fn show(&self, change: SlideChange) {
        dom::set_style(&self.track, "transform", &change.track_transform());
        if let Some(from) = self.slides.get(change.from) {
            dom::set_class(from, &self.current_class, false);
        }
        if let Some(to) = self.slides.get(change.to) {
            dom::set_class(to, &self.current_class, true);
        }
    }

    fn layout(&self) {
        for (element, slide) in self.slides.iter().zip(self.carousel.slides()) {
            dom::set_style(element, "left", &slide.left_css());
        }
    }

    fn on_timer(&mut self, action: TimerAction) {
        if let Some(change) = self.carousel.on_timer(action) {
            self.show(change);
        }
    }

    fn next(&mut self) {
        let change = self.carousel.next_pressed();
        self.show(change);
    }

    fn prev(&mut self) {
        let change = self.carousel.prev_pressed();
        self.show(change);
    }

    fn resize(&mut self) {
        let Some(first) = self.slides.first() else {
            return;
        };
        let width = first.get_bounding_client_rect().width() as f32;
        self.carousel.recompute_layout(width);
        self.layout();
        dom::set_style(&self.track, "transform", &self.carousel.track_transform());
    }
}

// =============================================================================
// Mount
// =============================================================================

pub struct MountedCarousel {
    view: Rc<RefCell<CarouselView>>,
    _listeners: Vec<Listener>,
}

impl MountedCarousel {
    pub fn current(&self) -> usize {
        self.view.borrow().carousel.current()
    }

    pub fn is_autoplaying(&self) -> bool {
        self.view.borrow().carousel.is_autoplaying()
    }
}

impl Drop for MountedCarousel {
    fn drop(&mut self) {
        if let Ok(mut view) = self.view.try_borrow_mut() {
            view.carousel.dispose();
        }
    }
}

/// Listen on `target` and forward to the view
fn on<F>(
    target: &EventTarget,
    event: &'static str,
    view: &Rc<RefCell<CarouselView>>,
    mut handler: F,
) -> Result<Listener, MountError>
where
    F: FnMut(&mut CarouselView) + 'static,
{
    let view = Rc::clone(view);
    Listener::new(target, event, move |_| {
        if let Ok(mut view) = view.try_borrow_mut() {
            handler(&mut view);
        }
    })
}

pub fn mount(page: &Page) -> Result<Option<MountedCarousel>, MountError> {
    let selectors = &page.config.selectors;
    let Some(track) = page.query(&selectors.carousel_track)? else {
        return Ok(None);
    };
    let children = dom::children(&track);
    let Some(first) = children.first() else {
        return Ok(None);
    };

    let slide_width = first.get_bounding_client_rect().width() as f32;
    let initial = children
        .iter()
        .position(|s| s.class_list().contains(&selectors.current_slide_class));

    let target: Target = Rc::new(OnceCell::new());
    let timers = BrowserTimers::new(page.window.clone(), Rc::clone(&target));
    let Some(carousel) = Carousel::new(
        children.len(),
        initial,
        slide_width,
        &page.config.carousel,
        timers,
    ) else {
        return Ok(None);
    };

    let slides = children
        .into_iter()
        .map(dom::html)
        .collect::<Result<Vec<_>, _>>()?;
    let view = Rc::new(RefCell::new(CarouselView {
        carousel,
        track: dom::html(track)?,
        slides,
        current_class: selectors.current_slide_class.clone(),
    }));
    let _ = target.set(Rc::downgrade(&view));

    {
        let mut v = view.borrow_mut();
        v.layout();
        let current = v.carousel.current();
        if let Some(slide) = v.slides.get(current) {
            dom::set_class(slide, &v.current_class, true);
        }
        dom::set_style(&v.track, "transform", &v.carousel.track_transform());
        v.carousel.start_autoplay();
    }

    let mut listeners = vec![on(&page.window, "resize", &view, CarouselView::resize)?];

    if let Some(next) = page.query(&selectors.carousel_next)? {
        listeners.push(on(&next, "click", &view, CarouselView::next)?);
    }
    if let Some(prev) = page.query(&selectors.carousel_prev)? {
        listeners.push(on(&prev, "click", &view, CarouselView::prev)?);
    }
    if let Some(container) = page.query(&selectors.carousel_container)? {
        listeners.push(on(&container, "mouseenter", &view, |v| v.carousel.pointer_enter())?);
        listeners.push(on(&container, "mouseleave", &view, |v| v.carousel.pointer_leave())?);
        listeners.push(on(&container, "touchstart", &view, |v| v.carousel.touch_start())?);
        listeners.push(on(&container, "touchend", &view, |v| v.carousel.touch_end())?);
    }

    log(&format!(
        "[carousel] Mounted with {} slides",
        view.borrow().slides.len()
    ));
    Ok(Some(MountedCarousel {
        view,
        _listeners: listeners,
    }))
}
