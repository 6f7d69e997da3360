//! Canvas background driven by `requestAnimationFrame`
//!
//! The routine is picked from the `body` classes (or forced by config). A
//! full-viewport canvas is appended to `body`, sized on every window resize,
//! and redrawn once per display refresh until the mount is dropped.

use std::cell::{Cell, RefCell};
use std::f64::consts::TAU;
use std::rc::Rc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Performance, Window};

use folio_ui::surface::{Glow, Surface};
use folio_ui::{BackgroundAnimator, BackgroundType, Clock, Rgba, Size, Vec2};

use crate::dom::{Listener, Page};
use crate::error::MountError;
use crate::util::{log, viewport_size};

// =============================================================================
// Host capabilities
// =============================================================================

/// [`Surface`] over a 2D canvas context
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: HtmlCanvasElement, ctx: CanvasRenderingContext2d) -> Self {
        Self { canvas, ctx }
    }

    pub fn resize(&self, size: Size) {
        self.canvas.set_width(size.width.max(0.0) as u32);
        self.canvas.set_height(size.height.max(0.0) as u32);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx
            .clear_rect(0.0, 0.0, size.width as f64, size.height as f64);
    }

    fn fill_rect(&mut self, origin: Vec2, size: Size, color: Rgba) {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(
            origin.x as f64,
            origin.y as f64,
            size.width as f64,
            size.height as f64,
        );
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: Option<Glow>) {
        self.ctx.begin_path();
        if self
            .ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)
            .is_err()
        {
            return;
        }
        self.ctx.set_fill_style_str(&color.to_css());
        match glow {
            Some(glow) => {
                self.ctx.set_shadow_blur(glow.blur as f64);
                self.ctx.set_shadow_color(&glow.color.to_css());
                self.ctx.fill();
                self.ctx.set_shadow_blur(0.0);
            }
            None => self.ctx.fill(),
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Rgba, width: f32) {
        self.ctx.begin_path();
        self.ctx.move_to(from.x as f64, from.y as f64);
        self.ctx.line_to(to.x as f64, to.y as f64);
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }

    fn stroke_polyline(&mut self, points: &[Vec2], color: Rgba, width: f32) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        self.ctx.begin_path();
        self.ctx.move_to(first.x as f64, first.y as f64);
        for p in rest {
            self.ctx.line_to(p.x as f64, p.y as f64);
        }
        self.ctx.set_stroke_style_str(&color.to_css());
        self.ctx.set_line_width(width as f64);
        self.ctx.stroke();
    }
}

/// `performance.now()`, or `Date.now()` where the Performance API is missing
pub struct PerformanceClock {
    performance: Option<Performance>,
}

impl PerformanceClock {
    pub fn new(window: &Window) -> Self {
        Self {
            performance: window.performance(),
        }
    }
}

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        match &self.performance {
            Some(p) => p.now(),
            None => js_sys::Date::now(),
        }
    }
}

// =============================================================================
// Frame loop
// =============================================================================

struct Scene {
    animator: BackgroundAnimator<PerformanceClock>,
    surface: CanvasSurface,
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Self-rescheduling frame callback with an explicit stop flag
struct FrameLoop {
    window: Window,
    callback: FrameCallback,
    request_id: Rc<Cell<Option<i32>>>,
    stopped: Rc<Cell<bool>>,
}

impl FrameLoop {
    fn start(window: &Window, scene: Rc<RefCell<Scene>>) -> Result<Self, MountError> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let request_id = Rc::new(Cell::new(None));
        let stopped = Rc::new(Cell::new(false));

        let next = Rc::clone(&callback);
        let next_id = Rc::clone(&request_id);
        let next_stopped = Rc::clone(&stopped);
        let next_window = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            next_id.set(None);
            if next_stopped.get() {
                return;
            }
            let again = match scene.try_borrow_mut() {
                Ok(mut scene) => {
                    let Scene { animator, surface } = &mut *scene;
                    animator.frame(surface)
                }
                Err(_) => true,
            };
            if !again {
                return;
            }
            if let Some(cb) = next.borrow().as_ref() {
                match next_window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_id.set(Some(id)),
                    Err(e) => log(&format!("[background] requestAnimationFrame failed: {:?}", e)),
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = callback.borrow().as_ref() {
            let id = window.request_animation_frame(cb.as_ref().unchecked_ref())?;
            request_id.set(Some(id));
        }

        Ok(Self {
            window: window.clone(),
            callback,
            request_id,
            stopped,
        })
    }

    fn stop(&self) {
        self.stopped.set(true);
        if let Some(id) = self.request_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        // Breaks the callback's reference to itself
        self.callback.borrow_mut().take();
    }
}

// =============================================================================
// Mount
// =============================================================================

pub struct MountedBackground {
    kind: BackgroundType,
    canvas: HtmlCanvasElement,
    scene: Rc<RefCell<Scene>>,
    frames: FrameLoop,
    _resize: Listener,
}

impl MountedBackground {
    pub fn kind(&self) -> BackgroundType {
        self.kind
    }

    pub fn frame_count(&self) -> u64 {
        self.scene.borrow().animator.frame_count()
    }
}

impl Drop for MountedBackground {
    fn drop(&mut self) {
        self.frames.stop();
        if let Ok(mut scene) = self.scene.try_borrow_mut() {
            scene.animator.stop();
        }
        self.canvas.remove();
    }
}

/// Background selected for this page
pub fn select(page: &Page) -> BackgroundType {
    page.config.background.force_type.unwrap_or_else(|| {
        let classes = page.body.class_name();
        BackgroundType::from_markers(classes.split_whitespace())
    })
}

pub fn mount(page: &Page) -> Result<Option<MountedBackground>, MountError> {
    let kind = select(page);
    if !kind.is_animated() {
        return Ok(None);
    }

    let canvas = page
        .document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| MountError::Js("created element is not a canvas".to_string()))?;
    canvas.set_id(&page.config.selectors.canvas_id);

    let Some(ctx) = canvas.get_context("2d")? else {
        log("[background] 2D canvas unavailable, background disabled");
        return Ok(None);
    };
    let ctx = ctx
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| MountError::NoCanvasContext)?;

    page.body.append_child(&canvas)?;

    let surface = CanvasSurface::new(canvas.clone(), ctx);
    let bounds = viewport_size(&page.window);
    surface.resize(bounds);

    let Some(animator) = BackgroundAnimator::new(
        kind,
        bounds,
        PerformanceClock::new(&page.window),
        page.config.background.frame_timing,
        SmallRng::from_entropy(),
    ) else {
        canvas.remove();
        return Ok(None);
    };
    let scene = Rc::new(RefCell::new(Scene { animator, surface }));

    let resized = Rc::clone(&scene);
    let window = page.window.clone();
    let resize = Listener::new(&page.window, "resize", move |_| {
        if let Ok(mut scene) = resized.try_borrow_mut() {
            let size = viewport_size(&window);
            scene.surface.resize(size);
            scene.animator.resize(size);
        }
    })?;

    let frames = match FrameLoop::start(&page.window, Rc::clone(&scene)) {
        Ok(frames) => frames,
        Err(e) => {
            canvas.remove();
            return Err(e);
        }
    };

    log(&format!("[background] Mounted {} background", kind.name()));
    Ok(Some(MountedBackground {
        kind,
        canvas,
        scene,
        frames,
        _resize: resize,
    }))
}
