//! requestAnimationFrame scheduler with an explicit idle/wake contract.
//!
//! The loop keeps ticking while the scene has pending work and parks itself
//! once [`Scene::is_idle`] reports a fully static picture. Interaction
//! handlers call [`FrameDriver::wake`] to re-arm it; waking a running loop is
//! a no-op, so callers never have to track whether frames are in flight.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use app_core::Scene;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::render::CanvasSurface;

pub struct FrameDriver {
    pub scene: RefCell<Scene>,
    surface: RefCell<CanvasSurface>,
    epoch: Instant,
    running: Cell<bool>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameDriver {
    pub fn new(scene: Scene, surface: CanvasSurface) -> Rc<Self> {
        let driver = Rc::new(Self {
            scene: RefCell::new(scene),
            surface: RefCell::new(surface),
            epoch: Instant::now(),
            running: Cell::new(false),
            tick: RefCell::new(None),
        });
        let for_tick = driver.clone();
        *driver.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            for_tick.frame();
        }) as Box<dyn FnMut()>));
        driver
    }

    /// Milliseconds since the driver was created; the scene's time base.
    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Arm the loop; a no-op while frames are already scheduled.
    pub fn wake(&self) {
        if self.running.replace(true) {
            return;
        }
        self.request_frame();
    }

    fn frame(&self) {
        let now = self.now_ms();
        let mut scene = self.scene.borrow_mut();
        scene.tick(now);
        scene.render(&mut *self.surface.borrow_mut());
        let idle = scene.is_idle();
        drop(scene);
        if idle {
            self.running.set(false);
        } else {
            self.request_frame();
        }
    }

    fn request_frame(&self) {
        if let Some(w) = web::window() {
            if let Some(cb) = self.tick.borrow().as_ref() {
                let _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
            }
        }
    }
}
