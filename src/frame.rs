use crate::dom::DomSurface;
use glam::DVec2;
use starwave_core::{ClickOutcome, FrameHandle, Scheduler, Starfield, Task, TimerHandle};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the page callbacks touch, behind one `RefCell`.
pub struct App {
    engine: Starfield,
    surface: DomSurface,
    sched: WebScheduler,
}

impl App {
    pub fn new(
        engine: Starfield,
        mut surface: DomSurface,
        window: web::Window,
    ) -> Rc<RefCell<Self>> {
        Rc::new_cyclic(|weak| {
            surface.attach(weak.clone());
            RefCell::new(Self {
                engine,
                surface,
                sched: WebScheduler {
                    window,
                    app: weak.clone(),
                },
            })
        })
    }

    pub fn click(&mut self, origin: DVec2) -> ClickOutcome {
        let now = self.sched.now();
        self.engine
            .on_click(now, origin, &mut self.sched, &mut self.surface)
    }

    fn frame(&mut self, handle: FrameHandle, now: f64) {
        self.engine
            .on_frame(handle, now, &mut self.sched, &mut self.surface);
    }

    pub(crate) fn gallery_image_failed(&mut self, src: &str) {
        self.engine.on_gallery_image_failed(src, &mut self.sched);
    }

    fn timer(&mut self, handle: TimerHandle, task: Task) {
        let now = self.sched.now();
        self.engine
            .on_timer(handle, task, now, &mut self.sched, &mut self.surface);
    }
}

/// Run `f` against the app unless it is gone or already borrowed.
pub(crate) fn with_app(app: &Weak<RefCell<App>>, f: impl FnOnce(&mut App)) {
    if let Some(app) = app.upgrade() {
        dispatch(&app, f);
    }
}

pub(crate) fn dispatch(app: &RefCell<App>, f: impl FnOnce(&mut App)) {
    match app.try_borrow_mut() {
        Ok(mut guard) => f(&mut guard),
        Err(_) => log::warn!("[frame] callback re-entered while app busy; dropped"),
    }
}

/// `requestAnimationFrame` / `setTimeout` backed scheduler.
///
/// Browser ids double as handles. Each callback learns its own id through a
/// shared cell filled in right after registration, which always happens
/// before the browser can run it.
pub struct WebScheduler {
    window: web::Window,
    app: Weak<RefCell<App>>,
}

impl WebScheduler {
    pub fn now(&self) -> f64 {
        self.window
            .performance()
            .map(|p| p.now())
            .unwrap_or_default()
    }
}

impl Scheduler for WebScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let slot = Rc::new(Cell::new(None::<FrameHandle>));
        let slot_cb = slot.clone();
        let app = self.app.clone();
        let cb = Closure::once_into_js(move |timestamp: f64| {
            if let Some(handle) = slot_cb.get() {
                with_app(&app, |a| a.frame(handle, timestamp));
            }
        });
        match self.window.request_animation_frame(cb.unchecked_ref()) {
            Ok(id) => {
                let handle = FrameHandle(id as u32);
                slot.set(Some(handle));
                handle
            }
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                FrameHandle(0)
            }
        }
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        _ = self.window.cancel_animation_frame(handle.0 as i32);
    }

    fn set_timeout(&mut self, delay_ms: f64, task: Task) -> TimerHandle {
        let slot = Rc::new(Cell::new(None::<TimerHandle>));
        let slot_cb = slot.clone();
        let app = self.app.clone();
        let cb = Closure::once_into_js(move || {
            if let Some(handle) = slot_cb.get() {
                with_app(&app, |a| a.timer(handle, task));
            }
        });
        let delay = delay_ms.max(0.0).round() as i32;
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay)
        {
            Ok(id) => {
                let handle = TimerHandle(id as u32);
                slot.set(Some(handle));
                handle
            }
            Err(e) => {
                log::error!("[frame] setTimeout failed: {:?}", e);
                TimerHandle(0)
            }
        }
    }

    fn clear_timeout(&mut self, handle: TimerHandle) {
        self.window.clear_timeout_with_handle(handle.0 as i32);
    }
}
