use crate::audio::WebAudio;
use crate::canvas::CanvasSurface;
use crate::dom;
use crate::input::TouchClickGuard;
use crate::overlay;
use fireworks_core::{LoopCommand, ResizeGate, Simulation, SpawnOutcome};
use glam::DVec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything the page handlers and the frame callback share.
pub struct App {
    pub sim: Simulation,
    pub surface: CanvasSurface,
    pub audio: WebAudio,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    pub resize: ResizeGate,
    pub touch_guard: TouchClickGuard,
    pending_frame: Option<i32>,
}

impl App {
    pub fn new(
        sim: Simulation,
        surface: CanvasSurface,
        audio: WebAudio,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
    ) -> Self {
        Self {
            sim,
            surface,
            audio,
            canvas,
            document,
            resize: ResizeGate::default(),
            touch_guard: TouchClickGuard::default(),
            pending_frame: None,
        }
    }

    pub fn spawn_at(&mut self, point: DVec2, now_ms: f64) {
        if let SpawnOutcome::Overlay { at } = self.sim.spawn(point, now_ms, &mut self.audio) {
            let host = self.sim.host();
            if let Err(e) = overlay::show_text(&self.document, &host.label_text, at, host.pixel_density)
            {
                log::debug!("[overlay] {:?}", e);
            }
        }
    }

    /// Recompute canvas geometry from the current window size.
    pub fn resize_now(&mut self) {
        let Some(window) = web::window() else {
            self.resize.complete();
            return;
        };
        let viewport = dom::current_viewport(&window, self.sim.host().pixel_density);
        dom::apply_viewport(&self.canvas, &viewport);
        self.sim.set_viewport(viewport);
        self.resize.complete();
    }
}

/// Drives `App` from `requestAnimationFrame` and carries out the loop
/// commands the simulation returns.
#[derive(Clone)]
pub struct FrameDriver {
    app: Rc<RefCell<App>>,
    callback: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>,
}

impl FrameDriver {
    pub fn new(app: Rc<RefCell<App>>) -> Self {
        let driver = Self {
            app,
            callback: Rc::new(RefCell::new(None)),
        };
        // The closure keeps the driver alive for the life of the page.
        let inner = driver.clone();
        *driver.callback.borrow_mut() = Some(Closure::wrap(
            Box::new(move |ts: f64| inner.on_frame(ts)) as Box<dyn FnMut(f64)>,
        ));
        driver
    }

    pub fn app(&self) -> &Rc<RefCell<App>> {
        &self.app
    }

    pub fn apply(&self, cmd: LoopCommand) {
        match cmd {
            LoopCommand::Schedule => self.request(),
            LoopCommand::Cancel => self.cancel(),
            LoopCommand::Nothing => {}
        }
    }

    fn on_frame(&self, ts: f64) {
        let cmd = {
            let mut app = self.app.borrow_mut();
            app.pending_frame = None;
            let visible = !app.document.hidden();
            let App { sim, surface, .. } = &mut *app;
            let (_report, cmd) = sim.frame(ts, surface, visible);
            cmd
        };
        self.apply(cmd);
    }

    fn request(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(cb) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(handle) => self.app.borrow_mut().pending_frame = Some(handle),
            Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel(&self) {
        let pending = self.app.borrow_mut().pending_frame.take();
        if let (Some(handle), Some(window)) = (pending, web::window()) {
            _ = window.cancel_animation_frame(handle);
        }
    }
}
