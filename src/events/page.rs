use crate::constants::IN_APP_BRIDGE_READY_EVENT;
use crate::dom::{self, ListenOptions};
use crate::frame::{App, FrameDriver};
use fireworks_core::AudioSink;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Coalesce resize bursts into one recomputation on the next frame.
pub fn wire_resize(app: &Rc<RefCell<App>>, window: &web::Window) {
    let app = app.clone();
    dom::listen(window, "resize", ListenOptions::PASSIVE, move |_: web::Event| {
        if !app.borrow_mut().resize.request() {
            return;
        }
        let app_frame = app.clone();
        let run = Closure::once_into_js(move || app_frame.borrow_mut().resize_now());
        let scheduled = web::window()
            .map(|w| w.request_animation_frame(run.unchecked_ref()).is_ok())
            .unwrap_or(false);
        if !scheduled {
            app.borrow_mut().resize_now();
        }
    });
}

pub fn wire_visibility(driver: &FrameDriver, document: &web::Document) {
    let driver = driver.clone();
    dom::listen(
        document,
        "visibilitychange",
        ListenOptions::default(),
        move |_: web::Event| {
            let cmd = {
                let mut app = driver.app().borrow_mut();
                let hidden = app.document.hidden();
                app.sim.set_hidden(hidden, dom::now_ms())
            };
            driver.apply(cmd);
        },
    );
}

/// One-shot audio unlock on the first touch end, and on the in-app browser's
/// bridge-ready signal when running inside it.
pub fn wire_audio_unlock(app: &Rc<RefCell<App>>, window: &web::Window, document: &web::Document) {
    let on_touch = app.clone();
    dom::listen(
        window,
        "touchend",
        ListenOptions::PASSIVE_ONCE,
        move |_: web::Event| {
            on_touch.borrow_mut().audio.unlock();
        },
    );

    if app.borrow().sim.host().in_app_browser {
        let on_bridge = app.clone();
        dom::listen(
            document,
            IN_APP_BRIDGE_READY_EVENT,
            ListenOptions {
                passive: false,
                once: true,
            },
            move |_: web::Event| {
                on_bridge.borrow_mut().audio.unlock();
            },
        );
    }
}
