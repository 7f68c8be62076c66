use crate::dom::{self, ListenOptions};
use crate::frame::App;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_pointer(app: &Rc<RefCell<App>>, document: &web::Document) {
    wire_click(app, document);
    wire_touchstart(app, document);
}

fn wire_click(app: &Rc<RefCell<App>>, document: &web::Document) {
    let app = app.clone();
    dom::listen(
        document,
        "click",
        ListenOptions::PASSIVE,
        move |ev: web::MouseEvent| {
            let now = dom::now_ms();
            let mut app = app.borrow_mut();
            if !app.touch_guard.accept_click(now) {
                return;
            }
            let dpi = app.sim.host().pixel_density;
            let point = input::client_to_device(ev.client_x() as f64, ev.client_y() as f64, dpi);
            app.spawn_at(point, now);
        },
    );
}

fn wire_touchstart(app: &Rc<RefCell<App>>, document: &web::Document) {
    let app = app.clone();
    dom::listen(
        document,
        "touchstart",
        ListenOptions::PASSIVE,
        move |ev: web::TouchEvent| {
            let now = dom::now_ms();
            let mut app = app.borrow_mut();
            app.touch_guard.note_touch(now);
            let Some(touch) = ev.touches().get(0) else {
                return;
            };
            let dpi = app.sim.host().pixel_density;
            let point =
                input::client_to_device(touch.client_x() as f64, touch.client_y() as f64, dpi);
            app.spawn_at(point, now);
        },
    );
}
