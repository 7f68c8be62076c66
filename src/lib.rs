#![cfg(target_arch = "wasm32")]
use crate::audio::WebAudio;
use crate::canvas::CanvasSurface;
use crate::constants::{CANVAS_ID, DATA_LABEL_ATTR, DATA_QUALITY_ATTR};
use crate::frame::{App, FrameDriver};
use fireworks_core::{HostProfile, QualityTier, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod canvas;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod overlay;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fireworks-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let host = detect_host(&window, &canvas);
    let viewport = dom::current_viewport(&window, host.pixel_density);
    dom::apply_viewport(&canvas, &viewport);
    let surface = CanvasSurface::new(canvas.clone())?;

    let now = dom::now_ms();
    let sim = Simulation::new(host, viewport, now, rand::random());
    let app = Rc::new(RefCell::new(App::new(
        sim,
        surface,
        WebAudio::new(),
        canvas,
        document.clone(),
    )));
    let driver = FrameDriver::new(app.clone());

    events::wire_resize(&app, &window);
    events::wire_visibility(&driver, &document);
    events::wire_pointer(&app, &document);
    events::wire_audio_unlock(&app, &window, &document);

    let cmd = app.borrow_mut().sim.start(now);
    driver.apply(cmd);
    Ok(())
}

// Environment sniffing plus per-page overrides from the canvas element.
fn detect_host(window: &web::Window, canvas: &web::HtmlCanvasElement) -> HostProfile {
    let mut host = HostProfile::detect(
        &dom::user_agent(window),
        window.device_pixel_ratio(),
        dom::prefers_reduced_motion(window),
    );
    if let Some(label) = canvas
        .get_attribute(DATA_LABEL_ATTR)
        .filter(|s| !s.trim().is_empty())
    {
        host = host.with_label_text(label);
    }
    if let Some(raw) = canvas.get_attribute(DATA_QUALITY_ATTR) {
        match raw.parse::<QualityTier>() {
            Ok(tier) => host = host.with_initial_tier(tier),
            Err(e) => log::warn!("[config] ignoring {}: {}", DATA_QUALITY_ATTR, e),
        }
    }
    host
}
