use crate::constants::REDUCED_MOTION_QUERY;
use fireworks_core::Viewport;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Milliseconds on the same clock as `requestAnimationFrame` timestamps.
#[inline]
pub fn now_ms() -> f64 {
    web::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

pub fn user_agent(window: &web::Window) -> String {
    window.navigator().user_agent().unwrap_or_default()
}

pub fn prefers_reduced_motion(window: &web::Window) -> bool {
    matches!(
        window.match_media(REDUCED_MOTION_QUERY),
        Ok(Some(mql)) if mql.matches()
    )
}

pub fn current_viewport(window: &web::Window, pixel_density: f64) -> Viewport {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    Viewport::new(w, h, pixel_density)
}

/// Resize the backing buffer and pin the CSS box to the viewport.
pub fn apply_viewport(canvas: &web::HtmlCanvasElement, viewport: &Viewport) {
    let (w_px, h_px) = viewport.backing_size();
    canvas.set_width(w_px.max(1));
    canvas.set_height(h_px.max(1));
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.css_width));
    _ = style.set_property("height", &format!("{}px", viewport.css_height));
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ListenOptions {
    pub passive: bool,
    pub once: bool,
}

impl ListenOptions {
    pub const PASSIVE: Self = Self {
        passive: true,
        once: false,
    };
    pub const PASSIVE_ONCE: Self = Self {
        passive: true,
        once: true,
    };
}

/// Attach a listener for the lifetime of the page.
pub fn listen<E>(
    target: &web::EventTarget,
    event: &str,
    options: ListenOptions,
    handler: impl FnMut(E) + 'static,
) where
    E: FromWasmAbi + 'static,
{
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(options.passive);
    opts.set_once(options.once);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    ) {
        log::error!("[dom] failed to listen for {}: {:?}", event, e);
    }
    closure.forget();
}
