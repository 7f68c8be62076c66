use crate::constants::*;
use glam::DVec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Reduced-motion stand-in for a burst: a text node that fades and rises once,
/// then removes itself.
pub fn show_text(
    document: &web::Document,
    text: &str,
    at: DVec2,
    pixel_density: f64,
) -> Result<(), JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("no body"))?;
    let node: web::HtmlElement = document.create_element("div")?.dyn_into()?;
    node.set_text_content(Some(text));

    let style = node.style();
    style.set_property("position", "fixed")?;
    style.set_property("left", &format!("{}px", at.x / pixel_density))?;
    style.set_property("top", &format!("{}px", at.y / pixel_density))?;
    style.set_property("transform", OVERLAY_TRANSFORM_START)?;
    style.set_property("color", OVERLAY_COLOR)?;
    style.set_property("font-size", OVERLAY_FONT_SIZE)?;
    style.set_property("pointer-events", "none")?;
    style.set_property("transition", OVERLAY_TRANSITION)?;
    style.set_property("opacity", "1")?;
    style.set_property("z-index", OVERLAY_Z_INDEX)?;
    body.append_child(&node)?;

    let fading = node.clone();
    let fade = Closure::once_into_js(move || {
        let style = fading.style();
        _ = style.set_property("opacity", "0");
        _ = style.set_property("transform", OVERLAY_TRANSFORM_END);
    });
    window.request_animation_frame(fade.unchecked_ref())?;

    let remove = Closure::once_into_js(move || node.remove());
    window.set_timeout_with_callback_and_timeout_and_arguments_0(
        remove.unchecked_ref(),
        OVERLAY_LIFETIME_MS,
    )?;
    Ok(())
}
