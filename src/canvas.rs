use fireworks_core::{Composite, Surface};
use std::f64::consts::TAU;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D implementation of the simulation's drawing surface.
pub struct CanvasSurface {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("getContext failed: {:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { canvas, ctx })
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> (f64, f64) {
        (self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn set_composite(&mut self, mode: Composite) {
        _ = self.ctx.set_global_composite_operation(mode.as_str());
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn set_fill_style(&mut self, style: &str) {
        self.ctx.set_fill_style_str(style);
    }

    fn set_stroke_style(&mut self, style: &str) {
        self.ctx.set_stroke_style_str(style);
    }

    fn set_line_width(&mut self, width: f64) {
        self.ctx.set_line_width(width);
    }

    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.ctx.set_shadow_color(color);
        self.ctx.set_shadow_blur(blur);
    }

    fn set_font(&mut self, font: &str) {
        self.ctx.set_font(font);
    }

    fn set_text_centered(&mut self) {
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
    }

    fn translate(&mut self, x: f64, y: f64) {
        _ = self.ctx.translate(x, y);
    }

    fn scale(&mut self, sx: f64, sy: f64) {
        _ = self.ctx.scale(sx, sy);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        _ = self.ctx.arc(x, y, radius, 0.0, TAU);
        self.ctx.fill();
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        _ = self.ctx.fill_text(text, x, y);
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) {
        _ = self.ctx.stroke_text(text, x, y);
    }
}
