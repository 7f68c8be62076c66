//! Immediate-mode 2D drawing collaborator, shaped after the Canvas2D calls the
//! simulation needs. Coordinates are device pixels.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Composite {
    SourceOver,
    /// Erases destination pixels in proportion to source alpha.
    DestinationOut,
}

impl Composite {
    pub fn as_str(self) -> &'static str {
        match self {
            Composite::SourceOver => "source-over",
            Composite::DestinationOut => "destination-out",
        }
    }
}

pub trait Surface {
    fn size(&self) -> (f64, f64);

    fn save(&mut self);
    fn restore(&mut self);

    fn set_composite(&mut self, mode: Composite);
    fn set_global_alpha(&mut self, alpha: f64);
    fn set_fill_style(&mut self, style: &str);
    fn set_stroke_style(&mut self, style: &str);
    fn set_line_width(&mut self, width: f64);
    /// Soft shadow around subsequent fills; `blur == 0.0` disables it.
    fn set_shadow(&mut self, color: &str, blur: f64);
    fn set_font(&mut self, font: &str);
    /// Center-aligned text with a middle baseline.
    fn set_text_centered(&mut self);

    fn translate(&mut self, x: f64, y: f64);
    fn scale(&mut self, sx: f64, sy: f64);

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
    fn stroke_text(&mut self, text: &str, x: f64, y: f64);
}

/// Partially erase the previous frame so moving entities leave a fading trail.
pub fn fade_trail<S: Surface + ?Sized>(surface: &mut S, alpha: f64) {
    let (w, h) = surface.size();
    surface.set_composite(Composite::DestinationOut);
    surface.set_fill_style(&format!("rgba(0, 0, 0, {})", alpha));
    surface.fill_rect(0.0, 0.0, w, h);
    surface.set_composite(Composite::SourceOver);
}
