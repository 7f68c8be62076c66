// Test doubles shared by the integration tests.

#![allow(dead_code)]

use fireworks_core::{AudioSink, Chime, Composite, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum Op {
    Save,
    Restore,
    Composite(Composite),
    GlobalAlpha(f64),
    Fill(String),
    Stroke(String),
    LineWidth(f64),
    Shadow(String, f64),
    Font(String),
    TextCentered,
    Translate(f64, f64),
    Scale(f64, f64),
    FillRect(f64, f64, f64, f64),
    Circle(f64, f64, f64),
    FillText(String),
    StrokeText(String),
}

pub struct RecordingSurface {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<Op>,
}

impl RecordingSurface {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    pub fn circles(&self) -> usize {
        self.ops.iter().filter(|op| matches!(op, Op::Circle(..))).count()
    }

    pub fn texts(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::FillText(_)))
            .count()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }
    fn save(&mut self) {
        self.ops.push(Op::Save);
    }
    fn restore(&mut self) {
        self.ops.push(Op::Restore);
    }
    fn set_composite(&mut self, mode: Composite) {
        self.ops.push(Op::Composite(mode));
    }
    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(Op::GlobalAlpha(alpha));
    }
    fn set_fill_style(&mut self, style: &str) {
        self.ops.push(Op::Fill(style.to_string()));
    }
    fn set_stroke_style(&mut self, style: &str) {
        self.ops.push(Op::Stroke(style.to_string()));
    }
    fn set_line_width(&mut self, width: f64) {
        self.ops.push(Op::LineWidth(width));
    }
    fn set_shadow(&mut self, color: &str, blur: f64) {
        self.ops.push(Op::Shadow(color.to_string(), blur));
    }
    fn set_font(&mut self, font: &str) {
        self.ops.push(Op::Font(font.to_string()));
    }
    fn set_text_centered(&mut self) {
        self.ops.push(Op::TextCentered);
    }
    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(Op::Translate(x, y));
    }
    fn scale(&mut self, sx: f64, sy: f64) {
        self.ops.push(Op::Scale(sx, sy));
    }
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(Op::FillRect(x, y, w, h));
    }
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ops.push(Op::Circle(x, y, radius));
    }
    fn fill_text(&mut self, text: &str, _x: f64, _y: f64) {
        self.ops.push(Op::FillText(text.to_string()));
    }
    fn stroke_text(&mut self, text: &str, _x: f64, _y: f64) {
        self.ops.push(Op::StrokeText(text.to_string()));
    }
}

#[derive(Default)]
pub struct CountingAudio {
    pub chimes: Vec<Chime>,
    pub unlocks: usize,
}

impl AudioSink for CountingAudio {
    fn play(&mut self, chime: &Chime) {
        self.chimes.push(chime.clone());
    }
    fn unlock(&mut self) {
        self.unlocks += 1;
    }
}
