//! Particle and popup label models. Both follow the same contract: `update`
//! advances state and reports whether the entity is still alive, `draw` renders
//! without touching state.

use crate::color::Hsla;
use crate::constants::*;
use crate::surface::Surface;
use crate::tier::TierProfile;
use glam::DVec2;
use rand::Rng;
use std::f64::consts::TAU;

/// Per-frame rendering knobs that depend on the current tier rather than on
/// the entity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameStyle {
    pub pixel_density: f64,
    /// Shadow blur in device pixels; zero disables glow.
    pub glow_blur: f64,
}

impl FrameStyle {
    pub fn for_profile(profile: &TierProfile, pixel_density: f64) -> Self {
        Self {
            pixel_density,
            glow_blur: if profile.glow {
                GLOW_BLUR_PER_DPI * pixel_density
            } else {
                0.0
            },
        }
    }
}

pub trait Entity {
    fn update(&mut self, dt_ms: f64) -> bool;
    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &FrameStyle);
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: DVec2,
    pub vel: DVec2,
    pub friction: f64,
    pub gravity: f64,
    pub hue: f64,
    pub alpha: f64,
    pub decay: f64,
    pub radius: f64,
}

impl Particle {
    /// Launch a particle from `origin` in a random direction. Physical
    /// parameters are sampled from `profile` once and kept for life.
    pub fn spawn<R: Rng>(
        origin: DVec2,
        profile: &TierProfile,
        pixel_density: f64,
        rng: &mut R,
    ) -> Self {
        let angle = rng.gen_range(0.0..TAU);
        let speed = rng.gen_range(LAUNCH_SPEED_MIN..LAUNCH_SPEED_MAX);
        let base_hue = PALETTE_HUES[rng.gen_range(0..PALETTE_HUES.len())];
        Self {
            pos: origin,
            vel: DVec2::new(angle.cos(), angle.sin()) * speed,
            friction: profile.friction,
            gravity: GRAVITY,
            hue: base_hue + rng.gen_range(-HUE_JITTER..HUE_JITTER),
            alpha: 1.0,
            decay: rng.gen_range(profile.decay.clone()),
            radius: rng.gen_range(profile.radius.clone()) * pixel_density,
        }
    }

    #[inline]
    pub fn color(&self) -> Hsla {
        Hsla::new(
            self.hue,
            PARTICLE_SATURATION,
            PARTICLE_LIGHTNESS,
            self.alpha.max(0.0),
        )
    }
}

impl Entity for Particle {
    fn update(&mut self, dt_ms: f64) -> bool {
        let step = dt_ms * TIME_SCALE;
        self.vel.x *= self.friction;
        self.vel.y = self.vel.y * self.friction + self.gravity;
        self.pos += self.vel * step;
        self.alpha -= self.decay * step;
        self.alpha > 0.0
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &FrameStyle) {
        let color = self.color();
        surface.save();
        surface.set_fill_style(&color.to_string());
        if style.glow_blur > 0.0 {
            let glow = color.with_alpha(color.alpha.min(GLOW_ALPHA_MAX));
            surface.set_shadow(&glow.to_string(), style.glow_blur);
        }
        surface.fill_circle(self.pos.x, self.pos.y, self.radius);
        surface.restore();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PopupLabel {
    pub pos: DVec2,
    pub rise: f64,
    pub scale: f64,
    pub alpha: f64,
    pub decay: f64,
    pub text: String,
}

impl PopupLabel {
    pub fn new(origin: DVec2, text: impl Into<String>, pixel_density: f64) -> Self {
        Self {
            pos: origin,
            rise: LABEL_RISE_PER_DPI * pixel_density,
            scale: 1.0,
            alpha: 1.0,
            decay: LABEL_DECAY,
            text: text.into(),
        }
    }
}

impl Entity for PopupLabel {
    fn update(&mut self, dt_ms: f64) -> bool {
        self.pos.y += self.rise * dt_ms;
        self.scale += LABEL_GROWTH_PER_MS * dt_ms;
        self.alpha -= self.decay * dt_ms * TIME_SCALE;
        self.alpha > 0.0
    }

    fn draw<S: Surface + ?Sized>(&self, surface: &mut S, style: &FrameStyle) {
        let dpi = style.pixel_density;
        surface.save();
        surface.set_global_alpha(self.alpha.max(0.0));
        surface.translate(self.pos.x, self.pos.y);
        surface.scale(self.scale, self.scale);
        surface.set_fill_style(LABEL_FILL);
        surface.set_stroke_style(LABEL_STROKE);
        surface.set_line_width(LABEL_LINE_WIDTH * dpi);
        surface.set_font(&format!(
            "bold {}px {}",
            (LABEL_FONT_PX * dpi).round(),
            LABEL_FONT_FAMILY
        ));
        surface.set_text_centered();
        surface.stroke_text(&self.text, 0.0, 0.0);
        surface.fill_text(&self.text, 0.0, 0.0);
        surface.restore();
    }
}

/// Update every entity, dropping the dead and drawing the survivors.
///
/// Walks back to front so `swap_remove` only ever pulls in an element that has
/// already been visited this frame. Returns the number drawn.
pub fn step_entities<E: Entity, S: Surface + ?Sized>(
    entities: &mut Vec<E>,
    dt_ms: f64,
    surface: &mut S,
    style: &FrameStyle,
) -> usize {
    let mut drawn = 0;
    let mut i = entities.len();
    while i > 0 {
        i -= 1;
        if !entities[i].update(dt_ms) {
            entities.swap_remove(i);
            continue;
        }
        entities[i].draw(surface, style);
        drawn += 1;
    }
    drawn
}
