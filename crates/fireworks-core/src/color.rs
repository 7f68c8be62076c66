use std::fmt;

/// CSS `hsla()` colour.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self::new(self.hue, self.saturation, self.lightness, alpha)
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({:.1}, {}%, {}%, {:.3})",
            self.hue, self.saturation, self.lightness, self.alpha
        )
    }
}
