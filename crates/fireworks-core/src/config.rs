//! Host environment detection and viewport geometry.

use crate::constants::{DEFAULT_LABEL_TEXT, MAX_PIXEL_DENSITY, MIN_CSS_EXTENT, NARROW_CSS_WIDTH};
use crate::tier::QualityTier;

const MOBILE_MARKERS: [&str; 5] = ["android", "iphone", "ipad", "ipod", "mobile"];
const IN_APP_MARKER: &str = "micromessenger";

/// What the simulation needs to know about the page it runs in.
#[derive(Clone, Debug, PartialEq)]
pub struct HostProfile {
    pub pixel_density: f64,
    pub reduced_motion: bool,
    pub mobile: bool,
    /// Embedded social-app browser with its own audio unlock signal.
    pub in_app_browser: bool,
    pub initial_tier: QualityTier,
    pub label_text: String,
}

impl HostProfile {
    pub fn detect(user_agent: &str, device_pixel_ratio: f64, reduced_motion: bool) -> Self {
        let ua = user_agent.to_ascii_lowercase();
        let in_app_browser = ua.contains(IN_APP_MARKER);
        let mobile = MOBILE_MARKERS.iter().any(|m| ua.contains(m));
        let constrained = mobile || in_app_browser;

        let pixel_density = if constrained || !device_pixel_ratio.is_finite() {
            1.0
        } else {
            device_pixel_ratio.clamp(1.0, MAX_PIXEL_DENSITY)
        };

        Self {
            pixel_density,
            reduced_motion,
            mobile,
            in_app_browser,
            initial_tier: if constrained {
                QualityTier::Low
            } else {
                QualityTier::High
            },
            label_text: DEFAULT_LABEL_TEXT.to_string(),
        }
    }

    pub fn with_initial_tier(mut self, tier: QualityTier) -> Self {
        self.initial_tier = tier;
        self
    }

    pub fn with_label_text(mut self, text: impl Into<String>) -> Self {
        self.label_text = text.into();
        self
    }
}

impl Default for HostProfile {
    fn default() -> Self {
        Self::detect("", 1.0, false)
    }
}

/// Visible area in CSS pixels plus the density used for the backing buffer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub css_width: f64,
    pub css_height: f64,
    pub pixel_density: f64,
}

impl Viewport {
    /// Clamp the window size to the minimum drawable extent.
    pub fn new(inner_width: f64, inner_height: f64, pixel_density: f64) -> Self {
        Self {
            css_width: inner_width.max(MIN_CSS_EXTENT),
            css_height: inner_height.max(MIN_CSS_EXTENT),
            pixel_density,
        }
    }

    /// Backing buffer size in device pixels.
    pub fn backing_size(&self) -> (u32, u32) {
        (
            (self.css_width * self.pixel_density).round() as u32,
            (self.css_height * self.pixel_density).round() as u32,
        )
    }

    #[inline]
    pub fn is_narrow(&self) -> bool {
        self.css_width < NARROW_CSS_WIDTH
    }
}
