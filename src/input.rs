use glam::DVec2;

// Mobile browsers follow a tap with a synthetic click; ignore clicks this soon
// after a touch.
pub const CLICK_AFTER_TOUCH_MS: f64 = 500.0;

/// Client (CSS) coordinates to device pixels on the full-window canvas.
#[inline]
pub fn client_to_device(client_x: f64, client_y: f64, pixel_density: f64) -> DVec2 {
    DVec2::new(client_x, client_y) * pixel_density
}

#[derive(Clone, Copy, Debug, Default)]
pub struct TouchClickGuard {
    last_touch_ms: Option<f64>,
}

impl TouchClickGuard {
    pub fn note_touch(&mut self, now_ms: f64) {
        self.last_touch_ms = Some(now_ms);
    }

    pub fn accept_click(&self, now_ms: f64) -> bool {
        match self.last_touch_ms {
            Some(t) => now_ms - t >= CLICK_AFTER_TOUCH_MS,
            None => true,
        }
    }
}
