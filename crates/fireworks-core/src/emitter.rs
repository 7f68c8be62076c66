//! Spawn gating: cooldown between accepted requests and per-tier batch sizing.

use crate::config::Viewport;
use crate::constants::{BATCH_NARROW, BATCH_WIDE, SPAWN_COOLDOWN_MS};
use crate::tier::TierProfile;
use glam::DVec2;

/// What a spawn request turned into.
#[derive(Clone, Debug, PartialEq)]
pub enum SpawnOutcome {
    /// Dropped by the cooldown gate; nothing happened.
    Suppressed,
    /// Reduced motion: the host should show a short-lived text overlay at
    /// this device-pixel position instead of animating.
    Overlay { at: DVec2 },
    Burst {
        particles: usize,
        label: bool,
        chimed: bool,
    },
}

#[derive(Clone, Debug, Default)]
pub struct Emitter {
    last_spawn_ms: Option<f64>,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a request at `now_ms` unless one was accepted within the
    /// cooldown window. Accepting restarts the window.
    pub fn try_accept(&mut self, now_ms: f64) -> bool {
        if let Some(last) = self.last_spawn_ms {
            if now_ms - last < SPAWN_COOLDOWN_MS {
                return false;
            }
        }
        self.last_spawn_ms = Some(now_ms);
        true
    }

    #[inline]
    pub fn last_spawn_ms(&self) -> Option<f64> {
        self.last_spawn_ms
    }
}

/// Particles per accepted spawn for the given viewport and tier.
pub fn batch_size(viewport: &Viewport, profile: &TierProfile) -> usize {
    let base = if viewport.is_narrow() {
        BATCH_NARROW
    } else {
        BATCH_WIDE
    };
    (base as f64 * profile.batch_scale).round() as usize
}
