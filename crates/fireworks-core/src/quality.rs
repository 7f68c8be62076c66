//! Frame-cost feedback controller that moves the quality tier one step at a
//! time once the hysteresis score saturates.

use crate::constants::{
    COMFORT_FRAME_MS, HEADROOM_PARTICLES, SCORE_LIMIT, SCORE_TRIGGER, STRESS_FRAME_MS,
};
use crate::tier::QualityTier;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TierChange {
    pub from: QualityTier,
    pub to: QualityTier,
}

#[derive(Clone, Debug)]
pub struct QualityController {
    tier: QualityTier,
    score: i32,
}

impl QualityController {
    pub fn new(initial: QualityTier) -> Self {
        Self {
            tier: initial,
            score: 0,
        }
    }

    #[inline]
    pub fn current_tier(&self) -> QualityTier {
        self.tier
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    /// Feed one measured frame delta together with the live particle count.
    /// Returns the transition when this sample moved the tier.
    pub fn record_frame_cost(&mut self, dt_ms: f64, live_particles: usize) -> Option<TierChange> {
        if dt_ms > STRESS_FRAME_MS {
            self.score = (self.score + 1).min(SCORE_LIMIT);
        } else if dt_ms < COMFORT_FRAME_MS && self.has_headroom(live_particles) {
            self.score = (self.score - 1).max(-SCORE_LIMIT);
        }

        let stepped = if self.score >= SCORE_TRIGGER {
            self.tier.degraded()
        } else if self.score <= -SCORE_TRIGGER {
            self.tier.upgraded()
        } else {
            None
        };
        // At either end of the tier range the score stays saturated.
        let next = stepped?;

        let change = TierChange {
            from: self.tier,
            to: next,
        };
        self.tier = next;
        self.score = 0;
        log::info!(
            "[quality] tier {} -> {} (live particles {})",
            change.from,
            change.to,
            live_particles
        );
        Some(change)
    }

    fn has_headroom(&self, live_particles: usize) -> bool {
        let ceiling = self.tier.profile().comfort_ceiling;
        live_particles < ceiling.saturating_sub(HEADROOM_PARTICLES)
    }
}
