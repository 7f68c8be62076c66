//! The simulation context: live entities, quality state, spawn gate and frame
//! clock, threaded through every tick and spawn by the host driver.

use crate::audio::{chime_for, AudioSink};
use crate::config::{HostProfile, Viewport};
use crate::constants::TRAIL_FADE_ALPHA;
use crate::emitter::{batch_size, Emitter, SpawnOutcome};
use crate::entity::{step_entities, FrameStyle, Particle, PopupLabel};
use crate::lifecycle::{FrameLoop, LoopCommand, LoopState};
use crate::quality::{QualityController, TierChange};
use crate::surface::{fade_trail, Surface};
use crate::tier::QualityTier;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub dt_ms: f64,
    pub particles_drawn: usize,
    pub labels_drawn: usize,
    /// Particles dropped by the population ceiling this tick.
    pub evicted: usize,
    pub tier_change: Option<TierChange>,
}

pub struct Simulation {
    particles: Vec<Particle>,
    labels: Vec<PopupLabel>,
    quality: QualityController,
    emitter: Emitter,
    frame_loop: FrameLoop,
    host: HostProfile,
    viewport: Viewport,
    last_frame_ms: f64,
    rng: StdRng,
}

impl Simulation {
    pub fn new(host: HostProfile, viewport: Viewport, now_ms: f64, seed: u64) -> Self {
        log::info!(
            "[sim] start tier={} dpi={} reduced_motion={} viewport={}x{}",
            host.initial_tier,
            host.pixel_density,
            host.reduced_motion,
            viewport.css_width,
            viewport.css_height
        );
        Self {
            particles: Vec::new(),
            labels: Vec::new(),
            quality: QualityController::new(host.initial_tier),
            emitter: Emitter::new(),
            frame_loop: FrameLoop::new(),
            host,
            viewport,
            last_frame_ms: now_ms,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn labels(&self) -> &[PopupLabel] {
        &self.labels
    }

    #[inline]
    pub fn tier(&self) -> QualityTier {
        self.quality.current_tier()
    }

    pub fn quality(&self) -> &QualityController {
        &self.quality
    }

    pub fn host(&self) -> &HostProfile {
        &self.host
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    #[inline]
    pub fn loop_state(&self) -> LoopState {
        self.frame_loop.state()
    }

    #[inline]
    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms
    }

    /// Start the loop at page load.
    pub fn start(&mut self, now_ms: f64) -> LoopCommand {
        self.resume(now_ms)
    }

    /// Visibility changed. Coming back resets the frame clock so the first
    /// resumed tick does not see the whole hidden interval as one delta.
    pub fn set_hidden(&mut self, hidden: bool, now_ms: f64) -> LoopCommand {
        let cmd = self.frame_loop.on_visibility_change(hidden);
        if !hidden && cmd == LoopCommand::Schedule {
            self.last_frame_ms = now_ms;
        }
        cmd
    }

    fn resume(&mut self, now_ms: f64) -> LoopCommand {
        let cmd = self.frame_loop.resume();
        if cmd == LoopCommand::Schedule {
            self.last_frame_ms = now_ms;
        }
        cmd
    }

    /// Turn an interaction at `point` (device pixels) into a burst.
    pub fn spawn<A: AudioSink + ?Sized>(
        &mut self,
        point: DVec2,
        now_ms: f64,
        audio: &mut A,
    ) -> SpawnOutcome {
        if !self.emitter.try_accept(now_ms) {
            return SpawnOutcome::Suppressed;
        }
        if self.host.reduced_motion {
            return SpawnOutcome::Overlay { at: point };
        }

        let tier = self.tier();
        let profile = tier.profile();
        let dpi = self.host.pixel_density;
        let count = batch_size(&self.viewport, &profile);
        self.particles.reserve(count);
        for _ in 0..count {
            let p = Particle::spawn(point, &profile, dpi, &mut self.rng);
            self.particles.push(p);
        }

        let label = profile.labels && self.labels.len() < profile.label_cap;
        if label {
            self.labels
                .push(PopupLabel::new(point, self.host.label_text.as_str(), dpi));
        }

        let chimed = profile.audio;
        if chimed {
            let (width, _) = self.viewport.backing_size();
            let chime = chime_for(point.x, width as f64, &mut self.rng);
            audio.play(&chime);
        }

        log::debug!(
            "[spawn] tier={} particles+{} label={} live={}",
            tier,
            count,
            label,
            self.particles.len()
        );
        SpawnOutcome::Burst {
            particles: count,
            label,
            chimed,
        }
    }

    /// One frame: fade, advance and draw everything, feed the controller and
    /// enforce the population ceiling.
    pub fn tick<S: Surface + ?Sized>(&mut self, now_ms: f64, surface: &mut S) -> FrameReport {
        let dt_ms = (now_ms - self.last_frame_ms).max(0.0);
        self.last_frame_ms = now_ms;

        fade_trail(surface, TRAIL_FADE_ALPHA);

        let style = FrameStyle::for_profile(&self.tier().profile(), self.host.pixel_density);
        let particles_drawn = step_entities(&mut self.particles, dt_ms, surface, &style);
        let labels_drawn = step_entities(&mut self.labels, dt_ms, surface, &style);

        let tier_change = self
            .quality
            .record_frame_cost(dt_ms, self.particles.len());

        let ceiling = self.tier().profile().population_ceiling;
        let evicted = self.particles.len().saturating_sub(ceiling);
        if evicted > 0 {
            self.particles.truncate(ceiling);
            log::debug!("[sim] evicted {} particles over ceiling {}", evicted, ceiling);
        }

        FrameReport {
            dt_ms,
            particles_drawn,
            labels_drawn,
            evicted,
            tier_change,
        }
    }

    /// Tick, then decide whether the host should request another frame.
    pub fn frame<S: Surface + ?Sized>(
        &mut self,
        now_ms: f64,
        surface: &mut S,
        visible: bool,
    ) -> (FrameReport, LoopCommand) {
        let report = self.tick(now_ms, surface);
        let cmd = self.frame_loop.after_tick(visible);
        (report, cmd)
    }
}
