//! Chime synthesis plans. The core decides what to play; an [`AudioSink`]
//! turns the plan into real oscillators and never reports back.

use crate::constants::*;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// One oscillator with an exponential attack/decay gain envelope. Times are
/// seconds relative to the moment the chime is scheduled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub waveform: Waveform,
    pub start_hz: f64,
    /// Exponential pitch sweep target and the time it is reached.
    pub sweep: Option<(f64, f64)>,
    pub peak_gain: f64,
    pub attack_sec: f64,
    pub decay_sec: f64,
    pub stop_sec: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Chime {
    /// Stereo position in [-1, 1]; spawns map into roughly ±0.4.
    pub pan: f64,
    pub tones: [Tone; 2],
}

/// Fire-and-forget tone output. Implementations swallow every failure.
pub trait AudioSink {
    fn play(&mut self, chime: &Chime);
    /// Issue the one-time silent tone that unlocks audio on restrictive hosts.
    fn unlock(&mut self);
}

/// Sink for hosts without sound.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl AudioSink for Silent {
    fn play(&mut self, _chime: &Chime) {}
    fn unlock(&mut self) {}
}

#[inline]
pub fn pan_for(x: f64, surface_width: f64) -> f64 {
    if surface_width <= 0.0 {
        return 0.0;
    }
    ((x / surface_width).clamp(0.0, 1.0) - 0.5) * CHIME_PAN_SPAN
}

/// Bubble sweep plus a brighter triangle accent, panned toward `x`.
pub fn chime_for<R: Rng>(x: f64, surface_width: f64, rng: &mut R) -> Chime {
    let f0 = CHIME_BASE_HZ + rng.gen::<f64>() * CHIME_BASE_SPREAD_HZ;
    let bubble = Tone {
        waveform: Waveform::Sine,
        start_hz: f0,
        sweep: Some((f0 * CHIME_SWEEP_RATIO, CHIME_SWEEP_SEC)),
        peak_gain: 0.35,
        attack_sec: CHIME_ATTACK_SEC,
        decay_sec: 0.35,
        stop_sec: 0.4,
    };
    let accent = Tone {
        waveform: Waveform::Triangle,
        start_hz: f0 * CHIME_ACCENT_RATIO,
        sweep: None,
        peak_gain: 0.25,
        attack_sec: CHIME_ATTACK_SEC,
        decay_sec: 0.25,
        stop_sec: 0.3,
    };
    Chime {
        pan: pan_for(x, surface_width),
        tones: [bubble, accent],
    }
}
