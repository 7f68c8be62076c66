use fireworks_core::constants::{ENVELOPE_FLOOR, ENVELOPE_TAIL, UNLOCK_TONE_SEC};
use fireworks_core::{AudioSink, Chime, Tone, Waveform};
use wasm_bindgen::JsValue;
use web_sys as web;

enum Backend {
    Pending,
    Ready(web::AudioContext),
    Unavailable,
}

/// WebAudio sink. The context is created on first use; if that fails the sink
/// stays silent for the rest of the session.
pub struct WebAudio {
    backend: Backend,
}

impl WebAudio {
    pub fn new() -> Self {
        Self {
            backend: Backend::Pending,
        }
    }

    fn context(&mut self) -> Option<&web::AudioContext> {
        if let Backend::Pending = self.backend {
            self.backend = match web::AudioContext::new() {
                Ok(ctx) => Backend::Ready(ctx),
                Err(e) => {
                    log::warn!("[audio] AudioContext unavailable, staying silent: {:?}", e);
                    Backend::Unavailable
                }
            };
        }
        match &self.backend {
            Backend::Ready(ctx) => {
                if ctx.state() == web::AudioContextState::Suspended {
                    _ = ctx.resume();
                }
                Some(ctx)
            }
            _ => None,
        }
    }
}

impl Default for WebAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioSink for WebAudio {
    fn play(&mut self, chime: &Chime) {
        let Some(ctx) = self.context() else {
            return;
        };
        let t = ctx.current_time();
        let destination = ctx.destination();
        let panner = web::StereoPannerNode::new(ctx).ok();
        if let Some(p) = &panner {
            p.pan().set_value(chime.pan as f32);
            _ = p.connect_with_audio_node(&destination);
        }
        let out: &web::AudioNode = match &panner {
            Some(p) => p,
            None => &destination,
        };
        for tone in &chime.tones {
            if let Err(e) = schedule_tone(ctx, tone, t, out) {
                log::debug!("[audio] tone dropped: {:?}", e);
            }
        }
    }

    fn unlock(&mut self) {
        let Some(ctx) = self.context() else {
            return;
        };
        if let Err(e) = silent_blip(ctx) {
            log::debug!("[audio] unlock tone dropped: {:?}", e);
        }
    }
}

fn oscillator_type(waveform: Waveform) -> web::OscillatorType {
    match waveform {
        Waveform::Sine => web::OscillatorType::Sine,
        Waveform::Triangle => web::OscillatorType::Triangle,
    }
}

fn schedule_tone(
    ctx: &web::AudioContext,
    tone: &Tone,
    t: f64,
    out: &web::AudioNode,
) -> Result<(), JsValue> {
    let osc = web::OscillatorNode::new(ctx)?;
    osc.set_type(oscillator_type(tone.waveform));
    let freq = osc.frequency();
    freq.set_value_at_time(tone.start_hz as f32, t)?;
    if let Some((target_hz, at)) = tone.sweep {
        freq.exponential_ramp_to_value_at_time(target_hz as f32, t + at)?;
    }

    let gain = web::GainNode::new(ctx)?;
    let env = gain.gain();
    env.set_value_at_time(ENVELOPE_FLOOR as f32, t)?;
    env.exponential_ramp_to_value_at_time(tone.peak_gain as f32, t + tone.attack_sec)?;
    env.exponential_ramp_to_value_at_time(ENVELOPE_TAIL as f32, t + tone.decay_sec)?;

    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(out)?;
    osc.start_with_when(t)?;
    osc.stop_with_when(t + tone.stop_sec)?;
    Ok(())
}

// Zero-gain tone played from a user gesture so later chimes are allowed.
fn silent_blip(ctx: &web::AudioContext) -> Result<(), JsValue> {
    let t = ctx.current_time();
    let osc = web::OscillatorNode::new(ctx)?;
    let gain = web::GainNode::new(ctx)?;
    gain.gain().set_value_at_time(0.0, t)?;
    osc.connect_with_audio_node(&gain)?;
    gain.connect_with_audio_node(&ctx.destination())?;
    osc.start_with_when(t)?;
    osc.stop_with_when(t + UNLOCK_TONE_SEC)?;
    Ok(())
}
