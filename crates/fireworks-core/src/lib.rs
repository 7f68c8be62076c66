//! Host-agnostic core of the fireworks effect: entity models, adaptive quality
//! control, emission and the per-frame loop body.
//!
//! Nothing here touches the browser. Drawing goes through [`Surface`], sound
//! through [`AudioSink`], and scheduling decisions come back as
//! [`LoopCommand`] values for the front-end to carry out.

pub mod audio;
pub mod color;
pub mod config;
pub mod constants;
pub mod emitter;
pub mod entity;
pub mod lifecycle;
pub mod quality;
pub mod sim;
pub mod surface;
pub mod tier;

pub use audio::{chime_for, AudioSink, Chime, Silent, Tone, Waveform};
pub use color::Hsla;
pub use config::{HostProfile, Viewport};
pub use emitter::{batch_size, Emitter, SpawnOutcome};
pub use entity::{step_entities, Entity, FrameStyle, Particle, PopupLabel};
pub use lifecycle::{FrameLoop, LoopCommand, LoopState, ResizeGate};
pub use quality::{QualityController, TierChange};
pub use sim::{FrameReport, Simulation};
pub use surface::{fade_trail, Composite, Surface};
pub use tier::{QualityTier, TierProfile};
