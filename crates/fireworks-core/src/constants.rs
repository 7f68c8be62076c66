// Simulation and quality-control tuning shared by every front-end.

// Fixed scale from raw millisecond deltas to simulation steps (≈1.0 at 60 Hz)
pub const TIME_SCALE: f64 = 0.06;

// Particle launch
pub const GRAVITY: f64 = 0.06;
pub const LAUNCH_SPEED_MIN: f64 = 3.6;
pub const LAUNCH_SPEED_MAX: f64 = 7.2;
pub const PALETTE_HUES: [f64; 8] = [0.0, 30.0, 60.0, 120.0, 180.0, 220.0, 260.0, 300.0];
pub const HUE_JITTER: f64 = 10.0;
pub const PARTICLE_SATURATION: f64 = 85.0;
pub const PARTICLE_LIGHTNESS: f64 = 64.0;
pub const GLOW_ALPHA_MAX: f64 = 0.9;
pub const GLOW_BLUR_PER_DPI: f64 = 6.0;

// Popup label motion
pub const LABEL_RISE_PER_DPI: f64 = -0.6;
pub const LABEL_GROWTH_PER_MS: f64 = 0.008;
pub const LABEL_DECAY: f64 = 0.02;
pub const LABEL_FONT_PX: f64 = 16.0;
pub const LABEL_LINE_WIDTH: f64 = 1.2;
pub const LABEL_FILL: &str = "#d75a8f";
pub const LABEL_STROKE: &str = "rgba(180, 70, 120, 0.45)";
pub const LABEL_FONT_FAMILY: &str = "\"Comic Neue\", \"Comic Sans MS\", \"Chalkboard SE\", system-ui, -apple-system, Segoe UI, Microsoft YaHei, sans-serif";
pub const DEFAULT_LABEL_TEXT: &str = "我爱小璐子";

// Emission
pub const SPAWN_COOLDOWN_MS: f64 = 240.0;
pub const BATCH_NARROW: usize = 24;
pub const BATCH_WIDE: usize = 50;

// Quality controller
pub const STRESS_FRAME_MS: f64 = 22.0;
pub const COMFORT_FRAME_MS: f64 = 16.0;
pub const HEADROOM_PARTICLES: usize = 100;
pub const SCORE_LIMIT: i32 = 10;
pub const SCORE_TRIGGER: i32 = 4;

// Trail fade applied with an erase blend each frame
pub const TRAIL_FADE_ALPHA: f64 = 0.18;

// Viewport
pub const MIN_CSS_EXTENT: f64 = 320.0;
pub const NARROW_CSS_WIDTH: f64 = 480.0;
pub const MAX_PIXEL_DENSITY: f64 = 2.0;

// Chime synthesis (seconds / hertz)
pub const CHIME_BASE_HZ: f64 = 700.0;
pub const CHIME_BASE_SPREAD_HZ: f64 = 300.0;
pub const CHIME_SWEEP_RATIO: f64 = 1.6;
pub const CHIME_SWEEP_SEC: f64 = 0.08;
pub const CHIME_ATTACK_SEC: f64 = 0.02;
pub const CHIME_ACCENT_RATIO: f64 = 2.2;
pub const CHIME_PAN_SPAN: f64 = 0.8;
pub const ENVELOPE_FLOOR: f64 = 0.0001;
pub const ENVELOPE_TAIL: f64 = 0.001;
pub const UNLOCK_TONE_SEC: f64 = 0.01;
