// Page wiring constants for the browser front-end.

// Element and attributes
pub const CANVAS_ID: &str = "fireworks";
pub const DATA_LABEL_ATTR: &str = "data-label";
pub const DATA_QUALITY_ATTR: &str = "data-quality";

// Media query honoured as "reduced motion preferred"
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// Fired by the in-app browser once its JS bridge can play audio
pub const IN_APP_BRIDGE_READY_EVENT: &str = "WeixinJSBridgeReady";

// Reduced-motion text overlay
pub const OVERLAY_LIFETIME_MS: i32 = 800;
pub const OVERLAY_TRANSITION: &str = "opacity 600ms ease, transform 600ms ease";
pub const OVERLAY_TRANSFORM_START: &str = "translate(-50%, -50%)";
pub const OVERLAY_TRANSFORM_END: &str = "translate(-50%, -60%)";
pub const OVERLAY_COLOR: &str = "#fff";
pub const OVERLAY_FONT_SIZE: &str = "20px";
pub const OVERLAY_Z_INDEX: &str = "2";
