pub mod page;
pub mod pointer;

pub use page::{wire_audio_unlock, wire_resize, wire_visibility};
pub use pointer::wire_pointer;
