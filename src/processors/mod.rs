// watermarker/src/processors/mod.rs
mod compositor;
mod loader;
pub mod position;
mod watermark;
mod writer;

pub use compositor::Compositor;
pub use loader::{LoadedImage, Loader};
pub use position::{calculate_position, Placement};
pub use watermark::{adjust_opacity, Watermark};
pub use writer::Writer;
