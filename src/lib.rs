mod cli;
mod core;
mod processors;
mod utils;

pub use cli::{Cli, Position};
pub use crate::core::applier::{apply, WatermarkApplier};
pub use crate::core::{
    ApplyStats, Result, WatermarkConfig, WatermarkError, WatermarkPosition, DEFAULT_JPEG_QUALITY,
    DEFAULT_OPACITY, DEFAULT_PADDING,
};
pub use processors::{
    adjust_opacity, calculate_position, Compositor, LoadedImage, Loader, Placement, Watermark,
    Writer,
};
pub use utils::{format_file_size, output_path_for};

pub mod prelude {
    pub use crate::{
        WatermarkApplier, WatermarkConfig, WatermarkError, WatermarkPosition, Compositor, Loader,
        Watermark, Writer,
    };
}

// Re-export commonly used types
pub use image::DynamicImage;
