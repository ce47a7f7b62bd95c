// watermarker/src/processors/watermark.rs
use crate::core::{Result, WatermarkError};
use crate::processors::Loader;
use image::RgbaImage;
use std::path::Path;

/// The watermark, decoded once and kept in RGBA with opacity applied.
#[derive(Debug, Clone)]
pub struct Watermark {
    image: RgbaImage,
}

impl Watermark {
    pub fn load(path: &Path, opacity: f32) -> Result<Self> {
        if !path.is_file() {
            return Err(WatermarkError::InvalidPath(format!(
                "Watermark file does not exist: {}",
                path.display()
            )));
        }

        let loaded = Loader::new().load(path)?;
        let watermark = Self::from_rgba(loaded.image.to_rgba8(), opacity);

        log::info!(
            "Loaded watermark {} ({}x{}, opacity {:.2})",
            path.display(),
            watermark.width(),
            watermark.height(),
            opacity
        );

        Ok(watermark)
    }

    pub fn from_rgba(mut image: RgbaImage, opacity: f32) -> Self {
        adjust_opacity(&mut image, opacity);
        Self { image }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Scale every pixel's alpha by `opacity`.
pub fn adjust_opacity(image: &mut RgbaImage, opacity: f32) {
    let opacity = opacity.clamp(0.0, 1.0);
    if opacity >= 1.0 {
        return;
    }

    for pixel in image.pixels_mut() {
        pixel[3] = (pixel[3] as f32 * opacity).round() as u8;
    }
}
