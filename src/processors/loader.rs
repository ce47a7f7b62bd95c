// watermarker/src/processors/loader.rs
use crate::core::{Result, WatermarkError};
use image::{DynamicImage, GenericImageView, ImageFormat, ImageReader};
use std::path::Path;

/// A decoded target image together with the format it was read from.
pub struct LoadedImage {
    pub image: DynamicImage,
    pub format: ImageFormat,
}

#[derive(Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<LoadedImage> {
        log::debug!("Loading image from: {}", path.display());

        self.validate_path(path)?;

        let decode_error = |reason: String| WatermarkError::ImageDecode {
            path: path.to_path_buf(),
            reason,
        };

        let reader = ImageReader::open(path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| decode_error(e.to_string()))?;

        let format = reader
            .format()
            .ok_or_else(|| decode_error("unrecognized image format".to_string()))?;

        let image = reader.decode().map_err(|e| decode_error(e.to_string()))?;

        let (width, height) = image.dimensions();
        log::debug!(
            "Loaded image: {}x{} pixels, color: {:?}, format: {:?}",
            width,
            height,
            image.color(),
            format
        );

        Ok(LoadedImage { image, format })
    }

    fn validate_path(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(WatermarkError::InvalidPath(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if path.metadata()?.len() == 0 {
            return Err(WatermarkError::ImageDecode {
                path: path.to_path_buf(),
                reason: "file is empty".to_string(),
            });
        }

        Ok(())
    }
}
