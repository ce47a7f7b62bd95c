// watermarker/src/processors/writer.rs
use crate::core::{Result, WatermarkError};
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageError, ImageFormat};
use std::io::Cursor;
use std::path::Path;

pub struct Writer {
    jpeg_quality: u8,
}

impl Writer {
    pub fn new(jpeg_quality: u8) -> Self {
        Self {
            jpeg_quality: jpeg_quality.clamp(1, 100),
        }
    }

    /// Encode in memory, then write the whole file at once. Returns the number
    /// of bytes written.
    pub fn save(&self, image: &DynamicImage, path: &Path, format: ImageFormat) -> Result<u64> {
        log::debug!(
            "Saving image to {} with format {:?}",
            path.display(),
            format
        );

        let data = self.encode(image, format)?;

        std::fs::write(path, &data).map_err(|e| WatermarkError::ImageWrite {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        log::debug!("Saved image: {} ({} bytes)", path.display(), data.len());
        Ok(data.len() as u64)
    }

    pub fn encode(&self, image: &DynamicImage, format: ImageFormat) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());

        let result = match format {
            ImageFormat::Jpeg => {
                let encoder = JpegEncoder::new_with_quality(&mut buffer, self.jpeg_quality);
                image.write_with_encoder(encoder)
            }
            _ => image.write_to(&mut buffer, format),
        };

        result.map_err(|e| match e {
            ImageError::IoError(io) => WatermarkError::Io(io),
            other => WatermarkError::UnsupportedFormat(format!(
                "cannot encode {:?} as {:?}: {}",
                image.color(),
                format,
                other
            )),
        })?;

        Ok(buffer.into_inner())
    }
}
