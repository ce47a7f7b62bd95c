// watermarker/src/core/mod.rs
pub mod applier;

use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_OPACITY: f32 = 1.0;
pub const DEFAULT_PADDING: u32 = 20;
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Corner or center anchor for the watermark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WatermarkPosition {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
    Center,
}

impl WatermarkPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            WatermarkPosition::BottomRight => "bottom-right",
            WatermarkPosition::BottomLeft => "bottom-left",
            WatermarkPosition::TopRight => "top-right",
            WatermarkPosition::TopLeft => "top-left",
            WatermarkPosition::Center => "center",
        }
    }
}

impl std::fmt::Display for WatermarkPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WatermarkPosition {
    type Err = WatermarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "bottom-right" => Ok(WatermarkPosition::BottomRight),
            "bottom-left" => Ok(WatermarkPosition::BottomLeft),
            "top-right" => Ok(WatermarkPosition::TopRight),
            "top-left" => Ok(WatermarkPosition::TopLeft),
            "center" => Ok(WatermarkPosition::Center),
            other => Err(WatermarkError::InvalidParameter(format!(
                "Unknown watermark position: {}",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct WatermarkConfig {
    /// Multiplier applied to the watermark's alpha channel, 0.0 to 1.0.
    pub opacity: f32,
    pub position: WatermarkPosition,
    /// Distance in pixels from the anchored edges. Ignored for `Center`.
    pub padding: u32,
    pub jpeg_quality: u8,
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            opacity: DEFAULT_OPACITY,
            position: WatermarkPosition::default(),
            padding: DEFAULT_PADDING,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

impl WatermarkConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.opacity.is_finite() || !(0.0..=1.0).contains(&self.opacity) {
            return Err(WatermarkError::InvalidParameter(format!(
                "Opacity must be between 0.0 and 1.0, got {}",
                self.opacity
            )));
        }

        if self.jpeg_quality == 0 || self.jpeg_quality > 100 {
            return Err(WatermarkError::InvalidParameter(
                "Quality must be between 1 and 100".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ApplyStats {
    pub processed_count: usize,
    pub skipped: Vec<(PathBuf, String)>,
    pub bytes_written: u64,
}

impl ApplyStats {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

#[derive(Error, Debug)]
pub enum WatermarkError {
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Failed to decode image {}: {reason}", path.display())]
    ImageDecode { path: PathBuf, reason: String },

    #[error("Failed to write image {}: {reason}", path.display())]
    ImageWrite { path: PathBuf, reason: String },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl WatermarkError {
    /// Errors that only affect the current file during a directory run.
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            WatermarkError::ImageDecode { .. } | WatermarkError::UnsupportedFormat(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, WatermarkError>;
