// watermarker/src/cli.rs
use crate::core::{WatermarkConfig, WatermarkPosition, DEFAULT_JPEG_QUALITY, DEFAULT_PADDING};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "watermarker", version, about = "Apply a watermark image to every image in a directory")]
pub struct Cli {
    /// Directory containing the images to watermark
    pub target_directory: PathBuf,

    /// Watermark image
    pub watermark_path: PathBuf,

    /// Directory to write the watermarked images to (created if missing)
    pub output_directory: PathBuf,

    /// Opacity of the watermark (0.0 to 1.0)
    #[arg(long, default_value_t = 1.0, value_parser = parse_opacity)]
    pub opacity: f32,

    /// Where to anchor the watermark. Padding is ignored for `center`
    #[arg(long, value_enum, ignore_case = true, default_value_t = Position::BottomRight)]
    pub position: Position,

    /// Distance in pixels between the watermark and the image edges
    #[arg(long, default_value_t = DEFAULT_PADDING)]
    pub padding: u32,

    /// JPEG output quality (1-100)
    #[arg(long, default_value_t = DEFAULT_JPEG_QUALITY, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub quality: u8,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Position {
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
    Center,
}

impl From<Position> for WatermarkPosition {
    fn from(position: Position) -> Self {
        match position {
            Position::BottomRight => WatermarkPosition::BottomRight,
            Position::BottomLeft => WatermarkPosition::BottomLeft,
            Position::TopRight => WatermarkPosition::TopRight,
            Position::TopLeft => WatermarkPosition::TopLeft,
            Position::Center => WatermarkPosition::Center,
        }
    }
}

impl Cli {
    pub fn config(&self) -> WatermarkConfig {
        WatermarkConfig {
            opacity: self.opacity,
            position: self.position.into(),
            padding: self.padding,
            jpeg_quality: self.quality,
        }
    }
}

fn parse_opacity(value: &str) -> Result<f32, String> {
    let opacity: f32 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;

    if !(0.0..=1.0).contains(&opacity) {
        return Err(format!("opacity must be between 0.0 and 1.0, got {}", opacity));
    }

    Ok(opacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_positionals_with_defaults() {
        let cli = Cli::try_parse_from(["watermarker", "in", "logo.png", "out"]).unwrap();

        assert_eq!(cli.target_directory, PathBuf::from("in"));
        assert_eq!(cli.watermark_path, PathBuf::from("logo.png"));
        assert_eq!(cli.output_directory, PathBuf::from("out"));

        let config = cli.config();
        assert_eq!(config.opacity, 1.0);
        assert_eq!(config.position, WatermarkPosition::BottomRight);
        assert_eq!(config.padding, 20);
        assert_eq!(config.jpeg_quality, 90);
    }

    #[test]
    fn test_missing_positional_is_rejected() {
        assert!(Cli::try_parse_from(["watermarker", "in", "logo.png"]).is_err());
    }

    #[test]
    fn test_options() {
        let cli = Cli::try_parse_from([
            "watermarker",
            "in",
            "logo.png",
            "out",
            "--opacity",
            "0.4",
            "--position",
            "Top-Left",
            "--padding",
            "5",
        ])
        .unwrap();

        let config = cli.config();
        assert_eq!(config.opacity, 0.4);
        assert_eq!(config.position, WatermarkPosition::TopLeft);
        assert_eq!(config.padding, 5);
    }

    #[test]
    fn test_out_of_range_values_are_rejected() {
        assert!(Cli::try_parse_from(["watermarker", "a", "b", "c", "--opacity", "1.2"]).is_err());
        assert!(Cli::try_parse_from(["watermarker", "a", "b", "c", "--quality", "0"]).is_err());
        assert!(Cli::try_parse_from(["watermarker", "a", "b", "c", "--position", "middle"]).is_err());
    }
}
