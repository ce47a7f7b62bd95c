// watermarker/src/processors/compositor.rs
use crate::core::WatermarkPosition;
use crate::processors::position::{calculate_position, fits, Placement};
use crate::processors::Watermark;
use image::imageops::overlay;
use image::DynamicImage;

pub struct Compositor {
    position: WatermarkPosition,
    padding: u32,
}

impl Compositor {
    pub fn new(position: WatermarkPosition, padding: u32) -> Self {
        Self { position, padding }
    }

    /// Blend the watermark onto `target`. The result keeps the target's color
    /// type, and pixels outside the watermark are left untouched.
    pub fn composite(&self, target: &DynamicImage, watermark: &Watermark) -> DynamicImage {
        let dimensions = (target.width(), target.height());
        let mark = (watermark.width(), watermark.height());

        if !fits(dimensions, mark, self.padding) {
            log::warn!(
                "Image {}x{} is too small for a {}x{} watermark with {}px padding, it will be clipped",
                dimensions.0,
                dimensions.1,
                mark.0,
                mark.1,
                self.padding
            );
        }

        let placement = calculate_position(self.position, dimensions, mark, self.padding);
        log::debug!(
            "Placing watermark at ({}, {}) [{}]",
            placement.x,
            placement.y,
            self.position
        );

        composite_native(target, watermark, placement)
    }
}

/// Overlay at the target's own bit depth. Every target goes through the RGBA
/// buffer of that depth and back, which is lossless for gray and RGB pixels
/// the watermark does not cover.
fn composite_native(
    target: &DynamicImage,
    watermark: &Watermark,
    placement: Placement,
) -> DynamicImage {
    let top = DynamicImage::ImageRgba8(watermark.image().clone());
    let (x, y) = (placement.x, placement.y);
    let has_alpha = target.color().has_alpha();

    match target {
        DynamicImage::ImageLuma8(_) | DynamicImage::ImageLumaA8(_) => {
            let mut canvas = target.to_rgba8();
            overlay(&mut canvas, watermark.image(), x, y);
            let canvas = DynamicImage::ImageRgba8(canvas);
            if has_alpha {
                DynamicImage::ImageLumaA8(canvas.to_luma_alpha8())
            } else {
                DynamicImage::ImageLuma8(canvas.to_luma8())
            }
        }
        DynamicImage::ImageLuma16(_) | DynamicImage::ImageLumaA16(_) => {
            let mut canvas = target.to_rgba16();
            overlay(&mut canvas, &top.to_rgba16(), x, y);
            let canvas = DynamicImage::ImageRgba16(canvas);
            if has_alpha {
                DynamicImage::ImageLumaA16(canvas.to_luma_alpha16())
            } else {
                DynamicImage::ImageLuma16(canvas.to_luma16())
            }
        }
        DynamicImage::ImageRgb16(_) | DynamicImage::ImageRgba16(_) => {
            let mut canvas = target.to_rgba16();
            overlay(&mut canvas, &top.to_rgba16(), x, y);
            let canvas = DynamicImage::ImageRgba16(canvas);
            if has_alpha {
                canvas
            } else {
                DynamicImage::ImageRgb16(canvas.to_rgb16())
            }
        }
        DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_) => {
            let mut canvas = target.to_rgba32f();
            overlay(&mut canvas, &top.to_rgba32f(), x, y);
            let canvas = DynamicImage::ImageRgba32F(canvas);
            if has_alpha {
                canvas
            } else {
                DynamicImage::ImageRgb32F(canvas.to_rgb32f())
            }
        }
        _ => {
            let mut canvas = target.to_rgba8();
            overlay(&mut canvas, watermark.image(), x, y);
            let canvas = DynamicImage::ImageRgba8(canvas);
            if has_alpha {
                canvas
            } else {
                DynamicImage::ImageRgb8(canvas.to_rgb8())
            }
        }
    }
}
