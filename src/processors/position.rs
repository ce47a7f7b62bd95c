//! Placement of the watermark on a target image.
//!
//! Corner anchors keep `padding` pixels between the watermark and the two
//! nearest edges, clamped so the watermark never starts left of or above the
//! target. `Center` ignores padding and may return negative coordinates when
//! the watermark is larger than the target; the compositor clips those.

use crate::core::WatermarkPosition;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub x: i64,
    pub y: i64,
}

impl Placement {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

pub fn calculate_position(
    position: WatermarkPosition,
    target: (u32, u32),
    watermark: (u32, u32),
    padding: u32,
) -> Placement {
    let (target_w, target_h) = (target.0 as i64, target.1 as i64);
    let (wm_w, wm_h) = (watermark.0 as i64, watermark.1 as i64);
    let p = padding as i64;

    let right = (target_w - wm_w - p).max(0);
    let bottom = (target_h - wm_h - p).max(0);

    match position {
        WatermarkPosition::BottomRight => Placement::new(right, bottom),
        WatermarkPosition::BottomLeft => Placement::new(p, bottom),
        WatermarkPosition::TopRight => Placement::new(right, p),
        WatermarkPosition::TopLeft => Placement::new(p, p),
        WatermarkPosition::Center => {
            Placement::new((target_w - wm_w).div_euclid(2), (target_h - wm_h).div_euclid(2))
        }
    }
}

/// Whether the target leaves room for the watermark plus padding on every side.
pub fn fits(target: (u32, u32), watermark: (u32, u32), padding: u32) -> bool {
    let needed_w = watermark.0 as u64 + 2 * padding as u64;
    let needed_h = watermark.1 as u64 + 2 * padding as u64;
    target.0 as u64 >= needed_w && target.1 as u64 >= needed_h
}
