use image::RgbaImage;

use crate::effects::composite::tint_in_place;

/// Opacity of the white flash at its first frame.
pub const FLASH_PEAK_OPACITY: f32 = 0.25;

/// Linear decay from [`FLASH_PEAK_OPACITY`] down to 0 as `left_ms` runs out.
pub fn flash_opacity(left_ms: u32, duration_ms: u32) -> f32 {
    if left_ms == 0 {
        return 0.0;
    }
    let a = (f64::from(left_ms) / f64::from(duration_ms.max(1))).clamp(0.0, 1.0);
    FLASH_PEAK_OPACITY * a as f32
}

pub fn apply_flash_in_place(img: &mut RgbaImage, left_ms: u32, duration_ms: u32) {
    tint_in_place(img, [255, 255, 255], flash_opacity(left_ms, duration_ms));
}

#[cfg(test)]
#[path = "../../tests/unit/effects/flash.rs"]
mod tests;
