use image::RgbaImage;

use crate::foundation::{
    error::{RevealError, RevealResult},
    math::{lerp_u8, scale_u8},
};

/// Uniform brightness multiplier, saturating at 0 and 255. Alpha is left untouched.
pub fn brighten_in_place(img: &mut RgbaImage, factor: f64) {
    if factor == 1.0 {
        return;
    }
    for px in img.chunks_exact_mut(4) {
        px[0] = scale_u8(px[0], factor);
        px[1] = scale_u8(px[1], factor);
        px[2] = scale_u8(px[2], factor);
    }
}

/// `dst = dst * (1 - t) + src * t` over equal-sized RGBA8 buffers.
pub fn crossfade_in_place(dst: &mut RgbaImage, src: &RgbaImage, t: f32) -> RevealResult<()> {
    if dst.dimensions() != src.dimensions() {
        return Err(RevealError::render(
            "crossfade_in_place expects equal-sized rgba8 images",
        ));
    }
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return Ok(());
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.as_raw().chunks_exact(4)) {
        for i in 0..4 {
            d[i] = lerp_u8(d[i], s[i], t);
        }
    }
    Ok(())
}

/// Blend every pixel toward a solid colour by `t`.
pub fn tint_in_place(img: &mut RgbaImage, rgb: [u8; 3], t: f32) {
    let t = t.clamp(0.0, 1.0);
    if t <= 0.0 {
        return;
    }
    for px in img.chunks_exact_mut(4) {
        for i in 0..3 {
            px[i] = lerp_u8(px[i], rgb[i], t);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
