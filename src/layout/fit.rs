//! Fit-to-viewport geometry.

use image::{RgbaImage, imageops::FilterType};

use crate::foundation::core::{Affine, Rect, Vec2, Viewport};

/// Shrink `img` to fit inside `bounds`, keeping aspect ratio. Never upscales.
pub fn fit_within(img: &RgbaImage, bounds: Viewport) -> RgbaImage {
    let bounds = bounds.clamped();
    let (w, h) = img.dimensions();
    let (w, h) = (w.max(1), h.max(1));
    let scale = (f64::from(bounds.width) / f64::from(w))
        .min(f64::from(bounds.height) / f64::from(h))
        .min(1.0);
    let nw = ((f64::from(w) * scale) as u32).max(1);
    let nh = ((f64::from(h) * scale) as u32).max(1);
    fit_exact(img, nw, nh)
}

/// Resample `img` to exactly `width × height` (at least 1×1).
pub fn fit_exact(img: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    let (width, height) = (width.max(1), height.max(1));
    if img.dimensions() == (width, height) {
        return img.clone();
    }
    if img.width() == 0 || img.height() == 0 {
        return RgbaImage::from_pixel(width, height, image::Rgba([0, 0, 0, 255]));
    }
    image::imageops::resize(img, width, height, FilterType::Lanczos3)
}

/// Where a frame lands inside the viewport: scaled uniformly and centred.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    pub viewport: Viewport,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub scale: f64,
}

impl Placement {
    pub fn fit(frame_width: u32, frame_height: u32, viewport: Viewport) -> Self {
        let vp = viewport.clamped();
        let (fw, fh) = (frame_width.max(1), frame_height.max(1));
        let scale = (f64::from(vp.width) / f64::from(fw)).min(f64::from(vp.height) / f64::from(fh));
        let width = ((f64::from(fw) * scale) as u32).max(1);
        let height = ((f64::from(fh) * scale) as u32).max(1);
        Self {
            viewport,
            x: vp.width.saturating_sub(width) / 2,
            y: vp.height.saturating_sub(height) / 2,
            width,
            height,
            scale,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.x) + f64::from(self.width),
            f64::from(self.y) + f64::from(self.height),
        )
    }

    /// Maps frame pixel space into viewport space.
    pub fn to_affine(&self) -> Affine {
        Affine::translate(Vec2::new(f64::from(self.x), f64::from(self.y)))
            * Affine::scale(self.scale)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
