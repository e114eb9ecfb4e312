//! Presentation surfaces the engine hands finished frames to.

use image::{RgbaImage, imageops::FilterType};

use crate::{foundation::error::RevealResult, layout::fit::Placement};

pub mod memory;
pub mod png;

/// How a presenter should scale the frame into its placement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ResampleHint {
    /// Keep mosaic blocks hard-edged.
    Nearest,
    Smooth,
}

impl ResampleHint {
    pub fn filter(self) -> FilterType {
        match self {
            Self::Nearest => FilterType::Nearest,
            Self::Smooth => FilterType::Lanczos3,
        }
    }
}

/// Destination of rendered frames. Any error is treated as the surface being gone:
/// the engine stops and never calls the presenter again.
pub trait Presenter {
    fn present(
        &mut self,
        frame: &RgbaImage,
        placement: &Placement,
        hint: ResampleHint,
    ) -> RevealResult<()>;
}

/// Letterbox `frame` into a viewport-sized canvas filled with `background`.
pub fn compose_letterboxed(
    frame: &RgbaImage,
    placement: &Placement,
    hint: ResampleHint,
    background: [u8; 4],
) -> RgbaImage {
    let vp = placement.viewport.clamped();
    let mut canvas = RgbaImage::from_pixel(vp.width, vp.height, image::Rgba(background));
    let scaled;
    let frame = if frame.dimensions() == (placement.width, placement.height) {
        frame
    } else {
        scaled = image::imageops::resize(frame, placement.width, placement.height, hint.filter());
        &scaled
    };
    image::imageops::overlay(
        &mut canvas,
        frame,
        i64::from(placement.x),
        i64::from(placement.y),
    );
    canvas
}

#[cfg(test)]
#[path = "../tests/unit/present/compose.rs"]
mod tests;
