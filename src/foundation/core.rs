use image::{DynamicImage, RgbaImage};

use crate::foundation::error::{RevealError, RevealResult};

pub use kurbo::{Affine, Rect, Vec2};

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> RevealResult<Self> {
        if den == 0 {
            return Err(RevealError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(RevealError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Whole milliseconds between ticks, truncated like a GUI timer would be, never 0.
    pub fn frame_interval_ms(self) -> u32 {
        let ms = (1000u64 * u64::from(self.den)) / u64::from(self.num);
        ms.clamp(1, u64::from(u32::MAX)) as u32
    }
}

/// Available drawing area of the presentation surface, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn clamped(self) -> Self {
        Self {
            width: self.width.max(1),
            height: self.height.max(1),
        }
    }
}

impl std::str::FromStr for Viewport {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .trim()
            .split_once(['x', 'X'])
            .ok_or_else(|| RevealError::validation(format!("viewport '{s}' must be WxH")))?;
        let parse = |v: &str| {
            v.trim()
                .parse::<u32>()
                .map_err(|_| RevealError::validation(format!("viewport '{s}' must be WxH")))
        };
        Ok(Self::new(parse(w)?, parse(h)?))
    }
}

/// Drop alpha: every frame the engine produces is opaque.
pub fn to_opaque_rgba8(img: &DynamicImage) -> RgbaImage {
    let mut rgba = img.to_rgba8();
    for px in rgba.pixels_mut() {
        px.0[3] = 255;
    }
    rgba
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
