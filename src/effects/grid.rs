use image::RgbaImage;

use crate::foundation::math::mul_div255_u8;

pub const GRID_RGB: [u8; 3] = [160, 195, 255];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridStyle {
    pub spacing: u32,
    pub alpha: u8,
    pub min_spacing: u32,
}

impl GridStyle {
    pub fn is_visible(self) -> bool {
        self.spacing >= self.min_spacing && self.spacing > 0 && self.alpha > 0
    }
}

/// 1px lines on every column and row that is a multiple of `spacing`, starting at 0.
/// Crossings are blended once, not twice.
pub fn overlay_grid_in_place(img: &mut RgbaImage, style: GridStyle) {
    if !style.is_visible() {
        return;
    }
    let a = u16::from(style.alpha);
    let inv = 255 - a;
    let step = style.spacing;
    let w = img.width();
    for (i, px) in img.chunks_exact_mut(4).enumerate() {
        let x = (i as u64 % u64::from(w)) as u32;
        let y = (i as u64 / u64::from(w)) as u32;
        if !x.is_multiple_of(step) && !y.is_multiple_of(step) {
            continue;
        }
        for (c, &g) in px.iter_mut().zip(&GRID_RGB) {
            let line = mul_div255_u8(u16::from(g), a);
            let under = mul_div255_u8(u16::from(*c), inv);
            *c = line.saturating_add(under);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/grid.rs"]
mod tests;
