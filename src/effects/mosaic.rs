//! Downscale-then-upscale pixelation.

use image::{RgbaImage, imageops::FilterType};

/// Box-average `img` into `(max(1, w / block), max(1, h / block))` cells, then blow it
/// back up to `w × h` with nearest-neighbour sampling so the blocks stay hard-edged.
pub fn pixelate(img: &RgbaImage, block: u32) -> RgbaImage {
    let block = block.max(1);
    let (w, h) = img.dimensions();
    if block == 1 || w == 0 || h == 0 {
        return img.clone();
    }
    let small = area_downscale(img, (w / block).max(1), (h / block).max(1));
    image::imageops::resize(&small, w, h, FilterType::Nearest)
}

/// Exact area average: every source pixel lands in exactly one destination cell.
pub fn area_downscale(img: &RgbaImage, dst_w: u32, dst_h: u32) -> RgbaImage {
    let (w, h) = img.dimensions();
    let dst_w = dst_w.clamp(1, w.max(1));
    let dst_h = dst_h.clamp(1, h.max(1));
    let src = img.as_raw();
    let stride = w as usize * 4;

    let mut out = RgbaImage::new(dst_w, dst_h);
    for cy in 0..dst_h {
        let y0 = (u64::from(cy) * u64::from(h) / u64::from(dst_h)) as usize;
        let y1 = (u64::from(cy + 1) * u64::from(h) / u64::from(dst_h)) as usize;
        for cx in 0..dst_w {
            let x0 = (u64::from(cx) * u64::from(w) / u64::from(dst_w)) as usize;
            let x1 = (u64::from(cx + 1) * u64::from(w) / u64::from(dst_w)) as usize;

            let mut acc = [0u64; 4];
            for y in y0..y1 {
                let row = &src[y * stride + x0 * 4..y * stride + x1 * 4];
                for px in row.chunks_exact(4) {
                    for (a, &c) in acc.iter_mut().zip(px) {
                        *a += u64::from(c);
                    }
                }
            }
            let n = ((x1 - x0) * (y1 - y0)).max(1) as u64;
            let px = out.get_pixel_mut(cx, cy);
            for (o, a) in px.0.iter_mut().zip(acc) {
                *o = ((a + n / 2) / n) as u8;
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mosaic.rs"]
mod tests;
