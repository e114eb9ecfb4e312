use super::*;

fn gradient(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_fn(w, h, |x, y| {
        image::Rgba([(x * 16) as u8, (y * 16) as u8, ((x + y) * 8) as u8, 255])
    })
}

#[test]
fn block_one_is_identity() {
    let img = gradient(7, 5);
    assert_eq!(pixelate(&img, 1), img);
    assert_eq!(pixelate(&img, 0), img);
}

#[test]
fn dimensions_are_preserved() {
    let img = gradient(13, 9);
    for block in [2, 3, 4, 8, 32] {
        assert_eq!(pixelate(&img, block).dimensions(), (13, 9));
    }
}

#[test]
fn blocks_are_uniform_averages() {
    // 4x4 with 2px blocks: each 2x2 quadrant collapses to its mean.
    let img = gradient(4, 4);
    let out = pixelate(&img, 2);
    for (qx, qy) in [(0u32, 0u32), (2, 0), (0, 2), (2, 2)] {
        let expect = out.get_pixel(qx, qy).0;
        for dy in 0..2 {
            for dx in 0..2 {
                assert_eq!(out.get_pixel(qx + dx, qy + dy).0, expect);
            }
        }
    }
    // Top-left quadrant red channel: (0 + 16 + 0 + 16) / 4 = 8.
    assert_eq!(out.get_pixel(0, 0).0[0], 8);
}

#[test]
fn oversized_block_collapses_to_single_mean() {
    let img = RgbaImage::from_fn(2, 2, |x, _| {
        if x == 0 {
            image::Rgba([0, 0, 0, 255])
        } else {
            image::Rgba([200, 100, 50, 255])
        }
    });
    let out = pixelate(&img, 64);
    for px in out.pixels() {
        assert_eq!(px.0, [100, 50, 25, 255]);
    }
}

#[test]
fn area_downscale_clamps_target_size() {
    let img = gradient(3, 3);
    assert_eq!(area_downscale(&img, 0, 10).dimensions(), (1, 3));
}
