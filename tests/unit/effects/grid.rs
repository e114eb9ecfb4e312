use super::*;

fn black(w: u32, h: u32) -> RgbaImage {
    RgbaImage::from_pixel(w, h, image::Rgba([0, 0, 0, 255]))
}

fn style(spacing: u32, alpha: u8) -> GridStyle {
    GridStyle {
        spacing,
        alpha,
        min_spacing: 6,
    }
}

#[test]
fn lines_land_on_multiples_of_spacing() {
    let mut img = black(20, 20);
    overlay_grid_in_place(&mut img, style(8, 255));
    for x in [0u32, 8, 16] {
        assert_eq!(img.get_pixel(x, 5).0, [160, 195, 255, 255]);
    }
    for y in [0u32, 8, 16] {
        assert_eq!(img.get_pixel(5, y).0, [160, 195, 255, 255]);
    }
    assert_eq!(img.get_pixel(5, 5).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(9, 17).0, [0, 0, 0, 255]);
}

#[test]
fn crossings_are_blended_once() {
    let mut img = black(10, 10);
    overlay_grid_in_place(&mut img, style(6, 70));
    assert_eq!(img.get_pixel(6, 6).0, img.get_pixel(6, 3).0);
    assert_eq!(img.get_pixel(6, 3).0, img.get_pixel(3, 6).0);
}

#[test]
fn partial_alpha_mixes_with_underlying() {
    let mut img = black(8, 8);
    overlay_grid_in_place(&mut img, style(6, 70));
    let px = img.get_pixel(0, 3).0;
    assert_eq!(px[0], mul_div255_u8(160, 70));
    assert_eq!(px[2], mul_div255_u8(255, 70));
}

#[test]
fn skipped_below_min_spacing_or_zero_alpha() {
    let mut img = black(12, 12);
    overlay_grid_in_place(&mut img, style(5, 255));
    overlay_grid_in_place(&mut img, style(8, 0));
    assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 255]));
}
