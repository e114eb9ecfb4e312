use super::*;
use crate::foundation::core::Viewport;

#[test]
fn letterbox_centres_frame_on_background() {
    let frame = RgbaImage::from_pixel(2, 1, image::Rgba([255, 0, 0, 255]));
    let placement = Placement::fit(2, 1, Viewport::new(4, 4));
    let out = compose_letterboxed(&frame, &placement, ResampleHint::Nearest, [0, 0, 9, 255]);

    assert_eq!(out.dimensions(), (4, 4));
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 9, 255]);
    assert_eq!(out.get_pixel(0, 1).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(3, 2).0, [255, 0, 0, 255]);
    assert_eq!(out.get_pixel(3, 3).0, [0, 0, 9, 255]);
}

#[test]
fn hint_selects_filter() {
    assert_eq!(ResampleHint::Nearest.filter(), FilterType::Nearest);
    assert_eq!(ResampleHint::Smooth.filter(), FilterType::Lanczos3);
}
