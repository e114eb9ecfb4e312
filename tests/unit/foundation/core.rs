use super::*;

#[test]
fn fps_interval_truncates_like_gui_timers() {
    assert_eq!(Fps::new(30, 1).unwrap().frame_interval_ms(), 33);
    assert_eq!(Fps::new(60, 1).unwrap().frame_interval_ms(), 16);
    assert_eq!(Fps::new(30000, 1001).unwrap().frame_interval_ms(), 33);
    assert_eq!(Fps::new(5000, 1).unwrap().frame_interval_ms(), 1);
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
}

#[test]
fn viewport_parses_and_clamps() {
    let v: Viewport = "800x600".parse().unwrap();
    assert_eq!(v, Viewport::new(800, 600));
    assert!("800".parse::<Viewport>().is_err());
    assert!("ax600".parse::<Viewport>().is_err());

    let d = Viewport::new(0, 10);
    assert!(d.is_degenerate());
    assert_eq!(d.clamped(), Viewport::new(1, 10));
}

#[test]
fn opaque_conversion_forces_full_alpha() {
    let img = image::RgbaImage::from_raw(1, 1, vec![10, 20, 30, 0]).unwrap();
    let out = to_opaque_rgba8(&DynamicImage::ImageRgba8(img));
    assert_eq!(out.as_raw().as_slice(), &[10, 20, 30, 255]);
}
