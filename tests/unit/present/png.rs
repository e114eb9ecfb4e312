use super::*;
use crate::foundation::core::Viewport;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("revealfx-{name}-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

#[test]
fn writes_numbered_letterboxed_pngs() {
    let dir = scratch_dir("png-seq");
    let mut p = PngSequencePresenter::new(&dir).unwrap();
    let frame = RgbaImage::from_pixel(4, 2, image::Rgba([200, 10, 10, 255]));
    let placement = Placement::fit(4, 2, Viewport::new(8, 8));

    p.present(&frame, &placement, ResampleHint::Nearest).unwrap();
    p.present(&frame, &placement, ResampleHint::Smooth).unwrap();
    assert_eq!(p.frames_written(), 2);

    let first = image::open(dir.join("frame_00000.png")).unwrap().to_rgba8();
    assert_eq!(first.dimensions(), (8, 8));
    assert_eq!(first.get_pixel(0, 0).0, DEFAULT_BACKGROUND);
    assert_eq!(first.get_pixel(4, 4).0, [200, 10, 10, 255]);
    assert!(dir.join("frame_00001.png").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn frame_budget_turns_into_presentation_error() {
    let dir = scratch_dir("png-budget");
    let mut p = PngSequencePresenter::new(&dir).unwrap().with_max_frames(1);
    let frame = RgbaImage::from_pixel(1, 1, image::Rgba([0, 0, 0, 255]));
    let placement = Placement::fit(1, 1, Viewport::new(1, 1));

    p.present(&frame, &placement, ResampleHint::Smooth).unwrap();
    let err = p
        .present(&frame, &placement, ResampleHint::Smooth)
        .unwrap_err();
    assert!(matches!(err, RevealError::Presentation(_)));

    let _ = std::fs::remove_dir_all(&dir);
}
