use super::*;

#[test]
fn filled_frame_stores_premultiplied_pixels() {
    let f = FrameRGBA::filled(2, 1, Rgba8::opaque(10, 20, 30).with_alpha(0.5)).unwrap();
    assert_eq!(f.pixel(1, 0), [5, 10, 15, 128]);
    let c = f.color_at(0, 0);
    assert_eq!(c.a, 128);
    assert!((i32::from(c.r) - 10).abs() <= 1);
    assert!((i32::from(c.b) - 30).abs() <= 1);
}

#[test]
fn zero_sized_frames_are_rejected() {
    assert!(FrameRGBA::new(0, 4).is_err());
    assert!(FrameRGBA::new(4, 0).is_err());
}

#[test]
fn from_premul_checks_length() {
    assert!(FrameRGBA::from_premul(2, 2, vec![0; 15]).is_err());
    assert!(FrameRGBA::from_premul(2, 2, vec![0; 16]).is_ok());
}

#[test]
fn straight_copy_clears_transparent_and_keeps_opaque() {
    let mut f = FrameRGBA::new(2, 1).unwrap();
    f.set_pixel(1, 0, [1, 2, 3, 255]);
    let out = f.to_straight_rgba8();
    assert_eq!(out, vec![0, 0, 0, 0, 1, 2, 3, 255]);
}

#[test]
fn premultiply_scales_color_by_alpha() {
    let mut px = vec![200u8, 100, 50, 0, 255, 255, 255, 51];
    premultiply_in_place(&mut px);
    assert_eq!(px, vec![0, 0, 0, 0, 51, 51, 51, 51]);
}

#[test]
fn save_png_round_trips_through_image() {
    let dir = std::env::temp_dir().join(format!("vitrine-frame-{}", std::process::id()));
    let path = dir.join("nested").join("f.png");
    let f = FrameRGBA::filled(3, 2, Rgba8::opaque(1, 2, 3)).unwrap();
    f.save_png(&path).unwrap();
    let back = image::open(&path).unwrap().to_rgba8();
    assert_eq!(back.dimensions(), (3, 2));
    assert_eq!(back.get_pixel(2, 1).0, [1, 2, 3, 255]);
    let _ = std::fs::remove_dir_all(&dir);
}
