use super::*;

#[test]
fn over_opacity_0_is_noop() {
    let dst = [1, 2, 3, 4];
    let src = [200, 200, 200, 200];
    assert_eq!(over(dst, src, 0.0), dst);
}

#[test]
fn over_src_alpha_0_is_noop() {
    let dst = [10, 20, 30, 40];
    let src = [255, 255, 255, 0];
    assert_eq!(over(dst, src, 1.0), dst);
}

#[test]
fn over_src_opaque_replaces_dst() {
    let dst = [0, 0, 0, 255];
    let src = [255, 0, 0, 255];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn over_dst_transparent_returns_scaled_src() {
    let dst = [0, 0, 0, 0];
    let src = [100, 110, 120, 200];
    assert_eq!(over(dst, src, 1.0), src);
}

#[test]
fn fill_rect_covers_pixel_centers_only() {
    let mut f = FrameRGBA::new(4, 4).unwrap();
    fill_rect(&mut f, Rect::new(0.6, 0.0, 2.4, 1.0), Rgba8::opaque(9, 9, 9), 1.0);
    assert_eq!(f.pixel(0, 0)[3], 0);
    assert_eq!(f.pixel(1, 0), [9, 9, 9, 255]);
    assert_eq!(f.pixel(2, 0)[3], 0);
    assert_eq!(f.pixel(1, 1)[3], 0);
}

#[test]
fn fill_rect_outside_frame_is_ignored() {
    let mut f = FrameRGBA::new(2, 2).unwrap();
    fill_rect(&mut f, Rect::new(-10.0, -10.0, -1.0, -1.0), Rgba8::opaque(1, 1, 1), 1.0);
    assert!(f.data.iter().all(|&b| b == 0));
}

#[test]
fn fill_rect_with_shades_per_pixel() {
    let mut f = FrameRGBA::new(2, 1).unwrap();
    fill_rect_with(&mut f, Rect::new(0.0, 0.0, 2.0, 1.0), |p| {
        if p.x < 1.0 {
            Rgba8::opaque(255, 0, 0)
        } else {
            Rgba8::opaque(0, 0, 255)
        }
    });
    assert_eq!(f.pixel(0, 0), [255, 0, 0, 255]);
    assert_eq!(f.pixel(1, 0), [0, 0, 255, 255]);
}

#[test]
fn blit_offsets_and_clips() {
    let mut dst = FrameRGBA::new(3, 3).unwrap();
    let src = FrameRGBA::filled(2, 2, Rgba8::opaque(7, 7, 7)).unwrap();
    blit(&mut dst, &src, 2, -1, 1.0);
    assert_eq!(dst.pixel(2, 0), [7, 7, 7, 255]);
    assert_eq!(dst.pixel(2, 1)[3], 0);
    assert_eq!(dst.pixel(1, 0)[3], 0);
}
