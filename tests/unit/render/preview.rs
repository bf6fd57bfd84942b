use std::io::Cursor;

use super::*;
use crate::content::dsl::PortfolioBuilder;
use crate::foundation::core::Rgba8;

const SETTLED_S: f64 = 10.0;

fn portfolio() -> Portfolio {
    PortfolioBuilder::new("Hi", "Ada").build().unwrap()
}

fn narrow() -> Viewport {
    Viewport::new(400, 300).unwrap()
}

fn no_assets() -> AssetRoot {
    AssetRoot::new(std::env::temp_dir().join("vitrine-preview-no-assets"))
}

fn temp_dir(tag: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("vitrine-preview-{tag}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_png(path: &std::path::Path, w: u32, h: u32, px: [u8; 4]) {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(px));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    std::fs::write(path, buf).unwrap();
}

#[test]
fn at_rest_the_panel_is_below_the_fold() {
    let mut p = portfolio();
    p.config.theme.divider = Rgba8::opaque(255, 0, 0);
    let assets = no_assets();

    let rest = render_preview(&p, &PreviewRequest::new(narrow()).time(SETTLED_S), &assets).unwrap();
    assert_ne!(rest.color_at(200, 299), Rgba8::opaque(255, 0, 0));

    let req = PreviewRequest::new(narrow()).time(SETTLED_S).scroll(1.0);
    let nudged = render_preview(&p, &req, &assets).unwrap();
    assert_eq!(nudged.color_at(200, 299), Rgba8::opaque(255, 0, 0));
    assert_eq!(nudged.color_at(200, 298), rest.color_at(200, 298));
}

#[test]
fn narrow_full_scroll_is_clear_on_top_and_opaque_below() {
    let mut p = portfolio();
    p.config.theme.hero_fallback = Rgba8::opaque(0, 0, 0);
    let req = PreviewRequest::new(narrow())
        .time(SETTLED_S)
        .panel_height(300.0)
        .scroll(10_000.0);
    let f = render_preview(&p, &req, &no_assets()).unwrap();

    // top 45% of the panel: dark hero band through a 0.4 tint
    let top = f.color_at(200, 20);
    assert!(top.r < 150, "{top:?}");
    // below the hard edge: solid panel color
    assert_eq!(f.color_at(200, 250), Rgba8::opaque(250, 250, 249));
}

#[test]
fn wide_full_scroll_is_opaque_left_and_clear_right() {
    let mut p = portfolio();
    let dir = temp_dir("wide");
    write_png(&dir.join("wide.png"), 16, 9, [0, 0, 0, 255]);
    p.config.wide.video.preview_frame = Some("/wide.png".to_string());

    let vp = Viewport::new(800, 240).unwrap();
    let req = PreviewRequest::new(vp)
        .time(SETTLED_S)
        .panel_height(240.0)
        .scroll(240.0);
    let f = render_preview(&p, &req, &AssetRoot::new(&dir)).unwrap();

    assert_eq!(f.color_at(200, 120), Rgba8::opaque(250, 250, 249));
    // rotated poster spans x 532..668 of the right column
    let right = f.color_at(600, 120);
    assert!(right.r < 150, "{right:?}");
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_poster_degrades_to_fallback_color() {
    let mut p = portfolio();
    p.config.narrow.video.preview_frame = Some("/does-not-exist.png".to_string());
    let f = render_preview(&p, &PreviewRequest::new(narrow()).time(SETTLED_S), &no_assets()).unwrap();
    assert_eq!(f.color_at(200, 50), p.config.theme.hero_fallback);
}

#[test]
fn poster_covers_the_narrow_band() {
    let dir = temp_dir("poster");
    write_png(&dir.join("poster.png"), 4, 2, [200, 10, 10, 255]);
    let mut p = portfolio();
    p.config.narrow.video.preview_frame = Some("/poster.png".to_string());
    let f = render_preview(&p, &PreviewRequest::new(narrow()).time(SETTLED_S), &AssetRoot::new(&dir))
        .unwrap();
    assert_eq!(f.color_at(200, 50), Rgba8::opaque(200, 10, 10));
    // text area below the band keeps the page background
    assert_eq!(f.color_at(390, 290), p.config.theme.background);
    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn before_load_settles_only_the_background_shows() {
    let p = portfolio();
    let f = render_preview(&p, &PreviewRequest::new(narrow()), &no_assets()).unwrap();
    assert_eq!(f.color_at(200, 17), p.config.theme.background);
    assert_eq!(f.color_at(200, 50), p.config.theme.background);
}

#[test]
fn border_traces_then_fades() {
    let p = portfolio();
    let assets = no_assets();
    let at = |t: f64| {
        render_preview(&p, &PreviewRequest::new(narrow()).time(t), &assets)
            .unwrap()
            .color_at(200, 17)
    };
    let mid = at(2.0);
    let settled = at(SETTLED_S);
    assert!(i32::from(mid.r) < i32::from(settled.r) - 40, "{mid:?} vs {settled:?}");
    assert_eq!(settled, p.config.theme.hero_fallback);
}

#[test]
fn entrance_is_independent_of_scroll() {
    let p = portfolio();
    let assets = no_assets();
    let base = PreviewRequest::new(narrow()).time(2.0);
    let a = render_preview(&p, &base, &assets).unwrap();
    let b = render_preview(&p, &base.scroll(50.0), &assets).unwrap();
    for x in [20, 200, 380] {
        assert_eq!(a.color_at(x, 17), b.color_at(x, 17));
    }
}

#[test]
fn invalid_requests_are_rejected() {
    let p = portfolio();
    let assets = no_assets();
    let bad_scroll = PreviewRequest::new(narrow()).scroll(-1.0);
    assert!(render_preview(&p, &bad_scroll, &assets).is_err());
    let bad_time = PreviewRequest::new(narrow()).time(f64::NAN);
    assert!(render_preview(&p, &bad_time, &assets).is_err());
}

#[test]
fn cover_transform_centers_the_image() {
    let bx = Rect::new(0.0, 0.0, 400.0, 100.0);
    let m = video_transform(4.0, 2.0, bx, 0.0, narrow());
    let c = m * Point::new(200.0, 50.0);
    assert!((c.x - 2.0).abs() < 1e-9 && (c.y - 1.0).abs() < 1e-9);
}

#[test]
fn rotated_transform_turns_frame_down_into_image_right() {
    let vp = Viewport::new(1000, 500).unwrap();
    let bx = Rect::new(500.0, 0.0, 1000.0, 500.0);
    let m = video_transform(10.0, 5.0, bx, 90.0, vp);
    let c = m * Point::new(750.0, 250.0);
    assert!((c.x - 5.0).abs() < 1e-9 && (c.y - 2.5).abs() < 1e-9);
    let below = m * Point::new(750.0, 350.0);
    assert!((below.x - 7.0).abs() < 1e-9 && (below.y - 2.5).abs() < 1e-9);
}

#[test]
fn wrap_breaks_on_word_boundaries() {
    assert_eq!(
        wrap("one two three four", 9),
        vec!["one two", "three", "four"]
    );
    assert!(wrap("   ", 10).is_empty());
}
