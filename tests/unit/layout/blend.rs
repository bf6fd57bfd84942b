use super::*;

#[test]
fn fixup_clamps_out_of_order_stop() {
    let blend = GlassBlend::narrow_default();
    let offsets: Vec<f64> = blend.resolved_stops().iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.45, 0.45, 1.0]);
}

#[test]
fn narrow_default_has_hard_edge_at_45_percent() {
    let blend = GlassBlend::narrow_default();
    assert!((blend.alpha_at(0.0) - 0.4).abs() < 0.01);
    assert!((blend.alpha_at(0.44) - 0.4).abs() < 0.01);
    assert_eq!(blend.alpha_at(0.45), 1.0);
    assert_eq!(blend.alpha_at(0.9), 1.0);
}

#[test]
fn wide_default_splits_solid_left_and_glass_right() {
    let blend = GlassBlend::wide_default();
    assert_eq!(blend.direction, GradientDirection::ToRight);
    assert_eq!(blend.alpha_at(0.25), 1.0);
    assert_eq!(blend.alpha_at(0.5), 1.0);
    assert!((blend.alpha_at(0.75) - 0.4).abs() < 0.01);
}

#[test]
fn alpha_is_clamped_outside_the_gradient_line() {
    let blend = GlassBlend::wide_default();
    assert_eq!(blend.alpha_at(-1.0), 1.0);
    assert!((blend.alpha_at(2.0) - 0.4).abs() < 0.01);
}

#[test]
fn position_follows_direction() {
    let panel = Rect::new(0.0, 100.0, 200.0, 500.0);
    let narrow = GlassBlend::narrow_default();
    let wide = GlassBlend::wide_default();
    let p = Point::new(50.0, 300.0);
    assert_eq!(narrow.position_in(panel, p), 0.5);
    assert_eq!(wide.position_in(panel, p), 0.25);
}

#[test]
fn css_background_keeps_authored_stops() {
    let css = GlassBlend::narrow_default().css_background();
    assert_eq!(
        css,
        "linear-gradient(to bottom, rgba(250, 250, 249, 0.4) 0%, rgba(250, 250, 249, 0.4) 45%, #fafaf9 35.1%, #fafaf9 100%)"
    );
    assert!(
        GlassBlend::wide_default()
            .css_background()
            .starts_with("linear-gradient(to right, #fafaf9 0%")
    );
}

#[test]
fn validate_rejects_bad_stops() {
    let mut blend = GlassBlend::narrow_default();
    blend.stops.truncate(1);
    assert!(blend.validate().is_err());

    let mut blend = GlassBlend::narrow_default();
    blend.stops[1].offset = 1.5;
    assert!(blend.validate().is_err());

    let mut blend = GlassBlend::narrow_default();
    blend.backdrop_blur_px = -2.0;
    assert!(blend.validate().is_err());
}
