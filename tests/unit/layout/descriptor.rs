use super::*;
use crate::layout::blend::GradientDirection;

#[test]
fn width_767_selects_narrow_asset_and_vertical_blend() {
    let cfg = PageConfig::default();
    let d = describe_for_width(767, &cfg);
    assert_eq!(d.breakpoint, Breakpoint::Narrow);
    assert_eq!(d.video.src, "/simulation_mobile_4000kbps.mp4");
    assert_eq!(d.video_rotation_deg, 0.0);
    assert_eq!(d.blend.direction, GradientDirection::ToBottom);
    assert_eq!(d.media, None);
}

#[test]
fn width_768_selects_wide_asset_and_horizontal_blend() {
    let cfg = PageConfig::default();
    let d = describe_for_width(768, &cfg);
    assert_eq!(d.breakpoint, Breakpoint::Wide);
    assert_eq!(d.video.src, "/simulation2_4000kbps.mp4");
    assert_eq!(d.video_rotation_deg, 90.0);
    assert_eq!(d.blend.direction, GradientDirection::ToRight);
    assert_eq!(d.media.as_deref(), Some("(min-width: 768px)"));
}

#[test]
fn describe_all_is_mobile_first() {
    let all = describe_all(&PageConfig::default());
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].breakpoint, Breakpoint::Narrow);
    assert_eq!(all[1].breakpoint, Breakpoint::Wide);
}

#[test]
fn hero_boxes_follow_arrangement() {
    let cfg = PageConfig::default();
    let narrow = describe(Breakpoint::Narrow, &cfg);
    let boxes = narrow.hero_boxes(Viewport::new(400, 1000).unwrap());
    assert_eq!(boxes.video, Rect::new(0.0, 0.0, 400.0, 350.0));
    assert_eq!(boxes.text, Rect::new(0.0, 350.0, 400.0, 1000.0));
    assert!(narrow.video_leads());

    let wide = describe(Breakpoint::Wide, &cfg);
    let boxes = wide.hero_boxes(Viewport::new(1200, 800).unwrap());
    assert_eq!(boxes.text, Rect::new(0.0, 0.0, 600.0, 800.0));
    assert_eq!(boxes.video, Rect::new(600.0, 0.0, 1200.0, 800.0));
    assert!(!wide.video_leads());
}

#[test]
fn descriptor_is_pure() {
    let cfg = PageConfig::default();
    assert_eq!(
        describe(Breakpoint::Wide, &cfg),
        describe(Breakpoint::Wide, &cfg)
    );
}
