use super::*;

#[test]
fn boundary_is_inclusive_of_wide() {
    let rule = BreakpointRule::default();
    assert_eq!(Breakpoint::classify(767, &rule), Breakpoint::Narrow);
    assert_eq!(Breakpoint::classify(768, &rule), Breakpoint::Wide);
    assert_eq!(Breakpoint::classify(1, &rule), Breakpoint::Narrow);
    assert_eq!(Breakpoint::classify(4096, &rule), Breakpoint::Wide);
}

#[test]
fn custom_threshold_moves_boundary() {
    let rule = BreakpointRule { min_wide_px: 1024 };
    assert_eq!(Breakpoint::classify(1023, &rule), Breakpoint::Narrow);
    assert_eq!(Breakpoint::classify(1024, &rule), Breakpoint::Wide);
}

#[test]
fn media_condition_is_mobile_first() {
    let rule = BreakpointRule::default();
    assert_eq!(rule.media_condition(Breakpoint::Narrow), None);
    assert_eq!(
        rule.media_condition(Breakpoint::Wide).as_deref(),
        Some("(min-width: 768px)")
    );
}

#[test]
fn zero_threshold_is_rejected() {
    assert!(BreakpointRule { min_wide_px: 0 }.validate().is_err());
}
