use super::*;

const ALL: [Ease; 6] = [
    Ease::Linear,
    Ease::Ease,
    Ease::EaseIn,
    Ease::EaseOut,
    Ease::EaseInOut,
    Ease::CubicBezier {
        x1: 0.25,
        y1: 1.0,
        x2: 0.5,
        y2: 1.0,
    },
];

#[test]
fn endpoints_are_stable() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0);
        assert_eq!(ease.apply(1.0), 1.0);
        assert_eq!(ease.apply(-3.0), 0.0);
        assert_eq!(ease.apply(7.0), 1.0);
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn ease_out_front_loads_progress() {
    assert!(Ease::EaseOut.apply(0.5) > 0.5);
    assert!(Ease::EaseIn.apply(0.5) < 0.5);
}

#[test]
fn css_names_round_out_the_curve() {
    assert_eq!(Ease::EaseOut.css(), "ease-out");
    assert_eq!(
        Ease::CubicBezier {
            x1: 0.25,
            y1: 1.0,
            x2: 0.5,
            y2: 1.0
        }
        .css(),
        "cubic-bezier(0.25, 1, 0.5, 1)"
    );
}

#[test]
fn validate_rejects_out_of_range_x() {
    let bad = Ease::CubicBezier {
        x1: 1.5,
        y1: 0.0,
        x2: 0.5,
        y2: 1.0,
    };
    assert!(bad.validate().is_err());
    assert!(Ease::EaseOut.validate().is_ok());
}
