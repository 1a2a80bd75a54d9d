use super::*;

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::EaseIn,
        Easing::EaseOut,
        Easing::AccelerateDecelerate,
        Easing::FastOutSlowIn,
    ] {
        assert!(easing.transform(0.0).abs() < 1e-4, "{easing:?} at 0");
        assert!((easing.transform(1.0) - 1.0).abs() < 1e-4, "{easing:?} at 1");
    }
}

#[test]
fn accelerate_decelerate_is_symmetric_around_midpoint() {
    let easing = Easing::AccelerateDecelerate;
    assert!((easing.transform(0.5) - 0.5).abs() < 1e-4);
    let early = easing.transform(0.25);
    let late = easing.transform(0.75);
    assert!((early + late - 1.0).abs() < 1e-4);
    assert!(early < 0.25, "should start slow, got {early}");
}

#[test]
fn fast_out_slow_in_is_monotonic() {
    let easing = Easing::FastOutSlowIn;
    let mut previous = 0.0;
    for step in 1..=20 {
        let value = easing.transform(step as f32 / 20.0);
        assert!(value >= previous - 1e-4, "curve went backwards at step {step}");
        previous = value;
    }
}

#[test]
fn progress_reports_completion_at_duration() {
    let spec = AnimationSpec::linear(200);
    assert_eq!(spec.progress(0), (0.0, false));
    let (half, done) = spec.progress(100_000_000);
    assert!((half - 0.5).abs() < 1e-4);
    assert!(!done);
    assert_eq!(spec.progress(200_000_000), (1.0, true));
    assert_eq!(spec.progress(500_000_000), (1.0, true));
}

#[test]
fn zero_duration_finishes_immediately_after_start() {
    let spec = AnimationSpec::linear(0);
    assert_eq!(spec.progress(1), (1.0, true));
}

#[test]
fn huge_duration_saturates_instead_of_overflowing() {
    let spec = AnimationSpec::linear(u64::MAX);
    let (progress, done) = spec.progress(1_000_000_000);
    assert!(!done);
    assert!(progress < 1e-6);
}

#[test]
fn lerp_interpolates_between_endpoints() {
    assert_eq!(0.0f32.lerp(&10.0, 0.25), 2.5);
    assert_eq!(4.0f32.lerp(&0.0, 0.5), 2.0);
}
