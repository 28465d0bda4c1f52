use super::*;

#[test]
fn canvas_size_rejects_zero_dimensions() {
    assert!(CanvasSize::new(0, 10).is_err());
    assert!(CanvasSize::new(10, 0).is_err());
    assert_eq!(CanvasSize::new(1200, 630).unwrap().pixel_count(), 756_000);
}

#[test]
fn canvas_size_rejects_oversized_dimensions() {
    let err = CanvasSize::new(u32::MAX, u32::MAX).unwrap_err();
    assert!(matches!(err, OgError::Validation(_)), "{err}");
    assert!(CanvasSize::new(MAX_CANVAS_SIDE + 1, 630).is_err());
    assert!(CanvasSize::new(1200, MAX_CANVAS_SIDE + 1).is_err());
    assert!(CanvasSize::new(MAX_CANVAS_SIDE, MAX_CANVAS_SIDE).is_ok());
}

#[test]
fn lerp_truncates_instead_of_rounding() {
    // 15 + 15 * 0.99 = 29.85
    assert_eq!(lerp_u8(15, 30, 0.99), 29);
    // Descending: 167 - 71 * 0.5 = 131.5
    assert_eq!(lerp_u8(167, 96, 0.5), 131);
}

#[test]
fn lerp_endpoints_are_exact() {
    let a = Rgb8::new(0x0f, 0x0f, 0x13);
    let b = Rgb8::new(0x1e, 0x1b, 0x2e);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
}

#[test]
fn unit_fraction_spans_zero_to_one() {
    assert_eq!(unit_fraction(0, 630), 0.0);
    assert_eq!(unit_fraction(629, 630), 1.0);
    assert_eq!(unit_fraction(0, 1), 0.0);
}

#[test]
fn gradient_sample_hits_both_stops() {
    let stops = GradientStops::new(Rgb8::new(167, 139, 250), Rgb8::new(96, 165, 250));
    assert_eq!(stops.sample(0, 1200), stops.start);
    assert_eq!(stops.sample(1199, 1200), stops.end);
}

#[test]
fn mix_sixty_forty_matches_glow_reference() {
    let purple = Rgb8::new(124, 58, 237);
    let blue = Rgb8::new(96, 165, 250);
    assert_eq!(purple.mix(blue, 0.6), Rgb8::new(112, 100, 242));
}

#[test]
fn mul_div255_rounds() {
    assert_eq!(mul_div255(255, 133), 133);
    assert_eq!(mul_div255(0, 200), 0);
    assert_eq!(mul_div255(128, 128), 64);
}
