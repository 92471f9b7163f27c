//! Tests for the value-to-color mapping.

use renderer::{color_for, Color};

// ============================================================================
// Missing / non-finite values
// ============================================================================

#[test]
fn test_missing_value_is_transparent() {
    assert_eq!(color_for(None, 0.0, 60.0), Color::transparent());
}

#[test]
fn test_non_finite_values_are_transparent() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        assert_eq!(color_for(Some(bad), 0.0, 60.0).a, 0);
    }
}

#[test]
fn test_transparency_is_independent_of_range() {
    for (vmin, vmax) in [(0.0, 1.0), (5.0, 5.0), (-10.0, 10.0), (60.0, 0.0)] {
        assert_eq!(color_for(None, vmin, vmax).a, 0);
        assert_eq!(color_for(Some(f64::NAN), vmin, vmax).a, 0);
    }
}

// ============================================================================
// Monotonicity
// ============================================================================

#[test]
fn test_red_rises_blue_falls_with_value() {
    let samples: Vec<Color> = (0..=20)
        .map(|i| color_for(Some(i as f64), 0.0, 20.0))
        .collect();

    for pair in samples.windows(2) {
        assert!(
            pair[1].r >= pair[0].r,
            "red must be non-decreasing: {:?} -> {:?}",
            pair[0],
            pair[1]
        );
        assert!(
            pair[1].b <= pair[0].b,
            "blue must be non-increasing: {:?} -> {:?}",
            pair[0],
            pair[1]
        );
    }

    // The sweep actually moves across the scale.
    assert!(samples[20].r > samples[0].r);
    assert!(samples[20].b < samples[0].b);
}

#[test]
fn test_midpoint_is_halfway() {
    let low = color_for(Some(0.0), 0.0, 10.0);
    let mid = color_for(Some(5.0), 0.0, 10.0);
    let high = color_for(Some(10.0), 0.0, 10.0);

    let expected_r = ((low.r as f64 + high.r as f64) / 2.0).round() as u8;
    let expected_b = ((low.b as f64 + high.b as f64) / 2.0).round() as u8;
    assert_eq!(mid.r, expected_r);
    assert_eq!(mid.b, expected_b);
}

// ============================================================================
// Opacity
// ============================================================================

#[test]
fn test_finite_values_get_fixed_partial_opacity() {
    let a0 = color_for(Some(0.0), 0.0, 60.0).a;
    let a1 = color_for(Some(30.0), 0.0, 60.0).a;
    let a2 = color_for(Some(60.0), 0.0, 60.0).a;

    assert_eq!(a0, a1);
    assert_eq!(a1, a2);
    assert!(a0 > 0, "cells must be visible");
    assert!(a0 < 255, "base map must remain visible underneath");
}

// ============================================================================
// Degenerate range
// ============================================================================

#[test]
fn test_degenerate_range_is_total() {
    // vmin == vmax: denominator treated as 1, never a division by zero.
    let at_min = color_for(Some(5.0), 5.0, 5.0);
    assert!(at_min.a > 0);

    let below = color_for(Some(4.0), 5.0, 5.0);
    let above = color_for(Some(6.5), 5.0, 5.0);
    assert!(below.r <= at_min.r);
    assert!(above.r >= at_min.r);
}
