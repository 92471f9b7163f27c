//! Scalar value to color mapping.

use serde::{Deserialize, Serialize};

/// RGBA color, straight alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }
}

/// Fixed cell opacity so the base map stays visible underneath.
const CELL_ALPHA: u8 = 166;

/// Low end of the value scale.
const LOW: Color = Color {
    r: 30,
    g: 60,
    b: 255,
    a: CELL_ALPHA,
};

/// High end of the value scale.
const HIGH: Color = Color {
    r: 255,
    g: 60,
    b: 30,
    a: CELL_ALPHA,
};

/// Map a scalar to a color against an inclusive [vmin, vmax] range.
///
/// Missing or non-finite values come back fully transparent so they are
/// invisible rather than misleadingly colored. Finite values normalize to
/// `clamp((value - vmin) / (vmax - vmin), 0, 1)` and interpolate from the
/// low endpoint to the high endpoint; the red channel rises with the value,
/// the blue channel falls. A degenerate range (vmax == vmin) keeps the
/// mapping total by treating the denominator as 1.
pub fn color_for(value: Option<f64>, vmin: f64, vmax: f64) -> Color {
    let v = match value {
        Some(v) if v.is_finite() => v,
        _ => return Color::transparent(),
    };

    let span = vmax - vmin;
    let span = if span == 0.0 { 1.0 } else { span };
    let x = ((v - vmin) / span).clamp(0.0, 1.0);

    lerp(LOW, HIGH, x)
}

/// Linear interpolation between two colors.
fn lerp(a: Color, b: Color, t: f64) -> Color {
    let ch = |a: u8, b: u8| ((a as f64) * (1.0 - t) + (b as f64) * t).round() as u8;
    Color::new(ch(a.r, b.r), ch(a.g, b.g), ch(a.b, b.b), ch(a.a, b.a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(color_for(Some(0.0), 0.0, 1.0), LOW);
        assert_eq!(color_for(Some(1.0), 0.0, 1.0), HIGH);
    }

    #[test]
    fn test_out_of_range_clamps_to_endpoints() {
        assert_eq!(color_for(Some(-5.0), 0.0, 1.0), LOW);
        assert_eq!(color_for(Some(99.0), 0.0, 1.0), HIGH);
    }
}
