//! Linear RGB color type
//!
//! Linear RGB is the hop between gamma-encoded sRGB and CIE XYZ.

use super::lut::{srgb8_to_linear, srgb_to_linear};
use super::srgb::Srgb;

/// A color in linear RGB color space.
///
/// Values are proportional to light intensity, typically in 0.0..=1.0.
/// Conversions back from CIELAB may leave this range; [`Srgb::from`] clamps.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    /// Red channel (linear light intensity)
    pub r: f32,
    /// Green channel (linear light intensity)
    pub g: f32,
    /// Blue channel (linear light intensity)
    pub b: f32,
}

impl LinearRgb {
    /// Create a new LinearRgb color from linear RGB values.
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Decode 8-bit sRGB bytes through the build-time lookup table.
    #[inline]
    pub fn from_srgb8(rgb: [u8; 3]) -> Self {
        Self {
            r: srgb8_to_linear(rgb[0]),
            g: srgb8_to_linear(rgb[1]),
            b: srgb8_to_linear(rgb[2]),
        }
    }
}

impl From<Srgb> for LinearRgb {
    fn from(srgb: Srgb) -> Self {
        Self {
            r: srgb_to_linear(srgb.r),
            g: srgb_to_linear(srgb.g),
            b: srgb_to_linear(srgb.b),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_formula_agree() {
        for i in 0..=255u8 {
            let from_table = LinearRgb::from_srgb8([i, i, i]);
            let from_formula = LinearRgb::from(Srgb::from_u8(i, i, i));
            assert!(
                (from_table.r - from_formula.r).abs() < 1e-6,
                "decode mismatch at {i}: {} vs {}",
                from_table.r,
                from_formula.r
            );
        }
    }
}
