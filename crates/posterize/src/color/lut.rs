//! sRGB transfer functions.
//!
//! 8-bit decoding goes through a 256-entry table generated at compile time by
//! build.rs; the continuous encode/decode functions use the IEC 61966-2-1
//! formula directly.

// Include the generated LUT from build.rs
include!(concat!(env!("OUT_DIR"), "/srgb8_lut.rs"));

/// Decode an 8-bit sRGB code value to linear light.
#[inline]
pub fn srgb8_to_linear(value: u8) -> f32 {
    SRGB8_TO_LINEAR[value as usize]
}

/// Decode a normalized sRGB value (0.0..=1.0) to linear light.
#[inline]
pub fn srgb_to_linear(srgb: f32) -> f32 {
    if srgb <= 0.04045 {
        srgb / 12.92
    } else {
        ((srgb + 0.055) / 1.055).powf(2.4)
    }
}

/// Encode linear light to a normalized sRGB value.
///
/// Input is clamped to 0.0..=1.0 first; out-of-gamut values coming back from
/// CIELAB land on the nearest edge instead of producing NaN.
#[inline]
pub fn linear_to_srgb(linear: f32) -> f32 {
    let linear = linear.clamp(0.0, 1.0);
    if linear <= 0.0031308 {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}
