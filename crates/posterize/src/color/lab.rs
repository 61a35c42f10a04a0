//! CIELAB color space (D65 reference white).
//!
//! Euclidean distance here approximates perceived color difference.

use super::linear_rgb::LinearRgb;
use super::srgb::Srgb;
use super::xyz::Xyz;

/// Reference white, X component.
pub const WHITE_X: f32 = 0.95047;
/// Reference white, Y component.
pub const WHITE_Y: f32 = 1.0;
/// Reference white, Z component.
pub const WHITE_Z: f32 = 1.08883;

/// Below this ratio the cube root is replaced by a linear segment.
const EPSILON: f32 = 0.008856;
const KAPPA_SLOPE: f32 = 7.787;
const OFFSET: f32 = 16.0 / 116.0;

#[inline]
fn f(t: f32) -> f32 {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA_SLOPE * t + OFFSET
    }
}

#[inline]
fn f_inv(t: f32) -> f32 {
    let cubed = t * t * t;
    if cubed > EPSILON {
        cubed
    } else {
        (t - OFFSET) / KAPPA_SLOPE
    }
}

/// A color in CIELAB.
///
/// - `l`: lightness, 0.0 (black) to 100.0 (white)
/// - `a`: green (negative) to red (positive)
/// - `b`: blue (negative) to yellow (positive)
///
/// Values are not clamped; centroids averaged in LAB may fall outside the
/// sRGB gamut and are clamped only when converted back with [`lab_to_rgb`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Lab {
    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared Euclidean distance (CIE76 delta E, squared).
    ///
    /// ```
    /// use posterize::Lab;
    ///
    /// let white = Lab::new(100.0, 0.0, 0.0);
    /// let black = Lab::new(0.0, 0.0, 0.0);
    /// assert_eq!(white.distance_squared(black), 10_000.0);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Lab) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        dl * dl + da * da + db * db
    }
}

impl From<Xyz> for Lab {
    fn from(xyz: Xyz) -> Self {
        let fx = f(xyz.x / WHITE_X);
        let fy = f(xyz.y / WHITE_Y);
        let fz = f(xyz.z / WHITE_Z);
        Self {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Lab> for Xyz {
    fn from(lab: Lab) -> Self {
        let fy = (lab.l + 16.0) / 116.0;
        let fx = fy + lab.a / 500.0;
        let fz = fy - lab.b / 200.0;
        Xyz::new(f_inv(fx) * WHITE_X, f_inv(fy) * WHITE_Y, f_inv(fz) * WHITE_Z)
    }
}

/// Convert 8-bit sRGB to CIELAB.
///
/// ```
/// use posterize::rgb_to_lab;
///
/// let white = rgb_to_lab(255, 255, 255);
/// assert!((white.l - 100.0).abs() < 0.01);
/// assert!(white.a.abs() < 0.01 && white.b.abs() < 0.01);
/// ```
pub fn rgb_to_lab(r: u8, g: u8, b: u8) -> Lab {
    Lab::from(Xyz::from(LinearRgb::from_srgb8([r, g, b])))
}

/// Convert CIELAB back to 8-bit sRGB, rounding and clamping each channel.
pub fn lab_to_rgb(lab: Lab) -> [u8; 3] {
    Srgb::from(LinearRgb::from(Xyz::from(lab))).to_bytes()
}
