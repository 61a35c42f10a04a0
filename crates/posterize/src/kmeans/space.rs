//! Color-space strategies for the clusterer.
//!
//! [`KMeans`](super::KMeans) is written once, generic over [`ClusterSpace`].
//! A strategy decides how an 8-bit pixel becomes a sample, how distance is
//! measured, how a mean is formed, and how a centroid becomes a display color.

use std::fmt;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::api::ParseOptionError;
use crate::color::{lab_to_rgb, rgb_to_lab, Lab, Rgb8};

/// Three channel values tagged at the type level with their color space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorSample<S> {
    channels: [f32; 3],
    space: PhantomData<S>,
}

impl<S: ClusterSpace> ColorSample<S> {
    #[inline]
    pub fn new(channels: [f32; 3]) -> Self {
        Self {
            channels,
            space: PhantomData,
        }
    }

    /// Convert an 8-bit sRGB pixel into this space.
    #[inline]
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        Self::new(S::from_rgb(rgb))
    }

    /// Convert back to an 8-bit display color.
    #[inline]
    pub fn to_rgb(self) -> Rgb8 {
        Rgb8::from(S::to_rgb(self.channels))
    }

    #[inline]
    pub fn channels(&self) -> [f32; 3] {
        self.channels
    }
}

/// A color space the clusterer can operate in.
pub trait ClusterSpace: Copy + PartialEq + fmt::Debug + Send + Sync + 'static {
    /// Which [`ColorSpace`] this strategy implements.
    const KIND: ColorSpace;

    /// Channel values for an 8-bit sRGB pixel.
    fn from_rgb(rgb: [u8; 3]) -> [f32; 3];

    /// Rounded, clamped 8-bit sRGB for channel values in this space.
    fn to_rgb(channels: [f32; 3]) -> [u8; 3];

    /// Squared Euclidean distance between two samples.
    #[inline]
    fn distance(a: &ColorSample<Self>, b: &ColorSample<Self>) -> f32 {
        let [a0, a1, a2] = a.channels;
        let [b0, b1, b2] = b.channels;
        let (d0, d1, d2) = (a0 - b0, a1 - b1, a2 - b2);
        d0 * d0 + d1 * d1 + d2 * d2
    }

    /// Arithmetic mean from per-channel sums over `count > 0` samples.
    #[inline]
    fn mean(sum: [f64; 3], count: usize) -> ColorSample<Self> {
        debug_assert!(count > 0, "mean of an empty cluster");
        let n = count as f64;
        ColorSample::new(sum.map(|s| (s / n) as f32))
    }
}

/// sRGB byte values used directly as channels (0.0..=255.0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbSpace;

impl ClusterSpace for RgbSpace {
    const KIND: ColorSpace = ColorSpace::Rgb;

    #[inline]
    fn from_rgb(rgb: [u8; 3]) -> [f32; 3] {
        rgb.map(|c| c as f32)
    }

    #[inline]
    fn to_rgb(channels: [f32; 3]) -> [u8; 3] {
        channels.map(|c| c.round().clamp(0.0, 255.0) as u8)
    }
}

/// CIELAB (D65) channels: L, a, b.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LabSpace;

impl ClusterSpace for LabSpace {
    const KIND: ColorSpace = ColorSpace::Lab;

    #[inline]
    fn from_rgb(rgb: [u8; 3]) -> [f32; 3] {
        let lab = rgb_to_lab(rgb[0], rgb[1], rgb[2]);
        [lab.l, lab.a, lab.b]
    }

    #[inline]
    fn to_rgb(channels: [f32; 3]) -> [u8; 3] {
        lab_to_rgb(as_lab(channels))
    }

    /// CIE76 delta E, squared.
    #[inline]
    fn distance(a: &ColorSample<Self>, b: &ColorSample<Self>) -> f32 {
        as_lab(a.channels).distance_squared(as_lab(b.channels))
    }
}

#[inline]
fn as_lab([l, a, b]: [f32; 3]) -> Lab {
    Lab::new(l, a, b)
}

/// Runtime selector for the clustering color space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum ColorSpace {
    /// Raw sRGB byte values.
    #[default]
    Rgb,
    /// CIELAB, perceptually closer distances.
    Lab,
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Lab => "lab",
        })
    }
}

impl FromStr for ColorSpace {
    type Err = ParseOptionError;

    /// Case-insensitive `rgb` or `lab`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(ColorSpace::Rgb),
            "lab" | "cielab" => Ok(ColorSpace::Lab),
            _ => Err(ParseOptionError {
                kind: "color space",
                value: s.to_string(),
                expected: "rgb, lab",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_space_is_identity_on_bytes() {
        let sample = ColorSample::<RgbSpace>::from_rgb([12, 200, 255]);
        assert_eq!(sample.channels(), [12.0, 200.0, 255.0]);
        assert_eq!(sample.to_rgb(), Rgb8::new(12, 200, 255));
    }

    #[test]
    fn test_rgb_space_rounds_and_clamps() {
        assert_eq!(RgbSpace::to_rgb([127.5, -3.0, 300.0]), [128, 0, 255]);
    }

    #[test]
    fn test_lab_space_round_trip() {
        let sample = ColorSample::<LabSpace>::from_rgb([40, 90, 160]);
        let back = sample.to_rgb();
        assert!((back.r as i16 - 40).abs() <= 1);
        assert!((back.g as i16 - 90).abs() <= 1);
        assert!((back.b as i16 - 160).abs() <= 1);
    }

    #[test]
    fn test_distance_is_squared_euclidean() {
        let a = ColorSample::<RgbSpace>::new([0.0, 0.0, 0.0]);
        let b = ColorSample::<RgbSpace>::new([1.0, 2.0, 2.0]);
        assert_eq!(RgbSpace::distance(&a, &b), 9.0);
        assert_eq!(RgbSpace::distance(&b, &a), 9.0);
    }

    #[test]
    fn test_lab_distance_is_delta_e_squared() {
        let pairs = [
            ([0, 0, 0], [255, 255, 255]),
            ([220, 40, 40], [30, 90, 200]),
            ([128, 128, 128], [129, 127, 128]),
        ];
        for (x, y) in pairs {
            let a = ColorSample::<LabSpace>::from_rgb(x);
            let b = ColorSample::<LabSpace>::from_rgb(y);
            let expected = rgb_to_lab(x[0], x[1], x[2]).distance_squared(rgb_to_lab(y[0], y[1], y[2]));
            assert_eq!(LabSpace::distance(&a, &b), expected);
            assert_eq!(LabSpace::distance(&b, &a), expected);
        }
        let white = ColorSample::<LabSpace>::new([100.0, 0.0, 0.0]);
        let black = ColorSample::<LabSpace>::new([0.0, 0.0, 0.0]);
        assert_eq!(LabSpace::distance(&white, &black), 10_000.0);
    }

    #[test]
    fn test_mean() {
        let m = RgbSpace::mean([30.0, 60.0, 90.0], 3);
        assert_eq!(m.channels(), [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_color_space_parsing() {
        assert_eq!("rgb".parse::<ColorSpace>(), Ok(ColorSpace::Rgb));
        assert_eq!(" LAB ".parse::<ColorSpace>(), Ok(ColorSpace::Lab));
        assert!("hsv".parse::<ColorSpace>().is_err());
        assert_eq!(ColorSpace::Lab.to_string(), "lab");
        assert_eq!(LabSpace::KIND, ColorSpace::Lab);
    }
}
