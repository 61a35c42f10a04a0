//! Color types and conversion utilities
//!
//! Conversions run along a fixed chain, each hop a `From` impl:
//!
//! ```text
//! 8-bit sRGB -> Srgb -> LinearRgb -> Xyz -> Lab
//! ```
//!
//! and back. [`rgb_to_lab`] and [`lab_to_rgb`] wrap the whole chain.
//!
//! # Example
//!
//! ```
//! use posterize::{lab_to_rgb, rgb_to_lab};
//!
//! let lab = rgb_to_lab(200, 120, 40);
//! let back = lab_to_rgb(lab);
//! for (orig, round_tripped) in [200u8, 120, 40].iter().zip(back) {
//!     assert!((*orig as i16 - round_tripped as i16).abs() <= 1);
//! }
//! ```

mod lab;
mod linear_rgb;
mod lut;
mod rgb8;
mod srgb;
mod xyz;

pub use lab::{lab_to_rgb, rgb_to_lab, Lab, WHITE_X, WHITE_Y, WHITE_Z};
pub use linear_rgb::LinearRgb;
pub use rgb8::Rgb8;
pub use srgb::Srgb;
pub use xyz::Xyz;
