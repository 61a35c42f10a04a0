#![allow(clippy::excessive_precision)]

//! posterize: deterministic color quantization for paint-by-number boards
//!
//! Turns a photo into a small palette and a square grid of palette labels.
//! The same image, parameters and seed always give the same board.
//!
//! # Quick Start
//!
//! ```
//! use posterize::{display, posterize, Image};
//!
//! let photo = Image::from_fn(64, 48, |x, y| [(x * 4) as u8, (y * 5) as u8, 128, 255]);
//! let result = posterize(&photo, 16, 6, 314159265).unwrap();
//!
//! assert_eq!(result.palette().len(), 6);
//! assert_eq!(result.grid().size(), 16);
//!
//! // Magnify for viewing; cells stay hard-edged blocks.
//! let shown = display(result.image(), 256);
//! assert_eq!(shown.width(), 256);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Image (any size, RGBA8)
//!     |
//!     v
//! crop_to_square          centered min(w, h) window
//!     |
//!     v
//! resize_area             box filter with fractional coverage, sRGB bytes
//!     |
//!     v
//! ColorSample<S>          RgbSpace: bytes as-is / LabSpace: sRGB -> XYZ -> CIELAB
//!     |
//!     v
//! KMeans<S>               seeded Lloyd's algorithm, empty clusters reseeded
//!     |
//!     +---> Palette       centroids back to 8-bit sRGB, ordered by PaletteOrder
//!     +---> ColorGrid     1-based palette label per cell
//!     +---> Image         logical-size board painted with the palette
//! ```
//!
//! # Configuration
//!
//! [`Posterizer`] exposes every knob:
//!
//! - [`ColorSpace`]: cluster on raw sRGB bytes (default) or in CIELAB
//! - [`PaletteOrder`]: palette entries in cluster order (default) or sorted
//!   by packed `0xRRGGBB`
//! - iteration cap (default 20) and seed (default 314159265)
//! - [`CancelToken`] to stop a run from another thread
//!
//! # Features
//!
//! - `parallel` (default): the k-means assignment step runs on rayon.
//!   Results are identical with or without it.
//! - `serde`: `Serialize`/`Deserialize` for the option enums, [`Rgb8`],
//!   [`Palette`] and [`KMeansReport`].

pub mod api;
pub mod color;
pub mod image;
pub mod kmeans;
pub mod output;
pub mod palette;
pub mod preprocess;


pub use api::{posterize, ParseOptionError, PosterizeError, Posterizer, MAX_COLORS};
pub use color::{lab_to_rgb, rgb_to_lab, Lab, LinearRgb, Rgb8, Srgb};
pub use image::Image;
pub use kmeans::{CancelToken, ColorSpace, KMeansReport};
pub use output::{display, ColorGrid, Posterized};
pub use palette::{Palette, PaletteOrder};
