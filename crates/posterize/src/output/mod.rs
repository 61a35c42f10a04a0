//! Output types for the posterize pipeline.
//!
//! A run produces a [`Posterized`]: the [`Palette`](crate::Palette), a
//! [`ColorGrid`] of 1-based palette labels, and the logical-resolution image
//! painted with those colors. [`display`] magnifies that image for viewing.

mod color_grid;
mod posterized;
mod upscale;

pub use color_grid::ColorGrid;
pub use posterized::Posterized;
pub use upscale::display;
