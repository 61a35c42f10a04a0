//! Palette types
//!
//! A [`Palette`] is the ordered list of display colors a board is painted
//! with. Grid cell `n` refers to palette entry `n - 1`. [`PaletteOrder`]
//! decides how cluster centroids are laid out in that list.

mod order;
#[allow(clippy::module_inception)]
mod palette;

pub use order::PaletteOrder;
pub use palette::Palette;
