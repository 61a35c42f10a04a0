//! Geometry preprocessing: square crop and area-weighted downscale.
//!
//! The posterize pipeline always runs both, in this order:
//!
//! 1. [`crop_to_square`] - centered `min(w, h)` square
//! 2. [`resize_area`] - down (or up) to `logical_size x logical_size`
//!
//! ```
//! use posterize::preprocess::{crop_to_square, resize_area};
//! use posterize::Image;
//!
//! let photo = Image::filled(30, 20, [90, 60, 30, 255]).unwrap();
//! let square = crop_to_square(&photo);
//! let logical = resize_area(&square, 4, 4);
//! assert_eq!((logical.width(), logical.height()), (4, 4));
//! ```

mod crop;
mod resize;

pub use crop::crop_to_square;
pub use resize::resize_area;
