//! Center crop to a square.

use crate::image::Image;

/// Crop the centered `min(width, height)` square out of `image`.
///
/// The window starts at `((width - side) / 2, (height - side) / 2)`, so an
/// odd leftover drops its extra column or row on the right/bottom. A square
/// input comes back as an identical copy.
pub fn crop_to_square(image: &Image) -> Image {
    let side = image.width().min(image.height());
    let x_offset = (image.width() - side) / 2;
    let y_offset = (image.height() - side) / 2;

    if side == image.width() && side == image.height() {
        return image.clone();
    }

    let mut pixels = Vec::with_capacity(side * side * Image::CHANNELS);
    for y in y_offset..y_offset + side {
        let row = image.row(y);
        pixels.extend_from_slice(
            &row[x_offset * Image::CHANNELS..(x_offset + side) * Image::CHANNELS],
        );
    }

    Image::from_raw_parts(side, side, pixels)
}
