//! Nearest-neighbor magnification for viewing a posterized board.

use crate::image::Image;

/// Magnify a square image to `size x size` without smoothing.
///
/// Destination pixel `d` samples source pixel `d * n / size` on each axis, so
/// every logical cell stays a hard-edged block. When `size` is not larger
/// than the source the image is returned unchanged.
///
/// ```
/// use posterize::{display, Image};
///
/// let logical = Image::from_fn(2, 2, |x, y| [(x * 100) as u8, (y * 100) as u8, 0, 255]);
/// let shown = display(&logical, 6);
/// assert_eq!(shown.width(), 6);
/// assert_eq!(shown.pixel(2, 5), [0, 100, 0, 255]);
/// assert_eq!(shown.pixel(3, 0), [100, 0, 0, 255]);
/// ```
pub fn display(image: &Image, size: usize) -> Image {
    let n = image.width().max(image.height());
    if size <= n || image.is_empty() {
        return image.clone();
    }

    let (src_w, src_h) = (image.width(), image.height());
    Image::from_fn(size, size, |x, y| {
        image.pixel(x * src_w / size, y * src_h / size)
    })
}
