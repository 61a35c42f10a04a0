//! Area-weighted resampling.
//!
//! Every output pixel is the coverage-weighted mean of the source pixels
//! under its footprint (a box filter with fractional edges).

use crate::image::Image;

/// Source taps for one output coordinate: `(source index, weight)`.
type Taps = Vec<(usize, f64)>;

/// Per-axis coverage weights mapping `src` samples onto `dst` samples.
///
/// Weights of each output sample are normalized to sum to 1.
fn axis_taps(src: usize, dst: usize) -> Vec<Taps> {
    (0..dst)
        .map(|i| {
            // Footprint of output sample i in source coordinates, computed
            // from integers so that exact ratios stay exact.
            let start = (i * src) as f64 / dst as f64;
            let end = ((i + 1) * src) as f64 / dst as f64;
            let first = start.floor() as usize;
            let last = (end.ceil() as usize).min(src);

            let mut taps: Taps = (first..last)
                .filter_map(|s| {
                    let overlap = end.min(s as f64 + 1.0) - start.max(s as f64);
                    (overlap > 0.0).then_some((s, overlap))
                })
                .collect();
            let total: f64 = taps.iter().map(|&(_, w)| w).sum();
            for tap in &mut taps {
                tap.1 /= total;
            }
            taps
        })
        .collect()
}

/// Resample `image` to `width x height` with area weighting.
///
/// Channels (alpha included) are averaged in sRGB byte space and rounded.
/// Summation order is fixed by the tap tables, so the result does not depend
/// on how the loops are scheduled.
///
/// # Panics
///
/// Panics if the source image or the target size is empty.
pub fn resize_area(image: &Image, width: usize, height: usize) -> Image {
    assert!(!image.is_empty(), "cannot resample an empty image");
    assert!(width > 0 && height > 0, "target size must be non-zero");

    if image.width() == width && image.height() == height {
        return image.clone();
    }

    let x_taps = axis_taps(image.width(), width);
    let y_taps = axis_taps(image.height(), height);

    Image::from_fn(width, height, |x, y| {
        let mut acc = [0.0f64; 4];
        for &(sy, wy) in &y_taps[y] {
            let row = image.row(sy);
            for &(sx, wx) in &x_taps[x] {
                let w = wx * wy;
                let p = &row[sx * Image::CHANNELS..(sx + 1) * Image::CHANNELS];
                for (a, &v) in acc.iter_mut().zip(p) {
                    *a += v as f64 * w;
                }
            }
        }
        acc.map(|v| v.round().clamp(0.0, 255.0) as u8)
    })
}
