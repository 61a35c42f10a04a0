//! RGBA image buffer shared by every pipeline stage.

use crate::api::PosterizeError;

/// An 8-bit RGBA image stored as one contiguous row-major buffer.
///
/// Images are never mutated after construction; each pipeline stage builds a
/// new one. Zero-sized images can be represented so that callers get a
/// proper [`PosterizeError::InvalidImage`] from [`posterize`](crate::posterize)
/// rather than a panic somewhere earlier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Image {
    /// Bytes per pixel.
    pub const CHANNELS: usize = 4;

    /// Wrap an RGBA buffer of exactly `width * height * 4` bytes.
    pub fn from_rgba(width: usize, height: usize, pixels: Vec<u8>) -> Result<Self, PosterizeError> {
        let expected = width * height * Self::CHANNELS;
        if pixels.len() != expected {
            return Err(PosterizeError::BufferSize {
                width,
                height,
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build an opaque image from packed RGB bytes.
    pub fn from_rgb(width: usize, height: usize, rgb: &[u8]) -> Result<Self, PosterizeError> {
        if rgb.len() != width * height * 3 {
            return Err(PosterizeError::BufferSize {
                width,
                height,
                expected: width * height * 3,
                actual: rgb.len(),
            });
        }
        let pixels = rgb
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect();
        Self::from_rgba(width, height, pixels)
    }

    /// An image where every pixel is `rgba`.
    pub fn filled(width: usize, height: usize, rgba: [u8; 4]) -> Result<Self, PosterizeError> {
        Self::from_rgba(width, height, rgba.repeat(width * height))
    }

    /// Wrap a buffer the caller has already sized correctly.
    pub(crate) fn from_raw_parts(width: usize, height: usize, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width * height * Self::CHANNELS,
            "buffer length must match {width}x{height} RGBA"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build an image pixel by pixel; `f` receives `(x, y)`.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> [u8; 4]) -> Self {
        let mut pixels = Vec::with_capacity(width * height * Self::CHANNELS);
        for y in 0..height {
            for x in 0..width {
                pixels.extend_from_slice(&f(x, y));
            }
        }
        Self::from_raw_parts(width, height, pixels)
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// True when either dimension is zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.pixels
    }

    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the image.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y * self.width + x) * Self::CHANNELS;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Iterate over pixels as `[r, g, b, a]`, row-major.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = [u8; 4]> + '_ {
        self.pixels
            .chunks_exact(Self::CHANNELS)
            .map(|p| [p[0], p[1], p[2], p[3]])
    }

    /// Iterate over pixels as `[r, g, b]`, ignoring alpha.
    pub fn rgb_pixels(&self) -> impl ExactSizeIterator<Item = [u8; 3]> + '_ {
        self.pixels
            .chunks_exact(Self::CHANNELS)
            .map(|p| [p[0], p[1], p[2]])
    }

    /// One row of raw RGBA bytes.
    #[inline]
    pub(crate) fn row(&self, y: usize) -> &[u8] {
        let stride = self.width * Self::CHANNELS;
        &self.pixels[y * stride..(y + 1) * stride]
    }
}
