//! Unified error type for the posterize public API.

use thiserror::Error;

/// Everything that can make a posterize run fail.
///
/// There are no partial results: a run either returns a complete
/// [`Posterized`](crate::Posterized) or one of these.
///
/// # Example
///
/// ```
/// use posterize::{posterize, Image, PosterizeError};
///
/// let image = Image::filled(4, 4, [10, 20, 30, 255]).unwrap();
/// let err = posterize(&image, 0, 8, 1).unwrap_err();
/// assert!(matches!(err, PosterizeError::InvalidParameters(_)));
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PosterizeError {
    /// The source image has no pixels.
    #[error("invalid image: {width}x{height} has no pixels")]
    InvalidImage { width: usize, height: usize },

    /// The pixel buffer does not match the declared dimensions.
    #[error("pixel buffer holds {actual} bytes, {width}x{height} image needs {expected}")]
    BufferSize {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },

    /// A numeric parameter is out of range.
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),

    /// The run was stopped through its [`CancelToken`](crate::CancelToken).
    #[error("posterize run cancelled after {iterations} iterations")]
    Cancelled { iterations: usize },
}

/// Error returned when parsing a [`ColorSpace`](crate::ColorSpace) or
/// [`PaletteOrder`](crate::PaletteOrder) from a string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} `{value}` (expected one of: {expected})")]
pub struct ParseOptionError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let error = PosterizeError::InvalidImage {
            width: 0,
            height: 12,
        };
        assert_eq!(error.to_string(), "invalid image: 0x12 has no pixels");

        let error = PosterizeError::InvalidParameters("num_colors must be at least 1".into());
        assert_eq!(
            error.to_string(),
            "invalid parameters: num_colors must be at least 1"
        );

        let error = PosterizeError::Cancelled { iterations: 3 };
        assert_eq!(error.to_string(), "posterize run cancelled after 3 iterations");
    }

    #[test]
    fn test_parse_option_error_message() {
        let error = ParseOptionError {
            kind: "color space",
            value: "hsv".into(),
            expected: "rgb, lab",
        };
        assert_eq!(
            error.to_string(),
            "unknown color space `hsv` (expected one of: rgb, lab)"
        );
    }
}
