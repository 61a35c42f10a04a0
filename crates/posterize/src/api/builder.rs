//! Posterizer builder -- the primary entry point for the crate.
//!
//! [`Posterizer`] wraps the pipeline (crop, downscale, cluster, palette,
//! grid) behind fluent configuration. [`posterize`] is the shorthand with
//! every option at its default.

use super::PosterizeError;
use crate::image::Image;
use crate::kmeans::{
    CancelToken, ClusterSpace, ColorSample, ColorSpace, KMeans, LabSpace, RgbSpace,
    DEFAULT_MAX_ITERATIONS, DEFAULT_SEED,
};
use crate::output::{ColorGrid, Posterized};
use crate::palette::{Palette, PaletteOrder};
use crate::preprocess::{crop_to_square, resize_area};

/// Largest palette a [`ColorGrid`] can label.
pub const MAX_COLORS: usize = u16::MAX as usize;

/// Posterize `image` with default options: RGB clustering, cluster-ordered
/// palette, 20 iterations at most.
///
/// # Example
///
/// ```
/// use posterize::{posterize, Image};
///
/// let photo = Image::from_fn(40, 30, |x, _| if x < 20 { [200, 30, 30, 255] } else { [20, 20, 180, 255] });
/// let result = posterize(&photo, 4, 2, 314159265).unwrap();
///
/// assert_eq!(result.palette().len(), 2);
/// assert!(result.grid().as_slice().iter().all(|&v| (1..=2).contains(&v)));
/// ```
pub fn posterize(
    image: &Image,
    logical_size: usize,
    num_colors: usize,
    seed: u64,
) -> Result<Posterized, PosterizeError> {
    Posterizer::new(logical_size, num_colors).seed(seed).run(image)
}

/// High-level posterize builder.
///
/// - Constructor takes the two required sizes
/// - Configuration methods consume and return `self`
/// - [`run()`](Self::run) takes `&self`, so one builder can process many
///   images
///
/// # Example
///
/// ```
/// use posterize::{ColorSpace, Image, PaletteOrder, Posterizer};
///
/// let photo = Image::filled(16, 16, [90, 140, 200, 255]).unwrap();
/// let result = Posterizer::new(8, 3)
///     .seed(7)
///     .color_space(ColorSpace::Lab)
///     .palette_order(PaletteOrder::ByValue)
///     .run(&photo)
///     .unwrap();
///
/// assert_eq!(result.grid().size(), 8);
/// ```
#[derive(Debug, Clone)]
pub struct Posterizer {
    logical_size: usize,
    num_colors: usize,
    seed: u64,
    color_space: ColorSpace,
    palette_order: PaletteOrder,
    max_iterations: usize,
    cancel: Option<CancelToken>,
}

impl Posterizer {
    /// Board of `logical_size x logical_size` cells in `num_colors` colors.
    pub fn new(logical_size: usize, num_colors: usize) -> Self {
        Self {
            logical_size,
            num_colors,
            seed: DEFAULT_SEED,
            color_space: ColorSpace::default(),
            palette_order: PaletteOrder::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
            cancel: None,
        }
    }

    /// Seed for centroid initialization and reseeding.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    #[inline]
    pub fn color_space(mut self, color_space: ColorSpace) -> Self {
        self.color_space = color_space;
        self
    }

    #[inline]
    pub fn palette_order(mut self, order: PaletteOrder) -> Self {
        self.palette_order = order;
        self
    }

    /// Cap on k-means iterations. Must be at least 1.
    #[inline]
    pub fn max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Token checked before every k-means iteration.
    #[inline]
    pub fn cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Run the full pipeline on `image`.
    ///
    /// 1. Validate image, then parameters
    /// 2. Center-crop to a square and area-downscale to `logical_size`
    /// 3. Cluster the logical pixels in the configured color space
    /// 4. Build the palette and label grid
    pub fn run(&self, image: &Image) -> Result<Posterized, PosterizeError> {
        if image.is_empty() {
            return Err(PosterizeError::InvalidImage {
                width: image.width(),
                height: image.height(),
            });
        }
        self.validate()?;

        let square = crop_to_square(image);
        let logical = resize_area(&square, self.logical_size, self.logical_size);
        tracing::debug!(
            source_width = image.width(),
            source_height = image.height(),
            crop = square.width(),
            logical_size = self.logical_size,
            num_colors = self.num_colors,
            color_space = %self.color_space,
            "posterizing"
        );

        match self.color_space {
            ColorSpace::Rgb => self.quantize::<RgbSpace>(&logical),
            ColorSpace::Lab => self.quantize::<LabSpace>(&logical),
        }
    }

    fn validate(&self) -> Result<(), PosterizeError> {
        let reason = if self.logical_size == 0 {
            "logical_size must be at least 1".to_string()
        } else if self.num_colors == 0 {
            "num_colors must be at least 1".to_string()
        } else if self.num_colors > MAX_COLORS {
            format!(
                "num_colors must be at most {MAX_COLORS}, got {}",
                self.num_colors
            )
        } else if self.max_iterations == 0 {
            "max_iterations must be at least 1".to_string()
        } else {
            return Ok(());
        };
        Err(PosterizeError::InvalidParameters(reason))
    }

    fn quantize<S: ClusterSpace>(&self, logical: &Image) -> Result<Posterized, PosterizeError> {
        let samples: Vec<ColorSample<S>> = logical.rgb_pixels().map(ColorSample::from_rgb).collect();

        let clustering = KMeans::new(&samples, self.num_colors, self.seed)?
            .run(self.max_iterations, self.cancel.as_ref())?;

        let colors = clustering.centroids.iter().map(|c| c.to_rgb()).collect();
        let (palette, labels) = Palette::arrange(colors, self.palette_order);
        let grid = ColorGrid::from_assignments(self.logical_size, &clustering.assignments, &labels);

        tracing::debug!(
            space = %S::KIND,
            iterations = clustering.report.iterations,
            converged = clustering.report.converged,
            reseeds = clustering.report.reseeds,
            "clustering finished"
        );

        Ok(Posterized::new(palette, grid, clustering.report))
    }
}
