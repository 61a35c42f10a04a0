//! The result of a posterize run.

use super::ColorGrid;
use crate::image::Image;
use crate::kmeans::KMeansReport;
use crate::palette::Palette;

/// Palette, label grid and painted logical image of one run.
///
/// # Example
///
/// ```
/// use posterize::{posterize, Image};
///
/// let image = Image::filled(8, 6, [120, 80, 40, 255]).unwrap();
/// let result = posterize(&image, 3, 2, 1).unwrap();
///
/// assert_eq!(result.palette().len(), 2);
/// assert_eq!(result.grid().size(), 3);
/// assert_eq!((result.image().width(), result.image().height()), (3, 3));
/// ```
#[derive(Debug, Clone)]
pub struct Posterized {
    palette: Palette,
    grid: ColorGrid,
    image: Image,
    report: KMeansReport,
}

impl Posterized {
    pub(crate) fn new(palette: Palette, grid: ColorGrid, report: KMeansReport) -> Self {
        let image = grid.render(&palette);
        Self {
            palette,
            grid,
            image,
            report,
        }
    }

    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// One label per logical cell. If the run hit its iteration cap, a
    /// label is the cell's last assignment and not necessarily the nearest
    /// palette entry.
    #[inline]
    pub fn grid(&self) -> &ColorGrid {
        &self.grid
    }

    /// The logical-resolution image, each pixel its cell's palette color.
    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    /// Clustering diagnostics.
    #[inline]
    pub fn report(&self) -> &KMeansReport {
        &self.report
    }

    pub fn into_parts(self) -> (Palette, ColorGrid, Image) {
        (self.palette, self.grid, self.image)
    }
}
