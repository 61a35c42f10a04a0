//! Square grid of palette labels.

use crate::image::Image;
use crate::palette::Palette;

/// `size x size` palette labels in one row-major buffer.
///
/// Every label is in `1..=palette.len()`. Label `0` never appears; consumers
/// are free to use it as an "unpainted" marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorGrid {
    size: usize,
    cells: Vec<u16>,
}

impl ColorGrid {
    /// Label every cell from its cluster assignment.
    ///
    /// `labels[k]` is the 1-based palette label for cluster `k`.
    pub(crate) fn from_assignments(size: usize, assignments: &[usize], labels: &[u16]) -> Self {
        debug_assert_eq!(assignments.len(), size * size);
        let cells = assignments.iter().map(|&k| labels[k]).collect();
        Self { size, cells }
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Label at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// If `x` or `y` is outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u16 {
        assert!(
            x < self.size && y < self.size,
            "cell ({x}, {y}) outside {0}x{0} grid",
            self.size
        );
        self.cells[y * self.size + x]
    }

    /// All labels, row-major.
    #[inline]
    pub fn as_slice(&self) -> &[u16] {
        &self.cells
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u16]> + '_ {
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Number of cells carrying each label; index 0 is label 1.
    pub fn label_counts(&self, labels: usize) -> Vec<usize> {
        let mut counts = vec![0; labels];
        for &cell in &self.cells {
            if let Some(slot) = (cell as usize).checked_sub(1).and_then(|i| counts.get_mut(i)) {
                *slot += 1;
            }
        }
        counts
    }

    /// Paint each cell with its palette color, fully opaque.
    pub fn render(&self, palette: &Palette) -> Image {
        Image::from_fn(self.size, self.size, |x, y| {
            palette
                .for_label(self.cells[y * self.size + x])
                .map(|c| c.to_rgba())
                .unwrap_or([0, 0, 0, 255])
        })
    }
}
