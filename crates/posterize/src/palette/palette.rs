//! The display palette of a posterized board.

use std::ops::Index;

use super::PaletteOrder;
use crate::color::Rgb8;

/// Ordered display colors, one per cluster.
///
/// Entries may repeat: two clusters whose centroids round to the same 8-bit
/// color still get their own entries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette {
    colors: Vec<Rgb8>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb8>) -> Self {
        Self { colors }
    }

    /// Lay out per-cluster colors according to `order`.
    ///
    /// Returns the palette and, for each cluster index, the 1-based grid
    /// label that now refers to it.
    ///
    /// ```
    /// use posterize::{Palette, PaletteOrder, Rgb8};
    ///
    /// let clusters = vec![Rgb8::new(200, 0, 0), Rgb8::new(0, 0, 9)];
    /// let (palette, labels) = Palette::arrange(clusters, PaletteOrder::ByValue);
    /// assert_eq!(palette[0], Rgb8::new(0, 0, 9));
    /// assert_eq!(labels, vec![2, 1]);
    /// ```
    pub fn arrange(clusters: Vec<Rgb8>, order: PaletteOrder) -> (Self, Vec<u16>) {
        let mut positions: Vec<usize> = (0..clusters.len()).collect();
        if order == PaletteOrder::ByValue {
            // Stable sort keeps cluster order among equal colors.
            positions.sort_by_key(|&k| clusters[k].packed());
        }

        let mut labels = vec![0u16; clusters.len()];
        for (slot, &k) in positions.iter().enumerate() {
            labels[k] = (slot + 1) as u16;
        }
        let colors = positions.iter().map(|&k| clusters[k]).collect();

        (Self { colors }, labels)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Rgb8> {
        self.colors.get(index).copied()
    }

    /// Color for a 1-based grid label.
    #[inline]
    pub fn for_label(&self, label: u16) -> Option<Rgb8> {
        (label as usize).checked_sub(1).and_then(|i| self.get(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb8> + '_ {
        self.colors.iter().copied()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Rgb8] {
        &self.colors
    }
}

impl Index<usize> for Palette {
    type Output = Rgb8;

    fn index(&self, index: usize) -> &Rgb8 {
        &self.colors[index]
    }
}
