use posterize::{ColorSpace, KMeansReport, PaletteOrder, Posterized};
use serde::{Deserialize, Serialize};

use super::AppConfig;

/// Settings a board was generated with, enough to reproduce it on any
/// target for the same source image.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PuzzleParams {
    pub logical_size: usize,
    pub num_colors: usize,
    pub seed: u64,
    pub color_space: ColorSpace,
    pub palette_order: PaletteOrder,
    pub max_iterations: usize,
}

impl From<&AppConfig> for PuzzleParams {
    fn from(config: &AppConfig) -> Self {
        Self {
            logical_size: config.logical_size,
            num_colors: config.num_colors,
            seed: config.seed,
            color_space: config.color_space,
            palette_order: config.palette_order,
            max_iterations: config.max_iterations,
        }
    }
}

/// A paint-by-number board as written to `<stem>.json`.
///
/// `grid[y][x]` is a 1-based index into `palette`; `counts[i]` is the number
/// of cells painted with `palette[i]`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Puzzle {
    /// File name of the source photo
    pub source: String,
    pub params: PuzzleParams,
    /// Palette colors as `#RRGGBB`
    pub palette: Vec<String>,
    pub counts: Vec<usize>,
    pub grid: Vec<Vec<u16>>,
    pub report: KMeansReport,
}

impl Puzzle {
    pub fn new(source: impl Into<String>, params: PuzzleParams, result: &Posterized) -> Self {
        let palette = result.palette();
        let grid = result.grid();
        Self {
            source: source.into(),
            params,
            palette: palette.iter().map(|c| c.to_hex()).collect(),
            counts: grid.label_counts(palette.len()),
            grid: grid.rows().map(<[u16]>::to_vec).collect(),
            report: result.report().clone(),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
