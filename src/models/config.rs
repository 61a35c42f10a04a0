use posterize::{ColorSpace, PaletteOrder, Posterizer};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The commented default configuration written by `paintbynum init`.
pub const DEFAULT_CONFIG_YAML: &str = include_str!("../../config.yaml");

/// Application configuration loaded from config.yaml
///
/// Values are not range-checked here; the engine rejects out-of-range
/// sizes and counts when a board is generated.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Board side length in cells
    pub logical_size: usize,

    /// Number of palette colors
    pub num_colors: usize,

    /// k-means seed
    pub seed: u64,

    /// Clustering color space
    pub color_space: ColorSpace,

    /// Palette ordering policy
    pub palette_order: PaletteOrder,

    /// Side length of the posterized preview PNG
    pub display_size: usize,

    /// k-means iteration cap
    pub max_iterations: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logical_size: 32,
            num_colors: 8,
            seed: posterize::kmeans::DEFAULT_SEED,
            color_space: ColorSpace::Rgb,
            palette_order: PaletteOrder::ClusterOrder,
            display_size: 512,
            max_iterations: posterize::kmeans::DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file.
    ///
    /// Without a path, or when the file cannot be read or parsed, the
    /// defaults are used.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        logical_size = config.logical_size,
                        num_colors = config.num_colors,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty or comment-only document parses as null
        if content.lines().all(|l| {
            let l = l.trim();
            l.is_empty() || l.starts_with('#')
        }) {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }

    /// Engine builder carrying these settings.
    pub fn posterizer(&self) -> Posterizer {
        Posterizer::new(self.logical_size, self.num_colors)
            .seed(self.seed)
            .color_space(self.color_space)
            .palette_order(self.palette_order)
            .max_iterations(self.max_iterations)
    }
}
