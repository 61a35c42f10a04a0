use crate::error::AppError;
use crate::models::{AppConfig, Puzzle, PuzzleParams};
use crate::rendering::{read_png, write_png};
use posterize::{display, CancelToken, Image, Posterized};
use std::path::{Path, PathBuf};

/// Files written for one board
#[derive(Debug, Clone)]
pub struct GeneratedPuzzle {
    /// Magnified posterized preview
    pub image_path: PathBuf,
    /// Puzzle description (palette, grid, parameters)
    pub json_path: PathBuf,
    pub puzzle: Puzzle,
}

/// Turns photos into paint-by-number boards using one configuration
pub struct PuzzleService {
    config: AppConfig,
}

impl PuzzleService {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Posterize an in-memory image with the configured settings
    pub fn posterize(
        &self,
        image: &Image,
        cancel: Option<CancelToken>,
    ) -> Result<Posterized, AppError> {
        let mut posterizer = self.config.posterizer();
        if let Some(token) = cancel {
            posterizer = posterizer.cancel_token(token);
        }
        Ok(posterizer.run(image)?)
    }

    /// Load `input`, posterize it and write `<stem>_posterized.png` and
    /// `<stem>.json` into `output_dir`.
    ///
    /// Nothing is written if posterizing fails or is cancelled.
    pub fn generate(
        &self,
        input: &Path,
        output_dir: &Path,
        cancel: Option<CancelToken>,
    ) -> Result<GeneratedPuzzle, AppError> {
        let image = read_png(input)?;
        tracing::info!(
            input = %input.display(),
            width = image.width(),
            height = image.height(),
            "Loaded photo"
        );

        let result = self.posterize(&image, cancel)?;
        let report = result.report();
        tracing::info!(
            iterations = report.iterations,
            converged = report.converged,
            reseeds = report.reseeds,
            "Posterized"
        );

        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .filter(|s| !s.is_empty())
            .unwrap_or("puzzle");
        let source = input
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let puzzle = Puzzle::new(source, PuzzleParams::from(&self.config), &result);
        let json = puzzle.to_json()?;

        let preview = display(result.image(), self.config.display_size);

        std::fs::create_dir_all(output_dir)?;
        let image_path = output_dir.join(format!("{stem}_posterized.png"));
        let json_path = output_dir.join(format!("{stem}.json"));
        write_png(&image_path, &preview, Some(result.palette()))?;
        std::fs::write(&json_path, json)?;

        tracing::info!(
            image = %image_path.display(),
            json = %json_path.display(),
            "Wrote puzzle"
        );

        Ok(GeneratedPuzzle {
            image_path,
            json_path,
            puzzle,
        })
    }
}
