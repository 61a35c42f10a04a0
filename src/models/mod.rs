pub mod config;
pub mod puzzle;

pub use config::{AppConfig, DEFAULT_CONFIG_YAML};
pub use puzzle::{Puzzle, PuzzleParams};
