use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use paintbynum::models::{AppConfig, DEFAULT_CONFIG_YAML};
use paintbynum::services::PuzzleService;
use posterize::{CancelToken, ColorSpace, PaletteOrder};

#[derive(Parser)]
#[command(name = "paintbynum")]
#[command(about = "Turn a photo into a paint-by-number board")]
struct Cli {
    /// Configuration file (defaults to $CONFIG_FILE)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Posterize a PNG photo and write the board files
    Generate {
        /// Input PNG photo
        #[arg(short, long)]
        input: PathBuf,

        /// Directory for <stem>_posterized.png and <stem>.json
        #[arg(short, long, default_value = ".")]
        output_dir: PathBuf,

        /// Board side length in cells
        #[arg(short, long)]
        size: Option<usize>,

        /// Number of paint colors
        #[arg(short, long)]
        colors: Option<usize>,

        /// k-means seed
        #[arg(long)]
        seed: Option<u64>,

        /// Clustering color space: rgb or lab
        #[arg(long)]
        space: Option<ColorSpace>,

        /// Palette order: cluster or value
        #[arg(long)]
        order: Option<PaletteOrder>,

        /// Side length of the preview PNG in pixels
        #[arg(short, long)]
        display: Option<usize>,

        /// Give up if clustering takes longer than this
        #[arg(long)]
        deadline_ms: Option<u64>,
    },
    /// Write the default config.yaml
    Init {
        /// Where to write the file
        #[arg(long, default_value = "config.yaml")]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long, short)]
        force: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "paintbynum=info,posterize=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let config_file = cli
        .config
        .or_else(|| std::env::var("CONFIG_FILE").ok().map(PathBuf::from));

    match cli.command {
        Some(Commands::Generate {
            input,
            output_dir,
            size,
            colors,
            seed,
            space,
            order,
            display,
            deadline_ms,
        }) => {
            let mut config = AppConfig::load(config_file.as_deref());
            if let Some(size) = size {
                config.logical_size = size;
            }
            if let Some(colors) = colors {
                config.num_colors = colors;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            if let Some(space) = space {
                config.color_space = space;
            }
            if let Some(order) = order {
                config.palette_order = order;
            }
            if let Some(display) = display {
                config.display_size = display;
            }
            run_generate_command(config, &input, &output_dir, deadline_ms)
        }
        Some(Commands::Init { path, force }) => run_init_command(&path, force),
        None => {
            run_status_command(config_file.as_deref());
            Ok(())
        }
    }
}

/// Posterize one photo and write its board files
fn run_generate_command(
    config: AppConfig,
    input: &Path,
    output_dir: &Path,
    deadline_ms: Option<u64>,
) -> anyhow::Result<()> {
    let token = CancelToken::new();
    if let Some(ms) = deadline_ms {
        let watchdog = token.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(ms));
            tracing::warn!(deadline_ms = ms, "Deadline reached, cancelling");
            watchdog.cancel();
        });
    }

    let service = PuzzleService::new(config);
    let generated = service.generate(input, output_dir, Some(token))?;

    println!("Wrote {}", generated.image_path.display());
    println!("Wrote {}", generated.json_path.display());
    println!("Palette:");
    for (i, (color, count)) in generated
        .puzzle
        .palette
        .iter()
        .zip(&generated.puzzle.counts)
        .enumerate()
    {
        println!("  {:>3}  {color}  {count} cells", i + 1);
    }
    Ok(())
}

/// Write the default configuration file
fn run_init_command(path: &Path, force: bool) -> anyhow::Result<()> {
    if path.exists() && !force {
        println!(
            "Skipped {} (exists, use --force to overwrite)",
            path.display()
        );
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG_YAML)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Display the effective configuration and available commands
fn run_status_command(config_file: Option<&Path>) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config = AppConfig::load(config_file);

    println!("paintbynum v{VERSION}");
    println!("Turn a photo into a paint-by-number board\n");

    println!("Configuration:");
    let source = match config_file {
        Some(path) if path.exists() => path.display().to_string(),
        Some(_) => "defaults (file not found)".to_string(),
        None => "defaults".to_string(),
    };
    println!("  source         = {source}");
    println!("  logical_size   = {}", config.logical_size);
    println!("  num_colors     = {}", config.num_colors);
    println!("  seed           = {}", config.seed);
    println!("  color_space    = {}", config.color_space);
    println!("  palette_order  = {}", config.palette_order);
    println!("  display_size   = {}", config.display_size);
    println!("  max_iterations = {}", config.max_iterations);

    println!("\nCommands:");
    println!("  paintbynum generate --input photo.png   Posterize a photo");
    println!("  paintbynum init                         Write config.yaml");
    println!("\nRun 'paintbynum --help' for all options.");
}
