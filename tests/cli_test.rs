//! Tests for the paintbynum command-line interface.

mod common;

use common::*;
use paintbynum::models::{Puzzle, DEFAULT_CONFIG_YAML};
use pretty_assertions::assert_eq;
use std::path::Path;
use std::process::{Command, Output};

fn paintbynum(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_paintbynum"))
        .args(args)
        .current_dir(cwd)
        .env_remove("CONFIG_FILE")
        .env("RUST_LOG", "off")
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_status_without_subcommand() {
    let dir = tempfile::tempdir().unwrap();
    let output = paintbynum(&[], dir.path());

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Configuration:"), "{text}");
    assert!(text.contains("num_colors     = 8"), "{text}");
    assert!(text.contains("paintbynum generate"), "{text}");
}

#[test]
fn test_init_writes_default_config_once() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("conf").join("config.yaml");
    let path_arg = path.to_str().unwrap();

    let output = paintbynum(&["init", "--path", path_arg], dir.path());
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_YAML);

    std::fs::write(&path, "num_colors: 3\n").unwrap();
    let output = paintbynum(&["init", "--path", path_arg], dir.path());
    assert!(output.status.success());
    assert!(stdout(&output).contains("Skipped"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "num_colors: 3\n");

    let output = paintbynum(&["init", "--path", path_arg, "--force"], dir.path());
    assert!(output.status.success());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_YAML);
}

#[test]
fn test_generate_with_flags() {
    let dir = tempfile::tempdir().unwrap();
    let input = quadrant_photo(dir.path(), "quad.png");
    let out = dir.path().join("out");

    let output = paintbynum(
        &[
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--output-dir",
            out.to_str().unwrap(),
            "--size",
            "4",
            "--colors",
            "2",
            "--seed",
            "99",
            "--space",
            "lab",
            "--order",
            "value",
            "--display",
            "16",
        ],
        dir.path(),
    );
    assert!(
        output.status.success(),
        "{}",
        String::from_utf8_lossy(&output.stderr)
    );

    let json = std::fs::read_to_string(out.join("quad.json")).unwrap();
    let puzzle = Puzzle::from_json(&json).unwrap();
    assert_valid_puzzle(&puzzle);
    assert_eq!(puzzle.params.logical_size, 4);
    assert_eq!(puzzle.params.num_colors, 2);
    assert_eq!(puzzle.params.seed, 99);
    assert_eq!(puzzle.params.color_space.to_string(), "lab");
    assert_eq!(puzzle.params.palette_order.to_string(), "value");

    assert_png_file(&out.join("quad_posterized.png"), 16, 16);
    assert!(stdout(&output).contains("quad_posterized.png"));
}

#[test]
fn test_generate_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = gradient_photo(dir.path(), "grad.png");
    let config = write_config(dir.path(), "logical_size: 6\nnum_colors: 3\ndisplay_size: 6\n");

    let output = paintbynum(
        &[
            "--config",
            config.to_str().unwrap(),
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--colors",
            "4",
        ],
        dir.path(),
    );
    assert!(output.status.success());

    let puzzle = Puzzle::from_json(&std::fs::read_to_string(dir.path().join("grad.json")).unwrap())
        .unwrap();
    // file value kept, flag value overrides
    assert_eq!(puzzle.params.logical_size, 6);
    assert_eq!(puzzle.params.num_colors, 4);
    assert_png_file(&dir.path().join("grad_posterized.png"), 6, 6);
}

#[test]
fn test_generate_rejects_bad_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = gradient_photo(dir.path(), "grad.png");
    let input_arg = input.to_str().unwrap();

    let output = paintbynum(&["generate", "--input", input_arg, "--space", "hsv"], dir.path());
    assert!(!output.status.success());

    let output = paintbynum(&["generate", "--input", input_arg, "--colors", "0"], dir.path());
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("num_colors"));

    let output = paintbynum(&["generate", "--input", "missing.png"], dir.path());
    assert!(!output.status.success());
}
