//! Assertion helpers for tests.

use paintbynum::models::Puzzle;
use paintbynum::rendering::read_png;
use posterize::Image;
use pretty_assertions::assert_eq;
use std::path::Path;

/// Assert the puzzle is internally consistent with its parameters
pub fn assert_valid_puzzle(puzzle: &Puzzle) {
    let n = puzzle.params.logical_size;
    let k = puzzle.params.num_colors;

    assert_eq!(puzzle.palette.len(), k, "palette length");
    assert_eq!(puzzle.counts.len(), k, "counts length");
    assert_eq!(puzzle.grid.len(), n, "grid rows");
    for row in &puzzle.grid {
        assert_eq!(row.len(), n, "grid row length");
        for &cell in row {
            assert!(
                cell >= 1 && cell as usize <= k,
                "grid value {cell} outside 1..={k}"
            );
        }
    }
    assert_eq!(puzzle.counts.iter().sum::<usize>(), n * n, "counts total");

    for color in &puzzle.palette {
        assert!(
            color.len() == 7
                && color.starts_with('#')
                && color[1..].chars().all(|c| c.is_ascii_hexdigit()),
            "palette entry {color:?} is not #RRGGBB"
        );
    }
}

/// Assert a file is a decodable PNG of the given size and return it
pub fn assert_png_file(path: &Path, width: usize, height: usize) -> Image {
    assert!(path.exists(), "missing {}", path.display());
    let image = read_png(path).unwrap();
    assert_eq!(
        (image.width(), image.height()),
        (width, height),
        "PNG dimensions of {}",
        path.display()
    );
    image
}

/// Assert the preview image paints each grid cell as a uniform block of its
/// palette color
pub fn assert_preview_matches_grid(preview: &Image, puzzle: &Puzzle) {
    let n = puzzle.params.logical_size;
    let size = preview.width();
    for y in 0..size {
        for x in 0..size {
            let label = puzzle.grid[y * n / size][x * n / size];
            let hex = &puzzle.palette[label as usize - 1];
            let [r, g, b, a] = preview.pixel(x, y);
            assert_eq!(a, 255);
            assert_eq!(
                &format!("#{r:02X}{g:02X}{b:02X}"),
                hex,
                "preview pixel ({x}, {y})"
            );
        }
    }
}
