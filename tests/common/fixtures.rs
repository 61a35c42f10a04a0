//! Test fixtures: synthetic photos written as PNG files.

use std::path::{Path, PathBuf};

/// Colors used by the synthetic photos
pub mod colors {
    pub const RED: [u8; 3] = [220, 40, 40];
    pub const GREEN: [u8; 3] = [40, 180, 60];
    pub const BLUE: [u8; 3] = [30, 90, 200];
    pub const CREAM: [u8; 3] = [245, 235, 200];
}

/// Write raw 8-bit pixel data as a PNG and return its path
pub fn write_png(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut encoder = png::Encoder::new(std::io::BufWriter::new(file), width, height);
    encoder.set_color(color_type);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().unwrap();
    writer.write_image_data(data).unwrap();
    path
}

/// RGB photo built pixel by pixel
pub fn rgb_photo(
    dir: &Path,
    name: &str,
    width: u32,
    height: u32,
    f: impl Fn(u32, u32) -> [u8; 3],
) -> PathBuf {
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&f(x, y));
        }
    }
    write_png(dir, name, width, height, png::ColorType::Rgb, &data)
}

/// Checkerboard of 8x8 blocks in two colors
pub fn checkerboard_photo(dir: &Path, name: &str, size: u32) -> PathBuf {
    rgb_photo(dir, name, size, size, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            colors::RED
        } else {
            colors::BLUE
        }
    })
}

/// Landscape photo: three vertical bands, only the middle one survives the
/// square crop
pub fn banded_landscape_photo(dir: &Path, name: &str) -> PathBuf {
    rgb_photo(dir, name, 90, 30, |x, _| match x {
        0..=29 => colors::RED,
        30..=59 => colors::GREEN,
        _ => colors::BLUE,
    })
}

/// Four flat quadrants
pub fn quadrant_photo(dir: &Path, name: &str) -> PathBuf {
    rgb_photo(dir, name, 64, 64, |x, y| match (x < 32, y < 32) {
        (true, true) => colors::RED,
        (false, true) => colors::GREEN,
        (true, false) => colors::BLUE,
        (false, false) => colors::CREAM,
    })
}

/// Smooth gradient with some texture
pub fn gradient_photo(dir: &Path, name: &str) -> PathBuf {
    rgb_photo(dir, name, 120, 80, |x, y| {
        [
            (x * 2) as u8,
            (y * 3) as u8,
            if (x / 7 + y / 5) % 2 == 0 { 200 } else { 60 },
        ]
    })
}

/// Write a config file and return its path
pub fn write_config(dir: &Path, yaml: &str) -> PathBuf {
    let path = dir.join("config.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

/// `#RRGGBB` for a fixture color
pub fn hex(rgb: [u8; 3]) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}
