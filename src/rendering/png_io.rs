use std::collections::HashMap;
use std::io::Cursor;
use std::path::Path;

use posterize::{Image, Palette, Rgb8};

use crate::error::AppError;

/// Decode a PNG into an RGBA image.
///
/// Palette and low-bit-depth images are expanded and 16-bit channels are
/// stripped, so every PNG color type ends up as 8-bit RGBA.
pub fn decode_png(bytes: &[u8]) -> Result<Image, AppError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info()?;
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf)?;
    buf.truncate(info.buffer_size());

    if info.bit_depth != png::BitDepth::Eight {
        return Err(AppError::UnsupportedPng(format!(
            "bit depth {:?} after expansion",
            info.bit_depth
        )));
    }

    let rgba = match info.color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|p| [p[0], p[1], p[2], 255])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|p| [p[0], p[0], p[0], p[1]])
            .collect(),
        png::ColorType::Indexed => {
            return Err(AppError::UnsupportedPng(
                "indexed color without palette".to_string(),
            ))
        }
    };

    tracing::debug!(
        width = info.width,
        height = info.height,
        color_type = ?info.color_type,
        "Decoded PNG"
    );
    Ok(Image::from_rgba(
        info.width as usize,
        info.height as usize,
        rgba,
    )?)
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<Image, AppError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode an image as PNG.
///
/// With a palette of at most 256 colors that covers every pixel, the image
/// is written as an indexed PNG at the smallest bit depth that fits.
/// Otherwise it is written as 8-bit RGBA.
pub fn encode_png(image: &Image, palette: Option<&Palette>) -> Result<Vec<u8>, AppError> {
    let width = image.width() as u32;
    let height = image.height() as u32;

    if let Some((palette, indices)) =
        palette.and_then(|p| palette_indices(image, p).map(|indices| (p, indices)))
    {
        let (depth, bits) = match palette.len() {
            0..=2 => (png::BitDepth::One, 1),
            3..=4 => (png::BitDepth::Two, 2),
            5..=16 => (png::BitDepth::Four, 4),
            _ => (png::BitDepth::Eight, 8),
        };
        let plte: Vec<u8> = palette.iter().flat_map(|c| c.to_array()).collect();
        let packed = if bits == 8 {
            indices
        } else {
            pack_nbits(&indices, width, bits)
        };
        return write_encoded(
            width,
            height,
            png::ColorType::Indexed,
            depth,
            Some(&plte),
            &packed,
        );
    }

    write_encoded(
        width,
        height,
        png::ColorType::Rgba,
        png::BitDepth::Eight,
        None,
        image.as_raw(),
    )
}

/// Encode and write a PNG file.
pub fn write_png(path: &Path, image: &Image, palette: Option<&Palette>) -> Result<(), AppError> {
    let bytes = encode_png(image, palette)?;
    std::fs::write(path, bytes)?;
    Ok(())
}

/// Palette index of every pixel, or `None` if the palette cannot express
/// the image (too many entries, a pixel color not in it, or transparency).
fn palette_indices(image: &Image, palette: &Palette) -> Option<Vec<u8>> {
    if palette.is_empty() || palette.len() > 256 {
        return None;
    }

    // First occurrence wins for repeated colors
    let mut lookup: HashMap<Rgb8, u8> = HashMap::with_capacity(palette.len());
    for (i, color) in palette.iter().enumerate() {
        lookup.entry(color).or_insert(i as u8);
    }

    image
        .pixels()
        .map(|[r, g, b, a]| {
            if a != 255 {
                return None;
            }
            lookup.get(&Rgb8::new(r, g, b)).copied()
        })
        .collect()
}

fn write_encoded(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    data: &[u8],
) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Best);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(data)?;
    }
    Ok(buf.into_inner())
}

/// Pack pixel values into N-bit PNG row data (1, 2, or 4 bits per pixel).
fn pack_nbits(indices: &[u8], width: u32, bits: u8) -> Vec<u8> {
    let pixels_per_byte = 8 / bits as usize;
    let bytes_per_row = (width as usize).div_ceil(pixels_per_byte);
    let height = indices.len() / width as usize;
    let mask = (1u8 << bits) - 1;
    let mut packed = Vec::with_capacity(bytes_per_row * height);

    for row in indices.chunks(width as usize) {
        let mut byte = 0u8;
        for (i, &idx) in row.iter().enumerate() {
            let shift = (8 - bits) - (i % pixels_per_byte) as u8 * bits;
            byte |= (idx & mask) << shift;

            if (i % pixels_per_byte) == pixels_per_byte - 1 || i == row.len() - 1 {
                packed.push(byte);
                byte = 0;
            }
        }
    }

    packed
}
