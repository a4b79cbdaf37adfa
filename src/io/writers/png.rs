use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

/// Write an RGBA PNG, unconditionally overwriting any existing file.
/// The color type is pinned to Rgba8 so every output carries an alpha
/// channel, including fully opaque full-bleed icons.
pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<(), Box<dyn std::error::Error>> {
    let file = File::create(output)?;
    let writer = BufWriter::new(file);
    let encoder = PngEncoder::new(writer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}
