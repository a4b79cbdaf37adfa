use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{info, warn};

pub fn calculate_fit_dimensions(
    original_width: u32,
    original_height: u32,
    target_size: u32,
) -> (u32, u32) {
    let long_side = original_width.max(original_height);

    if target_size > long_side {
        warn!(
            "Target size {} is larger than original long side {}. Upscaling {}x{}",
            target_size, long_side, original_width, original_height
        );
    }

    let scale_factor = target_size as f64 / long_side as f64;
    let new_short_side = (original_width.min(original_height) as f64 * scale_factor)
        .round()
        .max(1.0) as u32;

    if original_width >= original_height {
        (target_size, new_short_side)
    } else {
        (new_short_side, target_size)
    }
}

pub fn resize_rgba_image(
    source: &RgbaImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        source.width(),
        source.height(),
        source.as_raw().clone(),
        PixelType::U8x4,
    )?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
        .ok_or_else(|| "resized buffer does not match target dimensions".into())
}

/// Center `source` on a transparent square canvas of `canvas` pixels.
pub fn center_on_canvas(source: &RgbaImage, canvas: u32) -> RgbaImage {
    let cols = source.width() as usize;
    let rows = source.height() as usize;
    let dim = canvas as usize;
    let pad_left = (dim - cols) / 2;
    let pad_top = (dim - rows) / 2;

    let src = source.as_raw();
    let mut padded = vec![0u8; dim * dim * 4];
    // Copy per row using slice copies to minimize per-pixel indexing
    for row in 0..rows {
        let src_offset = row * cols * 4;
        let dst_offset = ((row + pad_top) * dim + pad_left) * 4;
        let src_slice = &src[src_offset..src_offset + cols * 4];
        let dst_slice = &mut padded[dst_offset..dst_offset + cols * 4];
        dst_slice.copy_from_slice(src_slice);
    }

    RgbaImage::from_raw(canvas, canvas, padded).expect("padded buffer matches canvas dimensions")
}

/// Resample `source` so its long side equals `target_size`, then center it on
/// a transparent square canvas of that size. A source already at the target
/// square is passed through without resampling.
pub fn fit_to_square(
    source: &RgbaImage,
    target_size: u32,
) -> Result<RgbaImage, Box<dyn std::error::Error>> {
    if source.width() == target_size && source.height() == target_size {
        return Ok(source.clone());
    }

    let (new_width, new_height) =
        calculate_fit_dimensions(source.width(), source.height(), target_size);
    info!(
        "Original size: {}x{}, New size: {}x{}",
        source.width(),
        source.height(),
        new_width,
        new_height
    );

    let resized = resize_rgba_image(source, new_width, new_height)?;
    if new_width == target_size && new_height == target_size {
        Ok(resized)
    } else {
        Ok(center_on_canvas(&resized, target_size))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_calculate_fit_dimensions_landscape() {
        assert_eq!(calculate_fit_dimensions(400, 200, 100), (100, 50));
    }

    #[test]
    fn test_calculate_fit_dimensions_portrait() {
        assert_eq!(calculate_fit_dimensions(200, 400, 100), (50, 100));
    }

    #[test]
    fn test_calculate_fit_dimensions_square_upscale() {
        assert_eq!(calculate_fit_dimensions(256, 256, 512), (512, 512));
    }

    #[test]
    fn test_calculate_fit_dimensions_never_collapses_short_side() {
        let (w, h) = calculate_fit_dimensions(1000, 3, 100);
        assert_eq!(w, 100);
        assert!(h >= 1);
    }

    #[test]
    fn test_identity_resize_keeps_dimensions() {
        let source = RgbaImage::from_pixel(64, 64, Rgba([200, 100, 50, 255]));
        let once = fit_to_square(&source, 64).unwrap();
        let twice = fit_to_square(&once, 64).unwrap();
        assert_eq!((once.width(), once.height()), (64, 64));
        assert_eq!((twice.width(), twice.height()), (64, 64));
        assert_eq!(once.as_raw(), twice.as_raw());
    }

    #[test]
    fn test_fit_to_square_pads_non_square_source() {
        let source = RgbaImage::from_pixel(64, 32, Rgba([10, 20, 30, 255]));
        let fitted = fit_to_square(&source, 64).unwrap();
        assert_eq!((fitted.width(), fitted.height()), (64, 64));
        // Top padding row stays transparent, center row carries the image.
        assert_eq!(fitted.get_pixel(32, 0)[3], 0);
        assert_eq!(fitted.get_pixel(32, 32)[3], 255);
    }

    #[test]
    fn test_center_on_canvas_places_content_centered() {
        let source = RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255]));
        let padded = center_on_canvas(&source, 6);
        assert_eq!(padded.get_pixel(0, 0)[3], 0);
        assert_eq!(padded.get_pixel(2, 2)[3], 255);
        assert_eq!(padded.get_pixel(3, 3)[3], 255);
        assert_eq!(padded.get_pixel(5, 5)[3], 0);
    }
}
