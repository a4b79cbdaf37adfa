use image::RgbaImage;
use ndarray::Array2;

/// Copy the mask into the alpha channel of `image`. Color channels are left
/// untouched; any alpha the source carried is discarded (CopyOpacity
/// semantics). The mask dimensions must match the image.
pub fn apply_mask_alpha(image: &mut RgbaImage, mask: &Array2<u8>) {
    debug_assert_eq!(mask.dim(), (image.height() as usize, image.width() as usize));
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        pixel[3] = mask[[y as usize, x as usize]];
    }
}

/// Alpha-composite `image` over an opaque solid `background`. The result is
/// fully opaque; transparency is removed intentionally.
pub fn flatten_onto(image: &RgbaImage, background: [u8; 4]) -> RgbaImage {
    let mut flattened = RgbaImage::new(image.width(), image.height());
    for (x, y, pixel) in image.enumerate_pixels() {
        let alpha = pixel[3] as u16;
        let inverse = 255 - alpha;
        let out = flattened.get_pixel_mut(x, y);
        for channel in 0..3 {
            let src = pixel[channel] as u16;
            let bg = background[channel] as u16;
            out[channel] = ((src * alpha + bg * inverse + 127) / 255) as u8;
        }
        out[3] = 255;
    }
    flattened
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::processing::mask::{MaskSpec, generate_mask};
    use crate::types::MaskAlgorithm;
    use image::Rgba;

    #[test]
    fn test_apply_mask_alpha_copies_mask_into_alpha() {
        let mut image = RgbaImage::from_pixel(64, 64, Rgba([10, 20, 30, 255]));
        let mask = generate_mask(
            MaskSpec::new(64, 48).unwrap(),
            MaskAlgorithm::Superellipse,
        );
        apply_mask_alpha(&mut image, &mask);

        assert_eq!(image.get_pixel(0, 0)[3], 0);
        assert_eq!(image.get_pixel(32, 32)[3], 255);
        // Color channels untouched either way.
        assert_eq!(&image.get_pixel(0, 0).0[..3], &[10, 20, 30]);
        assert_eq!(&image.get_pixel(32, 32).0[..3], &[10, 20, 30]);
    }

    #[test]
    fn test_flatten_keeps_opaque_pixels() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 255]));
        let flattened = flatten_onto(&image, [15, 15, 15, 255]);
        assert_eq!(flattened.get_pixel(1, 1), &Rgba([200, 100, 50, 255]));
    }

    #[test]
    fn test_flatten_replaces_transparent_pixels_with_background() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([200, 100, 50, 0]));
        let flattened = flatten_onto(&image, [15, 15, 15, 255]);
        assert_eq!(flattened.get_pixel(2, 2), &Rgba([15, 15, 15, 255]));
    }

    #[test]
    fn test_flatten_blends_partial_alpha() {
        let image = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 255, 128]));
        let flattened = flatten_onto(&image, [0, 0, 0, 255]);
        let pixel = flattened.get_pixel(0, 0);
        assert_eq!(pixel[3], 255);
        assert!((pixel[0] as i16 - 128).abs() <= 1);
    }

    #[test]
    fn test_flatten_output_is_fully_opaque() {
        let mut image = RgbaImage::from_pixel(8, 8, Rgba([80, 90, 100, 255]));
        let mask = generate_mask(MaskSpec::edge_to_edge(8).unwrap(), MaskAlgorithm::RoundedRect);
        apply_mask_alpha(&mut image, &mask);
        let flattened = flatten_onto(&image, [255, 255, 255, 255]);
        assert!(flattened.pixels().all(|p| p[3] == 255));
    }
}
