use image::RgbaImage;
use tracing::debug;

use crate::core::params::PipelineParams;
use crate::core::processing::composite::{apply_mask_alpha, flatten_onto};
use crate::core::processing::mask::{MaskSpec, generate_mask};
use crate::core::processing::resize::fit_to_square;
use crate::error::{Error, Result};
use crate::types::IconVariant;

/// Produce one icon raster: resample the source to a `target_size` square,
/// then either pre-bake the squircle alpha or flatten onto the solid
/// background, depending on the variant. Each call is independent; no output
/// depends on another.
pub fn render_icon(
    source: &RgbaImage,
    target_size: u32,
    params: &PipelineParams,
) -> Result<RgbaImage> {
    if target_size == 0 {
        return Err(Error::ZeroSize { size: target_size });
    }

    match params.variant {
        IconVariant::Masked => {
            let mut masked = fit_to_square(source, target_size).map_err(Error::external)?;
            let spec = MaskSpec::with_body_ratio(target_size, params.body_ratio)?;
            let mask = generate_mask(spec, params.algorithm);
            apply_mask_alpha(&mut masked, &mask);
            debug!(
                "Rendered masked icon: {}px, body={}",
                target_size,
                spec.body()
            );
            Ok(masked)
        }
        IconVariant::FullBleed => {
            // Flatten before resampling; the second pass turns transparent
            // padding from non-square sources opaque as well.
            let background = params.background.rgba();
            let flattened = flatten_onto(source, background);
            let fitted = fit_to_square(&flattened, target_size).map_err(Error::external)?;
            debug!("Rendered full-bleed icon: {}px", target_size);
            Ok(flatten_onto(&fitted, background))
        }
    }
}
