use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::{Error, Result};

/// Load the source raster and decode it to RGBA8. A missing file is fatal
/// and must surface before any output is produced.
pub fn load_source_image(path: &Path) -> Result<RgbaImage> {
    if !path.exists() {
        return Err(Error::MissingSource {
            path: path.to_path_buf(),
        });
    }

    let image = image::open(path)?.to_rgba8();
    info!(
        "Loaded source {:?}: {}x{}",
        path,
        image.width(),
        image.height()
    );
    Ok(image)
}
