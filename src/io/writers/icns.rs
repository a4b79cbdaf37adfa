use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::processing::resize::fit_to_square;
use crate::error::{Error, Result};
use crate::io::writers::png::write_rgba_png;

/// Platform icon packer. Treated as a black box; only the staging-directory
/// naming contract below is specified.
pub const ICNS_TOOL: &str = "iconutil";

/// Staging contract: generated file name -> required iconset entry name.
/// `icon_16x16.png` is not listed; it is synthesized from the base raster.
pub const ICONSET_MAPPINGS: &[(&str, &str)] = &[
    ("32x32.png", "icon_16x16@2x.png"),
    ("32x32.png", "icon_32x32.png"),
    ("128x128.png", "icon_64x64@2x.png"),
    ("128x128.png", "icon_128x128.png"),
    ("256x256.png", "icon_128x128@2x.png"),
    ("256x256.png", "icon_256x256.png"),
    ("512x512.png", "icon_256x256@2x.png"),
    ("512x512.png", "icon_512x512.png"),
    ("512x512@2x.png", "icon_512x512@2x.png"),
];

/// Assemble the generated PNGs in `icons_dir` into an icns container at
/// `output` by staging them under the iconset naming contract and invoking
/// the external packer. The staging directory is removed on success and
/// failure alike; already-written PNGs are never rolled back.
pub fn pack_icns(
    icons_dir: &Path,
    base: &RgbaImage,
    output: &Path,
    packer: &str,
) -> Result<PathBuf> {
    let staging = tempfile::Builder::new()
        .prefix("icon-")
        .suffix(".iconset")
        .tempdir_in(icons_dir)?;

    for (src_name, dst_name) in ICONSET_MAPPINGS {
        let src = icons_dir.join(src_name);
        if src.exists() {
            fs::copy(&src, staging.path().join(dst_name))?;
        } else {
            warn!("Skipping missing iconset entry source: {:?}", src);
        }
    }

    // The 16px entry has no counterpart in the generated set.
    let icon_16 = fit_to_square(base, 16).map_err(Error::external)?;
    write_rgba_png(&staging.path().join("icon_16x16.png"), &icon_16).map_err(Error::external)?;

    let result = Command::new(packer)
        .arg("-c")
        .arg("icns")
        .arg(staging.path())
        .arg("-o")
        .arg(output)
        .output()?;

    if !result.status.success() {
        return Err(Error::Packer {
            tool: packer.to_string(),
            status: result.status,
            stderr: String::from_utf8_lossy(&result.stderr).trim().to_string(),
        });
    }

    info!("Packed icns container: {:?}", output);
    Ok(output.to_path_buf())
}
