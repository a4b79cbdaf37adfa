//! High-level, ergonomic library API: generate the fixed icon set to a
//! directory, render single sizes in memory, and synthesize base artwork.
//! Prefer these entrypoints over the low-level processing modules when
//! embedding ICONFORGE.
use std::fs;
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::info;

use crate::core::params::PipelineParams;
use crate::core::processing::artwork::generate_base_artwork;
use crate::core::processing::pipeline::render_icon;
use crate::error::{Error, Result};
use crate::io::source::load_source_image;
use crate::io::writers::icns::pack_icns;
use crate::io::writers::manifest::{IconSetManifest, ManifestEntry, write_manifest_sidecar};
use crate::io::writers::png::write_rgba_png;
use crate::types::{ArtworkVariant, BASE_CANVAS, ICON_TARGETS, MaskAlgorithm};

/// What one run produced
#[derive(Debug, Clone, Default)]
pub struct GeneratedSet {
    pub written: Vec<PathBuf>,
    pub icns: Option<PathBuf>,
    pub manifest: Option<PathBuf>,
}

/// Render a single icon raster in memory (no disk I/O)
pub fn render_icon_to_buffer(
    source: &RgbaImage,
    target_size: u32,
    params: &PipelineParams,
) -> Result<RgbaImage> {
    render_icon(source, target_size, params)
}

/// Generate the fixed icon set from an already-loaded source raster.
/// `source_label` is recorded in the manifest when one is requested.
pub fn generate_icon_set_from_image(
    source: &RgbaImage,
    source_label: &str,
    output_dir: &Path,
    params: &PipelineParams,
) -> Result<GeneratedSet> {
    fs::create_dir_all(output_dir)?;

    let mut set = GeneratedSet::default();
    let mut base_1024: Option<RgbaImage> = None;

    for &(name, size) in ICON_TARGETS {
        let icon = render_icon(source, size, params)?;
        let path = output_dir.join(name);
        write_rgba_png(&path, &icon).map_err(Error::external)?;
        info!("Wrote {:?} ({}x{})", path, size, size);
        set.written.push(path);
        if size == BASE_CANVAS {
            base_1024 = Some(icon);
        }
    }

    if params.pack_icns {
        let base = match base_1024 {
            Some(image) => image,
            None => render_icon(source, BASE_CANVAS, params)?,
        };
        let icns_path = pack_icns(
            output_dir,
            &base,
            &output_dir.join("icon.icns"),
            &params.packer,
        )?;
        set.icns = Some(icns_path);
    }

    if params.write_manifest {
        let manifest = IconSetManifest {
            source: source_label.to_string(),
            variant: params.variant,
            mask: params.algorithm,
            entries: ICON_TARGETS
                .iter()
                .map(|&(file, size)| ManifestEntry {
                    file: file.to_string(),
                    size,
                })
                .collect(),
            icns: set
                .icns
                .as_ref()
                .and_then(|p| p.file_name())
                .map(|name| name.to_string_lossy().into_owned()),
        };
        set.manifest = Some(write_manifest_sidecar(output_dir, &manifest)?);
    }

    Ok(set)
}

/// Generate the fixed icon set from a source file into `output_dir`.
/// A missing source aborts before any output is produced.
pub fn generate_icon_set_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &PipelineParams,
) -> Result<GeneratedSet> {
    let source = load_source_image(input)?;
    generate_icon_set_from_image(&source, &input.display().to_string(), output_dir, params)
}

/// Synthesize the procedural base sprite at 1024px and write it to `output`.
/// Returns the sprite so callers can feed it straight into set generation.
pub fn generate_base_artwork_to_path(
    variant: ArtworkVariant,
    algorithm: MaskAlgorithm,
    output: &Path,
) -> Result<RgbaImage> {
    let artwork = generate_base_artwork(BASE_CANVAS, variant, algorithm)?;
    if let Some(parent) = output.parent() {
        fs::create_dir_all(parent)?;
    }
    write_rgba_png(output, &artwork).map_err(Error::external)?;
    info!("Wrote base artwork {:?} ({} variant)", output, variant);
    Ok(artwork)
}
