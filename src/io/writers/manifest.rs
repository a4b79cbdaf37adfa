use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::types::{IconVariant, MaskAlgorithm};

pub const MANIFEST_FILE: &str = "manifest.json";

/// Sidecar record of a generated icon set, written next to the outputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IconSetManifest {
    pub source: String,
    pub variant: IconVariant,
    pub mask: MaskAlgorithm,
    pub entries: Vec<ManifestEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icns: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub file: String,
    pub size: u32,
}

/// Serialize the manifest as pretty JSON into `output_dir`.
pub fn write_manifest_sidecar(output_dir: &Path, manifest: &IconSetManifest) -> Result<PathBuf> {
    let path = output_dir.join(MANIFEST_FILE);
    let json = serde_json::to_string_pretty(manifest).map_err(crate::error::Error::external)?;
    fs::write(&path, json)?;
    info!("Wrote manifest sidecar: {:?}", path);
    Ok(path)
}
