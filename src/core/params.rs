use serde::{Deserialize, Serialize};

use crate::types::{IconBackground, IconVariant, MaskAlgorithm};

/// Pipeline parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineParams {
    pub variant: IconVariant,
    pub algorithm: MaskAlgorithm,
    /// Mask body as a fraction of the canvas; 1.0 is edge to edge
    pub body_ratio: f64,
    /// Solid fill behind the full-bleed variant
    pub background: IconBackground,
    /// If true, pack the generated set into an icns container
    pub pack_icns: bool,
    /// External packer invoked for icns assembly
    pub packer: String,
    /// If true, write a JSON sidecar listing the generated set
    pub write_manifest: bool,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            variant: IconVariant::Masked,
            algorithm: MaskAlgorithm::Superellipse,
            body_ratio: 1.0,
            background: IconBackground::Dark,
            pack_icns: false,
            packer: crate::io::writers::icns::ICNS_TOOL.to_string(),
            write_manifest: false,
        }
    }
}
