use clap::Parser;
use std::path::PathBuf;

use iconforge::types::{ArtworkVariant, IconBackground, IconVariant, MaskAlgorithm};

#[derive(Parser)]
#[command(name = "iconforge", version, about = "ICONFORGE CLI")]
pub struct CliArgs {
    /// Source raster image (PNG or JPEG)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Synthesize the base spark artwork instead of reading --input
    #[arg(long, value_enum, conflicts_with = "input")]
    pub generate: Option<ArtworkVariant>,

    /// Output directory for the generated icon set
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Icon variant (masked or full-bleed)
    #[arg(short = 'v', long, value_enum, default_value_t = IconVariant::Masked)]
    pub variant: IconVariant,

    /// Generate every variant, each into its own subdirectory
    #[arg(long, default_value_t = false)]
    pub all_variants: bool,

    /// Mask algorithm (superellipse or rounded-rect)
    #[arg(long, value_enum, default_value_t = MaskAlgorithm::Superellipse)]
    pub mask: MaskAlgorithm,

    /// Mask body relative to the canvas. Options:
    /// - "full": edge to edge
    /// - "hig": the Apple HIG inset (824/1024)
    /// - Custom: any ratio in (0, 1], e.g. 0.9
    #[arg(long, default_value = "full")]
    pub body: String,

    /// Solid background for the full-bleed variant
    #[arg(long, value_enum, default_value_t = IconBackground::Dark)]
    pub background: IconBackground,

    /// Pack the generated set into icon.icns
    #[arg(long, default_value_t = false)]
    pub pack: bool,

    /// External icon packer executable
    #[arg(long, default_value = "iconutil")]
    pub packer: String,

    /// Write a manifest.json sidecar next to the outputs
    #[arg(long, default_value_t = false)]
    pub manifest: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
