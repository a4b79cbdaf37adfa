//! Shared types and enums used across ICONFORGE.
//! Includes `IconVariant`, `MaskAlgorithm`, `IconBackground`,
//! `ArtworkVariant`, and the fixed icon target table.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Fixed Tauri/macOS icon set: output file name and square pixel dimension.
/// Every entry is rendered independently from the same source image.
pub const ICON_TARGETS: &[(&str, u32)] = &[
    ("32x32.png", 32),
    ("128x128.png", 128),
    ("128x128@2x.png", 256),
    ("256x256.png", 256),
    ("256x256@2x.png", 512),
    ("512x512.png", 512),
    ("512x512@2x.png", 1024),
    ("icon.png", 1024),
];

/// Canvas dimension the base artwork and the icns 16px entry derive from.
pub const BASE_CANVAS: u32 = 1024;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum IconVariant {
    /// Pre-bake the squircle: resample, then copy the mask into the alpha channel
    Masked,
    /// Ship an opaque square flattened onto a solid background; the OS clips it
    FullBleed,
}

impl IconVariant {
    /// Subdirectory name used by the all-variants flow.
    pub fn dir_name(&self) -> &'static str {
        match self {
            IconVariant::Masked => "masked",
            IconVariant::FullBleed => "full-bleed",
        }
    }
}

impl std::fmt::Display for IconVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconVariant::Masked => write!(f, "Masked"),
            IconVariant::FullBleed => write!(f, "FullBleed"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum MaskAlgorithm {
    /// Superellipse membership test, |x|^n + |y|^n <= 1 with n = 5
    Superellipse,
    /// Rectangle with quarter-circle corners at 22.5% of the body size
    RoundedRect,
}

impl std::fmt::Display for MaskAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MaskAlgorithm::Superellipse => write!(f, "Superellipse"),
            MaskAlgorithm::RoundedRect => write!(f, "RoundedRect"),
        }
    }
}

/// Solid background the full-bleed variant flattens onto.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum IconBackground {
    Dark,
    Light,
}

impl IconBackground {
    pub fn rgba(&self) -> [u8; 4] {
        match self {
            IconBackground::Dark => [15, 15, 15, 255],
            IconBackground::Light => [255, 255, 255, 255],
        }
    }
}

impl std::fmt::Display for IconBackground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconBackground::Dark => write!(f, "Dark"),
            IconBackground::Light => write!(f, "Light"),
        }
    }
}

/// Procedural base-artwork variants (spark logo source, no input file).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum ArtworkVariant {
    /// Sparks on a fully transparent canvas
    Transparent,
    /// Sparks over a white squircle body
    Light,
    /// Sparks over a near-black squircle body
    Dark,
}

impl std::fmt::Display for ArtworkVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArtworkVariant::Transparent => write!(f, "Transparent"),
            ArtworkVariant::Light => write!(f, "Light"),
            ArtworkVariant::Dark => write!(f, "Dark"),
        }
    }
}
