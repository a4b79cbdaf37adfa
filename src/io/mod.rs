//! I/O layer for loading the source raster and writing outputs.
//! Provides the `source` loader and `writers` for PNG files, the icns
//! container, and the JSON sidecar manifest.
pub mod source;
pub use source::load_source_image;

pub mod writers;
