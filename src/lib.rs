#![doc = r#"
ICONFORGE — application icon asset generation for desktop packaging pipelines.

This crate turns a source raster (or a procedurally generated base sprite)
into the fixed set of square PNG icons a Tauri/macOS bundle expects, with a
rounded-rectangle ("squircle") alpha mask pre-baked or a full-bleed flattened
square, and optionally packs the set into a multi-resolution `.icns`
container via the platform `iconutil` tool. It powers the ICONFORGE CLI and
can be embedded in your own build tooling.

The pipeline is deterministic and stateless: every output size is computed
independently from the same source image in a single sequential pass.

Quick start: generate an icon set to a directory
------------------------------------------------
```rust,no_run
use std::path::Path;
use iconforge::{generate_icon_set_to_dir, PipelineParams};

fn main() -> iconforge::Result<()> {
    let params = PipelineParams::default();
    let set = generate_icon_set_to_dir(
        Path::new("assets/app-icon.png"),
        Path::new("src-tauri/icons"),
        &params,
    )?;
    println!("wrote {} files", set.written.len());
    Ok(())
}
```

Render a single size in memory
------------------------------
```rust
use image::{Rgba, RgbaImage};
use iconforge::{render_icon_to_buffer, PipelineParams};

fn main() -> iconforge::Result<()> {
    let source = RgbaImage::from_pixel(1024, 1024, Rgba([30, 30, 30, 255]));
    let icon = render_icon_to_buffer(&source, 256, &PipelineParams::default())?;
    assert_eq!((icon.width(), icon.height()), (256, 256));
    Ok(())
}
```

Error handling
--------------
All public functions return `iconforge::Result<T>`; match on
`iconforge::Error` to handle specific cases, e.g. a missing source or a
failed packer invocation.

```rust,no_run
use std::path::Path;
use iconforge::{generate_icon_set_to_dir, Error, PipelineParams};

fn main() {
    let params = PipelineParams::default();
    match generate_icon_set_to_dir(Path::new("/bad/path.png"), Path::new("/out"), &params) {
        Ok(_) => {}
        Err(Error::MissingSource { path }) => eprintln!("no source at {}", path.display()),
        Err(Error::Packer { stderr, .. }) => eprintln!("packer failed: {stderr}"),
        Err(other) => eprintln!("Other error: {other}"),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and the fixed icon target table.
- [`core`] — mask, resize, composite, and artwork primitives.
- [`io`] — source loading and PNG/icns/manifest writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use crate::core::params::PipelineParams;
pub use crate::core::processing::mask::{
    BODY_RATIO_HIG, CORNER_RADIUS_RATIO, MaskSpec, SUPERELLIPSE_EXPONENT, generate_mask,
};
pub use error::{Error, Result};
pub use types::{
    ArtworkVariant, BASE_CANVAS, ICON_TARGETS, IconBackground, IconVariant, MaskAlgorithm,
};

// Writer helpers (keep the staging contract public)
pub use io::source::load_source_image;
pub use io::writers::icns::{ICNS_TOOL, ICONSET_MAPPINGS, pack_icns};
pub use io::writers::manifest::{IconSetManifest, ManifestEntry};

// High-level API re-exports
pub use api::{
    GeneratedSet, generate_base_artwork_to_path, generate_icon_set_from_image,
    generate_icon_set_to_dir, render_icon_to_buffer,
};
