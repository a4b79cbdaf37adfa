use std::fs;
use std::path::Path;

use image::{Rgba, RgbaImage};

use iconforge::{
    Error, ICON_TARGETS, IconVariant, PipelineParams, generate_icon_set_from_image,
    generate_icon_set_to_dir,
};

fn write_opaque_source(path: &Path, size: u32) {
    let source = RgbaImage::from_pixel(size, size, Rgba([180, 90, 45, 255]));
    source.save(path).unwrap();
}

fn png_count(dir: &Path) -> usize {
    fs::read_dir(dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|ext| ext == "png")
        })
        .count()
}

#[test]
fn end_to_end_masked_set_from_opaque_source() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("app-icon.png");
    write_opaque_source(&source_path, 1024);

    let out = dir.path().join("icons");
    let set =
        generate_icon_set_to_dir(&source_path, &out, &PipelineParams::default()).unwrap();

    assert_eq!(set.written.len(), ICON_TARGETS.len());
    assert_eq!(png_count(&out), ICON_TARGETS.len());

    for &(name, size) in ICON_TARGETS {
        let icon = image::open(out.join(name)).unwrap().to_rgba8();
        assert_eq!((icon.width(), icon.height()), (size, size), "{name}");
        // Pre-baked squircle: corners transparent, center opaque.
        assert_eq!(icon.get_pixel(0, 0)[3], 0, "{name}");
        assert_eq!(icon.get_pixel(size / 2, size / 2)[3], 255, "{name}");
    }
}

#[test]
fn end_to_end_full_bleed_set_is_opaque() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("app-icon.png");
    write_opaque_source(&source_path, 512);

    let params = PipelineParams {
        variant: IconVariant::FullBleed,
        ..PipelineParams::default()
    };
    let out = dir.path().join("icons");
    generate_icon_set_to_dir(&source_path, &out, &params).unwrap();

    for &(name, size) in ICON_TARGETS {
        let icon = image::open(out.join(name)).unwrap().to_rgba8();
        assert_eq!((icon.width(), icon.height()), (size, size), "{name}");
        assert!(icon.pixels().all(|p| p[3] == 255), "{name}");
    }
}

#[test]
fn end_to_end_missing_source_produces_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("icons");

    let result = generate_icon_set_to_dir(
        &dir.path().join("no-such-source.png"),
        &out,
        &PipelineParams::default(),
    );

    assert!(matches!(result, Err(Error::MissingSource { .. })));
    assert!(!out.exists());
}

#[cfg(unix)]
#[test]
fn end_to_end_packer_over_staged_set_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let source = RgbaImage::from_pixel(1024, 1024, Rgba([20, 120, 220, 255]));

    let params = PipelineParams {
        pack_icns: true,
        // Stand-in for iconutil; accepts the staged arguments and exits 0.
        packer: "true".to_string(),
        ..PipelineParams::default()
    };
    let out = dir.path().join("icons");
    let set = generate_icon_set_from_image(&source, "in-memory", &out, &params).unwrap();

    assert!(set.icns.is_some());
    assert_eq!(png_count(&out), ICON_TARGETS.len());
}

#[cfg(unix)]
#[test]
fn end_to_end_packer_failure_keeps_partial_output() {
    let dir = tempfile::tempdir().unwrap();
    let source = RgbaImage::from_pixel(1024, 1024, Rgba([20, 120, 220, 255]));

    let params = PipelineParams {
        pack_icns: true,
        packer: "false".to_string(),
        ..PipelineParams::default()
    };
    let out = dir.path().join("icons");
    let result = generate_icon_set_from_image(&source, "in-memory", &out, &params);

    assert!(matches!(result, Err(Error::Packer { .. })));
    // Already-written PNGs are not rolled back.
    assert_eq!(png_count(&out), ICON_TARGETS.len());
}

#[test]
fn manifest_sidecar_lists_the_generated_set() {
    let dir = tempfile::tempdir().unwrap();
    let source = RgbaImage::from_pixel(256, 256, Rgba([66, 66, 66, 255]));

    let params = PipelineParams {
        write_manifest: true,
        ..PipelineParams::default()
    };
    let out = dir.path().join("icons");
    let set = generate_icon_set_from_image(&source, "unit-source", &out, &params).unwrap();

    let manifest_path = set.manifest.unwrap();
    let manifest: iconforge::IconSetManifest =
        serde_json::from_str(&fs::read_to_string(manifest_path).unwrap()).unwrap();
    assert_eq!(manifest.source, "unit-source");
    assert_eq!(manifest.entries.len(), ICON_TARGETS.len());
    assert!(manifest.icns.is_none());
}
