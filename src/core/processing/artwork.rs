use image::{Rgba, RgbaImage};

use crate::core::processing::mask::{BODY_RATIO_HIG, MaskSpec, generate_mask};
use crate::error::Result;
use crate::types::{ArtworkVariant, MaskAlgorithm};

/// Brand accent for the spark glyphs (#22c55e).
pub const SPARK_GREEN: [u8; 4] = [34, 197, 94, 255];
/// Squircle body fill for the light artwork variant.
pub const LIGHT_BODY: [u8; 4] = [255, 255, 255, 255];
/// Squircle body fill for the dark artwork variant (#1a1a1a).
pub const DARK_BODY: [u8; 4] = [26, 26, 26, 255];

/// Four-pointed spark: center, tip reach, with inner vertices at 30% reach.
#[derive(Debug, Clone, Copy)]
struct Spark {
    x: f64,
    y: f64,
    reach: f64,
}

impl Spark {
    fn outline(&self) -> [(f64, f64); 8] {
        let (x, y, s) = (self.x, self.y, self.reach);
        [
            (x, y - s),
            (x + s * 0.3, y - s * 0.3),
            (x + s, y),
            (x + s * 0.3, y + s * 0.3),
            (x, y + s),
            (x - s * 0.3, y + s * 0.3),
            (x - s, y),
            (x - s * 0.3, y - s * 0.3),
        ]
    }
}

/// The three-spark layout, positioned relative to the canvas center and
/// scaled from the 1024px reference design.
fn spark_layout(canvas: u32) -> [Spark; 3] {
    let center = canvas as f64 / 2.0;
    let scale = canvas as f64 / 1024.0;
    [
        Spark {
            x: center - 80.0 * scale,
            y: center + 20.0 * scale,
            reach: 180.0 * scale,
        },
        Spark {
            x: center + 140.0 * scale,
            y: center - 120.0 * scale,
            reach: 90.0 * scale,
        },
        Spark {
            x: center + 120.0 * scale,
            y: center + 120.0 * scale,
            reach: 60.0 * scale,
        },
    ]
}

/// Even-odd crossing test; the spark outline is non-convex.
fn point_in_polygon(px: f64, py: f64, polygon: &[(f64, f64)]) -> bool {
    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let (xi, yi) = polygon[i];
        let (xj, yj) = polygon[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}

/// Render the procedural base sprite at `canvas` pixels. Light and dark
/// variants paint the sparks over a squircle body at the HIG inset; the
/// transparent variant ships the sparks alone.
pub fn generate_base_artwork(
    canvas: u32,
    variant: ArtworkVariant,
    algorithm: MaskAlgorithm,
) -> Result<RgbaImage> {
    let body = match variant {
        ArtworkVariant::Transparent => None,
        ArtworkVariant::Light => Some(LIGHT_BODY),
        ArtworkVariant::Dark => Some(DARK_BODY),
    };

    let body_mask = match body {
        Some(_) => Some(generate_mask(
            MaskSpec::with_body_ratio(canvas, BODY_RATIO_HIG)?,
            algorithm,
        )),
        None => {
            // Validate the canvas even when no body is drawn.
            MaskSpec::edge_to_edge(canvas)?;
            None
        }
    };

    let sparks = spark_layout(canvas);
    let mut image = RgbaImage::new(canvas, canvas);
    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let (px, py) = (x as f64, y as f64);
        if sparks
            .iter()
            .any(|spark| point_in_polygon(px, py, &spark.outline()))
        {
            *pixel = Rgba(SPARK_GREEN);
        } else if let (Some(fill), Some(mask)) = (body, body_mask.as_ref()) {
            if mask[[y as usize, x as usize]] == 255 {
                *pixel = Rgba(fill);
            }
        }
    }
    Ok(image)
}
