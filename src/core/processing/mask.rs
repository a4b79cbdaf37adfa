use ndarray::Array2;
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::MaskAlgorithm;

/// Exponent of the superellipse curve; n = 5 approximates the platform's
/// continuous-corner look.
pub const SUPERELLIPSE_EXPONENT: f64 = 5.0;

/// Quarter-circle corner radius of the rounded-rect approximation,
/// as a fraction of the body size.
pub const CORNER_RADIUS_RATIO: f64 = 0.225;

/// Apple HIG inset: an 824px body on a 1024px canvas.
pub const BODY_RATIO_HIG: f64 = 824.0 / 1024.0;

/// Validated mask geometry: a square canvas and the icon body centered on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskSpec {
    canvas: u32,
    body: u32,
}

impl MaskSpec {
    pub fn new(canvas: u32, body: u32) -> Result<Self> {
        if canvas == 0 {
            return Err(Error::ZeroSize { size: canvas });
        }
        if body == 0 {
            return Err(Error::ZeroSize { size: body });
        }
        if body > canvas {
            return Err(Error::BodyExceedsCanvas { body, canvas });
        }
        Ok(Self { canvas, body })
    }

    /// Body covers the whole canvas (the shipped default).
    pub fn edge_to_edge(canvas: u32) -> Result<Self> {
        Self::new(canvas, canvas)
    }

    /// Body as a fraction of the canvas, e.g. [`BODY_RATIO_HIG`].
    pub fn with_body_ratio(canvas: u32, ratio: f64) -> Result<Self> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(Error::InvalidArgument {
                arg: "body_ratio",
                value: ratio.to_string(),
            });
        }
        let body = ((canvas as f64) * ratio).round() as u32;
        Self::new(canvas, body.max(1))
    }

    pub fn canvas(&self) -> u32 {
        self.canvas
    }

    pub fn body(&self) -> u32 {
        self.body
    }
}

/// Generate a binary alpha mask for the given geometry. 255 marks pixels
/// inside the rounded-rectangle region, 0 pixels outside. Output is a pure
/// function of `(spec, algorithm)`, so repeated calls are byte-identical.
pub fn generate_mask(spec: MaskSpec, algorithm: MaskAlgorithm) -> Array2<u8> {
    debug!(
        "Generating {} mask: canvas={}, body={}",
        algorithm,
        spec.canvas(),
        spec.body()
    );
    match algorithm {
        MaskAlgorithm::Superellipse => superellipse_mask(spec),
        MaskAlgorithm::RoundedRect => rounded_rect_mask(spec),
    }
}

/// Superellipse membership: coordinates normalized to [-1, 1] relative to
/// half the body size, inside when |x|^n + |y|^n <= 1.
fn superellipse_mask(spec: MaskSpec) -> Array2<u8> {
    let size = spec.canvas() as usize;
    let center = spec.canvas() as f64 / 2.0;
    let half_body = spec.body() as f64 / 2.0;
    let n = SUPERELLIPSE_EXPONENT;

    let mut mask = Array2::<u8>::zeros((size, size));
    for ((row, col), value) in mask.indexed_iter_mut() {
        let nx = (col as f64 - center) / half_body;
        let ny = (row as f64 - center) / half_body;
        if nx.abs().powf(n) + ny.abs().powf(n) <= 1.0 {
            *value = 255;
        }
    }
    mask
}

/// Rounded-rectangle membership: flat sides with quarter-circle corners of
/// radius [`CORNER_RADIUS_RATIO`] * body. Cheaper than the superellipse and
/// sufficient when the platform re-applies its own corner mask.
fn rounded_rect_mask(spec: MaskSpec) -> Array2<u8> {
    let size = spec.canvas() as usize;
    let center = spec.canvas() as f64 / 2.0;
    let half_body = spec.body() as f64 / 2.0;
    let radius = spec.body() as f64 * CORNER_RADIUS_RATIO;
    let flat = half_body - radius;

    let mut mask = Array2::<u8>::zeros((size, size));
    for ((row, col), value) in mask.indexed_iter_mut() {
        let ax = (col as f64 - center).abs();
        let ay = (row as f64 - center).abs();
        if ax > half_body || ay > half_body {
            continue;
        }
        let dx = (ax - flat).max(0.0);
        let dy = (ay - flat).max(0.0);
        if dx * dx + dy * dy <= radius * radius {
            *value = 255;
        }
    }
    mask
}
