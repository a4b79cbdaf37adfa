//! Core processing building blocks: mask generation, resize/padding,
//! compositing, procedural artwork, and the per-size pipeline. These are
//! internal primitives consumed by the high-level `api` module.
pub mod params;
pub mod processing;
