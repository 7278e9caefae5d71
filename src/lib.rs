//! Seeded terrain shaping for grid meshes.
//!
//! This crate displaces the heights of a row-major grid mesh from a seed
//! string, smooths them with a box or Gaussian filter and optionally splits
//! the mesh into flat-shaded triangles. Hosts hand in vertex and index
//! buffers and get the mutated buffers back.

pub mod geometry;
pub mod sequence;
pub mod terrain;
pub mod smoothing;
pub mod shading;
pub mod pipeline;

pub use geometry::{GridLayout, HeightField, Mesh};
pub use sequence::SeedSequence;
pub use smoothing::{GaussianKernel, SmoothingMode};
pub use pipeline::{process_mesh, GenerationStage, MeshConfig, Pipeline, PipelineError, StageConfig};
