//! Shading-oriented mesh rewrites.

mod flat;

pub use flat::{flat_shade, split_triangles};
