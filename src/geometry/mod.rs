//! Mesh and grid geometry.
//!
//! Provides the mesh buffers exchanged with the host and the row-major grid
//! view used to find vertex neighbors in a flat vertex array.

mod grid;
mod height_field;
mod mesh;

pub use grid::GridLayout;
pub use height_field::HeightField;
pub use mesh::Mesh;
