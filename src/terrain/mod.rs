//! Terrain shaping applied directly to mesh vertices.

mod displace;

pub use displace::{displace_heights, displace_mesh};
