//! Triangle mesh buffers exchanged with the host.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Ordered vertex positions plus a flat triangle index list.
///
/// Every three consecutive entries of `triangles` form one triangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    pub vertices: Vec<Vec3>,
    pub triangles: Vec<u32>,
}

impl Mesh {
    pub fn new(vertices: Vec<Vec3>, triangles: Vec<u32>) -> Self {
        Self { vertices, triangles }
    }

    /// Builds a flat row-major grid of `columns × rows` vertices in the XZ
    /// plane, two triangles per quad.
    ///
    /// For the quad with corners `a` (top-left), `b` (top-right), `c`
    /// (bottom-left) and `d` (bottom-right) the triangles are `a b c` and
    /// `b d c`.
    pub fn grid(columns: usize, rows: usize, spacing: f32) -> Self {
        let mut vertices = Vec::with_capacity(columns * rows);
        for row in 0..rows {
            for col in 0..columns {
                vertices.push(Vec3::new(col as f32 * spacing, 0.0, row as f32 * spacing));
            }
        }

        let quads = columns.saturating_sub(1) * rows.saturating_sub(1);
        let mut triangles = Vec::with_capacity(quads * 6);
        for row in 0..rows.saturating_sub(1) {
            for col in 0..columns.saturating_sub(1) {
                let a = (row * columns + col) as u32;
                let b = a + 1;
                let c = a + columns as u32;
                let d = c + 1;
                triangles.extend_from_slice(&[a, b, c, b, d, c]);
            }
        }

        Self { vertices, triangles }
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.triangles.len() / 3
    }

    /// Checks that the index list forms whole triangles and only references
    /// existing vertices.
    pub fn validate(&self) -> Result<(), String> {
        if self.triangles.len() % 3 != 0 {
            return Err(format!(
                "triangle index count {} is not a multiple of 3",
                self.triangles.len()
            ));
        }
        let count = self.vertices.len();
        if let Some(slot) = self.triangles.iter().position(|&index| index as usize >= count) {
            return Err(format!(
                "index {} at position {} is out of range for {} vertices",
                self.triangles[slot], slot, count
            ));
        }
        Ok(())
    }

    /// Minimum and maximum vertex height.
    pub fn height_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for v in &self.vertices {
            min = min.min(v.y);
            max = max.max(v.y);
        }
        (min, max)
    }
}
