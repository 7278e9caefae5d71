//! Flat shading by vertex duplication.
//!
//! Once every triangle corner owns its own vertex, normals recomputed by the
//! host come out per face and edges render hard.

use glam::Vec3;

use crate::geometry::Mesh;

/// Returns one vertex per index slot and the identity index list.
///
/// `vertices[t] == source[triangles[t]]` and `indices[t] == t` for every slot.
/// Degenerate triangles are copied like any other.
pub fn split_triangles(source: &[Vec3], triangles: &[u32]) -> (Vec<Vec3>, Vec<u32>) {
    let vertices = triangles.iter().map(|&index| source[index as usize]).collect();
    let indices = (0..triangles.len() as u32).collect();
    (vertices, indices)
}

/// Rewrites `mesh` so no two triangles share a vertex.
pub fn flat_shade(mesh: &mut Mesh) {
    let (vertices, triangles) = split_triangles(&mesh.vertices, &mesh.triangles);
    mesh.vertices = vertices;
    mesh.triangles = triangles;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_by_two_grid() {
        let mut mesh = Mesh::grid(2, 2, 1.0);
        let original = mesh.clone();
        assert_eq!(original.triangles, vec![0, 1, 2, 1, 3, 2]);

        flat_shade(&mut mesh);

        assert_eq!(mesh.vertex_count(), 6);
        assert_eq!(mesh.triangles, vec![0, 1, 2, 3, 4, 5]);
        for (slot, &index) in original.triangles.iter().enumerate() {
            assert_eq!(mesh.vertices[slot], original.vertices[index as usize]);
        }
    }

    #[test]
    fn test_cardinality_matches_index_count() {
        let mut mesh = Mesh::grid(7, 5, 0.5);
        for (i, v) in mesh.vertices.iter_mut().enumerate() {
            v.y = i as f32 * 0.1;
        }
        let original = mesh.clone();

        flat_shade(&mut mesh);

        assert_eq!(mesh.vertex_count(), original.triangles.len());
        assert!(mesh.triangles.iter().enumerate().all(|(t, &i)| i as usize == t));
        for (slot, &index) in original.triangles.iter().enumerate() {
            assert_eq!(mesh.vertices[slot], original.vertices[index as usize]);
        }
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_degenerate_triangle_passes_through() {
        let source = vec![Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO];
        let (vertices, indices) = split_triangles(&source, &[0, 0, 0, 1, 0, 1]);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0], vertices[2]);
        assert_eq!(vertices[3], Vec3::ZERO);
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_index_list() {
        let mut mesh = Mesh::new(vec![Vec3::ONE; 4], Vec::new());
        flat_shade(&mut mesh);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.triangles.is_empty());
    }
}
