//! Seeded height displacement.

use glam::Vec3;
use rayon::prelude::*;

use crate::geometry::Mesh;
use crate::sequence::SeedSequence;

/// Raises every vertex by the code point of its sequence element modulo `salt`.
///
/// Each offset lies in `[0, salt)`. `salt` must be positive: a zero salt turns
/// every height into NaN, which callers rule out when validating config.
///
/// # Arguments
/// * `vertices` - Vertex buffer to displace in place
/// * `sequence` - Seed sequence with at least one element per vertex
/// * `salt` - Modulus applied to each code point
pub fn displace_heights(vertices: &mut [Vec3], sequence: &SeedSequence, salt: f32) {
    debug_assert!(sequence.len() >= vertices.len());

    vertices.par_iter_mut().enumerate().for_each(|(i, vertex)| {
        vertex.y += sequence.byte_value(i) % salt;
    });
}

/// Expands `seed` to one element per vertex and displaces the mesh.
pub fn displace_mesh(mesh: &mut Mesh, seed: &str, salt: f32) -> SeedSequence {
    let sequence = SeedSequence::generate(seed, mesh.vertices.len());
    displace_heights(&mut mesh.vertices, &sequence, salt);
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALT: f32 = 0.5234;

    #[test]
    fn test_reference_displacement() {
        let mut mesh = Mesh::grid(4, 4, 1.0);
        let sequence = displace_mesh(&mut mesh, "test", SALT);
        assert_eq!(sequence.as_str(), "098f6bcd4621d373");

        // fmod(code point, 0.5234) for each hex digit of the sequence.
        let expected: [f32; 16] = [
            0.370_599_2,  // '0'
            0.472_799_06, // '9'
            0.519_599_1,  // '8'
            0.460_398_3,  // 'f'
            0.089_799_1,  // '6'
            0.124_198_38, // 'b'
            0.077_398_36, // 'c'
            0.030_598_342, // 'd'
            0.183_399_14, // '4'
            0.089_799_1,  // '6'
            0.276_999_18, // '2'
            0.323_799_2,  // '1'
            0.030_598_342, // 'd'
            0.230_199_16, // '3'
            0.042_999_09, // '7'
            0.230_199_16, // '3'
        ];

        for (vertex, want) in mesh.vertices.iter().zip(expected) {
            assert!(
                (vertex.y - want).abs() < 1e-6,
                "height {} differs from reference {}",
                vertex.y,
                want
            );
        }
    }

    #[test]
    fn test_offsets_bounded_by_salt() {
        let mut vertices: Vec<Vec3> = (0..200)
            .map(|i| Vec3::new(i as f32, (i as f32) * 0.1 - 3.0, 0.0))
            .collect();
        let before = vertices.clone();
        let sequence = SeedSequence::generate("bounds", vertices.len());

        displace_heights(&mut vertices, &sequence, 0.75);

        for (a, b) in before.iter().zip(&vertices) {
            let delta = b.y - a.y;
            assert!(delta >= -1e-5 && delta < 0.75 + 1e-5, "offset {} out of range", delta);
            assert_eq!(a.x, b.x);
            assert_eq!(a.z, b.z);
        }
    }

    #[test]
    fn test_displacement_reproducible() {
        let mut a = Mesh::grid(11, 11, 1.0);
        let mut b = Mesh::grid(11, 11, 1.0);
        displace_mesh(&mut a, "seed", SALT);
        displace_mesh(&mut b, "seed", SALT);
        assert_eq!(a, b);
    }

    #[test]
    fn test_large_salt_adds_code_point() {
        let mut vertices = vec![Vec3::ZERO; 4];
        let sequence = SeedSequence::generate("test", 4);
        displace_heights(&mut vertices, &sequence, 1000.0);
        let heights: Vec<f32> = vertices.iter().map(|v| v.y).collect();
        assert_eq!(heights, vec![48.0, 57.0, 56.0, 102.0]);
    }
}
