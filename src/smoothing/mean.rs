//! Cross-shaped box filter.
//!
//! The window is indexed as a `(2·size+1)²` square, but only taps that share
//! the target's row or column contribute. The sum is still divided by the full
//! square cardinality, so the output is scaled down relative to a true mean
//! everywhere except for `size == 0`.

use rayon::prelude::*;

use crate::geometry::HeightField;

/// Applies the cross-shaped box filter with half-width `size`.
///
/// Taps are visited row offset first, column offset second. A tap at
/// `i + j·dim + k` is skipped when it falls outside the buffer or crosses
/// both the row and the column of `i`. When `size >= dim` a cell can be
/// reached by several offsets and is summed once per offset.
///
/// The input field is only read; results go to a new field.
pub fn mean_filter(field: &HeightField, size: usize) -> HeightField {
    let layout = field.layout();
    let heights = field.heights();
    let reach = size as isize;
    let window = (2 * size + 1) as f32;
    let norm = window * window;

    let smoothed: Vec<f32> = (0..heights.len())
        .into_par_iter()
        .map(|i| {
            let mut sum = 0.0f32;
            for j in -reach..=reach {
                for k in -reach..=reach {
                    if let Some(pos) = layout.cross_neighbor(i, j, k) {
                        sum += heights[pos];
                    }
                }
            }
            sum / norm
        })
        .collect();

    HeightField::from_parts(layout, smoothed)
}
