//! Height values lifted out of a vertex buffer for grid filtering.

use glam::Vec3;

use super::grid::GridLayout;

/// The `y` components of a vertex buffer, addressed through a [`GridLayout`].
///
/// Filters never mutate a field they read from: each pass takes a `&HeightField`
/// and returns a freshly allocated one.
#[derive(Debug, Clone, PartialEq)]
pub struct HeightField {
    layout: GridLayout,
    heights: Vec<f32>,
}

impl HeightField {
    /// Wraps `heights` in a grid of row width `dim`.
    pub fn new(dim: usize, heights: Vec<f32>) -> Self {
        let layout = GridLayout::new(dim, heights.len());
        Self { layout, heights }
    }

    /// Copies the heights of `vertices`.
    pub fn from_vertices(vertices: &[Vec3], dim: usize) -> Self {
        Self::new(dim, vertices.iter().map(|v| v.y).collect())
    }

    pub(crate) fn from_parts(layout: GridLayout, heights: Vec<f32>) -> Self {
        debug_assert_eq!(layout.len(), heights.len());
        Self { layout, heights }
    }

    pub fn layout(&self) -> GridLayout {
        self.layout
    }

    pub fn heights(&self) -> &[f32] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn get(&self, i: usize) -> f32 {
        self.heights[i]
    }

    /// Heights of one row.
    pub fn row(&self, row: usize) -> &[f32] {
        &self.heights[self.layout.row_range(row)]
    }

    /// Writes the heights back into the `y` components of `vertices`.
    ///
    /// `x` and `z` are left untouched.
    pub fn write_to(&self, vertices: &mut [Vec3]) {
        debug_assert_eq!(vertices.len(), self.heights.len());
        for (vertex, &h) in vertices.iter_mut().zip(&self.heights) {
            vertex.y = h;
        }
    }

    /// Minimum and maximum height.
    pub fn height_range(&self) -> (f32, f32) {
        let mut min = f32::MAX;
        let mut max = f32::MIN;
        for &h in &self.heights {
            min = min.min(h);
            max = max.max(h);
        }
        (min, max)
    }
}
