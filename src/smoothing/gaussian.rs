//! Separable Gaussian blur over a row-major height grid.
//!
//! A horizontal pass convolves each row on its own, then a vertical pass
//! convolves the intermediate field down each column. The kernel is truncated
//! at `floor(6·sqrt(2·sigma))` taps per side and is not renormalized, so a
//! flat field is scaled by the squared kernel mass.

use rayon::prelude::*;

use crate::geometry::HeightField;

/// 1D Gaussian weights for offsets `-width..=width`.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    sigma: f32,
    width: usize,
    weights: Vec<f32>,
}

impl GaussianKernel {
    /// Builds the truncated kernel for `sigma`.
    ///
    /// `sigma` must be positive; callers validate it before building.
    pub fn new(sigma: f32) -> Self {
        let width = (6.0 * (2.0 * sigma).sqrt()) as usize;
        let scale = 1.0 / (std::f32::consts::TAU.sqrt() * sigma);
        let denom = 2.0 * sigma * sigma;

        let weights = (0..=2 * width)
            .map(|i| {
                let t = i as f32 - width as f32;
                scale * (-(t * t) / denom).exp()
            })
            .collect();

        Self { sigma, width, weights }
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    /// Taps on each side of the center.
    pub fn width(&self) -> usize {
        self.width
    }

    /// All `2·width+1` weights, most negative offset first.
    pub fn weights(&self) -> &[f32] {
        &self.weights
    }

    /// Weight for offset `t`; zero outside the kernel.
    pub fn weight(&self, t: isize) -> f32 {
        let idx = t + self.width as isize;
        if idx < 0 {
            return 0.0;
        }
        self.weights.get(idx as usize).copied().unwrap_or(0.0)
    }

    /// Sum of all weights.
    pub fn mass(&self) -> f32 {
        self.weights.iter().sum()
    }
}

/// Convolves each row with `kernel`; taps outside the row are dropped.
///
/// Works on row slices, so a partial last row is bounded by its own length.
pub fn horizontal_pass(field: &HeightField, kernel: &GaussianKernel) -> HeightField {
    let layout = field.layout();
    let reach = kernel.width() as isize;

    let out: Vec<f32> = (0..field.len())
        .into_par_iter()
        .map(|i| {
            let row = field.row(layout.row_of(i));
            let col = layout.col_of(i) as isize;
            let mut sum = 0.0f32;
            for t in -reach..=reach {
                let x = col + t;
                if x >= 0 && (x as usize) < row.len() {
                    sum += row[x as usize] * kernel.weight(t);
                }
            }
            sum
        })
        .collect();

    HeightField::from_parts(layout, out)
}

/// Convolves each column with `kernel`; taps past the top or bottom of the
/// column are dropped.
pub fn vertical_pass(field: &HeightField, kernel: &GaussianKernel) -> HeightField {
    let layout = field.layout();
    let heights = field.heights();
    let dim = layout.dim();
    let reach = kernel.width() as isize;

    let out: Vec<f32> = (0..field.len())
        .into_par_iter()
        .map(|i| {
            let row = layout.row_of(i) as isize;
            let col = layout.col_of(i);
            let depth = layout.column_len(col) as isize;
            let mut sum = 0.0f32;
            for t in -reach..=reach {
                let r = row + t;
                if r >= 0 && r < depth {
                    sum += heights[r as usize * dim + col] * kernel.weight(t);
                }
            }
            sum
        })
        .collect();

    HeightField::from_parts(layout, out)
}

/// Full separable blur: horizontal pass, then vertical pass over its output.
pub fn gaussian_filter(field: &HeightField, sigma: f32) -> HeightField {
    let kernel = GaussianKernel::new(sigma);
    let rows_done = horizontal_pass(field, &kernel);
    vertical_pass(&rows_done, &kernel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kernel_width() {
        assert_eq!(GaussianKernel::new(0.3).width(), 4);
        assert_eq!(GaussianKernel::new(0.4).width(), 5);
        assert_eq!(GaussianKernel::new(1.0).width(), 8);
        assert_eq!(GaussianKernel::new(2.0).width(), 12);
    }

    #[test]
    fn test_kernel_symmetry() {
        for sigma in [0.2, 0.3, 0.4, 1.0, 2.0] {
            let kernel = GaussianKernel::new(sigma);
            assert_eq!(kernel.weights().len(), 2 * kernel.width() + 1);
            let w = kernel.width() as isize;
            for t in 1..=w {
                assert_eq!(kernel.weight(t), kernel.weight(-t));
            }
            assert_eq!(kernel.weight(w + 1), 0.0);
            assert_eq!(kernel.weight(-w - 1), 0.0);
        }
    }

    #[test]
    fn test_kernel_center_weight() {
        let kernel = GaussianKernel::new(1.0);
        let expected = 1.0 / (2.0 * std::f32::consts::PI).sqrt();
        assert!((kernel.weight(0) - expected).abs() < 1e-6);
    }

    #[test]
    fn test_kernel_is_not_renormalized() {
        let mass = GaussianKernel::new(0.3).mass();
        assert!((mass - 1.340_089).abs() < 1e-4, "mass was {}", mass);
    }

    #[test]
    fn test_zero_field_stays_zero() {
        let field = HeightField::new(4, vec![0.0; 16]);
        let out = gaussian_filter(&field, 0.3);
        assert!(out.heights().iter().all(|&h| h == 0.0));
    }

    #[test]
    fn test_flat_field_preserved_for_unit_mass_kernel() {
        let field = HeightField::new(30, vec![2.0; 900]);
        let out = gaussian_filter(&field, 2.0);
        let center = 15 * 30 + 15;
        assert!((out.get(center) - 2.0).abs() < 1e-4, "center was {}", out.get(center));
    }

    #[test]
    fn test_flat_field_scaled_by_kernel_mass() {
        let field = HeightField::new(11, vec![1.0; 121]);
        let kernel = GaussianKernel::new(0.3);
        let out = gaussian_filter(&field, 0.3);
        let mass = kernel.mass();
        let center = 5 * 11 + 5;
        assert!((out.get(center) - mass * mass).abs() < 1e-5);
    }

    #[test]
    fn test_horizontal_pass_stays_in_row() {
        let mut heights = vec![0.0; 9];
        heights[3] = 1.0;
        let field = HeightField::new(3, heights);
        let out = horizontal_pass(&field, &GaussianKernel::new(1.0));
        assert_eq!(out.get(2), 0.0, "row 0 must not see row 1");
        assert!(out.get(4) > 0.0);
    }

    #[test]
    fn test_vertical_pass_bounded_by_column() {
        let mut heights = vec![0.0; 7];
        heights[6] = 1.0;
        let field = HeightField::new(3, heights);
        let out = vertical_pass(&field, &GaussianKernel::new(1.0));
        assert!(out.get(0) > 0.0);
        assert!(out.get(3) > 0.0);
        assert_eq!(out.get(4), 0.0);
    }

    #[test]
    fn test_pass_order_matters_on_partial_grid() {
        let mut heights = vec![0.0; 7];
        heights[6] = 1.0;
        let field = HeightField::new(3, heights);
        let kernel = GaussianKernel::new(1.0);

        let ordered = vertical_pass(&horizontal_pass(&field, &kernel), &kernel);
        let swapped = horizontal_pass(&vertical_pass(&field, &kernel), &kernel);

        assert_eq!(ordered, gaussian_filter(&field, 1.0));
        assert_eq!(ordered.get(1), 0.0);
        assert!(swapped.get(1) > 0.0);

        let center = kernel.weight(0);
        assert!((ordered.get(6) - center * center).abs() < 1e-6);
    }
}
