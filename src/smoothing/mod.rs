//! Grid smoothing filters.
//!
//! Two interchangeable filters operate on a [`HeightField`]: a cross-shaped
//! box filter and a separable Gaussian. Both read a frozen input field and
//! return a new one.

mod config;
mod gaussian;
mod mean;

pub use config::SmoothingMode;
pub use gaussian::{gaussian_filter, horizontal_pass, vertical_pass, GaussianKernel};
pub use mean::mean_filter;

use crate::geometry::HeightField;

/// Runs the filter selected by `mode`; `SmoothingMode::None` returns a copy.
pub fn smooth(field: &HeightField, mode: SmoothingMode) -> HeightField {
    match mode {
        SmoothingMode::None => field.clone(),
        SmoothingMode::Mean { size } => mean_filter(field, size),
        SmoothingMode::Gaussian { sigma } => gaussian_filter(field, sigma),
    }
}
