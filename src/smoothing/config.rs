//! Smoothing filter selection.

use serde::{Deserialize, Serialize};

/// Which smoothing filter runs, if any.
///
/// Only one filter runs per pipeline; the choice is made once when the
/// pipeline is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SmoothingMode {
    /// Heights are left as displaced.
    None,
    /// Cross-shaped box filter with half-width `size`.
    Mean { size: usize },
    /// Separable Gaussian blur with spread `sigma`.
    Gaussian { sigma: f32 },
}

impl Default for SmoothingMode {
    fn default() -> Self {
        Self::Gaussian { sigma: 0.4 }
    }
}

impl SmoothingMode {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, SmoothingMode::None)
    }

    /// Returns the name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            SmoothingMode::None => "none",
            SmoothingMode::Mean { .. } => "mean",
            SmoothingMode::Gaussian { .. } => "gaussian",
        }
    }
}
