//! Pipeline configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::smoothing::SmoothingMode;

/// Errors raised while loading or validating a [`MeshConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Salt must be a positive finite number, got {0}")]
    InvalidSalt(f32),
    #[error("Sigma must be a positive finite number, got {0}")]
    InvalidSigma(f32),
    #[error("Grid dimensions must be at least 1")]
    ZeroDimensions,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Settings for one run over a grid mesh.
///
/// Fields left out of a JSON document take their default values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Seed string expanded into the displacement sequence.
    pub seed: String,
    /// Modulus applied to each sequence code point (must be > 0).
    pub salt: f32,
    /// Enables seeded displacement.
    pub terraforming: bool,
    /// Enables a smoothing filter.
    pub smoothing: bool,
    /// Picks the Gaussian filter over the box filter when smoothing.
    pub gauss: bool,
    /// Gaussian spread. 0.2-0.3 roughens, 0.3-2.0 smooths.
    pub sigma: f32,
    /// Vertices per grid row.
    pub dimensions: usize,
    /// Box filter half-width (1-4 typical).
    pub smooth_width: usize,
    /// Enables vertex splitting for hard edges.
    pub flatshading: bool,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            seed: "test".to_string(),
            salt: 0.5234,
            terraforming: true,
            smoothing: true,
            gauss: true,
            sigma: 0.4,
            dimensions: 11,
            smooth_width: 1,
            flatshading: true,
        }
    }
}

impl MeshConfig {
    /// Creates the default configuration with a different seed.
    pub fn with_seed(seed: &str) -> Self {
        Self {
            seed: seed.to_string(),
            ..Default::default()
        }
    }

    /// Loads a configuration from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Parses a configuration from JSON text.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Resolves the two smoothing switches into a single filter choice.
    ///
    /// With smoothing off no filter runs, whatever `gauss` says.
    pub fn smoothing_mode(&self) -> SmoothingMode {
        match (self.smoothing, self.gauss) {
            (false, _) => SmoothingMode::None,
            (true, true) => SmoothingMode::Gaussian { sigma: self.sigma },
            (true, false) => SmoothingMode::Mean {
                size: self.smooth_width,
            },
        }
    }

    /// Checks the parameters of every stage that will run.
    ///
    /// Parameters of disabled stages are not inspected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terraforming && !(self.salt.is_finite() && self.salt > 0.0) {
            return Err(ConfigError::InvalidSalt(self.salt));
        }

        match self.smoothing_mode() {
            SmoothingMode::None => {}
            SmoothingMode::Gaussian { sigma } if !(sigma.is_finite() && sigma > 0.0) => {
                return Err(ConfigError::InvalidSigma(sigma));
            }
            _ if self.dimensions == 0 => return Err(ConfigError::ZeroDimensions),
            _ => {}
        }

        Ok(())
    }
}
