//! Generation stage trait and pipeline orchestration.

use log::{debug, info};
use thiserror::Error;

use crate::geometry::{HeightField, Mesh};
use crate::shading::flat_shade;
use crate::smoothing::{smooth, GaussianKernel, SmoothingMode};
use crate::terrain::displace_mesh;

use super::config::{ConfigError, MeshConfig};

/// Unique identifier for generation stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageId {
    /// Seeded height displacement.
    Displace,
    /// Box or Gaussian smoothing.
    Smooth,
    /// Per-corner vertex duplication.
    FlatShade,
}

impl StageId {
    /// Returns the name of the stage.
    pub fn name(&self) -> &'static str {
        match self {
            StageId::Displace => "displace",
            StageId::Smooth => "smooth",
            StageId::FlatShade => "flat-shade",
        }
    }
}

/// Configuration shared by every stage of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StageConfig {
    /// Vertices per grid row.
    pub dimensions: usize,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self { dimensions: 11 }
    }
}

impl StageConfig {
    pub fn with_dimensions(dimensions: usize) -> Self {
        Self { dimensions }
    }
}

/// Errors that can occur during pipeline execution.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid mesh: {0}")]
    InvalidMesh(String),
    #[error("Stage '{0}' failed: {1}")]
    StageFailed(String, String),
    #[error("Missing dependency: stage '{0}' requires '{1}'")]
    MissingDependency(String, String),
    #[error("Stage '{0}' needs grid-ordered vertices, but flat shading already ran")]
    GridInvalidated(String),
}

/// Trait for implementing generation stages.
///
/// Each stage transforms the mesh in place. Stages run strictly in the order
/// they were added and only ever see the output of earlier stages.
pub trait GenerationStage: Send + Sync {
    /// Returns the unique identifier for this stage.
    fn id(&self) -> StageId;

    /// Returns a human-readable name for the stage.
    fn name(&self) -> &str;

    /// Returns the stage IDs that must be executed before this stage.
    fn dependencies(&self) -> &[StageId] {
        &[]
    }

    /// Whether the stage addresses vertices through the row-major grid.
    fn requires_grid(&self) -> bool {
        true
    }

    /// Executes the stage, modifying the mesh in place.
    ///
    /// # Arguments
    /// * `mesh` - The mesh to modify
    /// * `config` - Shared stage configuration
    fn execute(&self, mesh: &mut Mesh, config: &StageConfig) -> Result<(), PipelineError>;
}

/// Orchestrates generation stages into a single pass over a mesh.
pub struct Pipeline {
    stages: Vec<Box<dyn GenerationStage>>,
    config: StageConfig,
}

impl Pipeline {
    /// Creates a new empty pipeline with the given configuration.
    pub fn new(config: StageConfig) -> Self {
        Self {
            stages: Vec::new(),
            config,
        }
    }

    /// Builds the pipeline described by `config`.
    ///
    /// Stages are added in the fixed order displace, smooth, flat-shade, and
    /// only when enabled. The configuration is validated first.
    pub fn from_config(config: &MeshConfig) -> Result<Self, PipelineError> {
        config.validate()?;

        let mut pipeline = Pipeline::new(StageConfig::with_dimensions(config.dimensions));
        if config.terraforming {
            pipeline.add_stage(DisplaceStage::new(&config.seed, config.salt));
        }
        let mode = config.smoothing_mode();
        if mode.is_enabled() {
            pipeline.add_stage(SmoothStage::new(mode));
        }
        if config.flatshading {
            pipeline.add_stage(FlatShadeStage);
        }
        Ok(pipeline)
    }

    /// Adds a stage to the pipeline.
    pub fn add_stage<S: GenerationStage + 'static>(&mut self, stage: S) -> &mut Self {
        self.stages.push(Box::new(stage));
        self
    }

    /// Returns the number of stages in the pipeline.
    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    /// Returns the stage IDs in execution order.
    pub fn stage_ids(&self) -> Vec<StageId> {
        self.stages.iter().map(|s| s.id()).collect()
    }

    /// Executes all stages in order on the given mesh.
    pub fn run(&self, mesh: &mut Mesh) -> Result<(), PipelineError> {
        self.run_with_callbacks(mesh, |_, _, _| {}, |_, _, _| {})
    }

    /// Executes all stages with progress callbacks.
    ///
    /// # Arguments
    /// * `mesh` - The mesh to transform
    /// * `on_stage_start` - Called when each stage begins
    /// * `on_stage_complete` - Called when each stage finishes
    pub fn run_with_callbacks<F1, F2>(
        &self,
        mesh: &mut Mesh,
        mut on_stage_start: F1,
        mut on_stage_complete: F2,
    ) -> Result<(), PipelineError>
    where
        F1: FnMut(&str, usize, usize),
        F2: FnMut(&str, usize, usize),
    {
        mesh.validate().map_err(PipelineError::InvalidMesh)?;

        let total = self.stages.len();
        let mut completed: Vec<StageId> = Vec::new();
        let mut grid_intact = true;

        for (i, stage) in self.stages.iter().enumerate() {
            on_stage_start(stage.name(), i, total);

            for dep in stage.dependencies() {
                if !completed.contains(dep) {
                    return Err(PipelineError::MissingDependency(
                        stage.name().to_string(),
                        dep.name().to_string(),
                    ));
                }
            }
            if stage.requires_grid() && !grid_intact {
                return Err(PipelineError::GridInvalidated(stage.name().to_string()));
            }

            info!("stage {}/{}: {}", i + 1, total, stage.name());
            stage.execute(mesh, &self.config)?;
            completed.push(stage.id());
            if stage.id() == StageId::FlatShade {
                grid_intact = false;
            }

            on_stage_complete(stage.name(), i, total);
        }

        Ok(())
    }
}

/// Runs the pipeline described by `config` over `mesh` and returns the result.
pub fn process_mesh(mut mesh: Mesh, config: &MeshConfig) -> Result<Mesh, PipelineError> {
    Pipeline::from_config(config)?.run(&mut mesh)?;
    Ok(mesh)
}

/// Seeded height displacement stage.
pub struct DisplaceStage {
    pub seed: String,
    pub salt: f32,
}

impl DisplaceStage {
    pub fn new(seed: &str, salt: f32) -> Self {
        Self {
            seed: seed.to_string(),
            salt,
        }
    }
}

impl GenerationStage for DisplaceStage {
    fn id(&self) -> StageId {
        StageId::Displace
    }

    fn name(&self) -> &str {
        "Height Displacement"
    }

    fn execute(&self, mesh: &mut Mesh, _config: &StageConfig) -> Result<(), PipelineError> {
        let sequence = displace_mesh(mesh, &self.seed, self.salt);
        debug!(
            "displaced {} vertices (sequence length {}, salt {})",
            mesh.vertex_count(),
            sequence.len(),
            self.salt
        );
        Ok(())
    }
}

/// Grid smoothing stage running the selected filter.
pub struct SmoothStage {
    pub mode: SmoothingMode,
}

impl SmoothStage {
    pub fn new(mode: SmoothingMode) -> Self {
        Self { mode }
    }
}

impl GenerationStage for SmoothStage {
    fn id(&self) -> StageId {
        StageId::Smooth
    }

    fn name(&self) -> &str {
        match self.mode {
            SmoothingMode::None => "Smoothing (disabled)",
            SmoothingMode::Mean { .. } => "Mean Smoothing",
            SmoothingMode::Gaussian { .. } => "Gaussian Smoothing",
        }
    }

    fn execute(&self, mesh: &mut Mesh, config: &StageConfig) -> Result<(), PipelineError> {
        if config.dimensions == 0 {
            return Err(PipelineError::StageFailed(
                self.name().to_string(),
                "grid dimensions must be at least 1".to_string(),
            ));
        }

        match self.mode {
            SmoothingMode::None => return Ok(()),
            SmoothingMode::Mean { size } => {
                debug!("mean filter: window {}x{}, dim {}", 2 * size + 1, 2 * size + 1, config.dimensions);
            }
            SmoothingMode::Gaussian { sigma } => {
                let kernel = GaussianKernel::new(sigma);
                debug!("gaussian filter: sigma {}, width {}, dim {}", sigma, kernel.width(), config.dimensions);
            }
        }

        let field = HeightField::from_vertices(&mesh.vertices, config.dimensions);
        let smoothed = smooth(&field, self.mode);
        smoothed.write_to(&mut mesh.vertices);
        Ok(())
    }
}

/// Flat shading stage. Must be the last grid-touching stage.
pub struct FlatShadeStage;

impl GenerationStage for FlatShadeStage {
    fn id(&self) -> StageId {
        StageId::FlatShade
    }

    fn name(&self) -> &str {
        "Flat Shading"
    }

    fn requires_grid(&self) -> bool {
        false
    }

    fn execute(&self, mesh: &mut Mesh, _config: &StageConfig) -> Result<(), PipelineError> {
        let before = mesh.vertex_count();
        flat_shade(mesh);
        debug!("flat shading: {} -> {} vertices", before, mesh.vertex_count());
        Ok(())
    }
}
