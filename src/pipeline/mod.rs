//! Pipeline module for orchestrating mesh generation stages.
//!
//! Provides a trait-based architecture for the displace, smooth and
//! flat-shade stages and a single entry point for hosts.

mod config;
mod stage;

pub use config::{ConfigError, MeshConfig};
pub use stage::{
    process_mesh, DisplaceStage, FlatShadeStage, GenerationStage, Pipeline, PipelineError,
    SmoothStage, StageConfig, StageId,
};
