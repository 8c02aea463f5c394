//! Application services for job lifecycle orchestration.

mod lifecycle;
mod pipeline;

pub use lifecycle::{
    CreateJobRequest, JobLifecycleError, JobLifecycleResult, JobLifecycleService,
};
pub use pipeline::{PipelineStage, PipelineStageError};
