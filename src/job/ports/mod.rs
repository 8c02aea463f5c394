//! Port contracts for job lifecycle management.
//!
//! Ports define infrastructure-agnostic interfaces used by job services.

pub mod providers;
pub mod repository;

pub use providers::{
    NarrationGenerator, ProviderError, ProviderResult, ProviderSet, Publisher, ScriptBuilder,
    TrendSource, VideoGenerator, VideoGeneratorRegistry,
};
pub use repository::{JobMutation, JobRepository, JobRepositoryError, JobRepositoryResult};
