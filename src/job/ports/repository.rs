//! Repository port for durable job persistence and serialized mutation.

use crate::job::domain::{Job, JobDomainError, JobId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for job repository operations.
pub type JobRepositoryResult<T> = Result<T, JobRepositoryError>;

/// Read-modify-write closure applied under the store's write lock.
///
/// The closure receives the latest stored value; returning an error aborts
/// the update with no state change.
pub type JobMutation = Box<dyn FnOnce(&mut Job) -> Result<(), JobDomainError> + Send>;

/// Job persistence contract.
///
/// Implementations linearize all writes for a given job id: no write may be
/// based on a snapshot predating another write that has already committed,
/// and durability completes (or fails observably) before `insert`/`update`
/// return.
#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Returns every stored job. Callers impose their own ordering.
    async fn list(&self) -> JobRepositoryResult<Vec<Job>>;

    /// Finds a job by identifier.
    ///
    /// Returns `None` when the job does not exist.
    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>>;

    /// Stores a new job.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::DuplicateJob`] when the job ID already
    /// exists.
    async fn insert(&self, job: &Job) -> JobRepositoryResult<()>;

    /// Applies `mutation` to the latest stored value and persists the
    /// result as one atomic step, returning the updated job.
    ///
    /// # Errors
    ///
    /// Returns [`JobRepositoryError::NotFound`] when the job does not
    /// exist, [`JobRepositoryError::Domain`] when the mutation rejects the
    /// change (nothing is written), or
    /// [`JobRepositoryError::Persistence`] when the durable write fails
    /// (the stored state is left unchanged).
    async fn update(&self, id: JobId, mutation: JobMutation) -> JobRepositoryResult<Job>;
}

/// Errors returned by job repository implementations.
#[derive(Debug, Clone, Error)]
pub enum JobRepositoryError {
    /// A job with the same identifier already exists.
    #[error("duplicate job identifier: {0}")]
    DuplicateJob(JobId),

    /// The job was not found.
    #[error("job not found: {0}")]
    NotFound(JobId),

    /// The mutation rejected the change; no write occurred.
    #[error(transparent)]
    Domain(#[from] JobDomainError),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl JobRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
