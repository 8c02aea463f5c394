//! In-memory repository for job lifecycle tests and non-durable embedding.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::job::{
    domain::{Job, JobId},
    ports::{JobMutation, JobRepository, JobRepositoryError, JobRepositoryResult},
};

/// Thread-safe in-memory job repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryJobRepository {
    state: Arc<RwLock<InMemoryJobState>>,
}

#[derive(Debug, Default)]
struct InMemoryJobState {
    order: Vec<JobId>,
    jobs: HashMap<JobId, Job>,
}

impl InMemoryJobRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> JobRepositoryError {
    JobRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl JobRepository for InMemoryJobRepository {
    async fn list(&self) -> JobRepositoryResult<Vec<Job>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .order
            .iter()
            .filter_map(|id| state.jobs.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.jobs.get(&id).cloned())
    }

    async fn insert(&self, job: &Job) -> JobRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.jobs.contains_key(&job.id()) {
            return Err(JobRepositoryError::DuplicateJob(job.id()));
        }
        state.order.push(job.id());
        state.jobs.insert(job.id(), job.clone());
        Ok(())
    }

    async fn update(&self, id: JobId, mutation: JobMutation) -> JobRepositoryResult<Job> {
        let mut state = self.state.write().map_err(lock_error)?;
        let stored = state
            .jobs
            .get_mut(&id)
            .ok_or(JobRepositoryError::NotFound(id))?;

        // Mutate a draft so a rejected mutation leaves the record untouched.
        let mut draft = stored.clone();
        mutation(&mut draft)?;
        *stored = draft.clone();
        Ok(draft)
    }
}
