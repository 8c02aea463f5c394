//! JSON-snapshot repository for durable job persistence.
//!
//! The whole store is one document, `{ "jobs": [...] }`, written to a
//! capability-scoped directory. All writers serialize on one async lock;
//! the durable write (temp file then rename) completes before a mutation
//! is visible to readers, so `list`/`get` never observe a partially
//! written record.

use async_trait::async_trait;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::warn;

use crate::job::{
    domain::{Job, JobId},
    ports::{JobMutation, JobRepository, JobRepositoryError, JobRepositoryResult},
};

/// On-disk snapshot document.
#[derive(Debug, Default, Serialize, Deserialize)]
struct JobsSnapshot {
    jobs: Vec<Job>,
}

#[derive(Debug, Default)]
struct SnapshotState {
    order: Vec<JobId>,
    jobs: HashMap<JobId, Job>,
}

impl SnapshotState {
    fn from_snapshot(snapshot: JobsSnapshot) -> Self {
        let mut state = Self::default();
        for job in snapshot.jobs {
            state.order.push(job.id());
            state.jobs.insert(job.id(), job);
        }
        state
    }

    fn ordered_jobs(&self) -> Vec<Job> {
        self.order
            .iter()
            .filter_map(|id| self.jobs.get(id).cloned())
            .collect()
    }
}

/// File-backed job repository persisting the whole store per write.
#[derive(Debug, Clone)]
pub struct JsonFileJobRepository {
    dir: Arc<Dir>,
    file_name: String,
    state: Arc<Mutex<SnapshotState>>,
}

impl JsonFileJobRepository {
    /// Opens the store backed by `file_name` inside `dir`.
    ///
    /// A missing or unreadable snapshot yields an empty store; corruption
    /// is logged, never fatal.
    #[must_use]
    pub fn open(dir: Dir, file_name: impl Into<String>) -> Self {
        let name = file_name.into();
        let snapshot = load_snapshot(&dir, &name);
        Self {
            dir: Arc::new(dir),
            file_name: name,
            state: Arc::new(Mutex::new(SnapshotState::from_snapshot(snapshot))),
        }
    }

    async fn write_payload(&self, payload: String) -> JobRepositoryResult<()> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        tokio::task::spawn_blocking(move || write_snapshot(&dir, &file_name, payload.as_bytes()))
            .await
            .map_err(JobRepositoryError::persistence)?
    }
}

fn load_snapshot(dir: &Dir, file_name: &str) -> JobsSnapshot {
    match dir.read_to_string(file_name) {
        Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|err| {
            warn!("job snapshot {file_name} unreadable, starting empty: {err}");
            JobsSnapshot::default()
        }),
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!("job snapshot {file_name} unreadable, starting empty: {err}");
            }
            JobsSnapshot::default()
        }
    }
}

fn render_payload(jobs: Vec<Job>) -> JobRepositoryResult<String> {
    serde_json::to_string_pretty(&JobsSnapshot { jobs }).map_err(JobRepositoryError::persistence)
}

fn write_snapshot(dir: &Dir, file_name: &str, payload: &[u8]) -> JobRepositoryResult<()> {
    let tmp_name = format!("{file_name}.tmp");
    let mut file = dir
        .create(&tmp_name)
        .map_err(JobRepositoryError::persistence)?;
    file.write_all(payload)
        .map_err(JobRepositoryError::persistence)?;
    file.sync_all().map_err(JobRepositoryError::persistence)?;
    drop(file);
    dir.rename(&tmp_name, dir, file_name)
        .map_err(JobRepositoryError::persistence)
}

#[async_trait]
impl JobRepository for JsonFileJobRepository {
    async fn list(&self) -> JobRepositoryResult<Vec<Job>> {
        let state = self.state.lock().await;
        Ok(state.ordered_jobs())
    }

    async fn find_by_id(&self, id: JobId) -> JobRepositoryResult<Option<Job>> {
        let state = self.state.lock().await;
        Ok(state.jobs.get(&id).cloned())
    }

    async fn insert(&self, job: &Job) -> JobRepositoryResult<()> {
        let mut state = self.state.lock().await;
        if state.jobs.contains_key(&job.id()) {
            return Err(JobRepositoryError::DuplicateJob(job.id()));
        }

        let mut candidate = state.ordered_jobs();
        candidate.push(job.clone());
        self.write_payload(render_payload(candidate)?).await?;

        state.order.push(job.id());
        state.jobs.insert(job.id(), job.clone());
        Ok(())
    }

    async fn update(&self, id: JobId, mutation: JobMutation) -> JobRepositoryResult<Job> {
        let mut state = self.state.lock().await;
        let stored = state
            .jobs
            .get(&id)
            .ok_or(JobRepositoryError::NotFound(id))?;

        // Mutate a draft so a rejected mutation or failed write leaves
        // both the file and the in-memory state untouched.
        let mut draft = stored.clone();
        mutation(&mut draft)?;

        let candidate = state
            .order
            .iter()
            .filter_map(|job_id| {
                if *job_id == id {
                    Some(draft.clone())
                } else {
                    state.jobs.get(job_id).cloned()
                }
            })
            .collect();
        self.write_payload(render_payload(candidate)?).await?;

        if let Some(slot) = state.jobs.get_mut(&id) {
            *slot = draft.clone();
        }
        Ok(draft)
    }
}
