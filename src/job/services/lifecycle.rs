//! Boundary-facing service for job creation, lookup, and pipeline runs.

use std::sync::Arc;
use std::time::Duration;

use mockable::Clock;
use thiserror::Error;
use tokio::time::timeout;
use tracing::{error, info};

use super::pipeline;
use crate::job::domain::{
    Job, JobDomainError, JobId, LengthMode, NewJobData, Script, VideoProviderId,
};
use crate::job::ports::{JobRepository, JobRepositoryError, ProviderSet};

/// Title used when automatic trend lookup returns no candidates.
const DEFAULT_TREND_TITLE: &str = "AI changed my day";

/// Request payload for creating a video job.
///
/// Defaults mirror the boundary layer's: niche "ai-lifestyle", auto
/// length, mock video backend, automatic trend lookup, channel "main".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateJobRequest {
    niche: String,
    length_mode: String,
    provider: String,
    auto_trend: bool,
    manual_title: Option<String>,
    channel: String,
}

impl CreateJobRequest {
    /// Creates a request with default parameters.
    #[must_use]
    pub fn new() -> Self {
        Self {
            niche: "ai-lifestyle".to_owned(),
            length_mode: "auto".to_owned(),
            provider: "mock".to_owned(),
            auto_trend: true,
            manual_title: None,
            channel: "main".to_owned(),
        }
    }

    /// Sets the content niche.
    #[must_use]
    pub fn with_niche(mut self, niche: impl Into<String>) -> Self {
        self.niche = niche.into();
        self
    }

    /// Sets the raw length-mode value; validated during creation.
    #[must_use]
    pub fn with_length_mode(mut self, length_mode: impl Into<String>) -> Self {
        self.length_mode = length_mode.into();
        self
    }

    /// Sets the raw video-backend identifier; validated during creation.
    #[must_use]
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = provider.into();
        self
    }

    /// Enables or disables automatic trend lookup.
    #[must_use]
    pub const fn with_auto_trend(mut self, auto_trend: bool) -> Self {
        self.auto_trend = auto_trend;
        self
    }

    /// Sets the manual topic title used when trend lookup is disabled.
    #[must_use]
    pub fn with_manual_title(mut self, manual_title: impl Into<String>) -> Self {
        self.manual_title = Some(manual_title.into());
        self
    }

    /// Sets the publishing channel.
    #[must_use]
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }
}

impl Default for CreateJobRequest {
    fn default() -> Self {
        Self::new()
    }
}

/// Service-level errors for job lifecycle operations.
#[derive(Debug, Clone, Error)]
pub enum JobLifecycleError {
    /// The creation request is malformed.
    #[error("invalid job request: {0}")]
    Validation(String),

    /// The job does not exist.
    #[error("job not found: {0}")]
    NotFound(JobId),

    /// A run is already in flight for this job.
    #[error("job {0} is already processing")]
    AlreadyRunning(JobId),

    /// Creation failed; the underlying cause is logged server-side.
    #[error("failed to create job")]
    CreationFailed,

    /// A domain rule rejected the requested transition.
    #[error(transparent)]
    Domain(JobDomainError),

    /// The store failed a durable operation.
    #[error(transparent)]
    Store(JobRepositoryError),
}

impl JobLifecycleError {
    fn from_repository(err: JobRepositoryError) -> Self {
        match err {
            JobRepositoryError::NotFound(id) => Self::NotFound(id),
            JobRepositoryError::Domain(JobDomainError::AlreadyRunning(id)) => {
                Self::AlreadyRunning(id)
            }
            JobRepositoryError::Domain(domain) => Self::Domain(domain),
            other => Self::Store(other),
        }
    }
}

/// Result type for job lifecycle service operations.
pub type JobLifecycleResult<T> = Result<T, JobLifecycleError>;

/// Job lifecycle orchestration service.
#[derive(Clone)]
pub struct JobLifecycleService<R, C>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    providers: Arc<ProviderSet>,
    clock: Arc<C>,
    stage_timeout: Duration,
}

impl<R, C> JobLifecycleService<R, C>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new job lifecycle service.
    ///
    /// `stage_timeout` bounds every provider call; expiry is treated as a
    /// stage failure.
    #[must_use]
    pub const fn new(
        repository: Arc<R>,
        providers: Arc<ProviderSet>,
        clock: Arc<C>,
        stage_timeout: Duration,
    ) -> Self {
        Self {
            repository,
            providers,
            clock,
            stage_timeout,
        }
    }

    /// Resolves the topic, synthesizes the script, and persists a new job
    /// in `created` status.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Validation`] for unknown provider or
    /// length-mode values, [`JobLifecycleError::CreationFailed`] when a
    /// collaborator fails (cause logged server-side, no partial job is
    /// persisted), or [`JobLifecycleError::Store`] when persistence fails.
    pub async fn create_job(&self, request: CreateJobRequest) -> JobLifecycleResult<Job> {
        let provider = VideoProviderId::try_from(request.provider.as_str())
            .map_err(|err| JobLifecycleError::Validation(err.to_string()))?;
        let length_mode = LengthMode::try_from(request.length_mode.as_str())
            .map_err(|err| JobLifecycleError::Validation(err.to_string()))?;

        let trend_title = self.resolve_title(&request).await?;
        let script = self
            .build_script(&trend_title, &request.niche, length_mode)
            .await?;

        let job = Job::create(
            NewJobData {
                niche: request.niche,
                length_mode,
                provider,
                channel: request.channel,
                trend_title,
                script,
            },
            &*self.clock,
        );
        self.repository
            .insert(&job)
            .await
            .map_err(JobLifecycleError::from_repository)?;
        info!("job {} created", job.id());
        Ok(job)
    }

    /// Returns every stored job.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::Store`] when the store read fails.
    pub async fn list_jobs(&self) -> JobLifecycleResult<Vec<Job>> {
        self.repository
            .list()
            .await
            .map_err(JobLifecycleError::from_repository)
    }

    /// Returns the job with the given identifier.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::NotFound`] for an unknown id.
    pub async fn get_job(&self, id: JobId) -> JobLifecycleResult<Job> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(JobLifecycleError::from_repository)?
            .ok_or(JobLifecycleError::NotFound(id))
    }

    /// Runs the full pipeline for a job and returns its terminal state.
    ///
    /// The caller awaits the final state: `completed` or `failed` are both
    /// `Ok` outcomes, since stage failures are job state rather than
    /// service errors.
    ///
    /// # Errors
    ///
    /// Returns [`JobLifecycleError::NotFound`] for an unknown id,
    /// [`JobLifecycleError::AlreadyRunning`] when a run is in flight,
    /// [`JobLifecycleError::Domain`] when the job has already completed,
    /// or [`JobLifecycleError::Store`] when a durable write fails.
    pub async fn run_job(&self, id: JobId) -> JobLifecycleResult<Job> {
        let started = self
            .repository
            .update(id, Box::new(Job::begin_run))
            .await
            .map_err(JobLifecycleError::from_repository)?;
        info!("pipeline started for job {id}");

        pipeline::execute(
            self.repository.as_ref(),
            &self.providers,
            self.stage_timeout,
            &*self.clock,
            &started,
        )
        .await
        .map_err(JobLifecycleError::from_repository)
    }

    async fn resolve_title(&self, request: &CreateJobRequest) -> JobLifecycleResult<String> {
        if !request.auto_trend {
            // Empty or missing manual titles pass through untouched.
            return Ok(request.manual_title.clone().unwrap_or_default());
        }

        let ideas = timeout(
            self.stage_timeout,
            self.providers.trends().fetch(&request.niche),
        )
        .await
        .map_err(|_elapsed| {
            error!("trend lookup timed out");
            JobLifecycleError::CreationFailed
        })?
        .map_err(|err| {
            error!("trend lookup failed: {err}");
            JobLifecycleError::CreationFailed
        })?;

        Ok(ideas
            .first()
            .map_or_else(|| DEFAULT_TREND_TITLE.to_owned(), |idea| idea.title.clone()))
    }

    async fn build_script(
        &self,
        title: &str,
        niche: &str,
        length_mode: LengthMode,
    ) -> JobLifecycleResult<Script> {
        timeout(
            self.stage_timeout,
            self.providers.script_builder().build(title, niche, length_mode),
        )
        .await
        .map_err(|_elapsed| {
            error!("script synthesis timed out");
            JobLifecycleError::CreationFailed
        })?
        .map_err(|err| {
            error!("script synthesis failed: {err}");
            JobLifecycleError::CreationFailed
        })
    }
}
