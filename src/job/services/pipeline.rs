//! Stage execution for a single pipeline run.
//!
//! Provider failures and timeouts are contained here: they become a
//! `failed` transition on the job, never an error surfaced past the
//! service boundary. Store failures do escape, since they mean the
//! orchestrator itself is unhealthy.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use mockable::Clock;
use thiserror::Error;
use tracing::warn;

use crate::job::domain::Job;
use crate::job::ports::{
    JobRepository, JobRepositoryError, JobRepositoryResult, ProviderError, ProviderResult,
    ProviderSet,
};

/// Pipeline stage identifiers used for failure attribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Video generation.
    Video,
    /// Narration generation.
    Narration,
    /// Publishing.
    Publish,
}

impl PipelineStage {
    /// Returns the human-readable stage name used in logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "Video generation",
            Self::Narration => "Narration generation",
            Self::Publish => "Publishing",
        }
    }
}

impl fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Failure of one pipeline stage.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PipelineStageError {
    /// The stage collaborator reported an error.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The stage collaborator exceeded its deadline.
    #[error("{stage} timed out after {timeout_secs}s")]
    Timeout {
        /// Stage that exceeded the deadline.
        stage: PipelineStage,
        /// Deadline in whole seconds.
        timeout_secs: u64,
    },
}

/// Outcome split between contained stage failures and escaping store
/// failures.
enum RunError {
    Stage(PipelineStageError),
    Store(JobRepositoryError),
}

impl From<JobRepositoryError> for RunError {
    fn from(err: JobRepositoryError) -> Self {
        Self::Store(err)
    }
}

/// Drives a job already in `processing` through video, narration, and
/// publish, then writes the terminal state.
///
/// Returns the terminal job (completed or failed). The `Err` channel
/// carries store failures only.
pub(crate) async fn execute<R, C>(
    repository: &R,
    providers: &ProviderSet,
    stage_timeout: Duration,
    clock: &C,
    job: &Job,
) -> JobRepositoryResult<Job>
where
    R: JobRepository,
    C: Clock + Send + Sync,
{
    let job_id = job.id();
    match run_stages(repository, providers, stage_timeout, job).await {
        Ok(()) => {
            let completed_at = clock.utc();
            repository
                .update(job_id, Box::new(move |record| record.complete(completed_at)))
                .await
        }
        Err(RunError::Stage(stage_error)) => {
            warn!("pipeline for job {job_id} failed: {stage_error}");
            let message = stage_error.to_string();
            repository
                .update(job_id, Box::new(move |record| record.fail(&message)))
                .await
        }
        Err(RunError::Store(store_error)) => Err(store_error),
    }
}

async fn run_stages<R: JobRepository>(
    repository: &R,
    providers: &ProviderSet,
    stage_timeout: Duration,
    job: &Job,
) -> Result<(), RunError> {
    let job_id = job.id();
    let script = job.script().clone();

    let generator = providers.video_generator(job.provider()).ok_or_else(|| {
        RunError::Stage(PipelineStageError::Provider(ProviderError::NotConfigured(
            format!("no video backend registered for {}", job.provider()),
        )))
    })?;
    let video = bounded(
        PipelineStage::Video,
        stage_timeout,
        generator.generate(&script),
    )
    .await?;
    let video_url = video.url.clone();
    repository
        .update(job_id, Box::new(move |record| record.attach_video(video)))
        .await?;

    let narration = bounded(
        PipelineStage::Narration,
        stage_timeout,
        providers.narration().generate(&script),
    )
    .await?;
    repository
        .update(
            job_id,
            Box::new(move |record| record.attach_narration(narration)),
        )
        .await?;

    let receipt = bounded(
        PipelineStage::Publish,
        stage_timeout,
        providers
            .publisher()
            .publish(&video_url, script.full_text(), job.channel()),
    )
    .await?;
    repository
        .update(
            job_id,
            Box::new(move |record| record.attach_publish_receipt(receipt)),
        )
        .await?;

    Ok(())
}

async fn bounded<T>(
    stage: PipelineStage,
    stage_timeout: Duration,
    call: impl Future<Output = ProviderResult<T>>,
) -> Result<T, RunError> {
    match tokio::time::timeout(stage_timeout, call).await {
        Ok(result) => result.map_err(|err| RunError::Stage(PipelineStageError::Provider(err))),
        Err(_elapsed) => Err(RunError::Stage(PipelineStageError::Timeout {
            stage,
            timeout_secs: stage_timeout.as_secs(),
        })),
    }
}
