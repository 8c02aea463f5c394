//! Job aggregate root and its lifecycle state machine.

use super::{
    JobDomainError, JobId, LengthMode, NarrationArtifact, ParseJobStatusError, PublishReceipt,
    Script, VideoArtifact, VideoProviderId,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Job lifecycle status.
///
/// Valid transitions are `created -> processing`, `failed -> processing`
/// (explicit re-run) and `processing -> {completed, failed}`. `completed`
/// is terminal absolutely; `failed` is terminal for its run attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobStatus {
    /// Job record exists; no run attempt has started.
    Created,
    /// A pipeline run is in flight.
    Processing,
    /// All pipeline stages succeeded.
    Completed,
    /// A pipeline stage failed.
    Failed,
}

impl JobStatus {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Processing => "processing",
            Self::Completed => "completed",
            Self::Failed => "failed",
        }
    }

    /// Returns true when no further stage execution can occur without an
    /// explicit re-run.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Failed)
    }
}

impl TryFrom<&str> for JobStatus {
    type Error = ParseJobStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "created" => Ok(Self::Created),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            _ => Err(ParseJobStatusError(value.to_owned())),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parameter object for assembling a new job record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewJobData {
    /// Content niche requested by the caller.
    pub niche: String,
    /// Requested output length mode.
    pub length_mode: LengthMode,
    /// Selected video-generation backend.
    pub provider: VideoProviderId,
    /// Publishing channel name.
    pub channel: String,
    /// Resolved topic title.
    pub trend_title: String,
    /// Script synthesized at creation time.
    pub script: Script,
}

/// Job aggregate root.
///
/// Field names serialize in camelCase and round-trip unchanged through the
/// persisted snapshot. Optional artifact fields are omitted until their
/// pipeline stage attaches them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    id: JobId,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    completed_at: Option<DateTime<Utc>>,
    niche: String,
    length_mode: LengthMode,
    provider: VideoProviderId,
    channel: String,
    trend_title: String,
    script: Script,
    status: JobStatus,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    video: Option<VideoArtifact>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    narration: Option<NarrationArtifact>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    publish_result: Option<PublishReceipt>,
    logs: Vec<String>,
}

impl Job {
    /// Creates a new job in `created` status with its initial log entry.
    #[must_use]
    pub fn create(data: NewJobData, clock: &impl Clock) -> Self {
        Self {
            id: JobId::new(),
            created_at: clock.utc(),
            completed_at: None,
            niche: data.niche,
            length_mode: data.length_mode,
            provider: data.provider,
            channel: data.channel,
            trend_title: data.trend_title,
            script: data.script,
            status: JobStatus::Created,
            video: None,
            narration: None,
            publish_result: None,
            logs: vec!["Job created".to_owned()],
        }
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the completion timestamp, set only on terminal success.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the requested content niche.
    #[must_use]
    pub fn niche(&self) -> &str {
        &self.niche
    }

    /// Returns the requested length mode.
    #[must_use]
    pub const fn length_mode(&self) -> LengthMode {
        self.length_mode
    }

    /// Returns the selected video-generation backend.
    #[must_use]
    pub const fn provider(&self) -> VideoProviderId {
        self.provider
    }

    /// Returns the publishing channel name.
    #[must_use]
    pub fn channel(&self) -> &str {
        &self.channel
    }

    /// Returns the resolved topic title.
    #[must_use]
    pub fn trend_title(&self) -> &str {
        &self.trend_title
    }

    /// Returns the script synthesized at creation time.
    #[must_use]
    pub const fn script(&self) -> &Script {
        &self.script
    }

    /// Returns the current lifecycle status.
    #[must_use]
    pub const fn status(&self) -> JobStatus {
        self.status
    }

    /// Returns the video artifact, if its stage has run.
    #[must_use]
    pub const fn video(&self) -> Option<&VideoArtifact> {
        self.video.as_ref()
    }

    /// Returns the narration artifact, if its stage has run.
    #[must_use]
    pub const fn narration(&self) -> Option<&NarrationArtifact> {
        self.narration.as_ref()
    }

    /// Returns the publish receipt, if its stage has run.
    #[must_use]
    pub const fn publish_result(&self) -> Option<&PublishReceipt> {
        self.publish_result.as_ref()
    }

    /// Returns the append-only progress log.
    #[must_use]
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Enters `processing` and appends the "Pipeline started" log entry.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::AlreadyRunning`] when a run is already in
    /// flight, or [`JobDomainError::InvalidStatusTransition`] when the job
    /// has completed (completed jobs cannot be re-run).
    pub fn begin_run(&mut self) -> Result<(), JobDomainError> {
        match self.status {
            JobStatus::Processing => Err(JobDomainError::AlreadyRunning(self.id)),
            JobStatus::Completed => Err(JobDomainError::InvalidStatusTransition {
                job_id: self.id,
                from: self.status,
                to: JobStatus::Processing,
            }),
            JobStatus::Created | JobStatus::Failed => {
                self.status = JobStatus::Processing;
                self.logs.push("Pipeline started".to_owned());
                Ok(())
            }
        }
    }

    /// Attaches the video artifact and its log entry.
    ///
    /// A re-run overwrites the artifact left by an earlier failed attempt;
    /// log entries from that attempt are retained.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::ArtifactOutsideProcessing`] unless the job
    /// is `processing`.
    pub fn attach_video(&mut self, video: VideoArtifact) -> Result<(), JobDomainError> {
        self.ensure_processing("video")?;
        self.logs
            .push(format!("Video generated with provider {}", video.provider));
        self.video = Some(video);
        Ok(())
    }

    /// Attaches the narration artifact and its log entry.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::ArtifactOutsideProcessing`] unless the job
    /// is `processing`.
    pub fn attach_narration(&mut self, narration: NarrationArtifact) -> Result<(), JobDomainError> {
        self.ensure_processing("narration")?;
        self.logs
            .push(format!("Narration provider: {}", narration.provider));
        self.narration = Some(narration);
        Ok(())
    }

    /// Attaches the publish receipt and its log entry.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::ArtifactOutsideProcessing`] unless the job
    /// is `processing`.
    pub fn attach_publish_receipt(&mut self, receipt: PublishReceipt) -> Result<(), JobDomainError> {
        self.ensure_processing("publish result")?;
        self.logs.push(format!("Publish status: {}", receipt.status));
        self.publish_result = Some(receipt);
        Ok(())
    }

    /// Marks the run as completed and stamps `completed_at`.
    ///
    /// The timestamp is supplied by the orchestrating service's clock.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidStatusTransition`] unless the job
    /// is `processing`.
    pub fn complete(&mut self, completed_at: DateTime<Utc>) -> Result<(), JobDomainError> {
        if self.status != JobStatus::Processing {
            return Err(JobDomainError::InvalidStatusTransition {
                job_id: self.id,
                from: self.status,
                to: JobStatus::Completed,
            });
        }
        self.status = JobStatus::Completed;
        self.completed_at = Some(completed_at);
        Ok(())
    }

    /// Marks the run as failed and appends the failure log entry.
    ///
    /// Artifacts attached by earlier stages are retained for inspection.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidStatusTransition`] unless the job
    /// is `processing`.
    pub fn fail(&mut self, message: &str) -> Result<(), JobDomainError> {
        if self.status != JobStatus::Processing {
            return Err(JobDomainError::InvalidStatusTransition {
                job_id: self.id,
                from: self.status,
                to: JobStatus::Failed,
            });
        }
        self.status = JobStatus::Failed;
        self.logs.push(format!("Pipeline failed: {message}"));
        Ok(())
    }

    fn ensure_processing(&self, artifact: &'static str) -> Result<(), JobDomainError> {
        if self.status == JobStatus::Processing {
            Ok(())
        } else {
            Err(JobDomainError::ArtifactOutsideProcessing {
                job_id: self.id,
                artifact,
                status: self.status,
            })
        }
    }
}
