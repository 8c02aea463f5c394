//! Error types for job domain validation and state transitions.

use super::{JobId, JobStatus};
use thiserror::Error;

/// Errors returned while constructing or mutating domain job values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobDomainError {
    /// The video provider identifier is unsupported.
    #[error("unsupported video provider: {0}")]
    InvalidVideoProvider(String),

    /// The length mode value is unsupported.
    #[error("unsupported length mode: {0}")]
    InvalidLengthMode(String),

    /// A run was requested while another run is already in flight.
    #[error("job {0} is already processing")]
    AlreadyRunning(JobId),

    /// The requested status change is not permitted by the state machine.
    #[error("invalid status transition for job {job_id}: {from} -> {to}")]
    InvalidStatusTransition {
        /// Job whose transition was rejected.
        job_id: JobId,
        /// Status at the time of the request.
        from: JobStatus,
        /// Requested target status.
        to: JobStatus,
    },

    /// A stage artifact was attached outside the processing status.
    #[error("job {job_id} cannot accept {artifact} while {status}")]
    ArtifactOutsideProcessing {
        /// Job that rejected the artifact.
        job_id: JobId,
        /// Name of the rejected artifact kind.
        artifact: &'static str,
        /// Status at the time of the attempt.
        status: JobStatus,
    },
}

/// Error returned while parsing job statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown job status: {0}")]
pub struct ParseJobStatusError(pub String);
