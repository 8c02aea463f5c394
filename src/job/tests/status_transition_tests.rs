//! Unit tests for run-status transitions.

use crate::job::domain::{
    Job, JobDomainError, JobStatus, LengthMode, NarrationArtifact, NewJobData, PublishReceipt,
    Script, VideoArtifact, VideoProviderId,
};
use chrono::Utc;
use eyre::{bail, ensure};
use mockable::{Clock, DefaultClock};
use rstest::{fixture, rstest};

#[fixture]
fn job() -> Job {
    Job::create(
        NewJobData {
            niche: "fitness".to_owned(),
            length_mode: LengthMode::Short,
            provider: VideoProviderId::Mock,
            channel: "main".to_owned(),
            trend_title: "Before vs After using AI tools".to_owned(),
            script: Script::from_paragraphs(
                LengthMode::Short,
                "Hook.".to_owned(),
                "Body.".to_owned(),
                "Outro.".to_owned(),
            ),
        },
        &DefaultClock,
    )
}

fn video_artifact() -> VideoArtifact {
    VideoArtifact {
        provider: "mock".to_owned(),
        url: "https://example.com/mock-videos/clip.mp4".to_owned(),
    }
}

fn narration_artifact() -> NarrationArtifact {
    NarrationArtifact {
        provider: "mock-voice".to_owned(),
        url: "https://example.com/mock-audio/narration.mp3".to_owned(),
    }
}

fn publish_receipt() -> PublishReceipt {
    PublishReceipt {
        status: "simulated".to_owned(),
        message: "simulated publish".to_owned(),
        share_url: None,
    }
}

#[rstest]
fn begin_run_enters_processing_and_logs(mut job: Job) -> eyre::Result<()> {
    job.begin_run()?;

    ensure!(job.status() == JobStatus::Processing);
    ensure!(job.logs() == ["Job created", "Pipeline started"]);
    Ok(())
}

#[rstest]
fn begin_run_while_processing_is_rejected_without_mutation(mut job: Job) -> eyre::Result<()> {
    job.begin_run()?;

    let result = job.begin_run();
    let expected = Err(JobDomainError::AlreadyRunning(job.id()));

    if result != expected {
        bail!("expected {expected:?}, got {result:?}");
    }
    ensure!(job.status() == JobStatus::Processing);
    ensure!(job.logs() == ["Job created", "Pipeline started"]);
    Ok(())
}

#[rstest]
fn full_stage_sequence_logs_in_execution_order(mut job: Job) -> eyre::Result<()> {
    job.begin_run()?;
    job.attach_video(video_artifact())?;
    job.attach_narration(narration_artifact())?;
    job.attach_publish_receipt(publish_receipt())?;
    job.complete(DefaultClock.utc())?;

    ensure!(job.status() == JobStatus::Completed);
    ensure!(job.completed_at().is_some());
    ensure!(
        job.logs()
            == [
                "Job created",
                "Pipeline started",
                "Video generated with provider mock",
                "Narration provider: mock-voice",
                "Publish status: simulated",
            ]
    );
    Ok(())
}

#[rstest]
fn complete_outside_processing_is_rejected(mut job: Job) {
    let result = job.complete(Utc::now());

    assert_eq!(
        result,
        Err(JobDomainError::InvalidStatusTransition {
            job_id: job.id(),
            from: JobStatus::Created,
            to: JobStatus::Completed,
        })
    );
    assert!(job.completed_at().is_none());
}

#[rstest]
fn fail_appends_failure_log_and_keeps_artifacts(mut job: Job) -> eyre::Result<()> {
    job.begin_run()?;
    job.attach_video(video_artifact())?;
    job.fail("Sora model not configured – set SORA_API_KEY in .env")?;

    ensure!(job.status() == JobStatus::Failed);
    ensure!(job.video().is_some());
    ensure!(job.completed_at().is_none());
    let last = job.logs().last().cloned().unwrap_or_default();
    ensure!(last == "Pipeline failed: Sora model not configured – set SORA_API_KEY in .env");
    Ok(())
}

#[rstest]
fn failed_job_can_begin_a_new_run(mut job: Job) -> eyre::Result<()> {
    job.begin_run()?;
    job.fail("boom")?;

    job.begin_run()?;

    ensure!(job.status() == JobStatus::Processing);
    // Earlier logs are retained; the new attempt appends its own marker.
    ensure!(
        job.logs()
            == [
                "Job created",
                "Pipeline started",
                "Pipeline failed: boom",
                "Pipeline started",
            ]
    );
    Ok(())
}

#[rstest]
fn completed_job_cannot_be_rerun(mut job: Job) -> eyre::Result<()> {
    job.begin_run()?;
    job.complete(DefaultClock.utc())?;

    let result = job.begin_run();
    let expected = Err(JobDomainError::InvalidStatusTransition {
        job_id: job.id(),
        from: JobStatus::Completed,
        to: JobStatus::Processing,
    });

    if result != expected {
        bail!("expected {expected:?}, got {result:?}");
    }
    ensure!(job.status() == JobStatus::Completed);
    Ok(())
}
