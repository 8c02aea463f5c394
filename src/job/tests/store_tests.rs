//! Contract tests for the in-memory job repository.

use std::sync::Arc;

use crate::job::{
    adapters::memory::InMemoryJobRepository,
    domain::{Job, JobStatus, LengthMode, NewJobData, Script, VideoProviderId},
    ports::{JobRepository, JobRepositoryError},
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

fn sample_job(niche: &str) -> Job {
    Job::create(
        NewJobData {
            niche: niche.to_owned(),
            length_mode: LengthMode::Auto,
            provider: VideoProviderId::Mock,
            channel: "main".to_owned(),
            trend_title: "AI changed my day".to_owned(),
            script: Script::from_paragraphs(
                LengthMode::Auto,
                "Hook.".to_owned(),
                "Body.".to_owned(),
                "Outro.".to_owned(),
            ),
        },
        &DefaultClock,
    )
}

#[fixture]
fn repository() -> InMemoryJobRepository {
    InMemoryJobRepository::new()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_then_find_and_list(repository: InMemoryJobRepository) {
    let first = sample_job("ai-lifestyle");
    let second = sample_job("fitness");

    repository.insert(&first).await.expect("first insert");
    repository.insert(&second).await.expect("second insert");

    let fetched = repository
        .find_by_id(first.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(first.clone()));

    let listed = repository.list().await.expect("list should succeed");
    assert_eq!(listed, vec![first, second]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn insert_rejects_duplicate_identifier(repository: InMemoryJobRepository) {
    let job = sample_job("ai-lifestyle");
    repository.insert(&job).await.expect("first insert");

    let result = repository.insert(&job).await;

    assert!(matches!(
        result,
        Err(JobRepositoryError::DuplicateJob(id)) if id == job.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn find_missing_job_returns_none(repository: InMemoryJobRepository) {
    let absent = sample_job("ai-lifestyle");
    let fetched = repository
        .find_by_id(absent.id())
        .await
        .expect("lookup should succeed");
    assert!(fetched.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_missing_job_returns_not_found(repository: InMemoryJobRepository) {
    let absent = sample_job("ai-lifestyle");

    let result = repository
        .update(absent.id(), Box::new(Job::begin_run))
        .await;

    assert!(matches!(
        result,
        Err(JobRepositoryError::NotFound(id)) if id == absent.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn update_applies_mutation_against_latest_value(repository: InMemoryJobRepository) {
    let job = sample_job("ai-lifestyle");
    repository.insert(&job).await.expect("insert");

    let updated = repository
        .update(job.id(), Box::new(Job::begin_run))
        .await
        .expect("update should succeed");

    assert_eq!(updated.status(), JobStatus::Processing);
    let fetched = repository
        .find_by_id(job.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, Some(updated));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_mutation_leaves_stored_record_unchanged(repository: InMemoryJobRepository) {
    let job = sample_job("ai-lifestyle");
    repository.insert(&job).await.expect("insert");
    repository
        .update(job.id(), Box::new(Job::begin_run))
        .await
        .expect("first run");

    // A second begin_run is rejected by the domain guard.
    let result = repository
        .update(job.id(), Box::new(Job::begin_run))
        .await;

    assert!(matches!(
        result,
        Err(JobRepositoryError::Domain(_))
    ));
    let fetched = repository
        .find_by_id(job.id())
        .await
        .expect("lookup should succeed")
        .expect("job should exist");
    assert_eq!(fetched.status(), JobStatus::Processing);
    assert_eq!(fetched.logs(), ["Job created", "Pipeline started"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cloned_handles_share_state(repository: InMemoryJobRepository) {
    let clone = repository.clone();
    let job = sample_job("ai-lifestyle");

    Arc::new(repository)
        .insert(&job)
        .await
        .expect("insert via first handle");

    let listed = clone.list().await.expect("list via clone");
    assert_eq!(listed.len(), 1);
}
