//! End-to-end pipeline scenario against the durable JSON store.
//!
//! Exercises the full boundary surface: create a job from an automatic
//! trend lookup, run the pipeline with the mock backend, and verify the
//! terminal state, log ordering, and persisted snapshot.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::DefaultClock;

use autopublish::job::{
    adapters::json::JsonFileJobRepository,
    adapters::providers::{
        MockVideoGenerator, StubNarrationGenerator, TemplateScriptBuilder, TikTokPublisher,
    },
    domain::{JobId, JobStatus, TrendIdea, VideoProviderId},
    ports::{ProviderResult, ProviderSet, TrendSource, VideoGeneratorRegistry},
    services::{CreateJobRequest, JobLifecycleError, JobLifecycleService},
};

/// Trend source pinned to the scenario's single candidate.
struct ScenarioTrendSource;

#[async_trait]
impl TrendSource for ScenarioTrendSource {
    async fn fetch(&self, niche: &str) -> ProviderResult<Vec<TrendIdea>> {
        Ok(vec![TrendIdea {
            id: "trend-1".to_owned(),
            title: "AI changed my day".to_owned(),
            niche: niche.to_owned(),
        }])
    }
}

fn open_store_dir(path: &std::path::Path) -> Dir {
    let utf8 = path.to_str().expect("temp dir path should be UTF-8");
    Dir::open_ambient_dir(utf8, ambient_authority()).expect("temp dir should open")
}

fn scenario_service(
    repository: JsonFileJobRepository,
) -> JobLifecycleService<JsonFileJobRepository, DefaultClock> {
    let mut registry = VideoGeneratorRegistry::new();
    registry.register(VideoProviderId::Mock, Arc::new(MockVideoGenerator));
    let providers = ProviderSet::new(
        Arc::new(ScenarioTrendSource),
        Arc::new(TemplateScriptBuilder::new().expect("templates should parse")),
        registry,
        Arc::new(StubNarrationGenerator::new(None)),
        Arc::new(TikTokPublisher::new(None)),
    );
    JobLifecycleService::new(
        Arc::new(repository),
        Arc::new(providers),
        Arc::new(DefaultClock),
        Duration::from_secs(5),
    )
}

#[tokio::test(flavor = "multi_thread")]
async fn create_then_run_completes_with_ordered_logs() {
    let temp = tempfile::tempdir().expect("temp dir should be created");
    let repository = JsonFileJobRepository::open(open_store_dir(temp.path()), "data.json");
    let service = scenario_service(repository);

    let request = CreateJobRequest::new()
        .with_niche("ai-lifestyle")
        .with_length_mode("auto")
        .with_provider("mock")
        .with_auto_trend(true)
        .with_channel("main");
    let created = service
        .create_job(request)
        .await
        .expect("creation should succeed");

    assert_eq!(created.status(), JobStatus::Created);
    assert_eq!(created.trend_title(), "AI changed my day");
    assert_eq!(created.script().target_seconds(), 12);
    assert_eq!(created.logs(), ["Job created"]);

    let finished = service
        .run_job(created.id())
        .await
        .expect("run should succeed");

    assert_eq!(finished.status(), JobStatus::Completed);
    assert!(finished.completed_at().is_some());
    assert_eq!(
        finished.logs(),
        [
            "Job created",
            "Pipeline started",
            "Video generated with provider mock",
            "Narration provider: mock-voice",
            "Publish status: simulated",
        ]
    );

    let video = finished.video().expect("video should be attached");
    assert_eq!(video.provider, "mock");
    assert!(video.url.starts_with("https://example.com/mock-videos/"));

    let receipt = finished
        .publish_result()
        .expect("publish receipt should be attached");
    assert_eq!(receipt.status, "simulated");
    assert!(receipt.share_url.is_some());

    // The terminal state is what the store serves back.
    let fetched = service
        .get_job(finished.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(fetched, finished);

    // A fresh handle over the same directory sees the identical record.
    let reopened = JsonFileJobRepository::open(open_store_dir(temp.path()), "data.json");
    let reopened_service = scenario_service(reopened);
    let listed = reopened_service
        .list_jobs()
        .await
        .expect("list should succeed");
    assert_eq!(listed, vec![finished]);
}

#[tokio::test(flavor = "multi_thread")]
async fn unknown_ids_surface_not_found() {
    let temp = tempfile::tempdir().expect("temp dir should be created");
    let repository = JsonFileJobRepository::open(open_store_dir(temp.path()), "data.json");
    let service = scenario_service(repository);
    let absent = JobId::new();

    let get_result = service.get_job(absent).await;
    assert!(matches!(
        get_result,
        Err(JobLifecycleError::NotFound(id)) if id == absent
    ));

    let run_result = service.run_job(absent).await;
    assert!(matches!(
        run_result,
        Err(JobLifecycleError::NotFound(id)) if id == absent
    ));
}
