//! Provider ports for the pipeline stage collaborators.
//!
//! Each pipeline stage delegates to exactly one of these contracts. Real
//! vendor integrations, mock backends, and test doubles all satisfy the
//! same traits; which implementation is wired in is a configuration
//! concern, observable through the `provider`/`status` fields of the
//! returned records.

use crate::job::domain::{
    LengthMode, NarrationArtifact, PublishReceipt, Script, TrendIdea, VideoArtifact,
    VideoProviderId,
};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Result type for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Errors returned by stage collaborators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProviderError {
    /// The requested backend has no usable credentials.
    #[error("{0}")]
    NotConfigured(String),

    /// The upstream collaborator failed.
    #[error("{0}")]
    Upstream(String),
}

/// Source of trending topic candidates.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrendSource: Send + Sync {
    /// Fetches candidate topics for a niche, best first.
    async fn fetch(&self, niche: &str) -> ProviderResult<Vec<TrendIdea>>;
}

/// Synthesizes the narration script for a resolved topic.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScriptBuilder: Send + Sync {
    /// Builds the hook/body/outro script for the given topic and niche.
    async fn build(
        &self,
        title: &str,
        niche: &str,
        length_mode: LengthMode,
    ) -> ProviderResult<Script>;
}

/// Renders a video clip from a script.
#[async_trait]
pub trait VideoGenerator: Send + Sync {
    /// Generates a video for the script.
    async fn generate(&self, script: &Script) -> ProviderResult<VideoArtifact>;
}

/// Renders a narration audio track from a script.
#[async_trait]
pub trait NarrationGenerator: Send + Sync {
    /// Generates a narration track for the script.
    async fn generate(&self, script: &Script) -> ProviderResult<NarrationArtifact>;
}

/// Publishes a rendered video to its target channel.
#[async_trait]
pub trait Publisher: Send + Sync {
    /// Publishes the video with the given caption to the channel.
    async fn publish(
        &self,
        video_url: &str,
        caption: &str,
        channel: &str,
    ) -> ProviderResult<PublishReceipt>;
}

/// Lookup table of video generators keyed by backend identifier.
///
/// The pipeline engine resolves the job's provider through this table, so
/// registering a new backend never touches the engine.
#[derive(Clone, Default)]
pub struct VideoGeneratorRegistry {
    generators: HashMap<VideoProviderId, Arc<dyn VideoGenerator>>,
}

impl VideoGeneratorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a generator for a backend identifier, replacing any
    /// previous entry.
    pub fn register(&mut self, id: VideoProviderId, generator: Arc<dyn VideoGenerator>) {
        self.generators.insert(id, generator);
    }

    /// Resolves the generator registered for a backend identifier.
    #[must_use]
    pub fn resolve(&self, id: VideoProviderId) -> Option<Arc<dyn VideoGenerator>> {
        self.generators.get(&id).map(Arc::clone)
    }
}

/// Full provider wiring consumed by the pipeline engine.
#[derive(Clone)]
pub struct ProviderSet {
    trends: Arc<dyn TrendSource>,
    script_builder: Arc<dyn ScriptBuilder>,
    video_generators: VideoGeneratorRegistry,
    narration: Arc<dyn NarrationGenerator>,
    publisher: Arc<dyn Publisher>,
}

impl ProviderSet {
    /// Bundles one collaborator per stage.
    #[must_use]
    pub const fn new(
        trends: Arc<dyn TrendSource>,
        script_builder: Arc<dyn ScriptBuilder>,
        video_generators: VideoGeneratorRegistry,
        narration: Arc<dyn NarrationGenerator>,
        publisher: Arc<dyn Publisher>,
    ) -> Self {
        Self {
            trends,
            script_builder,
            video_generators,
            narration,
            publisher,
        }
    }

    /// Returns the trend source.
    #[must_use]
    pub fn trends(&self) -> &dyn TrendSource {
        self.trends.as_ref()
    }

    /// Returns the script builder.
    #[must_use]
    pub fn script_builder(&self) -> &dyn ScriptBuilder {
        self.script_builder.as_ref()
    }

    /// Resolves the video generator for a backend identifier.
    #[must_use]
    pub fn video_generator(&self, id: VideoProviderId) -> Option<Arc<dyn VideoGenerator>> {
        self.video_generators.resolve(id)
    }

    /// Returns the narration generator.
    #[must_use]
    pub fn narration(&self) -> &dyn NarrationGenerator {
        self.narration.as_ref()
    }

    /// Returns the publisher.
    #[must_use]
    pub fn publisher(&self) -> &dyn Publisher {
        self.publisher.as_ref()
    }
}
