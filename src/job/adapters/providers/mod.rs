//! Credential-switched provider adapters and their wiring.

mod narration;
mod publish;
mod script;
mod trends;
mod video;

pub use narration::StubNarrationGenerator;
pub use publish::TikTokPublisher;
pub use script::TemplateScriptBuilder;
pub use trends::{ExternalTrendSource, FallbackTrendSource, StaticTrendSource};
pub use video::{MockVideoGenerator, RunwayVideoGenerator, SoraVideoGenerator};

use std::sync::Arc;

use crate::config::PipelineConfig;
use crate::job::domain::VideoProviderId;
use crate::job::ports::{ProviderResult, ProviderSet, TrendSource, VideoGeneratorRegistry};

/// Wires one credential-switched adapter per stage from configuration.
///
/// Every known video backend is registered; each one decides at run time
/// whether its credentials make it usable.
///
/// # Errors
///
/// Returns a provider error when the script templates fail to parse.
pub fn provider_set_from_config(config: &PipelineConfig) -> ProviderResult<ProviderSet> {
    let trends: Arc<dyn TrendSource> = if config.trends.is_configured() {
        let url = config.trends.url.clone().unwrap_or_default();
        Arc::new(FallbackTrendSource::new(ExternalTrendSource::new(url)))
    } else {
        Arc::new(FallbackTrendSource::new(StaticTrendSource))
    };

    let mut video_generators = VideoGeneratorRegistry::new();
    video_generators.register(VideoProviderId::Mock, Arc::new(MockVideoGenerator));
    video_generators.register(
        VideoProviderId::Sora,
        Arc::new(SoraVideoGenerator::new(config.video.sora_api_key.clone())),
    );
    video_generators.register(
        VideoProviderId::Runway,
        Arc::new(RunwayVideoGenerator::new(
            config.video.runway_api_key.clone(),
        )),
    );

    Ok(ProviderSet::new(
        trends,
        Arc::new(TemplateScriptBuilder::new()?),
        video_generators,
        Arc::new(StubNarrationGenerator::new(config.narrator.api_key.clone())),
        Arc::new(TikTokPublisher::new(config.tiktok.access_token.clone())),
    ))
}
